use crate::common::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong turning wire bytes back into a message, or a
/// primitive mapping into wire bytes.
#[derive(Debug, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum Error {
  #[snafu(display("failed to decode wire bytes: {}", reason))]
  Decode { reason: String },
  #[snafu(display("failed to encode primitive mapping: {}", reason))]
  Encode { reason: String },
  #[snafu(display("message primitive is missing required header `{}`", header))]
  MissingHeader { header: Header },
  #[snafu(display("header `{}` is not valid UTF-8: {}", header, source))]
  NotUtf8 {
    header: Header,
    source: std::string::FromUtf8Error,
  },
  #[snafu(display("header `{}` holds {}, expected {}", header, found, expected))]
  UnexpectedKind {
    header: Header,
    expected: &'static str,
    found: &'static str,
  },
  #[snafu(display(
    "unknown message type token `{}`, expected one of: {}",
    String::from_utf8_lossy(token),
    MessageKind::VARIANTS.join(", ")
  ))]
  UnknownMessageType { token: Vec<u8> },
  #[snafu(display("wire bytes decoded to {}, expected a dictionary", found))]
  WireNotDict { found: &'static str },
}
