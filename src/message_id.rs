use crate::common::*;

/// Correlation identifier linking a request to the response or error that
/// answers it. Opaque bytes chosen by the RPC layer; the translator carries
/// them verbatim in both directions.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MessageId(Vec<u8>);

impl MessageId {
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  pub fn into_bytes(self) -> Vec<u8> {
    self.0
  }
}

impl From<Vec<u8>> for MessageId {
  fn from(bytes: Vec<u8>) -> Self {
    Self(bytes)
  }
}

impl From<&[u8]> for MessageId {
  fn from(bytes: &[u8]) -> Self {
    Self(bytes.to_vec())
  }
}

impl From<String> for MessageId {
  fn from(text: String) -> Self {
    Self(text.into_bytes())
  }
}

impl From<&str> for MessageId {
  fn from(text: &str) -> Self {
    Self(text.into())
  }
}

impl Display for MessageId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    fmt_bytes(f, &self.0)
  }
}

impl Debug for MessageId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "MessageId({})", self)
  }
}
