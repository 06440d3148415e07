use crate::common::*;

// Default wire scheme
// ===================
//
// /\ a message on the wire is a dict with single-byte keys:
//
//      m[y] = type token         one of { q, r, e }
//      m[t] = msgID              correlates a reply with its request
//      m[n] = nodeID             identifier of the sending node
//      m[p] = payload            method name | return value | exception name
//
// /\ requests and errors carry one extra key:
//
//      m[a] = args               argument dict | exception detail
//
// /\ responses carry exactly the four common keys and nothing else
//
// /\ keys outside the schema are ignored on the way in, so the scheme can
//    grow without breaking old nodes

/// Translates between typed messages and their flat primitive mapping.
///
/// Implementations must be pure and stateless, and must form a bijection
/// over well-formed messages: `from_primitive(to_primitive(m))` rebuilds `m`
/// field for field, variant included. Requests and errors map to five
/// entries, responses to four.
pub trait MessageTranslator {
  /// Flatten `message` into its wire-ready mapping. Every constructed
  /// message has a complete mapping, so this cannot fail.
  fn to_primitive(&self, message: &Message) -> Dict;

  /// Rebuild a message from a decoded mapping, consuming it. Fails when the
  /// type token is missing or unrecognized, or when a slot the indicated
  /// variant requires is absent or holds the wrong shape of value.
  fn from_primitive(&self, primitive: Dict) -> Result<Message>;
}

/// The default wire scheme: single-byte keys, single-byte type tokens.
///
/// The eight constants below are the compatibility surface of the protocol.
/// Changing any of them cuts a node off from everyone still running the old
/// scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFormat;

impl DefaultFormat {
  /// Key of the type token slot.
  pub const TYPE: &'static [u8] = b"y";
  /// Key of the correlation identifier slot.
  pub const MSG_ID: &'static [u8] = b"t";
  /// Key of the sender identifier slot.
  pub const NODE_ID: &'static [u8] = b"n";
  /// Key of the variant's primary value slot.
  pub const PAYLOAD: &'static [u8] = b"p";
  /// Key of the variant's secondary value slot.
  pub const ARGS: &'static [u8] = b"a";

  /// Type token marking a request.
  pub const REQUEST: &'static [u8] = b"q";
  /// Type token marking a response.
  pub const RESPONSE: &'static [u8] = b"r";
  /// Type token marking an error.
  pub const ERROR: &'static [u8] = b"e";
}

impl MessageTranslator for DefaultFormat {
  fn to_primitive(&self, message: &Message) -> Dict {
    let mut primitive = Dict::new();

    primitive.insert(
      Self::MSG_ID.to_vec(),
      Primitive::Bytes(message.message_id().as_bytes().to_vec()),
    );
    primitive.insert(
      Self::NODE_ID.to_vec(),
      Primitive::Bytes(message.node_id().as_bytes().to_vec()),
    );

    match message {
      Message::Request { method, args, .. } => {
        primitive.insert(Self::TYPE.to_vec(), Primitive::Bytes(Self::REQUEST.to_vec()));
        primitive.insert(
          Self::PAYLOAD.to_vec(),
          Primitive::Bytes(method.clone().into_bytes()),
        );
        primitive.insert(Self::ARGS.to_vec(), Primitive::Dict(args.clone()));
      }
      Message::Response { value, .. } => {
        primitive.insert(
          Self::TYPE.to_vec(),
          Primitive::Bytes(Self::RESPONSE.to_vec()),
        );
        primitive.insert(Self::PAYLOAD.to_vec(), value.clone());
      }
      Message::Error {
        exception, detail, ..
      } => {
        primitive.insert(Self::TYPE.to_vec(), Primitive::Bytes(Self::ERROR.to_vec()));
        primitive.insert(
          Self::PAYLOAD.to_vec(),
          Primitive::Bytes(exception.clone().into_bytes()),
        );
        primitive.insert(
          Self::ARGS.to_vec(),
          Primitive::Bytes(detail.clone().into_bytes()),
        );
      }
    }

    primitive
  }

  fn from_primitive(&self, mut primitive: Dict) -> Result<Message> {
    let token = take_bytes(&mut primitive, Self::TYPE, Header::Type)?;

    let kind = if token == Self::REQUEST {
      MessageKind::Request
    } else if token == Self::RESPONSE {
      MessageKind::Response
    } else if token == Self::ERROR {
      MessageKind::Error
    } else {
      debug!(
        "rejecting message with unknown type token {:?}",
        DebugBytes(&token)
      );
      return error::UnknownMessageType { token }.fail();
    };

    let message_id = MessageId::from(take_bytes(&mut primitive, Self::MSG_ID, Header::MsgId)?);
    let node_id = NodeId::from(take_bytes(&mut primitive, Self::NODE_ID, Header::NodeId)?);

    let message = match kind {
      MessageKind::Request => Message::Request {
        message_id,
        node_id,
        method: take_text(&mut primitive, Self::PAYLOAD, Header::Payload)?,
        args: take_dict(&mut primitive, Self::ARGS, Header::Args)?,
      },
      MessageKind::Response => Message::Response {
        message_id,
        node_id,
        value: take(&mut primitive, Self::PAYLOAD, Header::Payload)?,
      },
      MessageKind::Error => Message::Error {
        message_id,
        node_id,
        exception: take_text(&mut primitive, Self::PAYLOAD, Header::Payload)?,
        detail: take_text(&mut primitive, Self::ARGS, Header::Args)?,
      },
    };

    trace!(
      "translated inbound {} message {}",
      message.kind(),
      message.message_id()
    );

    Ok(message)
  }
}

fn take(primitive: &mut Dict, key: &[u8], header: Header) -> Result<Primitive> {
  primitive
    .remove(key)
    .context(error::MissingHeader { header })
}

fn take_bytes(primitive: &mut Dict, key: &[u8], header: Header) -> Result<Vec<u8>> {
  let value = take(primitive, key, header)?;
  let found = value.describe();
  value.into_bytes().context(error::UnexpectedKind {
    header,
    expected: "a byte string",
    found,
  })
}

fn take_text(primitive: &mut Dict, key: &[u8], header: Header) -> Result<String> {
  String::from_utf8(take_bytes(primitive, key, header)?).context(error::NotUtf8 { header })
}

fn take_dict(primitive: &mut Dict, key: &[u8], header: Header) -> Result<Dict> {
  let value = take(primitive, key, header)?;
  let found = value.describe();
  value.into_dict().context(error::UnexpectedKind {
    header,
    expected: "a dictionary",
    found,
  })
}
