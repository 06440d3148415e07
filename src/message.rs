use crate::common::*;

/// A single RPC wire message. Every message carries the identifier of the
/// node that sent it and a correlation identifier; the rest depends on the
/// variant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
  /// Asks the receiver to invoke a named procedure.
  Request {
    message_id: MessageId,
    node_id: NodeId,
    method: String,
    args: Dict,
  },
  /// Carries the return value of a completed procedure.
  Response {
    message_id: MessageId,
    node_id: NodeId,
    value: Primitive,
  },
  /// Reports a failure in place of a response.
  Error {
    message_id: MessageId,
    node_id: NodeId,
    exception: String,
    detail: String,
  },
}

impl Message {
  pub fn request(
    message_id: impl Into<MessageId>,
    node_id: impl Into<NodeId>,
    method: impl Into<String>,
    args: Dict,
  ) -> Self {
    Message::Request {
      message_id: message_id.into(),
      node_id: node_id.into(),
      method: method.into(),
      args,
    }
  }

  pub fn response(
    message_id: impl Into<MessageId>,
    node_id: impl Into<NodeId>,
    value: impl Into<Primitive>,
  ) -> Self {
    Message::Response {
      message_id: message_id.into(),
      node_id: node_id.into(),
      value: value.into(),
    }
  }

  pub fn error(
    message_id: impl Into<MessageId>,
    node_id: impl Into<NodeId>,
    exception: impl Into<String>,
    detail: impl Into<String>,
  ) -> Self {
    Message::Error {
      message_id: message_id.into(),
      node_id: node_id.into(),
      exception: exception.into(),
      detail: detail.into(),
    }
  }

  pub fn kind(&self) -> MessageKind {
    match self {
      Message::Request { .. } => MessageKind::Request,
      Message::Response { .. } => MessageKind::Response,
      Message::Error { .. } => MessageKind::Error,
    }
  }

  pub fn message_id(&self) -> &MessageId {
    match self {
      Message::Request { message_id, .. }
      | Message::Response { message_id, .. }
      | Message::Error { message_id, .. } => message_id,
    }
  }

  pub fn node_id(&self) -> &NodeId {
    match self {
      Message::Request { node_id, .. }
      | Message::Response { node_id, .. }
      | Message::Error { node_id, .. } => node_id,
    }
  }
}
