use crate::common::*;

use strum_macros::Display;

/// The five slots of the primitive message schema. Every slot has a fixed
/// key on the wire; `Payload` and `Args` change meaning with the message
/// kind but never change key.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Header {
  #[strum(serialize = "type")]
  Type,
  #[strum(serialize = "msgID")]
  MsgId,
  #[strum(serialize = "nodeID")]
  NodeId,
  #[strum(serialize = "payload")]
  Payload,
  #[strum(serialize = "args")]
  Args,
}
