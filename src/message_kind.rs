use crate::common::*;

use strum_macros::{Display, EnumVariantNames};

/// Discriminant of a wire message. Exactly one kind describes any message,
/// and the set is closed: a token outside these three is unparseable.
#[derive(Clone, Copy, Debug, Display, EnumVariantNames, Eq, PartialEq)]
pub enum MessageKind {
  Request,
  Response,
  Error,
}
