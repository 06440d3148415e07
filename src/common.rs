// stdlib types
pub(crate) use std::{
  collections::BTreeMap,
  fmt::{self, Debug, Display, Formatter},
};

// dependencies
pub(crate) use log::{debug, trace};
pub(crate) use snafu::{OptionExt, ResultExt, Snafu};
pub(crate) use strum::VariantNames;

// modules
pub(crate) use crate::error;

// functions
pub(crate) use crate::fmt_bytes::fmt_bytes;

// structs and enums
pub(crate) use crate::{
  error::{Error, Result},
  fmt_bytes::DebugBytes,
  header::Header,
  message::Message,
  message_id::MessageId,
  message_kind::MessageKind,
  node_id::NodeId,
  primitive::{Dict, Primitive},
};
