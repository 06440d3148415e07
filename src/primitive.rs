use crate::common::*;

/// A flat mapping from byte-string keys to wire-safe values. Translators
/// produce and consume these; codecs move them on and off the wire. Ordered
/// so encoding is deterministic.
pub type Dict = BTreeMap<Vec<u8>, Primitive>;

/// A single wire-safe value: exactly the shapes the wire encoding can carry,
/// nothing richer. Anything a message needs to say must flatten into these.
#[derive(Clone, Eq, PartialEq)]
pub enum Primitive {
  Int(i64),
  Bytes(Vec<u8>),
  List(Vec<Primitive>),
  Dict(Dict),
}

impl Primitive {
  /// Human name of this value's shape, for diagnostics.
  pub fn describe(&self) -> &'static str {
    match self {
      Primitive::Int(..) => "an integer",
      Primitive::Bytes(..) => "a byte string",
      Primitive::List(..) => "a list",
      Primitive::Dict(..) => "a dictionary",
    }
  }

  pub fn as_int(&self) -> Option<i64> {
    match self {
      Primitive::Int(number) => Some(*number),
      _ => None,
    }
  }

  pub fn as_bytes(&self) -> Option<&[u8]> {
    match self {
      Primitive::Bytes(bytes) => Some(bytes),
      _ => None,
    }
  }

  pub fn as_dict(&self) -> Option<&Dict> {
    match self {
      Primitive::Dict(entries) => Some(entries),
      _ => None,
    }
  }

  pub fn into_bytes(self) -> Option<Vec<u8>> {
    match self {
      Primitive::Bytes(bytes) => Some(bytes),
      _ => None,
    }
  }

  pub fn into_dict(self) -> Option<Dict> {
    match self {
      Primitive::Dict(entries) => Some(entries),
      _ => None,
    }
  }
}

impl From<i64> for Primitive {
  fn from(number: i64) -> Self {
    Primitive::Int(number)
  }
}

impl From<Vec<u8>> for Primitive {
  fn from(bytes: Vec<u8>) -> Self {
    Primitive::Bytes(bytes)
  }
}

impl From<&[u8]> for Primitive {
  fn from(bytes: &[u8]) -> Self {
    Primitive::Bytes(bytes.to_vec())
  }
}

impl From<String> for Primitive {
  fn from(text: String) -> Self {
    Primitive::Bytes(text.into_bytes())
  }
}

impl From<&str> for Primitive {
  fn from(text: &str) -> Self {
    Primitive::Bytes(text.into())
  }
}

impl From<Vec<Primitive>> for Primitive {
  fn from(items: Vec<Primitive>) -> Self {
    Primitive::List(items)
  }
}

impl From<Dict> for Primitive {
  fn from(entries: Dict) -> Self {
    Primitive::Dict(entries)
  }
}

impl Debug for Primitive {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Primitive::Int(number) => write!(f, "Int({})", number),
      Primitive::Bytes(bytes) => {
        write!(f, "Bytes(")?;
        fmt_bytes(f, bytes)?;
        write!(f, ")")
      }
      Primitive::List(items) => {
        write!(f, "List(")?;
        f.debug_list().entries(items).finish()?;
        write!(f, ")")
      }
      Primitive::Dict(entries) => {
        write!(f, "Dict(")?;
        f.debug_map()
          .entries(entries.iter().map(|(key, value)| (DebugBytes(key), value)))
          .finish()?;
        write!(f, ")")
      }
    }
  }
}
