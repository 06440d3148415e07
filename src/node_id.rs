use crate::common::*;

/// Identifier of the node a message came from. How identifiers are chosen
/// and verified is the overlay's business; here they are opaque bytes that
/// must survive translation untouched.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(Vec<u8>);

impl NodeId {
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  pub fn into_bytes(self) -> Vec<u8> {
    self.0
  }
}

impl From<Vec<u8>> for NodeId {
  fn from(bytes: Vec<u8>) -> Self {
    Self(bytes)
  }
}

impl From<&[u8]> for NodeId {
  fn from(bytes: &[u8]) -> Self {
    Self(bytes.to_vec())
  }
}

impl From<String> for NodeId {
  fn from(text: String) -> Self {
    Self(text.into_bytes())
  }
}

impl From<&str> for NodeId {
  fn from(text: &str) -> Self {
    Self(text.into())
  }
}

impl Display for NodeId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    fmt_bytes(f, &self.0)
  }
}

impl Debug for NodeId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "NodeId({})", self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use pretty_assertions::assert_eq;

  #[test]
  fn conversions_preserve_bytes() {
    assert_eq!(NodeId::from("node1").as_bytes(), b"node1");
    assert_eq!(NodeId::from(b"node1".to_vec()), NodeId::from("node1"));
    assert_eq!(NodeId::from(&b"node1"[..]).into_bytes(), b"node1".to_vec());
  }

  #[test]
  fn binary_identifiers_display_as_hex() {
    // real node ids are 160 random bits, not text
    let node_id = NodeId::from(vec![0x0f, 0x20, 0x9f]);
    assert_eq!(node_id.to_string(), "0f209f");
    assert_eq!(format!("{:?}", node_id), "NodeId(0f209f)");
  }
}
