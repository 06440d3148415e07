use crate::common::*;

use bendy::{
  decoding::{self, FromBencode, Object},
  encoding::{self, SingleItemEncoder, ToBencode},
};

/// Nesting bound enforced by the default codec in both directions. Deep
/// enough for any real message, shallow enough that a hostile datagram
/// cannot recurse the decoder into the ground.
pub const MAX_DEPTH: usize = 16;

/// Serializes primitive mappings to and from raw datagram bytes. Separate
/// from message translation so either side can change independently.
pub trait Codec {
  fn encode(&self, primitive: &Dict) -> Result<Vec<u8>>;
  fn decode(&self, bytes: &[u8]) -> Result<Dict>;
}

/// The default byte-level wire format: bencode.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bencode;

impl Codec for Bencode {
  // bendy's errors do not implement `std::error::Error`, so they cannot ride
  // along as snafu sources. Carry the rendered reason instead.
  fn encode(&self, primitive: &Dict) -> Result<Vec<u8>> {
    Entries(primitive)
      .to_bencode()
      .map_err(|source| Error::Encode {
        reason: source.to_string(),
      })
  }

  fn decode(&self, bytes: &[u8]) -> Result<Dict> {
    let primitive = Primitive::from_bencode(bytes).map_err(|source| Error::Decode {
      reason: source.to_string(),
    })?;
    let found = primitive.describe();
    primitive.into_dict().context(error::WireNotDict { found })
  }
}

/// Borrowed-dict adapter so encoding a mapping never clones it.
struct Entries<'a>(&'a Dict);

impl<'a> ToBencode for Entries<'a> {
  const MAX_DEPTH: usize = MAX_DEPTH;

  fn encode(&self, encoder: SingleItemEncoder) -> Result<(), encoding::Error> {
    encoder.emit_dict(|mut dict| {
      for (key, value) in self.0 {
        dict.emit_pair(key, value)?;
      }
      Ok(())
    })
  }
}

impl ToBencode for Primitive {
  const MAX_DEPTH: usize = MAX_DEPTH;

  fn encode(&self, encoder: SingleItemEncoder) -> Result<(), encoding::Error> {
    match self {
      Primitive::Int(number) => encoder.emit_int(*number),
      Primitive::Bytes(bytes) => encoder.emit_bytes(bytes),
      Primitive::List(items) => encoder.emit_list(|list| {
        for item in items {
          list.emit(item)?;
        }
        Ok(())
      }),
      Primitive::Dict(entries) => encoder.emit_dict(|mut dict| {
        for (key, value) in entries {
          dict.emit_pair(key, value)?;
        }
        Ok(())
      }),
    }
  }
}

impl FromBencode for Primitive {
  const EXPECTED_RECURSION_DEPTH: usize = MAX_DEPTH;

  fn decode_bencode_object(object: Object) -> Result<Self, decoding::Error> {
    match object {
      Object::Integer(text) => {
        let number = text.parse().map_err(decoding::Error::malformed_content)?;
        Ok(Primitive::Int(number))
      }
      Object::Bytes(bytes) => Ok(Primitive::Bytes(bytes.to_vec())),
      Object::List(mut list) => {
        let mut items = Vec::new();
        while let Some(item) = list.next_object()? {
          items.push(Primitive::decode_bencode_object(item)?);
        }
        Ok(Primitive::List(items))
      }
      Object::Dict(mut dict) => {
        let mut entries = Dict::new();
        while let Some((key, value)) = dict.next_pair()? {
          entries.insert(key.to_vec(), Primitive::decode_bencode_object(value)?);
        }
        Ok(Primitive::Dict(entries))
      }
    }
  }
}
