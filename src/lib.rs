//! Wire-message model and translation for Kademlia-style DHT RPC.
//!
//! Two layers cooperate to put an RPC exchange on a datagram wire. A
//! [`MessageTranslator`] flattens a typed [`Message`] (request, response,
//! or error) into a [`Dict`], a flat mapping of byte-string keys to
//! wire-safe [`Primitive`] values, and rebuilds messages from mappings
//! received from the network. A [`Codec`] serializes mappings to raw bytes;
//! the default codec is bencode.
//!
//! Both layers are pure and stateless, so values can be shared across
//! threads and translated concurrently without synchronization. Sockets,
//! call tracking, and node identifier generation belong to the RPC layer
//! sitting above this crate.
//!
//! ```
//! use kadwire::{Bencode, Codec, DefaultFormat, Dict, Message, MessageTranslator};
//!
//! # fn main() -> kadwire::Result<()> {
//! let translator = DefaultFormat;
//! let codec = Bencode;
//!
//! let mut args = Dict::new();
//! args.insert("target".into(), "some node id".into());
//! let request = Message::request("rpc1", "node1", "findNode", args);
//!
//! let wire = codec.encode(&translator.to_primitive(&request))?;
//! let echoed = translator.from_primitive(codec.decode(&wire)?)?;
//! assert_eq!(echoed, request);
//! # Ok(())
//! # }
//! ```

#[cfg(test)]
#[macro_use]
mod assert_matches;

mod codec;
mod common;
mod error;
mod fmt_bytes;
mod header;
mod message;
mod message_id;
mod message_kind;
mod node_id;
mod primitive;
mod translator;

pub use crate::{
  codec::{Bencode, Codec, MAX_DEPTH},
  error::{Error, Result},
  header::Header,
  message::Message,
  message_id::MessageId,
  message_kind::MessageKind,
  node_id::NodeId,
  primitive::{Dict, Primitive},
  translator::{DefaultFormat, MessageTranslator},
};
