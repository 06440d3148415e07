use kadwire::{
  Bencode, Codec, DefaultFormat, Dict, Error, Header, Message, MessageKind, MessageTranslator,
  Primitive, Result,
};

use pretty_assertions::assert_eq;

fn request_args() -> Dict {
  let mut args = Dict::new();
  args.insert("arg1".into(), "a string".into());
  args.insert("arg2".into(), 123.into());
  args
}

fn samples() -> Vec<Message> {
  vec![
    Message::request("rpc1", "node1", "rpcMethod", request_args()),
    Message::response("rpc2", "node2", "response"),
    Message::error("rpc3", "node3", "ValueError", "this is a test exception"),
  ]
}

fn exercise(translator: &dyn MessageTranslator) {
  for message in samples() {
    let primitive = translator.to_primitive(&message);

    let expected = match message.kind() {
      MessageKind::Response => 4,
      MessageKind::Request | MessageKind::Error => 5,
    };
    assert_eq!(primitive.len(), expected);

    let rebuilt = translator.from_primitive(primitive).unwrap();
    assert_eq!(rebuilt.kind(), message.kind());
    assert_eq!(rebuilt, message);
  }
}

#[test]
fn default_format_round_trips() {
  exercise(&DefaultFormat);
}

#[test]
fn verbose_format_round_trips() {
  exercise(&VerboseFormat);
}

#[test]
fn messages_survive_the_wire() {
  for message in samples() {
    let wire = Bencode.encode(&DefaultFormat.to_primitive(&message)).unwrap();
    let rebuilt = DefaultFormat
      .from_primitive(Bencode.decode(&wire).unwrap())
      .unwrap();
    assert_eq!(rebuilt, message);
  }
}

#[test]
fn translators_swap_behind_trait_objects() {
  let translators: Vec<Box<dyn MessageTranslator>> =
    vec![Box::new(DefaultFormat), Box::new(VerboseFormat)];
  let codec: &dyn Codec = &Bencode;

  for translator in &translators {
    for message in samples() {
      let wire = codec.encode(&translator.to_primitive(&message)).unwrap();
      let rebuilt = translator.from_primitive(codec.decode(&wire).unwrap()).unwrap();
      assert_eq!(rebuilt, message);
    }
  }
}

#[test]
fn request_wire_bytes_are_stable() {
  let request = Message::request("rpc1", "node1", "rpcMethod", request_args());
  let wire = Bencode.encode(&DefaultFormat.to_primitive(&request)).unwrap();
  assert_eq!(
    wire,
    b"d1:ad4:arg18:a string4:arg2i123ee1:n5:node11:p9:rpcMethod1:t4:rpc11:y1:qe".to_vec()
  );
}

#[test]
fn response_wire_bytes_are_stable() {
  let response = Message::response("rpc2", "node2", "response");
  let wire = Bencode.encode(&DefaultFormat.to_primitive(&response)).unwrap();
  assert_eq!(wire, b"d1:n5:node21:p8:response1:t4:rpc21:y1:re".to_vec());
}

#[test]
fn error_wire_bytes_are_stable() {
  let error = Message::error("rpc3", "node3", "ValueError", "this is a test exception");
  let wire = Bencode.encode(&DefaultFormat.to_primitive(&error)).unwrap();
  assert_eq!(
    wire,
    b"d1:a24:this is a test exception1:n5:node31:p10:ValueError1:t4:rpc31:y1:ee".to_vec()
  );
}

#[test]
fn unknown_type_token_survives_the_wire_as_an_error() {
  let mut primitive = DefaultFormat.to_primitive(&Message::response("rpc2", "node2", "ok"));
  primitive.insert(b"y".to_vec(), "z".into());

  let wire = Bencode.encode(&primitive).unwrap();
  let result = DefaultFormat.from_primitive(Bencode.decode(&wire).unwrap());
  assert!(matches!(result, Err(Error::UnknownMessageType { .. })));
}

#[test]
fn garbage_datagrams_are_rejected() {
  assert!(matches!(
    Bencode.decode(b"not bencode"),
    Err(Error::Decode { .. })
  ));
}

// A deliberately different scheme, to keep the translator contract honest:
// full-word keys, full-word tokens, same shape rules.
struct VerboseFormat;

const TYPE: &[u8] = b"type";
const MSG_ID: &[u8] = b"msgID";
const NODE_ID: &[u8] = b"nodeID";
const PAYLOAD: &[u8] = b"payload";
const ARGS: &[u8] = b"args";

const REQUEST: &[u8] = b"request";
const RESPONSE: &[u8] = b"response";
const ERROR: &[u8] = b"error";

impl MessageTranslator for VerboseFormat {
  fn to_primitive(&self, message: &Message) -> Dict {
    let mut primitive = Dict::new();

    primitive.insert(
      MSG_ID.to_vec(),
      Primitive::Bytes(message.message_id().as_bytes().to_vec()),
    );
    primitive.insert(
      NODE_ID.to_vec(),
      Primitive::Bytes(message.node_id().as_bytes().to_vec()),
    );

    match message {
      Message::Request { method, args, .. } => {
        primitive.insert(TYPE.to_vec(), Primitive::Bytes(REQUEST.to_vec()));
        primitive.insert(PAYLOAD.to_vec(), Primitive::Bytes(method.clone().into_bytes()));
        primitive.insert(ARGS.to_vec(), Primitive::Dict(args.clone()));
      }
      Message::Response { value, .. } => {
        primitive.insert(TYPE.to_vec(), Primitive::Bytes(RESPONSE.to_vec()));
        primitive.insert(PAYLOAD.to_vec(), value.clone());
      }
      Message::Error {
        exception, detail, ..
      } => {
        primitive.insert(TYPE.to_vec(), Primitive::Bytes(ERROR.to_vec()));
        primitive.insert(
          PAYLOAD.to_vec(),
          Primitive::Bytes(exception.clone().into_bytes()),
        );
        primitive.insert(ARGS.to_vec(), Primitive::Bytes(detail.clone().into_bytes()));
      }
    }

    primitive
  }

  fn from_primitive(&self, mut primitive: Dict) -> Result<Message> {
    let token = need_bytes(&mut primitive, TYPE, Header::Type)?;
    let message_id = need_bytes(&mut primitive, MSG_ID, Header::MsgId)?;
    let node_id = need_bytes(&mut primitive, NODE_ID, Header::NodeId)?;

    if token == REQUEST {
      let method = need_text(&mut primitive, PAYLOAD, Header::Payload)?;
      let value = need(&mut primitive, ARGS, Header::Args)?;
      let found = value.describe();
      let args = value.into_dict().ok_or(Error::UnexpectedKind {
        header: Header::Args,
        expected: "a dictionary",
        found,
      })?;
      Ok(Message::request(message_id, node_id, method, args))
    } else if token == RESPONSE {
      let value = need(&mut primitive, PAYLOAD, Header::Payload)?;
      Ok(Message::response(message_id, node_id, value))
    } else if token == ERROR {
      let exception = need_text(&mut primitive, PAYLOAD, Header::Payload)?;
      let detail = need_text(&mut primitive, ARGS, Header::Args)?;
      Ok(Message::error(message_id, node_id, exception, detail))
    } else {
      Err(Error::UnknownMessageType { token })
    }
  }
}

fn need(primitive: &mut Dict, key: &[u8], header: Header) -> Result<Primitive> {
  primitive
    .remove(key)
    .ok_or(Error::MissingHeader { header })
}

fn need_bytes(primitive: &mut Dict, key: &[u8], header: Header) -> Result<Vec<u8>> {
  let value = need(primitive, key, header)?;
  let found = value.describe();
  value.into_bytes().ok_or(Error::UnexpectedKind {
    header,
    expected: "a byte string",
    found,
  })
}

fn need_text(primitive: &mut Dict, key: &[u8], header: Header) -> Result<String> {
  String::from_utf8(need_bytes(primitive, key, header)?)
    .map_err(|source| Error::NotUtf8 { header, source })
}
