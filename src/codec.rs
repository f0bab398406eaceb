//! Byte-level helpers for transports built on top of the binder.
use bytes::{Bytes, BytesMut};
use prost::Message;
use prost_reflect::{DynamicMessage, MessageDescriptor};

use crate::error::Result;

/// Decode a payload into a dynamic message of the given type.
pub fn decode(desc: MessageDescriptor, buf: Bytes) -> Result<DynamicMessage> {
    let message = DynamicMessage::decode(desc, buf)?;
    Ok(message)
}

/// Encode a dynamic message into a byte buffer.
pub fn encode(message: &DynamicMessage) -> Result<Bytes> {
    let len = message.encoded_len();
    let mut buf = BytesMut::with_capacity(len);
    message.encode(&mut buf)?;
    Ok(buf.freeze())
}
