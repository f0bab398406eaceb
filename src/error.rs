//! Error type definitions for descriptor queries and bound-handler calls.
use std::result;

use prost;
use thiserror;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Descriptor set error: {0}")]
    Descriptor(#[from] prost_reflect::DescriptorError),

    #[error("Extension is not registered: {0}")]
    UnknownExtension(String),

    #[error("Message type is not registered: {type_name}, method: {method}")]
    TypeNotRegistered { type_name: String, method: String },

    #[error("Decode error: {0}")]
    DecodeError(#[from] prost::DecodeError),

    #[error("Encode error: {0}")]
    EncodeError(#[from] prost::EncodeError),

    #[error("Execution error: {0}")]
    ExecutionError(#[from] anyhow::Error),
}

pub type Result<T> = result::Result<T, Error>;
