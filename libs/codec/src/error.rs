//! Codec-level errors for order encoding and validation.
//!
//! All validation in this crate is eager: constructors and setters fail
//! before any partially-built value becomes observable, and every error
//! names what was being decoded or packed when it happened.

use thiserror::Error;

/// Errors raised by the byte packing and order assembly layer
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not valid 0x-prefixed hex, or is otherwise malformed
    #[error("invalid {what}: {input}")]
    Format { what: &'static str, input: String },

    /// A value does not fit the bit width of its target field
    #[error("value {value} does not fit in {bits} bits ({what})")]
    Range {
        what: &'static str,
        value: String,
        bits: usize,
    },

    /// A protocol invariant was violated
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// Byte iterator underflow
    #[error("cannot consume {need} bytes, only {have} remain")]
    InsufficientData { need: usize, have: usize },

    /// Address parsing or conversion failure
    #[error(transparent)]
    Address(#[from] types::AddressError),

    /// ABI encoding or decoding failure
    #[error("abi: {0}")]
    Abi(#[from] ethabi::Error),
}

impl CodecError {
    pub fn format(what: &'static str, input: impl Into<String>) -> Self {
        Self::Format {
            what,
            input: input.into(),
        }
    }

    pub fn range(what: &'static str, value: impl Into<String>, bits: usize) -> Self {
        Self::Range {
            what,
            value: value.into(),
            bits,
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;
