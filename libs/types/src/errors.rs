//! Validation errors for address construction.

use thiserror::Error;

/// Errors raised when constructing an [`crate::Address`] from untrusted input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Input is not a 0x-prefixed 40-character hex string
    #[error("invalid address: {input}")]
    InvalidHex { input: String },

    /// Numeric value does not fit in 160 bits
    #[error("address value exceeds 160 bits")]
    ValueTooLarge,

    /// Byte source is shorter than an address
    #[error("need at least 20 bytes for an address, got {got}")]
    TooShort { got: usize },
}
