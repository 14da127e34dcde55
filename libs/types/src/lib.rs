//! # Limit Order Protocol Types
//!
//! ## Purpose
//!
//! Pure data structures shared across the SDK:
//! - `Address` - checked 20-byte Ethereum address
//! - Protocol constants (field-width maxima, router deployments)
//! - `LimitOrderV4Struct` - the canonical 8-field on-chain order tuple
//! - `OrderInfo` - caller-facing order parameters
//!
//! ## What This Crate Does NOT Contain
//! - Encoding/decoding rules (belongs in `codec`)
//! - Network transport logic (belongs in `orderbook`)

pub mod address;
pub mod constants;
pub mod errors;
pub mod order;

pub use address::Address;
pub use constants::{
    limit_order_router, UINT_160_MAX, UINT_256_MAX, UINT_32_MAX, UINT_40_MAX, ZX,
};
pub use errors::AddressError;
pub use order::{LimitOrderV4Struct, OrderInfo};

// The ABI stack's 256-bit word, used for salts, amounts and trait words.
pub use ethabi::ethereum_types::U256;
