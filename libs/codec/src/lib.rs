//! # Limit Order Protocol v4 Codec
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer of the order SDK: everything needed
//! to assemble, encode and hash v4 limit orders off-chain:
//! - Bit-packed trait words (maker and taker preferences)
//! - Byte sequence builder / iterator primitives
//! - The offset-tracked extension codec and its salt binding
//! - Order assembly, canonicalization and EIP-712 hashing
//! - Router fill calldata construction
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → orderbook/
//!     ↑           ↓          ↓
//! Pure Data   Encoding    HTTP client
//! Structures  Hashing     Submission
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Wallet key management or signing (callers sign the typed data)
//! - Network transport (belongs in the orderbook crate)
//! - On-chain execution or gas estimation

pub mod amounts;
pub mod bits;
pub mod bytes_builder;
pub mod bytes_iter;
pub mod eip712;
pub mod error;
pub mod extension;
pub mod hash;
pub mod hexutil;
pub mod interaction;
pub mod maker_traits;
pub mod order;
pub mod rfq;
pub mod router;
pub mod signature;
pub mod taker_traits;

// Re-export key types for convenience
pub use amounts::{calc_making_amount, calc_taking_amount};
pub use bits::{BitMask, BitOps};
pub use bytes_builder::{BytesArg, BytesBuilder};
pub use bytes_iter::{BytesIter, Side};
pub use error::{CodecError, CodecResult};
pub use extension::{Extension, ExtensionBuilder};
pub use hash::{keccak256, keccak256_uint};
pub use interaction::Interaction;
pub use maker_traits::MakerTraits;
pub use order::{build_salt, verify_salt, LimitOrder};
pub use rfq::{new_rfq_order, RfqOrderOptions};
pub use router::RouterAbi;
pub use signature::to_r_vs;
pub use taker_traits::{AmountMode, EncodedTakerTraits, TakerTraits};
