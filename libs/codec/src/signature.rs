//! EIP-2098 compact signature splitting.
//!
//! The router's EOA fill entrypoints take a 65-byte secp256k1 signature as
//! `(r, vs)` where `vs` folds the recovery bit into the high bit of `s`.

use crate::error::{CodecError, CodecResult};
use crate::hexutil;

/// Splits a 65-byte `r ‖ s ‖ v` signature into the compact `(r, vs)` pair.
///
/// `v` may be 0, 1, 27 or 28; anything else is malformed.
pub fn to_r_vs(signature: &str) -> CodecResult<([u8; 32], [u8; 32])> {
    let bytes = hexutil::decode_hex("signature", signature)?;
    if bytes.len() != 65 {
        return Err(CodecError::format("signature", signature));
    }

    let mut r = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    let mut vs = [0u8; 32];
    vs.copy_from_slice(&bytes[32..64]);

    let recovery = match bytes[64] {
        0 | 27 => false,
        1 | 28 => true,
        _ => return Err(CodecError::format("signature recovery byte", signature)),
    };
    if recovery {
        vs[0] |= 0x80;
    }
    Ok((r, vs))
}
