//! Bit-range descriptors and bit-field access on 256-bit words.
//!
//! Every packed field in the protocol (trait flags, expiration, nonce,
//! thresholds, length prefixes) is described by a [`BitMask`] and read or
//! written through [`BitOps`]. Operations never mutate in place; each returns
//! a new word.

use std::fmt;

use types::U256;

use crate::error::{CodecError, CodecResult};

/// A contiguous bit range `[start, end)` within a 256-bit word.
///
/// `BitMask::new(16, 32)` covers `0xffff0000`; `BitMask::bit(10)` covers the
/// single 10th bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitMask {
    /// Lowest covered bit, inclusive
    pub offset: usize,
    /// Unshifted mask of the covered width, `(1 << (end - start)) - 1`
    pub width_mask: U256,
}

impl BitMask {
    /// Describes bits `[start, end)`. Fails when the range is empty, inverted
    /// or extends beyond 256 bits.
    pub fn new(start: usize, end: usize) -> CodecResult<Self> {
        if start >= end || end > 256 {
            return Err(CodecError::range(
                "bit mask range",
                format!("[{start}, {end})"),
                256,
            ));
        }
        Ok(Self::span(start, end))
    }

    /// Single-bit mask `[n, n+1)`; `n` must be below 256.
    pub fn bit(n: usize) -> CodecResult<Self> {
        Self::new(n, n + 1)
    }

    /// Internal constructor for ranges known valid at the call site.
    pub(crate) fn span(start: usize, end: usize) -> Self {
        debug_assert!(start < end && end <= 256);
        let width = end - start;
        let width_mask = if width >= 256 {
            U256::MAX
        } else {
            (U256::one() << width) - 1
        };
        Self {
            offset: start,
            width_mask,
        }
    }

    /// Covered width in bits
    pub fn width(&self) -> usize {
        256 - self.width_mask.leading_zeros() as usize
    }

    /// The mask in word position, `width_mask << offset`
    pub fn to_uint(&self) -> U256 {
        self.width_mask << self.offset
    }
}

impl fmt::Display for BitMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.to_uint())
    }
}

/// Non-mutating bit and bit-field access on a 256-bit word
pub trait BitOps: Sized {
    fn get_bit(&self, n: usize) -> bool;
    fn set_bit(&self, n: usize, value: bool) -> Self;
    /// Extracts the field described by `mask`, shifted down to bit zero.
    fn get_mask(&self, mask: &BitMask) -> Self;
    /// Writes `value` into the field described by `mask`.
    ///
    /// Fails when `value` exceeds the mask width.
    fn set_mask(&self, mask: &BitMask, value: Self) -> CodecResult<Self>;
    /// Zeroes the field described by `mask`.
    fn clear_mask(&self, mask: &BitMask) -> Self;
    /// Lowercase hex without `0x`, left-zero-padded to `pad` digits.
    fn to_padded_hex(&self, pad: usize) -> String;
}

impl BitOps for U256 {
    fn get_bit(&self, n: usize) -> bool {
        self.bit(n)
    }

    fn set_bit(&self, n: usize, value: bool) -> Self {
        let bit = U256::one() << n;
        if value {
            *self | bit
        } else {
            *self & !bit
        }
    }

    fn get_mask(&self, mask: &BitMask) -> Self {
        (*self >> mask.offset) & mask.width_mask
    }

    fn set_mask(&self, mask: &BitMask, value: Self) -> CodecResult<Self> {
        if value > mask.width_mask {
            return Err(CodecError::range(
                "masked field",
                format!("{value:#x}"),
                mask.width(),
            ));
        }
        Ok(self.clear_mask(mask) | (value << mask.offset))
    }

    fn clear_mask(&self, mask: &BitMask) -> Self {
        *self & !mask.to_uint()
    }

    fn to_padded_hex(&self, pad: usize) -> String {
        let body = format!("{self:x}");
        if body.len() >= pad {
            body
        } else {
            let mut padded = "0".repeat(pad - body.len());
            padded.push_str(&body);
            padded
        }
    }
}
