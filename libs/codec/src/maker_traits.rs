//! Maker traits: the maker's order preferences packed into one uint256.
//!
//! High bits carry flags:
//! - 255 no partial fills
//! - 254 allow multiple fills
//! - 253 unused
//! - 252 pre-interaction call
//! - 251 post-interaction call
//! - 250 check epoch manager
//! - 249 has extension
//! - 248 use permit2
//! - 247 unwrap native
//!
//! The low 200 bits pack four fields: allowed sender (low 10 address bytes,
//! bits [0, 80)), expiration timestamp (bits [80, 120)), nonce or epoch
//! (bits [120, 160)) and series (bits [160, 200)).

use types::{Address, U256};

use crate::bits::{BitMask, BitOps};
use crate::error::{CodecError, CodecResult};

const NO_PARTIAL_FILLS_FLAG: usize = 255;
const ALLOW_MULTIPLE_FILLS_FLAG: usize = 254;
const PRE_INTERACTION_CALL_FLAG: usize = 252;
const POST_INTERACTION_CALL_FLAG: usize = 251;
const NEED_CHECK_EPOCH_MANAGER_FLAG: usize = 250;
const HAS_EXTENSION_FLAG: usize = 249;
const USE_PERMIT2_FLAG: usize = 248;
const UNWRAP_NATIVE_FLAG: usize = 247;

fn allowed_sender_mask() -> BitMask {
    BitMask::span(0, 80)
}

fn expiration_mask() -> BitMask {
    BitMask::span(80, 120)
}

fn nonce_or_epoch_mask() -> BitMask {
    BitMask::span(120, 160)
}

fn series_mask() -> BitMask {
    BitMask::span(160, 200)
}

/// Bit-packed maker preferences for a limit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MakerTraits(U256);

impl MakerTraits {
    pub fn new(value: U256) -> Self {
        Self(value)
    }

    /// The raw trait word
    pub fn as_uint(&self) -> U256 {
        self.0
    }

    /// Low 10 bytes of the allowed sender as 20 unprefixed hex digits
    pub fn allowed_sender(&self) -> String {
        self.0.get_mask(&allowed_sender_mask()).to_padded_hex(20)
    }

    /// True when the order restricts who may fill it
    pub fn is_private(&self) -> bool {
        !self.0.get_mask(&allowed_sender_mask()).is_zero()
    }

    /// Restricts filling to `sender`, keyed by the low 10 bytes of its
    /// address.
    pub fn with_allowed_sender(mut self, sender: &Address) -> Self {
        let low_half = U256::from_big_endian(&sender.as_bytes()[10..]);
        self.0 = self.0.clear_mask(&allowed_sender_mask()) | low_half;
        self
    }

    /// Removes the sender restriction.
    pub fn with_any_sender(mut self) -> Self {
        self.0 = self.0.clear_mask(&allowed_sender_mask());
        self
    }

    /// Expiration timestamp in seconds, `None` when the order never expires
    pub fn expiration(&self) -> Option<u64> {
        let raw = self.0.get_mask(&expiration_mask()).low_u64();
        (raw != 0).then_some(raw)
    }

    /// Sets the expiration timestamp; fails above 40 bits.
    pub fn with_expiration(mut self, expiration: u64) -> CodecResult<Self> {
        self.0 = self
            .0
            .set_mask(&expiration_mask(), U256::from(expiration))?;
        Ok(self)
    }

    pub fn nonce_or_epoch(&self) -> u64 {
        self.0.get_mask(&nonce_or_epoch_mask()).low_u64()
    }

    /// Sets the nonce; fails above 40 bits.
    pub fn with_nonce(mut self, nonce: u64) -> CodecResult<Self> {
        self.0 = self.0.set_mask(&nonce_or_epoch_mask(), U256::from(nonce))?;
        Ok(self)
    }

    /// Enables epoch-manager invalidation for `series` at `epoch`.
    ///
    /// Only valid when both partial and multiple fills are allowed.
    pub fn with_epoch(self, series: u64, epoch: u64) -> CodecResult<Self> {
        self.with_series(series)?
            .enable_epoch_manager_check()?
            .with_nonce(epoch)
    }

    pub fn series(&self) -> u64 {
        self.0.get_mask(&series_mask()).low_u64()
    }

    /// Sets the series (the epoch sub-group); fails above 40 bits.
    pub fn with_series(mut self, series: u64) -> CodecResult<Self> {
        self.0 = self.0.set_mask(&series_mask(), U256::from(series))?;
        Ok(self)
    }

    pub fn has_extension(&self) -> bool {
        self.0.get_bit(HAS_EXTENSION_FLAG)
    }

    pub fn with_extension(mut self) -> Self {
        self.0 = self.0.set_bit(HAS_EXTENSION_FLAG, true);
        self
    }

    pub fn is_epoch_manager_enabled(&self) -> bool {
        self.0.get_bit(NEED_CHECK_EPOCH_MANAGER_FLAG)
    }

    fn enable_epoch_manager_check(mut self) -> CodecResult<Self> {
        if self.is_bit_invalidator_mode() {
            return Err(CodecError::invariant(
                "epoch manager requires both partial and multiple fills to be allowed",
            ));
        }
        self.0 = self.0.set_bit(NEED_CHECK_EPOCH_MANAGER_FLAG, true);
        Ok(self)
    }

    pub fn has_pre_interaction(&self) -> bool {
        self.0.get_bit(PRE_INTERACTION_CALL_FLAG)
    }

    pub fn enable_pre_interaction(mut self) -> Self {
        self.0 = self.0.set_bit(PRE_INTERACTION_CALL_FLAG, true);
        self
    }

    pub fn disable_pre_interaction(mut self) -> Self {
        self.0 = self.0.set_bit(PRE_INTERACTION_CALL_FLAG, false);
        self
    }

    pub fn has_post_interaction(&self) -> bool {
        self.0.get_bit(POST_INTERACTION_CALL_FLAG)
    }

    pub fn enable_post_interaction(mut self) -> Self {
        self.0 = self.0.set_bit(POST_INTERACTION_CALL_FLAG, true);
        self
    }

    pub fn disable_post_interaction(mut self) -> Self {
        self.0 = self.0.set_bit(POST_INTERACTION_CALL_FLAG, false);
        self
    }

    pub fn is_partial_fill_allowed(&self) -> bool {
        !self.0.get_bit(NO_PARTIAL_FILLS_FLAG)
    }

    pub fn allow_partial_fills(mut self) -> Self {
        self.0 = self.0.set_bit(NO_PARTIAL_FILLS_FLAG, false);
        self
    }

    pub fn disable_partial_fills(mut self) -> Self {
        self.0 = self.0.set_bit(NO_PARTIAL_FILLS_FLAG, true);
        self
    }

    pub fn is_multiple_fills_allowed(&self) -> bool {
        self.0.get_bit(ALLOW_MULTIPLE_FILLS_FLAG)
    }

    pub fn allow_multiple_fills(mut self) -> Self {
        self.0 = self.0.set_bit(ALLOW_MULTIPLE_FILLS_FLAG, true);
        self
    }

    pub fn disable_multiple_fills(mut self) -> Self {
        self.0 = self.0.set_bit(ALLOW_MULTIPLE_FILLS_FLAG, false);
        self
    }

    pub fn is_permit2(&self) -> bool {
        self.0.get_bit(USE_PERMIT2_FLAG)
    }

    pub fn enable_permit2(mut self) -> Self {
        self.0 = self.0.set_bit(USE_PERMIT2_FLAG, true);
        self
    }

    pub fn disable_permit2(mut self) -> Self {
        self.0 = self.0.set_bit(USE_PERMIT2_FLAG, false);
        self
    }

    pub fn is_native_unwrap_enabled(&self) -> bool {
        self.0.get_bit(UNWRAP_NATIVE_FLAG)
    }

    /// Unwrap the wrapped native token before sending funds to the maker.
    pub fn enable_native_unwrap(mut self) -> Self {
        self.0 = self.0.set_bit(UNWRAP_NATIVE_FLAG, true);
        self
    }

    pub fn disable_native_unwrap(mut self) -> Self {
        self.0 = self.0.set_bit(UNWRAP_NATIVE_FLAG, false);
        self
    }

    /// Fill mode where the contract invalidates orders by nonce bit instead
    /// of tracking remaining amounts: partial or multiple fills disallowed.
    pub fn is_bit_invalidator_mode(&self) -> bool {
        !(self.is_partial_fill_allowed() && self.is_multiple_fills_allowed())
    }
}
