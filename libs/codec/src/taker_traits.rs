//! Taker traits: per-fill taker preferences packed into one uint256 plus a
//! trailing args blob.
//!
//! High bits carry flags:
//! - 255 threshold refers to the maker amount
//! - 254 unwrap native
//! - 253 skip the maker's order permit
//! - 252 use permit2
//! - 251 args carry a receiver address
//!
//! Bits [224, 248) and [200, 224) hold the byte lengths of the extension and
//! interaction blobs inside `args`; bits [0, 185) hold the fill threshold.
//! The args blob is `receiver? ‖ extension ‖ interaction` and travels next to
//! the trait word in fill calldata.

use types::{Address, U256};

use crate::bits::{BitMask, BitOps};
use crate::bytes_builder::BytesBuilder;
use crate::error::CodecResult;
use crate::extension::Extension;
use crate::interaction::Interaction;

const MAKER_AMOUNT_FLAG: usize = 255;
const UNWRAP_NATIVE_FLAG: usize = 254;
const SKIP_ORDER_PERMIT_FLAG: usize = 253;
const USE_PERMIT2_FLAG: usize = 252;
const ARGS_HAS_RECEIVER_FLAG: usize = 251;

fn threshold_mask() -> BitMask {
    BitMask::span(0, 185)
}

fn args_interaction_length_mask() -> BitMask {
    BitMask::span(200, 224)
}

fn args_extension_length_mask() -> BitMask {
    BitMask::span(224, 248)
}

/// How the taker states the fill amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountMode {
    /// The amount passed to fill is the taker amount; threshold caps the
    /// maker amount from below.
    #[default]
    Taker,
    /// The amount passed to fill is the maker amount; threshold caps the
    /// taker amount from above.
    Maker,
}

/// Trait word and args blob ready to be placed into fill calldata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTakerTraits {
    pub traits: U256,
    pub args: Vec<u8>,
}

/// Bit-packed taker preferences for a single fill
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TakerTraits {
    flags: U256,
    receiver: Option<Address>,
    extension: Option<Extension>,
    interaction: Option<Interaction>,
}

impl TakerTraits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount_mode(&self) -> AmountMode {
        if self.flags.get_bit(MAKER_AMOUNT_FLAG) {
            AmountMode::Maker
        } else {
            AmountMode::Taker
        }
    }

    pub fn with_amount_mode(mut self, mode: AmountMode) -> Self {
        self.flags = self
            .flags
            .set_bit(MAKER_AMOUNT_FLAG, mode == AmountMode::Maker);
        self
    }

    pub fn is_native_unwrap_enabled(&self) -> bool {
        self.flags.get_bit(UNWRAP_NATIVE_FLAG)
    }

    pub fn enable_native_unwrap(mut self) -> Self {
        self.flags = self.flags.set_bit(UNWRAP_NATIVE_FLAG, true);
        self
    }

    pub fn disable_native_unwrap(mut self) -> Self {
        self.flags = self.flags.set_bit(UNWRAP_NATIVE_FLAG, false);
        self
    }

    pub fn skips_maker_permit(&self) -> bool {
        self.flags.get_bit(SKIP_ORDER_PERMIT_FLAG)
    }

    /// Skip the maker permit carried in the order extension (e.g. when it
    /// was already spent by an earlier fill).
    pub fn skip_order_permit(mut self) -> Self {
        self.flags = self.flags.set_bit(SKIP_ORDER_PERMIT_FLAG, true);
        self
    }

    pub fn is_permit2(&self) -> bool {
        self.flags.get_bit(USE_PERMIT2_FLAG)
    }

    pub fn enable_permit2(mut self) -> Self {
        self.flags = self.flags.set_bit(USE_PERMIT2_FLAG, true);
        self
    }

    pub fn disable_permit2(mut self) -> Self {
        self.flags = self.flags.set_bit(USE_PERMIT2_FLAG, false);
        self
    }

    /// Worst acceptable counter-amount for the fill, interpreted per
    /// [`TakerTraits::amount_mode`]; fails above 185 bits.
    pub fn with_threshold(mut self, threshold: U256) -> CodecResult<Self> {
        self.flags = self.flags.set_mask(&threshold_mask(), threshold)?;
        Ok(self)
    }

    pub fn threshold(&self) -> U256 {
        self.flags.get_mask(&threshold_mask())
    }

    /// Sends the taker's proceeds to `receiver` instead of the caller.
    pub fn with_receiver(mut self, receiver: Address) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = Some(interaction);
        self
    }

    /// Packs the trait word and assembles the args blob.
    ///
    /// The receiver flag and both length fields are recomputed here from the
    /// attached values, so stale settings cannot leak into calldata.
    pub fn encode(&self) -> CodecResult<EncodedTakerTraits> {
        let extension_bytes = self
            .extension
            .as_ref()
            .map(Extension::encode)
            .unwrap_or_default();
        let interaction_bytes = self
            .interaction
            .as_ref()
            .map(Interaction::encode)
            .unwrap_or_default();

        let mut traits = self
            .flags
            .set_bit(ARGS_HAS_RECEIVER_FLAG, self.receiver.is_some());
        traits = traits.set_mask(
            &args_extension_length_mask(),
            U256::from(extension_bytes.len()),
        )?;
        traits = traits.set_mask(
            &args_interaction_length_mask(),
            U256::from(interaction_bytes.len()),
        )?;

        let mut builder = BytesBuilder::new();
        if let Some(receiver) = &self.receiver {
            builder = builder.add_address(receiver);
        }
        let args = builder
            .add_bytes(&extension_bytes)
            .add_bytes(&interaction_bytes)
            .into_bytes();

        Ok(EncodedTakerTraits { traits, args })
    }
}
