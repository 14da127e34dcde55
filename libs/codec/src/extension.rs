//! Order extension codec.
//!
//! An extension carries up to eight offset-tracked variable-length segments
//! (asset suffixes, amount getters, predicate, permit, interaction hooks)
//! plus one untracked trailing custom-data segment. On the wire the tracked
//! segments are prefixed by a single 32-byte word holding eight cumulative
//! u32 byte offsets, offset `i` in bits `[32i, 32i+32)`. The all-empty
//! extension encodes to zero bytes.
//!
//! The keccak-256 of the encoded form is the extension's fingerprint; order
//! assembly embeds its low 160 bits in the order salt.

use types::{Address, U256, UINT_32_MAX};

use crate::bytes_builder::BytesBuilder;
use crate::bytes_iter::{BytesIter, Side};
use crate::error::{CodecError, CodecResult};
use crate::hash::keccak256_uint;
use crate::hexutil;
use crate::interaction::Interaction;

const TRACKED_SEGMENTS: usize = 8;

/// Optional variable-length payload segments attached to an order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extension {
    pub maker_asset_suffix: Vec<u8>,
    pub taker_asset_suffix: Vec<u8>,
    pub making_amount_data: Vec<u8>,
    pub taking_amount_data: Vec<u8>,
    pub predicate: Vec<u8>,
    pub maker_permit: Vec<u8>,
    pub pre_interaction: Vec<u8>,
    pub post_interaction: Vec<u8>,
    /// Trailing segment, not covered by the offset table
    pub custom_data: Vec<u8>,
}

impl Extension {
    /// The offset-tracked segments in wire order
    fn tracked(&self) -> [&[u8]; TRACKED_SEGMENTS] {
        [
            &self.maker_asset_suffix,
            &self.taker_asset_suffix,
            &self.making_amount_data,
            &self.taking_amount_data,
            &self.predicate,
            &self.maker_permit,
            &self.pre_interaction,
            &self.post_interaction,
        ]
    }

    /// True when every segment, custom data included, is empty
    pub fn is_empty(&self) -> bool {
        self.tracked().iter().all(|seg| seg.is_empty()) && self.custom_data.is_empty()
    }

    /// Offset table plus concatenated segments; empty extension encodes to
    /// zero bytes.
    pub fn encode(&self) -> Vec<u8> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut offsets = U256::zero();
        let mut cumulative = 0u64;
        for (i, segment) in self.tracked().iter().enumerate() {
            cumulative += segment.len() as u64;
            offsets = offsets | (U256::from(cumulative) << (32 * i));
        }

        let mut builder = BytesBuilder::new();
        let mut word = [0u8; 32];
        offsets.to_big_endian(&mut word);
        builder = builder.add_bytes(&word);
        for segment in self.tracked() {
            builder = builder.add_bytes(segment);
        }
        builder.add_bytes(&self.custom_data).into_bytes()
    }

    /// Wire form as a 0x-prefixed hex string; `"0x"` when empty.
    pub fn encode_hex(&self) -> String {
        hexutil::encode_hex(&self.encode(), true)
    }

    /// Reverses [`Extension::encode`].
    pub fn decode(bytes: &[u8]) -> CodecResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }

        let mut iter = BytesIter::new(bytes);
        let offsets = iter.next_uint256(Side::Front)?;

        let mut segments: [Vec<u8>; TRACKED_SEGMENTS] = Default::default();
        let mut consumed = 0u64;
        for (i, slot) in segments.iter_mut().enumerate() {
            let offset = ((offsets >> (32 * i)).low_u64()) & UINT_32_MAX;
            let length = offset.checked_sub(consumed).ok_or_else(|| {
                CodecError::format("extension offset table", hexutil::encode_hex(bytes, true))
            })?;
            *slot = iter.next_bytes(length as usize, Side::Front)?.to_vec();
            consumed = offset;
        }
        let custom_data = iter.rest().to_vec();

        let [maker_asset_suffix, taker_asset_suffix, making_amount_data, taking_amount_data, predicate, maker_permit, pre_interaction, post_interaction] =
            segments;
        Ok(Self {
            maker_asset_suffix,
            taker_asset_suffix,
            making_amount_data,
            taking_amount_data,
            predicate,
            maker_permit,
            pre_interaction,
            post_interaction,
            custom_data,
        })
    }

    pub fn decode_hex(bytes: &str) -> CodecResult<Self> {
        Self::decode(&hexutil::decode_hex("extension", bytes)?)
    }

    /// Keccak-256 fingerprint of the encoded form
    pub fn keccak256(&self) -> U256 {
        keccak256_uint(&self.encode())
    }
}

/// Fluent constructor for [`Extension`] values.
///
/// Hex-typed setters validate their input eagerly; address-carrying segments
/// (amount data, permit) are prefixed with the 20-byte address the protocol
/// expects to call.
#[derive(Debug, Clone, Default)]
pub struct ExtensionBuilder {
    extension: Extension,
}

impl ExtensionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maker_asset_suffix(mut self, suffix: &str) -> CodecResult<Self> {
        self.extension.maker_asset_suffix = hexutil::decode_hex("maker asset suffix", suffix)?;
        Ok(self)
    }

    pub fn with_taker_asset_suffix(mut self, suffix: &str) -> CodecResult<Self> {
        self.extension.taker_asset_suffix = hexutil::decode_hex("taker asset suffix", suffix)?;
        Ok(self)
    }

    /// Amount getter for the making side: `address ‖ extra data`.
    pub fn with_making_amount_data(mut self, address: &Address, data: &str) -> CodecResult<Self> {
        self.extension.making_amount_data = prefixed_with_address(address, "making amount data", data)?;
        Ok(self)
    }

    /// Amount getter for the taking side: `address ‖ extra data`.
    pub fn with_taking_amount_data(mut self, address: &Address, data: &str) -> CodecResult<Self> {
        self.extension.taking_amount_data = prefixed_with_address(address, "taking amount data", data)?;
        Ok(self)
    }

    pub fn with_predicate(mut self, predicate: &str) -> CodecResult<Self> {
        self.extension.predicate = hexutil::decode_hex("predicate", predicate)?;
        Ok(self)
    }

    /// Maker permit: the token being permitted followed by the permit call data.
    pub fn with_maker_permit(mut self, token_from: &Address, permit_data: &str) -> CodecResult<Self> {
        self.extension.maker_permit = prefixed_with_address(token_from, "permit data", permit_data)?;
        Ok(self)
    }

    pub fn with_pre_interaction(mut self, interaction: &Interaction) -> Self {
        self.extension.pre_interaction = interaction.encode();
        self
    }

    pub fn with_post_interaction(mut self, interaction: &Interaction) -> Self {
        self.extension.post_interaction = interaction.encode();
        self
    }

    pub fn with_custom_data(mut self, data: &str) -> CodecResult<Self> {
        self.extension.custom_data = hexutil::decode_hex("custom data", data)?;
        Ok(self)
    }

    pub fn build(self) -> Extension {
        self.extension
    }
}

fn prefixed_with_address(address: &Address, what: &'static str, data: &str) -> CodecResult<Vec<u8>> {
    Ok(BytesBuilder::new()
        .add_address(address)
        .add_bytes(&hexutil::decode_hex(what, data)?)
        .into_bytes())
}
