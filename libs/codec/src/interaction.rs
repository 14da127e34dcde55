//! Interaction payloads: a target contract plus opaque call data.

use types::Address;

use crate::bytes_builder::BytesBuilder;
use crate::bytes_iter::{BytesIter, Side};
use crate::error::CodecResult;
use crate::hexutil;

/// A `(target, data)` pair encoded on the wire as `target ‖ data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub target: Address,
    pub data: Vec<u8>,
}

impl Interaction {
    pub fn new(target: Address, data: Vec<u8>) -> Self {
        Self { target, data }
    }

    /// First 20 bytes are the target, the rest is data.
    pub fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let mut iter = BytesIter::new(bytes);
        let target = iter.next_address(Side::Front)?;
        Ok(Self {
            target,
            data: iter.rest().to_vec(),
        })
    }

    pub fn decode_hex(bytes: &str) -> CodecResult<Self> {
        Self::decode(&hexutil::decode_hex("interaction", bytes)?)
    }

    pub fn encode(&self) -> Vec<u8> {
        BytesBuilder::new()
            .add_address(&self.target)
            .add_bytes(&self.data)
            .into_bytes()
    }

    pub fn encode_hex(&self) -> String {
        hexutil::encode_hex(&self.encode(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn encode_decode_round_trip() {
        let interaction = Interaction::new(
            "0x1111111254eeb25477b68fb85ed929f73a960582".parse().unwrap(),
            hex!("deadbeef").to_vec(),
        );
        assert_eq!(
            interaction.encode_hex(),
            "0x1111111254eeb25477b68fb85ed929f73a960582deadbeef"
        );
        assert_eq!(Interaction::decode(&interaction.encode()).unwrap(), interaction);
    }

    #[test]
    fn empty_data_is_allowed() {
        let interaction =
            Interaction::decode_hex("0x1111111254eeb25477b68fb85ed929f73a960582").unwrap();
        assert!(interaction.data.is_empty());
    }

    #[test]
    fn short_input_is_rejected() {
        assert!(Interaction::decode(&hex!("1234")).is_err());
    }
}
