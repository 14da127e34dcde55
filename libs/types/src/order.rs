//! Order data structures.
//!
//! `LimitOrderV4Struct` mirrors the on-chain `IOrderMixin.Order` tuple field
//! for field; its JSON form uses the camelCase names the orderbook API
//! expects. `OrderInfo` is the looser caller-facing input the codec
//! canonicalizes during order assembly.

use ethabi::ethereum_types::U256;
use serde::{Deserialize, Serialize};

use crate::address::Address;

/// The canonical 8-field order tuple the contract hashes and verifies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderV4Struct {
    #[serde(with = "uint_hex")]
    pub salt: U256,
    pub maker: Address,
    pub receiver: Address,
    pub maker_asset: Address,
    pub taker_asset: Address,
    #[serde(with = "uint_hex")]
    pub making_amount: U256,
    #[serde(with = "uint_hex")]
    pub taking_amount: U256,
    #[serde(with = "uint_hex")]
    pub maker_traits: U256,
}

/// Caller-supplied order parameters.
///
/// `salt` and `receiver` are optional: a missing salt is generated during
/// assembly, a missing (or maker-equal) receiver collapses to the zero
/// address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInfo {
    pub maker_asset: Address,
    pub taker_asset: Address,
    pub making_amount: U256,
    pub taking_amount: U256,
    pub maker: Address,
    pub salt: Option<U256>,
    pub receiver: Option<Address>,
}

/// Serde adapter for `U256` as 0x-prefixed hex strings
mod uint_hex {
    use ethabi::ethereum_types::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:#x}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let body = raw.strip_prefix("0x").unwrap_or(&raw);
        U256::from_str_radix(body, 16).map_err(serde::de::Error::custom)
    }
}
