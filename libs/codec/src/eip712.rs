//! EIP-712 hashing for the v4 order struct.
//!
//! The signing domain is `("1inch Aggregation Router", "6", chain_id,
//! router)` with the router address resolved per chain. All eight order
//! fields are static ABI types, so the struct hash is a single
//! `keccak256(abi.encode(typehash, fields...))` with no nested hashing.
//! `build_typed_data` emits the eth_signTypedData_v4 JSON document for
//! external signers.

use ethabi::Token;
use serde_json::{json, Value};
use types::{limit_order_router, LimitOrderV4Struct};

use crate::hash::keccak256;

const DOMAIN_NAME: &str = "1inch Aggregation Router";
const DOMAIN_VERSION: &str = "6";

const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";
const ORDER_TYPE: &str = "Order(uint256 salt,address maker,address receiver,address makerAsset,\
                          address takerAsset,uint256 makingAmount,uint256 takingAmount,\
                          uint256 makerTraits)";

fn order_typehash() -> [u8; 32] {
    keccak256(ORDER_TYPE.as_bytes())
}

/// `keccak256(abi.encode(domain_typehash, name, version, chain_id, router))`
pub fn domain_separator(chain_id: u64) -> [u8; 32] {
    let encoded = ethabi::encode(&[
        Token::FixedBytes(keccak256(DOMAIN_TYPE.as_bytes()).to_vec()),
        Token::FixedBytes(keccak256(DOMAIN_NAME.as_bytes()).to_vec()),
        Token::FixedBytes(keccak256(DOMAIN_VERSION.as_bytes()).to_vec()),
        Token::Uint(chain_id.into()),
        Token::Address(limit_order_router(chain_id).inner()),
    ]);
    keccak256(&encoded)
}

/// Hash of the order struct alone, without the signing domain
pub fn struct_hash(order: &LimitOrderV4Struct) -> [u8; 32] {
    let encoded = ethabi::encode(&[
        Token::FixedBytes(order_typehash().to_vec()),
        Token::Uint(order.salt),
        Token::Address(order.maker.inner()),
        Token::Address(order.receiver.inner()),
        Token::Address(order.maker_asset.inner()),
        Token::Address(order.taker_asset.inner()),
        Token::Uint(order.making_amount),
        Token::Uint(order.taking_amount),
        Token::Uint(order.maker_traits),
    ]);
    keccak256(&encoded)
}

/// The digest the maker signs: `keccak256(0x1901 ‖ domain ‖ struct hash)`
pub fn order_hash(order: &LimitOrderV4Struct, chain_id: u64) -> [u8; 32] {
    let mut preimage = Vec::with_capacity(2 + 32 + 32);
    preimage.extend_from_slice(&[0x19, 0x01]);
    preimage.extend_from_slice(&domain_separator(chain_id));
    preimage.extend_from_slice(&struct_hash(order));
    keccak256(&preimage)
}

/// [`order_hash`] as a 0x-prefixed hex string
pub fn order_hash_hex(order: &LimitOrderV4Struct, chain_id: u64) -> String {
    format!("0x{}", hex::encode(order_hash(order, chain_id)))
}

/// eth_signTypedData_v4 document for `order` on `chain_id`
pub fn build_typed_data(order: &LimitOrderV4Struct, chain_id: u64) -> Value {
    json!({
        "primaryType": "Order",
        "types": {
            "EIP712Domain": [
                { "name": "name", "type": "string" },
                { "name": "version", "type": "string" },
                { "name": "chainId", "type": "uint256" },
                { "name": "verifyingContract", "type": "address" },
            ],
            "Order": [
                { "name": "salt", "type": "uint256" },
                { "name": "maker", "type": "address" },
                { "name": "receiver", "type": "address" },
                { "name": "makerAsset", "type": "address" },
                { "name": "takerAsset", "type": "address" },
                { "name": "makingAmount", "type": "uint256" },
                { "name": "takingAmount", "type": "uint256" },
                { "name": "makerTraits", "type": "uint256" },
            ],
        },
        "domain": {
            "name": DOMAIN_NAME,
            "version": DOMAIN_VERSION,
            "chainId": chain_id,
            "verifyingContract": limit_order_router(chain_id).to_string(),
        },
        "message": order,
    })
}
