//! Hex text helpers shared by the byte packing layer.
//!
//! Wire formats in this protocol are 0x-prefixed lowercase hex. "Bytes hex"
//! additionally requires whole bytes (an even digit count). `"0x"` on its own
//! denotes the empty byte string.

use types::{U256, ZX};

use crate::error::{CodecError, CodecResult};

/// True when `val` is `0x` followed by at least one hex digit
pub fn is_hex_string(val: &str) -> bool {
    match val.strip_prefix(ZX) {
        Some(body) => !body.is_empty() && body.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// True when `val` is valid hex describing whole bytes
pub fn is_hex_bytes(val: &str) -> bool {
    is_hex_string(val) && val.len() % 2 == 0
}

pub fn trim_0x(data: &str) -> &str {
    data.strip_prefix(ZX).unwrap_or(data)
}

pub fn add_0x(data: &str) -> String {
    if data.starts_with(ZX) {
        data.to_string()
    } else {
        format!("{ZX}{data}")
    }
}

/// Decodes 0x-prefixed byte hex; [`ZX`] alone yields an empty vector.
pub fn decode_hex(what: &'static str, val: &str) -> CodecResult<Vec<u8>> {
    let body = val
        .strip_prefix(ZX)
        .ok_or_else(|| CodecError::format(what, val))?;
    if body.len() % 2 != 0 {
        return Err(CodecError::format(what, val));
    }
    hex::decode(body).map_err(|_| CodecError::format(what, val))
}

/// Formats bytes as hex, optionally 0x-prefixed.
pub fn encode_hex(bytes: &[u8], prefixed: bool) -> String {
    let body = hex::encode(bytes);
    if prefixed {
        format!("{ZX}{body}")
    } else {
        body
    }
}

/// Parses a 0x-prefixed hex string into a 256-bit word.
pub fn parse_u256(what: &'static str, val: &str) -> CodecResult<U256> {
    if !is_hex_string(val) {
        return Err(CodecError::format(what, val));
    }
    U256::from_str_radix(trim_0x(val), 16).map_err(|_| CodecError::format(what, val))
}

/// Minimal big-endian byte representation of `value`, padded to whole bytes.
/// Zero encodes as a single zero byte.
pub fn u256_to_bytes(value: &U256) -> Vec<u8> {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    let skip = 32 - (value.bits().div_ceil(8)).max(1);
    word[skip..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_predicates() {
        assert!(is_hex_string("0xdeadbeef"));
        assert!(is_hex_string("0xABC"));
        assert!(!is_hex_string("0x"));
        assert!(!is_hex_string("deadbeef"));
        assert!(!is_hex_string("0xfg"));

        assert!(is_hex_bytes("0xdeadbeef"));
        assert!(!is_hex_bytes("0xabc"));
    }

    #[test]
    fn decode_accepts_empty_marker() {
        assert_eq!(decode_hex("data", "0x").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_hex("data", "0x0102").unwrap(), vec![1, 2]);
        assert!(decode_hex("data", "0x123").is_err());
        assert!(decode_hex("data", "1234").is_err());
    }

    #[test]
    fn u256_to_bytes_is_minimal_whole_bytes() {
        assert_eq!(u256_to_bytes(&U256::zero()), vec![0]);
        assert_eq!(u256_to_bytes(&U256::from(0x0fu64)), vec![0x0f]);
        assert_eq!(u256_to_bytes(&U256::from(0x1ffu64)), vec![0x01, 0xff]);
    }

    #[test]
    fn empty_byte_string_uses_the_wire_marker() {
        assert_eq!(encode_hex(&[], true), ZX);
        assert_eq!(add_0x(""), ZX);
        assert_eq!(trim_0x(ZX), "");
        assert_eq!(decode_hex("data", ZX).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn parse_u256_rejects_bad_input() {
        assert_eq!(parse_u256("word", "0xff").unwrap(), U256::from(255u64));
        assert!(parse_u256("word", "ff").is_err());
        assert!(parse_u256("word", "0x").is_err());
    }
}
