//! Growable byte sequence builder.
//!
//! Appends fixed-width fields (addresses, N-byte integers, raw bytes) into an
//! owned byte buffer. The mirror image of [`crate::bytes_iter::BytesIter`].
//! Fallible appenders consume and return the builder so chains abort on the
//! first invalid field.

use types::{Address, U256, UINT_160_MAX};

use crate::error::{CodecError, CodecResult};
use crate::hexutil;

/// A value being appended as an N-byte field: either pre-encoded hex of the
/// exact width, or an integer to be left-zero-padded into it.
#[derive(Debug, Clone)]
pub enum BytesArg {
    Hex(String),
    Uint(U256),
}

impl From<&str> for BytesArg {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_string())
    }
}

impl From<String> for BytesArg {
    fn from(hex: String) -> Self {
        Self::Hex(hex)
    }
}

impl From<U256> for BytesArg {
    fn from(value: U256) -> Self {
        Self::Uint(value)
    }
}

impl From<u64> for BytesArg {
    fn from(value: u64) -> Self {
        Self::Uint(U256::from(value))
    }
}

/// Builds an arbitrary byte sequence out of typed fields
#[derive(Debug, Clone, Default)]
pub struct BytesBuilder {
    data: Vec<u8>,
}

impl BytesBuilder {
    /// Starts from the empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing 0x-prefixed byte hex.
    pub fn from_hex(init: &str) -> CodecResult<Self> {
        Ok(Self {
            data: hexutil::decode_hex("initial bytes", init)?,
        })
    }

    /// Starts from the minimal big-endian encoding of `init`.
    pub fn from_uint(init: &U256) -> Self {
        Self {
            data: hexutil::u256_to_bytes(init),
        }
    }

    /// Current byte count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends a 20-byte address.
    pub fn add_address(mut self, address: &Address) -> Self {
        self.data.extend_from_slice(address.as_bytes());
        self
    }

    /// Appends an address given in numeric form; fails above 160 bits.
    pub fn add_address_uint(self, value: &U256) -> CodecResult<Self> {
        if *value > UINT_160_MAX {
            return Err(CodecError::range("address", format!("{value:#x}"), 160));
        }
        self.add_n_bytes(BytesArg::Uint(*value), 20)
    }

    /// Appends raw bytes.
    pub fn add_bytes(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Appends bytes given as 0x-prefixed hex.
    pub fn add_hex(mut self, bytes: &str) -> CodecResult<Self> {
        let decoded = hexutil::decode_hex("bytes", bytes)?;
        self.data.extend_from_slice(&decoded);
        Ok(self)
    }

    /// Appends `value` as exactly `n` bytes.
    ///
    /// A hex argument must describe exactly `n` bytes; an integer argument
    /// must fit in `n` bytes and is left-zero-padded.
    pub fn add_n_bytes(mut self, value: impl Into<BytesArg>, n: usize) -> CodecResult<Self> {
        match value.into() {
            BytesArg::Hex(hex) => {
                let decoded = hexutil::decode_hex("field bytes", &hex)?;
                if decoded.len() != n {
                    return Err(CodecError::format("field bytes length", hex));
                }
                self.data.extend_from_slice(&decoded);
            }
            BytesArg::Uint(value) => {
                if n < 32 {
                    let max = (U256::one() << (8 * n)) - 1;
                    if value > max {
                        return Err(CodecError::range(
                            "field value",
                            format!("{value:#x}"),
                            8 * n,
                        ));
                    }
                }
                let mut word = [0u8; 32];
                value.to_big_endian(&mut word);
                if n <= 32 {
                    self.data.extend_from_slice(&word[32 - n..]);
                } else {
                    self.data.extend_from_slice(&vec![0u8; n - 32]);
                    self.data.extend_from_slice(&word);
                }
            }
        }
        Ok(self)
    }

    pub fn add_byte(mut self, value: u8) -> Self {
        self.data.push(value);
        self
    }

    pub fn add_uint8(self, value: impl Into<BytesArg>) -> CodecResult<Self> {
        self.add_n_bytes(value, 1)
    }

    pub fn add_uint16(self, value: impl Into<BytesArg>) -> CodecResult<Self> {
        self.add_n_bytes(value, 2)
    }

    pub fn add_uint24(self, value: impl Into<BytesArg>) -> CodecResult<Self> {
        self.add_n_bytes(value, 3)
    }

    pub fn add_uint32(self, value: impl Into<BytesArg>) -> CodecResult<Self> {
        self.add_n_bytes(value, 4)
    }

    pub fn add_uint64(self, value: impl Into<BytesArg>) -> CodecResult<Self> {
        self.add_n_bytes(value, 8)
    }

    pub fn add_uint128(self, value: impl Into<BytesArg>) -> CodecResult<Self> {
        self.add_n_bytes(value, 16)
    }

    pub fn add_uint160(self, value: impl Into<BytesArg>) -> CodecResult<Self> {
        self.add_n_bytes(value, 20)
    }

    pub fn add_uint256(self, value: impl Into<BytesArg>) -> CodecResult<Self> {
        self.add_n_bytes(value, 32)
    }

    /// The accumulated bytes as a single integer; fails above 32 bytes.
    pub fn as_uint(&self) -> CodecResult<U256> {
        if self.data.len() > 32 {
            return Err(CodecError::range(
                "accumulated bytes",
                format!("{} bytes", self.data.len()),
                256,
            ));
        }
        Ok(U256::from_big_endian(&self.data))
    }

    /// The accumulated bytes as hex, optionally 0x-prefixed.
    pub fn as_hex(&self, prefixed: bool) -> String {
        hexutil::encode_hex(&self.data, prefixed)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn starts_empty() {
        let builder = BytesBuilder::new();
        assert_eq!(builder.len(), 0);
        assert_eq!(builder.as_hex(true), "0x");
    }

    #[test]
    fn appends_typed_fields() {
        let target: Address = "0x1111111254eeb25477b68fb85ed929f73a960582"
            .parse()
            .unwrap();
        let built = BytesBuilder::new()
            .add_address(&target)
            .add_uint8(0xffu64)
            .unwrap()
            .add_uint32(0xdeadbeefu64)
            .unwrap();
        assert_eq!(built.len(), 25);
        assert_eq!(
            built.as_hex(true),
            "0x1111111254eeb25477b68fb85ed929f73a960582ffdeadbeef"
        );
    }

    #[test]
    fn integer_fields_are_left_padded() {
        let built = BytesBuilder::new().add_uint32(0x1u64).unwrap();
        assert_eq!(built.into_bytes(), hex!("00000001"));
    }

    #[test]
    fn integer_overflow_is_rejected() {
        assert!(BytesBuilder::new().add_uint8(256u64).is_err());
        assert!(BytesBuilder::new().add_uint16(0x1_0000u64).is_err());
        assert!(BytesBuilder::new()
            .add_address_uint(&(UINT_160_MAX + U256::one()))
            .is_err());
    }

    #[test]
    fn hex_fields_must_match_width() {
        assert!(BytesBuilder::new().add_n_bytes("0x0102", 2).is_ok());
        assert!(BytesBuilder::new().add_n_bytes("0x0102", 3).is_err());
        assert!(BytesBuilder::new().add_n_bytes("0x010", 2).is_err());
    }

    #[test]
    fn as_uint_reads_big_endian() {
        let built = BytesBuilder::new().add_uint16(0xbeefu64).unwrap();
        assert_eq!(built.as_uint().unwrap(), U256::from(0xbeefu64));

        let long = BytesBuilder::new().add_bytes(&[0u8; 33]);
        assert!(long.as_uint().is_err());
    }

    #[test]
    fn from_uint_uses_minimal_even_encoding() {
        let builder = BytesBuilder::from_uint(&U256::from(0x1ffu64));
        assert_eq!(builder.as_hex(true), "0x01ff");
    }
}
