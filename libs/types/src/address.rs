//! Checked 20-byte Ethereum address.
//!
//! Wraps the ABI stack's `H160` with strict hex parsing and the handful of
//! conversions the order codec needs. Formatting is always lowercase and
//! 0x-prefixed; no EIP-55 checksumming is applied.

use std::fmt;
use std::str::FromStr;

use ethabi::ethereum_types::{H160, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::UINT_160_MAX;
use crate::errors::AddressError;

/// A validated 20-byte account or token address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(H160);

impl Address {
    pub fn new(inner: H160) -> Self {
        Self(inner)
    }

    /// The all-zeroes address
    pub fn zero() -> Self {
        Self(H160::zero())
    }

    /// The `0xeee...ee` placeholder for the chain's native currency
    pub fn native() -> Self {
        Self(H160::repeat_byte(0xee))
    }

    /// Builds an address from its numeric form.
    ///
    /// Fails when the value does not fit in 160 bits.
    pub fn from_uint(value: &U256) -> Result<Self, AddressError> {
        if *value > UINT_160_MAX {
            return Err(AddressError::ValueTooLarge);
        }
        let mut word = [0u8; 32];
        value.to_big_endian(&mut word);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word[12..]);
        Ok(Self(H160(bytes)))
    }

    /// Takes the first 20 bytes of `bytes` as an address.
    pub fn from_first_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() < 20 {
            return Err(AddressError::TooShort { got: bytes.len() });
        }
        Ok(Self(H160::from_slice(&bytes[..20])))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn inner(&self) -> H160 {
        self.0
    }

    /// Numeric form of the address (big-endian interpretation)
    pub fn to_uint(&self) -> U256 {
        U256::from_big_endian(self.0.as_bytes())
    }

    /// Lowercase hex without the `0x` prefix
    pub fn hex_no_prefix(&self) -> String {
        hex::encode(self.0.as_bytes())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_native(&self) -> bool {
        *self == Self::native()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AddressError::InvalidHex {
            input: s.to_string(),
        };
        let body = s.strip_prefix("0x").ok_or_else(invalid)?;
        if body.len() != 40 {
            return Err(invalid());
        }
        let bytes = hex::decode(body).map_err(|_| invalid())?;
        Ok(Self(H160::from_slice(&bytes)))
    }
}

impl From<H160> for Address {
    fn from(inner: H160) -> Self {
        Self(inner)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0.as_bytes()))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_lowercases() {
        let addr: Address = "0xdAC17F958D2ee523a2206206994597C13D831ec7"
            .parse()
            .unwrap();
        assert_eq!(addr.to_string(), "0xdac17f958d2ee523a2206206994597c13d831ec7");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("dac17f958d2ee523a2206206994597c13d831ec7"
            .parse::<Address>()
            .is_err());
        assert!("0x1234".parse::<Address>().is_err());
        assert!("0xzz0000000000000000000000000000000000000000"
            .parse::<Address>()
            .is_err());
    }

    #[test]
    fn from_uint_round_trips() {
        let addr = Address::from_uint(&U256::from(1337u64)).unwrap();
        assert_eq!(addr.to_string(), "0x0000000000000000000000000000000000000539");
        assert_eq!(addr.to_uint(), U256::from(1337u64));

        let too_big = UINT_160_MAX + U256::one();
        assert_eq!(
            Address::from_uint(&too_big),
            Err(AddressError::ValueTooLarge)
        );
    }

    #[test]
    fn zero_and_native() {
        assert!(Address::zero().is_zero());
        assert!(Address::native().is_native());
        assert_eq!(
            Address::native().to_string(),
            "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"
        );
    }

    #[test]
    fn serde_uses_hex_strings() {
        let addr: Address = "0x111111111117dc0aa78b770fa6a738034120c302"
            .parse()
            .unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x111111111117dc0aa78b770fa6a738034120c302\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
