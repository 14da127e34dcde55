//! Consuming byte sequence iterator.
//!
//! Decodes fixed-width fields from either end of a byte slice, mirroring
//! [`crate::bytes_builder::BytesBuilder`]. Consuming more bytes than remain
//! fails with [`CodecError::InsufficientData`].

use types::{Address, U256};

use crate::error::{CodecError, CodecResult};
use crate::hexutil;

/// Which end of the remaining bytes to consume from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
}

/// Cursor over a byte slice that shrinks as fields are consumed
#[derive(Debug, Clone)]
pub struct BytesIter<'a> {
    data: &'a [u8],
}

impl<'a> BytesIter<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Remaining byte count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All unconsumed bytes; the iterator is left empty.
    pub fn rest(&mut self) -> &'a [u8] {
        std::mem::take(&mut self.data)
    }

    /// Consumes `n` bytes from the chosen end.
    pub fn next_bytes(&mut self, n: usize, side: Side) -> CodecResult<&'a [u8]> {
        if self.data.len() < n {
            return Err(CodecError::InsufficientData {
                need: n,
                have: self.data.len(),
            });
        }
        let chunk;
        match side {
            Side::Front => {
                (chunk, self.data) = self.data.split_at(n);
            }
            Side::Back => {
                (self.data, chunk) = self.data.split_at(self.data.len() - n);
            }
        }
        Ok(chunk)
    }

    /// Consumes `n` bytes and projects them as hex.
    pub fn next_hex(&mut self, n: usize, side: Side) -> CodecResult<String> {
        Ok(hexutil::encode_hex(self.next_bytes(n, side)?, true))
    }

    /// Consumes `n` bytes (up to 32) as a big-endian integer.
    pub fn next_uint(&mut self, n: usize, side: Side) -> CodecResult<U256> {
        if n > 32 {
            return Err(CodecError::range("field width", format!("{n} bytes"), 256));
        }
        Ok(U256::from_big_endian(self.next_bytes(n, side)?))
    }

    pub fn next_byte(&mut self, side: Side) -> CodecResult<u8> {
        Ok(self.next_bytes(1, side)?[0])
    }

    pub fn next_uint8(&mut self, side: Side) -> CodecResult<u8> {
        self.next_byte(side)
    }

    pub fn next_uint16(&mut self, side: Side) -> CodecResult<u16> {
        Ok(self.next_uint(2, side)?.low_u32() as u16)
    }

    pub fn next_uint24(&mut self, side: Side) -> CodecResult<u32> {
        Ok(self.next_uint(3, side)?.low_u32())
    }

    pub fn next_uint32(&mut self, side: Side) -> CodecResult<u32> {
        Ok(self.next_uint(4, side)?.low_u32())
    }

    pub fn next_uint64(&mut self, side: Side) -> CodecResult<u64> {
        Ok(self.next_uint(8, side)?.low_u64())
    }

    pub fn next_uint128(&mut self, side: Side) -> CodecResult<u128> {
        Ok(self.next_uint(16, side)?.low_u128())
    }

    pub fn next_uint160(&mut self, side: Side) -> CodecResult<U256> {
        self.next_uint(20, side)
    }

    pub fn next_uint256(&mut self, side: Side) -> CodecResult<U256> {
        self.next_uint(32, side)
    }

    /// Consumes 20 bytes as an address.
    pub fn next_address(&mut self, side: Side) -> CodecResult<Address> {
        Ok(Address::from_first_bytes(self.next_bytes(20, side)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn consumes_from_the_front() {
        let data = hex!("deadbeef");
        let mut iter = BytesIter::new(&data);
        assert_eq!(iter.next_byte(Side::Front).unwrap(), 0xde);
        assert_eq!(iter.next_byte(Side::Front).unwrap(), 0xad);
        assert_eq!(iter.next_uint16(Side::Front).unwrap(), 0xbeef);
        assert!(iter.is_empty());
    }

    #[test]
    fn consumes_from_the_back() {
        let data = hex!("0102030405");
        let mut iter = BytesIter::new(&data);
        assert_eq!(iter.next_uint16(Side::Back).unwrap(), 0x0405);
        assert_eq!(iter.next_byte(Side::Front).unwrap(), 0x01);
        assert_eq!(iter.rest(), hex!("0203"));
        assert!(iter.is_empty());
    }

    #[test]
    fn underflow_is_an_error() {
        let data = hex!("0102");
        let mut iter = BytesIter::new(&data);
        let err = iter.next_bytes(3, Side::Front).unwrap_err();
        match err {
            CodecError::InsufficientData { need, have } => {
                assert_eq!((need, have), (3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
        // failed reads leave the cursor untouched
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn reads_addresses() {
        let data = hex!("1111111254eeb25477b68fb85ed929f73a960582ff");
        let mut iter = BytesIter::new(&data);
        let addr = iter.next_address(Side::Front).unwrap();
        assert_eq!(addr.to_string(), "0x1111111254eeb25477b68fb85ed929f73a960582");
        assert_eq!(iter.rest(), [0xff]);
    }

    #[test]
    fn builder_output_round_trips() {
        use crate::bytes_builder::BytesBuilder;

        let bytes = BytesBuilder::new()
            .add_uint32(0xdeadbeefu64)
            .unwrap()
            .add_uint64(42u64)
            .unwrap()
            .into_bytes();
        let mut iter = BytesIter::new(&bytes);
        assert_eq!(iter.next_uint64(Side::Back).unwrap(), 42);
        assert_eq!(iter.next_uint32(Side::Front).unwrap(), 0xdeadbeef);
        assert!(iter.is_empty());
    }
}
