//! Protocol-wide constants: field-width maxima and router deployments.

use ethabi::ethereum_types::{H160, U256};
use hex_literal::hex;

use crate::address::Address;

/// The empty byte string in wire form
pub const ZX: &str = "0x";

pub const UINT_32_MAX: u64 = 0xFFFF_FFFF;

/// Maximum value of the 40-bit expiration/nonce/series fields
pub const UINT_40_MAX: u64 = (1 << 40) - 1;

/// Maximum value representable in 160 bits (an address-sized word)
pub const UINT_160_MAX: U256 = U256([u64::MAX, u64::MAX, 0xFFFF_FFFF, 0]);

pub const UINT_256_MAX: U256 = U256([u64::MAX; 4]);

const LIMIT_ORDER_V4_ROUTER: [u8; 20] = hex!("111111125421ca6dc452d289314280a0f8842a65");
const LIMIT_ORDER_V4_ROUTER_ZKSYNC: [u8; 20] = hex!("6fd4383cb451173d5f9304f041c7bcbf27d561ff");

const ZKSYNC_CHAIN_ID: u64 = 324;

/// Limit order protocol v4 router deployment for `chain_id`.
///
/// zkSync Era has its own deployment; every other supported chain shares one
/// address.
pub fn limit_order_router(chain_id: u64) -> Address {
    if chain_id == ZKSYNC_CHAIN_ID {
        Address::new(H160(LIMIT_ORDER_V4_ROUTER_ZKSYNC))
    } else {
        Address::new(H160(LIMIT_ORDER_V4_ROUTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_constants() {
        assert_eq!(UINT_40_MAX, 0xFF_FFFF_FFFF);
        assert_eq!(UINT_160_MAX, (U256::one() << 160) - 1);
        assert_eq!(UINT_256_MAX, U256::MAX);
    }

    #[test]
    fn router_per_chain() {
        assert_eq!(
            limit_order_router(1).to_string(),
            "0x111111125421ca6dc452d289314280a0f8842a65"
        );
        assert_eq!(
            limit_order_router(324).to_string(),
            "0x6fd4383cb451173d5f9304f041c7bcbf27d561ff"
        );
        assert_eq!(limit_order_router(137), limit_order_router(1));
    }
}
