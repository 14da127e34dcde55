//! RFQ-style orders.
//!
//! An RFQ order is an ordinary limit order with a constrained trait word:
//! exactly one fill (partial allowed, multiple off), a mandatory nonce for
//! invalidation, a mandatory expiration, and never an extension.

use types::{Address, OrderInfo};

use crate::error::CodecResult;
use crate::extension::Extension;
use crate::maker_traits::MakerTraits;
use crate::order::LimitOrder;

/// Knobs an RFQ maker can set on top of the base order info
#[derive(Debug, Clone, Default)]
pub struct RfqOrderOptions {
    /// Invalidation nonce, at most 40 bits
    pub nonce: u64,
    /// Expiration timestamp in seconds, at most 40 bits
    pub expiration: u64,
    /// Restricts who may fill the order
    pub allowed_sender: Option<Address>,
    pub use_permit2: bool,
}

/// Builds a limit order with RFQ fill semantics.
pub fn new_rfq_order(info: OrderInfo, opts: RfqOrderOptions) -> CodecResult<LimitOrder> {
    let mut traits = MakerTraits::default()
        .allow_partial_fills()
        .disable_multiple_fills()
        .with_nonce(opts.nonce)?
        .with_expiration(opts.expiration)?;
    if let Some(sender) = &opts.allowed_sender {
        traits = traits.with_allowed_sender(sender);
    }
    if opts.use_permit2 {
        traits = traits.enable_permit2();
    }
    LimitOrder::new(info, traits, Extension::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::U256;

    fn sample_info() -> OrderInfo {
        OrderInfo {
            maker_asset: "0xdac17f958d2ee523a2206206994597c13d831ec7".parse().unwrap(),
            taker_asset: "0x111111111117dc0aa78b770fa6a738034120c302".parse().unwrap(),
            making_amount: U256::from(1_000_000u64),
            taking_amount: U256::from(1_000_000_000_000_000_000u128),
            maker: "0x00000000219ab540356cbb839cbe05303d7705fa".parse().unwrap(),
            salt: None,
            receiver: None,
        }
    }

    #[test]
    fn rfq_orders_fill_once() {
        let order = new_rfq_order(
            sample_info(),
            RfqOrderOptions {
                nonce: 7,
                expiration: 1_700_000_000,
                ..Default::default()
            },
        )
        .unwrap();
        let traits = order.maker_traits();
        assert!(traits.is_partial_fill_allowed());
        assert!(!traits.is_multiple_fills_allowed());
        assert!(traits.is_bit_invalidator_mode());
        assert_eq!(traits.nonce_or_epoch(), 7);
        assert_eq!(traits.expiration(), Some(1_700_000_000));
        assert!(!traits.has_extension());
        assert!(order.extension().is_empty());
    }

    #[test]
    fn optional_knobs() {
        let sender: Address = "0x1111111254eeb25477b68fb85ed929f73a960582".parse().unwrap();
        let order = new_rfq_order(
            sample_info(),
            RfqOrderOptions {
                nonce: 1,
                expiration: 1_700_000_000,
                allowed_sender: Some(sender),
                use_permit2: true,
            },
        )
        .unwrap();
        assert!(order.is_private());
        assert!(order.maker_traits().is_permit2());
    }

    #[test]
    fn wide_nonce_is_rejected() {
        let result = new_rfq_order(
            sample_info(),
            RfqOrderOptions {
                nonce: 1 << 41,
                expiration: 1_700_000_000,
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }
}
