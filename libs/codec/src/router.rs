//! Aggregation router fill calldata.
//!
//! Holds the canonical ABI definitions for the four v4 fill entrypoints and
//! encodes call data for them. EOA fills carry the maker signature as a
//! compact `(r, vs)` pair; contract-maker (ERC-1271) fills carry it as raw
//! bytes. The `_args` variants append the taker args blob produced by
//! [`crate::taker_traits::TakerTraits::encode`]; the plain variants refuse a
//! non-empty blob.

use ethabi::{Function, Param, ParamType, StateMutability, Token};
use types::U256;

use crate::error::{CodecError, CodecResult};
use crate::order::{order_tokens, LimitOrder};
use crate::signature::to_r_vs;
use crate::taker_traits::TakerTraits;

/// The `IOrderMixin.Order` tuple parameter type
fn order_param() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::Uint(256), // salt
        ParamType::Address,   // maker
        ParamType::Address,   // receiver
        ParamType::Address,   // makerAsset
        ParamType::Address,   // takerAsset
        ParamType::Uint(256), // makingAmount
        ParamType::Uint(256), // takingAmount
        ParamType::Uint(256), // makerTraits
    ])
}

fn param(name: &str, kind: ParamType) -> Param {
    Param {
        name: name.to_string(),
        kind,
        internal_type: None,
    }
}

#[allow(deprecated)]
fn fill_function(name: &str, inputs: Vec<Param>) -> Function {
    Function {
        name: name.to_string(),
        inputs,
        outputs: vec![
            param("makingAmount", ParamType::Uint(256)),
            param("takingAmount", ParamType::Uint(256)),
            param("orderHash", ParamType::FixedBytes(32)),
        ],
        constant: None,
        state_mutability: StateMutability::Payable,
    }
}

/// ABI schemas for the router's fill entrypoints.
///
/// Built once and passed by reference; encoding never rebuilds the schema.
#[derive(Debug, Clone)]
pub struct RouterAbi {
    fill_order: Function,
    fill_order_args: Function,
    fill_contract_order: Function,
    fill_contract_order_args: Function,
}

impl Default for RouterAbi {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterAbi {
    /// fillOrder(Order order, bytes32 r, bytes32 vs, uint256 amount, uint256 takerTraits)
    /// fillOrderArgs(..., bytes args)
    /// fillContractOrder(Order order, bytes signature, uint256 amount, uint256 takerTraits)
    /// fillContractOrderArgs(..., bytes args)
    pub fn new() -> Self {
        let eoa_inputs = || {
            vec![
                param("order", order_param()),
                param("r", ParamType::FixedBytes(32)),
                param("vs", ParamType::FixedBytes(32)),
                param("amount", ParamType::Uint(256)),
                param("takerTraits", ParamType::Uint(256)),
            ]
        };
        let contract_inputs = || {
            vec![
                param("order", order_param()),
                param("signature", ParamType::Bytes),
                param("amount", ParamType::Uint(256)),
                param("takerTraits", ParamType::Uint(256)),
            ]
        };

        let mut fill_order_args_inputs = eoa_inputs();
        fill_order_args_inputs.push(param("args", ParamType::Bytes));
        let mut fill_contract_order_args_inputs = contract_inputs();
        fill_contract_order_args_inputs.push(param("args", ParamType::Bytes));

        Self {
            fill_order: fill_function("fillOrder", eoa_inputs()),
            fill_order_args: fill_function("fillOrderArgs", fill_order_args_inputs),
            fill_contract_order: fill_function("fillContractOrder", contract_inputs()),
            fill_contract_order_args: fill_function(
                "fillContractOrderArgs",
                fill_contract_order_args_inputs,
            ),
        }
    }

    /// Calldata for an EOA-signed fill with no taker args.
    ///
    /// The taker traits must not carry a receiver, extension or interaction;
    /// use [`RouterAbi::fill_order_args_calldata`] for those.
    pub fn fill_order_calldata(
        &self,
        order: &LimitOrder,
        signature: &str,
        taker_traits: &TakerTraits,
        amount: U256,
    ) -> CodecResult<Vec<u8>> {
        let encoded = taker_traits.encode()?;
        if !encoded.args.is_empty() {
            return Err(CodecError::invariant(
                "taker traits carry args; use the fillOrderArgs form",
            ));
        }
        let (r, vs) = to_r_vs(signature)?;
        Ok(self.fill_order.encode_input(&[
            Token::Tuple(order_tokens(&order.build()).to_vec()),
            Token::FixedBytes(r.to_vec()),
            Token::FixedBytes(vs.to_vec()),
            Token::Uint(amount),
            Token::Uint(encoded.traits),
        ])?)
    }

    /// Calldata for an EOA-signed fill with the taker args appended
    pub fn fill_order_args_calldata(
        &self,
        order: &LimitOrder,
        signature: &str,
        taker_traits: &TakerTraits,
        amount: U256,
    ) -> CodecResult<Vec<u8>> {
        let encoded = taker_traits.encode()?;
        let (r, vs) = to_r_vs(signature)?;
        Ok(self.fill_order_args.encode_input(&[
            Token::Tuple(order_tokens(&order.build()).to_vec()),
            Token::FixedBytes(r.to_vec()),
            Token::FixedBytes(vs.to_vec()),
            Token::Uint(amount),
            Token::Uint(encoded.traits),
            Token::Bytes(encoded.args),
        ])?)
    }

    /// Calldata for a contract-maker (ERC-1271) fill with no taker args
    pub fn fill_contract_order_calldata(
        &self,
        order: &LimitOrder,
        signature: &[u8],
        taker_traits: &TakerTraits,
        amount: U256,
    ) -> CodecResult<Vec<u8>> {
        let encoded = taker_traits.encode()?;
        if !encoded.args.is_empty() {
            return Err(CodecError::invariant(
                "taker traits carry args; use the fillContractOrderArgs form",
            ));
        }
        Ok(self.fill_contract_order.encode_input(&[
            Token::Tuple(order_tokens(&order.build()).to_vec()),
            Token::Bytes(signature.to_vec()),
            Token::Uint(amount),
            Token::Uint(encoded.traits),
        ])?)
    }

    /// Calldata for a contract-maker fill with the taker args appended
    pub fn fill_contract_order_args_calldata(
        &self,
        order: &LimitOrder,
        signature: &[u8],
        taker_traits: &TakerTraits,
        amount: U256,
    ) -> CodecResult<Vec<u8>> {
        let encoded = taker_traits.encode()?;
        Ok(self.fill_contract_order_args.encode_input(&[
            Token::Tuple(order_tokens(&order.build()).to_vec()),
            Token::Bytes(signature.to_vec()),
            Token::Uint(amount),
            Token::Uint(encoded.traits),
            Token::Bytes(encoded.args),
        ])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::Extension;
    use crate::maker_traits::MakerTraits;
    use types::OrderInfo;

    fn sample_order() -> LimitOrder {
        LimitOrder::new(
            OrderInfo {
                maker_asset: "0xdac17f958d2ee523a2206206994597c13d831ec7".parse().unwrap(),
                taker_asset: "0x111111111117dc0aa78b770fa6a738034120c302".parse().unwrap(),
                making_amount: U256::from(100_000_000u64),
                taking_amount: U256::from(10_000_000_000_000_000_000u128),
                maker: "0x00000000219ab540356cbb839cbe05303d7705fa".parse().unwrap(),
                salt: Some(U256::zero()),
                receiver: None,
            },
            MakerTraits::default(),
            Extension::default(),
        )
        .unwrap()
    }

    fn sample_signature() -> String {
        let mut bytes = vec![0x11u8; 32];
        bytes.extend_from_slice(&[0x22u8; 32]);
        bytes.push(27);
        crate::hexutil::encode_hex(&bytes, true)
    }

    #[test]
    fn selectors_match_the_deployed_router() {
        let abi = RouterAbi::new();
        assert_eq!(hex::encode(abi.fill_order.short_signature()), "0550c9bf");
        assert_eq!(hex::encode(abi.fill_order_args.short_signature()), "5d9dbf53");
        assert_eq!(
            hex::encode(abi.fill_contract_order.short_signature()),
            "1d2299ed"
        );
        assert_eq!(
            hex::encode(abi.fill_contract_order_args.short_signature()),
            "e1bd184a"
        );
    }

    #[test]
    fn fill_order_layout() {
        let abi = RouterAbi::new();
        let calldata = abi
            .fill_order_calldata(
                &sample_order(),
                &sample_signature(),
                &TakerTraits::new(),
                U256::from(100u64),
            )
            .unwrap();
        // selector + order tuple (8 words) + r + vs + amount + takerTraits
        assert_eq!(calldata.len(), 4 + 32 * 12);
        assert_eq!(&calldata[..4], &hex_literal::hex!("0550c9bf"));
        assert_eq!(&calldata[4 + 32 * 8..4 + 32 * 9], &[0x11u8; 32]);
    }

    #[test]
    fn plain_variants_refuse_taker_args() {
        let abi = RouterAbi::new();
        let order = sample_order();
        let with_receiver = TakerTraits::new()
            .with_receiver("0x1111111254eeb25477b68fb85ed929f73a960582".parse().unwrap());

        assert!(abi
            .fill_order_calldata(&order, &sample_signature(), &with_receiver, U256::one())
            .is_err());
        assert!(abi
            .fill_contract_order_calldata(&order, &[0xab; 65], &with_receiver, U256::one())
            .is_err());

        // the args forms accept the same traits
        assert!(abi
            .fill_order_args_calldata(&order, &sample_signature(), &with_receiver, U256::one())
            .is_ok());
        assert!(abi
            .fill_contract_order_args_calldata(&order, &[0xab; 65], &with_receiver, U256::one())
            .is_ok());
    }

    #[test]
    fn contract_fill_embeds_signature_bytes() {
        let abi = RouterAbi::new();
        let calldata = abi
            .fill_contract_order_calldata(
                &sample_order(),
                &[0xcd; 65],
                &TakerTraits::new(),
                U256::one(),
            )
            .unwrap();
        assert_eq!(&calldata[..4], &hex_literal::hex!("1d2299ed"));
        // dynamic bytes land after the static head; the payload is in there
        assert!(calldata
            .windows(65)
            .any(|window| window == [0xcd; 65]));
    }
}
