//! Limit order assembly.
//!
//! Canonicalizes caller input into the 8-field v4 order tuple: a receiver
//! equal to the maker collapses to the zero address, a non-empty extension
//! raises the has-extension maker flag, and the salt binds the extension by
//! carrying the low 160 bits of its keccak fingerprint. Callers either
//! supply a salt (verified against the extension) or get one generated from
//! a random 96-bit base.

use rand::rngs::OsRng;
use rand::RngCore;
use types::{Address, LimitOrderV4Struct, OrderInfo, U256, UINT_160_MAX};

use crate::eip712;
use crate::error::{CodecError, CodecResult};
use crate::extension::Extension;
use crate::maker_traits::MakerTraits;

/// Binds `extension` into a salt: `(base << 160) | low-160-of-hash`.
///
/// An empty extension leaves `base_salt` unchanged. A non-empty one needs
/// the base to fit in 96 bits so the hash bits are not disturbed.
pub fn build_salt(extension: &Extension, base_salt: U256) -> CodecResult<U256> {
    if extension.is_empty() {
        return Ok(base_salt);
    }
    if base_salt.bits() > 96 {
        return Err(CodecError::range("base salt", format!("{base_salt:#x}"), 96));
    }
    Ok((base_salt << 160) | (extension.keccak256() & UINT_160_MAX))
}

/// Checks that the low 160 bits of `salt` match the extension fingerprint.
///
/// Empty extensions accept any salt.
pub fn verify_salt(salt: U256, extension: &Extension) -> CodecResult<()> {
    if extension.is_empty() {
        return Ok(());
    }
    if salt & UINT_160_MAX != extension.keccak256() & UINT_160_MAX {
        return Err(CodecError::invariant(
            "salt does not carry the extension hash in its low 160 bits",
        ));
    }
    Ok(())
}

fn random_base_salt() -> U256 {
    let mut bytes = [0u8; 12];
    OsRng.fill_bytes(&mut bytes);
    U256::from_big_endian(&bytes)
}

/// A fully assembled v4 limit order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitOrder {
    maker_asset: Address,
    taker_asset: Address,
    making_amount: U256,
    taking_amount: U256,
    maker: Address,
    receiver: Address,
    salt: U256,
    maker_traits: MakerTraits,
    extension: Extension,
}

impl LimitOrder {
    /// Canonicalizes `info` into an order.
    ///
    /// A caller-supplied salt must already bind the extension; a missing
    /// salt is generated from a fresh random 96-bit base.
    pub fn new(
        info: OrderInfo,
        maker_traits: MakerTraits,
        extension: Extension,
    ) -> CodecResult<Self> {
        let maker_traits = if extension.is_empty() {
            maker_traits
        } else {
            maker_traits.with_extension()
        };

        let salt = match info.salt {
            Some(salt) => {
                verify_salt(salt, &extension)?;
                salt
            }
            None => build_salt(&extension, random_base_salt())?,
        };

        let receiver = match info.receiver {
            Some(receiver) if receiver != info.maker => receiver,
            _ => Address::zero(),
        };

        Ok(Self {
            maker_asset: info.maker_asset,
            taker_asset: info.taker_asset,
            making_amount: info.making_amount,
            taking_amount: info.taking_amount,
            maker: info.maker,
            receiver,
            salt,
            maker_traits,
            extension,
        })
    }

    /// Rebuilds an order from its wire struct and the extension that was
    /// distributed alongside it.
    pub fn from_struct_and_extension(
        data: LimitOrderV4Struct,
        extension: Extension,
    ) -> CodecResult<Self> {
        verify_salt(data.salt, &extension)?;
        Ok(Self {
            maker_asset: data.maker_asset,
            taker_asset: data.taker_asset,
            making_amount: data.making_amount,
            taking_amount: data.taking_amount,
            maker: data.maker,
            receiver: data.receiver,
            salt: data.salt,
            maker_traits: MakerTraits::new(data.maker_traits),
            extension,
        })
    }

    pub fn maker_asset(&self) -> &Address {
        &self.maker_asset
    }

    pub fn taker_asset(&self) -> &Address {
        &self.taker_asset
    }

    pub fn making_amount(&self) -> U256 {
        self.making_amount
    }

    pub fn taking_amount(&self) -> U256 {
        self.taking_amount
    }

    pub fn maker(&self) -> &Address {
        &self.maker
    }

    /// Zero when proceeds go to the maker
    pub fn receiver(&self) -> &Address {
        &self.receiver
    }

    pub fn salt(&self) -> U256 {
        self.salt
    }

    pub fn maker_traits(&self) -> &MakerTraits {
        &self.maker_traits
    }

    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    pub fn is_private(&self) -> bool {
        self.maker_traits.is_private()
    }

    /// The wire struct the contract hashes and verifies
    pub fn build(&self) -> LimitOrderV4Struct {
        LimitOrderV4Struct {
            salt: self.salt,
            maker: self.maker,
            receiver: self.receiver,
            maker_asset: self.maker_asset,
            taker_asset: self.taker_asset,
            making_amount: self.making_amount,
            taking_amount: self.taking_amount,
            maker_traits: self.maker_traits.as_uint(),
        }
    }

    /// ABI encoding of the 8-field tuple, without a selector
    pub fn to_calldata(&self) -> Vec<u8> {
        ethabi::encode(&order_tokens(&self.build()))
    }

    /// Reverses [`LimitOrder::to_calldata`]; the extension travels out of
    /// band and is re-verified against the salt.
    pub fn from_calldata(calldata: &[u8], extension: Extension) -> CodecResult<Self> {
        use ethabi::ParamType;

        let tokens = ethabi::decode(
            &[
                ParamType::Uint(256),
                ParamType::Address,
                ParamType::Address,
                ParamType::Address,
                ParamType::Address,
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Uint(256),
            ],
            calldata,
        )?;

        let mut tokens = tokens.into_iter();
        let salt = next_uint(&mut tokens, "order salt")?;
        let maker = next_address(&mut tokens, "maker")?;
        let receiver = next_address(&mut tokens, "receiver")?;
        let maker_asset = next_address(&mut tokens, "maker asset")?;
        let taker_asset = next_address(&mut tokens, "taker asset")?;
        let making_amount = next_uint(&mut tokens, "making amount")?;
        let taking_amount = next_uint(&mut tokens, "taking amount")?;
        let maker_traits = next_uint(&mut tokens, "maker traits")?;

        Self::from_struct_and_extension(
            LimitOrderV4Struct {
                salt,
                maker,
                receiver,
                maker_asset,
                taker_asset,
                making_amount,
                taking_amount,
                maker_traits,
            },
            extension,
        )
    }

    /// eth_signTypedData_v4 document for external signers
    pub fn get_typed_data(&self, chain_id: u64) -> serde_json::Value {
        eip712::build_typed_data(&self.build(), chain_id)
    }

    /// The EIP-712 digest the maker signs
    pub fn get_order_hash(&self, chain_id: u64) -> String {
        eip712::order_hash_hex(&self.build(), chain_id)
    }
}

fn next_uint(
    tokens: &mut impl Iterator<Item = ethabi::Token>,
    what: &'static str,
) -> CodecResult<U256> {
    tokens
        .next()
        .and_then(ethabi::Token::into_uint)
        .ok_or_else(|| CodecError::format(what, "missing tuple field"))
}

fn next_address(
    tokens: &mut impl Iterator<Item = ethabi::Token>,
    what: &'static str,
) -> CodecResult<Address> {
    tokens
        .next()
        .and_then(ethabi::Token::into_address)
        .map(Address::new)
        .ok_or_else(|| CodecError::format(what, "missing tuple field"))
}

/// The order tuple as ABI tokens, in wire field order
pub(crate) fn order_tokens(data: &LimitOrderV4Struct) -> [ethabi::Token; 8] {
    use ethabi::Token;
    [
        Token::Uint(data.salt),
        Token::Address(data.maker.inner()),
        Token::Address(data.receiver.inner()),
        Token::Address(data.maker_asset.inner()),
        Token::Address(data.taker_asset.inner()),
        Token::Uint(data.making_amount),
        Token::Uint(data.taking_amount),
        Token::Uint(data.maker_traits),
    ]
}
