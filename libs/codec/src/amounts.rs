//! Proportional fill amount math.
//!
//! Mirrors the on-chain amount calculator: the taker owes a ceiling
//! proportion, the maker pays a floor proportion, so rounding always favors
//! the maker. Intermediate products run in 512 bits to avoid overflow.

use ethabi::ethereum_types::U512;
use types::U256;

use crate::error::{CodecError, CodecResult};

/// Taker amount owed for taking `swap_maker_amount`:
/// `ceil(swap_maker_amount * order_taker_amount / order_maker_amount)`.
pub fn calc_taking_amount(
    swap_maker_amount: U256,
    order_maker_amount: U256,
    order_taker_amount: U256,
) -> CodecResult<U256> {
    if order_maker_amount.is_zero() {
        return Err(CodecError::invariant("order making amount is zero"));
    }
    let numerator = swap_maker_amount.full_mul(order_taker_amount);
    let denominator = U512::from(order_maker_amount);
    let quotient = (numerator + denominator - U512::one()) / denominator;
    narrow(quotient)
}

/// Maker amount paid out for `swap_taker_amount`:
/// `floor(swap_taker_amount * order_maker_amount / order_taker_amount)`.
pub fn calc_making_amount(
    swap_taker_amount: U256,
    order_maker_amount: U256,
    order_taker_amount: U256,
) -> CodecResult<U256> {
    if order_taker_amount.is_zero() {
        return Err(CodecError::invariant("order taking amount is zero"));
    }
    let numerator = swap_taker_amount.full_mul(order_maker_amount);
    let quotient = numerator / U512::from(order_taker_amount);
    narrow(quotient)
}

fn narrow(value: U512) -> CodecResult<U256> {
    U256::try_from(value)
        .map_err(|_| CodecError::range("fill amount", format!("{value}"), 256))
}
