// Constant-product swap pricing
//
// Fee is taken from the input before pricing:
//   amount_in_net = amount_in * (FEE_DENOMINATOR - fee_bps) / FEE_DENOMINATOR
//   amount_out    = amount_in_net * reserve_out / (reserve_in + amount_in_net)
// Both divisions floor, so the pool never pays out more than the curve allows.

use soroban_sdk::Env;

use crate::constants::FEE_DENOMINATOR;
use crate::error::MathError;
use crate::u256::mul_div;

/// Input amount left after the swap fee is deducted.
pub fn apply_fee(env: &Env, amount_in: u128, fee_bps: u32) -> Result<u128, MathError> {
    let keep_bps = FEE_DENOMINATOR
        .checked_sub(fee_bps)
        .ok_or(MathError::Overflow)?;

    mul_div(
        env,
        amount_in,
        keep_bps as u128,
        FEE_DENOMINATOR as u128,
    )
}

/// Output amount for a fee-adjusted input against the given reserves.
///
/// `reserve_in + amount_in_net` is never zero when `reserve_in > 0`; callers
/// reject empty pools before pricing.
pub fn get_amount_out(
    env: &Env,
    amount_in_net: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, MathError> {
    let denominator = reserve_in
        .checked_add(amount_in_net)
        .ok_or(MathError::Overflow)?;

    mul_div(env, amount_in_net, reserve_out, denominator)
}

/// Splits the swap fee charged on `amount_in`.
///
/// Returns `(total_fee, protocol_fee)` where
/// `total_fee = amount_in * fee_bps / FEE_DENOMINATOR` and
/// `protocol_fee = total_fee * protocol_share_bps / FEE_DENOMINATOR`.
/// Both are denominated in the input asset.
pub fn fee_split(
    env: &Env,
    amount_in: u128,
    fee_bps: u32,
    protocol_share_bps: u32,
) -> Result<(u128, u128), MathError> {
    let total_fee = mul_div(env, amount_in, fee_bps as u128, FEE_DENOMINATOR as u128)?;
    let protocol_fee = mul_div(
        env,
        total_fee,
        protocol_share_bps as u128,
        FEE_DENOMINATOR as u128,
    )?;
    Ok((total_fee, protocol_fee))
}
