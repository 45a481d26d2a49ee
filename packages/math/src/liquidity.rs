// Share issuance and redemption math
//
// All results floor. A depositor is credited for the scarcer of the two
// contributions, and a redeemer receives at most their pro-rata claim.

use soroban_sdk::Env;

use crate::error::MathError;
use crate::u256::{mul_div, sqrt_product};

/// Amount of asset B worth `amount_a` of asset A at the current reserve ratio.
pub fn quote(env: &Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> Result<u128, MathError> {
    mul_div(env, amount_a, reserve_b, reserve_a)
}

/// Gross shares for the first deposit: `floor(sqrt(amount0 * amount1))`.
///
/// The caller subtracts the permanently locked minimum from this value.
pub fn initial_shares(env: &Env, amount0: u128, amount1: u128) -> Result<u128, MathError> {
    sqrt_product(env, amount0, amount1)
}

/// Shares for a deposit into a non-empty pool:
/// `min(amount0 * supply / reserve0, amount1 * supply / reserve1)`.
pub fn proportional_shares(
    env: &Env,
    amount0: u128,
    amount1: u128,
    reserve0: u128,
    reserve1: u128,
    total_supply: u128,
) -> Result<u128, MathError> {
    let shares0 = mul_div(env, amount0, total_supply, reserve0)?;
    let shares1 = mul_div(env, amount1, total_supply, reserve1)?;
    Ok(shares0.min(shares1))
}

/// Asset amounts released for burning `shares`:
/// `(shares * reserve0 / supply, shares * reserve1 / supply)`.
pub fn redeem_amounts(
    env: &Env,
    shares: u128,
    reserve0: u128,
    reserve1: u128,
    total_supply: u128,
) -> Result<(u128, u128), MathError> {
    let amount0 = mul_div(env, shares, reserve0, total_supply)?;
    let amount1 = mul_div(env, shares, reserve1, total_supply)?;
    Ok((amount0, amount1))
}
