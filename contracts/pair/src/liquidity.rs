// Liquidity issuance engine
//
// Pure share accounting for deposits and withdrawals. Token movement and the
// reserve commit happen in the contract entry points.

use soroban_sdk::Env;

use reservoir_math::{initial_shares, proportional_shares, quote, redeem_amounts, MINIMUM_LIQUIDITY};
use reservoir_oracle::ReserveState;

use crate::error::PairError;

/// Shares created by a deposit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ShareMint {
    /// Credited to the depositor's recipient
    pub shares: u128,
    /// Credited to the locked sink; non-zero only on the first deposit
    pub locked: u128,
}

/// Amounts to pull for a deposit.
///
/// An empty pool takes the desired amounts as-is. Otherwise the pair is
/// matched to the reserve ratio, keeping as much of the desired amounts as
/// possible without going under either minimum.
pub fn deposit_amounts(
    env: &Env,
    amount0_desired: u128,
    amount1_desired: u128,
    amount0_min: u128,
    amount1_min: u128,
    reserves: &ReserveState,
) -> Result<(u128, u128), PairError> {
    if reserves.is_empty() {
        return Ok((amount0_desired, amount1_desired));
    }
    if !reserves.has_liquidity() {
        return Err(PairError::InsufficientLiquidity);
    }

    let amount1_optimal = quote(env, amount0_desired, reserves.reserve0, reserves.reserve1)?;
    if amount1_optimal <= amount1_desired {
        if amount1_optimal < amount1_min {
            return Err(PairError::InsufficientLiquidity);
        }
        return Ok((amount0_desired, amount1_optimal));
    }

    let amount0_optimal = quote(env, amount1_desired, reserves.reserve1, reserves.reserve0)?;
    if amount0_optimal > amount0_desired || amount0_optimal < amount0_min {
        return Err(PairError::InsufficientLiquidity);
    }
    Ok((amount0_optimal, amount1_desired))
}

/// Shares owed for amounts the pair actually received.
pub fn shares_to_mint(
    env: &Env,
    amount0: u128,
    amount1: u128,
    reserves: &ReserveState,
    total_supply: u128,
) -> Result<ShareMint, PairError> {
    if total_supply == 0 {
        let gross = initial_shares(env, amount0, amount1)?;
        if gross <= MINIMUM_LIQUIDITY {
            return Err(PairError::InsufficientLiquidity);
        }
        return Ok(ShareMint {
            shares: gross - MINIMUM_LIQUIDITY,
            locked: MINIMUM_LIQUIDITY,
        });
    }

    if !reserves.has_liquidity() {
        return Err(PairError::InsufficientLiquidity);
    }

    let shares = proportional_shares(
        env,
        amount0,
        amount1,
        reserves.reserve0,
        reserves.reserve1,
        total_supply,
    )?;
    if shares == 0 {
        return Err(PairError::InsufficientLiquidity);
    }

    Ok(ShareMint { shares, locked: 0 })
}

/// Token amounts released for burning `shares`, checked against the caller's
/// minimums.
pub fn amounts_to_release(
    env: &Env,
    shares: u128,
    amount0_min: u128,
    amount1_min: u128,
    reserves: &ReserveState,
    total_supply: u128,
) -> Result<(u128, u128), PairError> {
    if total_supply == 0 || shares > total_supply {
        return Err(PairError::InsufficientLiquidity);
    }

    let (amount0, amount1) = redeem_amounts(
        env,
        shares,
        reserves.reserve0,
        reserves.reserve1,
        total_supply,
    )?;
    if amount0 < amount0_min || amount1 < amount1_min {
        return Err(PairError::InsufficientLiquidity);
    }

    Ok((amount0, amount1))
}
