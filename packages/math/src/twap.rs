// Time-weighted average price math
//
// Cumulative prices are UQ112.112 integrals of price over seconds. They wrap
// at 2^256; only differences between two samples are meaningful.

use soroban_sdk::{Env, U256};

use crate::constants::{MAX_RESERVE, RESOLUTION};
use crate::error::MathError;
use crate::u256::wrapping_sub;

/// Amount added to the cumulative price of the base asset over `elapsed`
/// seconds: `(reserve_quote << 112) / reserve_base * elapsed`.
///
/// With both reserves bounded to 112 bits and `elapsed` to 32 bits the
/// product stays below 2^256.
pub fn price_increment(
    env: &Env,
    reserve_base: u128,
    reserve_quote: u128,
    elapsed: u32,
) -> Result<U256, MathError> {
    if reserve_base == 0 {
        return Err(MathError::DivisionByZero);
    }
    if reserve_quote > MAX_RESERVE {
        return Err(MathError::Overflow);
    }

    let price = U256::from_u128(env, reserve_quote)
        .shl(RESOLUTION)
        .div(&U256::from_u128(env, reserve_base));

    Ok(price.mul(&U256::from_u32(env, elapsed)))
}

/// Average UQ112.112 price between two cumulative samples.
///
/// The subtraction is modular so a window spanning an accumulator wrap still
/// yields the right average.
pub fn consult(
    env: &Env,
    cumulative_start: &U256,
    timestamp_start: u32,
    cumulative_end: &U256,
    timestamp_end: u32,
) -> Result<U256, MathError> {
    if timestamp_end <= timestamp_start {
        return Err(MathError::InvalidWindow);
    }

    let delta = wrapping_sub(env, cumulative_end, cumulative_start);
    let window = U256::from_u32(env, timestamp_end - timestamp_start);
    Ok(delta.div(&window))
}
