// Full-width helpers on the host U256 type
//
// Products of two reserves or of a reserve and a share supply need up to
// 224 bits, so every multiply-then-divide goes through U256.

use soroban_sdk::{Env, U256};

use crate::error::MathError;

/// 2^256 - 1
pub fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

/// Calculates `floor(a * b / denominator)` without intermediate overflow.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    product
        .div(&U256::from_u128(env, denominator))
        .to_u128()
        .ok_or(MathError::Overflow)
}

/// Integer square root of a u128 (Newton's method).
pub fn isqrt(n: u128) -> u128 {
    let mut x = n;
    let mut y = n.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// `floor(sqrt(a * b))` for any pair of u128 values.
///
/// Stays in native arithmetic while the product fits 128 bits and falls back
/// to U256 Newton iteration otherwise, starting from `max(a, b)` which is
/// always an upper bound of the root.
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> Result<u128, MathError> {
    if let Some(product) = a.checked_mul(b) {
        return Ok(isqrt(product));
    }

    let y = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let two = U256::from_u32(env, 2);

    let mut z = U256::from_u128(env, a.max(b));
    let mut x = y.div(&z).add(&z).div(&two);
    while x < z {
        z = x;
        x = y.div(&z).add(&z).div(&two);
    }

    z.to_u128().ok_or(MathError::Overflow)
}

/// `(a + b) mod 2^256`
pub fn wrapping_add(env: &Env, a: &U256, b: &U256) -> U256 {
    let headroom = u256_max(env).sub(a);
    if *b > headroom {
        // a + b - 2^256 == b - (MAX - a) - 1
        b.sub(&headroom).sub(&U256::from_u32(env, 1))
    } else {
        a.add(b)
    }
}

/// `(a - b) mod 2^256`
pub fn wrapping_sub(env: &Env, a: &U256, b: &U256) -> U256 {
    if a >= b {
        a.sub(b)
    } else {
        // a - b + 2^256 == (MAX - b) + a + 1
        u256_max(env).sub(b).add(a).add(&U256::from_u32(env, 1))
    }
}
