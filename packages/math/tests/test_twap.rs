use reservoir_math::*;
use soroban_sdk::{Env, U256};

#[test]
fn test_consult_reference_window() {
    let env = Env::default();

    let start = U256::from_u32(&env, 1_000);
    let end = U256::from_u32(&env, 2_100);
    assert_eq!(consult(&env, &start, 10, &end, 21), Ok(U256::from_u32(&env, 100)));
}

#[test]
fn test_consult_rejects_empty_window() {
    let env = Env::default();
    let sample = U256::from_u32(&env, 1_000);

    assert_eq!(consult(&env, &sample, 21, &sample, 21), Err(MathError::InvalidWindow));
    assert_eq!(consult(&env, &sample, 21, &sample, 10), Err(MathError::InvalidWindow));
}

#[test]
fn test_consult_across_accumulator_wrap() {
    let env = Env::default();

    let start = u256_max(&env).sub(&U256::from_u32(&env, 99));
    let end = wrapping_add(&env, &start, &U256::from_u32(&env, 1_100));
    assert_eq!(end, U256::from_u32(&env, 1_000));

    assert_eq!(consult(&env, &start, 10, &end, 21), Ok(U256::from_u32(&env, 100)));
}

#[test]
fn test_price_increment_encodes_ratio() {
    let env = Env::default();

    // price of base = 20_000 / 10_000 = 2.0, held for 10 seconds
    let inc = price_increment(&env, 10_000, 20_000, 10).unwrap();
    assert_eq!(inc, U256::from_u128(&env, 20 * Q112));
}

#[test]
fn test_price_increment_floors_fraction() {
    let env = Env::default();

    // 1 / 3 in UQ112.112 floors
    let inc = price_increment(&env, 3, 1, 1).unwrap();
    assert_eq!(inc, U256::from_u128(&env, Q112 / 3));
}

#[test]
fn test_price_increment_zero_base() {
    let env = Env::default();
    assert_eq!(price_increment(&env, 0, 1, 1), Err(MathError::DivisionByZero));
}

#[test]
fn test_price_increment_max_inputs_fit() {
    let env = Env::default();

    // (2^112 - 1) << 112 over 1, for u32::MAX seconds, stays below 2^256
    let inc = price_increment(&env, 1, MAX_RESERVE, u32::MAX);
    assert!(inc.is_ok());
    assert_eq!(price_increment(&env, 1, MAX_RESERVE + 1, 1), Err(MathError::Overflow));
}
