mod common;

use reservoir_pair::{PairError, ReservoirPair, ReservoirPairClient};
use soroban_sdk::{testutils::Address as _, Address, Env};

fn uninitialized_pair(env: &Env) -> ReservoirPairClient<'_> {
    let pair_id = env.register(ReservoirPair, ());
    ReservoirPairClient::new(env, &pair_id)
}

// ============================================================
// SUCCESSFUL INITIALIZATION
// ============================================================

#[test]
fn test_initialize_sorts_tokens() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token_a = common::create_token(&env, &admin);
    let token_b = common::create_token(&env, &admin);

    // pass tokens in descending order
    let (high, low) = if token_a > token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    };
    let pair = common::setup_pair_with_tokens(&env, &admin, &high, &low, 30, 0);

    assert_eq!(pair.token0, low);
    assert_eq!(pair.token1, high);
    assert!(pair.token0 < pair.token1);
}

#[test]
fn test_initialize_stores_config() {
    let env = Env::default();
    env.mock_all_auths();

    let pair = common::setup_custom_pair(&env, 25, 1_500);

    let fees = pair.client.get_fee_config();
    assert_eq!(fees.swap_fee_bps, 25);
    assert_eq!(fees.protocol_share_bps, 1_500);
    assert_eq!(fees.protocol_recipient, pair.protocol);

    let config = pair.client.get_config();
    assert_eq!(config.admin, pair.admin);

    assert!(pair.client.is_initialized());
    assert!(!pair.client.is_paused());
}

#[test]
fn test_initialize_starts_empty() {
    let env = Env::default();
    env.mock_all_auths();

    let pair = common::setup_pair(&env);

    let reserves = pair.client.get_reserves();
    assert_eq!(reserves.reserve0, 0);
    assert_eq!(reserves.reserve1, 0);
    assert_eq!(pair.client.total_supply(), 0);
    assert_eq!(pair.client.locked_liquidity(), 0);
}

#[test]
fn test_initialize_accepts_fee_bounds() {
    let env = Env::default();
    env.mock_all_auths();

    // zero fee and maximum fee with full protocol share
    let free = common::setup_custom_pair(&env, 0, 0);
    assert_eq!(free.client.get_fee_config().swap_fee_bps, 0);

    let max = common::setup_custom_pair(&env, 1_000, 10_000);
    assert_eq!(max.client.get_fee_config().swap_fee_bps, 1_000);
}

// ============================================================
// REJECTED INITIALIZATION
// ============================================================

#[test]
fn test_initialize_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let pair = common::setup_pair(&env);

    let result = pair.client.try_initialize(
        &pair.admin,
        &pair.token0,
        &pair.token1,
        &30,
        &0,
        &Some(pair.protocol.clone()),
    );
    assert_eq!(result, Err(Ok(PairError::AlreadyInitialized)));
}

#[test]
fn test_initialize_identical_tokens_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token = common::create_token(&env, &admin);
    let client = uninitialized_pair(&env);

    let result = client.try_initialize(&admin, &token, &token, &30, &0, &Some(admin.clone()));
    assert_eq!(result, Err(Ok(PairError::InvalidToken)));
}

#[test]
fn test_initialize_fee_too_high_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token_a = common::create_token(&env, &admin);
    let token_b = common::create_token(&env, &admin);
    let client = uninitialized_pair(&env);

    let result = client.try_initialize(&admin, &token_a, &token_b, &1_001, &0, &Some(admin.clone()));
    assert_eq!(result, Err(Ok(PairError::FeeTooHigh)));
}

#[test]
fn test_initialize_protocol_share_above_whole_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token_a = common::create_token(&env, &admin);
    let token_b = common::create_token(&env, &admin);
    let client = uninitialized_pair(&env);

    let result = client.try_initialize(&admin, &token_a, &token_b, &30, &10_001, &Some(admin.clone()));
    assert_eq!(result, Err(Ok(PairError::InvalidParameters)));
}

#[test]
fn test_initialize_missing_recipient_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token_a = common::create_token(&env, &admin);
    let token_b = common::create_token(&env, &admin);
    let client = uninitialized_pair(&env);

    let result = client.try_initialize(&admin, &token_a, &token_b, &30, &0, &None);
    assert_eq!(result, Err(Ok(PairError::ZeroAddress)));
}

#[test]
fn test_initialize_pair_as_recipient_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token_a = common::create_token(&env, &admin);
    let token_b = common::create_token(&env, &admin);
    let client = uninitialized_pair(&env);

    let result = client.try_initialize(
        &admin,
        &token_a,
        &token_b,
        &30,
        &0,
        &Some(client.address.clone()),
    );
    assert_eq!(result, Err(Ok(PairError::ZeroAddress)));
}

// ============================================================
// UNINITIALIZED PAIR
// ============================================================

#[test]
fn test_operations_before_initialize_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let client = uninitialized_pair(&env);
    let user = Address::generate(&env);
    let token = Address::generate(&env);

    assert!(!client.is_initialized());
    assert_eq!(
        client.try_deposit(&user, &1_000, &1_000, &0, &0, &user, &common::DEADLINE),
        Err(Ok(PairError::NotInitialized))
    );
    assert_eq!(
        client.try_swap(&user, &token, &1_000, &0, &user, &common::DEADLINE),
        Err(Ok(PairError::NotInitialized))
    );
    assert_eq!(client.try_sync(), Err(Ok(PairError::NotInitialized)));
    assert_eq!(client.try_get_tokens(), Err(Ok(PairError::NotInitialized)));
    assert_eq!(
        client.try_set_paused(&true),
        Err(Ok(PairError::NotInitialized))
    );
}
