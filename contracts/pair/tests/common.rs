#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, token::TokenClient, Address, Env};
use reservoir_pair::{ReservoirPair, ReservoirPairClient};

// Test constants
pub const DEFAULT_SWAP_FEE_BPS: u32 = reservoir_math::DEFAULT_SWAP_FEE_BPS; // 0.30%
pub const DEFAULT_PROTOCOL_SHARE_BPS: u32 = 0;
pub const DEADLINE: u64 = u64::MAX;
pub const START_TIME: u64 = 1_000;

pub struct TestPair<'a> {
    pub client: ReservoirPairClient<'a>,
    pub admin: Address,
    pub protocol: Address,
    /// Lower-sorted token, as stored by the pair
    pub token0: Address,
    pub token1: Address,
}

/// Setup pair with default fees (30 bps, no protocol share)
pub fn setup_pair(env: &Env) -> TestPair<'_> {
    setup_custom_pair(env, DEFAULT_SWAP_FEE_BPS, DEFAULT_PROTOCOL_SHARE_BPS)
}

/// Setup pair with custom fee parameters
pub fn setup_custom_pair(env: &Env, swap_fee_bps: u32, protocol_share_bps: u32) -> TestPair<'_> {
    let admin = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);
    setup_pair_with_tokens(env, &admin, &token_a, &token_b, swap_fee_bps, protocol_share_bps)
}

/// Setup pair over existing tokens
pub fn setup_pair_with_tokens<'a>(
    env: &'a Env,
    admin: &Address,
    token_a: &Address,
    token_b: &Address,
    swap_fee_bps: u32,
    protocol_share_bps: u32,
) -> TestPair<'a> {
    use soroban_sdk::testutils::Ledger;
    env.ledger().set_timestamp(START_TIME);

    let protocol = Address::generate(env);
    let pair_id = env.register(ReservoirPair, ());
    let client = ReservoirPairClient::new(env, &pair_id);

    client.initialize(
        admin,
        token_a,
        token_b,
        &swap_fee_bps,
        &protocol_share_bps,
        &Some(protocol.clone()),
    );

    let (token0, token1) = client.get_tokens();

    TestPair {
        client,
        admin: admin.clone(),
        protocol,
        token0,
        token1,
    }
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    TokenClient::new(env, token).balance(id)
}

/// New account funded with `amount` of both pair tokens
pub fn funded_user(env: &Env, pair: &TestPair, amount: i128) -> Address {
    let user = Address::generate(env);
    mint_tokens(env, &pair.token0, &user, amount);
    mint_tokens(env, &pair.token1, &user, amount);
    user
}

/// Deposit `(amount0, amount1)` from a freshly funded provider.
/// Returns the provider and the shares minted to them.
pub fn seed_liquidity(env: &Env, pair: &TestPair, amount0: i128, amount1: i128) -> (Address, i128) {
    let lp = funded_user(env, pair, amount0.max(amount1));
    let (_, _, shares) = pair
        .client
        .deposit(&lp, &amount0, &amount1, &0, &0, &lp, &DEADLINE);
    (lp, shares)
}
