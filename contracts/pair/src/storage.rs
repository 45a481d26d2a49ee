// Pair storage module
//
// Config, fees, reserve/oracle state and the guard flag live in instance
// storage and share one TTL. Share balances are per-holder persistent
// entries.

use soroban_sdk::{contracttype, Address, Env};

use reservoir_oracle::OracleState;

use crate::error::PairError;
use crate::types::{FeeConfig, PairConfig};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin and sorted token pair
    Config,
    /// Swap fee and protocol share
    FeeConfig,
    /// Reserves plus price accumulators
    State,
    /// Pause flag
    Paused,
    /// Re-entrancy guard flag
    Locked,
    /// Outstanding shares, including the locked minimum
    TotalSupply,
    /// Share balance by holder
    Shares(Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage lifetime (~30 days at 5s/ledger)
const INSTANCE_LIFETIME: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_BUMP: u32 = INSTANCE_LIFETIME - DAY_IN_LEDGERS;

/// Share balance lifetime (~1 year at 5s/ledger)
const BALANCE_LIFETIME: u32 = 365 * DAY_IN_LEDGERS;
const BALANCE_BUMP: u32 = BALANCE_LIFETIME - DAY_IN_LEDGERS;

/// Extend TTL for the contract instance and everything stored in it
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP, INSTANCE_LIFETIME);
}

fn extend_balance_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BALANCE_BUMP, BALANCE_LIFETIME);
}

// ============================================================
// CONFIG
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<PairConfig, PairError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PairError::NotInitialized)
}

pub fn write_config(env: &Env, config: &PairConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_fee_config(env: &Env) -> Result<FeeConfig, PairError> {
    env.storage()
        .instance()
        .get(&DataKey::FeeConfig)
        .ok_or(PairError::NotInitialized)
}

pub fn write_fee_config(env: &Env, fees: &FeeConfig) {
    env.storage().instance().set(&DataKey::FeeConfig, fees);
}

// ============================================================
// RESERVE & ORACLE STATE
// ============================================================

pub fn read_state(env: &Env) -> OracleState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_else(|| OracleState::empty(env))
}

pub fn write_state(env: &Env, state: &OracleState) {
    env.storage().instance().set(&DataKey::State, state);
}

// ============================================================
// FLAGS
// ============================================================

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn write_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Locked)
}

pub fn set_locked(env: &Env) {
    env.storage().instance().set(&DataKey::Locked, &true);
}

pub fn clear_locked(env: &Env) {
    env.storage().instance().remove(&DataKey::Locked);
}

// ============================================================
// SHARES
// ============================================================

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn read_share_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Shares(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            extend_balance_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn write_share_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Shares(id.clone());
    env.storage().persistent().set(&key, &balance);
    extend_balance_ttl(env, &key);
}
