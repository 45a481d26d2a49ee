use soroban_sdk::{contracttype, Env, U256};

// ============================================================
// RESERVES
// ============================================================

/// Recorded balances used for pricing.
///
/// Both reserves are at most 2^112 - 1. They are zero only before the first
/// deposit or after every share has been redeemed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveState {
    pub reserve0: u128,
    pub reserve1: u128,
    /// Time of the last commit, seconds mod 2^32
    pub last_update_time: u32,
}

impl Default for ReserveState {
    fn default() -> Self {
        Self {
            reserve0: 0,
            reserve1: 0,
            last_update_time: 0,
        }
    }
}

impl ReserveState {
    pub fn is_empty(&self) -> bool {
        self.reserve0 == 0 && self.reserve1 == 0
    }

    pub fn has_liquidity(&self) -> bool {
        self.reserve0 != 0 && self.reserve1 != 0
    }
}

// ============================================================
// PRICE ACCUMULATORS
// ============================================================

/// UQ112.112 time-integrals of the price of each asset in terms of the other.
/// `cumulative_price0` prices asset0 in asset1, `cumulative_price1` the reverse.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleAccumulator {
    pub cumulative_price0: U256,
    pub cumulative_price1: U256,
}

impl OracleAccumulator {
    pub fn zero(env: &Env) -> Self {
        Self {
            cumulative_price0: U256::from_u32(env, 0),
            cumulative_price1: U256::from_u32(env, 0),
        }
    }
}

/// One observation of a cumulative price.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceSample {
    pub cumulative: U256,
    pub timestamp: u32,
}

// ============================================================
// COMBINED STATE
// ============================================================

/// Reserves and accumulators, always stored and replaced together.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleState {
    pub reserves: ReserveState,
    pub accumulator: OracleAccumulator,
}
