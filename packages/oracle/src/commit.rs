// Reserve & oracle commit
//
// The only way to produce a new `OracleState`. Every state-changing pool
// operation ends by calling `commit` with the balances it observed after its
// transfers, then stores the returned value in one write.

use soroban_sdk::{Env, U256};

use reservoir_math::{price_increment, wrapping_add, MAX_RESERVE};

use crate::clock::TimeSource;
use crate::error::OracleError;
use crate::types::{OracleAccumulator, OracleState, PriceSample, ReserveState};

impl OracleState {
    /// Fresh state of a pool that has never held liquidity.
    pub fn empty(env: &Env) -> Self {
        Self {
            reserves: ReserveState::default(),
            accumulator: OracleAccumulator::zero(env),
        }
    }

    /// Brings reserves and accumulators up to date with the pool's true
    /// balances.
    ///
    /// # Errors
    /// - [`OracleError::ReserveOverflow`] if a balance exceeds 2^112 - 1.
    ///   Nothing is produced in that case; the caller keeps its old state.
    pub fn commit(
        &self,
        env: &Env,
        balance0: u128,
        balance1: u128,
        clock: &impl TimeSource,
    ) -> Result<OracleState, OracleError> {
        if balance0 > MAX_RESERVE || balance1 > MAX_RESERVE {
            return Err(OracleError::ReserveOverflow);
        }

        let now = clock.now();
        let accumulator = self.accumulate(env, now)?;

        Ok(OracleState {
            reserves: ReserveState {
                reserve0: balance0,
                reserve1: balance1,
                last_update_time: now,
            },
            accumulator,
        })
    }

    /// Accumulators advanced to `now` using the last committed reserves.
    ///
    /// Unchanged when no time has passed or when either reserve is zero.
    pub fn accumulate(&self, env: &Env, now: u32) -> Result<OracleAccumulator, OracleError> {
        let reserves = &self.reserves;
        let elapsed = now.wrapping_sub(reserves.last_update_time);

        if elapsed == 0 || !reserves.has_liquidity() {
            return Ok(self.accumulator.clone());
        }

        let inc0 = price_increment(env, reserves.reserve0, reserves.reserve1, elapsed)?;
        let inc1 = price_increment(env, reserves.reserve1, reserves.reserve0, elapsed)?;

        Ok(OracleAccumulator {
            cumulative_price0: wrapping_add(env, &self.accumulator.cumulative_price0, &inc0),
            cumulative_price1: wrapping_add(env, &self.accumulator.cumulative_price1, &inc1),
        })
    }

    /// Cumulative prices as of the clock's current time, without committing.
    ///
    /// Returns `(price0_sample, price1_sample)`.
    pub fn observe(
        &self,
        env: &Env,
        clock: &impl TimeSource,
    ) -> Result<(PriceSample, PriceSample), OracleError> {
        let now = clock.now();
        let accumulator = self.accumulate(env, now)?;

        Ok((
            PriceSample {
                cumulative: accumulator.cumulative_price0,
                timestamp: now,
            },
            PriceSample {
                cumulative: accumulator.cumulative_price1,
                timestamp: now,
            },
        ))
    }
}

/// Time-weighted average UQ112.112 price between two samples of the same
/// accumulator.
pub fn consult(env: &Env, start: &PriceSample, end: &PriceSample) -> Result<U256, OracleError> {
    let average = reservoir_math::consult(
        env,
        &start.cumulative,
        start.timestamp,
        &end.cumulative,
        end.timestamp,
    )?;
    Ok(average)
}
