#![cfg_attr(not(test), no_std)]

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, U256};

// External packages
use reservoir_oracle::{LedgerClock, OracleState};
pub use reservoir_oracle::{OracleAccumulator, PriceSample, ReserveState};

// Local modules
mod error;
mod events;
mod guard;
mod liquidity;
mod shares;
mod storage;
mod swap;
pub mod types;

pub use error::PairError;
use events::*;
use storage::*;
pub use types::{FeeConfig, PairConfig, SwapQuote, SwapResult};

#[contract]
pub struct ReservoirPair;

#[contractimpl]
impl ReservoirPair {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize pair
    ///
    /// # Arguments
    /// * `admin` - Address allowed to change fees, pause, and transfer control
    /// * `token_a` - First token (any order)
    /// * `token_b` - Second token (any order)
    /// * `swap_fee_bps` - Swap fee in basis points, at most 1000
    /// * `protocol_share_bps` - Protocol's share of the swap fee, at most 10000
    /// * `protocol_recipient` - Receives the protocol share; required
    pub fn initialize(
        env: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        swap_fee_bps: u32,
        protocol_share_bps: u32,
        protocol_recipient: Option<Address>,
    ) -> Result<(), PairError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(PairError::AlreadyInitialized);
        }
        if token_a == token_b {
            return Err(PairError::InvalidToken);
        }

        let fees = FeeConfig::validate(&env, swap_fee_bps, protocol_share_bps, protocol_recipient)?;

        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        write_config(
            &env,
            &PairConfig {
                admin,
                token0,
                token1,
            },
        );
        write_fee_config(&env, &fees);
        write_state(&env, &OracleState::empty(&env));
        extend_instance_ttl(&env);

        log!(&env, "pair initialized", swap_fee_bps, protocol_share_bps);
        emit_fees_updated(&env, fees.swap_fee_bps, fees.protocol_share_bps, &fees.protocol_recipient);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    /// Admin and sorted tokens
    pub fn get_config(env: Env) -> Result<PairConfig, PairError> {
        read_config(&env)
    }

    /// Sorted `(token0, token1)`
    pub fn get_tokens(env: Env) -> Result<(Address, Address), PairError> {
        let config = read_config(&env)?;
        Ok((config.token0, config.token1))
    }

    pub fn get_fee_config(env: Env) -> Result<FeeConfig, PairError> {
        read_fee_config(&env)
    }

    /// Reserves as of the last commit
    pub fn get_reserves(env: Env) -> ReserveState {
        read_state(&env).reserves
    }

    /// Cumulative prices as of the last commit
    pub fn get_oracle(env: Env) -> OracleAccumulator {
        read_state(&env).accumulator
    }

    pub fn is_paused(env: Env) -> bool {
        is_paused(&env)
    }

    /// Cumulative prices extrapolated to the current ledger time, without
    /// committing. Returns `(price0_sample, price1_sample)`.
    pub fn observe(env: Env) -> Result<(PriceSample, PriceSample), PairError> {
        let state = read_state(&env);
        Ok(state.observe(&env, &LedgerClock::new(&env))?)
    }

    /// Time-weighted average UQ112.112 price between two samples
    pub fn consult(env: Env, start: PriceSample, end: PriceSample) -> Result<U256, PairError> {
        Ok(reservoir_oracle::consult(&env, &start, &end)?)
    }

    /// Preview an exact-input swap against current reserves.
    /// Assumes the input token takes no transfer tax.
    pub fn quote_swap(env: Env, token_in: Address, amount_in: i128) -> Result<SwapQuote, PairError> {
        if amount_in <= 0 {
            return Err(PairError::InvalidParameters);
        }

        let config = read_config(&env)?;
        let fees = read_fee_config(&env)?;
        let reserves = read_state(&env).reserves;
        let (reserve_in, reserve_out) = Self::oriented_reserves(&config, &reserves, &token_in)?;

        let quote = swap::quote_exact_in(
            &env,
            amount_in as u128,
            reserve_in,
            reserve_out,
            &fees,
            0,
        )?;

        Ok(SwapQuote {
            amount_in,
            amount_in_net: to_amount(quote.amount_in_net)?,
            amount_out: to_amount(quote.amount_out)?,
            total_fee: to_amount(quote.total_fee)?,
            protocol_fee: to_amount(quote.protocol_fee)?,
        })
    }

    // ========================================================
    // SHARE LEDGER
    // ========================================================

    pub fn total_supply(env: Env) -> i128 {
        shares::total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        shares::balance(&env, &id)
    }

    /// Shares held by the locked sink; never redeemable
    pub fn locked_liquidity(env: Env) -> i128 {
        shares::balance(&env, &shares::locked_sink(&env))
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PairError> {
        from.require_auth();
        read_config(&env)?;

        shares::transfer(&env, &from, &to, amount)?;
        extend_instance_ttl(&env);
        Ok(())
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Deposit both tokens and receive shares
    ///
    /// Returns `(amount0, amount1, shares)`, where the amounts are what the
    /// pair actually received.
    pub fn deposit(
        env: Env,
        sender: Address,
        amount0_desired: i128,
        amount1_desired: i128,
        amount0_min: i128,
        amount1_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<(i128, i128, i128), PairError> {
        sender.require_auth();

        guard::acquire(&env)?;
        let result = Self::deposit_inner(
            &env,
            &sender,
            amount0_desired,
            amount1_desired,
            amount0_min,
            amount1_min,
            &to,
            deadline,
        );
        guard::release(&env);
        result
    }

    /// Burn shares and receive both tokens
    ///
    /// Returns `(amount0, amount1)` sent to `to`.
    pub fn withdraw(
        env: Env,
        owner: Address,
        shares: i128,
        amount0_min: i128,
        amount1_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<(i128, i128), PairError> {
        owner.require_auth();

        guard::acquire(&env)?;
        let result = Self::withdraw_inner(&env, &owner, shares, amount0_min, amount1_min, &to, deadline);
        guard::release(&env);
        result
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Exact-input swap of `token_in` for the other token
    pub fn swap(
        env: Env,
        sender: Address,
        token_in: Address,
        amount_in: i128,
        amount_out_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<SwapResult, PairError> {
        sender.require_auth();

        guard::acquire(&env)?;
        let result = Self::swap_inner(&env, &sender, &token_in, amount_in, amount_out_min, &to, deadline);
        guard::release(&env);
        result
    }

    // ========================================================
    // RESERVE MAINTENANCE
    // ========================================================

    /// Commit current token balances as reserves
    pub fn sync(env: Env) -> Result<(), PairError> {
        guard::acquire(&env)?;
        let result = Self::sync_inner(&env);
        guard::release(&env);
        result
    }

    /// Send balances in excess of reserves to `to`
    ///
    /// Returns `(amount0, amount1)` skimmed.
    pub fn skim(env: Env, to: Address) -> Result<(i128, i128), PairError> {
        guard::acquire(&env)?;
        let result = Self::skim_inner(&env, &to);
        guard::release(&env);
        result
    }

    // ========================================================
    // ADMIN
    // ========================================================

    pub fn set_fee_config(
        env: Env,
        swap_fee_bps: u32,
        protocol_share_bps: u32,
        protocol_recipient: Option<Address>,
    ) -> Result<(), PairError> {
        let config = read_config(&env)?;
        config.admin.require_auth();

        let fees = FeeConfig::validate(&env, swap_fee_bps, protocol_share_bps, protocol_recipient)?;
        write_fee_config(&env, &fees);
        extend_instance_ttl(&env);

        log!(&env, "fee config updated", swap_fee_bps, protocol_share_bps);
        emit_fees_updated(&env, fees.swap_fee_bps, fees.protocol_share_bps, &fees.protocol_recipient);
        Ok(())
    }

    /// Pause or resume deposits, withdrawals, swaps and reserve maintenance
    pub fn set_paused(env: Env, paused: bool) -> Result<(), PairError> {
        let config = read_config(&env)?;
        config.admin.require_auth();

        write_paused(&env, paused);
        extend_instance_ttl(&env);

        log!(&env, "pause flag set", paused);
        emit_paused(&env, paused);
        Ok(())
    }

    /// Hand control to `new_admin`; both sides must authorize
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), PairError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();
        new_admin.require_auth();

        let old_admin = config.admin.clone();
        config.admin = new_admin;
        write_config(&env, &config);
        extend_instance_ttl(&env);

        emit_admin_updated(&env, &old_admin, &config.admin);
        Ok(())
    }
}

// ============================================================
// INTERNAL OPERATIONS
// ============================================================

impl ReservoirPair {
    fn deposit_inner(
        env: &Env,
        sender: &Address,
        amount0_desired: i128,
        amount1_desired: i128,
        amount0_min: i128,
        amount1_min: i128,
        to: &Address,
        deadline: u64,
    ) -> Result<(i128, i128, i128), PairError> {
        let config = ensure_active(env)?;
        check_deadline(env, deadline)?;

        if amount0_desired <= 0 || amount1_desired <= 0 || amount0_min < 0 || amount1_min < 0 {
            return Err(PairError::InvalidParameters);
        }

        let state = read_state(env);
        let (amount0, amount1) = liquidity::deposit_amounts(
            env,
            amount0_desired as u128,
            amount1_desired as u128,
            amount0_min as u128,
            amount1_min as u128,
            &state.reserves,
        )?;

        let pair = env.current_contract_address();
        let before0 = balance_of(env, &config.token0)?;
        let before1 = balance_of(env, &config.token1)?;

        token::Client::new(env, &config.token0).transfer(sender, &pair, &to_amount(amount0)?);
        token::Client::new(env, &config.token1).transfer(sender, &pair, &to_amount(amount1)?);

        let balance0 = balance_of(env, &config.token0)?;
        let balance1 = balance_of(env, &config.token1)?;
        let received0 = balance0.checked_sub(before0).ok_or(PairError::Overflow)?;
        let received1 = balance1.checked_sub(before1).ok_or(PairError::Overflow)?;

        // transfer taxes can push what arrived below the caller's bounds
        if received0 < amount0_min as u128 || received1 < amount1_min as u128 {
            return Err(PairError::InsufficientLiquidity);
        }

        let supply = shares::total_supply(env) as u128;
        let minted = liquidity::shares_to_mint(env, received0, received1, &state.reserves, supply)?;

        if minted.locked > 0 {
            shares::mint(env, &shares::locked_sink(env), to_amount(minted.locked)?)?;
        }
        shares::mint(env, to, to_amount(minted.shares)?)?;

        commit(env, &state, balance0, balance1)?;

        emit_liquidity_added(env, to, received0, received1, minted.shares);
        Ok((to_amount(received0)?, to_amount(received1)?, to_amount(minted.shares)?))
    }

    fn withdraw_inner(
        env: &Env,
        owner: &Address,
        shares: i128,
        amount0_min: i128,
        amount1_min: i128,
        to: &Address,
        deadline: u64,
    ) -> Result<(i128, i128), PairError> {
        let config = ensure_active(env)?;
        check_deadline(env, deadline)?;

        if shares <= 0 || amount0_min < 0 || amount1_min < 0 {
            return Err(PairError::InvalidParameters);
        }

        let state = read_state(env);
        let supply = shares::total_supply(env) as u128;
        let (amount0, amount1) = liquidity::amounts_to_release(
            env,
            shares as u128,
            amount0_min as u128,
            amount1_min as u128,
            &state.reserves,
            supply,
        )?;

        shares::burn(env, owner, shares)?;

        let pair = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(env, &config.token0).transfer(&pair, to, &to_amount(amount0)?);
        }
        if amount1 > 0 {
            token::Client::new(env, &config.token1).transfer(&pair, to, &to_amount(amount1)?);
        }

        let balance0 = balance_of(env, &config.token0)?;
        let balance1 = balance_of(env, &config.token1)?;
        commit(env, &state, balance0, balance1)?;

        emit_liquidity_removed(env, owner, to, amount0, amount1, shares as u128);
        Ok((to_amount(amount0)?, to_amount(amount1)?))
    }

    fn swap_inner(
        env: &Env,
        sender: &Address,
        token_in: &Address,
        amount_in: i128,
        amount_out_min: i128,
        to: &Address,
        deadline: u64,
    ) -> Result<SwapResult, PairError> {
        let config = ensure_active(env)?;
        check_deadline(env, deadline)?;

        if amount_in <= 0 || amount_out_min < 0 {
            return Err(PairError::InvalidParameters);
        }

        let state = read_state(env);
        let (reserve_in, reserve_out) = Self::oriented_reserves(&config, &state.reserves, token_in)?;
        if reserve_in == 0 || reserve_out == 0 {
            return Err(PairError::InsufficientLiquidity);
        }

        let token_out = if *token_in == config.token0 {
            config.token1.clone()
        } else {
            config.token0.clone()
        };
        let fees = read_fee_config(env)?;
        let pair = env.current_contract_address();

        let before_in = balance_of(env, token_in)?;
        token::Client::new(env, token_in).transfer(sender, &pair, &amount_in);
        let amount_in_actual = balance_of(env, token_in)?
            .checked_sub(before_in)
            .ok_or(PairError::Overflow)?;

        let quote = swap::quote_exact_in(
            env,
            amount_in_actual,
            reserve_in,
            reserve_out,
            &fees,
            amount_out_min as u128,
        )?;

        if quote.protocol_fee > 0 {
            token::Client::new(env, token_in).transfer(
                &pair,
                &fees.protocol_recipient,
                &to_amount(quote.protocol_fee)?,
            );
        }
        token::Client::new(env, &token_out).transfer(&pair, to, &to_amount(quote.amount_out)?);

        let balance0 = balance_of(env, &config.token0)?;
        let balance1 = balance_of(env, &config.token1)?;
        commit(env, &state, balance0, balance1)?;

        emit_swap(
            env,
            sender,
            to,
            token_in,
            amount_in_actual,
            quote.amount_out,
            quote.protocol_fee,
        );

        Ok(SwapResult {
            amount_in: to_amount(amount_in_actual)?,
            amount_out: to_amount(quote.amount_out)?,
            total_fee: to_amount(quote.total_fee)?,
            protocol_fee: to_amount(quote.protocol_fee)?,
        })
    }

    fn sync_inner(env: &Env) -> Result<(), PairError> {
        let config = ensure_active(env)?;

        // reserves without outstanding shares would be claimed by the next depositor
        if shares::total_supply(env) == 0 {
            return Err(PairError::InsufficientLiquidity);
        }

        let state = read_state(env);
        let balance0 = balance_of(env, &config.token0)?;
        let balance1 = balance_of(env, &config.token1)?;
        commit(env, &state, balance0, balance1)?;
        Ok(())
    }

    fn skim_inner(env: &Env, to: &Address) -> Result<(i128, i128), PairError> {
        let config = ensure_active(env)?;
        let reserves = read_state(env).reserves;

        let excess0 = balance_of(env, &config.token0)?.saturating_sub(reserves.reserve0);
        let excess1 = balance_of(env, &config.token1)?.saturating_sub(reserves.reserve1);

        let pair = env.current_contract_address();
        if excess0 > 0 {
            token::Client::new(env, &config.token0).transfer(&pair, to, &to_amount(excess0)?);
        }
        if excess1 > 0 {
            token::Client::new(env, &config.token1).transfer(&pair, to, &to_amount(excess1)?);
        }

        emit_skim(env, to, excess0, excess1);
        Ok((to_amount(excess0)?, to_amount(excess1)?))
    }

    /// `(reserve_in, reserve_out)` for a swap paying in `token_in`
    fn oriented_reserves(
        config: &PairConfig,
        reserves: &ReserveState,
        token_in: &Address,
    ) -> Result<(u128, u128), PairError> {
        if *token_in == config.token0 {
            Ok((reserves.reserve0, reserves.reserve1))
        } else if *token_in == config.token1 {
            Ok((reserves.reserve1, reserves.reserve0))
        } else {
            Err(PairError::InvalidToken)
        }
    }
}

// ============================================================
// HELPERS
// ============================================================

/// Config of an initialized, unpaused pair
fn ensure_active(env: &Env) -> Result<PairConfig, PairError> {
    let config = read_config(env)?;
    if is_paused(env) {
        return Err(PairError::Paused);
    }
    extend_instance_ttl(env);
    Ok(config)
}

fn check_deadline(env: &Env, deadline: u64) -> Result<(), PairError> {
    if env.ledger().timestamp() > deadline {
        return Err(PairError::DeadlineExpired);
    }
    Ok(())
}

/// The pair's true balance of `token`
fn balance_of(env: &Env, token: &Address) -> Result<u128, PairError> {
    let balance = token::Client::new(env, token).balance(&env.current_contract_address());
    u128::try_from(balance).map_err(|_| PairError::ReserveOverflow)
}

fn to_amount(value: u128) -> Result<i128, PairError> {
    i128::try_from(value).map_err(|_| PairError::Overflow)
}

/// Records observed balances as the new reserves, advancing the oracle.
fn commit(env: &Env, state: &OracleState, balance0: u128, balance1: u128) -> Result<(), PairError> {
    let next = state.commit(env, balance0, balance1, &LedgerClock::new(env))?;
    write_state(env, &next);

    log!(env, "reserves committed", balance0, balance1);
    emit_sync(env, balance0, balance1);
    Ok(())
}
