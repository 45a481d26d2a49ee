// Share ledger
//
// The pair tracks its own liquidity shares. The pair's contract address is the
// locked sink: it receives MINIMUM_LIQUIDITY on the first deposit and can never
// send, so total supply never returns to zero once liquidity exists.

use soroban_sdk::{Address, Env};

use crate::error::PairError;
use crate::storage::{read_share_balance, read_total_supply, write_share_balance, write_total_supply};

pub fn locked_sink(env: &Env) -> Address {
    env.current_contract_address()
}

pub fn total_supply(env: &Env) -> i128 {
    read_total_supply(env)
}

pub fn balance(env: &Env, id: &Address) -> i128 {
    read_share_balance(env, id)
}

pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), PairError> {
    let supply = read_total_supply(env)
        .checked_add(amount)
        .ok_or(PairError::Overflow)?;
    let balance = read_share_balance(env, to)
        .checked_add(amount)
        .ok_or(PairError::Overflow)?;

    write_total_supply(env, supply);
    write_share_balance(env, to, balance);
    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), PairError> {
    if *from == locked_sink(env) {
        return Err(PairError::LockedShares);
    }

    let balance = read_share_balance(env, from);
    if balance < amount {
        return Err(PairError::InsufficientBalance);
    }

    let supply = read_total_supply(env)
        .checked_sub(amount)
        .ok_or(PairError::Overflow)?;

    write_share_balance(env, from, balance - amount);
    write_total_supply(env, supply);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), PairError> {
    if amount <= 0 {
        return Err(PairError::InvalidParameters);
    }
    if *from == locked_sink(env) {
        return Err(PairError::LockedShares);
    }

    let from_balance = read_share_balance(env, from);
    if from_balance < amount {
        return Err(PairError::InsufficientBalance);
    }
    if from == to {
        return Ok(());
    }

    let to_balance = read_share_balance(env, to)
        .checked_add(amount)
        .ok_or(PairError::Overflow)?;

    write_share_balance(env, from, from_balance - amount);
    write_share_balance(env, to, to_balance);
    Ok(())
}
