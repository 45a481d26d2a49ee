// Re-entrancy guard
//
// A flag in instance storage. Held from entry to exit of every operation that
// moves tokens, so a token contract calling back into the pair mid-transfer
// is rejected with `Locked`.

use soroban_sdk::{log, Env};

use crate::error::PairError;
use crate::storage::{clear_locked, is_locked, set_locked};

pub fn acquire(env: &Env) -> Result<(), PairError> {
    if is_locked(env) {
        log!(env, "re-entrant call rejected");
        return Err(PairError::Locked);
    }
    set_locked(env);
    Ok(())
}

pub fn release(env: &Env) {
    clear_locked(env);
}
