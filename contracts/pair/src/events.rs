// Pair events module
// Topic names are short symbols; indexers key on the first topic.

use soroban_sdk::{symbol_short, Address, Env};

/// Emitted after a deposit
/// Topics: ("liq_add", to)
/// Data: (amount0, amount1, shares)
pub fn emit_liquidity_added(env: &Env, to: &Address, amount0: u128, amount1: u128, shares: u128) {
    env.events().publish(
        (symbol_short!("liq_add"), to.clone()),
        (amount0, amount1, shares),
    );
}

/// Emitted after a withdrawal
/// Topics: ("liq_rem", owner, to)
/// Data: (amount0, amount1, shares)
pub fn emit_liquidity_removed(
    env: &Env,
    owner: &Address,
    to: &Address,
    amount0: u128,
    amount1: u128,
    shares: u128,
) {
    env.events().publish(
        (symbol_short!("liq_rem"), owner.clone(), to.clone()),
        (amount0, amount1, shares),
    );
}

/// Emitted after a swap
/// Topics: ("swap", sender, to)
/// Data: (token_in, amount_in, amount_out, protocol_fee)
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    to: &Address,
    token_in: &Address,
    amount_in: u128,
    amount_out: u128,
    protocol_fee: u128,
) {
    env.events().publish(
        (symbol_short!("swap"), sender.clone(), to.clone()),
        (token_in.clone(), amount_in, amount_out, protocol_fee),
    );
}

/// Emitted on every reserve commit
/// Topics: ("sync",)
/// Data: (reserve0, reserve1)
pub fn emit_sync(env: &Env, reserve0: u128, reserve1: u128) {
    env.events()
        .publish((symbol_short!("sync"),), (reserve0, reserve1));
}

/// Emitted when excess balances are skimmed
/// Topics: ("skim", to)
/// Data: (amount0, amount1)
pub fn emit_skim(env: &Env, to: &Address, amount0: u128, amount1: u128) {
    env.events()
        .publish((symbol_short!("skim"), to.clone()), (amount0, amount1));
}

/// Emitted at initialization and on every fee update
/// Topics: ("fees_upd",)
/// Data: (swap_fee_bps, protocol_share_bps, protocol_recipient)
pub fn emit_fees_updated(
    env: &Env,
    swap_fee_bps: u32,
    protocol_share_bps: u32,
    protocol_recipient: &Address,
) {
    env.events().publish(
        (symbol_short!("fees_upd"),),
        (swap_fee_bps, protocol_share_bps, protocol_recipient.clone()),
    );
}

/// Topics: ("paused",)
/// Data: paused
pub fn emit_paused(env: &Env, paused: bool) {
    env.events().publish((symbol_short!("paused"),), paused);
}

/// Topics: ("admin_upd",)
/// Data: (old_admin, new_admin)
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("admin_upd"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
