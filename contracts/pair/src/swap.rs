// Swap engine pricing
//
// Pure quote of an exact-input swap. The contract feeds it the amount the
// pair actually received, so fee-on-transfer tokens are priced on what
// arrived rather than what was requested.

use soroban_sdk::Env;

use reservoir_math::{apply_fee, fee_split, get_amount_out};

use crate::error::PairError;
use crate::types::FeeConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    pub amount_in_net: u128,
    pub amount_out: u128,
    pub total_fee: u128,
    pub protocol_fee: u128,
}

pub fn quote_exact_in(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fees: &FeeConfig,
    amount_out_min: u128,
) -> Result<Quote, PairError> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(PairError::InsufficientLiquidity);
    }

    let amount_in_net = apply_fee(env, amount_in, fees.swap_fee_bps)?;
    let amount_out = get_amount_out(env, amount_in_net, reserve_in, reserve_out)?;
    if amount_out == 0 || amount_out < amount_out_min {
        return Err(PairError::InsufficientOutputAmount);
    }

    let (total_fee, protocol_fee) =
        fee_split(env, amount_in, fees.swap_fee_bps, fees.protocol_share_bps)?;

    Ok(Quote {
        amount_in_net,
        amount_out,
        total_fee,
        protocol_fee,
    })
}
