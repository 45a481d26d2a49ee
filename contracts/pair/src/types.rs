// Pair Types

use soroban_sdk::{contracttype, Address, Env};

use reservoir_math::{FEE_DENOMINATOR, MAX_SWAP_FEE_BPS};

use crate::error::PairError;

// ============================================================
// PAIR CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairConfig {
    /// Address allowed to change fees, pause, and hand over control
    pub admin: Address,
    /// Lower-sorted token
    pub token0: Address,
    /// Higher-sorted token
    pub token1: Address,
}

// ============================================================
// FEE CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    /// Swap fee in basis points (e.g., 30 = 0.30%)
    pub swap_fee_bps: u32,
    /// Protocol's share of the swap fee in basis points of the fee
    pub protocol_share_bps: u32,
    /// Receives the protocol share, paid in the input token
    pub protocol_recipient: Address,
}

impl FeeConfig {
    /// Validates a requested fee configuration.
    ///
    /// A missing recipient, or the pair's own address, is rejected: the pair
    /// address is the locked-share sink and must never be credited.
    pub fn validate(
        env: &Env,
        swap_fee_bps: u32,
        protocol_share_bps: u32,
        protocol_recipient: Option<Address>,
    ) -> Result<FeeConfig, PairError> {
        if swap_fee_bps > MAX_SWAP_FEE_BPS {
            return Err(PairError::FeeTooHigh);
        }
        if protocol_share_bps > FEE_DENOMINATOR {
            return Err(PairError::InvalidParameters);
        }

        let protocol_recipient = protocol_recipient.ok_or(PairError::ZeroAddress)?;
        if protocol_recipient == env.current_contract_address() {
            return Err(PairError::ZeroAddress);
        }

        Ok(FeeConfig {
            swap_fee_bps,
            protocol_share_bps,
            protocol_recipient,
        })
    }
}

// ============================================================
// SWAP RESULTS
// ============================================================

/// Outcome of an executed swap. All amounts are in token units actually moved.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    /// Input the pair actually received
    pub amount_in: i128,
    pub amount_out: i128,
    /// Whole swap fee, in the input token
    pub total_fee: i128,
    /// Part of `total_fee` sent to the protocol recipient
    pub protocol_fee: i128,
}

/// Preview of a swap against current reserves, assuming no transfer tax.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    pub amount_in: i128,
    /// Input left after the swap fee; this is what gets priced
    pub amount_in_net: i128,
    pub amount_out: i128,
    pub total_fee: i128,
    pub protocol_fee: i128,
}
