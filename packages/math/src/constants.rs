// Constants for the constant-product pair
//
// - Fee constants are in basis points
// - Oracle prices are UQ112.112 fixed point
// - Reserves are bounded to 112 bits so that a price fits the encoding

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Fee denominator (10_000 bps = 100%)
pub const FEE_DENOMINATOR: u32 = 10_000;

/// Ceiling for the swap fee (10%)
pub const MAX_SWAP_FEE_BPS: u32 = 1_000;

/// Default swap fee (0.30%)
pub const DEFAULT_SWAP_FEE_BPS: u32 = 30;

// ============================================================
// LIQUIDITY CONSTANTS
// ============================================================

/// Shares permanently locked on the first deposit.
/// Makes share-price inflation by the first depositor uneconomic.
pub const MINIMUM_LIQUIDITY: u128 = 1_000;

// ============================================================
// RESERVE / ORACLE CONSTANTS
// ============================================================

/// Fractional bits of an oracle price
pub const RESOLUTION: u32 = 112;

/// Q112 multiplier (2^112)
pub const Q112: u128 = 1u128 << RESOLUTION;

/// Largest value a reserve may hold (2^112 - 1)
pub const MAX_RESERVE: u128 = Q112 - 1;
