// Pair error taxonomy
//
// Every failing entry point returns one of these; the host discards all
// storage writes, share mints and token transfers made before the failure.

use soroban_sdk::contracterror;

use reservoir_math::MathError;
use reservoir_oracle::OracleError;

// ============================================================
// CONTRACT ERRORS
// ============================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    // Initialization errors (100-199)
    /// Pair has already been initialized
    AlreadyInitialized = 100,
    /// Pair has not been initialized
    NotInitialized = 101,

    // Request errors (200-299)
    /// Ledger time is past the caller's deadline
    DeadlineExpired = 200,
    /// Non-positive amount, negative minimum, or protocol share above 100%
    InvalidParameters = 201,
    /// Token is not one of the pair's two tokens
    InvalidToken = 202,
    /// Protocol fee recipient missing or not allowed
    ZeroAddress = 203,
    /// Swap fee above the maximum
    FeeTooHigh = 204,

    // Liquidity errors (300-399)
    /// Reserves cannot serve the request, or a slippage bound was missed
    InsufficientLiquidity = 300,
    /// Owner holds fewer shares than requested
    InsufficientBalance = 301,
    /// Permanently locked shares cannot move
    LockedShares = 302,

    // Swap errors (400-499)
    /// Output is zero or below the caller's minimum
    InsufficientOutputAmount = 400,

    // State errors (500-599)
    /// A balance does not fit in 112 bits
    ReserveOverflow = 500,
    /// Re-entrant call while an operation is in progress
    Locked = 501,
    /// Pair is paused
    Paused = 502,
    /// Oracle window end is not after its start
    InvalidWindow = 503,

    // Math errors (700-799)
    /// Arithmetic overflow
    Overflow = 700,
    /// Division by zero
    DivisionByZero = 701,
}

// ============================================================
// ERROR CONVERSION
// ============================================================

impl From<MathError> for PairError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Overflow => PairError::Overflow,
            MathError::DivisionByZero => PairError::DivisionByZero,
            MathError::InvalidWindow => PairError::InvalidWindow,
        }
    }
}

impl From<OracleError> for PairError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::ReserveOverflow => PairError::ReserveOverflow,
            OracleError::Math(inner) => inner.into(),
        }
    }
}
