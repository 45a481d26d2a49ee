// Reservoir Math Package

#![no_std]

pub mod constants;
pub mod error;
pub mod liquidity;
pub mod swap;
pub mod twap;
pub mod u256;

// Re-export commonly used items from constants
pub use constants::*;

pub use error::MathError;

pub use liquidity::{initial_shares, proportional_shares, quote, redeem_amounts};

pub use swap::{apply_fee, fee_split, get_amount_out};

pub use twap::{consult, price_increment};

pub use u256::{isqrt, mul_div, sqrt_product, u256_max, wrapping_add, wrapping_sub};
