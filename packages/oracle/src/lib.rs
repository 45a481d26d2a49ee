#![no_std]

pub mod clock;
pub mod commit;
pub mod error;
pub mod types;

pub use clock::{FixedClock, LedgerClock, TimeSource};
pub use commit::consult;
pub use error::OracleError;
pub use types::{OracleAccumulator, OracleState, PriceSample, ReserveState};
