// Time sources for the oracle
//
// The commit step never reads the ledger directly; it asks a `TimeSource`.
// Contracts use `LedgerClock`, tests and simulations can pin time with
// `FixedClock`.

use soroban_sdk::Env;

/// Seconds, truncated to 32 bits. Elapsed time is computed with wrapping
/// subtraction so the truncation is harmless for windows under ~136 years.
pub trait TimeSource {
    fn now(&self) -> u32;
}

/// Ledger close time of the current execution environment.
pub struct LedgerClock<'a> {
    env: &'a Env,
}

impl<'a> LedgerClock<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl TimeSource for LedgerClock<'_> {
    fn now(&self) -> u32 {
        (self.env.ledger().timestamp() % (1u64 << 32)) as u32
    }
}

/// A clock stuck at one instant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FixedClock(pub u32);

impl TimeSource for FixedClock {
    fn now(&self) -> u32 {
        self.0
    }
}
