// Math error type
//
// Plain enum so the package stays independent of any contract's error codes.
// Contracts map it into their own `#[contracterror]` enum.

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    /// Result does not fit the target width
    Overflow,
    /// Division with a zero denominator
    DivisionByZero,
    /// TWAP window whose end is not strictly after its start
    InvalidWindow,
}
