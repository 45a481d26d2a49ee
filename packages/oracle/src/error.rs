use reservoir_math::MathError;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// A balance does not fit the 112-bit reserve width
    ReserveOverflow,
    Math(MathError),
}

impl From<MathError> for OracleError {
    fn from(err: MathError) -> Self {
        OracleError::Math(err)
    }
}
