use thiserror::Error;

/// Failures reported by [`BigNat`](crate::BigNat) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigNatError {
    /// The text is not a non-negative decimal numeral.
    #[error("invalid numeral `{0}`")]
    InvalidFormat(String),
    /// An index or slice bound does not resolve inside the digit sequence.
    #[error("index {index} out of range for {len} digits")]
    IndexOutOfRange { index: isize, len: usize },
    #[error("division by zero")]
    DivisionByZero,
}
