use big_nat::BigNatError;
use thiserror::Error;

/// Failures while reading or evaluating a batch. Records are numbered from 1.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("missing record count")]
    MissingCount,
    #[error("invalid record count `{0}`")]
    InvalidCount(String),
    #[error("record {record}: unexpected end of input")]
    UnexpectedEnd { record: usize },
    #[error("record {record}: unknown operator `{token}`")]
    UnknownOperator { record: usize, token: String },
    #[error("record {record}: invalid operand `{token}`")]
    InvalidOperand {
        record: usize,
        token: String,
        #[source]
        source: BigNatError,
    },
    #[error("record {record}: invalid truncation parameter `{token}`")]
    InvalidTruncation { record: usize, token: String },
    #[error("record {record}: {source}")]
    Arithmetic { record: usize, source: BigNatError },
}
