pub mod ast;
pub mod parser;

pub use crate::parser::ast::{Operand, Operator, Record, BATCH_BASE};
pub use crate::parser::parser::Batch;
