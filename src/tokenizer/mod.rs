pub mod token;
pub mod tokenizer;

pub use crate::tokenizer::token::{BatchTokenType, Token};
pub use crate::tokenizer::tokenizer::tokenize;
