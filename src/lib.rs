mod cli;
mod error;
mod logger;
mod parser;
mod tokenizer;
pub mod self_check;

pub use crate::cli::{BatchCommand, CheckCommand, RadixCalcCommand};
pub use crate::error::BatchError;
pub use crate::logger::init_logger;
pub use crate::parser::{Batch, Operand, Operator, Record, BATCH_BASE};

#[cfg(test)]
mod tests {
    use crate::{init_logger, Batch};

    #[test]
    fn it_works() {
        init_logger(true);
        let batch = Batch::parse("2\n+ 99999999999999999999 1\n- 67 12345\n").unwrap();
        let lines = batch.execute().unwrap();
        assert_eq!(lines, vec!["100000000000000000000".to_string(), "0".to_string()]);
    }
}
