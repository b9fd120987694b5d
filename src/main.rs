use anyhow::Result;
use radix_calc::{init_logger, RadixCalcCommand};

fn main() -> Result<()> {
    init_logger(false);
    RadixCalcCommand::execute()
}
