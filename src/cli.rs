use std::fs;
use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::parser::Batch;
use crate::self_check;

#[derive(Debug, Parser)]
#[command(name = "radix-calc", version, about = "Big non-negative integer calculator", propagate_version = true)]
pub enum RadixCalcCommand {
    #[command(about = "Evaluate a batch of operations")]
    Batch(BatchCommand),
    #[command(about = "Check big-number results against native arithmetic on random operands")]
    Check(CheckCommand),
}

impl RadixCalcCommand {
    pub fn execute() -> Result<()> {
        match Self::parse() {
            RadixCalcCommand::Batch(batch) => batch.execute(),
            RadixCalcCommand::Check(check) => check.execute(),
        }
    }
}

#[derive(Debug, Args)]
pub struct BatchCommand {
    /// Batch file, `-` for stdin
    #[arg(index = 1, env = "RADIX_CALC_INPUT", default_value = "fin.txt")]
    input: String,
    /// Result file, `-` for stdout
    #[arg(long, short = 'o', env = "RADIX_CALC_OUTPUT", default_value = "fout.txt")]
    output: String,
}

impl BatchCommand {
    pub fn execute(&self) -> Result<()> {
        let source = if self.input == "-" {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        } else {
            fs::read_to_string(&self.input).with_context(|| format!("reading {}", self.input))?
        };

        let batch = Batch::parse(&source)?;
        let lines = batch.execute()?;
        info!("evaluated {} records from {}", lines.len(), self.input);

        let mut out = String::new();
        for line in &lines {
            out.push_str(line);
            out.push('\n');
        }
        if self.output == "-" {
            io::stdout().write_all(out.as_bytes())?;
        } else {
            fs::write(&self.output, out).with_context(|| format!("writing {}", self.output))?;
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[arg(long, short = 'n', env = "RADIX_CALC_ROUNDS", default_value_t = 1000)]
    rounds: usize,
    /// Seed for a reproducible run
    #[arg(long, env = "RADIX_CALC_SEED")]
    seed: Option<u64>,
}

impl CheckCommand {
    pub fn execute(&self) -> Result<()> {
        let mismatches = match self.seed {
            Some(seed) => self_check::run(self.rounds, &mut StdRng::seed_from_u64(seed)),
            None => self_check::run(self.rounds, &mut rand::rng()),
        };
        for mismatch in &mismatches {
            println!("{}", mismatch);
        }
        if !mismatches.is_empty() {
            bail!("{} mismatches in {} rounds", mismatches.len(), self.rounds);
        }
        println!("{} rounds, all results match", self.rounds);
        Ok(())
    }
}
