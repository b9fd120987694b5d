use big_nat::{BigNat, BigNatError};

/// Base used for every operand in a batch.
pub const BATCH_BASE: u32 = 100;

pub type Operand = BigNat<BATCH_BASE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Less,
    Add,
    Sub,
    Mul,
    /// Quotient and remainder.
    Div,
    /// Product with the lowest `m` digits dropped.
    Sharp(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub operator: Operator,
    pub left: Operand,
    pub right: Operand,
}

impl Record {
    pub fn new(operator: Operator, left: Operand, right: Operand) -> Self {
        Record { operator, left, right }
    }

    /// Evaluates the record into its output line.
    pub fn execute(&self) -> Result<String, BigNatError> {
        let (a, b) = (&self.left, &self.right);
        let line = match self.operator {
            Operator::Less => a.is_smaller_than(b).to_string(),
            Operator::Add => (a + b).to_string(),
            Operator::Sub => (a - b).to_string(),
            Operator::Mul => (a * b).to_string(),
            Operator::Div => {
                let (quotient, remainder) = a.div_rem(b)?;
                format!("{} {}", quotient, remainder)
            }
            Operator::Sharp(m) => a.sharp(b, m)?.to_string(),
        };
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(operator: Operator, a: &str, b: &str) -> Record {
        Record::new(operator, a.parse().unwrap(), b.parse().unwrap())
    }

    #[test]
    fn test_execute() {
        assert_eq!(record(Operator::Less, "3", "12").execute().unwrap(), "1");
        assert_eq!(record(Operator::Less, "12", "12").execute().unwrap(), "0");
        assert_eq!(record(Operator::Less, "120", "12").execute().unwrap(), "-1");
        assert_eq!(record(Operator::Add, "99", "1").execute().unwrap(), "100");
        assert_eq!(record(Operator::Sub, "5", "7").execute().unwrap(), "0");
        assert_eq!(record(Operator::Mul, "12345", "67").execute().unwrap(), "827115");
        assert_eq!(record(Operator::Div, "12345", "67").execute().unwrap(), "184 17");
        assert_eq!(record(Operator::Sharp(1), "12345", "67").execute().unwrap(), "8271");
    }

    #[test]
    fn test_execute_failures() {
        assert_eq!(
            record(Operator::Div, "1", "0").execute(),
            Err(BigNatError::DivisionByZero)
        );
        assert_eq!(
            record(Operator::Sharp(5), "12", "3").execute(),
            Err(BigNatError::IndexOutOfRange { index: 5, len: 1 })
        );
    }
}
