use std::collections::VecDeque;

use log::{debug, warn};

use super::ast::{Operand, Operator, Record};
use crate::error::BatchError;
use crate::tokenizer::{tokenize, BatchTokenType, Token};

/// A parsed batch: a record count followed by that many records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    records: Vec<Record>,
}

impl Batch {
    pub fn parse(origin: &str) -> Result<Self, BatchError> {
        Parser::new(origin).parse()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Evaluates every record in order, stopping at the first failure.
    pub fn execute(&self) -> Result<Vec<String>, BatchError> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let line = record
                    .execute()
                    .map_err(|source| BatchError::Arithmetic { record: i + 1, source })?;
                debug!("record {}: {:?} -> {}", i + 1, record.operator, line);
                Ok(line)
            })
            .collect()
    }
}

// Grammar, whitespace separated:
// batch  -> count record*
// record -> op operand operand        op in < + - * /
//         | # operand operand m
struct Parser {
    tokens: VecDeque<Token<BatchTokenType>>,
}

impl Parser {
    fn new(origin: &str) -> Self {
        Parser { tokens: tokenize(origin) }
    }
    fn get_next_token(&mut self, record: usize) -> Result<Token<BatchTokenType>, BatchError> {
        self.tokens.pop_front().ok_or(BatchError::UnexpectedEnd { record })
    }
    fn watch_next_token(&self) -> Option<&Token<BatchTokenType>> {
        self.tokens.front()
    }
    fn parse(mut self) -> Result<Batch, BatchError> {
        let count = self.parse_count()?;
        // the count is untrusted, a record takes at least three tokens
        let mut records = Vec::with_capacity(count.min(self.tokens.len() / 3));
        for record in 1..=count {
            records.push(self.parse_record(record)?);
        }
        if let Some(token) = self.watch_next_token() {
            warn!(
                "ignoring {} trailing token(s) after {} records, starting at `{}`",
                self.tokens.len(),
                count,
                token.val
            );
        }
        Ok(Batch { records })
    }
    fn parse_count(&mut self) -> Result<usize, BatchError> {
        let token = self.tokens.pop_front().ok_or(BatchError::MissingCount)?;
        match token.ty {
            BatchTokenType::Num => token
                .val
                .parse()
                .map_err(|_| BatchError::InvalidCount(token.val)),
            _ => Err(BatchError::InvalidCount(token.val)),
        }
    }
    fn parse_record(&mut self, record: usize) -> Result<Record, BatchError> {
        let token = self.get_next_token(record)?;
        let operator = match token.ty {
            BatchTokenType::Less => Operator::Less,
            BatchTokenType::Add => Operator::Add,
            BatchTokenType::Sub => Operator::Sub,
            BatchTokenType::Mul => Operator::Mul,
            BatchTokenType::Div => Operator::Div,
            // m follows both operands
            BatchTokenType::Sharp => Operator::Sharp(0),
            BatchTokenType::Num | BatchTokenType::Unknown => {
                return Err(BatchError::UnknownOperator { record, token: token.val });
            }
        };
        let left = self.parse_operand(record)?;
        let right = self.parse_operand(record)?;
        let operator = match operator {
            Operator::Sharp(_) => Operator::Sharp(self.parse_truncation(record)?),
            other => other,
        };
        Ok(Record::new(operator, left, right))
    }
    fn parse_operand(&mut self, record: usize) -> Result<Operand, BatchError> {
        let token = self.get_next_token(record)?;
        token
            .val
            .parse()
            .map_err(|source| BatchError::InvalidOperand { record, token: token.val, source })
    }
    fn parse_truncation(&mut self, record: usize) -> Result<usize, BatchError> {
        let token = self.get_next_token(record)?;
        match token.ty {
            BatchTokenType::Num => token
                .val
                .parse()
                .map_err(|_| BatchError::InvalidTruncation { record, token: token.val }),
            _ => Err(BatchError::InvalidTruncation { record, token: token.val }),
        }
    }
}

#[test]
fn test_parse() {
    let batch = Batch::parse("3\n< 12 34\n/ 12345 67\n# 12345 67 1\n").unwrap();
    let records = batch.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].operator, Operator::Less);
    assert_eq!(records[1].left.to_string(), "12345");
    assert_eq!(records[2].operator, Operator::Sharp(1));
    assert_eq!(
        batch.execute().unwrap(),
        vec!["1".to_string(), "184 17".to_string(), "8271".to_string()]
    );
}

#[test]
fn test_parse_ignores_trailing_tokens() {
    let batch = Batch::parse("1 + 1 2 * 3 4").unwrap();
    assert_eq!(batch.records().len(), 1);
    assert_eq!(batch.execute().unwrap(), vec!["3".to_string()]);
}

#[test]
fn test_parse_errors() {
    assert!(matches!(Batch::parse(""), Err(BatchError::MissingCount)));
    assert!(matches!(Batch::parse("x"), Err(BatchError::InvalidCount(_))));
    assert!(matches!(
        Batch::parse("2 + 1 2"),
        Err(BatchError::UnexpectedEnd { record: 2 })
    ));
    assert!(matches!(
        Batch::parse("1 ^ 1 2"),
        Err(BatchError::UnknownOperator { record: 1, .. })
    ));
    assert!(matches!(
        Batch::parse("1 + 1 2a"),
        Err(BatchError::InvalidOperand { record: 1, .. })
    ));
    assert!(matches!(
        Batch::parse("1 # 1 2 -1"),
        Err(BatchError::InvalidTruncation { record: 1, .. })
    ));
    assert!(matches!(
        Batch::parse("1 # 1 2"),
        Err(BatchError::UnexpectedEnd { record: 1 })
    ));
}

#[test]
fn test_parse_huge_count() {
    assert!(matches!(
        Batch::parse("18446744073709551615 + 1 2"),
        Err(BatchError::UnexpectedEnd { record: 2 })
    ));
    assert!(matches!(
        Batch::parse("10000000000000 < 3 4"),
        Err(BatchError::UnexpectedEnd { record: 2 })
    ));
}

#[test]
fn test_execute_reports_record() {
    let batch = Batch::parse("2 + 1 2 / 5 0").unwrap();
    let err = batch.execute().unwrap_err();
    assert!(matches!(err, BatchError::Arithmetic { record: 2, .. }));
    assert_eq!(err.to_string(), "record 2: division by zero");
}
