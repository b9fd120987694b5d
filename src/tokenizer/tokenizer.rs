use std::collections::{HashMap, VecDeque};

use lazy_static::*;

use super::token::{BatchTokenType, Token};

lazy_static! {
    static ref OPERATOR_TABLE: HashMap<&'static str, BatchTokenType> = {
        let mut table = HashMap::new();
        table.insert("<", BatchTokenType::Less);
        table.insert("+", BatchTokenType::Add);
        table.insert("-", BatchTokenType::Sub);
        table.insert("*", BatchTokenType::Mul);
        table.insert("/", BatchTokenType::Div);
        table.insert("#", BatchTokenType::Sharp);
        table
    };
}

/// Splits a batch on whitespace. Line breaks carry no meaning.
pub fn tokenize(origin: &str) -> VecDeque<Token<BatchTokenType>> {
    origin
        .split_whitespace()
        .map(|word| Token::new(word.to_string(), classify(word)))
        .collect()
}

fn classify(word: &str) -> BatchTokenType {
    if let Some(ty) = OPERATOR_TABLE.get(word) {
        *ty
    } else if word.bytes().all(|b| b.is_ascii_digit()) {
        BatchTokenType::Num
    } else {
        BatchTokenType::Unknown
    }
}

#[test]
fn test_tokenizer() {
    let tokens = tokenize("2\n+ 12 0034\n# 99\t7 1\n");
    let types: Vec<_> = tokens.iter().map(|t| t.ty).collect();
    assert_eq!(
        types,
        vec![
            BatchTokenType::Num,
            BatchTokenType::Add,
            BatchTokenType::Num,
            BatchTokenType::Num,
            BatchTokenType::Sharp,
            BatchTokenType::Num,
            BatchTokenType::Num,
            BatchTokenType::Num,
        ]
    );
    assert_eq!(tokens[3].val, "0034");
    assert_eq!(tokens[6].val, "7");
}

#[test]
fn test_unknown_words() {
    let tokens = tokenize("^ 12x -3 <=");
    assert!(tokens.iter().all(|t| t.ty == BatchTokenType::Unknown));
    assert!(tokenize(" \n\t ").is_empty());
}
