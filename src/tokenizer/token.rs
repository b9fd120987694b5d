#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchTokenType {
    Num,
    Less,
    Add,
    Sub,
    Mul,
    Div,
    Sharp,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<TokenType> {
    pub val: String,
    pub ty: TokenType,
}

impl<TokenType> Token<TokenType> {
    pub fn new(val: String, ty: TokenType) -> Token<TokenType> {
        Token { val, ty }
    }
}
