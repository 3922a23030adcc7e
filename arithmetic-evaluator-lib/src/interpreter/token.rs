use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
}

/// The shape of a token, without its payload.
///
/// `Start` stands in for the token before the first one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TokenKind {
    #[default]
    Start,
    Number,
    Operator,
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(_) => TokenKind::Operator,
            Token::OpenParenthesis => TokenKind::OpenParenthesis,
            Token::CloseParenthesis => TokenKind::CloseParenthesis,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        match (characters.next(), characters.next()) {
            (Some('('), None) => return Ok(Token::OpenParenthesis),
            (Some(')'), None) => return Ok(Token::CloseParenthesis),
            (Some(symbol), None) => {
                if let Some(operator) = BinaryOperator::from_symbol(symbol) {
                    return Ok(Token::Operator(operator));
                }
            }
            _ => {}
        }
        parse_number(input)
    }
}

fn parse_number(text: &str) -> Result<Token, ExpressionError> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(ExpressionError::InvalidCharacterInExpression);
    }
    text.parse::<f64>()
        .map(Token::Number)
        .map_err(|_| ExpressionError::InvalidNumberFormat)
}
