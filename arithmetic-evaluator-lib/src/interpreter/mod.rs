pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;
pub mod validator;

use crate::interpreter::error::{ensure_finite, ExpressionError, Result};
use crate::interpreter::token::Token;
use anyhow::Context;
use log::{debug, trace};
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression, which is always finite.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::evaluate;
/// use arithmetic_evaluator::ExpressionError;
///
/// assert_eq!(evaluate("2 + 3 * (-4)"), Ok(-10.0));
/// assert_eq!(evaluate("1 / 0"), Err(ExpressionError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    let postfix_tokens = convert(expression)?;
    let value = ensure_finite(evaluator::evaluate_postfix(postfix_tokens)?)?;
    debug!("{} = {}", trim_separators(expression), value);
    Ok(value)
}

/// Converts the given input string into the equivalent postfix tokens,
/// which can be evaluated in a single pass.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression in postfix order.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::{convert, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = convert("1 + 2 * 3")?;
/// assert_eq!(tokens_to_string(postfix_tokens)?, "1 2 3 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Vec<Token>> {
    let expression = trim_separators(expression);
    if expression.is_empty() {
        return Err(ExpressionError::ExpressionIsEmpty);
    }

    let infix_tokens = lexer::tokenize(expression)?;
    trace!("infix tokens: {:?}", infix_tokens);
    let postfix_tokens = parser::to_postfix(infix_tokens)?;
    debug!("postfix tokens: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}

/// Only ASCII whitespace separates tokens.
fn trim_separators(expression: &str) -> &str {
    expression.trim_matches(|character: char| character.is_ascii_whitespace())
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::tokens_to_string;
/// use arithmetic_evaluator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![Token::Number(2.0), Token::Number(-0.5), "*".parse()?];
/// assert_eq!(tokens_to_string(tokens)?, "2 -0.5 *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> anyhow::Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
