mod infix_converter;

use crate::interpreter::error::Result;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Reorders validated infix tokens into postfix order,
/// which can be evaluated without looking at precedence.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to reorder, in infix format.
///
/// returns: The same tokens in postfix order, without parentheses.
///
/// # Examples
///
/// ```
/// # use arithmetic_evaluator::ExpressionError;
/// # fn main() -> Result<(), ExpressionError> {
/// use arithmetic_evaluator::interpreter::parser::to_postfix;
/// use arithmetic_evaluator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number(2.0),
///     "-".parse()?,
///     Token::Number(1.0),
/// ];
/// let postfix_tokens = to_postfix(infix_tokens)?;
/// assert_eq!(postfix_tokens[2], "-".parse::<Token>()?);
/// # Ok(()) }
/// ```
pub fn to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    infix_to_postfix(infix_tokens)
}
