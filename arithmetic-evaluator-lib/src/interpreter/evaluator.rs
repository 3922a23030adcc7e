use crate::interpreter::error::{ensure_finite, ExpressionError, Result};
use crate::interpreter::token::Token;
use itertools::Itertools;

/// Evaluates tokens ordered in postfix notation.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to evaluate.
///
/// returns: The single value the tokens reduce to.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::evaluator::evaluate_postfix;
/// use arithmetic_evaluator::interpreter::token::Token;
///
/// let tokens = vec![Token::Number(6.0), Token::Number(4.0), "%".parse().unwrap()];
/// assert_eq!(evaluate_postfix(tokens), Ok(2.0));
/// ```
pub fn evaluate_postfix(postfix_tokens: Vec<Token>) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix_tokens.len() / 2 + 1);

    for token in postfix_tokens {
        match token {
            Token::Number(value) => operands.push(ensure_finite(value)?),
            Token::Operator(operator) => {
                let right = operands.pop().ok_or(ExpressionError::MissingOperand)?;
                let left = operands.pop().ok_or(ExpressionError::MissingOperand)?;
                let result = ensure_finite(operator.evaluate(left, right)?)?;
                operands.push(result);
            }
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(ExpressionError::InvalidExpression)
            }
        }
    }

    operands
        .into_iter()
        .exactly_one()
        .map_err(|_| ExpressionError::InvalidExpression)
}
