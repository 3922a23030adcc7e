use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

pub(super) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, &operator)
            }
            Token::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(ExpressionError::MismatchedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop_front() {
            None => return Err(ExpressionError::MismatchedParentheses),
            // Discard the open parenthesis.
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    operator: &BinaryOperator,
) {
    while let Some(Token::Operator(other_operator)) = operators.front().copied() {
        if !other_operator.precedence_ge(operator) {
            break;
        }
        output.extend(operators.pop_front());
    }

    operators.push_front(Token::Operator(*operator));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn number(value: f64) -> Token {
        Token::Number(value)
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = [number(1.0), "+".parse().unwrap(), number(2.0)].to_vec();
        let postfix = [number(1.0), number(2.0), "+".parse().unwrap()].to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = [
            number(1.0),
            "-".parse().unwrap(),
            Token::OpenParenthesis,
            number(2.0),
            "+".parse().unwrap(),
            number(3.0),
            Token::CloseParenthesis,
        ]
        .to_vec();
        let postfix = [
            number(1.0),
            number(2.0),
            number(3.0),
            "+".parse().unwrap(),
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        // 1 + 2 * 3 / (4 - 5) % 6
        let infix = [
            number(1.0),
            "+".parse().unwrap(),
            number(2.0),
            "*".parse().unwrap(),
            number(3.0),
            "/".parse().unwrap(),
            Token::OpenParenthesis,
            number(4.0),
            "-".parse().unwrap(),
            number(5.0),
            Token::CloseParenthesis,
            "%".parse().unwrap(),
            number(6.0),
        ]
        .to_vec();
        let postfix = [
            number(1.0),
            number(2.0),
            number(3.0),
            "*".parse().unwrap(),
            number(4.0),
            number(5.0),
            "-".parse().unwrap(),
            "/".parse().unwrap(),
            number(6.0),
            "%".parse().unwrap(),
            "+".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let infix = [
            number(1.0),
            "+".parse().unwrap(),
            number(2.0),
            "*".parse().unwrap(),
            number(3.0),
            "-".parse().unwrap(),
            number(4.0),
        ]
        .to_vec();
        let postfix = [
            number(1.0),
            number(2.0),
            number(3.0),
            "*".parse().unwrap(),
            "+".parse().unwrap(),
            number(4.0),
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_equal_precedence_is_left_associative() {
        // 8 / 4 / 2
        let infix = [
            number(8.0),
            "/".parse().unwrap(),
            number(4.0),
            "/".parse().unwrap(),
            number(2.0),
        ]
        .to_vec();
        let postfix = [
            number(8.0),
            number(4.0),
            "/".parse().unwrap(),
            number(2.0),
            "/".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_lower_precedence_pops_whole_run() {
        // 1 * 2 % 3 - 4
        let infix = [
            number(1.0),
            "*".parse().unwrap(),
            number(2.0),
            "%".parse().unwrap(),
            number(3.0),
            "-".parse().unwrap(),
            number(4.0),
        ]
        .to_vec();
        let postfix = [
            number(1.0),
            number(2.0),
            "*".parse().unwrap(),
            number(3.0),
            "%".parse().unwrap(),
            number(4.0),
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = [
            number(1.0),
            "+".parse().unwrap(),
            Token::OpenParenthesis,
            Token::OpenParenthesis,
            number(2.0),
            "+".parse().unwrap(),
            number(3.0),
            Token::CloseParenthesis,
            "*".parse().unwrap(),
            number(4.0),
            Token::CloseParenthesis,
        ]
        .to_vec();
        let postfix = [
            number(1.0),
            number(2.0),
            number(3.0),
            "+".parse().unwrap(),
            number(4.0),
            "*".parse().unwrap(),
            "+".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_extra_closing_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = [
            Token::OpenParenthesis,
            number(1.0),
            "+".parse().unwrap(),
            number(2.0),
            Token::CloseParenthesis,
            Token::CloseParenthesis,
        ]
        .to_vec();

        assert_eq!(
            infix_to_postfix(infix),
            Err(ExpressionError::MismatchedParentheses)
        );
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (1 + 2
        let infix = [
            Token::OpenParenthesis,
            number(1.0),
            "+".parse().unwrap(),
            number(2.0),
        ]
        .to_vec();

        assert_eq!(
            infix_to_postfix(infix),
            Err(ExpressionError::MismatchedParentheses)
        );
    }
}
