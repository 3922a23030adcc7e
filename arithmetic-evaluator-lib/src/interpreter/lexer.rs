use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use crate::interpreter::validator;
use crate::interpreter::validator::ScanState;

/// Splits the given expression into tokens, checking that each token may follow the previous one.
///
/// A parenthesized literal with a sign, such as `(-5)` or `(+2)`, becomes a single number token.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::lexer::tokenize;
/// use arithmetic_evaluator::interpreter::token::Token;
///
/// let tokens = tokenize("2 * (-3)").unwrap();
/// assert_eq!(tokens, vec![Token::Number(2.0), "*".parse().unwrap(), Token::Number(-3.0)]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let characters: Vec<char> = expression.chars().collect();
    let mut tokens = Vec::new();
    let mut state = ScanState::default();
    let mut position = skip_whitespace(&characters, 0);

    while position < characters.len() {
        let (token, next_position) = scan_token(&characters, position)?;
        state = validator::admit(state, &token)?;
        tokens.push(token);
        position = skip_whitespace(&characters, next_position);
    }

    validator::finish(state)?;
    Ok(tokens)
}

fn scan_token(characters: &[char], position: usize) -> Result<(Token, usize)> {
    match characters[position] {
        '(' => scan_open_parenthesis(characters, position),
        ')' => Ok((Token::CloseParenthesis, position + 1)),
        _ if starts_number(characters, position) => {
            let (value, end) = scan_number(characters, position)?;
            Ok((Token::Number(value), end))
        }
        '.' => Err(ExpressionError::InvalidNumberFormat),
        symbol => match BinaryOperator::from_symbol(symbol) {
            Some(operator) => Ok((Token::Operator(operator), position + 1)),
            None => Err(ExpressionError::InvalidCharacterInExpression),
        },
    }
}

/// Scans a `(`, collapsing `( [+|-] number )` into a single number token.
fn scan_open_parenthesis(characters: &[char], position: usize) -> Result<(Token, usize)> {
    let after_parenthesis = skip_whitespace(characters, position + 1);
    let negative = match characters.get(after_parenthesis) {
        Some('-') => true,
        Some('+') => false,
        _ => return Ok((Token::OpenParenthesis, position + 1)),
    };

    let number_start = skip_whitespace(characters, after_parenthesis + 1);
    let (value, number_end) = scan_number(characters, number_start)
        .map_err(|_| ExpressionError::InvalidNumberFormatInsideUnaryParenthesis)?;

    let closing = skip_whitespace(characters, number_end);
    if characters.get(closing) != Some(&')') {
        return Err(ExpressionError::ExpectedClosingParenthesisAfterUnaryNumber);
    }

    let value = if negative { -value } else { value };
    Ok((Token::Number(value), closing + 1))
}

/// Scans `digits [. digits] [e [+|-] digits]`, where at least one digit precedes the exponent.
fn scan_number(characters: &[char], start: usize) -> Result<(f64, usize)> {
    let integer_end = skip_digits(characters, start);
    let mut end = integer_end;
    let mut fraction_digits = 0;

    if characters.get(end) == Some(&'.') {
        let fraction_end = skip_digits(characters, end + 1);
        fraction_digits = fraction_end - (end + 1);
        end = fraction_end;
    }

    if integer_end == start && fraction_digits == 0 {
        return Err(ExpressionError::InvalidNumberFormat);
    }

    if matches!(characters.get(end), Some('e' | 'E')) {
        end += 1;
        if matches!(characters.get(end), Some('+' | '-')) {
            end += 1;
        }
        let exponent_end = skip_digits(characters, end);
        if exponent_end == end {
            return Err(ExpressionError::InvalidNumberFormat);
        }
        end = exponent_end;
    }

    if matches!(characters.get(end), Some('.' | 'e' | 'E')) {
        return Err(ExpressionError::InvalidNumberFormat);
    }

    let literal: String = characters[start..end].iter().collect();
    let value = literal
        .parse::<f64>()
        .map_err(|_| ExpressionError::InvalidNumberFormat)?;
    Ok((value, end))
}

fn starts_number(characters: &[char], position: usize) -> bool {
    match characters.get(position) {
        Some(character) if character.is_ascii_digit() => true,
        Some('.') => matches!(characters.get(position + 1), Some(next) if next.is_ascii_digit()),
        _ => false,
    }
}

fn skip_digits(characters: &[char], position: usize) -> usize {
    skip_while(characters, position, |character| character.is_ascii_digit())
}

fn skip_whitespace(characters: &[char], position: usize) -> usize {
    skip_while(characters, position, |character| character.is_ascii_whitespace())
}

fn skip_while(characters: &[char], position: usize, predicate: impl Fn(char) -> bool) -> usize {
    characters[position.min(characters.len())..]
        .iter()
        .position(|&character| !predicate(character))
        .map_or(characters.len(), |offset| position + offset)
}
