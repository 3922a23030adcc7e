use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::token::{Token, TokenKind};

/// What the adjacency rules need to know about the tokens accepted so far.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ScanState {
    pub last_kind: TokenKind,
    pub depth: usize,
}

/// Checks that `token` may follow the tokens summarized by `state`.
///
/// # Arguments
///
/// * `state`: The state after the previously accepted token.
/// * `token`: The token about to be appended.
///
/// returns: The state after `token` has been accepted.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::token::{Token, TokenKind};
/// use arithmetic_evaluator::interpreter::validator::{admit, ScanState};
/// use arithmetic_evaluator::ExpressionError;
///
/// let state = admit(ScanState::default(), &Token::Number(2.0)).unwrap();
/// assert_eq!(state.last_kind, TokenKind::Number);
/// assert_eq!(
///     admit(state, &Token::Number(2.0)),
///     Err(ExpressionError::MissingOperatorBeforeNumber)
/// );
/// ```
pub fn admit(state: ScanState, token: &Token) -> Result<ScanState> {
    let kind = token.kind();
    check_adjacency(state.last_kind, kind)?;

    let depth = match kind {
        TokenKind::OpenParenthesis => state.depth + 1,
        TokenKind::CloseParenthesis => state
            .depth
            .checked_sub(1)
            .ok_or(ExpressionError::MismatchedParentheses)?,
        _ => state.depth,
    };

    Ok(ScanState {
        last_kind: kind,
        depth,
    })
}

/// Checks the state left behind by the last token of the expression.
pub fn finish(state: ScanState) -> Result<()> {
    if state.last_kind == TokenKind::Operator {
        return Err(ExpressionError::MissingOperand);
    }
    if state.depth != 0 {
        return Err(ExpressionError::MismatchedParentheses);
    }
    Ok(())
}

fn check_adjacency(last_kind: TokenKind, kind: TokenKind) -> Result<()> {
    use TokenKind::*;

    match (last_kind, kind) {
        (Number | CloseParenthesis, Number) => Err(ExpressionError::MissingOperatorBeforeNumber),
        (Number | CloseParenthesis, OpenParenthesis) => {
            Err(ExpressionError::MissingOperatorBeforeOpenParen)
        }
        (Start | Operator | OpenParenthesis, Operator) => Err(ExpressionError::MissingOperand),
        (Operator | OpenParenthesis, CloseParenthesis) => {
            Err(ExpressionError::MissingOperandBeforeCloseParen)
        }
        _ => Ok(()),
    }
}
