/// Every way an evaluation can fail.
///
/// Each variant is one kind of failure and displays as its fixed message, so callers
/// can match on the kind and still print something readable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ExpressionError {
    #[error("expression is empty")]
    ExpressionIsEmpty,

    #[error("invalid character in expression")]
    InvalidCharacterInExpression,

    #[error("invalid number format")]
    InvalidNumberFormat,

    #[error("invalid number format inside unary parenthesis")]
    InvalidNumberFormatInsideUnaryParenthesis,

    #[error("expected closing parenthesis after unary number")]
    ExpectedClosingParenthesisAfterUnaryNumber,

    #[error("missing operator before number")]
    MissingOperatorBeforeNumber,

    #[error("missing operator before open parenthesis")]
    MissingOperatorBeforeOpenParen,

    #[error("missing operand")]
    MissingOperand,

    #[error("missing operand before closing parenthesis")]
    MissingOperandBeforeCloseParen,

    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error("cannot divide by 0")]
    DivisionByZero,

    #[error("cannot modulo by 0")]
    ModuloByZero,

    #[error("invalid expression")]
    InvalidExpression,

    #[error("numerical overflow or invalid result")]
    NumericOverflowOrInvalidResult,
}

pub type Result<T> = std::result::Result<T, ExpressionError>;

/// Rejects infinities and NaN.
pub(crate) fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpressionError::NumericOverflowOrInvalidResult)
    }
}
