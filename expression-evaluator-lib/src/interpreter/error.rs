use thiserror::Error;

/// The ways in which evaluating an expression can fail.
///
/// Every variant is final for the expression being evaluated; the pipeline stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A numeric literal could not be parsed, e.g. `1.2.3` or a lone sign.
    #[error("malformed number literal '{0}'")]
    MalformedNumber(String),
    /// A parenthesis without a partner.
    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,
    /// An operator was reached with fewer than two operands available.
    #[error("operator is missing an operand")]
    StackUnderflow,
    /// A `/` whose right-hand operand is zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Evaluation ended with zero, or more than one, value left over.
    #[error("expression does not reduce to a single value")]
    EmptyExpression,
}
