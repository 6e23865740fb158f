use crate::interpreter::error::EvalError;
use crate::interpreter::token::Token;

/// Reduces a postfix token sequence to a single number.
///
/// # Arguments
///
/// * `postfix_tokens`: Numbers and binary operators, in postfix order.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_evaluator::interpreter::evaluator::evaluate;
/// use expression_evaluator::interpreter::token::Token;
///
/// // 8 2 /
/// let postfix_tokens = [Token::Number(8.0), Token::Number(2.0), "/".parse::<Token>()?];
/// assert_eq!(evaluate(&postfix_tokens)?, 4.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(postfix_tokens: &[Token]) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Number(value) => operands.push(*value),
            Token::Operator(operator) => {
                let rhs = operands.pop().ok_or(EvalError::StackUnderflow)?;
                let lhs = operands.pop().ok_or(EvalError::StackUnderflow)?;
                operands.push(operator.evaluate(lhs, rhs)?);
            }
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvalError::EmptyExpression),
    }
}
