mod infix_converter;

use crate::interpreter::error::EvalError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Parses the given infix tokens into the equivalent postfix sequence,
/// which can be evaluated without any knowledge of precedence or parentheses.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same numbers and operators in postfix order, parentheses removed.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_evaluator::interpreter::parser::parse;
/// use expression_evaluator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number(2.0),
///     "*".parse::<Token>()?,
///     Token::Number(3.0),
/// ];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(postfix_tokens[2], "*".parse::<Token>()?);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>, EvalError> {
    infix_to_postfix(infix_tokens)
}
