use crate::interpreter::error::EvalError;
use crate::interpreter::operator::Operator;
use crate::interpreter::token::{parse_number, Token};
use std::convert::TryFrom;

/// Converts an infix expression into a sequence of number and operator tokens.
///
/// A `+` or `-` at the start of the expression, or right after any operator
/// other than `)`, is read as the sign of the following literal.
/// Characters that are not part of the grammar are dropped.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens, in the same order as in the expression.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::lexer::tokenize;
/// use expression_evaluator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("3*-2")?;
/// assert_eq!(tokens, vec![Token::Number(3.0), "*".parse::<Token>()?, Token::Number(-2.0)]);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens: Vec<Token> = vec![];
    let mut literal = String::new();

    for character in expression.chars() {
        if character.is_whitespace() {
            continue;
        }
        if character.is_ascii_digit() || character == '.' {
            literal.push(character);
            continue;
        }

        let operator = Operator::try_from(character).ok();

        // A second sign in a row replaces the pending one instead of being flushed.
        if operator.map_or(false, |operator| operator.is_sign()) && is_bare_sign(&literal) {
            literal = character.to_string();
            continue;
        }

        flush_literal(&mut literal, &mut tokens)?;

        if let Some(operator) = operator {
            if operator.is_sign() && starts_literal(&tokens) {
                literal.push(character);
            } else {
                tokens.push(Token::Operator(operator));
            }
        }
    }

    flush_literal(&mut literal, &mut tokens)?;

    Ok(tokens)
}

fn starts_literal(tokens: &[Token]) -> bool {
    tokens.last().map_or(true, Token::expects_operand)
}

fn is_bare_sign(literal: &str) -> bool {
    literal == "+" || literal == "-"
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) -> Result<(), EvalError> {
    if literal.is_empty() {
        return Ok(());
    }
    tokens.push(parse_number(literal)?);
    literal.clear();
    Ok(())
}
