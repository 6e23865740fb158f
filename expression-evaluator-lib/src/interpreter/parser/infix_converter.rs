use crate::interpreter::error::EvalError;
use crate::interpreter::operator::Operator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
///
/// Operators of equal precedence are popped before the new one is pushed,
/// which makes all four binary operators left-associative.
pub(crate) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, EvalError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Operator> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(Operator::OpenParenthesis) => {
                operators.push_front(Operator::OpenParenthesis)
            }
            Token::Operator(Operator::CloseParenthesis) => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            Token::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator),
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Operator>,
    output: &mut Vec<Token>,
) -> Result<(), EvalError> {
    while let Some(operator) = operators.pop_front() {
        if operator.is_parenthesis() {
            return Err(EvalError::UnmatchedParenthesis);
        }
        output.push(Token::Operator(operator));
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Operator>,
    output: &mut Vec<Token>,
) -> Result<(), EvalError> {
    loop {
        match operators.pop_front() {
            None => return Err(EvalError::UnmatchedParenthesis),
            // Discard the open parenthesis.
            Some(Operator::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(Token::Operator(operator)),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Operator>,
    output: &mut Vec<Token>,
    operator: Operator,
) {
    while let Some(top_of_operator_stack) = operators.front() {
        if !top_of_operator_stack.precedence_ge(&operator) {
            break;
        }
        if let Some(other_operator) = operators.pop_front() {
            output.push(Token::Operator(other_operator));
        }
    }

    operators.push_front(operator);
}
