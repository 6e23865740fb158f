use crate::interpreter::error::EvalError;
use crate::interpreter::operator::Operator;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

impl Token {
    /// Whether a `+` or `-` following this token starts a signed literal
    /// rather than acting as a binary operator.
    ///
    /// That is the case after every operator symbol except `)`.
    pub fn expects_operand(&self) -> bool {
        match self {
            Token::Number(_) => false,
            Token::Operator(operator) => *operator != Operator::CloseParenthesis,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = EvalError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut chars = input.chars();
        if let (Some(symbol), None) = (chars.next(), chars.next()) {
            if let Ok(operator) = Operator::try_from(symbol) {
                return Ok(Token::Operator(operator));
            }
        }
        parse_number(input)
    }
}

/// Parses a buffered numeric literal, optionally signed, into a number token.
pub(crate) fn parse_number(literal: &str) -> Result<Token, EvalError> {
    literal
        .parse::<f64>()
        .map(Token::Number)
        .map_err(|_| EvalError::MalformedNumber(literal.to_string()))
}
