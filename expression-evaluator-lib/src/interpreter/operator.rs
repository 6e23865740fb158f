use crate::interpreter::error::EvalError;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::Formatter;

/// An operator symbol of an arithmetic expression, parentheses included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    OpenParenthesis,
    CloseParenthesis,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::OpenParenthesis => '(',
            Operator::CloseParenthesis => ')',
        }
    }

    /// Position in the precedence table. Only ever compared, never combined.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Operator::OpenParenthesis | Operator::CloseParenthesis => 1,
            Operator::Add | Operator::Subtract => 2,
            Operator::Multiply | Operator::Divide => 3,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    pub fn is_sign(&self) -> bool {
        matches!(self, Operator::Add | Operator::Subtract)
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(self, Operator::OpenParenthesis | Operator::CloseParenthesis)
    }

    /// Applies the operator as `lhs op rhs`.
    ///
    /// # Arguments
    ///
    /// * `lhs`: The operand that was pushed first.
    /// * `rhs`: The operand that was pushed last.
    ///
    /// returns: The result, or an error if the operator is a parenthesis
    /// or the division has a zero divisor.
    pub fn evaluate(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide if rhs == 0f64 => Err(EvalError::DivisionByZero),
            Operator::Divide => Ok(lhs / rhs),
            Operator::OpenParenthesis | Operator::CloseParenthesis => {
                Err(EvalError::UnmatchedParenthesis)
            }
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '(' => Ok(Operator::OpenParenthesis),
            ')' => Ok(Operator::CloseParenthesis),
            other => Err(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_table_orders_parentheses_below_sums_below_products() {
        assert_eq!(Operator::OpenParenthesis.precedence(), 1);
        assert_eq!(Operator::CloseParenthesis.precedence(), 1);
        assert_eq!(Operator::Add.precedence(), Operator::Subtract.precedence());
        assert_eq!(Operator::Multiply.precedence(), Operator::Divide.precedence());
        assert!(Operator::Multiply.precedence() > Operator::Add.precedence());
        assert!(Operator::Add.precedence() > Operator::OpenParenthesis.precedence());
    }

    #[test]
    fn operator_ge_correspond_with_precedence() {
        assert!(Operator::Divide.precedence_ge(&Operator::Multiply));
        assert!(!Operator::Add.precedence_ge(&Operator::Multiply));
    }

    #[test]
    fn every_symbol_converts_to_an_operator_and_back() {
        for symbol in ['+', '-', '*', '/', '(', ')'] {
            let operator = Operator::try_from(symbol).unwrap();
            assert_eq!(operator.symbol(), symbol);
        }
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert_eq!(Operator::try_from('^'), Err('^'));
    }

    #[test]
    fn subtraction_and_division_keep_operand_order() {
        assert_eq!(Operator::Subtract.evaluate(8f64, 3f64), Ok(5f64));
        assert_eq!(Operator::Divide.evaluate(8f64, 4f64), Ok(2f64));
    }

    #[test]
    fn division_by_zero_returns_err() {
        assert_eq!(
            Operator::Divide.evaluate(5f64, 0f64),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.evaluate(5f64, -0f64),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn parenthesis_cannot_be_evaluated() {
        assert_eq!(
            Operator::OpenParenthesis.evaluate(1f64, 2f64),
            Err(EvalError::UnmatchedParenthesis)
        );
    }
}
