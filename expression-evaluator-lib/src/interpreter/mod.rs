pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
pub mod sanitizer;
pub mod token;

use crate::interpreter::error::EvalError;
use crate::interpreter::evaluator::evaluate;
use crate::interpreter::sanitizer::sanitize;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, warn};
use std::fmt;
use std::fmt::Formatter;
use string_builder::Builder;

pub use crate::interpreter::operator::Operator;

/// Evaluates an arithmetic expression in infix format.
///
/// The expression is tokenized, converted to postfix and evaluated; the first
/// failure stops the remaining stages.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::evaluate_expression;
///
/// assert_eq!(evaluate_expression("(2 + 3) * 4"), Ok(20.0));
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64, EvalError> {
    let infix_tokens = lexer::tokenize(expression)?;
    debug!("tokens: {:?}", infix_tokens);
    let postfix_tokens = parser::parse(infix_tokens)?;
    debug!("postfix: {}", postfix_to_string(&postfix_tokens));
    let result = evaluate(&postfix_tokens)?;
    debug!("result: {}", result);
    Ok(result)
}

/// Raw extracted text reduced to an expression, together with the outcome of evaluating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub expression: String,
    pub result: Result<f64, EvalError>,
}

impl Solution {
    /// Sanitizes the raw text and evaluates what is left of it.
    ///
    /// # Arguments
    ///
    /// * `raw`: Text believed to hold an arithmetic expression, possibly with stray characters.
    ///
    /// returns: The sanitized expression and its value, or the reason it has none.
    pub fn solve(raw: &str) -> Solution {
        let expression = sanitize(raw);
        let result = evaluate_expression(&expression);
        if let Err(error) = &result {
            warn!("could not evaluate '{}': {}", expression, error);
        }
        Solution { expression, result }
    }

    pub fn is_solved(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.result {
            Ok(value) => write!(f, "{} = {}", self.expression, format_number(value)),
            Err(_) => write!(
                f,
                "Error: String read from file was: {}, but this expression could not be evaluated.",
                self.expression
            ),
        }
    }
}

/// Sanitizes raw extracted text and renders it as an equation with its value.
///
/// returns: `"<expression> = <result>"`, or a message naming the expression
/// if it could not be evaluated.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::solve_expression;
///
/// assert_eq!(solve_expression("1+2-3*(3-4)\n"), "1+2-3*(3-4) = 6.0");
/// ```
pub fn solve_expression(raw: &str) -> String {
    Solution::solve(raw).to_string()
}

/// Renders a result, keeping one decimal on integral values (`6.0`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0f64 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Pretty-prints the given vector of infix tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::tokens_to_string;
/// use expression_evaluator::interpreter::lexer::tokenize;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("2*(3+-1)")?;
/// let pretty_printed_tokens = tokens_to_string(tokens)?;
/// assert_eq!(pretty_printed_tokens, "2 * (3 + -1)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Operator(operator) if !operator.is_parenthesis() => {
                builder.append(" ");
                builder.append(operator.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}

/// Prints postfix tokens separated by single spaces, e.g. `1 2 + 3 *`.
pub fn postfix_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
        expression = {
            "8-3-2",
            "8/4/2",
            "2+3*4",
            "(2+3)*4",
            "-3+5",
            "3*-2",
            "1+2-(3*4)/6",
            "1+2-3*(3-4)",
            "((7))",
            " 0.5 * 4 ",
            "10/4",
        },
        expected = {
            3f64,
            1f64,
            14f64,
            20f64,
            2f64,
            -6f64,
            1f64,
            6f64,
            7f64,
            2f64,
            2.5,
        }
    )]
    fn evaluate_expression_returns_correct_value(expression: &str, expected: f64) {
        assert_eq!(evaluate_expression(expression), Ok(expected));
    }

    #[parameterized(
        expression = {
            "5/0",
            "3+",
            "",
            "(1+2",
            "1+2)",
            "1..2+3",
            "2(3)",
        },
        expected_error = {
            EvalError::DivisionByZero,
            EvalError::StackUnderflow,
            EvalError::EmptyExpression,
            EvalError::UnmatchedParenthesis,
            EvalError::UnmatchedParenthesis,
            EvalError::MalformedNumber("1..2".to_string()),
            EvalError::EmptyExpression,
        }
    )]
    fn evaluate_expression_returns_correct_error(expression: &str, expected_error: EvalError) {
        assert_eq!(evaluate_expression(expression), Err(expected_error));
    }

    #[test]
    fn every_stage_matches_worked_example() {
        let expression = "1+2-3*(3-4)";

        let infix_tokens = lexer::tokenize(expression).unwrap();
        assert_eq!(
            tokens_to_string(infix_tokens.clone()).unwrap(),
            "1 + 2 - 3 * (3 - 4)"
        );
        let postfix_tokens = parser::parse(infix_tokens).unwrap();
        assert_eq!(postfix_to_string(&postfix_tokens), "1 2 + 3 3 4 - * -");
        assert_eq!(evaluate(&postfix_tokens), Ok(6f64));
    }

    #[test]
    fn solve_expression_strips_invalid_characters() {
        assert_eq!(solve_expression("12 + 3a\n"), "12 + 3 = 15.0");
    }

    #[test]
    fn spaces_inside_a_number_are_ignored() {
        assert_eq!(solve_expression("12 x 3"), "12  3 = 123.0");
    }

    #[test]
    fn solve_expression_reports_unevaluable_expression() {
        assert_eq!(
            solve_expression("5/0"),
            "Error: String read from file was: 5/0, but this expression could not be evaluated."
        );
    }

    #[test]
    fn solution_keeps_the_cause_of_failure() {
        let solution = Solution::solve("(1 + 2");

        assert_eq!(solution.expression, "(1 + 2");
        assert_eq!(solution.result, Err(EvalError::UnmatchedParenthesis));
        assert!(!solution.is_solved());
    }

    #[parameterized(
        value = { 6f64, -0.5, 0.1 + 0.2, 1e20 },
        expected = { "6.0", "-0.5", "0.30000000000000004", "100000000000000000000" }
    )]
    fn format_number_matches_float_rendering(value: f64, expected: &str) {
        assert_eq!(format_number(value), expected);
    }
}
