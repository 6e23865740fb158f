use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_evaluator::interpreter::sanitizer::sanitize;
use expression_evaluator::interpreter::{
    lexer, parser, postfix_to_string, tokens_to_string, Solution,
};
use log::{debug, info};
use std::fs;
use std::io;
use std::io::BufRead;
use std::path::PathBuf;

/// Evaluates arithmetic expressions extracted from text
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expressions to evaluate. Read from stdin, one per line, when none are given
    expressions: Vec<String>,

    /// Read the expressions from a file instead, one per line
    #[clap(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Also print the tokens and the postfix order of each expression
    #[clap(short, long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let expressions = read_expressions(&args)?;
    info!("evaluating {} expression(s)", expressions.len());

    let mut failures = 0;
    for raw in &expressions {
        if args.postfix {
            print_stages(&sanitize(raw))?;
        }
        let solution = Solution::solve(raw);
        if !solution.is_solved() {
            failures += 1;
        }
        println!("{}", solution);
    }

    if failures > 0 {
        bail!(
            "{} of {} expression(s) could not be evaluated",
            failures,
            expressions.len()
        );
    }
    Ok(())
}

fn read_expressions(args: &Arguments) -> Result<Vec<String>> {
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read expressions from {}", path.display()))?;
        return Ok(non_blank_lines(text.lines().map(str::to_string)));
    }
    if !args.expressions.is_empty() {
        return Ok(args.expressions.clone());
    }
    let lines = io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("could not read expressions from stdin")?;
    Ok(non_blank_lines(lines))
}

fn non_blank_lines(lines: impl IntoIterator<Item = String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn print_stages(expression: &str) -> Result<()> {
    let tokens = match lexer::tokenize(expression) {
        Ok(tokens) => tokens,
        Err(error) => {
            debug!("no tokens for '{}': {}", expression, error);
            return Ok(());
        }
    };
    println!("tokens:  {}", tokens_to_string(tokens.clone())?);
    match parser::parse(tokens) {
        Ok(postfix_tokens) => println!("postfix: {}", postfix_to_string(&postfix_tokens)),
        Err(error) => debug!("no postfix order for '{}': {}", expression, error),
    }
    Ok(())
}
