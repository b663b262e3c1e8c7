use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::trace;
use log::warn;
use rpncalc::prelude::*;
use std::io;
use std::io::BufRead;
use std::rc::Rc;

/// RPN: a reverse Polish calculator filter.
///
/// Reads whitespace separated tokens, one expression session per line, and
/// prints the running result and the current description for each. Tokens:
/// a number pushes an operand, `name=value` binds a variable, a known
/// constant or operator symbol pushes that, and anything else pushes a
/// variable reference.
#[derive(Parser, Debug)]
#[command(name = "rpn", version)]
struct Cli {
    /// Evaluate these tokens instead of reading lines from stdin
    tokens: Vec<String>,

    #[command(flatten)]
    verbose: Verbosity,
}

// Traces every description change, mostly to demonstrate that a plain
// struct suffices as an observer
struct Echo;

impl FormulaObserver for Echo {
    fn formula_changed(&self, formula: Option<&str>) {
        trace!("formula: '{}'", formula.unwrap_or(" "));
    }
}

fn main() -> Result<()> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();

    let mut calculator = Calculator::new();
    calculator.register_observer(Rc::new(Echo));

    if !options.tokens.is_empty() {
        run_line(&mut calculator, &options.tokens.join(" "));
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        run_line(&mut calculator, &line?);
    }

    Ok(())
}

fn run_line(calculator: &mut Calculator, line: &str) {
    let mut result = None;
    for token in line.split_whitespace() {
        result = push_token(calculator, token);
    }

    match result {
        Some(value) => println!("{value}  |  {calculator}"),
        None => {
            let reason = calculator
                .report_errors()
                .unwrap_or_else(|| "expected a value".to_string());
            println!("?  |  {calculator}  ({reason})");
        }
    }
}

fn push_token(calculator: &mut Calculator, token: &str) -> Option<f64> {
    if let Ok(value) = token.parse::<f64>() {
        return calculator.push_operand(value);
    }

    if let Some((name, value)) = token.split_once('=') {
        match value.parse::<f64>() {
            Ok(value) => {
                calculator.bind(name, value);
            }
            Err(_) => warn!("cannot parse {token} as a binding, ignoring it"),
        }
        return calculator.evaluate();
    }

    if calculator.has_constant(token) {
        return calculator.push_constant(token);
    }

    if calculator.has_operator(token) {
        return calculator.push_operation(token);
    }

    calculator.push_variable(token)
}
