use anyhow::{anyhow, bail, Context, Result};
use arithmetic_evaluator::interpreter::{convert, evaluate, lexer, tokens_to_string};
use arithmetic_evaluator::ExpressionError;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use std::io;
use std::io::BufRead;

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Expressions are read from standard input, one per line, if omitted
    expression: Option<String>,

    /// Print the postfix form of the expression instead of its value
    #[clap(short, long)]
    postfix: bool,

    /// Reject expressions made up of more tokens than this
    #[clap(long, value_name = "COUNT")]
    max_tokens: Option<usize>,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Debug, Default, Clone, Copy)]
struct Options {
    postfix: bool,
    max_tokens: Option<usize>,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();
    debug!("{:?}", arguments);

    let options = Options {
        postfix: arguments.postfix,
        max_tokens: arguments.max_tokens,
    };
    match &arguments.expression {
        Some(expression) => {
            println!("{}", process(expression, options)?);
            Ok(())
        }
        None => process_lines(io::stdin().lock(), options),
    }
}

/// Processes every non-blank line, reporting failures without stopping.
fn process_lines(input: impl BufRead, options: Options) -> Result<()> {
    let mut processed = 0;
    let mut failures = 0;

    for (index, line) in input.lines().enumerate() {
        let result = match line.context("could not read expression") {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => process(&line, options),
            Err(error) => Err(error),
        };

        processed += 1;
        match result {
            Ok(output) => println!("{}", output),
            Err(error) => {
                failures += 1;
                eprintln!("line {}: {:#}", index + 1, error);
            }
        }
    }

    info!("processed {} expressions, {} failed", processed, failures);
    if failures > 0 {
        bail!("{} of {} expressions failed", failures, processed);
    }
    Ok(())
}

fn process(expression: &str, options: Options) -> Result<String> {
    if let Some(limit) = options.max_tokens {
        check_token_count(expression, limit)?;
    }

    if options.postfix {
        let postfix_tokens = convert(expression).map_err(describe)?;
        tokens_to_string(postfix_tokens)
    } else {
        let value = evaluate(expression).map_err(describe)?;
        Ok(value.to_string())
    }
}

fn check_token_count(expression: &str, limit: usize) -> Result<()> {
    let token_count = lexer::tokenize(expression).map_err(describe)?.len();
    if token_count > limit {
        bail!(
            "expression has {} tokens, more than the limit of {}",
            token_count,
            limit
        );
    }
    Ok(())
}

fn describe(error: ExpressionError) -> anyhow::Error {
    anyhow!("{:?}: {}", error, error)
}
