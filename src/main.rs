//! crypto-bmark main module.

#![deny(missing_docs)]

mod algorithms;
mod cli;
mod command;
mod error;
mod significant;
mod version;

use crate::cli::Dispatcher;
use crate::error::Error;
use std::io::{self, BufRead, Write};
use tracing::error;
use tracing::level_filters::LevelFilter;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let code = execute(args, &mut stdin.lock(), &mut stdout.lock(), &mut io::stderr());
    std::process::exit(code);
}

/// Initializes the logger.
fn init_logger() {
    let level = max_level(std::env::var("RUST_LOG").ok().as_deref());
    // a second initialization is a no-op
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

/// Log level named by `RUST_LOG`, `info` when unset or not a plain level.
fn max_level(var: Option<&str>) -> LevelFilter {
    var.and_then(|value| value.trim().parse().ok())
        .unwrap_or(LevelFilter::INFO)
}

/// Dispatches CLI commands and returns the process exit status.
fn execute(
    args: Vec<String>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    errors: &mut dyn Write,
) -> i32 {
    if version::requested(args.iter().skip(1)) {
        return match writeln!(output, "{}", version::banner()) {
            Ok(()) => 0,
            Err(_) => 1,
        };
    }

    init_logger();

    let result = Dispatcher::with_commands(algorithms::commands())
        .and_then(|dispatcher| dispatcher.execute(args, input, output));

    match result {
        Ok(()) => 0,
        Err(err) => {
            report(&err, output, errors);
            err.exit_code()
        }
    }
}

/// Prints an error where the operator expects to see it.
fn report(err: &Error, output: &mut dyn Write, errors: &mut dyn Write) {
    let written = match err {
        Error::Help(text) => writeln!(output, "{}", text),
        Error::Usage(text) => writeln!(errors, "{}", text),
        Error::UnrecognizedArguments(_) | Error::CommandNotFound(_) | Error::Compute { .. } => {
            writeln!(output, "Error: {}", err)
        }
        Error::Registration { .. } => {
            error!("{}", err);
            writeln!(errors, "Error: {}", err)
        }
        Error::NoCommand | Error::Io(_) => writeln!(errors, "Error: {}", err),
    };
    if written.is_err() {
        error!("could not report: {}", err);
    }
}
