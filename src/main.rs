use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use reckon::{compile, evaluate, interpreter::rpn_to_string};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// reckon evaluates arithmetic expressions built from numbers, `+ - * /`,
/// parentheses and unary minus.
///
/// Any failed evaluation prints `Error`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a file and evaluate each non-blank line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the postfix (RPN) form instead of the value.
    #[arg(short, long)]
    rpn: bool,

    /// Increase log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` takes
    /// precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate, or a path when `--file` is given. Reads
    /// expressions from standard input when omitted.
    #[arg(allow_hyphen_values = true)]
    contents: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut out = io::stdout().lock();

    match (&args.contents, args.file) {
        (Some(path), true) => {
            let script =
                fs::read_to_string(path).with_context(|| format!("failed to read input file {path}"))?;
            info!(%path, "evaluating file");
            for line in script.lines().filter(|l| !l.trim().is_empty()) {
                writeln!(out, "{}", render(line, args.rpn))?;
            }
        },
        (Some(expression), false) => writeln!(out, "{}", render(expression, args.rpn))?,
        (None, _) => {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read standard input")?;
                if line.trim().is_empty() {
                    continue;
                }
                writeln!(out, "{}", render(&line, args.rpn))?;
                out.flush()?;
            }
        },
    }

    Ok(())
}

/// Produces the display string for one expression.
///
/// Values use the shortest representation that reads back to the same
/// `f64`, so a printed result can be fed back in unchanged.
fn render(expression: &str, rpn: bool) -> String {
    let rendered = if rpn {
        compile(expression).map(|tokens| rpn_to_string(&tokens))
    } else {
        evaluate(expression).map(|value| value.to_string())
    };
    rendered.unwrap_or_else(|_| "Error".to_string())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder().with_default_directive(default_level.into())
                                     .from_env_lossy();

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_ansi(io::stderr().is_terminal())
                                                    .with_target(false))
                                  .with(filter)
                                  .init();
}
