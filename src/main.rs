use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use clap::Parser;
use exptree::{Evaluation, get_evaluation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// exptree evaluates an integer arithmetic expression by building its
/// expression tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exptree to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the fully parenthesized expression tree before the result.
    #[arg(short = 't', long)]
    show_tree: bool,

    /// The expression, or a path when `--file` is given. Read from standard
    /// input when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                  .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                                  .init();

    let args = Args::parse();

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        },
    };

    match get_evaluation(&source) {
        Ok(Evaluation { tree, value }) => {
            if args.show_tree {
                println!("{tree}");
            }
            println!("The result of the expression is: {value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn read_source(args: &Args) -> Result<String, String> {
    match (&args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(path).map_err(|e| {
                                  format!("Failed to read the input file '{path}'. Perhaps this file does not exist? ({e})")
                              }),
        (None, true) => Err("--file requires a path.".to_string()),
        (Some(expression), false) => Ok(expression.clone()),
        (None, false) => read_line(),
    }
}

fn read_line() -> Result<String, String> {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        print!("ENTER INPUT: ");
        io::stdout().flush()
                    .map_err(|e| format!("Failed to write the prompt: {e}"))?;
    }

    let mut line = String::new();
    stdin.lock()
         .read_line(&mut line)
         .map_err(|e| format!("Failed to read from standard input: {e}"))?;

    Ok(line)
}
