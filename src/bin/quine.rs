//! Quine-McCluskey term combination - Command Line Interface
//!
//! Minimizes one expression given on the command line, or every non-blank
//! line of a file, and prints the reduction trace.

use clap::{ArgAction, Parser};
use quine_logic::{Minimizable, QmConfig};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

const DEFAULT_EXPRESSION: &str = "xyz + x~yz + x~y + x~y~z";

#[derive(Parser, Debug)]
#[command(name = "quine")]
#[command(about = "Quine-McCluskey term combination for sum-of-products expressions", long_about = None)]
#[command(version)]
struct Args {
    /// Expression to minimize: single-character variables, `~` to complement, `+` between terms
    #[arg(value_name = "EXPRESSION", default_value = DEFAULT_EXPRESSION)]
    expression: String,

    /// Read expressions from a file, one per line
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print only the final expression
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Keep the fixed-point term order instead of sorting for display
    #[arg(long = "no-sort")]
    no_sort: bool,

    /// Log a summary of every run
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file", value_name = "FILE")]
    output_file: Option<PathBuf>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 if self.summary => LevelFilter::Info,
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        args.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }

    let config = QmConfig {
        trace: !args.quiet,
        display_order: !args.no_sort,
        summary: args.summary,
        ..Default::default()
    };

    let inputs = match &args.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(e) => {
                eprintln!("Error reading input file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => vec![args.expression.clone()],
    };

    let mut output = String::new();
    for (i, input) in inputs.iter().enumerate() {
        let result = match input.minimize_with_config(&config) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error minimizing '{}': {}", input, e);
                process::exit(1);
            }
        };

        if args.quiet {
            output.push_str(&result.final_expression());
            output.push('\n');
            continue;
        }

        if i > 0 {
            output.push('\n');
        }
        for line in result.trace_lines() {
            output.push_str(&line);
            output.push('\n');
        }
    }

    if let Some(ref output_path) = args.output_file {
        if let Err(e) = fs::write(output_path, &output) {
            eprintln!("Error writing output file: {}", e);
            process::exit(1);
        }
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error writing to stdout: {}", e);
        process::exit(1);
    }
}
