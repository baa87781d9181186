//! Check that a file contains a non-decreasing sequence of numbers.
//!
//! Reads the file named by `-f`, parses whitespace-delimited tokens as
//! integers (skipping anything that is not one), and reports either the
//! first decreasing pair or the count of valid numbers found.

use std::path::PathBuf;

use clap::Parser;

use seqcheck::check::{check_file, render};
use seqcheck::core::types::CheckOutcome;
use seqcheck::exit_codes;
use seqcheck::logging;

#[derive(Parser)]
#[command(
    name = "seqcheck",
    version,
    about = "Check that a file contains a non-decreasing sequence of numbers"
)]
struct Cli {
    /// File name to check.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: PathBuf,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let outcome = match check_file(&cli.file) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    };

    println!("{}", render(&outcome));
    let code = match outcome {
        CheckOutcome::Ok { .. } => exit_codes::OK,
        CheckOutcome::Violation(_) => exit_codes::VIOLATION,
    };
    std::process::exit(code);
}
