//! Interactive sparse matrix calculator
//!
//! Loads two matrices in the text format, runs the selected operation,
//! and prints the result as a dense grid (or JSON triples). The
//! operation can be passed with `--op`; without it, the calculator
//! presents the menu and reads the choice from stdin.

#[cfg(feature = "cli")]
use std::io::BufRead;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use smat::{read_matrix_file, render_dense, Operation, SparseMatrix};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Sparse matrix calculator - add, subtract, or multiply two matrices in the text format")]
struct Cli {
    /// Path to the left operand
    matrix_a: PathBuf,

    /// Path to the right operand
    matrix_b: PathBuf,

    /// Operation to run (1/add, 2/subtract, 3/multiply); prompts when omitted
    #[arg(long)]
    op: Option<String>,

    /// Print the result as JSON triples instead of a dense grid
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();

    let matrix_a: SparseMatrix<f64> = match read_matrix_file(&cli.matrix_a) {
        Ok(matrix) => matrix,
        Err(err) => {
            eprintln!("{}: {err}", cli.matrix_a.display());
            return ExitCode::FAILURE;
        }
    };
    let matrix_b: SparseMatrix<f64> = match read_matrix_file(&cli.matrix_b) {
        Ok(matrix) => matrix,
        Err(err) => {
            eprintln!("{}: {err}", cli.matrix_b.display());
            return ExitCode::FAILURE;
        }
    };

    let choice = match cli.op {
        Some(op) => op,
        None => match prompt_choice() {
            Ok(choice) => choice,
            Err(err) => {
                eprintln!("failed to read selection: {err}");
                return ExitCode::FAILURE;
            }
        },
    };

    // An unrecognized selection is a no-op, not a failure of the process.
    let operation: Operation = match choice.parse() {
        Ok(operation) => operation,
        Err(err) => {
            println!("{err}");
            return ExitCode::SUCCESS;
        }
    };

    let result = match operation.apply(&matrix_a, &matrix_b) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}: {err}", operation.name());
            return ExitCode::FAILURE;
        }
    };

    println!("Result of {}:", operation.name().to_ascii_lowercase());
    #[cfg(feature = "serde")]
    if cli.json {
        match smat::TripleDump::from_matrix(&result).to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to encode result: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }
    print!("{}", render_dense(&result));
    ExitCode::SUCCESS
}

#[cfg(feature = "cli")]
fn prompt_choice() -> std::io::Result<String> {
    println!("Choose operation:");
    for op in Operation::ALL {
        println!("{}. {}", op.menu_index(), op.name());
    }
    println!("Enter your choice (1/2/3):");

    let mut choice = String::new();
    std::io::stdin().lock().read_line(&mut choice)?;
    Ok(choice)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example matrix_calc");
    std::process::exit(1);
}
