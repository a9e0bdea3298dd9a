//! DeepEq CLI
//!
//! Command-line interface for structural comparison of documents

use clap::{Parser, Subcommand};

mod commands;
mod document;

#[derive(Debug, Parser)]
#[command(name = "deepeq")]
#[command(about = "DeepEq - Structural comparison of JSON, YAML and TOML documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two documents structurally
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
    };

    match result {
        Ok(verdict) => std::process::exit(verdict.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(commands::compare::EXIT_ERROR);
        }
    }
}
