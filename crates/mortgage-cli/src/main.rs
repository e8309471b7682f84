mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::repayment::LoanArgs;

/// Fixed-rate mortgage repayment calculations
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Fixed-rate mortgage repayment calculations",
    long_about = "A CLI for fixed-rate mortgage repayment calculations with decimal \
                  precision. Computes the monthly repayment and headline totals, the \
                  full month-by-month amortisation schedule, and the yearly \
                  principal/interest/balance aggregation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Repayment summary: monthly payment, total repayments, total interest
    Summary(LoanArgs),
    /// Full month-by-month amortisation schedule
    Schedule(LoanArgs),
    /// Yearly principal/interest/balance aggregation
    Yearly(LoanArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Summary(args) => commands::repayment::run_summary(args),
        Commands::Schedule(args) => commands::repayment::run_schedule(args),
        Commands::Yearly(args) => commands::repayment::run_yearly(args),
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
