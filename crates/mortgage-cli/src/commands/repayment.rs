use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_core::analysis;
use mortgage_core::loan::LoanInput;

use crate::input;

/// Loan parameters shared by every subcommand. Defaults match the
/// calculator's standard example loan.
#[derive(Args)]
pub struct LoanArgs {
    /// Home value
    #[arg(long, default_value = "500000")]
    pub home_value: Decimal,

    /// Deposit
    #[arg(long, default_value = "100000")]
    pub deposit: Decimal,

    /// Annual interest rate in percent (5.5 means 5.5%)
    #[arg(long, alias = "rate", default_value = "5.5")]
    pub interest_rate: Decimal,

    /// Loan term in years
    #[arg(long, alias = "term", default_value = "30")]
    pub term_years: u32,

    /// Date of the first repayment (YYYY-MM-DD); adds payment dates to the schedule
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_summary(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut value = analyze(&args)?;
    narrow_result(&mut value, "summary");
    Ok(value)
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut value = analyze(&args)?;
    narrow_result(&mut value, "schedule");
    Ok(value)
}

pub fn run_yearly(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut value = analyze(&args)?;
    narrow_result(&mut value, "yearly");
    Ok(value)
}

fn analyze(args: &LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_input(args)?;
    let output = analysis::calculate_repayments(&loan)?;
    Ok(serde_json::to_value(output)?)
}

fn resolve_input(args: &LoanArgs) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        input::file::read_json(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Ok(LoanInput {
            home_value: args.home_value,
            deposit: args.deposit,
            interest_rate_percent: args.interest_rate,
            term_years: args.term_years,
            start_date: args.start_date,
        })
    }
}

/// Swap the envelope's result for one section of the analysis so tabular
/// formats render that section directly.
fn narrow_result(value: &mut Value, key: &str) {
    let section = value
        .get_mut("result")
        .and_then(|r| r.get_mut(key))
        .map(Value::take);
    if let Some(section) = section {
        value["result"] = section;
    }
}
