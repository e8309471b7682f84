use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::loan::LoanInput;
use crate::payment::monthly_payment;
use crate::schedule::{build_schedule, ScheduleRow};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::yearly::{aggregate_by_year, YearlySummary};
use crate::MortgageResult;

/// Residual balance beyond this after the final payment counts as drift.
const DRIFT_TOLERANCE: Decimal = dec!(0.01);

/// Headline repayment metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentSummary {
    pub loan_amount: Money,
    pub monthly_payment: Money,
    /// Monthly payment times the number of payments.
    pub total_payments: Money,
    /// Total payments less the amount borrowed.
    pub total_interest: Money,
}

/// Full product of one engine run: summary, monthly ledger, yearly rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentAnalysis {
    pub summary: RepaymentSummary,
    pub schedule: Vec<ScheduleRow>,
    pub yearly: Vec<YearlySummary>,
}

/// Run the complete repayment analysis for a loan.
///
/// Validates the input, derives the loan terms, computes the fixed monthly
/// payment, expands the schedule, and aggregates it by year. Permissive
/// situations (deposit exceeding home value, a non-amortising payment,
/// residual balance after the final payment) surface as warnings.
pub fn calculate_repayments(
    input: &LoanInput,
) -> MortgageResult<ComputationOutput<RepaymentAnalysis>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.validate()?;
    let terms = input.terms();

    if input.deposit > input.home_value {
        warnings.push(format!(
            "Deposit ({}) exceeds home value ({}); loan amount is negative",
            input.deposit, input.home_value
        ));
    }

    let payment = monthly_payment(terms.loan_amount, terms.monthly_rate, terms.num_payments)?;
    let schedule = build_schedule(
        terms.loan_amount,
        terms.monthly_rate,
        payment,
        terms.num_payments,
        input.start_date,
    );

    if let Some(first) = schedule.first() {
        if first.principal < Decimal::ZERO {
            warnings.push(
                "Payment does not cover the first month's interest; the balance grows instead of amortising"
                    .into(),
            );
        }
    }
    if let Some(last) = schedule.last() {
        if terms.loan_amount > Decimal::ZERO && last.remaining_balance.abs() > DRIFT_TOLERANCE {
            warnings.push(format!(
                "Residual balance of {} remains after the final payment",
                last.remaining_balance
            ));
        }
    }

    let total_payments = payment * Decimal::from(terms.num_payments);
    let total_interest = total_payments - terms.loan_amount;

    let summary = RepaymentSummary {
        loan_amount: terms.loan_amount,
        monthly_payment: payment.round_dp(2),
        total_payments: total_payments.round_dp(2),
        total_interest: total_interest.round_dp(2),
    };

    let yearly = aggregate_by_year(&schedule);

    let output = RepaymentAnalysis {
        summary,
        schedule,
        yearly,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Rate Mortgage Amortisation",
        input,
        warnings,
        elapsed,
        output,
    ))
}
