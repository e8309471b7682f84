use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

/// Loan parameters as supplied by the borrower.
///
/// The interest rate is the yearly percentage figure a borrower is quoted
/// (5.5 means 5.5%); everything downstream works in monthly decimal rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Purchase price of the property.
    pub home_value: Money,
    /// Up-front deposit. May exceed the home value (the resulting negative
    /// loan amount is computed through, with a warning).
    pub deposit: Money,
    /// Annual interest rate in percent.
    pub interest_rate_percent: Decimal,
    /// Loan term in whole years.
    pub term_years: u32,
    /// Date of the first repayment. When present, every schedule row carries
    /// its calendar payment date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// Quantities derived from a `LoanInput`, fixed for one computation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanTerms {
    pub loan_amount: Money,
    pub monthly_rate: Rate,
    pub num_payments: u32,
}

impl LoanInput {
    pub fn validate(&self) -> MortgageResult<()> {
        if self.home_value < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "home_value".into(),
                reason: "Home value cannot be negative".into(),
            });
        }
        if self.deposit < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "deposit".into(),
                reason: "Deposit cannot be negative".into(),
            });
        }
        if self.interest_rate_percent < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "interest_rate_percent".into(),
                reason: "Interest rate cannot be negative".into(),
            });
        }
        if self.term_years == 0 {
            return Err(MortgageError::InvalidInput {
                field: "term_years".into(),
                reason: "Loan term must be at least 1 year".into(),
            });
        }
        Ok(())
    }

    /// Derive the fixed loan terms: amount borrowed, monthly decimal rate,
    /// and total payment count.
    pub fn terms(&self) -> LoanTerms {
        LoanTerms {
            loan_amount: self.home_value - self.deposit,
            monthly_rate: self.interest_rate_percent / dec!(100) / dec!(12),
            num_payments: self.term_years * 12,
        }
    }
}
