use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

/// One month of the amortisation schedule. Monetary figures are rounded to
/// two decimal places; the running balance is carried unrounded between rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Month number (1-indexed).
    pub month: u32,
    /// Calendar date of this payment, when a start date was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// Balance after this payment, clamped at zero.
    pub remaining_balance: Money,
    /// Loan year this month falls in (1-indexed).
    pub year: u32,
}

/// Expand a loan into its month-by-month repayment ledger.
///
/// Strictly sequential: each row's interest is charged on the balance left by
/// the previous row. The balance accumulator is local to this loop and never
/// goes below zero.
pub fn build_schedule(
    loan_amount: Money,
    monthly_rate: Rate,
    payment: Money,
    num_payments: u32,
    start_date: Option<NaiveDate>,
) -> Vec<ScheduleRow> {
    let mut rows = Vec::with_capacity(num_payments as usize);
    let mut balance = loan_amount;

    for month in 1..=num_payments {
        let interest = balance * monthly_rate;
        let principal = payment - interest;

        balance -= principal;
        if balance < Decimal::ZERO {
            balance = Decimal::ZERO;
        }

        let payment_date = start_date.and_then(|d| d.checked_add_months(Months::new(month - 1)));

        rows.push(ScheduleRow {
            month,
            payment_date,
            payment: payment.round_dp(2),
            principal: principal.round_dp(2),
            interest: interest.round_dp(2),
            remaining_balance: balance.round_dp(2),
            year: (month - 1) / 12 + 1,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_count_matches_payments() {
        let rate = dec!(0.055) / dec!(12);
        let rows = build_schedule(dec!(400000), rate, dec!(2271.16), 360, None);
        assert_eq!(rows.len(), 360);
    }

    #[test]
    fn test_year_index() {
        let rows = build_schedule(dec!(1200), Decimal::ZERO, dec!(50), 24, None);
        assert_eq!(rows[0].year, 1);
        assert_eq!(rows[11].year, 1);
        assert_eq!(rows[12].year, 2);
        assert_eq!(rows[23].year, 2);
    }

    #[test]
    fn test_first_row_split() {
        // 1000 at 1%/month with a 300 payment: 10 interest, 290 principal.
        let rows = build_schedule(dec!(1000), dec!(0.01), dec!(300), 4, None);
        assert_eq!(rows[0].interest, dec!(10.00));
        assert_eq!(rows[0].principal, dec!(290.00));
        assert_eq!(rows[0].remaining_balance, dec!(710.00));
    }

    #[test]
    fn test_balance_clamped_at_zero() {
        // Payment far exceeds the balance: clamp instead of going negative.
        let rows = build_schedule(dec!(100), dec!(0.01), dec!(500), 3, None);
        for row in &rows {
            assert!(row.remaining_balance >= Decimal::ZERO);
        }
        assert_eq!(rows[0].remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_growing_balance_when_payment_below_interest() {
        // Non-amortising edge: principal goes negative, balance climbs.
        let rows = build_schedule(dec!(1000), dec!(0.01), dec!(5), 2, None);
        assert!(rows[0].principal < Decimal::ZERO);
        assert!(rows[0].remaining_balance > dec!(1000));
        assert!(rows[1].remaining_balance > rows[0].remaining_balance);
    }

    #[test]
    fn test_payment_dates_advance_monthly() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let rows = build_schedule(dec!(1200), Decimal::ZERO, dec!(100), 13, Some(start));
        assert_eq!(rows[0].payment_date, NaiveDate::from_ymd_opt(2026, 1, 15));
        assert_eq!(rows[1].payment_date, NaiveDate::from_ymd_opt(2026, 2, 15));
        assert_eq!(rows[12].payment_date, NaiveDate::from_ymd_opt(2027, 1, 15));
    }

    #[test]
    fn test_month_end_dates_clamp() {
        // Jan 31 + 1 month lands on the last day of February.
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let rows = build_schedule(dec!(300), Decimal::ZERO, dec!(100), 3, Some(start));
        assert_eq!(rows[1].payment_date, NaiveDate::from_ymd_opt(2026, 2, 28));
        assert_eq!(rows[2].payment_date, NaiveDate::from_ymd_opt(2026, 3, 31));
    }
}
