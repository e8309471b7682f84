use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleRow;
use crate::types::Money;

/// Per-year rollup of the schedule: principal and interest sums plus the
/// balance left at the end of the year. Shaped for a stacked bar chart with a
/// balance line overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: u32,
    pub principal: Money,
    pub interest: Money,
    pub ending_balance: Money,
}

/// Group schedule rows by year, preserving first-seen year order.
///
/// Sums the rounded per-row figures; the ending balance is taken from the
/// group's last row in input order.
pub fn aggregate_by_year(rows: &[ScheduleRow]) -> Vec<YearlySummary> {
    let mut years: Vec<YearlySummary> = Vec::new();

    for row in rows {
        match years.iter_mut().find(|y| y.year == row.year) {
            Some(summary) => {
                summary.principal += row.principal;
                summary.interest += row.interest;
                summary.ending_balance = row.remaining_balance;
            }
            None => years.push(YearlySummary {
                year: row.year,
                principal: row.principal,
                interest: row.interest,
                ending_balance: row.remaining_balance,
            }),
        }
    }

    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::build_schedule;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_one_summary_per_year() {
        let rate = dec!(0.055) / dec!(12);
        let rows = build_schedule(dec!(400000), rate, dec!(2271.16), 360, None);
        let yearly = aggregate_by_year(&rows);
        assert_eq!(yearly.len(), 30);
        for (i, summary) in yearly.iter().enumerate() {
            assert_eq!(summary.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_sums_and_ending_balance() {
        let rows = build_schedule(dec!(1200), Decimal::ZERO, dec!(100), 12, None);
        let yearly = aggregate_by_year(&rows);
        assert_eq!(yearly.len(), 1);
        assert_eq!(yearly[0].principal, dec!(1200.00));
        assert_eq!(yearly[0].interest, dec!(0.00));
        assert_eq!(yearly[0].ending_balance, rows[11].remaining_balance);
    }

    #[test]
    fn test_partial_final_year() {
        // 18 months => years 1 (12 rows) and 2 (6 rows).
        let rows = build_schedule(dec!(1800), Decimal::ZERO, dec!(100), 18, None);
        let yearly = aggregate_by_year(&rows);
        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[0].principal, dec!(1200.00));
        assert_eq!(yearly[1].principal, dec!(600.00));
        assert_eq!(yearly[1].ending_balance, dec!(0.00));
    }

    #[test]
    fn test_empty_schedule() {
        assert!(aggregate_by_year(&[]).is_empty());
    }

    #[test]
    fn test_non_contiguous_years_merge() {
        // True groupby semantics even if rows of a year are interleaved.
        let rate = Decimal::ZERO;
        let mut rows = build_schedule(dec!(2400), rate, dec!(100), 24, None);
        rows.swap(11, 12);
        let yearly = aggregate_by_year(&rows);
        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[0].principal, dec!(1200.00));
        assert_eq!(yearly[1].principal, dec!(1200.00));
    }
}
