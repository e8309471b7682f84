use rust_decimal::{Decimal, MathematicalOps};

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

/// Fixed monthly repayment for a level-pay loan.
///
/// Standard annuity formula `P * r(1+r)^n / ((1+r)^n - 1)`; a zero rate
/// degenerates to straight-line repayment. A negative loan amount is
/// computed through rather than rejected.
pub fn monthly_payment(
    loan_amount: Money,
    monthly_rate: Rate,
    num_payments: u32,
) -> MortgageResult<Money> {
    if num_payments == 0 {
        return Err(MortgageError::InvalidInput {
            field: "num_payments".into(),
            reason: "Number of payments must be greater than zero".into(),
        });
    }

    if monthly_rate.is_zero() {
        return Ok(loan_amount / Decimal::from(num_payments));
    }

    let compound = (Decimal::ONE + monthly_rate).powi(num_payments as i64);
    let denominator = compound - Decimal::ONE;
    if denominator.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    Ok(loan_amount * monthly_rate * compound / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_thirty_year_payment() {
        // 400k at 5.5% over 360 months => ~2271.16/month
        let rate = dec!(0.055) / dec!(12);
        let payment = monthly_payment(dec!(400000), rate, 360).unwrap();
        assert!((payment - dec!(2271.16)).abs() < dec!(0.01));
    }

    #[test]
    fn test_zero_rate_straight_line() {
        let payment = monthly_payment(dec!(400000), Decimal::ZERO, 360).unwrap();
        assert_eq!(payment, dec!(400000) / dec!(360));
        assert_eq!(payment.round_dp(2), dec!(1111.11));
    }

    #[test]
    fn test_zero_loan_zero_payment() {
        let rate = dec!(0.055) / dec!(12);
        let payment = monthly_payment(Decimal::ZERO, rate, 360).unwrap();
        assert_eq!(payment, Decimal::ZERO);
    }

    #[test]
    fn test_negative_loan_computed_through() {
        let rate = dec!(0.055) / dec!(12);
        let payment = monthly_payment(dec!(-100000), rate, 360).unwrap();
        assert!(payment < Decimal::ZERO);
    }

    #[test]
    fn test_zero_payments_rejected() {
        let rate = dec!(0.055) / dec!(12);
        assert!(monthly_payment(dec!(400000), rate, 0).is_err());
    }

    #[test]
    fn test_one_payment_repays_loan_plus_interest() {
        // Single payment: principal plus one month of interest.
        let rate = dec!(0.01);
        let payment = monthly_payment(dec!(1000), rate, 1).unwrap();
        assert_eq!(payment.round_dp(2), dec!(1010.00));
    }
}
