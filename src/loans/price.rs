//! Price (French) system: level installments

use super::schedule::{clamp_balance, AmortizationSystem, LoanPayment, LoanSchedule};
use super::validate_loan;
use crate::error::Result;

/// Level installment for a loan of `principal` over `months` at a monthly
/// decimal `rate`.
///
/// A zero rate takes the limit of the annuity formula, `principal / months`.
pub fn fixed_installment(principal: f64, rate: f64, months: u32) -> f64 {
    if rate == 0.0 {
        return principal / months as f64;
    }
    let growth = (1.0 + rate).powi(months as i32);
    principal * (rate * growth) / (growth - 1.0)
}

/// Build a Price schedule.
///
/// Each installment pays the interest on the outstanding balance and
/// amortizes the rest of the fixed payment. Reported balances below
/// [`super::BALANCE_EPSILON`] are shown as zero.
pub fn amortize_price(principal: f64, monthly_rate_percent: f64, months: u32) -> Result<LoanSchedule> {
    validate_loan(principal, monthly_rate_percent, months)?;
    log::debug!("Price schedule: principal={}, rate={}%, months={}", principal, monthly_rate_percent, months);

    let rate = monthly_rate_percent / 100.0;
    if rate == 0.0 {
        log::warn!("Zero interest rate: Price installment falls back to principal / months");
    }
    let fixed_payment = fixed_installment(principal, rate, months);

    let mut payments = Vec::with_capacity(months as usize);
    let mut remaining = principal;
    let mut total_interest = 0.0;

    for period in 1..=months {
        let interest = remaining * rate;
        total_interest += interest;

        let amortization = fixed_payment - interest;
        remaining -= amortization;

        payments.push(LoanPayment {
            period,
            payment_amount: fixed_payment,
            interest_portion: interest,
            amortization_portion: amortization,
            remaining_balance: clamp_balance(remaining),
        });
    }

    Ok(LoanSchedule {
        system: AmortizationSystem::Price,
        principal,
        fixed_payment: Some(fixed_payment),
        total_paid: fixed_payment * months as f64,
        total_interest,
        payments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_twelve_month_schedule() {
        let schedule = amortize_price(10_000.0, 1.0, 12).unwrap();
        let fixed = schedule.fixed_payment.unwrap();

        assert_abs_diff_eq!(fixed, 888.49, epsilon = 0.01);

        let sum: f64 = schedule.payments.iter().map(|p| p.payment_amount).sum();
        assert_abs_diff_eq!(sum, 10_661.88, epsilon = 0.05);
        assert_eq!(schedule.payments[11].remaining_balance, 0.0);
    }

    #[test]
    fn test_payment_constant() {
        let schedule = amortize_price(150_000.0, 0.9, 240).unwrap();
        let fixed = schedule.fixed_payment.unwrap();
        assert!(schedule.payments.iter().all(|p| p.payment_amount == fixed));
        assert_eq!(schedule.last_payment().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_interest_falls_amortization_grows() {
        let schedule = amortize_price(50_000.0, 1.5, 48).unwrap();
        for pair in schedule.payments.windows(2) {
            assert!(pair[1].interest_portion < pair[0].interest_portion);
            assert!(pair[1].amortization_portion > pair[0].amortization_portion);
            assert!(pair[1].remaining_balance <= pair[0].remaining_balance);
        }
    }

    #[test]
    fn test_totals() {
        let schedule = amortize_price(10_000.0, 1.0, 12).unwrap();
        let fixed = schedule.fixed_payment.unwrap();
        assert_relative_eq!(schedule.total_paid, fixed * 12.0, max_relative = 1e-12);
        assert_abs_diff_eq!(schedule.total_interest, schedule.total_paid - 10_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_rate_limit() {
        let schedule = amortize_price(1200.0, 0.0, 12).unwrap();
        assert_eq!(schedule.fixed_payment, Some(100.0));
        assert_eq!(schedule.total_interest, 0.0);
        assert_eq!(schedule.last_payment().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_zero_rate_is_limit_of_small_rates() {
        let limit = fixed_installment(1200.0, 0.0, 12);
        let near = fixed_installment(1200.0, 1e-9, 12);
        assert_abs_diff_eq!(limit, near, epsilon = 1e-4);
    }

    #[test]
    fn test_rejects_negative_rate() {
        assert!(amortize_price(1000.0, -0.5, 12).is_err());
    }
}
