//! SAC: constant amortization, declining installments

use super::schedule::{clamp_balance, AmortizationSystem, LoanPayment, LoanSchedule};
use super::validate_loan;
use crate::error::Result;

/// Build a SAC schedule.
///
/// Every installment amortizes `principal / months`; interest is charged on
/// the balance outstanding at the start of the period.
pub fn amortize_sac(principal: f64, monthly_rate_percent: f64, months: u32) -> Result<LoanSchedule> {
    validate_loan(principal, monthly_rate_percent, months)?;
    log::debug!("SAC schedule: principal={}, rate={}%, months={}", principal, monthly_rate_percent, months);

    let rate = monthly_rate_percent / 100.0;
    let amortization = principal / months as f64;

    let mut payments = Vec::with_capacity(months as usize);
    let mut remaining = principal;
    let mut total_interest = 0.0;

    for period in 1..=months {
        let interest = remaining * rate;
        total_interest += interest;

        remaining -= amortization;

        payments.push(LoanPayment {
            period,
            payment_amount: amortization + interest,
            interest_portion: interest,
            amortization_portion: amortization,
            remaining_balance: clamp_balance(remaining),
        });
    }

    Ok(LoanSchedule {
        system: AmortizationSystem::Sac,
        principal,
        fixed_payment: None,
        total_paid: principal + total_interest,
        total_interest,
        payments,
    })
}
