//! Loan amortization under the SAC and Price systems

mod schedule;
mod sac;
mod price;

pub use schedule::{AmortizationSystem, LoanPayment, LoanSchedule, BALANCE_EPSILON};
pub use sac::amortize_sac;
pub use price::{amortize_price, fixed_installment};

use crate::error::{ensure_non_negative, CalcError, Result};

/// Build the schedule for either system
pub fn amortize(
    system: AmortizationSystem,
    principal: f64,
    monthly_rate_percent: f64,
    months: u32,
) -> Result<LoanSchedule> {
    match system {
        AmortizationSystem::Sac => amortize_sac(principal, monthly_rate_percent, months),
        AmortizationSystem::Price => amortize_price(principal, monthly_rate_percent, months),
    }
}

/// Preconditions shared by both systems
pub(crate) fn validate_loan(principal: f64, monthly_rate_percent: f64, months: u32) -> Result<()> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("monthly_rate", monthly_rate_percent)?;
    if months == 0 {
        return Err(CalcError::invalid("months", "loan term must be at least 1 month"));
    }
    Ok(())
}
