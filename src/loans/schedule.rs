//! Amortization schedule output structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Remaining balances below this are reported as exactly zero.
///
/// Tied to the smallest currency unit; suppresses floating residue on the
/// final installment.
pub const BALANCE_EPSILON: f64 = 0.01;

/// Repayment scheme of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmortizationSystem {
    /// Constant amortization, declining installments
    Sac,
    /// Fixed installment (French system)
    Price,
}

impl AmortizationSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmortizationSystem::Sac => "sac",
            AmortizationSystem::Price => "price",
        }
    }
}

impl fmt::Display for AmortizationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmortizationSystem {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sac" | "constant" => Ok(AmortizationSystem::Sac),
            "price" | "french" | "fixed" => Ok(AmortizationSystem::Price),
            other => Err(CalcError::UnknownVariant {
                kind: "amortization system",
                value: other.to_string(),
            }),
        }
    }
}

/// One installment of a loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    /// Installment number (1-indexed)
    pub period: u32,
    pub payment_amount: f64,
    pub interest_portion: f64,
    pub amortization_portion: f64,
    /// Debt left after this installment
    pub remaining_balance: f64,
}

/// Complete amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub system: AmortizationSystem,
    pub principal: f64,

    /// Level installment; only set for Price schedules
    pub fixed_payment: Option<f64>,

    pub total_paid: f64,
    pub total_interest: f64,
    pub payments: Vec<LoanPayment>,
}

impl LoanSchedule {
    pub fn first_payment(&self) -> Option<&LoanPayment> {
        self.payments.first()
    }

    pub fn last_payment(&self) -> Option<&LoanPayment> {
        self.payments.last()
    }

    /// Number of installments
    pub fn months(&self) -> u32 {
        self.payments.len() as u32
    }

    /// Rows shown in a condensed table: the first, every twelfth and the last
    pub fn sampled(&self) -> Vec<LoanPayment> {
        let months = self.months();
        self.payments
            .iter()
            .filter(|p| p.period == 1 || p.period % 12 == 0 || p.period == months)
            .copied()
            .collect()
    }
}

/// Force floating residue below [`BALANCE_EPSILON`] to exactly zero
pub(crate) fn clamp_balance(balance: f64) -> f64 {
    if balance < BALANCE_EPSILON {
        0.0
    } else {
        balance
    }
}
