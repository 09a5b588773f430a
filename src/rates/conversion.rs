//! Interest-rate period conversion
//!
//! Two separate policies live here and must not be mixed:
//! - [`convert_rate`]: generic conversion between any two bases, pivoting
//!   through an equivalent daily rate (30-day months, 365-day years)
//! - [`yearly_to_monthly`]: the exact/simple switch applied to yearly inputs
//!   that feed the monthly-step simulations

use super::period::{ConversionMethod, RatePeriod, DAYS_PER_MONTH, DAYS_PER_YEAR, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};

/// Convert a percentage rate from one basis to another.
///
/// The rate is first normalized to an equivalent daily decimal rate using
/// compound equivalence, then expanded to the target basis. Inputs and the
/// result are percentages (1.0 = 1%).
pub fn convert_rate(rate: f64, from: RatePeriod, to: RatePeriod) -> f64 {
    let daily = to_daily_decimal(rate, from);

    let target = match to {
        RatePeriod::Daily => daily,
        RatePeriod::Monthly => (1.0 + daily).powf(DAYS_PER_MONTH) - 1.0,
        RatePeriod::Yearly => (1.0 + daily).powf(DAYS_PER_YEAR) - 1.0,
    };

    target * 100.0
}

fn to_daily_decimal(rate: f64, from: RatePeriod) -> f64 {
    let decimal = rate / 100.0;
    match from {
        RatePeriod::Daily => decimal,
        RatePeriod::Monthly => (1.0 + decimal).powf(1.0 / DAYS_PER_MONTH) - 1.0,
        RatePeriod::Yearly => (1.0 + decimal).powf(1.0 / DAYS_PER_YEAR) - 1.0,
    }
}

/// Convert a yearly percentage rate to a monthly percentage rate.
///
/// `Exact` uses compound equivalence, `Simple` divides by twelve.
pub fn yearly_to_monthly(annual_rate: f64, method: ConversionMethod) -> f64 {
    match method {
        ConversionMethod::Exact => ((1.0 + annual_rate / 100.0).powf(1.0 / MONTHS_PER_YEAR) - 1.0) * 100.0,
        ConversionMethod::Simple => annual_rate / MONTHS_PER_YEAR,
    }
}

/// One rate expressed on every basis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

impl RateTable {
    /// Convert `rate` (quoted on `from`) to all three bases
    pub fn from_rate(rate: f64, from: RatePeriod) -> Self {
        Self {
            daily: convert_rate(rate, from, RatePeriod::Daily),
            monthly: convert_rate(rate, from, RatePeriod::Monthly),
            yearly: convert_rate(rate, from, RatePeriod::Yearly),
        }
    }

    pub fn get(&self, period: RatePeriod) -> f64 {
        match period {
            RatePeriod::Daily => self.daily,
            RatePeriod::Monthly => self.monthly,
            RatePeriod::Yearly => self.yearly,
        }
    }
}
