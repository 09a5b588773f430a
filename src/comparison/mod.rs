//! Side-by-side growth of several investments
//!
//! Every investment starts from the same amount and receives the same monthly
//! contribution; only the rate differs. Series are independent, so they are
//! computed in parallel.

mod loader;

pub use loader::{load_investments, load_investments_from_reader};

use crate::error::{ensure_finite, CalcError, Result};
use crate::rates::{ConversionMethod, RatePeriod};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// An investment option to compare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub name: String,

    /// Rate as a percentage on `rate_period`
    pub rate: f64,

    pub rate_period: RatePeriod,

    /// Used only when `rate_period` is yearly
    #[serde(default)]
    pub conversion_method: ConversionMethod,
}

impl Investment {
    pub fn new(name: impl Into<String>, rate: f64, rate_period: RatePeriod, conversion_method: ConversionMethod) -> Self {
        Self {
            name: name.into(),
            rate,
            rate_period,
            conversion_method,
        }
    }

    /// Monthly percentage rate used in the simulation
    pub fn monthly_rate(&self) -> f64 {
        self.rate_period.resolve_monthly(self.rate, self.conversion_method)
    }

    /// Reject rates the monthly conversion cannot represent
    fn validate(&self) -> Result<()> {
        ensure_finite("rate", self.rate)?;
        let exact_yearly = self.rate_period == RatePeriod::Yearly && self.conversion_method == ConversionMethod::Exact;
        if exact_yearly && self.rate <= -100.0 {
            return Err(CalcError::invalid(
                "rate",
                format!("{}: yearly rate must be greater than -100% for exact conversion", self.name),
            ));
        }
        Ok(())
    }
}

/// Common market options with yearly rates, used when no list is supplied
pub fn default_investments() -> Vec<Investment> {
    [
        ("Savings account", 4.2),
        ("Bank CD", 8.3),
        ("Inflation-linked treasury", 6.5),
        ("Real estate funds", 10.5),
        ("Equities", 12.0),
    ]
    .into_iter()
    .map(|(name, rate)| Investment::new(name, rate, RatePeriod::Yearly, ConversionMethod::Exact))
    .collect()
}

/// Year-end values of one investment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSeries {
    pub name: String,
    pub monthly_rate: f64,

    /// Index = year; year 0 holds the initial amount
    pub yearly_values: Vec<f64>,
}

impl ComparisonSeries {
    pub fn final_value(&self) -> f64 {
        self.yearly_values.last().copied().unwrap_or(0.0)
    }
}

/// Simulate every investment for `years` years of monthly steps.
///
/// Each month adds the contribution, then applies the monthly rate. The
/// output keeps the order of `investments`.
pub fn compare_investments(
    investments: &[Investment],
    initial_amount: f64,
    monthly_contribution: f64,
    years: u32,
) -> Result<Vec<ComparisonSeries>> {
    if investments.is_empty() {
        return Err(CalcError::invalid("investments", "at least one investment is required"));
    }
    ensure_finite("initial_amount", initial_amount)?;
    ensure_finite("monthly_contribution", monthly_contribution)?;
    for inv in investments {
        inv.validate()?;
    }

    log::debug!("Comparing {} investments over {} years", investments.len(), years);

    let series = investments
        .par_iter()
        .map(|inv| simulate_series(inv, initial_amount, monthly_contribution, years))
        .collect();

    Ok(series)
}

fn simulate_series(inv: &Investment, initial_amount: f64, monthly_contribution: f64, years: u32) -> ComparisonSeries {
    let monthly_rate = inv.monthly_rate();
    let factor = 1.0 + monthly_rate / 100.0;

    let mut yearly_values = Vec::with_capacity(years as usize + 1);
    yearly_values.push(initial_amount);

    let mut value = initial_amount;
    for _year in 1..=years {
        for _month in 1..=12 {
            value += monthly_contribution;
            value *= factor;
        }
        yearly_values.push(value);
    }

    ComparisonSeries {
        name: inv.name.clone(),
        monthly_rate,
        yearly_values,
    }
}

/// Growth of a lump sum with no contributions, month 0 through `months`
pub fn fixed_rate_growth(initial_amount: f64, monthly_rate_percent: f64, months: u32) -> Vec<f64> {
    let factor = 1.0 + monthly_rate_percent / 100.0;
    (0..=months)
        .map(|month| initial_amount * factor.powi(month as i32))
        .collect()
}

/// A lump sum left to grow at a fixed monthly return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedReturnInvestment {
    pub name: String,
    pub initial_value: f64,

    /// Monthly return, percent
    pub monthly_return: f64,
}

impl FixedReturnInvestment {
    pub fn new(name: impl Into<String>, initial_value: f64, monthly_return: f64) -> Self {
        Self {
            name: name.into(),
            initial_value,
            monthly_return,
        }
    }
}

/// Savings, treasury and CD lump sums of 1000 each
pub fn default_fixed_return_investments() -> Vec<FixedReturnInvestment> {
    vec![
        FixedReturnInvestment::new("Savings account", 1000.0, 0.3),
        FixedReturnInvestment::new("Treasury (Selic)", 1000.0, 0.8),
        FixedReturnInvestment::new("Bank CD", 1000.0, 0.9),
    ]
}

/// Month-by-month value of one lump sum
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthCurve {
    pub name: String,
    pub monthly_return: f64,

    /// Index = month; month 0 holds the initial value
    pub values: Vec<f64>,
}

impl GrowthCurve {
    pub fn final_value(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// Gain over the initial value
    pub fn total_return(&self) -> f64 {
        self.final_value() - self.values.first().copied().unwrap_or(0.0)
    }
}

/// Grow each lump sum at its own monthly return for `months` months
pub fn project_fixed_returns(investments: &[FixedReturnInvestment], months: u32) -> Result<Vec<GrowthCurve>> {
    if investments.is_empty() {
        return Err(CalcError::invalid("investments", "at least one investment is required"));
    }
    for inv in investments {
        ensure_finite("initial_value", inv.initial_value)?;
        ensure_finite("monthly_return", inv.monthly_return)?;
        if inv.monthly_return <= -100.0 {
            return Err(CalcError::invalid(
                "monthly_return",
                format!("{}: must be greater than -100%", inv.name),
            ));
        }
    }

    log::debug!("Projecting {} fixed-return investments over {} months", investments.len(), months);

    let curves = investments
        .par_iter()
        .map(|inv| GrowthCurve {
            name: inv.name.clone(),
            monthly_return: inv.monthly_return,
            values: fixed_rate_growth(inv.initial_value, inv.monthly_return, months),
        })
        .collect();

    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project_compound_interest;
    use approx::assert_relative_eq;

    fn sample_investments() -> Vec<Investment> {
        vec![
            Investment::new("Savings", 0.5, RatePeriod::Monthly, ConversionMethod::Exact),
            Investment::new("Bond", 10.0, RatePeriod::Yearly, ConversionMethod::Exact),
            Investment::new("Bond (simple)", 10.0, RatePeriod::Yearly, ConversionMethod::Simple),
        ]
    }

    #[test]
    fn test_order_and_shape() {
        let series = compare_investments(&sample_investments(), 10_000.0, 500.0, 10).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].name, "Savings");
        assert_eq!(series[2].name, "Bond (simple)");
        assert!(series.iter().all(|s| s.yearly_values.len() == 11));
        assert!(series.iter().all(|s| s.yearly_values[0] == 10_000.0));
    }

    #[test]
    fn test_simple_conversion_grows_faster() {
        let series = compare_investments(&sample_investments(), 10_000.0, 500.0, 10).unwrap();
        // i/12 overstates the exact monthly equivalent
        assert!(series[2].final_value() > series[1].final_value());
    }

    #[test]
    fn test_matches_compound_projection() {
        let inv = Investment::new("Fund", 1.0, RatePeriod::Monthly, ConversionMethod::Exact);
        let series = compare_investments(&[inv], 1000.0, 100.0, 3).unwrap();
        let projection = project_compound_interest(1000.0, 100.0, 1.0, 36).unwrap();

        assert_relative_eq!(series[0].final_value(), projection.final_balance, max_relative = 1e-12);
    }

    #[test]
    fn test_default_investments_ranked_by_rate() {
        let series = compare_investments(&default_investments(), 10_000.0, 500.0, 10).unwrap();
        assert_eq!(series.len(), 5);
        let equities = series.iter().find(|s| s.name == "Equities").unwrap();
        assert!(series.iter().all(|s| s.final_value() <= equities.final_value()));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(compare_investments(&[], 1000.0, 100.0, 3).is_err());
    }

    #[test]
    fn test_exact_yearly_rate_at_minus_hundred_rejected() {
        let wiped = Investment::new("Wiped out", -100.0, RatePeriod::Yearly, ConversionMethod::Exact);
        let err = compare_investments(&[wiped], 1000.0, 100.0, 2).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));

        let below = Investment::new("Below", -150.0, RatePeriod::Yearly, ConversionMethod::Exact);
        assert!(compare_investments(&[below], 1000.0, 100.0, 2).is_err());

        // i/12 stays finite, so the simple convention still runs
        let simple = Investment::new("Simple", -120.0, RatePeriod::Yearly, ConversionMethod::Simple);
        let series = compare_investments(&[simple], 1000.0, 0.0, 1).unwrap();
        assert!(series[0].yearly_values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_project_fixed_returns() {
        let curves = project_fixed_returns(&default_fixed_return_investments(), 24).unwrap();
        assert_eq!(curves.len(), 3);
        assert!(curves.iter().all(|c| c.values.len() == 25 && c.values[0] == 1000.0));
        assert_eq!(curves[2].name, "Bank CD");
        assert_relative_eq!(curves[2].final_value(), 1000.0 * 1.009_f64.powi(24), max_relative = 1e-12);
        assert!(curves[0].total_return() < curves[1].total_return());
    }

    #[test]
    fn test_project_fixed_returns_rejects_bad_input() {
        assert!(project_fixed_returns(&[], 12).is_err());
        let bad = FixedReturnInvestment::new("Bad", 1000.0, f64::NAN);
        assert!(matches!(
            project_fixed_returns(&[bad], 12),
            Err(CalcError::NonFinite { .. })
        ));
        let wiped = FixedReturnInvestment::new("Wiped", 1000.0, -100.0);
        assert!(project_fixed_returns(&[wiped], 12).is_err());
    }

    #[test]
    fn test_fixed_rate_growth() {
        let curve = fixed_rate_growth(1000.0, 1.0, 24);
        assert_eq!(curve.len(), 25);
        assert_eq!(curve[0], 1000.0);
        assert_relative_eq!(curve[24], 1000.0 * 1.01_f64.powi(24), max_relative = 1e-12);
    }
}
