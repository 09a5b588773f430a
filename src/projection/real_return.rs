//! Nominal vs. inflation-adjusted growth of an investment
//!
//! Yearly steps: the year's contributions (monthly x 12) go in at the start
//! of the year, then the nominal track grows by the nominal rate and the real
//! track by the Fisher real rate (1 + n) / (1 + i).

use crate::error::{ensure_finite, CalcError, Result};
use serde::{Deserialize, Serialize};

/// One year of a real-return projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealReturnEntry {
    pub year: u32,
    pub nominal_value: f64,
    pub real_value: f64,
    /// Nominal gain of this year, net of the year's contributions
    pub nominal_return: f64,
    /// Real gain of this year, net of the year's contributions
    pub real_return: f64,
    /// nominal_return - real_return
    pub inflation_impact: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealReturnResult {
    /// Year 0 through the last year
    pub entries: Vec<RealReturnEntry>,
    pub total_contributions: f64,
    pub total_nominal_return: f64,
    pub total_real_return: f64,
    pub total_inflation_impact: f64,
}

impl RealReturnResult {
    pub fn final_nominal_value(&self) -> f64 {
        self.entries.last().map(|e| e.nominal_value).unwrap_or(0.0)
    }

    pub fn final_real_value(&self) -> f64 {
        self.entries.last().map(|e| e.real_value).unwrap_or(0.0)
    }
}

/// Real annual rate (percent) implied by a nominal rate and inflation
pub fn real_rate(nominal_annual_pct: f64, inflation_annual_pct: f64) -> f64 {
    ((1.0 + nominal_annual_pct / 100.0) / (1.0 + inflation_annual_pct / 100.0) - 1.0) * 100.0
}

pub fn project_real_return(
    initial_amount: f64,
    monthly_contribution: f64,
    nominal_annual_pct: f64,
    inflation_annual_pct: f64,
    years: u32,
) -> Result<RealReturnResult> {
    ensure_finite("initial_amount", initial_amount)?;
    ensure_finite("monthly_contribution", monthly_contribution)?;
    ensure_finite("nominal_annual_pct", nominal_annual_pct)?;
    ensure_finite("inflation_annual_pct", inflation_annual_pct)?;
    if inflation_annual_pct <= -100.0 {
        return Err(CalcError::invalid("inflation_annual_pct", "must be greater than -100%"));
    }

    let nominal_factor = 1.0 + nominal_annual_pct / 100.0;
    let real_factor = 1.0 + real_rate(nominal_annual_pct, inflation_annual_pct) / 100.0;
    let yearly_contribution = monthly_contribution * 12.0;

    let mut entries = Vec::with_capacity(years as usize + 1);
    entries.push(RealReturnEntry {
        year: 0,
        nominal_value: initial_amount,
        real_value: initial_amount,
        nominal_return: 0.0,
        real_return: 0.0,
        inflation_impact: 0.0,
    });

    let mut nominal_value = initial_amount;
    let mut real_value = initial_amount;

    for year in 1..=years {
        let prev_nominal = nominal_value;
        let prev_real = real_value;

        nominal_value = (nominal_value + yearly_contribution) * nominal_factor;
        real_value = (real_value + yearly_contribution) * real_factor;

        let nominal_return = nominal_value - prev_nominal - yearly_contribution;
        let real_return = real_value - prev_real - yearly_contribution;

        entries.push(RealReturnEntry {
            year,
            nominal_value,
            real_value,
            nominal_return,
            real_return,
            inflation_impact: nominal_return - real_return,
        });
    }

    let total_contributions = initial_amount + yearly_contribution * years as f64;
    let total_nominal_return = nominal_value - total_contributions;
    let total_real_return = real_value - total_contributions;

    Ok(RealReturnResult {
        entries,
        total_contributions,
        total_nominal_return,
        total_real_return,
        total_inflation_impact: total_nominal_return - total_real_return,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_real_rate() {
        assert_abs_diff_eq!(real_rate(12.0, 4.5), (1.12 / 1.045 - 1.0) * 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(real_rate(5.0, 5.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_year_zero_entry() {
        let result = project_real_return(10_000.0, 500.0, 12.0, 4.5, 10).unwrap();
        assert_eq!(result.entries.len(), 11);
        let first = result.entries[0];
        assert_eq!(first.nominal_value, 10_000.0);
        assert_eq!(first.real_value, 10_000.0);
        assert_eq!(first.inflation_impact, 0.0);
    }

    #[test]
    fn test_first_year_values() {
        let result = project_real_return(10_000.0, 500.0, 12.0, 4.5, 1).unwrap();
        let year1 = result.entries[1];
        assert_relative_eq!(year1.nominal_value, 16_000.0 * 1.12, max_relative = 1e-12);
        assert_relative_eq!(year1.real_value, 16_000.0 * 1.12 / 1.045, max_relative = 1e-12);
        assert_relative_eq!(year1.nominal_return, 16_000.0 * 1.12 - 16_000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_inflation_reduces_real_value() {
        let result = project_real_return(10_000.0, 500.0, 12.0, 4.5, 10).unwrap();
        assert!(result.final_real_value() < result.final_nominal_value());
        assert!(result.total_inflation_impact > 0.0);
        assert_relative_eq!(result.total_contributions, 70_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_inflation_tracks_match() {
        let result = project_real_return(1000.0, 100.0, 8.0, 0.0, 5).unwrap();
        for entry in &result.entries {
            assert_relative_eq!(entry.nominal_value, entry.real_value, max_relative = 1e-12);
        }
        assert_abs_diff_eq!(result.total_inflation_impact, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_real_track_grows_at_real_rate() {
        let result = project_real_return(1000.0, 0.0, 10.0, 3.0, 3).unwrap();
        let factor = 1.0 + real_rate(10.0, 3.0) / 100.0;
        for pair in result.entries.windows(2) {
            assert_relative_eq!(pair[1].real_value, pair[0].real_value * factor, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_rejects_total_deflation() {
        assert!(project_real_return(1000.0, 100.0, 8.0, -100.0, 5).is_err());
        assert!(project_real_return(1000.0, 100.0, 8.0, -1.0, 5).is_ok());
    }
}
