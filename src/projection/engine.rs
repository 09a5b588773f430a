//! Core compound-interest engine for monthly projections

use crate::error::{ensure_finite, Result};
use super::state::ProjectionState;
use super::timeline::CompoundInterestResult;

/// Inputs for a compound-interest projection
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Balance at month 0
    pub initial_capital: f64,

    /// Amount added at the start of every month
    pub monthly_contribution: f64,

    /// Monthly interest rate as a percentage (1.0 = 1%).
    /// Yearly inputs must already be resolved through the exact/simple switch.
    pub monthly_rate: f64,

    /// Number of months to project
    pub total_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            initial_capital: 1000.0,
            monthly_contribution: 100.0,
            monthly_rate: 1.0,
            total_months: 120, // 10 years
        }
    }
}

/// Monthly compound-interest projection engine
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create an engine, rejecting non-finite inputs
    pub fn new(config: ProjectionConfig) -> Result<Self> {
        ensure_finite("initial_capital", config.initial_capital)?;
        ensure_finite("monthly_contribution", config.monthly_contribution)?;
        ensure_finite("monthly_rate", config.monthly_rate)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection month by month
    pub fn project(&self) -> CompoundInterestResult {
        let config = &self.config;
        log::debug!(
            "Projecting {} months: capital={}, contribution={}, rate={}%",
            config.total_months,
            config.initial_capital,
            config.monthly_contribution,
            config.monthly_rate
        );

        let mut result = CompoundInterestResult::new(config.initial_capital);
        if config.total_months == 0 {
            log::warn!("Zero-month projection requested; returning initial state");
            return result;
        }

        let rate = config.monthly_rate / 100.0;
        let mut state = ProjectionState::from_initial(config.initial_capital);
        result.timeline.reserve(config.total_months as usize);

        for _month in 1..=config.total_months {
            state.advance_month(config.monthly_contribution, rate);
            result.add_entry(state.snapshot());
        }

        result
    }
}

/// Project a balance with monthly contributions and monthly compounding.
///
/// Each month the contribution is added first, then interest accrues on the
/// whole balance. `total_months == 0` returns the initial state with an empty
/// timeline.
pub fn project_compound_interest(
    initial_capital: f64,
    monthly_contribution: f64,
    monthly_rate_percent: f64,
    total_months: u32,
) -> Result<CompoundInterestResult> {
    let engine = ProjectionEngine::new(ProjectionConfig {
        initial_capital,
        monthly_contribution,
        monthly_rate: monthly_rate_percent,
        total_months,
    })?;
    Ok(engine.project())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use approx::assert_relative_eq;

    #[test]
    fn test_projection_runs() {
        let result = project_compound_interest(1000.0, 100.0, 1.0, 12).unwrap();

        assert_eq!(result.timeline.len(), 12);
        assert_eq!(result.timeline[0].period, 1);
        assert_eq!(result.timeline[11].period, 12);
        assert_relative_eq!(result.total_contributions, 2200.0, max_relative = 1e-12);
        assert!(result.final_balance > result.total_contributions);
    }

    #[test]
    fn test_first_month_order() {
        let result = project_compound_interest(1000.0, 100.0, 1.0, 1).unwrap();
        // (1000 + 100) * 1.01
        assert_relative_eq!(result.final_balance, 1111.0, max_relative = 1e-12);
        assert_relative_eq!(result.total_interest, 11.0, max_relative = 1e-9);
    }

    #[test]
    fn test_closed_form_without_contributions() {
        let result = project_compound_interest(5000.0, 0.0, 0.5, 240).unwrap();
        let expected = 5000.0 * 1.005_f64.powi(240);
        assert_relative_eq!(result.final_balance, expected, max_relative = 1e-10);
    }

    #[test]
    fn test_zero_rate_is_sum_of_contributions() {
        let result = project_compound_interest(1000.0, 50.0, 0.0, 24).unwrap();
        assert_eq!(result.final_balance, 2200.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_zero_months_returns_initial_state() {
        let result = project_compound_interest(1000.0, 100.0, 1.0, 0).unwrap();
        assert!(result.timeline.is_empty());
        assert_eq!(result.final_balance, 1000.0);
        assert_eq!(result.total_contributions, 1000.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_interest_is_residual() {
        let result = project_compound_interest(250.0, 75.0, 0.8, 36).unwrap();
        for entry in &result.timeline {
            assert_relative_eq!(
                entry.total_interest,
                entry.balance - entry.total_contributions,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_balance_increases_monthly() {
        let result = project_compound_interest(1000.0, 100.0, 1.0, 60).unwrap();
        for pair in result.timeline.windows(2) {
            assert!(pair[1].balance > pair[0].balance);
        }
    }

    #[test]
    fn test_yearly_sampling() {
        let result = project_compound_interest(1000.0, 100.0, 1.0, 120).unwrap();
        let yearly = result.yearly();
        assert_eq!(yearly.len(), 10);
        assert_eq!(yearly.last().unwrap().balance, result.final_balance);
    }

    #[test]
    fn test_rejects_nan() {
        let err = project_compound_interest(f64::NAN, 100.0, 1.0, 12).unwrap_err();
        assert!(matches!(err, CalcError::NonFinite { .. }));
    }

    #[test]
    fn test_default_config() {
        let engine = ProjectionEngine::new(ProjectionConfig::default()).unwrap();
        assert_eq!(engine.config().total_months, 120);
        assert_eq!(engine.project().timeline.len(), 120);
    }
}
