//! Simple (non-compounding) interest

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    /// Principal plus interest
    pub amount: f64,
    pub interest: f64,
}

/// Closed-form simple interest: `principal * rate/100 * periods`.
///
/// `periods` may be fractional; zero periods yield zero interest.
pub fn simple_interest(principal: f64, period_rate_percent: f64, periods: f64) -> SimpleInterestResult {
    let interest = principal * (period_rate_percent / 100.0) * periods;
    SimpleInterestResult {
        amount: principal + interest,
        interest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_twelve_months_at_one_percent() {
        let result = simple_interest(1000.0, 1.0, 12.0);
        assert_relative_eq!(result.interest, 120.0, max_relative = 1e-12);
        assert_relative_eq!(result.amount, 1120.0, max_relative = 1e-12);
    }

    #[test]
    fn test_amount_is_principal_plus_interest() {
        for (p, r, n) in [(0.0, 3.0, 5.0), (2500.0, 0.0, 10.0), (999.99, 1.75, 7.0), (50.0, 12.0, 0.0)] {
            let result = simple_interest(p, r, n);
            assert_relative_eq!(result.amount, p + p * r / 100.0 * n, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_fractional_periods() {
        let result = simple_interest(1000.0, 2.0, 1.5);
        assert_relative_eq!(result.interest, 30.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_periods() {
        let result = simple_interest(1000.0, 5.0, 0.0);
        assert_eq!(result.interest, 0.0);
        assert_eq!(result.amount, 1000.0);
    }
}
