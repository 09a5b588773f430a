//! Inflation adjustment of monetary values
//!
//! Supports:
//! - Carrying a value forward (amount needed later for the same purchasing power)
//! - Bringing a future value back to today's money
//! - Year-by-year erosion of a fixed nominal amount

use serde::{Deserialize, Serialize};

/// Compounded inflation factor over `years`
fn inflation_factor(annual_inflation_percent: f64, years: f64) -> f64 {
    (1.0 + annual_inflation_percent / 100.0).powf(years)
}

/// Value needed after `years` to match `current_value` today
pub fn future_value_with_inflation(current_value: f64, annual_inflation_percent: f64, years: f64) -> f64 {
    current_value * inflation_factor(annual_inflation_percent, years)
}

/// Today's equivalent of `future_value` received after `years`
pub fn present_value_with_inflation(future_value: f64, annual_inflation_percent: f64, years: f64) -> f64 {
    future_value / inflation_factor(annual_inflation_percent, years)
}

/// Share of today's purchasing power (percent) a fixed amount keeps after `years`
pub fn purchasing_power(annual_inflation_percent: f64, years: f64) -> f64 {
    100.0 / inflation_factor(annual_inflation_percent, years)
}

/// Real value of a fixed nominal amount at a given year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErosionEntry {
    pub year: u32,
    pub nominal_value: f64,
    pub real_value: f64,
    /// Purchasing power lost so far, as a percentage of the nominal value
    pub loss_percent: f64,
}

/// Erosion of `current_value` for year 0 through `years`
pub fn erosion_schedule(current_value: f64, annual_inflation_percent: f64, years: u32) -> Vec<ErosionEntry> {
    (0..=years)
        .map(|year| {
            let real_value = present_value_with_inflation(current_value, annual_inflation_percent, year as f64);
            let loss_percent = if current_value == 0.0 {
                0.0
            } else {
                (current_value - real_value) / current_value * 100.0
            };
            ErosionEntry {
                year,
                nominal_value: current_value,
                real_value,
                loss_percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_future_value() {
        let fv = future_value_with_inflation(1000.0, 5.0, 2.0);
        assert_relative_eq!(fv, 1102.5, max_relative = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        for (value, rate, years) in [(1000.0, 4.5, 10.0), (0.0, 3.0, 5.0), (123.45, 0.0, 7.0), (5e6, 12.0, 30.0)] {
            let fv = future_value_with_inflation(value, rate, years);
            assert_relative_eq!(present_value_with_inflation(fv, rate, years), value, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_monotone_in_years() {
        let values: Vec<f64> = (0..10).map(|y| future_value_with_inflation(100.0, 3.0, y as f64)).collect();
        for pair in values.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_purchasing_power() {
        assert_relative_eq!(purchasing_power(0.0, 10.0), 100.0, max_relative = 1e-12);
        assert_abs_diff_eq!(purchasing_power(10.0, 1.0), 100.0 / 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_erosion_schedule() {
        let schedule = erosion_schedule(1000.0, 10.0, 3);
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule[0].real_value, 1000.0);
        assert_eq!(schedule[0].loss_percent, 0.0);
        assert_relative_eq!(schedule[1].real_value, 1000.0 / 1.1, max_relative = 1e-12);
        assert!(schedule[3].loss_percent > schedule[2].loss_percent);
        assert!(schedule.iter().all(|e| e.nominal_value == 1000.0));
    }
}
