//! Runtime settings read from the environment
//!
//! | Variable                    | Default | Meaning                                   |
//! |-----------------------------|---------|-------------------------------------------|
//! | `CAPITAL_CALC_DECIMALS`     | 2       | Decimal places in printed tables          |
//! | `CAPITAL_CALC_CONVERSION`   | exact   | Yearly to monthly method when not given   |
//! | `CAPITAL_CALC_FULL_TABLE`   | unset   | Print every period instead of a sample    |
//!
//! Unparseable values fall back to the default.

use crate::rates::ConversionMethod;
use std::env;

pub const DEFAULT_DECIMALS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub decimals: usize,
    pub conversion: ConversionMethod,
    pub full_table: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            conversion: ConversionMethod::default(),
            full_table: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let decimals: usize = lookup("CAPITAL_CALC_DECIMALS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_DECIMALS);

        let conversion: ConversionMethod = lookup("CAPITAL_CALC_CONVERSION")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let full_table = lookup("CAPITAL_CALC_FULL_TABLE").is_some();

        let settings = Self {
            decimals,
            conversion,
            full_table,
        };
        log::debug!("Settings: {:?}", settings);
        settings
    }

    /// Format a value with the configured precision
    pub fn money(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.money(1234.5678), "1234.57");
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("CAPITAL_CALC_DECIMALS", "4"),
            ("CAPITAL_CALC_CONVERSION", "simple"),
            ("CAPITAL_CALC_FULL_TABLE", "1"),
        ]));
        assert_eq!(settings.decimals, 4);
        assert_eq!(settings.conversion, ConversionMethod::Simple);
        assert!(settings.full_table);
        assert_eq!(settings.money(1.0), "1.0000");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("CAPITAL_CALC_DECIMALS", "two"),
            ("CAPITAL_CALC_CONVERSION", "fancy"),
        ]));
        assert_eq!(settings.decimals, DEFAULT_DECIMALS);
        assert_eq!(settings.conversion, ConversionMethod::Exact);
    }
}
