//! Rate bases and conversion conventions

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Days in a month for daily-pivot conversions
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Days in a year for daily-pivot conversions
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Months in a year for the yearly→monthly switch
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Time basis over which a percentage rate is quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatePeriod {
    Daily,
    Monthly,
    Yearly,
}

impl RatePeriod {
    pub const ALL: [RatePeriod; 3] = [RatePeriod::Daily, RatePeriod::Monthly, RatePeriod::Yearly];

    pub fn as_str(&self) -> &'static str {
        match self {
            RatePeriod::Daily => "daily",
            RatePeriod::Monthly => "monthly",
            RatePeriod::Yearly => "yearly",
        }
    }

    /// Monthly percentage rate for a rate quoted on this basis.
    ///
    /// Yearly rates go through the exact/simple switch, daily rates through
    /// the daily pivot, monthly rates pass through.
    pub fn resolve_monthly(&self, rate: f64, method: ConversionMethod) -> f64 {
        match self {
            RatePeriod::Monthly => rate,
            RatePeriod::Yearly => super::yearly_to_monthly(rate, method),
            RatePeriod::Daily => super::convert_rate(rate, RatePeriod::Daily, RatePeriod::Monthly),
        }
    }
}

impl fmt::Display for RatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatePeriod {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" | "d" => Ok(RatePeriod::Daily),
            "monthly" | "month" | "m" => Ok(RatePeriod::Monthly),
            "yearly" | "year" | "annual" | "y" => Ok(RatePeriod::Yearly),
            other => Err(CalcError::UnknownVariant {
                kind: "rate period",
                value: other.to_string(),
            }),
        }
    }
}

/// How a yearly rate is turned into a monthly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMethod {
    /// Compound equivalence: (1 + i)^(1/12) - 1
    #[default]
    Exact,
    /// Commercial convention: i / 12
    Simple,
}

impl ConversionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionMethod::Exact => "exact",
            ConversionMethod::Simple => "simple",
        }
    }
}

impl fmt::Display for ConversionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionMethod {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "compound" => Ok(ConversionMethod::Exact),
            "simple" | "linear" | "commercial" => Ok(ConversionMethod::Simple),
            other => Err(CalcError::UnknownVariant {
                kind: "conversion method",
                value: other.to_string(),
            }),
        }
    }
}
