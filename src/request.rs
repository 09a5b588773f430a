//! Immutable calculation requests
//!
//! Each request carries the raw form-style inputs (rate plus its basis,
//! period plus its unit) with defaults for every field, and resolves them into
//! the engine's monthly conventions before calling it. Requests deserialize
//! from JSON tagged by `"calculation"`.

use crate::comparison::{
    compare_investments, default_fixed_return_investments, default_investments, project_fixed_returns,
    ComparisonSeries, FixedReturnInvestment, GrowthCurve, Investment,
};
use crate::error::{CalcError, Result};
use crate::inflation::{
    erosion_schedule, future_value_with_inflation, present_value_with_inflation, purchasing_power, ErosionEntry,
};
use crate::interest::{simple_interest, SimpleInterestResult};
use crate::loans::{amortize, AmortizationSystem, LoanSchedule};
use crate::projection::{project_compound_interest, project_real_return, CompoundInterestResult, RealReturnResult};
use crate::rates::{ConversionMethod, RatePeriod, RateTable, DAYS_PER_MONTH, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a duration is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Months,
    Years,
}

impl PeriodUnit {
    /// Length in months of `period` units
    pub fn to_months(&self, period: u32) -> Result<u32> {
        match self {
            PeriodUnit::Months => Ok(period),
            PeriodUnit::Years => period
                .checked_mul(12)
                .ok_or_else(|| CalcError::invalid("period", format!("{} years does not fit in a month count", period))),
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodUnit::Months => f.write_str("months"),
            PeriodUnit::Years => f.write_str("years"),
        }
    }
}

impl FromStr for PeriodUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "months" | "month" | "m" => Ok(PeriodUnit::Months),
            "years" | "year" | "y" => Ok(PeriodUnit::Years),
            other => Err(CalcError::UnknownVariant {
                kind: "period unit",
                value: other.to_string(),
            }),
        }
    }
}

fn default_capital() -> f64 { 1000.0 }
fn default_contribution() -> f64 { 100.0 }
fn default_rate() -> f64 { 1.0 }
fn default_yearly() -> RatePeriod { RatePeriod::Yearly }
fn default_monthly() -> RatePeriod { RatePeriod::Monthly }
fn default_ten() -> u32 { 10 }
fn default_growth_months() -> u32 { 24 }
fn default_years() -> PeriodUnit { PeriodUnit::Years }
fn default_months() -> PeriodUnit { PeriodUnit::Months }
fn default_loan_amount() -> f64 { 100_000.0 }
fn default_loan_term() -> u32 { 120 }
fn default_loan_system() -> AmortizationSystem { AmortizationSystem::Price }
fn default_inflation() -> f64 { 4.5 }
fn default_real_initial() -> f64 { 10_000.0 }
fn default_real_contribution() -> f64 { 500.0 }
fn default_nominal() -> f64 { 12.0 }
fn default_simple_periods() -> f64 { 12.0 }

/// Compound interest with monthly contributions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestRequest {
    #[serde(default = "default_capital")]
    pub initial_capital: f64,

    #[serde(default = "default_contribution")]
    pub monthly_contribution: f64,

    #[serde(default = "default_rate")]
    pub interest_rate: f64,

    #[serde(default = "default_yearly")]
    pub rate_period: RatePeriod,

    #[serde(default)]
    pub conversion_method: ConversionMethod,

    #[serde(default = "default_ten")]
    pub period: u32,

    #[serde(default = "default_years")]
    pub period_unit: PeriodUnit,
}

impl Default for CompoundInterestRequest {
    fn default() -> Self {
        Self {
            initial_capital: default_capital(),
            monthly_contribution: default_contribution(),
            interest_rate: default_rate(),
            rate_period: default_yearly(),
            conversion_method: ConversionMethod::default(),
            period: default_ten(),
            period_unit: default_years(),
        }
    }
}

impl CompoundInterestRequest {
    pub fn monthly_rate(&self) -> f64 {
        self.rate_period.resolve_monthly(self.interest_rate, self.conversion_method)
    }

    pub fn total_months(&self) -> Result<u32> {
        self.period_unit.to_months(self.period)
    }

    pub fn run(&self) -> Result<CompoundInterestResult> {
        project_compound_interest(
            self.initial_capital,
            self.monthly_contribution,
            self.monthly_rate(),
            self.total_months()?,
        )
    }
}

/// Simple interest over a number of months or years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestRequest {
    #[serde(default = "default_capital")]
    pub principal: f64,

    #[serde(default = "default_rate")]
    pub interest_rate: f64,

    #[serde(default = "default_monthly")]
    pub rate_period: RatePeriod,

    #[serde(default = "default_simple_periods")]
    pub period: f64,

    #[serde(default = "default_months")]
    pub period_unit: PeriodUnit,
}

impl Default for SimpleInterestRequest {
    fn default() -> Self {
        Self {
            principal: default_capital(),
            interest_rate: default_rate(),
            rate_period: default_monthly(),
            period: default_simple_periods(),
            period_unit: default_months(),
        }
    }
}

impl SimpleInterestRequest {
    /// Monthly rate under linear (non-compounding) proration
    pub fn monthly_rate(&self) -> f64 {
        match self.rate_period {
            RatePeriod::Monthly => self.interest_rate,
            RatePeriod::Yearly => self.interest_rate / MONTHS_PER_YEAR,
            RatePeriod::Daily => self.interest_rate * DAYS_PER_MONTH,
        }
    }

    pub fn months(&self) -> f64 {
        match self.period_unit {
            PeriodUnit::Months => self.period,
            PeriodUnit::Years => self.period * MONTHS_PER_YEAR,
        }
    }

    pub fn run(&self) -> SimpleInterestResult {
        simple_interest(self.principal, self.monthly_rate(), self.months())
    }
}

/// Express one rate on every basis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConversionRequest {
    #[serde(default = "default_rate")]
    pub interest_rate: f64,

    #[serde(default = "default_monthly")]
    pub from: RatePeriod,
}

impl RateConversionRequest {
    pub fn run(&self) -> RateTable {
        RateTable::from_rate(self.interest_rate, self.from)
    }
}

/// Loan schedule under SAC or Price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    #[serde(default = "default_loan_amount")]
    pub loan_amount: f64,

    #[serde(default = "default_rate")]
    pub interest_rate: f64,

    #[serde(default = "default_monthly")]
    pub rate_period: RatePeriod,

    #[serde(default)]
    pub conversion_method: ConversionMethod,

    /// Term in months
    #[serde(default = "default_loan_term")]
    pub loan_term: u32,

    #[serde(default = "default_loan_system")]
    pub system: AmortizationSystem,
}

impl Default for LoanRequest {
    fn default() -> Self {
        Self {
            loan_amount: default_loan_amount(),
            interest_rate: default_rate(),
            rate_period: default_monthly(),
            conversion_method: ConversionMethod::default(),
            loan_term: default_loan_term(),
            system: default_loan_system(),
        }
    }
}

impl LoanRequest {
    pub fn monthly_rate(&self) -> f64 {
        self.rate_period.resolve_monthly(self.interest_rate, self.conversion_method)
    }

    pub fn run(&self) -> Result<LoanSchedule> {
        amortize(self.system, self.loan_amount, self.monthly_rate(), self.loan_term)
    }
}

/// Purchasing-power view of an amount under inflation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationRequest {
    #[serde(default = "default_capital")]
    pub current_value: f64,

    /// Annual inflation, percent
    #[serde(default = "default_inflation")]
    pub inflation_rate: f64,

    #[serde(default = "default_ten")]
    pub years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationOutput {
    /// Amount needed after `years` for today's purchasing power
    pub future_value: f64,
    /// Today's money equivalent of `current_value` received after `years`
    pub present_value: f64,
    /// Percent of purchasing power kept
    pub purchasing_power: f64,
    pub schedule: Vec<ErosionEntry>,
}

impl InflationRequest {
    pub fn run(&self) -> InflationOutput {
        let years = self.years as f64;
        InflationOutput {
            future_value: future_value_with_inflation(self.current_value, self.inflation_rate, years),
            present_value: present_value_with_inflation(self.current_value, self.inflation_rate, years),
            purchasing_power: purchasing_power(self.inflation_rate, years),
            schedule: erosion_schedule(self.current_value, self.inflation_rate, self.years),
        }
    }
}

/// Nominal vs. real growth of an investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealReturnRequest {
    #[serde(default = "default_real_initial")]
    pub initial_amount: f64,

    #[serde(default = "default_real_contribution")]
    pub monthly_contribution: f64,

    /// Annual nominal return, percent
    #[serde(default = "default_nominal")]
    pub nominal_return: f64,

    /// Annual inflation, percent
    #[serde(default = "default_inflation")]
    pub inflation_rate: f64,

    #[serde(default = "default_ten")]
    pub years: u32,
}

impl RealReturnRequest {
    pub fn run(&self) -> Result<RealReturnResult> {
        project_real_return(
            self.initial_amount,
            self.monthly_contribution,
            self.nominal_return,
            self.inflation_rate,
            self.years,
        )
    }
}

/// Growth comparison across investments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    #[serde(default = "default_real_initial")]
    pub initial_amount: f64,

    #[serde(default = "default_real_contribution")]
    pub monthly_contribution: f64,

    #[serde(default = "default_ten")]
    pub years: u32,

    #[serde(default = "default_investments")]
    pub investments: Vec<Investment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub years: u32,
    pub series: Vec<ComparisonSeries>,
}

impl ComparisonRequest {
    pub fn run(&self) -> Result<ComparisonOutput> {
        let series = compare_investments(
            &self.investments,
            self.initial_amount,
            self.monthly_contribution,
            self.years,
        )?;
        Ok(ComparisonOutput {
            years: self.years,
            series,
        })
    }
}

/// Lump sums grown at fixed monthly returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReturnRequest {
    #[serde(default = "default_growth_months")]
    pub months: u32,

    #[serde(default = "default_fixed_return_investments")]
    pub investments: Vec<FixedReturnInvestment>,
}

impl Default for InvestmentReturnRequest {
    fn default() -> Self {
        Self {
            months: default_growth_months(),
            investments: default_fixed_return_investments(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentReturnOutput {
    pub months: u32,
    pub curves: Vec<GrowthCurve>,
}

impl InvestmentReturnRequest {
    pub fn run(&self) -> Result<InvestmentReturnOutput> {
        Ok(InvestmentReturnOutput {
            months: self.months,
            curves: project_fixed_returns(&self.investments, self.months)?,
        })
    }
}

/// Any calculation, tagged by `"calculation"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculation", rename_all = "snake_case")]
pub enum CalculationRequest {
    CompoundInterest(CompoundInterestRequest),
    SimpleInterest(SimpleInterestRequest),
    RateConversion(RateConversionRequest),
    Loan(LoanRequest),
    Inflation(InflationRequest),
    RealReturn(RealReturnRequest),
    Comparison(ComparisonRequest),
    InvestmentReturn(InvestmentReturnRequest),
}

/// Result of a [`CalculationRequest`], tagged the same way
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculation", rename_all = "snake_case")]
pub enum CalculationOutput {
    CompoundInterest(CompoundInterestResult),
    SimpleInterest(SimpleInterestResult),
    RateConversion(RateTable),
    Loan(LoanSchedule),
    Inflation(InflationOutput),
    RealReturn(RealReturnResult),
    Comparison(ComparisonOutput),
    InvestmentReturn(InvestmentReturnOutput),
}

impl CalculationRequest {
    /// Parse a request from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn run(&self) -> Result<CalculationOutput> {
        let output = match self {
            CalculationRequest::CompoundInterest(req) => CalculationOutput::CompoundInterest(req.run()?),
            CalculationRequest::SimpleInterest(req) => CalculationOutput::SimpleInterest(req.run()),
            CalculationRequest::RateConversion(req) => CalculationOutput::RateConversion(req.run()),
            CalculationRequest::Loan(req) => CalculationOutput::Loan(req.run()?),
            CalculationRequest::Inflation(req) => CalculationOutput::Inflation(req.run()),
            CalculationRequest::RealReturn(req) => CalculationOutput::RealReturn(req.run()?),
            CalculationRequest::Comparison(req) => CalculationOutput::Comparison(req.run()?),
            CalculationRequest::InvestmentReturn(req) => CalculationOutput::InvestmentReturn(req.run()?),
        };
        Ok(output)
    }
}
