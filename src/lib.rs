//! Capital Calc - financial calculation engine for personal investment and credit
//!
//! This library provides:
//! - Interest-rate conversion between daily, monthly and yearly bases
//! - Compound growth with monthly contributions and a monthly timeline
//! - Simple interest
//! - Loan amortization schedules (SAC and Price)
//! - Inflation adjustment and real-return projection
//! - Parallel comparison of investment options, loadable from CSV

pub mod error;
pub mod rates;
pub mod projection;
pub mod interest;
pub mod loans;
pub mod inflation;
pub mod comparison;
pub mod request;
pub mod config;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use rates::{convert_rate, yearly_to_monthly, ConversionMethod, RatePeriod, RateTable};
pub use projection::{project_compound_interest, project_real_return, CompoundInterestResult, RealReturnResult, TimelineEntry};
pub use interest::{simple_interest, SimpleInterestResult};
pub use loans::{amortize, amortize_price, amortize_sac, AmortizationSystem, LoanPayment, LoanSchedule};
pub use inflation::{future_value_with_inflation, present_value_with_inflation};
pub use comparison::{compare_investments, ComparisonSeries, Investment};
pub use request::{CalculationOutput, CalculationRequest};
pub use config::Settings;
