//! Interest-rate bases and conversions

mod period;
mod conversion;

pub use period::{ConversionMethod, RatePeriod, DAYS_PER_MONTH, DAYS_PER_YEAR, MONTHS_PER_YEAR};
pub use conversion::{convert_rate, yearly_to_monthly, RateTable};
