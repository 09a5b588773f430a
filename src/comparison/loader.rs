//! Load investment options from CSV
//!
//! Expected columns: `name,rate,rate_period,conversion_method`
//! (`conversion_method` may be left empty; it defaults to exact).

use super::Investment;
use crate::error::Result;
use crate::rates::{ConversionMethod, RatePeriod};
use csv::Reader;
use std::path::Path;

/// Raw CSV row before enum parsing
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    rate: f64,
    rate_period: String,
    #[serde(default)]
    conversion_method: Option<String>,
}

impl CsvRow {
    fn to_investment(self) -> Result<Investment> {
        let rate_period: RatePeriod = self.rate_period.parse()?;
        let conversion_method: ConversionMethod = match self.conversion_method.as_deref().map(str::trim) {
            None | Some("") => ConversionMethod::default(),
            Some(method) => method.parse()?,
        };

        Ok(Investment {
            name: self.name,
            rate: self.rate,
            rate_period,
            conversion_method,
        })
    }
}

/// Load all investments from a CSV file
pub fn load_investments<P: AsRef<Path>>(path: P) -> Result<Vec<Investment>> {
    let path = path.as_ref();
    log::info!("Loading investments from {}", path.display());
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load investments from any reader (e.g., string buffer, stdin)
pub fn load_investments_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Investment>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Investment>> {
    let mut investments = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        investments.push(row.to_investment()?);
    }

    log::debug!("Loaded {} investments", investments.len());
    Ok(investments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn test_load_investments() {
        let data = "\
name,rate,rate_period,conversion_method
Savings,0.5,monthly,
Treasury,10.5,yearly,exact
CDB,11,yearly,simple
";
        let investments = load_investments_from_reader(data.as_bytes()).unwrap();
        assert_eq!(investments.len(), 3);

        assert_eq!(investments[0].name, "Savings");
        assert_eq!(investments[0].rate_period, RatePeriod::Monthly);
        assert_eq!(investments[0].conversion_method, ConversionMethod::Exact);

        assert_eq!(investments[2].rate, 11.0);
        assert_eq!(investments[2].conversion_method, ConversionMethod::Simple);
    }

    #[test]
    fn test_unknown_period() {
        let data = "name,rate,rate_period,conversion_method\nX,1.0,weekly,exact\n";
        let err = load_investments_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CalcError::UnknownVariant { .. }));
    }

    #[test]
    fn test_bad_number() {
        let data = "name,rate,rate_period,conversion_method\nX,abc,monthly,exact\n";
        let err = load_investments_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CalcError::Csv { .. }));
    }
}
