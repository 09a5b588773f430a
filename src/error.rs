//! Error type shared by the calculation routines and the loaders

use thiserror::Error;

/// Errors surfaced by the engine instead of propagating NaN/Infinity
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Non-finite value for {field}")]
    NonFinite { field: String },

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CalcError>;

impl CalcError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinite inputs
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::NonFinite {
            field: field.to_string(),
        })
    }
}

/// Reject negative (or non-finite) inputs
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid(field, "must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("rate", 1.0).is_ok());
        assert!(matches!(
            ensure_finite("rate", f64::NAN),
            Err(CalcError::NonFinite { .. })
        ));
        assert!(ensure_finite("rate", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("principal", 0.0).is_ok());
        let err = ensure_non_negative("principal", -1.0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input for principal: must not be negative");
    }
}
