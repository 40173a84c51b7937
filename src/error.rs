//! Error types for the lhp-ensemble library.

use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, LhpError>;

/// Errors that can occur while encoding, evaluating or loading model data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LhpError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Dimension mismatch between paired inputs.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Name does not match any of the six trained models.
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Categorical feature value has no encoding.
    #[error("unknown value {value:?} for feature {feature}")]
    UnknownCategory { feature: String, value: String },

    /// Input could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Filesystem error.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for LhpError {
    fn from(err: std::io::Error) -> Self {
        LhpError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LhpError {
    fn from(err: serde_json::Error) -> Self {
        LhpError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = LhpError::EmptyData;
        assert_eq!(err.to_string(), "empty input data");

        let err = LhpError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 2");

        let err = LhpError::UnknownModel("xgboost".to_string());
        assert_eq!(err.to_string(), "unknown model: xgboost");

        let err = LhpError::UnknownCategory {
            feature: "Condition".to_string(),
            value: "Ruined".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown value \"Ruined\" for feature Condition"
        );
    }

    #[test]
    fn io_and_json_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        assert!(matches!(LhpError::from(io), LhpError::Io(msg) if msg.contains("missing.json")));

        let json = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(LhpError::from(json), LhpError::Parse(_)));
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = LhpError::EmptyData;
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
