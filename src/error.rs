//! Error types for the income tax calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the request validation and server startup failures of the service.
//! The calculation core itself is total and never returns an error.

use thiserror::Error;

/// The main error type for the income tax calculator.
///
/// # Example
///
/// ```
/// use income_tax_calculator::error::EngineError;
///
/// let error = EngineError::InvalidIncome { raw: Some("-5".to_string()) };
/// assert_eq!(error.to_string(), "Invalid income amount");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The `income` parameter was missing, non-numeric or not positive.
    #[error("Invalid income amount")]
    InvalidIncome {
        /// The raw parameter value, if one was supplied.
        raw: Option<String>,
    },

    /// A configuration variable held a value that could not be parsed.
    #[error("Invalid value '{value}' for configuration variable {key}")]
    InvalidConfigValue {
        /// The name of the variable.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// The server could not bind its listening socket.
    #[error("Failed to bind {addr}: {message}")]
    Bind {
        /// The address that was requested.
        addr: String,
        /// A description of the bind failure.
        message: String,
    },

    /// The server loop terminated with an error.
    #[error("Server error: {message}")]
    Server {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_income_display_omits_raw_value() {
        let error = EngineError::InvalidIncome {
            raw: Some("abc".to_string()),
        };
        assert_eq!(error.to_string(), "Invalid income amount");
    }

    #[test]
    fn test_invalid_config_value_displays_key_and_value() {
        let error = EngineError::InvalidConfigValue {
            key: "PORT".to_string(),
            value: "eighty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value 'eighty' for configuration variable PORT"
        );
    }

    #[test]
    fn test_bind_displays_addr_and_message() {
        let error = EngineError::Bind {
            addr: "0.0.0.0:5005".to_string(),
            message: "address in use".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to bind 0.0.0.0:5005: address in use");
    }

    #[test]
    fn test_server_error_displays_message() {
        let error = EngineError::Server {
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Server error: connection reset");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_income() -> EngineResult<()> {
            Err(EngineError::InvalidIncome { raw: None })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_income()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
