use thiserror::Error;

/// Every calculator failure. The `Display` text is exactly what the user sees.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Error: Second number is required for this operation.")]
    MissingOperand,

    #[error("Invalid Operation!")]
    InvalidOperation { name: String },

    #[error("Error: Division by zero!")]
    DivisionByZero,

    #[error("Error: Modulus by zero!")]
    ModulusByZero,

    #[error("Error: 0.0 cannot be raised to a negative power")]
    ZeroToNegativePower,

    #[error("Error: Invalid values!")]
    InvalidLogValues,

    #[error("Error: Negative square root!")]
    NegativeSquareRoot,

    #[error("Error: Height cannot be zero")]
    ZeroHeight,

    #[error("Error: Invalid date format! Use YYYY-MM-DD.")]
    InvalidDate { input: String },

    #[error("Invalid shape")]
    InvalidShape { name: String },

    #[error("Error: Invalid units")]
    InvalidUnits { from: String, to: String },

    #[error("Error: Invalid currency code")]
    InvalidCurrency { code: String },

    #[error("Error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Input errors the user can fix by changing the form values.
    pub fn is_domain_error(&self) -> bool {
        !matches!(
            self,
            CalcError::ApiError(_)
                | CalcError::SerializationError(_)
                | CalcError::IoError(_)
                | CalcError::ConfigValidationError { .. }
                | CalcError::InvalidConfigValueError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::ApiError(_) => "Check your network connection and the rates endpoint",
            CalcError::SerializationError(_) => {
                "The rates endpoint did not return JSON; check the configured URL"
            }
            CalcError::IoError(_) => "Check that the config file exists and is readable",
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and try again"
            }
            _ => "Adjust the input values and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Error: Division by zero!");
        assert_eq!(CalcError::ModulusByZero.to_string(), "Error: Modulus by zero!");
        assert_eq!(
            CalcError::InvalidShape {
                name: "Hexagon".to_string()
            }
            .to_string(),
            "Invalid shape"
        );
        assert_eq!(
            CalcError::InvalidOperation {
                name: "Root".to_string()
            }
            .to_string(),
            "Invalid Operation!"
        );
    }

    #[test]
    fn test_domain_error_classification() {
        assert!(CalcError::NegativeSquareRoot.is_domain_error());
        assert!(CalcError::InvalidCurrency {
            code: "XYZ".to_string()
        }
        .is_domain_error());

        let io = CalcError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_domain_error());
        assert_eq!(io.to_string(), "Error: gone");
    }
}
