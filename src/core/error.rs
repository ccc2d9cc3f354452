//! Typed error handling for the order engine
//!
//! Validation and submission problems are data: they are returned from the
//! engine, never raised as panics, so a caller can render every problem next
//! to the field it belongs to.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: a single field violation, or the aggregate of every
//!   violation found in a record at submit time
//! - [`ConfigError`]: errors loading or checking an [`OrderFormConfig`](crate::config::OrderFormConfig)
//! - [`SubmissionError`]: the gate was closed or the external handler failed
//!
//! # Example
//!
//! ```rust,ignore
//! match form.submit(&handler).await {
//!     Ok(ack) => println!("Submitted {}", ack.submission_id),
//!     Err(OrderError::Validation(ValidationError::FieldErrors(errors))) => {
//!         for e in errors {
//!             println!("{}: {}", e.field, e.message);
//!         }
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The main error type for the order engine
#[derive(Debug)]
pub enum OrderError {
    /// Field or record validation errors
    Validation(ValidationError),

    /// Configuration errors
    Config(ConfigError),

    /// Submission errors
    Submission(SubmissionError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::Validation(e) => write!(f, "{}", e),
            OrderError::Config(e) => write!(f, "{}", e),
            OrderError::Submission(e) => write!(f, "{}", e),
            OrderError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for OrderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrderError::Validation(e) => Some(e),
            OrderError::Config(e) => Some(e),
            OrderError::Submission(e) => Some(e),
            OrderError::Internal(_) => None,
        }
    }
}

/// Serializable error payload handed to whatever renders the form
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl OrderError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::Validation(e) => e.error_code(),
            OrderError::Config(_) => "CONFIG_ERROR",
            OrderError::Submission(e) => e.error_code(),
            OrderError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Field errors carried by this error, if any
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            OrderError::Validation(ValidationError::FieldErrors(errors)) => errors,
            OrderError::Validation(ValidationError::FieldError(error)) => {
                std::slice::from_ref(error)
            }
            _ => &[],
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            OrderError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            OrderError::Validation(ValidationError::FieldError(error)) => {
                Some(serde_json::json!({ "fields": [error] }))
            }
            OrderError::Validation(ValidationError::UnknownField { field }) => {
                Some(serde_json::json!({ "field": field }))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A named field plus the reason it failed a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The "required" violation for an absent mandatory field
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "Required")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Single field violation (live editing)
    FieldError(FieldError),

    /// Every violation found in a record (submit)
    FieldErrors(Vec<FieldError>),

    /// The field name is not part of the order form
    UnknownField { field: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError(error) => {
                write!(
                    f,
                    "Validation error for field '{}': {}",
                    error.field, error.message
                )
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::UnknownField { field } => {
                write!(f, "Unknown order field: {}", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldError(_) => "FIELD_INVALID",
            ValidationError::FieldErrors(_) => "RECORD_INVALID",
            ValidationError::UnknownField { .. } => "UNKNOWN_FIELD",
        }
    }
}

impl From<FieldError> for ValidationError {
    fn from(err: FieldError) -> Self {
        ValidationError::FieldError(err)
    }
}

impl From<Vec<FieldError>> for ValidationError {
    fn from(errors: Vec<FieldError>) -> Self {
        ValidationError::FieldErrors(errors)
    }
}

impl From<ValidationError> for OrderError {
    fn from(err: ValidationError) -> Self {
        OrderError::Validation(err)
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Problems with an order form configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The YAML did not deserialize
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// A section the pricing mode depends on is absent or empty
    MissingField { field: String, context: String },

    /// A value deserialized but is out of range
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    FileNotFound { path: String },

    /// The file exists but could not be read
    IoError { path: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError {
                file: Some(file),
                message,
            } => write!(f, "Order form config {} is not valid YAML: {}", file, message),
            ConfigError::ParseError {
                file: None,
                message,
            } => write!(f, "Order form config is not valid YAML: {}", message),
            ConfigError::MissingField { field, context } => {
                write!(f, "Order form config needs '{}' for {}", field, context)
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => write!(f, "Order form config {} = '{}' rejected: {}", field, value, message),
            ConfigError::FileNotFound { path } => {
                write!(f, "No order form config at {}", path)
            }
            ConfigError::IoError { path, message } => {
                write!(f, "Could not read order form config {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for OrderError {
    fn from(err: ConfigError) -> Self {
        OrderError::Config(err)
    }
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors raised when handing an order to the submission handler
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionError {
    /// Submit attempted before the terms were accepted
    TermsNotAccepted,

    /// The external handler reported a failure; the form is left intact
    HandlerFailed { message: String },
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::TermsNotAccepted => {
                write!(f, "The terms and conditions must be accepted before submitting")
            }
            SubmissionError::HandlerFailed { message } => {
                write!(f, "Order submission failed: {}", message)
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

impl SubmissionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::TermsNotAccepted => "TERMS_NOT_ACCEPTED",
            SubmissionError::HandlerFailed { .. } => "SUBMISSION_FAILED",
        }
    }
}

impl From<SubmissionError> for OrderError {
    fn from(err: SubmissionError) -> Self {
        OrderError::Submission(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<anyhow::Error> for OrderError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ConfigError>() {
            Ok(config_err) => OrderError::Config(config_err),
            Err(err) => OrderError::Internal(err.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for order operations
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Tests
// =============================================================================
