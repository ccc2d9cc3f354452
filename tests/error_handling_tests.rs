//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors carry the correct codes
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Error matching allows callers to handle specific cases

use brico::prelude::*;

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_single_field_error_code() {
        let err = OrderError::from(ValidationError::from(FieldError::new(
            "firstName",
            "String must contain at least 2 character(s)",
        )));
        assert_eq!(err.error_code(), "FIELD_INVALID");
    }

    #[test]
    fn test_record_error_code() {
        let err = OrderError::from(ValidationError::from(vec![
            FieldError::required("firstName"),
            FieldError::required("address"),
        ]));
        assert_eq!(err.error_code(), "RECORD_INVALID");
    }

    #[test]
    fn test_unknown_field_code() {
        let err = OrderError::from(ValidationError::UnknownField {
            field: "colour".to_string(),
        });
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_submission_codes() {
        assert_eq!(
            OrderError::from(SubmissionError::TermsNotAccepted).error_code(),
            "TERMS_NOT_ACCEPTED"
        );
        assert_eq!(
            OrderError::from(SubmissionError::HandlerFailed {
                message: "timeout".to_string()
            })
            .error_code(),
            "SUBMISSION_FAILED"
        );
    }

    #[test]
    fn test_internal_error_code() {
        let err = OrderError::Internal("lock poisoned".to_string());
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}

// =============================================================================
// Error Response Tests
// =============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_record_response_lists_fields() {
        let err = OrderError::from(ValidationError::from(vec![
            FieldError::new("firstName", "String must contain at least 2 character(s)"),
            FieldError::new("phoneNumber", "Invalid Number!"),
        ]));

        let response = err.to_response();
        assert_eq!(response.code, "RECORD_INVALID");

        let details = response.details.unwrap();
        assert_eq!(details["fields"][1]["field"], "phoneNumber");
        assert_eq!(details["fields"][1]["message"], "Invalid Number!");
    }

    #[test]
    fn test_response_serializes() {
        let err = OrderError::from(SubmissionError::TermsNotAccepted);
        let json = serde_json::to_value(err.to_response()).unwrap();

        assert_eq!(json["code"], "TERMS_NOT_ACCEPTED");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_display_messages() {
        let err = ValidationError::from(FieldError::new("unit", "Invalid enum value"));
        assert_eq!(
            err.to_string(),
            "Validation error for field 'unit': Invalid enum value"
        );

        let err = ConfigError::FileNotFound {
            path: "order-form.yaml".to_string(),
        };
        assert_eq!(err.to_string(), "No order form config at order-form.yaml");
    }
}

// =============================================================================
// Conversion Tests
// =============================================================================

mod conversion_tests {
    use super::*;

    #[test]
    fn test_unreadable_config_becomes_config_error() {
        let err = anyhow::Error::from(ConfigError::IoError {
            path: "order-form.yaml".to_string(),
            message: "permission denied".to_string(),
        });
        let err = OrderError::from(err);

        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(
            err.to_string(),
            "Could not read order form config order-form.yaml: permission denied"
        );
    }

    #[test]
    fn test_anyhow_config_error_is_recovered() {
        let err = anyhow::Error::from(ConfigError::MissingField {
            field: "catalog".to_string(),
            context: "catalog pricing mode".to_string(),
        });
        assert!(matches!(
            OrderError::from(err),
            OrderError::Config(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_other_anyhow_error_is_internal() {
        let err = anyhow::anyhow!("something else");
        assert!(matches!(OrderError::from(err), OrderError::Internal(_)));
    }

    #[test]
    fn test_field_errors_accessor() {
        let single = OrderError::from(ValidationError::from(FieldError::required("item")));
        assert_eq!(single.field_errors().len(), 1);

        let other = OrderError::from(SubmissionError::TermsNotAccepted);
        assert!(other.field_errors().is_empty());
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod matching_tests {
    use super::*;

    fn describe(err: &OrderError) -> String {
        match err {
            OrderError::Validation(ValidationError::FieldErrors(errors)) => {
                format!("{} field(s) to fix", errors.len())
            }
            OrderError::Submission(SubmissionError::TermsNotAccepted) => {
                "accept the terms first".to_string()
            }
            _ => "try again later".to_string(),
        }
    }

    #[test]
    fn test_callers_can_branch_on_variants() {
        let err = OrderError::from(ValidationError::from(vec![FieldError::required("width")]));
        assert_eq!(describe(&err), "1 field(s) to fix");

        let err = OrderError::from(SubmissionError::TermsNotAccepted);
        assert_eq!(describe(&err), "accept the terms first");
    }
}
