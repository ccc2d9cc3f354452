//! Core module containing the order model, validation and pricing

pub mod auth_view;
pub mod catalog;
pub mod error;
pub mod field;
pub mod form;
pub mod gate;
pub mod numeric;
pub mod order;
pub mod pricing;
pub mod submission;
pub mod validation;

pub use auth_view::{AuthMode, AuthView};
pub use catalog::{MaterialCatalogEntry, lookup_unit_price};
pub use error::{
    ConfigError, ErrorResponse, FieldError, OrderError, OrderResult, SubmissionError,
    ValidationError,
};
pub use field::{FieldFormat, FieldValue};
pub use form::{FieldFeedback, OrderForm};
pub use gate::SubmitGate;
pub use order::{OrderInput, OrderType, Orientation, PricingMode, Unit, ValidatedOrder};
pub use pricing::{
    PriceBreakdown, compute_add_on_cost, compute_area, compute_total, format_amount, quote,
};
pub use submission::{
    Acknowledgement, LoggingSubmissionHandler, RecordingSubmissionHandler, Submission,
    SubmissionHandler,
};
pub use validation::{FieldKind, FieldRules, OrderSchema};
