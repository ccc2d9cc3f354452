//! # Brico Orders
//!
//! Validation and live pricing for cut-to-size fabrication orders.
//!
//! ## Features
//!
//! - **Declarative Rule Tables**: field name → ordered checks, evaluated by one generic routine
//! - **Error Accumulation**: record validation reports every violated field at once
//! - **Live Pricing**: area, unit price, add-on and total recomputed from raw input, never panicking
//! - **Two Pricing Modes**: user-entered price per unit, or catalog price per square metre
//! - **Configuration-Based**: rates, limits and the materials catalog come from YAML
//! - **Pluggable Submission**: hand validated orders to any async `SubmissionHandler`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use brico::prelude::*;
//!
//! let mut form = OrderForm::new(OrderFormConfig::default_config());
//!
//! form.edit("item", "oak")?;
//! form.edit("width", "1.2")?;
//! form.edit("height", "0.6")?;
//! form.edit("drillHoles", "4")?;
//! println!("Total: {}", form.quote().total_display());
//!
//! form.toggle_terms();
//! let ack = form.submit(&LoggingSubmissionHandler).await?;
//! ```

pub mod config;
pub mod core;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Order model ===
    pub use crate::core::{
        field::{FieldFormat, FieldValue},
        order::{
            OrderInput, OrderType, Orientation, PricingMode, Unit, ValidatedOrder, fields,
        },
    };

    // === Validation ===
    pub use crate::core::validation::{FieldKind, FieldRules, OrderSchema, validators};

    // === Pricing ===
    pub use crate::core::catalog::{MaterialCatalogEntry, lookup_unit_price};
    pub use crate::core::pricing::{
        PLACEHOLDER, PriceBreakdown, compute_add_on_cost, compute_area, compute_total,
        format_amount, quote,
    };

    // === Form session ===
    pub use crate::core::{
        auth_view::{AuthMode, AuthView},
        form::{FieldFeedback, OrderForm},
        gate::SubmitGate,
        submission::{
            Acknowledgement, LoggingSubmissionHandler, RecordingSubmissionHandler, Submission,
            SubmissionHandler,
        },
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, ErrorResponse, FieldError, OrderError, OrderResult, SubmissionError,
        ValidationError,
    };

    // === Config ===
    pub use crate::config::{AddOnRates, OrderFormConfig, OrderLimits};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}
