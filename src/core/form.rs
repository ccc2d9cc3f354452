//! Order form session
//!
//! [`OrderForm`] owns the entry being edited and is the only thing allowed to
//! write to it. Each UI event is one method call: an edit, a terms toggle, or
//! a submit. Validation and pricing run synchronously inside the call.

use crate::config::OrderFormConfig;
use crate::core::error::{FieldError, OrderError, SubmissionError, ValidationError};
use crate::core::field::FieldValue;
use crate::core::gate::SubmitGate;
use crate::core::order::{OrderInput, ValidatedOrder, fields};
use crate::core::pricing::{PriceBreakdown, quote};
use crate::core::submission::{Acknowledgement, Submission, SubmissionHandler};
use crate::core::validation::OrderSchema;
use indexmap::IndexMap;
use serde::Serialize;

/// What a field component shows after an edit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFeedback {
    pub field: String,

    /// Coerced value when valid, the raw value otherwise
    pub value: FieldValue,

    pub error: Option<FieldError>,
}

/// One user's order form
#[derive(Debug)]
pub struct OrderForm {
    config: OrderFormConfig,
    schema: OrderSchema,
    input: OrderInput,
    gate: SubmitGate,
    errors: IndexMap<String, FieldError>,
}

impl OrderForm {
    /// Mount a form with the placeholder values for the configured mode
    pub fn new(config: OrderFormConfig) -> Self {
        let schema = OrderSchema::for_config(&config);
        Self::with_schema(config, schema)
    }

    /// Mount a form with a hand-built rule table
    pub fn with_schema(config: OrderFormConfig, schema: OrderSchema) -> Self {
        Self {
            input: OrderInput::placeholder(config.mode),
            config,
            schema,
            gate: SubmitGate::default(),
            errors: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &OrderFormConfig {
        &self.config
    }

    pub fn schema(&self) -> &OrderSchema {
        &self.schema
    }

    pub fn input(&self) -> &OrderInput {
        &self.input
    }

    pub fn gate(&self) -> SubmitGate {
        self.gate
    }

    /// Current inline errors, in the order they were raised
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    /// Inline error for one field
    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Store a raw value and revalidate that field
    ///
    /// The stored text is what gets judged, so an edit and a later submit
    /// always agree on the same field.
    pub fn edit(
        &mut self,
        field: &str,
        raw: impl Into<FieldValue>,
    ) -> Result<FieldFeedback, ValidationError> {
        self.input.set(field, raw.into())?;

        if field == fields::TERMS_ACCEPTED {
            let accepted = self.input.terms_accepted;
            self.set_terms(accepted);
            return Ok(FieldFeedback {
                field: field.to_string(),
                value: FieldValue::Boolean(accepted),
                error: None,
            });
        }

        let stored = self.input.get(field)?;

        if self.schema.rules(field).is_none() {
            // not part of this mode's rule table; stored but never judged
            self.errors.shift_remove(field);
            return Ok(FieldFeedback {
                field: field.to_string(),
                value: stored,
                error: None,
            });
        }

        let feedback = match self.schema.validate_field(field, &stored) {
            Ok(value) => {
                self.errors.shift_remove(field);
                FieldFeedback {
                    field: field.to_string(),
                    value,
                    error: None,
                }
            }
            Err(error) => {
                self.errors.insert(field.to_string(), error.clone());
                FieldFeedback {
                    field: field.to_string(),
                    value: stored,
                    error: Some(error),
                }
            }
        };

        tracing::debug!(
            field,
            valid = feedback.error.is_none(),
            "Order field edited"
        );
        Ok(feedback)
    }

    /// Flip the terms checkbox
    pub fn toggle_terms(&mut self) -> SubmitGate {
        let next = self.gate.toggle();
        self.set_terms(next.is_open())
    }

    /// Set the terms checkbox
    pub fn set_terms(&mut self, accepted: bool) -> SubmitGate {
        self.input.terms_accepted = accepted;
        self.gate = SubmitGate::from(accepted);
        self.gate
    }

    /// Derived amounts for the current entry
    pub fn quote(&self) -> PriceBreakdown {
        quote(&self.input, &self.config)
    }

    /// Validate the whole entry without touching the inline errors
    pub fn validate(&self) -> Result<ValidatedOrder, Vec<FieldError>> {
        self.schema.validate_record(&self.input)
    }

    /// The submit control is reachable
    pub fn can_submit(&self) -> bool {
        self.gate.is_open() && self.validate().is_ok()
    }

    /// Validate and hand the order to `handler`
    ///
    /// On success the form is reset to its placeholder values. On any error
    /// the entry is kept; a validation failure replaces the inline errors with
    /// every current violation.
    pub async fn submit(
        &mut self,
        handler: &dyn SubmissionHandler,
    ) -> Result<Acknowledgement, OrderError> {
        if !self.gate.is_open() {
            tracing::warn!("Order submit attempted before terms were accepted");
            return Err(SubmissionError::TermsNotAccepted.into());
        }

        let order = match self.validate() {
            Ok(order) => order,
            Err(errors) => {
                tracing::warn!(violations = errors.len(), "Order rejected by validation");
                self.errors = errors
                    .iter()
                    .map(|e| (e.field.clone(), e.clone()))
                    .collect();
                return Err(ValidationError::FieldErrors(errors).into());
            }
        };

        let submission = Submission::new(order);
        let submission_id = submission.id;

        match handler.submit(submission).await {
            Ok(ack) => {
                tracing::info!(%submission_id, "Order accepted by submission handler");
                self.reset();
                Ok(ack)
            }
            Err(e) => {
                tracing::warn!(%submission_id, error = %e, "Order submission failed");
                Err(SubmissionError::HandlerFailed {
                    message: e.to_string(),
                }
                .into())
            }
        }
    }

    /// Back to the mounted state
    pub fn reset(&mut self) {
        self.input = OrderInput::placeholder(self.config.mode);
        self.gate = SubmitGate::default();
        self.errors.clear();
    }
}
