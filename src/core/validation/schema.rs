//! Declarative rule tables for the order form
//!
//! An [`OrderSchema`] maps each field name to a [`FieldRules`]: a coercion
//! kind, an optional flag, and an ordered list of checks. One generic routine
//! evaluates any table, so the same code validates a single field during live
//! editing and the whole record at submit.

use super::validators;
use crate::config::OrderFormConfig;
use crate::core::catalog::colors;
use crate::core::error::{FieldError, ValidationError};
use crate::core::field::{FieldFormat, FieldValue};
use crate::core::numeric::{parse_int_prefix, parse_number};
use crate::core::order::{
    OrderInput, OrderType, Orientation, PricingMode, Unit, ValidatedOrder, fields,
};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A single check: field name and coerced value in, violation message out
pub type Check = Arc<dyn Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync>;

/// How a raw value is turned into its canonical type before checks run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Kept as a string
    Text,
    /// Leading integer of the text (`"3x"` is 3)
    Integer,
    /// Whole text as a decimal number
    Number,
    /// `true`/`false`, from a checkbox or its string form
    Flag,
}

impl FieldKind {
    /// Coerce a raw value, or explain why it cannot be coerced
    pub fn coerce(&self, raw: &FieldValue) -> Result<FieldValue, String> {
        match (self, raw) {
            (FieldKind::Text, FieldValue::String(_)) => Ok(raw.clone()),

            (FieldKind::Integer, FieldValue::String(s)) => parse_int_prefix(s)
                .map(FieldValue::Integer)
                .ok_or_else(|| "Expected number, received a string".to_string()),
            (FieldKind::Integer, FieldValue::Integer(_)) => Ok(raw.clone()),
            (FieldKind::Integer, FieldValue::Float(f)) if f.fract() == 0.0 => {
                Ok(FieldValue::Integer(*f as i64))
            }

            (FieldKind::Number, FieldValue::String(s)) => parse_number(s)
                .map(FieldValue::Float)
                .ok_or_else(|| "Expected number, received a string".to_string()),
            (FieldKind::Number, FieldValue::Integer(i)) => Ok(FieldValue::Float(*i as f64)),
            (FieldKind::Number, FieldValue::Float(_)) => Ok(raw.clone()),

            (FieldKind::Flag, FieldValue::Boolean(_)) => Ok(raw.clone()),
            (FieldKind::Flag, FieldValue::String(s)) if s == "true" || s == "false" => {
                Ok(FieldValue::Boolean(s == "true"))
            }

            (kind, other) => Err(format!(
                "Expected {}, received {}",
                kind.expected(),
                other.type_name()
            )),
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
            FieldKind::Flag => "boolean",
        }
    }
}

/// Rules for one field
#[derive(Clone)]
pub struct FieldRules {
    kind: FieldKind,
    optional: bool,
    checks: Vec<Check>,
}

impl FieldRules {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            optional: false,
            checks: Vec::new(),
        }
    }

    pub fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    pub fn integer() -> Self {
        Self::new(FieldKind::Integer)
    }

    pub fn number() -> Self {
        Self::new(FieldKind::Number)
    }

    pub fn flag() -> Self {
        Self::new(FieldKind::Flag)
    }

    /// Skip the field entirely when it is absent
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Append a check; checks run in the order they were added
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + 'static,
    {
        self.checks.push(Arc::new(check));
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Evaluate these rules against a raw value.
    ///
    /// `Ok(FieldValue::Null)` means an optional field was absent.
    pub fn apply(&self, name: &str, raw: &FieldValue) -> Result<FieldValue, FieldError> {
        if raw.is_null() {
            return if self.optional {
                Ok(FieldValue::Null)
            } else {
                Err(FieldError::required(name))
            };
        }

        let value = self
            .kind
            .coerce(raw)
            .map_err(|message| FieldError::new(name, message))?;

        for check in &self.checks {
            check(name, &value).map_err(|message| FieldError::new(name, message))?;
        }

        Ok(value)
    }
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("kind", &self.kind)
            .field("optional", &self.optional)
            .field("checks", &self.checks.len())
            .finish()
    }
}

/// Ordered rule table: field name to rules
#[derive(Debug, Clone, Default)]
pub struct OrderSchema {
    fields: IndexMap<String, FieldRules>,
}

impl OrderSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rules for a field
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    /// Rules for a field, if the schema declares it
    pub fn rules(&self, name: &str) -> Option<&FieldRules> {
        self.fields.get(name)
    }

    /// Declared field names, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The canonical order rule table for the configured pricing mode
    pub fn for_config(config: &OrderFormConfig) -> Self {
        let schema = Self::new();
        let schema = match config.mode {
            PricingMode::Unit => schema.field(
                fields::BARCODE,
                FieldRules::integer().check(validators::positive()),
            ),
            PricingMode::Catalog => schema.field(
                fields::ITEM,
                FieldRules::text().check(validators::in_list(colors(&config.catalog))),
            ),
        };

        let schema = schema
            .field(
                fields::FIRST_NAME,
                FieldRules::text().check(validators::string_length(2, 50)),
            )
            .field(
                fields::LAST_NAME,
                FieldRules::text().check(validators::string_length(2, 50)),
            )
            .field(
                fields::PHONE_NUMBER,
                FieldRules::text().check(validators::pattern(FieldFormat::Phone, "Invalid Number!")),
            )
            .field(
                fields::ADDRESS,
                FieldRules::text().check(validators::string_length(5, 50)),
            );

        let quantity = FieldRules::integer()
            .check(validators::positive())
            .check(validators::max_value(config.limits.max_quantity as f64));

        let schema = match config.mode {
            PricingMode::Unit => schema
                .field(fields::QUANTITY, quantity)
                .field(
                    fields::PRICE,
                    FieldRules::number()
                        .check(validators::positive())
                        .check(validators::finite())
                        .check(validators::safe()),
                )
                .field(fields::UNIT, choice(&Unit::VALUES)),
            PricingMode::Catalog => schema
                .field(fields::WIDTH, dimension())
                .field(fields::HEIGHT, dimension())
                .field(fields::QUANTITY, quantity.optional())
                .field(fields::ORIENTATION, choice(&Orientation::VALUES).optional()),
        };

        schema
            .field(
                fields::DESCRIPTION,
                FieldRules::text().check(validators::string_length(10, 300)),
            )
            .field(fields::DRILL_HOLES, add_on_count())
            .field(fields::HINGES, add_on_count())
            .field(fields::EXPRESS, choice(&OrderType::VALUES).optional())
    }

    /// Validate one field's raw value
    pub fn validate_field(&self, name: &str, raw: &FieldValue) -> Result<FieldValue, FieldError> {
        match self.fields.get(name) {
            Some(rules) => rules.apply(name, raw),
            None => Err(FieldError::new(name, "Unknown field")),
        }
    }

    /// Validate every declared field of a value map, collecting all violations
    pub fn validate_values(
        &self,
        mut raw: impl FnMut(&str) -> FieldValue,
    ) -> Result<IndexMap<String, FieldValue>, Vec<FieldError>> {
        let mut values = IndexMap::with_capacity(self.fields.len());
        let mut errors = Vec::new();

        for (name, rules) in &self.fields {
            match rules.apply(name, &raw(name.as_str())) {
                Ok(value) => {
                    values.insert(name.clone(), value);
                }
                Err(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Ok(values)
        } else {
            Err(errors)
        }
    }

    /// Validate a whole order entry
    ///
    /// Every field is evaluated; the error list holds one entry per failing
    /// field in declaration order.
    pub fn validate_record(&self, input: &OrderInput) -> Result<ValidatedOrder, Vec<FieldError>> {
        let values = self.validate_values(|name| input.get(name).unwrap_or(FieldValue::Null))?;
        ValidatedOrder::from_values(&values).map_err(|err| match err {
            ValidationError::FieldErrors(errors) => errors,
            ValidationError::FieldError(error) => vec![error],
            ValidationError::UnknownField { field } => vec![FieldError::new(field, "Unknown field")],
        })
    }
}

fn choice(values: &[&str]) -> FieldRules {
    FieldRules::text().check(validators::in_list(
        values.iter().map(|v| v.to_string()).collect(),
    ))
}

fn dimension() -> FieldRules {
    FieldRules::number()
        .check(validators::positive())
        .check(validators::finite())
}

/// Counts are stored as `u32`
fn add_on_count() -> FieldRules {
    FieldRules::integer()
        .check(validators::non_negative())
        .check(validators::max_value(u32::MAX as f64))
}
