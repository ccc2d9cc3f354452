//! Validation system
//!
//! Rule tables are declared as data ([`OrderSchema`]) and evaluated by a
//! single generic routine, independent of whatever renders the form.

pub mod schema;
pub mod validators;

pub use schema::{Check, FieldKind, FieldRules, OrderSchema};
