//! Order records: the raw form entry and its validated counterpart

use crate::core::error::{FieldError, ValidationError};
use crate::core::field::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field names as they appear in rule tables and UI events
pub mod fields {
    pub const BARCODE: &str = "barcode";
    pub const ITEM: &str = "item";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const ADDRESS: &str = "address";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const QUANTITY: &str = "quantity";
    pub const ORIENTATION: &str = "orientation";
    pub const PRICE: &str = "price";
    pub const UNIT: &str = "unit";
    pub const DESCRIPTION: &str = "description";
    pub const DRILL_HOLES: &str = "drillHoles";
    pub const HINGES: &str = "hinges";
    pub const EXPRESS: &str = "express";
    pub const TERMS_ACCEPTED: &str = "termsAccepted";

    /// Every text-valued field, in form order
    pub const TEXT_FIELDS: [&str; 16] = [
        BARCODE,
        ITEM,
        FIRST_NAME,
        LAST_NAME,
        PHONE_NUMBER,
        ADDRESS,
        WIDTH,
        HEIGHT,
        QUANTITY,
        ORIENTATION,
        PRICE,
        UNIT,
        DESCRIPTION,
        DRILL_HOLES,
        HINGES,
        EXPRESS,
    ];
}

/// How the order is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// User-entered price per unit times quantity
    Unit,
    /// Catalog price per square metre times width x height
    #[default]
    Catalog,
}

/// Raw, possibly partial order entry
///
/// Every field holds exactly what the user typed or selected; `None` means the
/// field was never filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderInput {
    pub barcode: Option<String>,
    pub item: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub quantity: Option<String>,
    pub orientation: Option<String>,
    pub price: Option<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub drill_holes: Option<String>,
    pub hinges: Option<String>,
    pub express: Option<String>,
    pub terms_accepted: bool,
}

impl OrderInput {
    /// Example values the form is mounted with
    pub fn placeholder(mode: PricingMode) -> Self {
        let common = Self {
            first_name: Some("First name".to_string()),
            last_name: Some("Last name".to_string()),
            phone_number: Some("+359123123123".to_string()),
            address: Some("123 Str. Unknown".to_string()),
            description: Some("description".to_string()),
            drill_holes: Some(String::new()),
            hinges: Some(String::new()),
            express: Some("false".to_string()),
            ..Self::default()
        };

        match mode {
            PricingMode::Unit => Self {
                barcode: Some("12345678".to_string()),
                quantity: Some("1".to_string()),
                price: Some("1".to_string()),
                unit: Some("m".to_string()),
                ..common
            },
            PricingMode::Catalog => Self {
                width: Some(String::new()),
                height: Some(String::new()),
                quantity: Some("1".to_string()),
                ..common
            },
        }
    }

    fn slot(&self, name: &str) -> Option<&Option<String>> {
        Some(match name {
            fields::BARCODE => &self.barcode,
            fields::ITEM => &self.item,
            fields::FIRST_NAME => &self.first_name,
            fields::LAST_NAME => &self.last_name,
            fields::PHONE_NUMBER => &self.phone_number,
            fields::ADDRESS => &self.address,
            fields::WIDTH => &self.width,
            fields::HEIGHT => &self.height,
            fields::QUANTITY => &self.quantity,
            fields::ORIENTATION => &self.orientation,
            fields::PRICE => &self.price,
            fields::UNIT => &self.unit,
            fields::DESCRIPTION => &self.description,
            fields::DRILL_HOLES => &self.drill_holes,
            fields::HINGES => &self.hinges,
            fields::EXPRESS => &self.express,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        Some(match name {
            fields::BARCODE => &mut self.barcode,
            fields::ITEM => &mut self.item,
            fields::FIRST_NAME => &mut self.first_name,
            fields::LAST_NAME => &mut self.last_name,
            fields::PHONE_NUMBER => &mut self.phone_number,
            fields::ADDRESS => &mut self.address,
            fields::WIDTH => &mut self.width,
            fields::HEIGHT => &mut self.height,
            fields::QUANTITY => &mut self.quantity,
            fields::ORIENTATION => &mut self.orientation,
            fields::PRICE => &mut self.price,
            fields::UNIT => &mut self.unit,
            fields::DESCRIPTION => &mut self.description,
            fields::DRILL_HOLES => &mut self.drill_holes,
            fields::HINGES => &mut self.hinges,
            fields::EXPRESS => &mut self.express,
            _ => return None,
        })
    }

    /// Read a field by name as a raw value
    pub fn get(&self, name: &str) -> Result<FieldValue, ValidationError> {
        if name == fields::TERMS_ACCEPTED {
            return Ok(FieldValue::Boolean(self.terms_accepted));
        }
        self.slot(name)
            .map(|raw| FieldValue::from(raw.clone()))
            .ok_or_else(|| ValidationError::UnknownField {
                field: name.to_string(),
            })
    }

    /// Read a text field, treating an absent value as the empty string
    pub fn text(&self, name: &str) -> &str {
        self.slot(name)
            .and_then(|raw| raw.as_deref())
            .unwrap_or_default()
    }

    /// Store a raw value by name
    ///
    /// `FieldValue::Null` clears the field. Numbers are stored in their text
    /// form, since that is what a text input would hold.
    pub fn set(&mut self, name: &str, raw: FieldValue) -> Result<(), ValidationError> {
        if name == fields::TERMS_ACCEPTED {
            self.terms_accepted = raw
                .as_bool()
                .unwrap_or_else(|| raw.as_string() == Some("true"));
            return Ok(());
        }
        let slot = self
            .slot_mut(name)
            .ok_or_else(|| ValidationError::UnknownField {
                field: name.to_string(),
            })?;
        *slot = match raw {
            FieldValue::Null => None,
            FieldValue::String(s) => Some(s),
            other => Some(other.to_string()),
        };
        Ok(())
    }
}

/// Measurement unit in the unit-priced mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "m")]
    Metre,
    #[serde(rename = "m2")]
    SquareMetre,
    #[serde(rename = "m3")]
    CubicMetre,
}

impl Unit {
    pub const VALUES: [&'static str; 3] = ["m", "m2", "m3"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Metre => "m",
            Unit::SquareMetre => "m2",
            Unit::CubicMetre => "m3",
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Unit::Metre),
            "m2" => Ok(Unit::SquareMetre),
            "m3" => Ok(Unit::CubicMetre),
            other => Err(format!("unknown unit '{}'", other)),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cut direction relative to the material grain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Lengthwise,
    Crosswise,
}

impl Orientation {
    pub const VALUES: [&'static str; 2] = ["lengthwise", "crosswise"];
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lengthwise" => Ok(Orientation::Lengthwise),
            "crosswise" => Ok(Orientation::Crosswise),
            other => Err(format!("unknown orientation '{}'", other)),
        }
    }
}

/// Regular or express handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Regular,
    Express,
}

impl OrderType {
    /// Accepted spellings: the order-type names and the boolean-as-string form
    pub const VALUES: [&'static str; 4] = ["regular", "express", "false", "true"];
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" | "false" => Ok(OrderType::Regular),
            "express" | "true" => Ok(OrderType::Express),
            other => Err(format!("unknown order type '{}'", other)),
        }
    }
}

/// An order whose every field satisfied its rules, in canonical types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedOrder {
    pub barcode: Option<u64>,
    pub item: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub quantity: Option<u32>,
    pub orientation: Option<Orientation>,
    pub price: Option<f64>,
    pub unit: Option<Unit>,
    pub description: String,
    pub drill_holes: u32,
    pub hinges: u32,
    pub express: OrderType,
}

impl ValidatedOrder {
    /// Assemble a typed order from the coerced values of a successful
    /// validation pass. Fields the rule table did not cover are `None`.
    pub fn from_values(values: &IndexMap<String, FieldValue>) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        let mut record = Record {
            values,
            errors: &mut errors,
        };

        let order = ValidatedOrder {
            barcode: record.optional_count(fields::BARCODE),
            item: record.optional_text(fields::ITEM),
            first_name: record.text(fields::FIRST_NAME),
            last_name: record.text(fields::LAST_NAME),
            phone_number: record.text(fields::PHONE_NUMBER),
            address: record.text(fields::ADDRESS),
            width: record.optional_number(fields::WIDTH),
            height: record.optional_number(fields::HEIGHT),
            quantity: record.optional_count(fields::QUANTITY),
            orientation: record.optional_parsed(fields::ORIENTATION),
            price: record.optional_number(fields::PRICE),
            unit: record.optional_parsed(fields::UNIT),
            description: record.text(fields::DESCRIPTION),
            drill_holes: record.count(fields::DRILL_HOLES),
            hinges: record.count(fields::HINGES),
            express: record
                .optional_parsed(fields::EXPRESS)
                .unwrap_or_default(),
        };

        if errors.is_empty() {
            Ok(order)
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }
}

/// Typed reads over a value map, recording a FieldError per bad read
struct Record<'a> {
    values: &'a IndexMap<String, FieldValue>,
    errors: &'a mut Vec<FieldError>,
}

impl<'a> Record<'a> {
    fn present(&self, name: &str) -> Option<&'a FieldValue> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    fn text(&mut self, name: &str) -> String {
        self.optional_text(name).unwrap_or_else(|| {
            self.errors.push(FieldError::required(name));
            String::new()
        })
    }

    fn optional_text(&mut self, name: &str) -> Option<String> {
        let value = self.present(name)?;
        match value.as_string() {
            Some(s) => Some(s.to_string()),
            None => {
                self.errors.push(FieldError::new(
                    name,
                    format!("Expected string, received {}", value.type_name()),
                ));
                None
            }
        }
    }

    fn optional_number(&mut self, name: &str) -> Option<f64> {
        let value = self.present(name)?;
        let number = value.as_float();
        if number.is_none() {
            self.errors.push(FieldError::new(
                name,
                format!("Expected number, received {}", value.type_name()),
            ));
        }
        number
    }

    fn optional_count<T: TryFrom<i64>>(&mut self, name: &str) -> Option<T> {
        let value = self.present(name)?;
        match value.as_integer().and_then(|i| T::try_from(i).ok()) {
            Some(count) => Some(count),
            None => {
                self.errors.push(FieldError::new(
                    name,
                    format!("Expected a non-negative integer, received {}", value),
                ));
                None
            }
        }
    }

    fn count(&mut self, name: &str) -> u32 {
        if self.present(name).is_none() {
            self.errors.push(FieldError::required(name));
            return 0;
        }
        self.optional_count(name).unwrap_or_default()
    }

    fn optional_parsed<T: FromStr<Err = String>>(&mut self, name: &str) -> Option<T> {
        let text = self.optional_text(name)?;
        match text.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                self.errors.push(FieldError::new(name, message));
                None
            }
        }
    }
}
