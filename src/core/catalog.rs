//! Materials catalog: the static list of selectable materials and their
//! price per square metre

use crate::core::numeric::{parse_number, round2};
use serde::{Deserialize, Serialize};

/// One selectable material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCatalogEntry {
    pub id: String,

    /// Display key the form selects by
    pub color: String,

    /// Decimal price as written in the catalog source
    pub price: String,
}

impl MaterialCatalogEntry {
    pub fn new(id: impl Into<String>, color: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            price: price.into(),
        }
    }

    /// The entry's price rounded to two decimals, if it parses
    pub fn unit_price(&self) -> Option<f64> {
        parse_number(&self.price)
            .filter(|p| p.is_finite())
            .map(round2)
    }
}

/// Find the price of the entry whose color equals `selector`.
///
/// `None` when no entry matches or the matching entry's price does not parse.
pub fn lookup_unit_price(selector: &str, catalog: &[MaterialCatalogEntry]) -> Option<f64> {
    catalog
        .iter()
        .find(|entry| entry.color == selector)
        .and_then(MaterialCatalogEntry::unit_price)
}

/// Color keys in catalog order, used as the allowed values of `item`
pub fn colors(catalog: &[MaterialCatalogEntry]) -> Vec<String> {
    catalog.iter().map(|entry| entry.color.clone()).collect()
}

/// The catalog shipped with the default configuration
pub fn default_catalog() -> Vec<MaterialCatalogEntry> {
    vec![
        MaterialCatalogEntry::new("1", "white", "24.50"),
        MaterialCatalogEntry::new("2", "black", "26.90"),
        MaterialCatalogEntry::new("3", "oak", "38.00"),
        MaterialCatalogEntry::new("4", "walnut", "44.75"),
        MaterialCatalogEntry::new("5", "red", "12"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matching_color() {
        let catalog = vec![MaterialCatalogEntry::new("1", "red", "12")];
        assert_eq!(lookup_unit_price("red", &catalog), Some(12.00));
    }

    #[test]
    fn test_lookup_missing_color_is_none() {
        let catalog = vec![MaterialCatalogEntry::new("1", "red", "12")];
        assert_eq!(lookup_unit_price("purple", &catalog), None);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let catalog = vec![MaterialCatalogEntry::new("1", "red", "12")];
        assert_eq!(lookup_unit_price("Red", &catalog), None);
        assert_eq!(lookup_unit_price("red ", &catalog), None);
    }

    #[test]
    fn test_lookup_rounds_to_two_decimals() {
        let catalog = vec![MaterialCatalogEntry::new("1", "oak", "38.456")];
        assert_eq!(lookup_unit_price("oak", &catalog), Some(38.46));
    }

    #[test]
    fn test_lookup_unparsable_price_is_none() {
        let catalog = vec![MaterialCatalogEntry::new("1", "oak", "call us")];
        assert_eq!(lookup_unit_price("oak", &catalog), None);
    }

    #[test]
    fn test_lookup_empty_catalog() {
        assert_eq!(lookup_unit_price("red", &[]), None);
    }

    #[test]
    fn test_colors_preserve_order() {
        let colors = colors(&default_catalog());
        assert_eq!(colors.first().map(String::as_str), Some("white"));
        assert_eq!(colors.len(), 5);
    }
}
