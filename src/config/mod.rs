//! Configuration loading and management

use crate::core::catalog::{MaterialCatalogEntry, default_catalog};
use crate::core::error::ConfigError;
use crate::core::order::PricingMode;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-unit prices of the add-ons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AddOnRates {
    /// Price per drilled hole
    pub drill_hole: f64,

    /// Price per hinge
    pub hinge: f64,
}

impl Default for AddOnRates {
    fn default() -> Self {
        Self {
            drill_hole: 5.0,
            hinge: 1.25,
        }
    }
}

/// Numeric limits applied by the rule table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLimits {
    /// Largest accepted quantity
    pub max_quantity: u32,
}

impl Default for OrderLimits {
    fn default() -> Self {
        Self {
            max_quantity: 10_000,
        }
    }
}

/// Complete configuration for an order form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFormConfig {
    /// Pricing mode, which also selects the rule table
    #[serde(default)]
    pub mode: PricingMode,

    #[serde(default)]
    pub rates: AddOnRates,

    #[serde(default)]
    pub limits: OrderLimits,

    /// Materials offered in catalog mode
    #[serde(default)]
    pub catalog: Vec<MaterialCatalogEntry>,
}

impl OrderFormConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string(),
                }
            } else {
                ConfigError::IoError {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path, mode = ?config.mode, materials = config.catalog.len(), "Loaded order form config");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot check
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (field, rate) in [
            ("rates.drill_hole", self.rates.drill_hole),
            ("rates.hinge", self.rates.hinge),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: rate.to_string(),
                    message: "rate must be a finite, non-negative number".to_string(),
                });
            }
        }

        if self.limits.max_quantity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "limits.max_quantity".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.catalog {
            if !seen.insert(entry.color.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "catalog.color".to_string(),
                    value: entry.color.clone(),
                    message: "duplicate material color".to_string(),
                });
            }
            if entry.unit_price().is_none_or(|p| p <= 0.0) {
                return Err(ConfigError::InvalidValue {
                    field: format!("catalog[{}].price", entry.id),
                    value: entry.price.clone(),
                    message: "price must be a positive decimal".to_string(),
                });
            }
        }

        if self.mode == PricingMode::Catalog && self.catalog.is_empty() {
            return Err(ConfigError::MissingField {
                field: "catalog".to_string(),
                context: "catalog pricing mode".to_string(),
            });
        }

        Ok(())
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            mode: PricingMode::Catalog,
            rates: AddOnRates::default(),
            limits: OrderLimits::default(),
            catalog: default_catalog(),
        }
    }

    /// Default configuration switched to unit pricing
    pub fn unit_config() -> Self {
        Self {
            mode: PricingMode::Unit,
            ..Self::default_config()
        }
    }
}

impl Default for OrderFormConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
