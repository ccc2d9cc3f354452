//! Live price calculation
//!
//! Every function here reads raw, possibly invalid field text and never
//! panics. A quantity that cannot be computed is `None`; add-on counts that do
//! not parse count as zero.

use crate::config::{AddOnRates, OrderFormConfig};
use crate::core::catalog::{MaterialCatalogEntry, lookup_unit_price};
use crate::core::numeric::{parse_int_prefix, parse_number, round2};
use crate::core::order::{OrderInput, PricingMode, fields};
use serde::Serialize;

/// Shown in place of an amount that cannot be computed yet
pub const PLACEHOLDER: &str = "—";

fn finite_number(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|n| n.is_finite())
}

/// `width * height`, rounded to two decimals.
///
/// `None` if either side is not a number or the product is zero; an area of
/// zero means "no area yet".
pub fn compute_area(width: &str, height: &str) -> Option<f64> {
    let area = finite_number(width)? * finite_number(height)?;
    if area == 0.0 || !area.is_finite() {
        return None;
    }
    Some(round2(area))
}

/// Add-on count as used for pricing: leading integer, or zero
fn add_on_count(raw: &str) -> f64 {
    parse_int_prefix(raw).map_or(0.0, |n| n as f64)
}

/// Drilling subtotal
pub fn drilling_cost(drill_holes: &str, rates: &AddOnRates) -> f64 {
    round2(add_on_count(drill_holes) * rates.drill_hole)
}

/// Hinge subtotal
pub fn hinge_cost(hinges: &str, rates: &AddOnRates) -> f64 {
    round2(add_on_count(hinges) * rates.hinge)
}

/// `drill_holes * drill_rate + hinges * hinge_rate`
pub fn compute_add_on_cost(drill_holes: &str, hinges: &str, rates: &AddOnRates) -> f64 {
    round2(add_on_count(drill_holes) * rates.drill_hole + add_on_count(hinges) * rates.hinge)
}

/// `unit_price * measure + add_ons`, where the measure is the area or the
/// quantity depending on the pricing mode. `None` if either operand is.
pub fn compute_total(measure: Option<f64>, unit_price: Option<f64>, add_ons: f64) -> Option<f64> {
    let total = unit_price? * measure? + add_ons;
    total.is_finite().then(|| round2(total))
}

/// Unit price for the current selection
pub fn unit_price(
    mode: PricingMode,
    input: &OrderInput,
    catalog: &[MaterialCatalogEntry],
) -> Option<f64> {
    match mode {
        PricingMode::Unit => finite_number(input.text(fields::PRICE)),
        PricingMode::Catalog => lookup_unit_price(input.text(fields::ITEM), catalog),
    }
}

/// Every derived amount shown under the form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub mode: PricingMode,

    /// Area in square metres (catalog mode only)
    pub area: Option<f64>,

    /// Quantity the unit price applies to (unit mode only)
    pub quantity: Option<f64>,

    pub unit_price: Option<f64>,
    pub drilling: f64,
    pub hinges: f64,
    pub add_ons: f64,
    pub total: Option<f64>,
}

impl PriceBreakdown {
    /// The total as display text
    pub fn total_display(&self) -> String {
        format_amount(self.total)
    }
}

/// Recompute every derived amount from the current raw input
pub fn quote(input: &OrderInput, config: &OrderFormConfig) -> PriceBreakdown {
    let drill_holes = input.text(fields::DRILL_HOLES);
    let hinges = input.text(fields::HINGES);

    let (area, quantity) = match config.mode {
        PricingMode::Unit => (None, finite_number(input.text(fields::QUANTITY))),
        PricingMode::Catalog => (
            compute_area(input.text(fields::WIDTH), input.text(fields::HEIGHT)),
            None,
        ),
    };

    let unit_price = unit_price(config.mode, input, &config.catalog);
    let add_ons = compute_add_on_cost(drill_holes, hinges, &config.rates);

    PriceBreakdown {
        mode: config.mode,
        area,
        quantity,
        unit_price,
        drilling: drilling_cost(drill_holes, &config.rates),
        hinges: hinge_cost(hinges, &config.rates),
        add_ons,
        total: compute_total(area.or(quantity), unit_price, add_ons),
    }
}

/// `12.00` for an amount, the placeholder for none
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value.is_finite() => format!("{:.2}", value),
        _ => PLACEHOLDER.to_string(),
    }
}
