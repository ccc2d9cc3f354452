//! Integration tests for live pricing
//!
//! These tests verify that:
//! - Area, add-on and total follow their formulas
//! - Any amount that cannot be computed renders as the placeholder
//! - Pricing never panics on raw text

use brico::prelude::*;

fn red_catalog() -> Vec<MaterialCatalogEntry> {
    vec![
        MaterialCatalogEntry::new("1", "red", "12"),
        MaterialCatalogEntry::new("2", "blue", "15.5"),
    ]
}

mod area_tests {
    use super::*;

    #[test]
    fn test_area_is_width_times_height() {
        assert_eq!(compute_area("3", "4"), Some(12.0));
        assert_eq!(format_amount(compute_area("3", "4")), "12.00");
    }

    #[test]
    fn test_zero_area_shows_placeholder() {
        assert_eq!(format_amount(compute_area("0", "5")), PLACEHOLDER);
    }

    #[test]
    fn test_raw_text_never_panics() {
        for (w, h) in [("", ""), ("-", "1"), ("1e999", "1"), ("NaN", "2"), ("½", "3")] {
            let area = compute_area(w, h);
            assert!(area.is_none_or(|a| a.is_finite()));
        }
    }
}

mod add_on_tests {
    use super::*;

    #[test]
    fn test_drill_and_hinge_rates() {
        let rates = AddOnRates::default();
        assert_eq!(compute_add_on_cost("3", "2", &rates), 17.5);
        assert_eq!(compute_add_on_cost("0", "0", &rates), 0.0);
    }

    #[test]
    fn test_unparsable_counts_as_zero() {
        let rates = AddOnRates::default();
        assert_eq!(compute_add_on_cost("", "", &rates), 0.0);
        assert_eq!(compute_add_on_cost("two", "4", &rates), 5.0);
    }

    #[test]
    fn test_leading_integer_is_used() {
        let rates = AddOnRates::default();
        assert_eq!(compute_add_on_cost("2 holes", "", &rates), 10.0);
    }
}

mod total_tests {
    use super::*;

    #[test]
    fn test_catalog_total() {
        let unit_price = lookup_unit_price("red", &red_catalog());
        let area = compute_area("2", "0.5");
        let total = compute_total(area, unit_price, 2.5);

        assert_eq!(total, Some(14.5));
        assert_eq!(format_amount(total), "14.50");
    }

    #[test]
    fn test_unknown_material_has_no_total() {
        let unit_price = lookup_unit_price("green", &red_catalog());
        assert_eq!(unit_price, None);
        assert_eq!(
            format_amount(compute_total(Some(1.0), unit_price, 0.0)),
            PLACEHOLDER
        );
    }

    #[test]
    fn test_lookup_matches_color_not_id() {
        assert_eq!(lookup_unit_price("blue", &red_catalog()), Some(15.5));
        assert_eq!(lookup_unit_price("2", &red_catalog()), None);
    }

    #[test]
    fn test_unit_mode_quote() {
        let config = OrderFormConfig::unit_config();
        let input = OrderInput {
            quantity: Some("3".to_string()),
            price: Some("2.40".to_string()),
            drill_holes: Some("1".to_string()),
            hinges: Some("2".to_string()),
            ..OrderInput::default()
        };

        let breakdown = quote(&input, &config);
        assert_eq!(breakdown.mode, PricingMode::Unit);
        assert_eq!(breakdown.quantity, Some(3.0));
        assert_eq!(breakdown.drilling, 5.0);
        assert_eq!(breakdown.hinges, 2.5);
        assert_eq!(breakdown.add_ons, 7.5);
        assert_eq!(breakdown.total_display(), "14.70");
    }

    #[test]
    fn test_catalog_mode_quote_with_configured_rates() {
        let config = OrderFormConfig {
            rates: AddOnRates {
                drill_hole: 2.0,
                hinge: 1.25,
            },
            catalog: red_catalog(),
            ..OrderFormConfig::default_config()
        };
        let input = OrderInput {
            item: Some("blue".to_string()),
            width: Some("2".to_string()),
            height: Some("1".to_string()),
            drill_holes: Some("3".to_string()),
            hinges: Some("2".to_string()),
            ..OrderInput::default()
        };

        let breakdown = quote(&input, &config);
        assert_eq!(breakdown.area, Some(2.0));
        assert_eq!(breakdown.unit_price, Some(15.5));
        assert_eq!(breakdown.add_ons, 8.5);
        assert_eq!(breakdown.total, Some(39.5));
    }

    #[test]
    fn test_quote_does_not_depend_on_validity() {
        let config = OrderFormConfig::unit_config();
        let input = OrderInput {
            first_name: Some("A".to_string()),
            quantity: Some("2".to_string()),
            price: Some("5".to_string()),
            ..OrderInput::default()
        };

        assert!(OrderSchema::for_config(&config).validate_record(&input).is_err());
        assert_eq!(quote(&input, &config).total, Some(10.0));
    }
}
