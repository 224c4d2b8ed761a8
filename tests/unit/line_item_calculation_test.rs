// Property-based tests for line item calculation
//
// Properties tested:
// 1. amount = quantity × unit_rate
// 2. gst_amount = amount × classified rate / 100
// 3. total = amount + gst_amount
// 4. the rate cell always ends up holding the classified slab

use gst_invoice::invoices::{LineItem, LineItemCalculator, RowField, RowInput};
use gst_invoice::taxes::GstClassifier;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    #[test]
    fn test_line_item_arithmetic(
        quantity in 0u32..=10_000u32,
        rate_paise in 0i64..=10_000_000i64
    ) {
        let unit_rate = Decimal::new(rate_paise, 2);
        let line_item = LineItem::from_input(
            1,
            RowInput::new("Item", quantity.to_string(), unit_rate.to_string()),
        );

        let recomputed = LineItemCalculator::new().recompute_line(&line_item);
        let percent = GstClassifier::new()
            .classify(unit_rate)
            .map(|rate| rate.percent())
            .unwrap_or(Decimal::ZERO);

        let amount = Decimal::from(quantity) * unit_rate;
        prop_assert_eq!(recomputed.amounts.amount, amount);
        prop_assert_eq!(recomputed.amounts.gst_amount, amount * percent / dec!(100));
        prop_assert_eq!(
            recomputed.amounts.total,
            recomputed.amounts.amount + recomputed.amounts.gst_amount
        );
    }

    /// Property: whatever was typed into the rate cell, recomputation replaces it
    #[test]
    fn test_rate_cell_is_always_reclassified(
        typed_rate in "[0-9]{1,2}",
        rate in 1u32..=5_000u32
    ) {
        let mut line_item = LineItem::from_input(1, RowInput::new("Item", "1", rate.to_string()));
        line_item.set_field(RowField::GstRate, typed_rate);

        let recomputed = LineItemCalculator::new().recompute_line(&line_item);
        let expected = if rate <= 999 { "5" } else { "12" };
        prop_assert_eq!(recomputed.gst_rate, expected);
    }
}

#[test]
fn test_reference_line() {
    let line_item = LineItem::from_input(1, RowInput::new("Kurta", "2", "500"));
    let recomputed = LineItemCalculator::new().recompute_line(&line_item);

    assert_eq!(recomputed.amounts.amount, dec!(1000));
    assert_eq!(recomputed.gst_rate, "5");
    assert_eq!(recomputed.amounts.gst_amount, dec!(50));
    assert_eq!(recomputed.amounts.total, dec!(1050));
}
