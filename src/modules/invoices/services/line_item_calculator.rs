use rust_decimal::Decimal;

use crate::core::parse_number;
use crate::modules::invoices::models::{LineAmounts, LineItem};
use crate::modules::taxes::GstClassifier;

/// LineItemCalculator derives a row's amount, GST and total
pub struct LineItemCalculator {
    classifier: GstClassifier,
}

impl LineItemCalculator {
    pub fn new() -> Self {
        Self {
            classifier: GstClassifier::new(),
        }
    }

    /// Calculate amounts for a line
    ///
    /// * amount = quantity × unit_rate
    /// * gst_amount = amount × gst_rate_percent / 100
    /// * total = amount + gst_amount
    ///
    /// Negative inputs propagate; arithmetic saturates at the Decimal range.
    pub fn calculate(
        &self,
        quantity: Decimal,
        unit_rate: Decimal,
        gst_rate_percent: Decimal,
    ) -> LineAmounts {
        let amount = quantity.saturating_mul(unit_rate);
        let gst_amount = amount.saturating_mul(gst_rate_percent) / Decimal::ONE_HUNDRED;
        let total = amount.saturating_add(gst_amount);

        LineAmounts {
            amount,
            gst_amount,
            total,
        }
    }

    /// Recompute a row from its raw cells.
    ///
    /// The GST rate cell is overwritten with the slab for the row's unit
    /// rate, so hand-typed rates never survive.
    pub fn recompute_line(&self, line_item: &LineItem) -> LineItem {
        let quantity = parse_number(&line_item.quantity);
        let unit_rate = parse_number(&line_item.unit_rate);
        let slab = self.classifier.classify(unit_rate);
        let gst_rate_percent = slab.map(|rate| rate.percent()).unwrap_or(Decimal::ZERO);

        LineItem {
            gst_rate: slab.map(|rate| rate.to_string()).unwrap_or_default(),
            amounts: self.calculate(quantity, unit_rate, gst_rate_percent),
            ..line_item.clone()
        }
    }
}

impl Default for LineItemCalculator {
    fn default() -> Self {
        Self::new()
    }
}
