use rust_decimal::Decimal;

use crate::modules::taxes::models::GstRate;

/// Assigns the GST slab of a line from its unit price.
///
/// The slab is re-derived on every recomputation and always replaces
/// whatever rate the line carried before, including hand-typed rates.
pub struct GstClassifier;

impl GstClassifier {
    /// Highest unit price still taxed at the low slab
    pub const LOW_SLAB_CEILING: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

    pub fn new() -> Self {
        Self
    }

    /// Classify a unit price
    ///
    /// * price <= 0 -> no rate
    /// * 0 < price <= 999 -> 5%
    /// * price > 999 -> 12%
    pub fn classify(&self, unit_price: Decimal) -> Option<GstRate> {
        if unit_price <= Decimal::ZERO {
            None
        } else if unit_price <= Self::LOW_SLAB_CEILING {
            Some(GstRate::Five)
        } else {
            Some(GstRate::Twelve)
        }
    }
}

impl Default for GstClassifier {
    fn default() -> Self {
        Self::new()
    }
}
