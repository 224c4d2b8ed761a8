use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice-level amounts derived from all rows, the transport charge and the regime
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of row amounts before tax
    pub subtotal: Decimal,

    /// Sum of row GST amounts
    pub total_gst: Decimal,

    /// Half of total GST; only under the CGST/SGST split
    pub cgst: Option<Decimal>,

    /// Half of total GST; only under the CGST/SGST split
    pub sgst: Option<Decimal>,

    /// Whole GST; only under IGST
    pub igst: Option<Decimal>,

    /// Parsed transport charge (never taxed)
    pub transport: Decimal,

    /// subtotal + total GST + transport
    pub grand_total: Decimal,

    /// Grand total in words with the rupee suffix, empty when not positive
    pub amount_in_words: String,
}
