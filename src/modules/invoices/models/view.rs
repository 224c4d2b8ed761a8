use serde::Serialize;

use super::invoice::Invoice;
use super::line_item::LineItem;
use crate::core::Rupee;
use crate::modules::taxes::TaxRegime;

/// Display strings for one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub index: usize,
    pub description: String,
    pub gst_rate: String,
    pub gst_amount: String,
    pub total: String,
}

impl From<&LineItem> for RowView {
    fn from(line_item: &LineItem) -> Self {
        Self {
            index: line_item.index,
            description: line_item.description.clone(),
            gst_rate: line_item.gst_rate.clone(),
            gst_amount: Rupee::format_amount(line_item.amounts.gst_amount),
            total: Rupee::format_amount(line_item.amounts.total),
        }
    }
}

/// Everything the presentation layer shows for an invoice.
///
/// Amounts that are zero or negative are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceView {
    pub regime: TaxRegime,
    pub rows: Vec<RowView>,
    pub subtotal: String,
    pub cgst: String,
    pub sgst: String,
    pub igst: String,
    pub transport: String,
    pub grand_total: String,
    pub amount_in_words: String,
}

impl InvoiceView {
    /// Render the invoice's derived figures as of its last recomputation
    pub fn render(invoice: &Invoice) -> Self {
        let totals = invoice.totals();
        Self {
            regime: invoice.regime(),
            rows: invoice.rows().iter().map(RowView::from).collect(),
            subtotal: Rupee::format_amount(totals.subtotal),
            cgst: Rupee::format_optional(totals.cgst),
            sgst: Rupee::format_optional(totals.sgst),
            igst: Rupee::format_optional(totals.igst),
            transport: Rupee::format_amount(totals.transport),
            grand_total: Rupee::format_amount(totals.grand_total),
            amount_in_words: totals.amount_in_words.clone(),
        }
    }
}
