use rust_decimal::Decimal;
use tracing::debug;

use super::line_item_calculator::LineItemCalculator;
use crate::core::parse_number;
use crate::modules::invoices::models::{Invoice, InvoiceTotals, LineItem};
use crate::modules::taxes::TaxRegime;
use crate::modules::words::AmountInWords;

/// Recompute every derived figure of an invoice from its raw inputs
pub fn recompute(invoice: &Invoice) -> Invoice {
    InvoiceAggregator::new().recompute(invoice)
}

/// InvoiceAggregator rebuilds all rows and totals of an invoice in one pass.
///
/// Nothing is cached between calls: each recomputation re-classifies and
/// re-calculates every row, so the same inputs always give the same invoice.
pub struct InvoiceAggregator {
    calculator: LineItemCalculator,
    words: AmountInWords,
}

impl InvoiceAggregator {
    pub fn new() -> Self {
        Self {
            calculator: LineItemCalculator::new(),
            words: AmountInWords::new(),
        }
    }

    /// Recompute rows and totals, leaving the input invoice untouched
    pub fn recompute(&self, invoice: &Invoice) -> Invoice {
        let rows: Vec<LineItem> = invoice
            .rows()
            .iter()
            .map(|line_item| self.calculator.recompute_line(line_item))
            .collect();

        let transport = parse_number(invoice.transport());
        let totals = self.totals(&rows, transport, invoice.regime());

        debug!(
            rows = rows.len(),
            regime = %invoice.regime(),
            subtotal = %totals.subtotal,
            total_gst = %totals.total_gst,
            grand_total = %totals.grand_total,
            "Invoice recomputed"
        );

        invoice.with_derived(rows, totals)
    }

    /// Aggregate already-calculated rows
    ///
    /// * subtotal = Σ amount, total_gst = Σ gst_amount
    /// * IGST carries the whole GST; otherwise CGST and SGST take half each
    /// * grand_total = subtotal + total_gst + transport (transport is untaxed)
    pub fn totals(
        &self,
        rows: &[LineItem],
        transport: Decimal,
        regime: TaxRegime,
    ) -> InvoiceTotals {
        let (subtotal, total_gst) = rows.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(subtotal, total_gst), line_item| {
                (
                    subtotal.saturating_add(line_item.amounts.amount),
                    total_gst.saturating_add(line_item.amounts.gst_amount),
                )
            },
        );

        let (cgst, sgst, igst) = match regime {
            TaxRegime::Igst => (None, None, Some(total_gst)),
            TaxRegime::SplitCgstSgst => {
                let half = total_gst / Decimal::TWO;
                (Some(half), Some(half), None)
            }
        };

        let grand_total = subtotal.saturating_add(total_gst).saturating_add(transport);

        InvoiceTotals {
            subtotal,
            total_gst,
            cgst,
            sgst,
            igst,
            transport,
            grand_total,
            amount_in_words: self.words.rupees(grand_total),
        }
    }
}

impl Default for InvoiceAggregator {
    fn default() -> Self {
        Self::new()
    }
}
