// An invoice is a fixed number of editable rows plus a transport charge and a
// tax regime. Every derived figure is produced by recomputation; edits only
// touch raw cells.

use serde::Serialize;

use super::line_item::{LineItem, RowField};
use super::sheet::{InvoiceSheet, RowInput};
use super::totals::InvoiceTotals;
use crate::core::{AppError, Result};
use crate::modules::invoices::services::InvoiceAggregator;
use crate::modules::taxes::TaxRegime;

/// Default number of rows on an invoice
pub const MAX_ROWS: usize = 17;

/// Represents an invoice being filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    rows: Vec<LineItem>,
    transport: String,
    regime: TaxRegime,
    totals: InvoiceTotals,
}

impl Invoice {
    /// Create an invoice with `capacity` empty rows numbered from 1
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: (1..=capacity).map(LineItem::empty).collect(),
            transport: String::new(),
            regime: TaxRegime::default(),
            totals: InvoiceTotals::default(),
        }
    }

    /// Build an invoice from a sheet and recompute it
    ///
    /// # Errors
    /// * `AppError::Validation` if the sheet has more rows than `capacity`
    pub fn from_sheet(sheet: InvoiceSheet, capacity: usize) -> Result<Self> {
        if sheet.rows.len() > capacity {
            return Err(AppError::validation(format!(
                "Sheet has {} rows but the invoice holds at most {}",
                sheet.rows.len(),
                capacity
            )));
        }

        let filled = sheet.rows.len();
        let rows = sheet
            .rows
            .into_iter()
            .enumerate()
            .map(|(pos, input)| LineItem::from_input(pos + 1, input))
            .chain((filled + 1..=capacity).map(LineItem::empty))
            .collect();

        let invoice = Self {
            rows,
            transport: sheet.transport,
            regime: sheet
                .regime
                .as_deref()
                .map(TaxRegime::from_selector)
                .unwrap_or_default(),
            totals: InvoiceTotals::default(),
        };

        Ok(invoice.recomputed())
    }

    /// Number of rows this invoice holds
    pub fn capacity(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    /// Row at 1-based `index`
    pub fn row(&self, index: usize) -> Option<&LineItem> {
        index.checked_sub(1).and_then(|pos| self.rows.get(pos))
    }

    pub fn transport(&self) -> &str {
        &self.transport
    }

    pub fn regime(&self) -> TaxRegime {
        self.regime
    }

    /// Totals as of the last recomputation
    pub fn totals(&self) -> &InvoiceTotals {
        &self.totals
    }

    /// Replace every cell of the row at 1-based `index`
    pub fn set_row(&mut self, index: usize, input: RowInput) -> Result<()> {
        self.row_mut(index)?.apply(input);
        Ok(())
    }

    /// Replace one cell of the row at 1-based `index`
    pub fn set_field(
        &mut self,
        index: usize,
        field: RowField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.row_mut(index)?.set_field(field, value);
        Ok(())
    }

    /// Reset the row at 1-based `index` to empty
    pub fn clear_row(&mut self, index: usize) -> Result<()> {
        self.row_mut(index)?.clear();
        Ok(())
    }

    pub fn set_transport(&mut self, transport: impl Into<String>) {
        self.transport = transport.into();
    }

    pub fn set_regime(&mut self, regime: TaxRegime) {
        self.regime = regime;
    }

    /// Reset every row, the transport charge and the totals, keeping capacity and regime
    pub fn reset(&mut self) {
        self.rows.iter_mut().for_each(LineItem::clear);
        self.transport.clear();
        self.totals = InvoiceTotals::default();
    }

    /// Consume the invoice and return it fully recomputed
    pub fn recomputed(self) -> Self {
        InvoiceAggregator::new().recompute(&self)
    }

    /// Same inputs with freshly derived rows and totals
    pub(crate) fn with_derived(&self, rows: Vec<LineItem>, totals: InvoiceTotals) -> Self {
        Self {
            rows,
            transport: self.transport.clone(),
            regime: self.regime,
            totals,
        }
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut LineItem> {
        let capacity = self.rows.len();
        index
            .checked_sub(1)
            .and_then(|pos| self.rows.get_mut(pos))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Row {} is outside the invoice (rows 1 to {})",
                    index, capacity
                ))
            })
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new(MAX_ROWS)
    }
}
