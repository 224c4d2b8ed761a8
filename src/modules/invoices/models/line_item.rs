// A line item is one editable row of the invoice table.
//
// The row keeps exactly what was typed into its cells. Amounts are derived
// from those cells on every recomputation and are never read back from input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sheet::RowInput;

/// Editable cell of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Description,
    Quantity,
    UnitRate,
    GstRate,
}

/// Amounts derived from a line's quantity, unit rate and GST rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAmounts {
    /// quantity × unit rate
    pub amount: Decimal,

    /// amount × GST rate / 100
    pub gst_amount: Decimal,

    /// amount + GST
    pub total: Decimal,
}

/// Represents a single row of an invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// 1-based position in the invoice
    pub index: usize,

    /// Description of the goods
    pub description: String,

    /// Raw quantity text
    pub quantity: String,

    /// Raw unit rate text
    pub unit_rate: String,

    /// Raw GST rate text; replaced by the classified slab on recomputation
    pub gst_rate: String,

    /// Derived amounts
    #[serde(skip_deserializing)]
    pub amounts: LineAmounts,
}

impl LineItem {
    /// Create an empty row at `index`
    pub fn empty(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Create a row at `index` from typed cell values
    pub fn from_input(index: usize, input: RowInput) -> Self {
        let mut line_item = Self::empty(index);
        line_item.apply(input);
        line_item
    }

    /// Overwrite every cell with `input`
    ///
    /// Derived amounts are left untouched until the next recomputation.
    pub fn apply(&mut self, input: RowInput) {
        self.description = input.description;
        self.quantity = input.quantity;
        self.unit_rate = input.unit_rate;
        self.gst_rate = input.gst_rate;
    }

    /// Overwrite a single cell
    pub fn set_field(&mut self, field: RowField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RowField::Description => self.description = value,
            RowField::Quantity => self.quantity = value,
            RowField::UnitRate => self.unit_rate = value,
            RowField::GstRate => self.gst_rate = value,
        }
    }

    /// Reset every cell and amount, keeping the row's position
    pub fn clear(&mut self) {
        *self = Self::empty(self.index);
    }

    /// True when no cell has been filled in
    pub fn is_blank(&self) -> bool {
        [&self.description, &self.quantity, &self.unit_rate, &self.gst_rate]
            .iter()
            .all(|cell| cell.trim().is_empty())
    }
}
