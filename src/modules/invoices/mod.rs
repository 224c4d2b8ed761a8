// Invoices module

pub mod models;
pub mod services;

pub use models::{
    Invoice, InvoiceSheet, InvoiceTotals, InvoiceView, LineAmounts, LineItem, RowField, RowInput,
    RowView, MAX_ROWS,
};
pub use services::{recompute, InvoiceAggregator, LineItemCalculator};
