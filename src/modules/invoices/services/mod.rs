mod invoice_aggregator;
mod line_item_calculator;

pub use invoice_aggregator::{recompute, InvoiceAggregator};
pub use line_item_calculator::LineItemCalculator;
