mod invoice;
mod line_item;
mod sheet;
mod totals;
mod view;

pub use invoice::{Invoice, MAX_ROWS};
pub use line_item::{LineAmounts, LineItem, RowField};
pub use sheet::{InvoiceSheet, RowInput};
pub use totals::InvoiceTotals;
pub use view::{InvoiceView, RowView};
