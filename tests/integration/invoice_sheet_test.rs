// Integration tests for loading invoice sheets from disk

use std::path::PathBuf;

use gst_invoice::core::AppError;
use gst_invoice::invoices::{Invoice, InvoiceSheet, InvoiceView, MAX_ROWS};
use gst_invoice::taxes::TaxRegime;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_yaml_sheet() {
    let sheet = InvoiceSheet::from_path(fixture("boutique.yaml")).unwrap();
    let invoice = Invoice::from_sheet(sheet, MAX_ROWS).unwrap();
    let totals = invoice.totals();

    assert_eq!(invoice.regime(), TaxRegime::SplitCgstSgst);
    // Typed 28% on the saree is replaced by the 12% slab
    assert_eq!(invoice.row(2).unwrap().gst_rate, "12");

    // 1000 + 2000 + 1351.5
    assert_eq!(totals.subtotal, dec!(4351.5));
    // 50 + 240 + 67.575
    assert_eq!(totals.total_gst, dec!(357.575));
    assert_eq!(totals.transport, dec!(150));
    assert_eq!(totals.grand_total, dec!(4859.075));

    let view = InvoiceView::render(&invoice);
    assert_eq!(view.rows[2].gst_amount, "₹67.58");
    assert_eq!(view.cgst, "₹178.79");
    assert_eq!(view.grand_total, "₹4859.08");
    assert_eq!(
        view.amount_in_words,
        "Four Thousand Eight Hundred Fifty Nine Rupees Only"
    );
}

#[test]
fn test_json_sheet() {
    let sheet = InvoiceSheet::from_path(fixture("interstate.json")).unwrap();
    let invoice = Invoice::from_sheet(sheet, MAX_ROWS).unwrap();
    let view = InvoiceView::render(&invoice);

    assert_eq!(invoice.regime(), TaxRegime::Igst);
    assert_eq!(view.rows[0].total, "₹1400.00");
    // Unreadable rate is zero: no slab, nothing shown
    assert_eq!(view.rows[1].gst_rate, "");
    assert_eq!(view.rows[1].total, "");
    assert_eq!(view.igst, "₹150.00");
    assert_eq!(view.cgst, "");
    assert_eq!(view.grand_total, "₹1400.00");
    assert_eq!(view.amount_in_words, "One Thousand Four Hundred Rupees Only");
}

#[test]
fn test_sheet_larger_than_capacity() {
    let sheet = InvoiceSheet::from_path(fixture("boutique.yaml")).unwrap();
    let result = Invoice::from_sheet(sheet, 2);
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_missing_sheet() {
    let result = InvoiceSheet::from_path(fixture("does-not-exist.yaml"));
    assert!(matches!(result, Err(AppError::Io(_))));
}
