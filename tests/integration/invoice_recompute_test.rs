// Integration tests for the edit -> recompute -> render cycle
//
// Drives an invoice the way the presentation layer does: edit raw cells,
// recompute the whole invoice, render the display strings.

use gst_invoice::invoices::{recompute, Invoice, InvoiceView, RowField, RowInput};
use gst_invoice::taxes::TaxRegime;
use rust_decimal_macros::dec;

fn reference_invoice() -> Invoice {
    let mut invoice = Invoice::default();
    invoice
        .set_row(1, RowInput::new("Cotton Kurta", "1", "500"))
        .unwrap();
    invoice
        .set_row(2, RowInput::new("Silk Saree", "1", "2000"))
        .unwrap();
    invoice
}

#[test]
fn test_split_regime_render() {
    let view = InvoiceView::render(&recompute(&reference_invoice()));

    assert_eq!(view.subtotal, "₹2500.00");
    assert_eq!(view.cgst, "₹132.50");
    assert_eq!(view.sgst, "₹132.50");
    assert_eq!(view.igst, "");
    assert_eq!(view.transport, "");
    assert_eq!(view.grand_total, "₹2765.00");
    assert_eq!(
        view.amount_in_words,
        "Two Thousand Seven Hundred Sixty Five Rupees Only"
    );
}

#[test]
fn test_switching_regime_moves_tax_lines() {
    let mut invoice = recompute(&reference_invoice());
    invoice.set_regime(TaxRegime::from_selector("igst"));
    let view = InvoiceView::render(&recompute(&invoice));

    assert_eq!(view.igst, "₹265.00");
    assert_eq!(view.cgst, "");
    assert_eq!(view.sgst, "");
    assert_eq!(view.grand_total, "₹2765.00");
}

#[test]
fn test_recompute_twice_renders_identically() {
    let mut invoice = reference_invoice();
    invoice.set_transport("₹1,234.56");
    invoice
        .set_row(7, RowInput::new("Stole", "3", "333.33"))
        .unwrap();

    let once = recompute(&invoice);
    let twice = recompute(&once);
    assert_eq!(once, twice);

    let first = serde_json::to_string(&InvoiceView::render(&once)).unwrap();
    let second = serde_json::to_string(&InvoiceView::render(&twice)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_manual_rate_does_not_stick() {
    let mut invoice = recompute(&reference_invoice());
    invoice.set_field(2, RowField::GstRate, "5").unwrap();
    assert_eq!(invoice.row(2).unwrap().gst_rate, "5");

    // Any edit triggers recomputation, which restores the slab for ₹2000
    invoice.set_transport("0");
    let invoice = recompute(&invoice);
    assert_eq!(invoice.row(2).unwrap().gst_rate, "12");
    assert_eq!(invoice.row(2).unwrap().amounts.gst_amount, dec!(240));
}

#[test]
fn test_clearing_rows_hides_everything() {
    let mut invoice = recompute(&reference_invoice());
    invoice.clear_row(1).unwrap();
    invoice.clear_row(2).unwrap();
    let view = InvoiceView::render(&recompute(&invoice));

    assert_eq!(view.subtotal, "");
    assert_eq!(view.cgst, "");
    assert_eq!(view.sgst, "");
    assert_eq!(view.grand_total, "");
    assert_eq!(view.amount_in_words, "");
}

#[test]
fn test_negative_transport_hides_grand_total() {
    let mut invoice = reference_invoice();
    invoice.set_transport("-5000");
    let invoice = recompute(&invoice);
    let view = InvoiceView::render(&invoice);

    assert_eq!(invoice.totals().grand_total, dec!(-2235));
    assert_eq!(view.subtotal, "₹2500.00");
    assert_eq!(view.grand_total, "");
    assert_eq!(view.amount_in_words, "");
}

#[test]
fn test_configured_capacity() {
    let mut invoice = Invoice::new(25);
    invoice
        .set_row(25, RowInput::new("Last row", "1", "1000"))
        .unwrap();
    assert!(invoice.set_row(26, RowInput::new("Overflow", "1", "1")).is_err());

    let view = InvoiceView::render(&recompute(&invoice));
    assert_eq!(view.rows.len(), 25);
    assert_eq!(view.rows[24].gst_rate, "12");
    assert_eq!(view.grand_total, "₹1120.00");
    assert_eq!(
        view.amount_in_words,
        "One Thousand One Hundred Twenty Rupees Only"
    );
}

#[test]
fn test_large_total_in_crore() {
    let mut invoice = Invoice::default();
    invoice
        .set_row(1, RowInput::new("Bulk order", "1000", "89,285.72"))
        .unwrap();
    let invoice = recompute(&invoice);

    // 8,92,85,720 + 12% = 10,00,00,006.40
    assert_eq!(invoice.totals().grand_total, dec!(100000006.4));
    assert_eq!(
        invoice.totals().amount_in_words,
        "Ten Crore Six Rupees Only"
    );
}
