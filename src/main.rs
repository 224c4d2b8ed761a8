use anyhow::Context;
use gst_invoice::config::Config;
use gst_invoice::invoices::{Invoice, InvoiceSheet, InvoiceView};
use gst_invoice::presentation::Theme;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Serialize)]
struct Output<'a> {
    theme: Theme,
    style: Vec<(&'static str, &'static str)>,
    invoice: &'a InvoiceView,
}

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gst_invoice={}", config.app.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Environment: {}", config.app.env);

    if let Some(attempt) = &config.presentation.password_attempt {
        config.presentation.access_gate().check(attempt)?;
        tracing::info!("Access granted");
    }

    let invoice = match std::env::args().nth(1).or_else(|| config.invoice.sheet_path.clone()) {
        Some(path) => {
            let mut sheet = InvoiceSheet::from_path(&path)
                .with_context(|| format!("Failed to load invoice sheet {}", path))?;
            if sheet.regime.is_none() {
                sheet.regime = Some(config.invoice.default_regime.as_selector().to_string());
            }
            tracing::info!("Loaded {} rows from {}", sheet.rows.len(), path);
            Invoice::from_sheet(sheet, config.invoice.max_rows)?
        }
        None => {
            tracing::warn!("No invoice sheet given, rendering an empty invoice");
            let mut invoice = Invoice::new(config.invoice.max_rows);
            invoice.set_regime(config.invoice.default_regime);
            invoice.recomputed()
        }
    };

    let view = InvoiceView::render(&invoice);
    tracing::info!(
        grand_total = %invoice.totals().grand_total,
        "Invoice rendered"
    );

    let theme = config.presentation.theme;
    let output = Output {
        theme,
        style: theme.variables().to_vec(),
        invoice: &view,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
