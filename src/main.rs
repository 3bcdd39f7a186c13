use anyhow::{Context, Result};
use formdoc::Config;
use std::io;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    config.validate().context("Invalid configuration")?;

    let form_set = formdoc::load_forms(&config.forms)
        .with_context(|| format!("Failed to load forms from {}", config.forms.display()))?;

    let brokerpak_form = match &config.brokerpak {
        Some(path) => formdoc::load_form(path)
            .with_context(|| format!("Failed to load brokerpak form from {}", path.display()))?,
        None => form_set.brokerpak_form(),
    };

    let document = formdoc::render(&form_set.forms, &brokerpak_form)?;

    if config.writes_to_stdout() {
        formdoc::print_document(io::stdout().lock(), &document)?;
    } else {
        formdoc::write_document(&config.output, &document)?;
        info!(
            path = %config.output.display(),
            forms = form_set.forms.len(),
            brokerpak_properties = brokerpak_form.properties.len(),
            "Generated customization document"
        );
    }

    Ok(())
}
