use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mnemonic_table::Formatter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let formatter = Formatter::default();
    let rows = formatter
        .run()
        .with_context(|| format!("writing {}", formatter.config().output.display()))?;

    tracing::debug!(rows, "done");
    Ok(())
}
