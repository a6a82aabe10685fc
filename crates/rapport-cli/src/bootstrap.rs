use std::path::Path;

use anyhow::Context;
use rapport_config::RapportConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<RapportConfig> {
    load_dotenv()?;
    RapportConfig::load().context("failed to load rapport configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let local = Path::new(".env");
    if local.exists() {
        dotenvy::from_path(local)
            .with_context(|| format!("failed to load dotenv file at {}", local.display()))?;
        return Ok(());
    }

    // Fall back to the usual upward search; a missing file is fine.
    dotenvy::dotenv().ok();
    Ok(())
}
