use std::path::Path;

use anyhow::Context;
use sully_config::SullyConfig;

/// Load `.env` from the working directory (if any), then the layered config.
pub fn load_config() -> anyhow::Result<SullyConfig> {
    let env_path = Path::new(".env");
    if env_path.exists() {
        dotenvy::from_path(env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    SullyConfig::load().context("failed to load sully configuration")
}
