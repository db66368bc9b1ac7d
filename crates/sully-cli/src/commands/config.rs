use sully_config::SullyConfig;

use crate::cli::subcommands::ConfigCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `sully config`. Runs before the store is opened.
pub fn handle(
    action: &ConfigCommands,
    config: &SullyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Show => {
            let rendered = config.to_redacted_toml()?;
            if flags.format == OutputFormat::Json || flags.format == OutputFormat::Raw {
                let value: toml::Value = toml::from_str(&rendered)?;
                return output(&value, flags.format);
            }
            println!("{rendered}");
            Ok(())
        }
    }
}
