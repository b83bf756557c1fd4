//! `fsgo config`: read and write configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    commands::init::write_config,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `get` and `list` show the effective configuration (file plus
/// environment); `set` edits the file alone.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = AppConfig::resolve_path(global.config.as_ref());

    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let mut file_config = AppConfig::from_file(&path)?;
            file_config.set(&key, &value)?;
            write_config(&path, &file_config)?;
            output.success(&format!("{key} = {}", file_config.get(&key)?))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.print(&config.to_toml()?)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}
