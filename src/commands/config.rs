//! Config command - inspect and change settings

use log::info;
use tomctl::config::Config;
use tomctl::output::{ConfigInfo, OperationResult, OutputMode};

use crate::cli::ConfigAction;

/// Handle config subcommands
pub fn config_cmd(action: ConfigAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let path = Config::config_path();
            ConfigInfo {
                path: path.display().to_string(),
                exists: path.exists(),
                config: Config::load(),
            }
            .render(mode);
        },
        ConfigAction::Path => match mode {
            OutputMode::Human => println!("{}", Config::config_path().display()),
            OutputMode::Json => println!(
                "{}",
                serde_json::json!({ "path": Config::config_path().display().to_string() })
            ),
        },
        ConfigAction::Set { key, value } => {
            // Edit the file as written so env overrides are not persisted
            let mut config = Config::load_file()?;
            config.set(&key, &value)?;
            config.save()?;
            info!("updated {key} in {}", Config::config_path().display());

            OperationResult {
                success: true,
                message: format!("Set {key} = {value}"),
            }
            .render(mode);
        },
    }
    Ok(())
}
