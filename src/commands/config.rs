// Configuration management command
use crate::cli::ConfigAction;
use crate::config::Config;
use anyhow::{Context, Result};

pub fn handle_config_action(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            let contents =
                toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
            println!("{contents}");
        }
        ConfigAction::Init => {
            let config = Config::default();
            config.save()?;
            println!("Configuration initialized at {}", Config::default_path()?.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            config.save()?;
            println!("Set {key} = {value}");
        }
    }
    Ok(())
}
