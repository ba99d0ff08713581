use clap::Subcommand;
use mindset_core::error::ConfigError;
use mindset_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting (e.g. "server.port", "display.recent_limit")
    Get { key: String },
    /// Change one setting and save the file
    Set { key: String, value: String },
    /// Print every setting as `key = value`
    List,
    /// Print the config file location
    Path,
    /// Overwrite the file with defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::read()?
                .get(&key)
                .ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            tracing::info!(%key, %value, "config updated");
        }
        ConfigAction::List => {
            for (key, value) in Config::read()?.entries() {
                println!("{key} = {value}");
            }
        }
        ConfigAction::Path => {
            let path = Config::path();
            let note = if path.exists() { "" } else { " (not created yet)" };
            println!("{}{note}", path.display());
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            tracing::info!(path = %Config::path().display(), "config reset to defaults");
        }
    }
    Ok(())
}
