use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::config::{ConsoleConfig, LogConfig, MigrationsConfig};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub migrations: MigrationsConfig,

    #[serde(default)]
    pub console: ConsoleConfig,

    #[serde(default)]
    pub logs: LogConfig,
}

fn get_env_file_name() -> String {
    if let Ok(env_file) = std::env::var("MIGCAT_ENV_FILE") {
        return env_file;
    }
    match std::env::var("MIGCAT_ENV")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "dev" => ".env.dev".to_string(),
        "test" => ".env.test".to_string(),
        _ => ".env".to_string(),
    }
}

impl Settings {
    /// Loads the optional `.env` file, then reads `MIGCAT__<SECTION>__<KEY>`
    /// variables on top of the built-in defaults.
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::from_filename(get_env_file_name()).ok();

        let settings = Config::builder()
            .add_source(
                Environment::with_prefix("MIGCAT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn print_config(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Failed to serialize settings: {}", err),
        }
    }
}
