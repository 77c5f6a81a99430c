//! Handles settings for the application. Configuration is written in
//! `settings.toml`; every field has a default, so the file is optional and
//! command-line flags override it.

use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path of the JSON snapshot file.
    pub store: String,
    /// Log level for the env filter.
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store: "splittab.json".to_string(),
            level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .build()?;

        settings.try_deserialize()
    }
}
