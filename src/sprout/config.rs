use crate::error::{Result, SproutError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for sprout, stored next to the plant data in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SproutConfig {
    /// Plant names offered as suggestions by the CLI. Pure convenience:
    /// any non-empty name is accepted when adding a plant.
    #[serde(default = "default_names")]
    pub names: Vec<String>,
}

fn default_names() -> Vec<String> {
    vec![
        "Aloe Vera".to_string(),
        "Snake Plant".to_string(),
        "Pothos".to_string(),
        "Peace Lily".to_string(),
        "Spider Plant".to_string(),
    ]
}

impl Default for SproutConfig {
    fn default() -> Self {
        Self {
            names: default_names(),
        }
    }
}

impl SproutConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SproutError::Io)?;
        let config: SproutConfig =
            serde_json::from_str(&content).map_err(SproutError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SproutError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SproutError::Serialization)?;
        fs::write(config_path, content).map_err(SproutError::Io)?;
        Ok(())
    }

    /// Get a config value by key, formatted for display
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "names" => Some(self.names.join(", ")),
            _ => None,
        }
    }

    /// Set a config value by key. Values for "names" are comma-separated.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "names" => {
                let names: Vec<String> = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if names.is_empty() {
                    return Err("names cannot be empty".to_string());
                }
                self.names = names;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
