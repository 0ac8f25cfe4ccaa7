use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player_name: String,
    pub thinking_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            thinking_delay_ms: 1500,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.player_name.trim().is_empty() {
            return Err("Player name must not be empty".to_string());
        }
        if self.thinking_delay_ms > 10_000 {
            return Err(format!(
                "Thinking delay ({} ms) must be at most 10000 ms",
                self.thinking_delay_ms
            ));
        }
        Ok(())
    }
}

/// Loads a yaml config file once and caches it. A missing file is not an
/// error; it falls back to the default config.
pub struct ConfigManager<TConfig = Config>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    file_path: PathBuf,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            file_path: PathBuf::from(file_path),
            config: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if !self.file_path.exists() {
            return Ok(TConfig::default());
        }

        let content = std::fs::read_to_string(&self.file_path)
            .map_err(|e| format!("Failed to read config file {}: {}", self.file_path.display(), e))?;
        let config: TConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", self.file_path.display(), e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(&self.file_path, serialized)
            .map_err(|e| format!("Failed to write config file {}: {}", self.file_path.display(), e))?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.thinking_delay_ms, 1500);
    }

    #[test]
    fn test_rejects_empty_player_name() {
        let config = Config {
            player_name: "   ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_delay() {
        let config = Config {
            thinking_delay_ms: 60_000,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let manager: ConfigManager = ConfigManager::from_yaml_file("no_such_rps_config.yaml");
        let config = manager.get_config().unwrap();
        assert_eq!(config.player_name, "Player");
    }

    #[test]
    fn test_config_file_round_trip() {
        let path = std::env::temp_dir().join("rps_config_round_trip.yaml");
        let path_str = path.to_str().unwrap().to_string();

        let manager: ConfigManager = ConfigManager::from_yaml_file(&path_str);
        let config = Config {
            player_name: "Tester".to_string(),
            thinking_delay_ms: 500,
        };
        manager.set_config(&config).unwrap();

        let reloaded_manager: ConfigManager = ConfigManager::from_yaml_file(&path_str);
        let reloaded = reloaded_manager.get_config().unwrap();
        assert_eq!(reloaded.player_name, "Tester");
        assert_eq!(reloaded.thinking_delay_ms, 500);

        let _ = std::fs::remove_file(&path);
    }
}
