use crate::error::{Result, SlipError};
use crate::session::ViewMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_EDITOR_EXT: &str = ".md";

pub const KEYS: [&str; 4] = ["debounce-ms", "editor-ext", "default-view", "seed-welcome"];

/// Configuration for slip, stored in config.json next to the notes file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SlipConfig {
    /// Quiet period before a Markdown edit is committed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Temp-file extension used when editing in $EDITOR
    #[serde(default = "default_editor_ext")]
    pub editor_ext: String,

    /// What `slip view` shows without a flag ("rich", "markdown" or "preview")
    #[serde(default = "default_view")]
    pub default_view: String,

    #[serde(default = "default_seed_welcome")]
    pub seed_welcome: bool,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_editor_ext() -> String {
    DEFAULT_EDITOR_EXT.to_string()
}

fn default_view() -> String {
    ViewMode::Markdown.to_string()
}

fn default_seed_welcome() -> bool {
    true
}

impl Default for SlipConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            editor_ext: default_editor_ext(),
            default_view: default_view(),
            seed_welcome: default_seed_welcome(),
        }
    }
}

impl SlipConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SlipError::Io)?;
        let config: SlipConfig =
            serde_json::from_str(&content).map_err(SlipError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SlipError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(SlipError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(SlipError::Io)?;
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Falls back to Markdown when the stored value is not a view name.
    pub fn view_mode(&self) -> ViewMode {
        self.default_view.parse().unwrap_or(ViewMode::Markdown)
    }

    pub fn get(&self, key: &str) -> std::result::Result<String, String> {
        match key {
            "debounce-ms" => Ok(self.debounce_ms.to_string()),
            "editor-ext" => Ok(self.editor_ext.clone()),
            "default-view" => Ok(self.default_view.clone()),
            "seed-welcome" => Ok(self.seed_welcome.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "debounce-ms" => {
                self.debounce_ms = value
                    .parse()
                    .map_err(|_| format!("debounce-ms must be a whole number, got '{}'", value))?;
            }
            "editor-ext" => {
                self.editor_ext = if value.starts_with('.') {
                    value.to_string()
                } else {
                    format!(".{}", value)
                };
            }
            "default-view" => {
                let mode: ViewMode = value.parse()?;
                self.default_view = mode.to_string();
            }
            "seed-welcome" => {
                self.seed_welcome = value
                    .parse()
                    .map_err(|_| format!("seed-welcome must be true or false, got '{}'", value))?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Every key with its current value, in display order.
    pub fn entries(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .map(|key| (key.to_string(), self.get(key).unwrap_or_default()))
            .collect()
    }
}

fn unknown_key(key: &str) -> String {
    format!("Unknown config key '{}'. Known keys: {}", key, KEYS.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SlipConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.editor_ext, ".md");
        assert_eq!(config.view_mode(), ViewMode::Markdown);
        assert!(config.seed_welcome);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = SlipConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, SlipConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = SlipConfig::default();
        config.set("debounce-ms", "150").unwrap();
        config.set("editor-ext", "markdown").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = SlipConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.debounce_ms, 150);
        assert_eq!(loaded.editor_ext, ".markdown");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"seed-welcome": false}"#).unwrap();
        let loaded = SlipConfig::load(dir.path()).unwrap();
        assert!(!loaded.seed_welcome);
        assert_eq!(loaded.debounce_ms, 300);
    }

    #[test]
    fn test_bad_values_are_messages() {
        let mut config = SlipConfig::default();
        assert!(config.set("debounce-ms", "soon").is_err());
        assert!(config.set("seed-welcome", "maybe").is_err());
        assert!(config.set("default-view", "sideways").is_err());
        assert!(config.set("colour", "red").unwrap_err().contains("Known keys"));
        assert!(config.get("colour").is_err());
        assert_eq!(config, SlipConfig::default());
    }

    #[test]
    fn test_default_view_is_normalized() {
        let mut config = SlipConfig::default();
        config.set("default-view", "TEXT").unwrap();
        assert_eq!(config.get("default-view").unwrap(), "rich");
        assert_eq!(config.view_mode(), ViewMode::Rich);
    }

    #[test]
    fn test_entries_list_every_key() {
        let entries = SlipConfig::default().entries();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, KEYS.to_vec());
    }
}
