use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::deck::FeatureLevel;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "osijourney";

pub const KEYS: &[&str] = &["defaults.level", "defaults.autoplay", "defaults.start_slide"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// `base`, `large` or `info`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// `on` or `off`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<String>,

    /// 1-indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<usize>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `osijourney config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;
        Ok(config)
    }

    /// A missing file is an empty config; unreadable or malformed files are errors.
    pub fn load_existing(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_or_default() -> Self {
        match Self::path().and_then(|path| Self::load_existing(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring config: {e}");
                Self::default()
            }
        }
    }

    /// Update one key in the file at `path`, leaving it untouched on any error.
    pub fn set_in(path: &Path, key: &str, value: &str) -> Result<()> {
        let mut config = Self::load_existing(path)?;
        config.set(key, value)?;
        config.save_to(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# osijourney configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.level" => {
                if FeatureLevel::from_name(value).is_none() {
                    let names: Vec<_> = FeatureLevel::all().iter().map(|l| l.name()).collect();
                    anyhow::bail!("Invalid level: {value}. Must be one of: {}.", names.join(", "));
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .level = Some(value.to_string());
            }
            "defaults.autoplay" => {
                match value {
                    "on" | "off" => {}
                    _ => anyhow::bail!("Invalid autoplay: {value}. Must be 'on' or 'off'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .autoplay = Some(value.to_string());
            }
            "defaults.start_slide" => {
                let slide = match value.parse::<usize>() {
                    Ok(n) if n >= 1 => n,
                    _ => anyhow::bail!(
                        "Invalid start_slide: {value}. Must be a slide number starting at 1."
                    ),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_slide = Some(slide);
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_known_keys() {
        let mut config = Config::default();
        config.set("defaults.level", "large").unwrap();
        config.set("defaults.autoplay", "on").unwrap();
        config.set("defaults.start_slide", "4").unwrap();
        let defaults = config.defaults.unwrap();
        assert_eq!(defaults.level.as_deref(), Some("large"));
        assert_eq!(defaults.autoplay.as_deref(), Some("on"));
        assert_eq!(defaults.start_slide, Some(4));
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::default();
        let err = config.set("defaults.theme", "dark").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.level", "huge").is_err());
        assert!(config.set("defaults.autoplay", "yes").is_err());
        assert!(config.set("defaults.start_slide", "0").is_err());
        assert!(config.set("defaults.start_slide", "first").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.level", "base").unwrap();
        config.set("defaults.start_slide", "7").unwrap();
        config.save_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# osijourney configuration"));
        assert!(!contents.contains("autoplay"));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_has_helpful_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join(FILENAME)).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }

    #[test]
    fn test_missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_existing(&dir.path().join(FILENAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_in_keeps_existing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        std::fs::write(&path, "defaults:\n  level: base\n  start_slide: 5\n").unwrap();

        Config::set_in(&path, "defaults.autoplay", "on").unwrap();

        let defaults = Config::load_from(&path).unwrap().defaults.unwrap();
        assert_eq!(defaults.level.as_deref(), Some("base"));
        assert_eq!(defaults.start_slide, Some(5));
        assert_eq!(defaults.autoplay.as_deref(), Some("on"));
    }

    #[test]
    fn test_set_in_refuses_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        let broken = "defaults: {level: base, start_slide: 5, autoplay: [oops\n";
        std::fs::write(&path, broken).unwrap();

        let err = Config::set_in(&path, "defaults.autoplay", "on").unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_set_in_rejects_bad_value_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        assert!(Config::set_in(&path, "defaults.level", "huge").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_defaults_parse() {
        let config: Config = serde_yaml::from_str("defaults: {}\n").unwrap();
        assert_eq!(config.defaults, Some(DefaultsConfig::default()));
    }
}
