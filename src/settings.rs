use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use crate::i18n::DEFAULT_LANGUAGE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Theme {
    Dark,
    Light,
    #[default]
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: String,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            theme: Theme::System,
        }
    }
}

impl Settings {
    pub async fn load(config_dir: &PathBuf) -> Self {
        let path = config_dir.join("settings.json");
        if let Ok(content) = fs::read_to_string(&path).await {
            serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("settings.json is malformed, using defaults: {}", e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    pub async fn save(&self, config_dir: &PathBuf) -> Result<(), std::io::Error> {
        let path = config_dir.join("settings.json");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(self).unwrap_or_default();
        fs::write(path, json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_through_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("nested");
        let settings = Settings {
            language: "pt-BR".into(),
            theme: Theme::Dark,
        };
        settings.save(&config_dir).await.unwrap();
        assert_eq!(Settings::load(&config_dir).await, settings);
    }

    #[tokio::test]
    async fn partial_and_malformed_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().to_path_buf();

        std::fs::write(config_dir.join("settings.json"), r#"{"theme": "Light"}"#).unwrap();
        let partial = Settings::load(&config_dir).await;
        assert_eq!(partial.theme, Theme::Light);
        assert_eq!(partial.language, "en");

        std::fs::write(config_dir.join("settings.json"), "[]").unwrap();
        assert_eq!(Settings::load(&config_dir).await, Settings::default());
    }
}
