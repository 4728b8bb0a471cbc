// config.rs - Directory layout and file system setup

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

const APP_DIR: &str = "gameshelf";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub config_dir: PathBuf,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let config_root = dirs::config_dir().context("could not determine the user config directory")?;

        Ok(Self {
            config_dir: config_root.join(APP_DIR),
        })
    }

    pub fn default_profile_path(&self) -> PathBuf {
        self.config_dir.join("profile.json")
    }

    pub async fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.config_dir)
            .await
            .with_context(|| format!("creating {}", self.config_dir.display()))?;
        Ok(())
    }
}
