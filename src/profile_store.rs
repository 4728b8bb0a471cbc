//! Profile JSON file used by the desktop host as loader and update target.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::error::{ProfileStoreError, SessionError};
use crate::models::{ProfileUpdate, UserProfile};
use crate::session::ProfileUpdater;

#[derive(Debug, Clone)]
pub struct ProfileFile {
    path: PathBuf,
}

impl ProfileFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<UserProfile, ProfileStoreError> {
        let content = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn apply(&self, update: &ProfileUpdate) -> Result<(), ProfileStoreError> {
        let mut profile = self.load().await?;
        profile.display_name = update.display_name.clone();
        let staged = self.staging_path();
        fs::write(&staged, serde_json::to_string_pretty(&profile)?).await?;
        if let Err(e) = fs::rename(&staged, &self.path).await {
            let _ = fs::remove_file(&staged).await;
            return Err(e.into());
        }
        Ok(())
    }

    /// Sibling file the next version is written to before it replaces `path`.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ProfileUpdater for ProfileFile {
    async fn update_profile(&self, update: ProfileUpdate) -> Result<(), SessionError> {
        self.apply(&update).await.map_err(|e| match e {
            ProfileStoreError::Io(io) => SessionError::Io(io),
            ProfileStoreError::Json(json) => SessionError::Json(json),
        })?;
        log::info!("display name changed to {:?}", update.display_name);
        Ok(())
    }
}
