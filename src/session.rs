//! Viewer session and profile update capabilities.

use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;
use tokio::fs;

use crate::error::SessionError;
use crate::models::{CurrentViewer, ProfileUpdate};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The signed-in viewer, if any.
    fn current_viewer(&self) -> Option<CurrentViewer>;

    async fn sign_out(&self) -> Result<(), SessionError>;
}

#[async_trait]
pub trait ProfileUpdater: Send + Sync {
    async fn update_profile(&self, update: ProfileUpdate) -> Result<(), SessionError>;
}

/// Session persisted as `session.json` in the config directory.
#[derive(Debug)]
pub struct LocalSession {
    path: Option<PathBuf>,
    viewer: RwLock<Option<CurrentViewer>>,
}

impl LocalSession {
    /// In-memory session that is never written to disk.
    pub fn ephemeral(viewer: Option<CurrentViewer>) -> Self {
        Self {
            path: None,
            viewer: RwLock::new(viewer),
        }
    }

    pub async fn load(config_dir: &PathBuf) -> Self {
        let path = config_dir.join("session.json");
        let viewer = match fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| log::warn!("ignoring unreadable session file: {}", e))
                .ok(),
            Err(_) => None,
        };
        Self {
            path: Some(path),
            viewer: RwLock::new(viewer),
        }
    }

    pub async fn sign_in(&self, viewer: CurrentViewer) -> Result<(), SessionError> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::write(path, serde_json::to_string_pretty(&viewer)?).await?;
        }
        self.replace(Some(viewer));
        Ok(())
    }

    fn replace(&self, viewer: Option<CurrentViewer>) {
        match self.viewer.write() {
            Ok(mut slot) => *slot = viewer,
            Err(poisoned) => *poisoned.into_inner() = viewer,
        }
    }
}

#[async_trait]
impl SessionStore for LocalSession {
    fn current_viewer(&self) -> Option<CurrentViewer> {
        self.viewer.read().ok().and_then(|viewer| viewer.clone())
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        if self.current_viewer().is_none() {
            return Err(SessionError::NotSignedIn);
        }
        if let Some(path) = &self.path {
            match fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        self.replace(None);
        log::info!("signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(id: &str) -> CurrentViewer {
        CurrentViewer {
            id: id.into(),
            profile_background: None,
        }
    }

    #[tokio::test]
    async fn sign_in_persists_and_sign_out_removes() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().to_path_buf();

        let session = LocalSession::load(&config_dir).await;
        assert!(session.current_viewer().is_none());

        session.sign_in(viewer("u1")).await.unwrap();
        let reloaded = LocalSession::load(&config_dir).await;
        assert_eq!(reloaded.current_viewer().map(|v| v.id), Some("u1".to_string()));

        reloaded.sign_out().await.unwrap();
        assert!(reloaded.current_viewer().is_none());
        assert!(!config_dir.join("session.json").exists());
    }

    #[tokio::test]
    async fn sign_out_without_session_fails() {
        let session = LocalSession::ephemeral(None);
        let err = session.sign_out().await.unwrap_err();
        assert!(matches!(err, SessionError::NotSignedIn));
    }

    #[tokio::test]
    async fn corrupt_session_file_means_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("session.json"), "{not json").unwrap();
        let session = LocalSession::load(&dir.path().to_path_buf()).await;
        assert!(session.current_viewer().is_none());
    }
}
