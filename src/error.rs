use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no active session")]
    NotSignedIn,
    #[error("session storage failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid session data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid translation bundle: {0}")]
    Json(#[from] serde_json::Error),
    #[error("namespace `{0}` not found in bundle")]
    MissingNamespace(String),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("image server returned {0}")]
    Status(u16),
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("failed to access profile file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed profile file: {0}")]
    Json(#[from] serde_json::Error),
}
