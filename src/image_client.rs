use reqwest::Client;
use std::path::Path;

use crate::error::ImageError;

/// Fetches avatar, cover and icon images. Accepts `http(s)://` URLs,
/// `file://` URLs and plain filesystem paths.
#[derive(Clone)]
pub struct ImageClient {
    client: Client,
}

impl ImageClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("gameshelf/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }

    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            let response = self.client.get(url).send().await?;
            if !response.status().is_success() {
                return Err(ImageError::Status(response.status().as_u16()));
            }
            let bytes = response.bytes().await?;
            return Ok(bytes.to_vec());
        }

        let path = url.strip_prefix("file://").unwrap_or(url);
        Ok(tokio::fs::read(Path::new(path)).await?)
    }
}

impl Default for ImageClient {
    fn default() -> Self {
        Self::new()
    }
}
