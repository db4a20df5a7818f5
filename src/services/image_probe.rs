//! Preview image load probe.
//!
//! Stands in for loading the image in the page: a probe either "loads" or
//! "errors", nothing in between.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

/// Trait defining the image load check.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    /// Returns `true` if `src` loads as an image. An absent source never loads.
    async fn loads(&self, src: Option<&str>) -> bool;
}

/// Probes images with an HTTP GET.
pub struct HttpImageProbe {
    client: Client,
}

impl HttpImageProbe {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn loads(&self, src: Option<&str>) -> bool {
        let Some(src) = src else {
            return false;
        };
        let Ok(target) = Url::parse(src) else {
            tracing::debug!(%src, "preview image is not an absolute URL");
            return false;
        };

        match self.client.get(target).send().await {
            Ok(response) => {
                let is_image = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .map(|value| value.starts_with("image/"))
                    .unwrap_or(false);
                response.status().is_success() && is_image
            }
            Err(e) => {
                tracing::debug!(%src, error = %e, "preview image failed to load");
                false
            }
        }
    }
}
