//! Sources of page metadata for the submission handler.
//!
//! The widget normally calls the HTTP endpoint ([`EndpointClient`]); the
//! extractor can also be used in-process.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::services::metadata_extractor::MetadataExtractor;
use crate::types::bookmark::PageMetadata;
use crate::types::errors::ExtractError;

/// Path of the metadata function relative to the site root.
pub const FUNCTION_PATH: &str = ".netlify/functions/get-bookmark-data";

/// Trait defining metadata lookup for a submitted URL.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// `Ok(None)` means the call completed without a usable response.
    async fn lookup(&self, url: &str) -> Result<Option<PageMetadata>, ExtractError>;
}

#[async_trait]
impl MetadataSource for MetadataExtractor {
    async fn lookup(&self, url: &str) -> Result<Option<PageMetadata>, ExtractError> {
        self.fetch_metadata(url).await
    }
}

/// Calls `GET <base>/.netlify/functions/get-bookmark-data?url=<url>`.
pub struct EndpointClient {
    client: Client,
    endpoint: Url,
}

impl EndpointClient {
    /// `base_url` is the site root, e.g. `https://linkstack.example/`.
    pub fn new(client: Client, base_url: &str) -> Result<Self, ExtractError> {
        let base = Url::parse(base_url)
            .map_err(|e| ExtractError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let endpoint = base
            .join(FUNCTION_PATH)
            .map_err(|e| ExtractError::InvalidUrl(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl MetadataSource for EndpointClient {
    async fn lookup(&self, url: &str) -> Result<Option<PageMetadata>, ExtractError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| ExtractError::NetworkError(e.to_string()))?;

        // Only a 200 carries a body; 204 is the endpoint's "upstream refused".
        if response.status() != StatusCode::OK {
            tracing::warn!(
                %url,
                status = response.status().as_u16(),
                "metadata endpoint gave no usable response"
            );
            return Ok(None);
        }

        let metadata = response
            .json::<PageMetadata>()
            .await
            .map_err(|e| ExtractError::BodyError(e.to_string()))?;
        Ok(Some(metadata))
    }
}
