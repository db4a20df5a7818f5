//! Metadata Extractor for Linkstack.
//!
//! Fetches a page and pulls its title, description and preview image out of
//! the HTML. Stateless: one GET per call, no retries, no caching.

use std::time::Duration;

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::types::bookmark::PageMetadata;
use crate::types::errors::ExtractError;
use crate::types::settings::HttpSettings;

/// Extracts page metadata from an HTML document.
///
/// `og:image` wins over `twitter:image`; an empty `content` counts as absent.
pub fn extract_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let page_title = select_first(&document, "title")
        .map(|title| title.text().collect::<String>().trim().to_string())
        .unwrap_or_default();
    let meta_description = select_attr(&document, r#"meta[name="description"]"#, "content");
    let og_image = select_attr(&document, r#"meta[property="og:image"]"#, "content")
        .filter(|src| !src.is_empty());
    let twitter_image = select_attr(&document, r#"meta[name="twitter:image"]"#, "content")
        .filter(|src| !src.is_empty());

    PageMetadata {
        page_title,
        meta_description,
        preview_img: og_image.or(twitter_image),
    }
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

fn select_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    select_first(document, selector)
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

/// Builds the outbound HTTP client from settings.
pub fn build_client(settings: &HttpSettings) -> Result<Client, ExtractError> {
    let mut builder = Client::builder().user_agent(settings.user_agent.clone());
    if let Some(secs) = settings.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| ExtractError::NetworkError(e.to_string()))
}

/// Fetches pages over HTTP and extracts their metadata.
#[derive(Clone)]
pub struct MetadataExtractor {
    client: Client,
}

impl MetadataExtractor {
    pub fn new(settings: &HttpSettings) -> Result<Self, ExtractError> {
        Ok(Self {
            client: build_client(settings)?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and extracts its metadata.
    ///
    /// Returns `Ok(None)` when the upstream answers with a non-2xx status:
    /// there is no usable body and callers must treat that as a failure.
    pub async fn fetch_metadata(&self, url: &str) -> Result<Option<PageMetadata>, ExtractError> {
        let target =
            Url::parse(url).map_err(|e| ExtractError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| ExtractError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "upstream returned non-success status");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExtractError::BodyError(e.to_string()))?;

        Ok(Some(extract_metadata(&body)))
    }
}
