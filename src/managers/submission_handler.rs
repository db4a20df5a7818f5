//! Submission Handler for Linkstack.
//!
//! Drives one form submission: metadata lookup, preview image probe, store
//! append. States move `Idle → Fetching → ResolvingImage → Idle`.

use std::sync::Arc;

use serde::Serialize;

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::services::image_probe::ImageProbe;
use crate::services::metadata_client::MetadataSource;
use crate::types::bookmark::Bookmark;
use crate::types::errors::SubmissionError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Fetching { url: String },
    ResolvingImage { url: String },
}

pub struct SubmissionHandler {
    metadata: Arc<dyn MetadataSource>,
    probe: Arc<dyn ImageProbe>,
    fallback_image: String,
    state: SubmissionState,
}

impl SubmissionHandler {
    pub fn new(
        metadata: Arc<dyn MetadataSource>,
        probe: Arc<dyn ImageProbe>,
        fallback_image: &str,
    ) -> Self {
        Self {
            metadata,
            probe,
            fallback_image: fallback_image.to_string(),
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Looks up `url`, resolves its preview image and appends the bookmark to `store`.
    ///
    /// On a failed lookup nothing is stored and the caller should keep the
    /// form as is. On success the caller resets the form.
    pub async fn submit(
        &mut self,
        store: &BookmarkStore,
        url: &str,
    ) -> Result<Bookmark, SubmissionError> {
        let result = self.run(store, url).await;
        self.state = SubmissionState::Idle;
        result
    }

    async fn run(&mut self, store: &BookmarkStore, url: &str) -> Result<Bookmark, SubmissionError> {
        self.state = SubmissionState::Fetching {
            url: url.to_string(),
        };

        let metadata = match self.metadata.lookup(url).await {
            Ok(Some(metadata)) => metadata,
            Ok(None) => {
                return Err(SubmissionError::MetadataUnavailable(format!(
                    "no usable response for {}",
                    url
                )))
            }
            Err(e) => return Err(SubmissionError::MetadataUnavailable(e.to_string())),
        };

        self.state = SubmissionState::ResolvingImage {
            url: url.to_string(),
        };

        let mut bookmark = Bookmark::from_metadata(url, metadata);
        if !self.probe.loads(bookmark.preview_img.as_deref()).await {
            tracing::debug!(%url, "preview image did not load, using fallback");
            bookmark.preview_img = Some(self.fallback_image.clone());
        }

        Ok(store.add(bookmark)?)
    }
}
