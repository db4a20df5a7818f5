use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Represents a saved bookmark as it is stored under a variant's storage key.
///
/// Fields this crate does not know about are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub page_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Bookmark {
    /// Builds a bookmark for `url` from freshly extracted page metadata.
    pub fn from_metadata(url: &str, metadata: PageMetadata) -> Self {
        Self {
            id: None,
            url: url.to_string(),
            page_title: metadata.page_title,
            meta_description: metadata.meta_description,
            preview_img: metadata.preview_img,
            updated_at: None,
            extra: Map::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Metadata extracted from a page's HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    #[serde(default)]
    pub page_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_img: Option<String>,
}

/// Fields an edit may change. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkChanges {
    pub page_title: Option<String>,
    pub meta_description: Option<String>,
}

/// Addresses one bookmark, either by its stable id or by its position in the
/// stored (insertion-order) array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkRef {
    Id(String),
    Index(usize),
}

impl BookmarkRef {
    /// Returns the position of the referenced bookmark in `bookmarks`, if any.
    pub fn locate(&self, bookmarks: &[Bookmark]) -> Option<usize> {
        match self {
            BookmarkRef::Id(id) => bookmarks
                .iter()
                .position(|b| b.id.as_deref() == Some(id.as_str())),
            BookmarkRef::Index(index) => (*index < bookmarks.len()).then_some(*index),
        }
    }
}

impl std::fmt::Display for BookmarkRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookmarkRef::Id(id) => write!(f, "{}", id),
            BookmarkRef::Index(index) => write!(f, "{}", index),
        }
    }
}
