use serde::{Deserialize, Serialize};

use super::bookmark::BookmarkRef;

/// What the list currently shows. Serialized for the host that draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedView {
    /// The "no bookmarks yet" template.
    Empty,
    List {
        entries: Vec<RenderedEntry>,
        /// Set when more than one entry is shown; drives the multi-column layout.
        multiple: bool,
    },
}

impl RenderedView {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderedView::Empty)
    }

    pub fn entries(&self) -> &[RenderedEntry] {
        match self {
            RenderedView::Empty => &[],
            RenderedView::List { entries, .. } => entries,
        }
    }
}

/// One displayed bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedEntry {
    /// Element id, `bookmark-entry-<key>`.
    pub element_id: String,
    pub target: BookmarkRef,
    pub preview_img: Option<String>,
    pub href: String,
    pub title: String,
    pub description: String,
    pub actions: Vec<EntryAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryAction {
    Edit,
    Delete,
}

/// Pre-filled contents of the edit dialog.
///
/// `target` is flattened, so the form reads `{"id": ...}` or `{"index": ...}`
/// next to the title and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditForm {
    #[serde(flatten)]
    pub target: BookmarkRef,
    pub title: String,
    pub description: String,
}
