//! List Renderer for Linkstack.
//!
//! Turns the stored bookmark array into the view a host draws: newest first,
//! one entry per bookmark, or the empty-state template.

use crate::types::bookmark::{Bookmark, BookmarkRef};
use crate::types::render::{EntryAction, RenderedEntry, RenderedView};
use crate::types::variant::{Affordances, IdentifierStrategy};

/// Holds the current view for one widget.
pub struct ListRenderer {
    strategy: IdentifierStrategy,
    affordances: Affordances,
    view: RenderedView,
}

impl ListRenderer {
    pub fn new(strategy: IdentifierStrategy, affordances: Affordances) -> Self {
        Self {
            strategy,
            affordances,
            view: RenderedView::Empty,
        }
    }

    pub fn view(&self) -> &RenderedView {
        &self.view
    }

    /// Discards the current view and rebuilds it from `stored`.
    ///
    /// `stored` is in insertion order; `None` and an empty slice both give
    /// the empty state.
    pub fn render(&mut self, stored: Option<&[Bookmark]>) -> &RenderedView {
        self.view = match stored {
            Some(bookmarks) if !bookmarks.is_empty() => {
                let entries: Vec<RenderedEntry> = bookmarks
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(position, bookmark)| self.entry_for(position, bookmark))
                    .collect();
                RenderedView::List {
                    multiple: entries.len() > 1,
                    entries,
                }
            }
            _ => RenderedView::Empty,
        };
        tracing::debug!(entries = self.view.entries().len(), "rendered bookmark list");
        &self.view
    }

    /// Replaces title and description of one entry in place.
    /// Returns `false` if the entry is not shown.
    pub fn update_entry(&mut self, target: &BookmarkRef, title: &str, description: &str) -> bool {
        let RenderedView::List { entries, .. } = &mut self.view else {
            return false;
        };
        match entries.iter_mut().find(|entry| &entry.target == target) {
            Some(entry) => {
                entry.title = title.to_string();
                entry.description = description.to_string();
                true
            }
            None => false,
        }
    }

    /// Drops one entry; switches to the empty state when none remain.
    /// Returns `false` if the entry is not shown.
    pub fn remove_entry(&mut self, target: &BookmarkRef) -> bool {
        let RenderedView::List { entries, multiple } = &mut self.view else {
            return false;
        };
        let before = entries.len();
        entries.retain(|entry| &entry.target != target);
        let removed = entries.len() != before;

        if entries.is_empty() {
            self.view = RenderedView::Empty;
        } else {
            *multiple = entries.len() > 1;
        }
        removed
    }

    fn entry_for(&self, position: usize, bookmark: &Bookmark) -> RenderedEntry {
        let (target, addressable) = match (self.strategy, &bookmark.id) {
            (IdentifierStrategy::StableId, Some(id)) => (BookmarkRef::Id(id.clone()), true),
            (IdentifierStrategy::StableId, None) => (BookmarkRef::Index(position), false),
            (IdentifierStrategy::Position, _) => (BookmarkRef::Index(position), true),
        };

        // The store only accepts ids under `StableId`.
        let mut actions = Vec::new();
        if addressable && self.affordances.edit {
            actions.push(EntryAction::Edit);
        }
        if addressable && self.affordances.delete {
            actions.push(EntryAction::Delete);
        }

        RenderedEntry {
            element_id: format!("bookmark-entry-{}", target),
            target,
            preview_img: bookmark.preview_img.clone(),
            href: bookmark.url.clone(),
            title: bookmark.page_title.clone(),
            description: bookmark.meta_description.clone().unwrap_or_default(),
            actions,
        }
    }
}
