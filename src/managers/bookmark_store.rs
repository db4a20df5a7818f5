//! Bookmark Store for Linkstack.
//!
//! Implements `BookmarkStoreTrait`: CRUD over the JSON array stored under one
//! variant's storage key.

use std::fmt::Display;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::services::change_bus::{ChangeBus, StorageChange};
use crate::services::local_storage::LocalStorage;
use crate::types::bookmark::{Bookmark, BookmarkChanges, BookmarkRef};
use crate::types::errors::BookmarkError;
use crate::types::variant::IdentifierStrategy;

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    /// `None` when nothing was ever stored under the key.
    fn list(&self) -> Result<Option<Vec<Bookmark>>, BookmarkError>;
    fn get(&self, target: &BookmarkRef) -> Result<Bookmark, BookmarkError>;
    fn add(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError>;
    fn update(
        &self,
        target: &BookmarkRef,
        changes: BookmarkChanges,
    ) -> Result<Bookmark, BookmarkError>;
    /// Returns the bookmarks left after removal.
    fn remove(&self, target: &BookmarkRef) -> Result<Vec<Bookmark>, BookmarkError>;
}

/// Bookmark store bound to one storage key.
pub struct BookmarkStore {
    key: String,
    strategy: IdentifierStrategy,
    storage: Arc<dyn LocalStorage>,
    bus: ChangeBus,
}

impl BookmarkStore {
    pub fn new(
        key: &str,
        strategy: IdentifierStrategy,
        storage: Arc<dyn LocalStorage>,
        bus: ChangeBus,
    ) -> Self {
        Self {
            key: key.to_string(),
            strategy,
            storage,
            bus,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn strategy(&self) -> IdentifierStrategy {
        self.strategy
    }

    /// Current time as an ISO-8601 UTC string with milliseconds.
    fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn storage_error(context: &str, err: impl Display) -> BookmarkError {
        BookmarkError::StorageError(format!("{}: {}", context, err))
    }

    /// Parses the stored array.
    ///
    /// Under `StableId`, rows stored without an id are given one and the
    /// array is written back, so every listed bookmark can be addressed.
    fn read(&self, context: &str) -> Result<Option<Vec<Bookmark>>, BookmarkError> {
        let raw = self
            .storage
            .get_item(&self.key)
            .map_err(|e| Self::storage_error(context, e))?;

        let Some(raw) = raw else {
            return Ok(None);
        };
        let mut bookmarks: Vec<Bookmark> =
            serde_json::from_str(&raw).map_err(|e| Self::storage_error(context, e))?;

        if self.strategy == IdentifierStrategy::StableId {
            let mut assigned = 0;
            for bookmark in bookmarks.iter_mut().filter(|b| b.id.is_none()) {
                bookmark.id = Some(Uuid::new_v4().to_string());
                assigned += 1;
            }
            if assigned > 0 {
                self.write(context, &bookmarks)?;
                tracing::info!(key = %self.key, assigned, "assigned ids to stored bookmarks");
            }
        }
        Ok(Some(bookmarks))
    }

    fn write(&self, context: &str, bookmarks: &[Bookmark]) -> Result<(), BookmarkError> {
        let raw =
            serde_json::to_string(bookmarks).map_err(|e| Self::storage_error(context, e))?;
        self.storage
            .set_item(&self.key, &raw)
            .map_err(|e| Self::storage_error(context, e))
    }

    /// Rejects references that do not match the identifier strategy.
    fn check_ref(&self, target: &BookmarkRef) -> Result<(), BookmarkError> {
        match (self.strategy, target) {
            (IdentifierStrategy::StableId, BookmarkRef::Id(_))
            | (IdentifierStrategy::Position, BookmarkRef::Index(_)) => Ok(()),
            (IdentifierStrategy::StableId, BookmarkRef::Index(index)) => Err(
                BookmarkError::InvalidReference(format!("expected an id, got index {}", index)),
            ),
            (IdentifierStrategy::Position, BookmarkRef::Id(id)) => Err(
                BookmarkError::InvalidReference(format!("expected an index, got id {}", id)),
            ),
        }
    }

    /// Reads the array and finds `target` in it.
    fn locate(
        &self,
        context: &str,
        target: &BookmarkRef,
    ) -> Result<(Vec<Bookmark>, usize), BookmarkError> {
        self.check_ref(target)?;
        let bookmarks = self.read(context)?.unwrap_or_default();
        let index = target
            .locate(&bookmarks)
            .ok_or_else(|| BookmarkError::NotFound(target.to_string()))?;
        Ok((bookmarks, index))
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    fn list(&self) -> Result<Option<Vec<Bookmark>>, BookmarkError> {
        self.read("Error reading bookmarks")
    }

    fn get(&self, target: &BookmarkRef) -> Result<Bookmark, BookmarkError> {
        let (mut bookmarks, index) = self.locate("Error getting bookmark data", target)?;
        Ok(bookmarks.swap_remove(index))
    }

    /// Appends a bookmark and publishes it on the change bus.
    ///
    /// Under `StableId` a bookmark without an id gets a fresh UUID.
    fn add(&self, mut bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        const CONTEXT: &str = "Error adding item to storage";

        if self.strategy == IdentifierStrategy::StableId && bookmark.id.is_none() {
            bookmark.id = Some(Uuid::new_v4().to_string());
        }

        let mut bookmarks = self.read(CONTEXT)?.unwrap_or_default();
        bookmarks.push(bookmark.clone());
        self.write(CONTEXT, &bookmarks)?;

        self.bus.publish(StorageChange {
            key: self.key.clone(),
            new_value: serde_json::to_value(&bookmark).ok(),
        });

        tracing::info!(key = %self.key, url = %bookmark.url, "bookmark added");
        Ok(bookmark)
    }

    /// Merges `changes` into the bookmark and stamps `updated_at`.
    fn update(
        &self,
        target: &BookmarkRef,
        changes: BookmarkChanges,
    ) -> Result<Bookmark, BookmarkError> {
        const CONTEXT: &str = "Error saving bookmark changes";

        let (mut bookmarks, index) = self.locate(CONTEXT, target)?;
        let bookmark = &mut bookmarks[index];
        if let Some(title) = changes.page_title {
            bookmark.page_title = title;
        }
        if let Some(description) = changes.meta_description {
            bookmark.meta_description = Some(description);
        }
        bookmark.updated_at = Some(Self::now());
        let updated = bookmark.clone();

        self.write(CONTEXT, &bookmarks)?;
        tracing::info!(key = %self.key, target = %target, "bookmark updated");
        Ok(updated)
    }

    fn remove(&self, target: &BookmarkRef) -> Result<Vec<Bookmark>, BookmarkError> {
        const CONTEXT: &str = "Error deleting bookmark";

        let (mut bookmarks, index) = self.locate(CONTEXT, target)?;
        bookmarks.remove(index);
        self.write(CONTEXT, &bookmarks)?;

        tracing::info!(
            key = %self.key,
            target = %target,
            remaining = bookmarks.len(),
            "bookmark removed"
        );
        Ok(bookmarks)
    }
}
