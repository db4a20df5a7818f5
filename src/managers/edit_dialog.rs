//! Edit Dialog for Linkstack.
//!
//! Opens pre-filled from a stored bookmark and writes changes back, updating
//! the rendered entry directly instead of re-rendering the whole list.

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::managers::list_renderer::ListRenderer;
use crate::types::bookmark::{Bookmark, BookmarkChanges, BookmarkRef};
use crate::types::errors::BookmarkError;
use crate::types::render::EditForm;

#[derive(Default)]
pub struct EditDialog {
    form: Option<EditForm>,
}

impl EditDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Option<&EditForm> {
        self.form.as_ref()
    }

    /// Opens the dialog for the bookmark at `target`.
    pub fn open(
        &mut self,
        store: &BookmarkStore,
        target: &BookmarkRef,
    ) -> Result<&EditForm, BookmarkError> {
        let bookmark = store.get(target)?;
        let form = self.form.insert(EditForm {
            target: target.clone(),
            title: bookmark.page_title,
            description: bookmark.meta_description.unwrap_or_default(),
        });
        Ok(form)
    }

    pub fn close(&mut self) {
        self.form = None;
    }

    /// Persists `form` and refreshes the matching entry in `renderer`.
    ///
    /// Fails with `NotFound` if the bookmark disappeared since the dialog
    /// opened; storage is left untouched and the dialog stays open.
    pub fn save(
        &mut self,
        store: &BookmarkStore,
        renderer: &mut ListRenderer,
        form: EditForm,
    ) -> Result<Bookmark, BookmarkError> {
        let updated = store.update(
            &form.target,
            BookmarkChanges {
                page_title: Some(form.title.clone()),
                meta_description: Some(form.description.clone()),
            },
        )?;

        renderer.update_entry(&form.target, &form.title, &form.description);
        self.close();
        Ok(updated)
    }
}
