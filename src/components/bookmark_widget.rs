//! Bookmark Widget for Linkstack.
//!
//! One component for every variant. The variant's [`VariantConfig`] picks the
//! storage key, identifier strategy, enabled affordances and fallback image.
//! Handler errors are logged and returned to the host.

use std::sync::Arc;

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::managers::edit_dialog::EditDialog;
use crate::managers::list_renderer::ListRenderer;
use crate::managers::submission_handler::{SubmissionHandler, SubmissionState};
use crate::services::change_bus::{ChangeBus, Subscription};
use crate::services::image_probe::ImageProbe;
use crate::services::local_storage::LocalStorage;
use crate::services::metadata_client::MetadataSource;
use crate::types::bookmark::{Bookmark, BookmarkRef};
use crate::types::errors::WidgetError;
use crate::types::render::{EditForm, RenderedView};
use crate::types::variant::{IdentifierStrategy, Variant, VariantConfig};

pub struct BookmarkWidget {
    config: VariantConfig,
    store: BookmarkStore,
    renderer: ListRenderer,
    submission: SubmissionHandler,
    dialog: EditDialog,
    subscription: Subscription,
}

impl BookmarkWidget {
    /// Builds the widget and renders the stored bookmarks once.
    pub fn new(
        config: VariantConfig,
        storage: Arc<dyn LocalStorage>,
        bus: &ChangeBus,
        metadata: Arc<dyn MetadataSource>,
        probe: Arc<dyn ImageProbe>,
    ) -> Result<Self, WidgetError> {
        let store = BookmarkStore::new(
            &config.storage_key,
            config.identifier_strategy,
            storage,
            bus.clone(),
        );
        let renderer = ListRenderer::new(config.identifier_strategy, config.affordances);
        let submission = SubmissionHandler::new(metadata, probe, &config.fallback_image);
        let subscription = bus.subscribe(&config.storage_key);

        let mut widget = Self {
            config,
            store,
            renderer,
            submission,
            dialog: EditDialog::new(),
            subscription,
        };
        widget.render()?;
        Ok(widget)
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn view(&self) -> &RenderedView {
        self.renderer.view()
    }

    pub fn submission_state(&self) -> &SubmissionState {
        self.submission.state()
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.dialog.form()
    }

    /// Stored bookmarks in insertion order; empty when the key is absent.
    pub fn bookmarks(&self) -> Result<Vec<Bookmark>, WidgetError> {
        Ok(self.store.list()?.unwrap_or_default())
    }

    /// Rebuilds the view from storage.
    pub fn render(&mut self) -> Result<&RenderedView, WidgetError> {
        let variant = self.config.variant;
        let stored = report(
            variant,
            "render",
            self.store.list().map_err(WidgetError::from),
        )?;
        Ok(self.renderer.render(stored.as_deref()))
    }

    /// Re-renders if a change for this widget's key was published since the
    /// last call. Returns whether a re-render happened.
    pub fn refresh(&mut self) -> Result<bool, WidgetError> {
        if self.subscription.drain().is_empty() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Submits `url`. The new bookmark reaches the view through the change bus.
    pub async fn handle_submit(&mut self, url: &str) -> Result<Bookmark, WidgetError> {
        let variant = self.config.variant;
        let result = self
            .submission
            .submit(&self.store, url)
            .await
            .map_err(WidgetError::from);
        let bookmark = report(variant, "submit", result)?;
        self.refresh()?;
        Ok(bookmark)
    }

    pub fn handle_delete(
        &mut self,
        target: &BookmarkRef,
    ) -> Result<&RenderedView, WidgetError> {
        let variant = self.config.variant;
        if !self.config.affordances.delete {
            let disabled = WidgetError::AffordanceDisabled("delete".into());
            return report(variant, "delete", Err(disabled));
        }

        let remaining = report(
            variant,
            "delete",
            self.store.remove(target).map_err(WidgetError::from),
        )?;

        // Positions shift after a splice, so index-keyed views are rebuilt.
        let removed_in_place = self.config.identifier_strategy == IdentifierStrategy::StableId
            && !remaining.is_empty()
            && self.renderer.remove_entry(target);
        if !removed_in_place {
            self.renderer.render(Some(remaining.as_slice()));
        }
        Ok(self.renderer.view())
    }

    /// Opens the edit dialog for the bookmark at `target`.
    pub fn handle_edit(&mut self, target: &BookmarkRef) -> Result<&EditForm, WidgetError> {
        let variant = self.config.variant;
        if !self.config.affordances.edit {
            let disabled = WidgetError::AffordanceDisabled("edit".into());
            return report(variant, "edit", Err(disabled));
        }
        report(
            variant,
            "edit",
            self.dialog.open(&self.store, target).map_err(WidgetError::from),
        )
    }

    pub fn save_edit(&mut self, form: EditForm) -> Result<Bookmark, WidgetError> {
        let variant = self.config.variant;
        if !self.config.affordances.edit {
            let disabled = WidgetError::AffordanceDisabled("edit".into());
            return report(variant, "save", Err(disabled));
        }
        let result = self
            .dialog
            .save(&self.store, &mut self.renderer, form)
            .map_err(WidgetError::from);
        report(variant, "save", result)
    }

    pub fn close_edit(&mut self) {
        self.dialog.close();
    }
}

fn report<T>(
    variant: Variant,
    operation: &str,
    result: Result<T, WidgetError>,
) -> Result<T, WidgetError> {
    if let Err(e) = &result {
        tracing::error!(
            variant = variant.name(),
            operation,
            error = %e,
            "bookmark widget operation failed"
        );
    }
    result
}
