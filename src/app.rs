//! App Core for Linkstack.
//!
//! Holds settings, the shared change bus and one widget per variant.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::components::bookmark_widget::BookmarkWidget;
use crate::database::Database;
use crate::platform;
use crate::services::change_bus::ChangeBus;
use crate::services::image_probe::{HttpImageProbe, ImageProbe};
use crate::services::local_storage::{LocalStorage, SqliteStorage};
use crate::services::metadata_client::{EndpointClient, MetadataSource};
use crate::services::metadata_extractor::build_client;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::WidgetError;
use crate::types::variant::{Variant, VariantConfig};

pub struct App {
    pub settings_engine: SettingsEngine,
    pub bus: ChangeBus,
    linkstack: BookmarkWidget,
    thinkstack: BookmarkWidget,
}

impl App {
    /// Creates the app with HTTP-backed metadata lookup and image probing,
    /// as configured by the loaded settings.
    pub fn new(
        settings_engine: SettingsEngine,
        storage: Arc<dyn LocalStorage>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let settings = settings_engine.get_settings();
        let client = build_client(&settings.http)?;
        let metadata = Arc::new(EndpointClient::new(
            client.clone(),
            &settings.endpoint.base_url,
        )?);
        let probe = Arc::new(HttpImageProbe::new(client));
        Ok(Self::with_sources(settings_engine, storage, metadata, probe)?)
    }

    /// Creates the app with explicit metadata and image sources.
    pub fn with_sources(
        settings_engine: SettingsEngine,
        storage: Arc<dyn LocalStorage>,
        metadata: Arc<dyn MetadataSource>,
        probe: Arc<dyn ImageProbe>,
    ) -> Result<Self, WidgetError> {
        let bus = ChangeBus::new();
        let widget = |variant: Variant| {
            BookmarkWidget::new(
                VariantConfig::for_variant(variant),
                storage.clone(),
                &bus,
                metadata.clone(),
                probe.clone(),
            )
        };
        let linkstack = widget(Variant::Linkstack)?;
        let thinkstack = widget(Variant::Thinkstack)?;

        Ok(Self {
            settings_engine,
            bus,
            linkstack,
            thinkstack,
        })
    }

    /// Database location: the configured path, else `linkstack.db` in the
    /// platform data dir.
    pub fn database_path(settings_engine: &SettingsEngine) -> PathBuf {
        match &settings_engine.get_settings().storage.database_path {
            Some(path) => PathBuf::from(path),
            None => platform::get_data_dir().join("linkstack.db"),
        }
    }

    /// Opens SQLite-backed storage at `db_path`, creating parent directories.
    pub fn open_storage(
        db_path: &Path,
    ) -> Result<Arc<dyn LocalStorage>, Box<dyn std::error::Error>> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        tracing::info!(path = %db_path.display(), "opening bookmark database");
        Ok(Arc::new(SqliteStorage::new(Database::open(db_path)?)))
    }

    pub fn widget(&self, variant: Variant) -> &BookmarkWidget {
        match variant {
            Variant::Linkstack => &self.linkstack,
            Variant::Thinkstack => &self.thinkstack,
        }
    }

    pub fn widget_mut(&mut self, variant: Variant) -> &mut BookmarkWidget {
        match variant {
            Variant::Linkstack => &mut self.linkstack,
            Variant::Thinkstack => &mut self.thinkstack,
        }
    }
}
