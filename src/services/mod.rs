// Linkstack services
// Services provide storage backends, change notifications, metadata lookup and settings.

pub mod change_bus;
pub mod image_probe;
pub mod local_storage;
pub mod metadata_client;
pub mod metadata_extractor;
pub mod settings_engine;
