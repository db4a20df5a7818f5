//! Linkstack metadata server.
//!
//! Serves `GET /.netlify/functions/get-bookmark-data?url=...` for the widgets.
//! Settings come from `settings.json` in the platform config dir, or from the
//! file named by `LINKSTACK_CONFIG`.

use linkstack::logging;
use linkstack::server;
use linkstack::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(std::env::var("LINKSTACK_CONFIG").ok());
    let settings = settings_engine.load()?;
    logging::init(&settings.log_level);

    tracing::info!(
        config = settings_engine.get_config_path(),
        "starting linkstack v{}",
        env!("CARGO_PKG_VERSION")
    );

    server::start_server(&settings).await?;
    Ok(())
}
