//! Linkstack RPC Server: JSON-RPC over stdin/stdout for the host drawing the widgets.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmarks.submit", "params":{"variant":"linkstack","url":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::Write;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use linkstack::app::App;
use linkstack::logging;
use linkstack::rpc_handler::handle_method;
use linkstack::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

fn emit(message: &Value) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{}", message);
    let _ = stdout.flush();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(std::env::var("LINKSTACK_CONFIG").ok());
    let settings = settings_engine.load()?;
    logging::init(&settings.log_level);

    let db_path = match std::env::var("LINKSTACK_DATA_DIR") {
        Ok(dir) => std::path::PathBuf::from(dir).join("linkstack.db"),
        Err(_) => App::database_path(&settings_engine),
    };
    let storage = App::open_storage(&db_path)?;
    let app = Mutex::new(App::new(settings_engine, storage)?);

    emit(&json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                emit(&json!({"id": null, "error": format!("parse error: {}", e)}));
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params).await {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                tracing::warn!(method, error = %err, "rpc call failed");
                json!({"id": id, "error": err})
            }
        };
        emit(&response);
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
