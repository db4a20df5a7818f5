//! RPC method handler for the Linkstack widget protocol.
//!
//! Kept separate from `rpc_server.rs` so it can be unit-tested. The
//! `handle_method` function dispatches a call to the widget of the requested
//! variant.

use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::app::App;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::bookmark::BookmarkRef;
use crate::types::render::EditForm;
use crate::types::variant::Variant;

fn variant_param(params: &Value) -> Result<Variant, String> {
    let name = params
        .get("variant")
        .and_then(|v| v.as_str())
        .ok_or("missing variant")?;
    Variant::from_name(name).ok_or_else(|| format!("unknown variant: {}", name))
}

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

/// `{"id": "..."}` or `{"index": n}`.
fn target_param(params: &Value) -> Result<BookmarkRef, String> {
    if let Some(id) = params.get("id").and_then(|v| v.as_str()) {
        return Ok(BookmarkRef::Id(id.to_string()));
    }
    if let Some(index) = params.get("index").and_then(|v| v.as_u64()) {
        return Ok(BookmarkRef::Index(index as usize));
    }
    Err("missing id or index".to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// Dispatches one RPC call.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(
    app: &Mutex<App>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Widget ───
        "widget.render" => {
            let variant = variant_param(params)?;
            let mut a = app.lock().await;
            let view = a.widget_mut(variant).render().map_err(|e| e.to_string())?;
            to_json(view)
        }
        "widget.refresh" => {
            let variant = variant_param(params)?;
            let mut a = app.lock().await;
            let widget = a.widget_mut(variant);
            let refreshed = widget.refresh().map_err(|e| e.to_string())?;
            Ok(json!({"refreshed": refreshed, "view": to_json(widget.view())?}))
        }

        // ─── Bookmarks ───
        "bookmarks.list" => {
            let variant = variant_param(params)?;
            let a = app.lock().await;
            let bookmarks = a.widget(variant).bookmarks().map_err(|e| e.to_string())?;
            to_json(&bookmarks)
        }
        "bookmarks.submit" => {
            let variant = variant_param(params)?;
            let url = str_param(params, "url")?;
            let mut a = app.lock().await;
            let widget = a.widget_mut(variant);
            let bookmark = widget.handle_submit(url).await.map_err(|e| e.to_string())?;
            Ok(json!({"bookmark": to_json(&bookmark)?, "view": to_json(widget.view())?}))
        }
        "bookmarks.delete" => {
            let variant = variant_param(params)?;
            let target = target_param(params)?;
            let mut a = app.lock().await;
            let view = a
                .widget_mut(variant)
                .handle_delete(&target)
                .map_err(|e| e.to_string())?;
            to_json(view)
        }
        "bookmarks.edit" => {
            let variant = variant_param(params)?;
            let target = target_param(params)?;
            let mut a = app.lock().await;
            let form = a
                .widget_mut(variant)
                .handle_edit(&target)
                .map_err(|e| e.to_string())?;
            to_json(form)
        }
        "bookmarks.save" => {
            let variant = variant_param(params)?;
            let form = EditForm {
                target: target_param(params)?,
                title: str_param(params, "title")?.to_string(),
                description: str_param(params, "description")?.to_string(),
            };
            let mut a = app.lock().await;
            let widget = a.widget_mut(variant);
            let bookmark = widget.save_edit(form).map_err(|e| e.to_string())?;
            Ok(json!({"bookmark": to_json(&bookmark)?, "view": to_json(widget.view())?}))
        }
        "bookmarks.close_edit" => {
            let variant = variant_param(params)?;
            let mut a = app.lock().await;
            a.widget_mut(variant).close_edit();
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().await;
            to_json(a.settings_engine.get_settings())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().await;
            a.settings_engine
                .set_value(key, value)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
