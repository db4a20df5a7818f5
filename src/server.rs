//! HTTP surface of the metadata extractor.
//!
//! `GET /.netlify/functions/get-bookmark-data?url=<encoded-url>`
//! - `200 application/json {pageTitle, metaDescription, previewImg}`
//! - `204` with no body when the upstream page answered non-2xx
//! - `500 text/plain <error>` for anything else

use std::net::SocketAddr;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::services::metadata_client::FUNCTION_PATH;
use crate::services::metadata_extractor::MetadataExtractor;
use crate::types::errors::ServerError;
use crate::types::settings::LinkstackSettings;

#[derive(Clone)]
struct ServerState {
    extractor: MetadataExtractor,
}

#[derive(Debug, Deserialize)]
struct BookmarkDataQuery {
    url: Option<String>,
}

/// Builds the router serving the metadata function and a health check.
pub fn router(extractor: MetadataExtractor) -> Router {
    Router::new()
        .route(&format!("/{}", FUNCTION_PATH), get(get_bookmark_data))
        .route("/health", get(health_check))
        .with_state(ServerState { extractor })
}

async fn get_bookmark_data(
    State(state): State<ServerState>,
    Query(query): Query<BookmarkDataQuery>,
) -> Response {
    let Some(url) = query.url else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Invalid URL: missing url parameter".to_string(),
        )
            .into_response();
    };

    match state.extractor.fetch_metadata(&url).await {
        Ok(Some(metadata)) => Json(metadata).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(%url, error = %e, "metadata extraction failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "linkstack"
    }))
}

/// Binds the configured address and serves until the process exits.
pub async fn start_server(settings: &LinkstackSettings) -> Result<(), ServerError> {
    let extractor = MetadataExtractor::new(&settings.http)
        .map_err(|e| ServerError::Config(e.to_string()))?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .map_err(|e| ServerError::Config(format!("Invalid address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Io)?;
    tracing::info!("Serving bookmark metadata on http://{}", addr);

    axum::serve(listener, router(extractor))
        .await
        .map_err(ServerError::Io)
}
