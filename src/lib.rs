pub mod categorize;
pub mod channels;
pub mod mappings;
pub mod merge;
pub mod normalize;
pub mod pipeline;
pub mod playlist;
pub mod policy;
pub mod settings;
pub mod sources;
pub mod validator;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub const M3U_CONTENT_TYPE: &str = "application/x-mpegurl";

struct AppState {
    playlist_path: PathBuf,
}

/// Serves the generated playlist file. The file is re-read on every request
/// so a regeneration shows up without a restart.
pub fn create_app(playlist_path: PathBuf) -> Router {
    let state = Arc::new(AppState { playlist_path });

    Router::new()
        .route("/", get(playlist_handler))
        .route("/playlist.m3u", get(playlist_handler))
        .fallback(fallback_handler)
        .with_state(state)
}

fn user_agent(headers: &HeaderMap) -> &str {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("<none>")
}

async fn playlist_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    match tokio::fs::read(&state.playlist_path).await {
        Ok(data) => {
            info!(
                "HTTP playlist request: bytes={} UA=\"{}\"",
                data.len(),
                user_agent(&headers)
            );
            (
                [
                    (header::CONTENT_TYPE, M3U_CONTENT_TYPE),
                    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                    (header::CACHE_CONTROL, "no-cache"),
                ],
                Body::from(data),
            )
                .into_response()
        }
        Err(e) => {
            warn!(
                "Failed to read playlist {}: {}",
                state.playlist_path.display(),
                e
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading playlist.").into_response()
        }
    }
}

async fn fallback_handler(method: Method, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    info!(
        "HTTP 404: method={} uri={} UA=\"{}\"",
        method,
        uri,
        user_agent(&headers)
    );
    (StatusCode::NOT_FOUND, "Not found. Use /playlist.m3u")
}
