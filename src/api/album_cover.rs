use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use reqwest::Client;
use serde_json::{Value, json};

use crate::{deezer, warning};

/// Shared state of the relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayState {
    pub client: Client,
    pub deezer_url: String,
}

fn relay_response(status: StatusCode, body: Value) -> Response {
    (
        status,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(body),
    )
        .into_response()
}

/// Forwards an artist/album search to Deezer on behalf of a browser.
///
/// - 400 when `artist` or `album` is missing or empty
/// - upstream status and an error body when Deezer answers with a failure
/// - 500 when Deezer cannot be reached or returns something that is not JSON
/// - otherwise Deezer's JSON, unchanged
pub async fn deezer_album_cover(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<RelayState>>,
) -> Response {
    let artist = params.get("artist").filter(|v| !v.is_empty());
    let album = params.get("album").filter(|v| !v.is_empty());

    let (Some(artist), Some(album)) = (artist, album) else {
        return relay_response(
            StatusCode::BAD_REQUEST,
            json!({ "error": "Artist and album parameters are required." }),
        );
    };

    let upstream = match deezer::album::search(&state.client, &state.deezer_url, artist, album)
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            warning!("Proxy error fetching from Deezer: {}", e);
            return internal_error();
        }
    };

    let upstream_status = upstream.status();
    if !upstream_status.is_success() {
        let status =
            StatusCode::from_u16(upstream_status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        return relay_response(
            status,
            json!({
                "error": format!(
                    "Deezer API error: {}",
                    upstream_status.canonical_reason().unwrap_or("Unknown")
                ),
                "status": upstream_status.as_u16(),
            }),
        );
    }

    match upstream.json::<Value>().await {
        Ok(body) => relay_response(StatusCode::OK, body),
        Err(e) => {
            warning!("Proxy error decoding Deezer response: {}", e);
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    relay_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Internal server error while fetching from Deezer." }),
    )
}
