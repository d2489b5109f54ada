use axum::{Extension, Router, routing::get};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res,
    api::{self, RelayState},
    config, info,
};

/// Routes of the relay server.
pub fn router(client: Client, deezer_url: String) -> Router {
    let state = Arc::new(RelayState { client, deezer_url });

    Router::new()
        .route("/health", get(api::health))
        .route(
            "/deezer-album-cover",
            get(api::deezer_album_cover).layer(Extension(state)),
        )
}

/// Binds the relay server to `SERVER_ADDRESS` and serves until the process ends.
pub async fn start_api_server() -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let app = router(Client::new(), config::deezer_apiurl());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Proxy server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
