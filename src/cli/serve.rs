use crate::{error, server};

/// Runs the Deezer relay server until the process is stopped.
pub async fn serve() {
    if let Err(e) = server::start_api_server().await {
        error!("Proxy server stopped: {}", e);
    }
}
