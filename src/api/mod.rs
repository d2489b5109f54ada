//! # API Module
//!
//! HTTP handlers of the local relay server.
//!
//! ## Endpoints
//!
//! - [`deezer_album_cover`] - `GET /deezer-album-cover?artist=..&album=..` forwards
//!   an album search to Deezer and returns its JSON verbatim. Browsers cannot call
//!   Deezer directly because it does not send CORS headers; every relay response
//!   carries `Access-Control-Allow-Origin: *`.
//! - [`health`] - `GET /health` returns status and version for monitoring.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use coverlight::server;
//!
//! let app = server::router(client, "https://api.deezer.com".to_string());
//! ```

mod album_cover;
mod health;

pub use album_cover::{RelayState, deezer_album_cover};
pub use health::health;
