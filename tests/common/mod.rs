#![allow(dead_code)]

use std::{
    collections::HashMap,
    io::Cursor,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Extension, Json, Router,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use coverlight::cover::CoverResolver;
use image::{DynamicImage, ImageFormat, RgbaImage};
use reqwest::Client;
use serde_json::Value;
use tokio::time::sleep;

pub const USER_AGENT: &str = "coverlight-tests/1.0 (tests@example.invalid)";

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a local port nothing listens on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn png(color: [u8; 4], width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, image::Rgba(color)));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png).unwrap();
    buf
}

/// MusicBrainz stand-in answering every release search with `status` and `body`.
pub async fn musicbrainz(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/release",
        get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    spawn(app).await
}

pub fn releases(ids: &[&str]) -> Value {
    let releases: Vec<Value> = ids
        .iter()
        .map(|id| serde_json::json!({ "id": id, "title": "Maybe Man" }))
        .collect();
    serde_json::json!({ "count": releases.len(), "releases": releases })
}

/// How the fake archive answers a front-cover request for one release.
#[derive(Debug, Clone, Copy)]
pub enum Art {
    Hit,
    Miss,
    Unavailable,
    SlowHit(u64),
    Redirect,
    Hang,
    NotAnImage,
}

pub struct Archive {
    art: HashMap<String, Art>,
    probes: AtomicUsize,
}

impl Archive {
    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

fn image_response() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/png")],
        png([255, 0, 0, 255], 4, 4),
    )
        .into_response()
}

async fn front(Path(id): Path<String>, Extension(state): Extension<Arc<Archive>>) -> Response {
    state.probes.fetch_add(1, Ordering::SeqCst);
    match state.art.get(&id).copied().unwrap_or(Art::Miss) {
        Art::Hit => image_response(),
        Art::Miss => StatusCode::NOT_FOUND.into_response(),
        Art::Unavailable => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        Art::SlowHit(ms) => {
            sleep(Duration::from_millis(ms)).await;
            image_response()
        }
        Art::Redirect => Redirect::temporary(&format!("/images/{}.png", id)).into_response(),
        Art::Hang => {
            sleep(Duration::from_secs(5)).await;
            image_response()
        }
        Art::NotAnImage => (StatusCode::OK, "definitely not a png").into_response(),
    }
}

/// Cover Art Archive stand-in; returns its base URL and the shared state.
pub async fn archive(art: &[(&str, Art)]) -> (String, Arc<Archive>) {
    let state = Arc::new(Archive {
        art: art.iter().map(|(id, a)| (id.to_string(), *a)).collect(),
        probes: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/release/{id}/front", get(front))
        .route("/images/{file}", get(|| async { image_response() }))
        .layer(Extension(Arc::clone(&state)));

    (spawn(app).await, state)
}

pub fn resolver(musicbrainz_url: &str, archive_url: &str, probe_timeout: Duration) -> CoverResolver {
    CoverResolver::new(
        Client::new(),
        musicbrainz_url,
        archive_url,
        USER_AGENT,
        probe_timeout,
    )
}
