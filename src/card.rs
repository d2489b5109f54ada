//! Album card loading.
//!
//! A card is the presentation-side view of one album: its cover resolution
//! result, the palette of the cover and the explicit flag. This module owns the
//! caller duties around the resolver and the extractor: it downloads the cover,
//! substitutes the fallback palette when pixels are unavailable and runs the
//! explicit-flag lookup as an independent enrichment.

use reqwest::Client;

use crate::{
    config,
    cover::CoverResolver,
    deezer,
    palette::{self, Palette},
    types::{CardRequest, ResolutionResult},
    warning,
};

/// Presentation state of a card after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Loaded,
    NoCover,
    Error,
}

impl CardStatus {
    /// Placeholder image shown instead of a cover.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            CardStatus::Loaded => None,
            CardStatus::NoCover => Some("no_cover_found.png"),
            CardStatus::Error => Some("error_loading.png"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AlbumCard {
    pub artist: String,
    pub album: String,
    pub result: ResolutionResult,
    /// Only set when a cover was found.
    pub palette: Option<Palette>,
    pub explicit: Option<bool>,
}

impl AlbumCard {
    pub fn status(&self) -> CardStatus {
        match self.result {
            ResolutionResult::CoverFound(_) => CardStatus::Loaded,
            ResolutionResult::NoReleases | ResolutionResult::NoCoverAvailable(_) => {
                CardStatus::NoCover
            }
            ResolutionResult::LookupFailed(_) => CardStatus::Error,
        }
    }
}

/// Everything needed to load cards: the resolver and the Deezer endpoint.
#[derive(Debug, Clone)]
pub struct CardContext {
    resolver: CoverResolver,
    deezer_url: String,
}

impl CardContext {
    pub fn new(resolver: CoverResolver, deezer_url: impl Into<String>) -> Self {
        Self {
            resolver,
            deezer_url: deezer_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(CoverResolver::from_config(), config::deezer_apiurl())
    }

    pub fn resolver(&self) -> &CoverResolver {
        &self.resolver
    }

    fn client(&self) -> &Client {
        self.resolver.client()
    }

    async fn explicit_flag(&self, artist: &str, album: &str) -> Option<bool> {
        match deezer::album::explicit_flag(self.client(), &self.deezer_url, artist, album).await {
            Ok(flag) => flag,
            Err(e) => {
                warning!("Explicit flag lookup failed for {} - {}: {}", artist, album, e);
                None
            }
        }
    }

    /// Downloads a cover and extracts its palette, or the fallback palette if
    /// the image cannot be fetched or decoded.
    pub async fn cover_palette(&self, url: &str) -> Palette {
        let bytes = match self.download(url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warning!("Could not download cover {}: {}", url, e);
                return Palette::fallback();
            }
        };
        palette::from_encoded(&bytes)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
        let response = self.client().get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Loads one album card.
///
/// Cover resolution and the explicit-flag lookup run concurrently. The flag
/// never influences the resolution result; a failed lookup just leaves it unset.
pub async fn load_card(ctx: &CardContext, artist: &str, album: &str) -> AlbumCard {
    let (result, explicit) = tokio::join!(
        ctx.resolver.resolve_cover(artist, album),
        ctx.explicit_flag(artist, album)
    );

    let palette = match result.cover_url() {
        Some(url) => Some(ctx.cover_palette(url).await),
        None => None,
    };

    AlbumCard {
        artist: artist.to_string(),
        album: album.to_string(),
        result,
        palette,
        explicit,
    }
}

/// Loads all cards concurrently and waits until every one has settled.
///
/// The returned cards keep the order of `requests`.
pub async fn load_cards(ctx: &CardContext, requests: &[CardRequest]) -> Vec<AlbumCard> {
    let handles: Vec<_> = requests
        .iter()
        .cloned()
        .map(|req| {
            let ctx = ctx.clone();
            tokio::spawn(async move { load_card(&ctx, &req.artist, &req.album).await })
        })
        .collect();

    let mut cards = Vec::with_capacity(handles.len());
    for (handle, req) in handles.into_iter().zip(requests) {
        match handle.await {
            Ok(card) => cards.push(card),
            Err(e) => cards.push(AlbumCard {
                artist: req.artist.clone(),
                album: req.album.clone(),
                result: ResolutionResult::LookupFailed(e.to_string()),
                palette: None,
                explicit: None,
            }),
        }
    }
    cards
}
