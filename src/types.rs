use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseSearchResponse {
    #[serde(default)]
    pub releases: Vec<ReleaseCandidate>,
}

/// One release (pressing/edition) of an album as returned by MusicBrainz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseCandidate {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Result of a single Cover Art Archive probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverProbeOutcome {
    Found(String),
    NotFound,
    TransientError(String),
}

/// A probe that did not produce a cover, kept for the aggregate outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub release_id: String,
    pub outcome: CoverProbeOutcome,
}

/// Final answer of a cover resolution.
///
/// Every variant is a distinct caller-visible state so the caller can pick
/// different fallback imagery for "no cover" and "lookup broken".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    CoverFound(String),
    NoReleases,
    NoCoverAvailable(Vec<ProbeFailure>),
    LookupFailed(String),
}

impl ResolutionResult {
    pub fn cover_url(&self) -> Option<&str> {
        match self {
            ResolutionResult::CoverFound(url) => Some(url.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionResult::CoverFound(url) => write!(f, "{}", url),
            ResolutionResult::NoReleases => write!(f, "No releases found for the album"),
            ResolutionResult::NoCoverAvailable(failures) => write!(
                f,
                "Cover art not found ({} release(s) checked)",
                failures.len()
            ),
            ResolutionResult::LookupFailed(reason) => {
                write!(f, "Error fetching album data: {}", reason)
            }
        }
    }
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeezerAlbumSearchResponse {
    #[serde(default)]
    pub data: Vec<DeezerAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeezerAlbum {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub explicit_lyrics: bool,
    #[serde(default)]
    pub cover_xl: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsResponse {
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsResult {
    Found(String),
    NotFound(String),
}

/// An `{artist, album}` entry of a card file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRequest {
    pub artist: String,
    pub album: String,
}

#[derive(Tabled)]
pub struct CardTableRow {
    pub artist: String,
    pub album: String,
    pub status: String,
    pub explicit: String,
    pub cover: String,
    pub colors: String,
}

#[derive(Tabled)]
pub struct PaletteTableRow {
    pub rank: usize,
    pub color: String,
    pub hex: String,
}
