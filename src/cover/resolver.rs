use std::time::Duration;

use reqwest::Client;
use tokio::task::JoinSet;

use crate::{
    config,
    cover::{archive, musicbrainz},
    types::{CoverProbeOutcome, ProbeFailure, ResolutionResult},
    warning,
};

/// Resolves album covers through MusicBrainz and the Cover Art Archive.
///
/// Holds no per-call state; one resolver can serve any number of concurrent
/// `resolve_cover` calls.
#[derive(Debug, Clone)]
pub struct CoverResolver {
    client: Client,
    musicbrainz_url: String,
    coverart_url: String,
    user_agent: String,
    probe_timeout: Duration,
}

impl CoverResolver {
    pub fn new(
        client: Client,
        musicbrainz_url: impl Into<String>,
        coverart_url: impl Into<String>,
        user_agent: impl Into<String>,
        probe_timeout: Duration,
    ) -> Self {
        Self {
            client,
            musicbrainz_url: musicbrainz_url.into(),
            coverart_url: coverart_url.into(),
            user_agent: user_agent.into(),
            probe_timeout,
        }
    }

    /// Builds a resolver from the environment configuration.
    pub fn from_config() -> Self {
        Self::new(
            Client::new(),
            config::musicbrainz_apiurl(),
            config::coverart_apiurl(),
            config::user_agent(),
            config::probe_timeout(),
        )
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Resolves the front cover of `album` by `artist`.
    ///
    /// Looks up every matching release on MusicBrainz, then probes the Cover Art
    /// Archive for all of them at once. The first probe that finds a cover wins;
    /// a fast 404 never beats a slower hit. Probes still running at that point are
    /// aborted and their outcomes are never observed.
    ///
    /// # Outcomes
    ///
    /// - `CoverFound(url)` - some release has a front cover
    /// - `NoReleases` - MusicBrainz answered but matched nothing; no probes are sent
    /// - `NoCoverAvailable(failures)` - every probe came back empty, one entry per release
    /// - `LookupFailed(reason)` - the MusicBrainz request itself failed
    ///
    /// Never returns an error: probe failures are folded into the aggregate and
    /// only the metadata lookup can fail the whole call.
    pub async fn resolve_cover(&self, artist: &str, album: &str) -> ResolutionResult {
        let releases = match musicbrainz::search_releases(
            &self.client,
            &self.musicbrainz_url,
            &self.user_agent,
            artist,
            album,
        )
        .await
        {
            Ok(releases) => releases,
            Err(e) => {
                warning!("Error fetching album data from MusicBrainz: {}", e);
                return ResolutionResult::LookupFailed(e.to_string());
            }
        };

        if releases.is_empty() {
            return ResolutionResult::NoReleases;
        }

        let mut probes = JoinSet::new();
        for release in releases {
            let client = self.client.clone();
            let url = archive::front_cover_url(&self.coverart_url, &release.id);
            let timeout = self.probe_timeout;
            probes.spawn(async move {
                let outcome = archive::probe(&client, &url, timeout).await;
                (release.id, outcome)
            });
        }

        let mut failures = Vec::with_capacity(probes.len());
        while let Some(joined) = probes.join_next().await {
            match joined {
                Ok((_, CoverProbeOutcome::Found(url))) => {
                    probes.abort_all();
                    return ResolutionResult::CoverFound(url);
                }
                Ok((release_id, outcome)) => {
                    if let CoverProbeOutcome::TransientError(detail) = &outcome {
                        warning!(
                            "Cover Art Archive probe failed for release {}: {}",
                            release_id,
                            detail
                        );
                    }
                    failures.push(ProbeFailure {
                        release_id,
                        outcome,
                    });
                }
                Err(e) => {
                    warning!("Cover probe task did not complete: {}", e);
                    failures.push(ProbeFailure {
                        release_id: String::new(),
                        outcome: CoverProbeOutcome::TransientError(e.to_string()),
                    });
                }
            }
        }

        ResolutionResult::NoCoverAvailable(failures)
    }
}
