use reqwest::Client;

use crate::types::{ReleaseCandidate, ReleaseSearchResponse};

/// Builds the Lucene query for an exact album/artist phrase match.
///
/// Quotes and backslashes inside the names are escaped so they cannot close the
/// phrase early. URL encoding happens later, when the query is attached to the
/// request.
pub fn release_query(artist: &str, album: &str) -> String {
    format!(
        "album:\"{album}\" AND artist:\"{artist}\"",
        album = escape_phrase(album),
        artist = escape_phrase(artist)
    )
}

fn escape_phrase(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Searches MusicBrainz for releases matching the artist and album.
///
/// Sends `GET {base_url}/release?query=...&fmt=json` with the given User-Agent,
/// which MusicBrainz requires on every request.
///
/// # Returns
///
/// - `Ok(Vec<ReleaseCandidate>)` - candidates in the order MusicBrainz returned them
///   (an absent `releases` field yields an empty list)
/// - `Err(reqwest::Error)` - transport failure, non-success status or a body
///   that is not valid release-search JSON
pub async fn search_releases(
    client: &Client,
    base_url: &str,
    user_agent: &str,
    artist: &str,
    album: &str,
) -> Result<Vec<ReleaseCandidate>, reqwest::Error> {
    let api_url = format!("{uri}/release", uri = base_url.trim_end_matches('/'));
    let query = release_query(artist, album);

    let response = client
        .get(&api_url)
        .header(reqwest::header::USER_AGENT, user_agent)
        .query(&[("query", query.as_str()), ("fmt", "json")])
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<ReleaseSearchResponse>().await?;
    Ok(json.releases)
}
