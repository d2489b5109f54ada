use reqwest::Client;

use crate::types::{LyricsResponse, LyricsResult};

pub const NOT_FOUND_MESSAGE: &str = "Lyrics not found for this song.";

/// Lyrics URL for a song; both path segments are percent-encoded.
pub fn lyrics_url(base_url: &str, artist: &str, song: &str) -> String {
    format!(
        "{uri}/v1/{artist}/{song}",
        uri = base_url.trim_end_matches('/'),
        artist = urlencoding::encode(artist),
        song = urlencoding::encode(song)
    )
}

/// Fetches lyrics for a song from lyrics.ovh.
///
/// lyrics.ovh answers misses with a JSON body (`{"error": "..."}`, usually with
/// a 404), so the status is not checked: any parsable body without lyrics is a
/// `NotFound`.
///
/// # Returns
///
/// - `Ok(LyricsResult::Found(text))` - non-empty lyrics
/// - `Ok(LyricsResult::NotFound(message))` - no lyrics for this song
/// - `Err(reqwest::Error)` - network error or a body that is not JSON
pub async fn fetch_lyrics(
    client: &Client,
    base_url: &str,
    artist: &str,
    song: &str,
) -> Result<LyricsResult, reqwest::Error> {
    let response = client
        .get(lyrics_url(base_url, artist, song))
        .send()
        .await?;
    let json = response.json::<LyricsResponse>().await?;

    match json.lyrics {
        Some(lyrics) if !lyrics.trim().is_empty() => Ok(LyricsResult::Found(lyrics)),
        _ => Ok(LyricsResult::NotFound(
            json.error.unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lyrics_url_encodes_segments() {
        assert_eq!(
            lyrics_url("https://api.lyrics.ovh/", "AC/DC", "T.N.T & more"),
            "https://api.lyrics.ovh/v1/AC%2FDC/T.N.T%20%26%20more"
        );
    }
}
