use reqwest::{Client, Response};

use crate::types::DeezerAlbumSearchResponse;

/// Deezer advanced-search expression for an album by an artist.
pub fn album_query(artist: &str, album: &str) -> String {
    format!("artist:\"{}\" album:\"{}\"", artist, album)
}

/// Sends the Deezer album search and hands back the raw response.
///
/// The status is not checked here: the relay server forwards upstream errors
/// with their original status, while [`explicit_flag`] treats them as failures.
pub async fn search(
    client: &Client,
    base_url: &str,
    artist: &str,
    album: &str,
) -> Result<Response, reqwest::Error> {
    let api_url = format!("{uri}/search/album", uri = base_url.trim_end_matches('/'));
    let query = album_query(artist, album);

    client
        .get(&api_url)
        .query(&[("q", query.as_str())])
        .send()
        .await
}

/// Looks up whether Deezer marks the album as explicit.
///
/// # Returns
///
/// - `Ok(Some(flag))` - `explicit_lyrics` of the first search hit
/// - `Ok(None)` - the search matched nothing
/// - `Err(reqwest::Error)` - network error, non-success status or bad JSON
pub async fn explicit_flag(
    client: &Client,
    base_url: &str,
    artist: &str,
    album: &str,
) -> Result<Option<bool>, reqwest::Error> {
    let response = search(client, base_url, artist, album)
        .await?
        .error_for_status()?;

    let json = response.json::<DeezerAlbumSearchResponse>().await?;
    Ok(json.data.first().map(|a| a.explicit_lyrics))
}
