use reqwest::Client;

use crate::{
    cli::spinner,
    config, error, lyrics, success,
    types::LyricsResult,
    warning,
};

/// Fetches and prints the lyrics of a song.
pub async fn lyrics(artist: String, song: String) {
    let pb = spinner(format!("Fetching lyrics for \"{}\" by \"{}\"...", song, artist));
    let result = lyrics::fetch_lyrics(&Client::new(), &config::lyrics_apiurl(), &artist, &song).await;
    pb.finish_and_clear();

    match result {
        Ok(LyricsResult::Found(text)) => {
            success!("{} by {}", song, artist);
            println!("\n{}", text.trim());
        }
        Ok(LyricsResult::NotFound(message)) => {
            warning!("Could not find lyrics for \"{}\": {}", song, message)
        }
        Err(e) => error!(
            "Failed to fetch lyrics. Please check network or API availability. Err: {}",
            e
        ),
    }
}
