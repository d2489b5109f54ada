use crate::{
    card::{self, CardContext},
    cli::{print_palette, spinner},
    error, info, success,
    types::ResolutionResult,
    warning,
};

/// Resolves the cover of a single album and prints the card.
///
/// Prints the cover URL, the explicit flag and the palette with its gradient.
/// With `open`, the cover is opened in the default browser. Exits with an
/// error when the MusicBrainz lookup itself fails.
pub async fn cover(artist: String, album: String, open: bool) {
    let ctx = CardContext::from_config();

    let pb = spinner(format!("Resolving cover for {} - {}...", artist, album));
    let card = card::load_card(&ctx, &artist, &album).await;
    pb.finish_and_clear();

    match &card.result {
        ResolutionResult::CoverFound(url) => {
            success!("Cover loaded for {} - {}: {}", artist, album, url)
        }
        ResolutionResult::NoReleases => {
            warning!("No releases found for the album \"{}\" by \"{}\".", album, artist)
        }
        ResolutionResult::NoCoverAvailable(failures) => warning!(
            "Cover art not found for \"{}\" by \"{}\" ({} releases checked).",
            album,
            artist,
            failures.len()
        ),
        ResolutionResult::LookupFailed(reason) => {
            error!("Error fetching album data for {} - {}: {}", artist, album, reason)
        }
    }

    match card.explicit {
        Some(true) => info!("Explicit: yes"),
        Some(false) => info!("Explicit: no"),
        None => info!("Explicit: unknown"),
    }

    if let Some(palette) = &card.palette {
        print_palette(palette);
    } else if let Some(placeholder) = card.status().placeholder() {
        info!("Placeholder: {}", placeholder);
    }

    if open {
        if let Some(url) = card.result.cover_url() {
            if let Err(e) = webbrowser::open(url) {
                warning!("Cannot open browser: {}", e);
            }
        }
    }
}
