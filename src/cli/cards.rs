use std::path::PathBuf;

use tabled::Table;

use crate::{
    card::{self, AlbumCard, CardContext, CardStatus},
    cli::spinner,
    error, success,
    types::{CardRequest, CardTableRow},
    warning,
};

/// Loads every album of a card file and prints the results as a table.
///
/// The file is a JSON array of `{"artist": "...", "album": "..."}` objects. All
/// cards load concurrently; the table is printed once every card has settled,
/// whatever its outcome.
pub async fn cards(file: PathBuf) {
    let content = match async_fs::read_to_string(&file).await {
        Ok(content) => content,
        Err(e) => error!("Cannot read card file {}: {}", file.display(), e),
    };

    let requests: Vec<CardRequest> = match serde_json::from_str(&content) {
        Ok(requests) => requests,
        Err(e) => error!("Invalid card file {}: {}", file.display(), e),
    };

    if requests.is_empty() {
        warning!("No albums in {}", file.display());
        return;
    }

    let ctx = CardContext::from_config();
    let pb = spinner(format!("Loading {} album covers...", requests.len()));
    let cards = card::load_cards(&ctx, &requests).await;
    pb.finish_and_clear();

    let loaded = cards
        .iter()
        .filter(|c| c.status() == CardStatus::Loaded)
        .count();

    let rows: Vec<CardTableRow> = cards.iter().map(card_row).collect();
    println!("{}", Table::new(rows));
    success!(
        "All album covers finished loading ({}/{} found)",
        loaded,
        cards.len()
    );
}

fn card_row(card: &AlbumCard) -> CardTableRow {
    let status = match card.status() {
        CardStatus::Loaded => "loaded",
        CardStatus::NoCover => "no cover",
        CardStatus::Error => "error",
    };

    let cover = match card.result.cover_url() {
        Some(url) => url.to_string(),
        None => card.status().placeholder().unwrap_or_default().to_string(),
    };

    let explicit = match card.explicit {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };

    let colors = card
        .palette
        .as_ref()
        .map(|p| {
            p.colors()
                .iter()
                .map(|c| c.to_hex())
                .collect::<Vec<String>>()
                .join(" ")
        })
        .unwrap_or_default();

    CardTableRow {
        artist: card.artist.clone(),
        album: card.album.clone(),
        status: status.to_string(),
        explicit: explicit.to_string(),
        cover,
        colors,
    }
}
