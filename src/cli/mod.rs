//! # CLI Module
//!
//! Command-line layer of Coverlight. It plays the part a web page would play for
//! the library: it takes album requests from the user, runs the resolver and the
//! extractor through [`crate::card`], and renders the outcome. Resolution logic
//! never prints cards itself; everything user-facing happens here.
//!
//! ## Commands
//!
//! - [`cover`] - resolve one album: cover URL, explicit flag, palette, gradient
//! - [`cards`] - resolve every album listed in a JSON card file, concurrently
//! - [`palette`] - palette and gradient of a local image file
//! - [`lyrics`] - lyrics of a song
//! - [`serve`] - run the Deezer relay server for browser clients
//!
//! ## Outcome mapping
//!
//! Each resolution outcome gets its own message so a missing cover, an album
//! without releases and a broken lookup are never confused:
//!
//! | outcome            | output                                 |
//! |--------------------|----------------------------------------|
//! | `CoverFound`       | cover URL, palette and gradient        |
//! | `NoReleases`       | warning, `no_cover_found.png`          |
//! | `NoCoverAvailable` | warning, `no_cover_found.png`          |
//! | `LookupFailed`     | error, `error_loading.png`             |
//!
//! ## Usage Patterns
//!
//! ```bash
//! coverlight cover --artist "AJR" --album "Maybe Man"
//! coverlight cards albums.json
//! coverlight palette ./cover.jpg
//! coverlight lyrics --artist "AJR" --song "Maybe Man"
//! coverlight serve
//! ```

mod cards;
mod colors;
mod cover;
mod lyrics;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    palette::{Gradient, Palette},
    types::PaletteTableRow,
};

pub use cards::cards;
pub use colors::palette;
pub use cover::cover;
pub use lyrics::lyrics;
pub use serve::serve;

pub(crate) fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub(crate) fn print_palette(palette: &Palette) {
    let rows: Vec<PaletteTableRow> = palette
        .colors()
        .iter()
        .enumerate()
        .map(|(i, c)| PaletteTableRow {
            rank: i + 1,
            color: c.to_string(),
            hex: c.to_hex(),
        })
        .collect();

    println!("{}", Table::new(rows));
    println!("Gradient: {}", Gradient::from_palette(palette));
}
