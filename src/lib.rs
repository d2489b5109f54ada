//! Coverlight Library
//!
//! This library resolves album artwork through MusicBrainz and the Cover Art
//! Archive, derives a color palette and gradient from the resolved cover, looks
//! up explicit-content flags and lyrics, and relays Deezer searches for browser
//! clients that cannot call the API cross-origin.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local relay server
//! - `card` - Album card loading (cover, palette, explicit flag)
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `cover` - MusicBrainz lookup and Cover Art Archive fan-out race
//! - `deezer` - Deezer album search client
//! - `lyrics` - lyrics.ovh client
//! - `palette` - Dominant color extraction and gradient derivation
//! - `server` - Local HTTP relay server
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use coverlight::{config, cover::CoverResolver};
//!
//! #[tokio::main]
//! async fn main() -> coverlight::Res<()> {
//!     config::load_env().await?;
//!     let result = CoverResolver::from_config().resolve_cover("AJR", "Maybe Man").await;
//!     println!("{:?}", result);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod card;
pub mod cli;
pub mod config;
pub mod cover;
pub mod deezer;
pub mod lyrics;
pub mod palette;
pub mod server;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so the
/// error can cross await points and task boundaries.
///
/// # Example
///
/// ```
/// use coverlight::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Resolving cover for {} - {}", artist, album);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Cover found: {}", url);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors in the CLI layer. Library code reports failures
/// through return values instead.
///
/// # Example
///
/// ```
/// error!("Cannot read card file: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, e.g. a cover probe that failed with something
/// other than a plain 404.
///
/// # Example
///
/// ```
/// warning!("Cover Art Archive returned {} for release {}", status, id);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
