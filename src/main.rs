use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use coverlight::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve the cover, palette and explicit flag of one album
    Cover(CoverOptions),

    /// Load every album of a JSON card file
    Cards(CardsOptions),

    /// Extract the color palette of a local image
    Palette(PaletteOptions),

    /// Show the lyrics of a song
    Lyrics(LyricsOptions),

    /// Run the Deezer relay server for browser clients
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CoverOptions {
    /// Artist name
    #[clap(long)]
    pub artist: String,

    /// Album title
    #[clap(long)]
    pub album: String,

    /// Open the cover in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CardsOptions {
    /// JSON file with an array of {"artist": ..., "album": ...} objects
    pub file: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct PaletteOptions {
    /// Image file (PNG, JPEG, ...)
    pub file: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct LyricsOptions {
    /// Artist name
    #[clap(long)]
    pub artist: String,

    /// Song title
    #[clap(long)]
    pub song: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Cover(opt) => cli::cover(opt.artist, opt.album, opt.open).await,
        Command::Cards(opt) => cli::cards(opt.file).await,
        Command::Palette(opt) => cli::palette(opt.file).await,
        Command::Lyrics(opt) => cli::lyrics(opt.artist, opt.song).await,
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
