//! Build script for Coverlight.
//!
//! Copies `.env.example` from the crate root into the local data directory
//! (`<data_local_dir>/coverlight/.env.example`), next to where `config::load_env`
//! looks for `.env`. Users copy the template and adjust the endpoints or the
//! MusicBrainz User-Agent there.
//!
//! The copy is a convenience only. Any failure (missing template, read-only
//! home directory in a sandboxed build) is reported as a cargo warning and the
//! build continues.

use std::{env, fs, path::PathBuf};

fn copy_template(source: &PathBuf) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("coverlight");
    fs::create_dir_all(&out_dir)?;

    let target = out_dir.join(".env.example");
    fs::copy(source, &target)?;
    Ok(target)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    if !template.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
        return Ok(());
    }

    if let Err(e) = copy_template(&template) {
        println!("cargo:warning=could not install .env.example: {}", e);
    }

    Ok(())
}
