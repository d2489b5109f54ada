use std::path::PathBuf;

use crate::{cli::print_palette, error, palette};

/// Prints the palette and gradient of a local image file.
pub async fn palette(file: PathBuf) {
    let bytes = match async_fs::read(&file).await {
        Ok(bytes) => bytes,
        Err(e) => error!("Cannot read image {}: {}", file.display(), e),
    };

    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => error!("Cannot decode image {}: {}", file.display(), e),
    };

    print_palette(&palette::from_image(&img));
}
