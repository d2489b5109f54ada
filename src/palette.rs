//! Dominant color extraction and gradient derivation.
//!
//! The extractor samples an RGBA8 buffer, groups pixels into coarse color
//! buckets and returns the most frequent ones. A [`Palette`] always holds at
//! least two colors, so a two-stop [`Gradient`] can be built from any palette
//! without checks.

use std::{collections::HashMap, fmt};

use image::DynamicImage;

use crate::{types::Rgb, warning};

/// Bytes per RGBA8 pixel.
const CHANNELS: usize = 4;

/// Every `SAMPLE_STRIDE`-th pixel is sampled, starting with the first one.
pub const SAMPLE_STRIDE: usize = 16;

/// Width of one quantization bucket per channel (8 levels out of 256).
pub const BUCKET_WIDTH: u8 = 32;

/// Pixels with an alpha below this value are ignored.
pub const ALPHA_THRESHOLD: u8 = 128;

pub const MAX_COLORS: usize = 3;
pub const MIN_COLORS: usize = 2;

/// Appended when an image yields fewer than [`MIN_COLORS`] buckets.
pub const PADDING_COLOR: Rgb = Rgb::new(50, 50, 50);

/// Used by callers when no pixel data could be obtained at all.
pub const FALLBACK_COLORS: [Rgb; 2] = [Rgb::new(189, 189, 255), Rgb::new(0, 0, 0)];

/// Floors a channel value to the lower bound of its bucket.
pub fn quantize(value: u8) -> u8 {
    value / BUCKET_WIDTH * BUCKET_WIDTH
}

/// Representative colors of an image, most frequent first.
///
/// Holds between [`MIN_COLORS`] and [`MAX_COLORS`] colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// The palette used when an image's pixels are unavailable.
    pub fn fallback() -> Self {
        Self {
            colors: FALLBACK_COLORS.to_vec(),
        }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn primary(&self) -> Rgb {
        self.colors[0]
    }

    pub fn secondary(&self) -> Rgb {
        self.colors[1]
    }
}

/// Extracts the dominant colors of a tightly packed RGBA8 buffer.
///
/// Samples every 16th pixel, skips pixels below half opacity, floors each
/// channel to a 32-wide bucket and counts bucket occurrences. The top three
/// buckets by count are returned; equal counts keep the order in which the
/// buckets were first seen. Palettes with fewer than two colors are padded with
/// `(50, 50, 50)`.
///
/// Only the first `width * height` pixels are considered, and a buffer shorter
/// than that is read up to its end. The result depends on nothing but the
/// input, so identical buffers always give identical palettes.
pub fn extract_palette(pixels: &[u8], width: u32, height: u32) -> Palette {
    let pixel_count = (width as usize).saturating_mul(height as usize);
    let len = pixel_count.saturating_mul(CHANNELS).min(pixels.len());

    let mut index: HashMap<Rgb, usize> = HashMap::new();
    let mut buckets: Vec<(Rgb, usize)> = Vec::new();

    let mut offset = 0;
    while offset + CHANNELS <= len {
        let px = &pixels[offset..offset + CHANNELS];
        offset += SAMPLE_STRIDE * CHANNELS;

        if px[3] < ALPHA_THRESHOLD {
            continue;
        }

        let key = Rgb::new(quantize(px[0]), quantize(px[1]), quantize(px[2]));
        match index.get(&key) {
            Some(&slot) => buckets[slot].1 += 1,
            None => {
                index.insert(key, buckets.len());
                buckets.push((key, 1));
            }
        }
    }

    // stable: ties stay in first-occurrence order
    buckets.sort_by(|a, b| b.1.cmp(&a.1));

    let mut colors: Vec<Rgb> = buckets
        .into_iter()
        .take(MAX_COLORS)
        .map(|(color, _)| color)
        .collect();

    while colors.len() < MIN_COLORS {
        colors.push(PADDING_COLOR);
    }

    Palette { colors }
}

/// Extracts the palette of a decoded image.
pub fn from_image(img: &DynamicImage) -> Palette {
    let rgba = img.to_rgba8();
    extract_palette(rgba.as_raw(), rgba.width(), rgba.height())
}

/// Decodes encoded image bytes (PNG, JPEG, ...) and extracts their palette.
///
/// Falls back to [`Palette::fallback`] when the bytes cannot be decoded, so the
/// extractor never runs on absent pixel data.
pub fn from_encoded(bytes: &[u8]) -> Palette {
    match image::load_from_memory(bytes) {
        Ok(img) => from_image(&img),
        Err(e) => {
            warning!("Could not extract colors, using default gradient: {}", e);
            Palette::fallback()
        }
    }
}

/// Two-stop diagonal gradient built from a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub angle_deg: u16,
    pub start: Rgb,
    pub end: Rgb,
}

impl Gradient {
    pub const ANGLE_DEG: u16 = 135;

    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            angle_deg: Self::ANGLE_DEG,
            start: palette.primary(),
            end: palette.secondary(),
        }
    }
}

impl fmt::Display for Gradient {
    /// CSS background value: the color stops at 0.67 alpha over a dark overlay.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({angle}deg, rgba({}, {}, {}, 0.67), rgba({}, {}, {}, 0.67)), \
             linear-gradient({angle}deg, rgba(0, 0, 0, 0.2), rgba(0, 0, 0, 0.3))",
            self.start.r,
            self.start.g,
            self.start.b,
            self.end.r,
            self.end.g,
            self.end.b,
            angle = self.angle_deg,
        )
    }
}
