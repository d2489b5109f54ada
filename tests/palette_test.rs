use coverlight::{
    palette::{
        self, BUCKET_WIDTH, FALLBACK_COLORS, Gradient, PADDING_COLOR, Palette, SAMPLE_STRIDE,
        extract_palette, quantize,
    },
    types::Rgb,
};
use image::{DynamicImage, RgbaImage};

fn solid(color: [u8; 4], width: u32, height: u32) -> Vec<u8> {
    color
        .iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect()
}

// One row per sample: with a width equal to the sampling stride, exactly the
// first pixel of each row is sampled.
fn rows(samples: &[[u8; 4]]) -> (Vec<u8>, u32, u32) {
    let width = SAMPLE_STRIDE as u32;
    let mut pixels = Vec::new();
    for color in samples {
        pixels.extend(solid(*color, width, 1));
    }
    (pixels, width, samples.len() as u32)
}

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 200, 0, 255];
const BLUE: [u8; 4] = [10, 20, 250, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

#[test]
fn test_solid_red_image_gives_one_bucket_plus_padding() {
    let palette = extract_palette(&solid(RED, 10, 10), 10, 10);

    assert_eq!(palette.len(), 2);
    assert_eq!(palette.colors(), &[Rgb::new(224, 0, 0), PADDING_COLOR]);
}

#[test]
fn test_fully_transparent_image_is_padded_to_two_colors() {
    let palette = extract_palette(&solid([255, 255, 255, 0], 8, 8), 8, 8);

    assert_eq!(palette.colors(), &[PADDING_COLOR, PADDING_COLOR]);
}

#[test]
fn test_empty_buffer_still_gives_two_colors() {
    let palette = extract_palette(&[], 0, 0);
    assert_eq!(palette.len(), 2);
}

#[test]
fn test_palette_length_is_between_two_and_three() {
    let (pixels, w, h) = rows(&[RED, GREEN, BLUE, WHITE, [0, 0, 0, 255], [90, 90, 90, 255]]);
    let palette = extract_palette(&pixels, w, h);
    assert_eq!(palette.len(), 3);

    let (pixels, w, h) = rows(&[RED, GREEN]);
    assert_eq!(extract_palette(&pixels, w, h).len(), 2);
}

#[test]
fn test_colors_are_ordered_by_frequency_with_first_seen_tie_break() {
    let (pixels, w, h) = rows(&[RED, GREEN, BLUE, BLUE, GREEN, BLUE, RED, WHITE]);
    let palette = extract_palette(&pixels, w, h);

    assert_eq!(
        palette.colors(),
        &[
            Rgb::new(0, 0, 224),
            Rgb::new(224, 0, 0),
            Rgb::new(0, 192, 0),
        ]
    );
}

#[test]
fn test_only_every_sixteenth_pixel_is_sampled() {
    // pixel 0 is red, pixels 1..16 are green and never sampled
    let mut pixels = solid(GREEN, 16, 1);
    pixels[..4].copy_from_slice(&RED);

    let palette = extract_palette(&pixels, 16, 1);
    assert_eq!(palette.colors(), &[Rgb::new(224, 0, 0), PADDING_COLOR]);
}

#[test]
fn test_alpha_threshold_is_half_opacity() {
    let (pixels, w, h) = rows(&[[255, 0, 0, 127], [0, 0, 255, 128]]);
    let palette = extract_palette(&pixels, w, h);

    assert_eq!(palette.colors(), &[Rgb::new(0, 0, 224), PADDING_COLOR]);
}

#[test]
fn test_near_identical_colors_share_a_bucket() {
    let (pixels, w, h) = rows(&[
        [200, 10, 10, 255],
        [223, 31, 31, 255],
        [224, 0, 0, 255],
    ]);
    let palette = extract_palette(&pixels, w, h);

    assert_eq!(
        palette.colors(),
        &[Rgb::new(192, 0, 0), Rgb::new(224, 0, 0)]
    );
}

#[test]
fn test_extraction_is_deterministic() {
    let (pixels, w, h) = rows(&[WHITE, BLUE, RED, GREEN, RED, BLUE]);

    let first = extract_palette(&pixels, w, h);
    let second = extract_palette(&pixels.clone(), w, h);
    assert_eq!(first, second);
}

#[test]
fn test_short_buffer_is_read_up_to_its_end() {
    // claims 100x100 but only carries 20 pixels plus a partial one
    let mut pixels = solid(RED, 20, 1);
    pixels.extend_from_slice(&[0, 0, 255]);

    let palette = extract_palette(&pixels, 100, 100);
    assert_eq!(palette.colors(), &[Rgb::new(224, 0, 0), PADDING_COLOR]);
}

#[test]
fn test_dimensions_limit_the_scanned_pixels() {
    // 17 pixels in the buffer, but only the first 16 belong to the 4x4 image
    let mut pixels = solid(RED, 4, 4);
    pixels.extend_from_slice(&BLUE);

    let palette = extract_palette(&pixels, 4, 4);
    assert_eq!(palette.colors(), &[Rgb::new(224, 0, 0), PADDING_COLOR]);
}

#[test]
fn test_quantize_floors_to_bucket_boundaries() {
    assert_eq!(quantize(0), 0);
    assert_eq!(quantize(31), 0);
    assert_eq!(quantize(32), 32);
    assert_eq!(quantize(63), 32);
    assert_eq!(quantize(255), 224);
}

#[test]
fn test_quantize_is_idempotent() {
    for v in 0..=255u8 {
        let q = quantize(v);
        assert_eq!(quantize(q), q);
        assert_eq!(q % BUCKET_WIDTH, 0);
        assert!(q <= v);
    }
}

#[test]
fn test_fallback_palette() {
    let fallback = Palette::fallback();
    assert_eq!(fallback.colors(), &FALLBACK_COLORS);
    assert_eq!(fallback.primary(), Rgb::new(189, 189, 255));
    assert_eq!(fallback.secondary(), Rgb::new(0, 0, 0));
}

#[test]
fn test_from_image_converts_to_rgba() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, image::Rgba(RED)));
    assert_eq!(
        palette::from_image(&img).colors(),
        &[Rgb::new(224, 0, 0), PADDING_COLOR]
    );

    let rgb = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(5, 5, image::Rgb([0, 0, 255])));
    assert_eq!(palette::from_image(&rgb).primary(), Rgb::new(0, 0, 224));
}

#[test]
fn test_undecodable_bytes_use_fallback_palette() {
    assert_eq!(palette::from_encoded(b"not an image"), Palette::fallback());
}

#[test]
fn test_gradient_uses_first_two_colors() {
    let (pixels, w, h) = rows(&[BLUE, BLUE, RED, WHITE]);
    let palette = extract_palette(&pixels, w, h);
    let gradient = Gradient::from_palette(&palette);

    assert_eq!(gradient.angle_deg, 135);
    assert_eq!(gradient.start, Rgb::new(0, 0, 224));
    assert_eq!(gradient.end, Rgb::new(224, 0, 0));
    assert_eq!(
        gradient.to_string(),
        "linear-gradient(135deg, rgba(0, 0, 224, 0.67), rgba(224, 0, 0, 0.67)), \
         linear-gradient(135deg, rgba(0, 0, 0, 0.2), rgba(0, 0, 0, 0.3))"
    );
}

#[test]
fn test_rgb_formatting() {
    let color = Rgb::new(189, 189, 255);
    assert_eq!(color.to_string(), "rgb(189, 189, 255)");
    assert_eq!(color.to_hex(), "#bdbdff");
}
