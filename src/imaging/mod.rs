//! Sprite decoding and dominant-color extraction.
//!
//! Runs on the worker thread. The opaque pixels of a sprite are quantized into
//! a small palette with NeuQuant; every pixel is then assigned to its nearest
//! palette entry and the average of the most populated entry's pixels is the
//! dominant color. Averaging the real pixels (instead of reporting the palette
//! color) keeps flat-colored sprites exact.

use crate::domain::error::Result;
use crate::domain::Rgb;
use color_quant::NeuQuant;
use image::{ImageFormat, RgbaImage};

/// Pixels with lower alpha are background and never vote.
const ALPHA_THRESHOLD: u8 = 128;
const PALETTE_SIZE: usize = 16;
/// NeuQuant sampling factor: 1 is slowest and most accurate, 30 the fastest.
const SAMPLE_FACTOR: i32 = 10;

/// Decodes PNG sprite bytes into an RGBA buffer.
///
/// # Errors
///
/// Returns [`PokedexError::Image`](crate::domain::PokedexError::Image) when the
/// bytes are not a valid PNG.
pub fn decode_sprite(bytes: &[u8]) -> Result<RgbaImage> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
    Ok(image.to_rgba8())
}

/// Returns the dominant color of an image, or `None` when it has no opaque
/// pixel.
#[must_use]
pub fn dominant_color(image: &RgbaImage) -> Option<Rgb> {
    let opaque: Vec<u8> = image
        .pixels()
        .filter(|pixel| pixel[3] >= ALPHA_THRESHOLD)
        .flat_map(|pixel| pixel.0)
        .collect();

    if opaque.is_empty() {
        return None;
    }

    let quantizer = NeuQuant::new(SAMPLE_FACTOR, PALETTE_SIZE, &opaque);
    let mut buckets = vec![Bucket::default(); PALETTE_SIZE];
    for pixel in opaque.chunks_exact(4) {
        if let Some(bucket) = buckets.get_mut(quantizer.index_of(pixel)) {
            bucket.add(pixel);
        }
    }

    let dominant = buckets
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| a.count.cmp(&b.count).then(ib.cmp(ia)))
        .map(|(_, bucket)| bucket)?;

    tracing::trace!(
        opaque_pixels = opaque.len() / 4,
        dominant_pixels = dominant.count,
        "dominant color computed"
    );
    dominant.average()
}

/// Decodes a sprite and extracts its dominant color in one step.
///
/// # Errors
///
/// Propagates decode failures from [`decode_sprite`].
pub fn sprite_color(bytes: &[u8]) -> Result<Option<Rgb>> {
    let image = decode_sprite(bytes)?;
    Ok(dominant_color(&image))
}

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    count: u64,
    r: u64,
    g: u64,
    b: u64,
}

impl Bucket {
    fn add(&mut self, pixel: &[u8]) {
        self.count += 1;
        self.r += u64::from(pixel[0]);
        self.g += u64::from(pixel[1]);
        self.b += u64::from(pixel[2]);
    }

    fn average(&self) -> Option<Rgb> {
        if self.count == 0 {
            return None;
        }
        let mean = |sum: u64| u8::try_from((sum + self.count / 2) / self.count).unwrap_or(u8::MAX);
        Some(Rgb::new(mean(self.r), mean(self.g), mean(self.b)))
    }
}
