#![forbid(unsafe_code)]

//! Blocky image downsampling.
//!
//! # Role in Proton UI
//! `proton-pixelate` produces the retro-pixel look: an input image is
//! partitioned into `block_size × block_size` cells and every cell is
//! replaced by its average color. The pixel-data transform is pure and
//! synchronous; debouncing or cancelling stale requests stays with the
//! caller, which simply discards a superseded result.
//!
//! # Invariants
//!
//! 1. Block size 1 preserves pixel data exactly.
//! 2. Every `block_size × block_size` cell of the output is uniform in
//!    color (edge cells truncated by the image bounds are uniform over the
//!    area they cover).
//! 3. Block size 0 is rejected with [`PixelateError::InvalidBlockSize`]
//!    before any decoding work happens.
//! 4. Output dimensions always equal input dimensions.

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};

/// Encoded output selection for [`pixelate_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Lossless PNG (the default).
    Png,
    /// JPEG at the given quality.
    Jpeg {
        /// Encoder quality, clamped to 1..=100 on construction.
        quality: u8,
    },
}

impl OutputFormat {
    /// JPEG output with `quality` clamped to 1..=100.
    #[must_use]
    pub fn jpeg(quality: u8) -> Self {
        Self::Jpeg {
            quality: quality.clamp(1, 100),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Png
    }
}

/// Options for a pixelation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelateOptions {
    /// Edge length of a uniform-color cell. Must be positive.
    pub block_size: u32,
    /// Output encoding.
    pub format: OutputFormat,
}

impl PixelateOptions {
    /// Options with the given block size and PNG output.
    #[must_use]
    pub fn new(block_size: u32) -> Self {
        Self {
            block_size,
            format: OutputFormat::Png,
        }
    }

    /// Set the output format (builder pattern).
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for PixelateOptions {
    fn default() -> Self {
        Self::new(8)
    }
}

/// Pixelate decoded pixel data.
///
/// Pure: partitions the image into `block_size × block_size` cells and
/// fills each with its per-channel average color. Edge cells truncated by
/// the image bounds average only the pixels they cover.
pub fn pixelate_image(
    image: &DynamicImage,
    block_size: u32,
) -> Result<RgbaImage, PixelateError> {
    if block_size == 0 {
        return Err(PixelateError::InvalidBlockSize(0));
    }

    let mut pixels = image.to_rgba8();
    let (width, height) = pixels.dimensions();

    for block_y in (0..height).step_by(block_size as usize) {
        for block_x in (0..width).step_by(block_size as usize) {
            let x_end = (block_x + block_size).min(width);
            let y_end = (block_y + block_size).min(height);
            fill_block_with_average(&mut pixels, block_x, block_y, x_end, y_end);
        }
    }

    Ok(pixels)
}

/// Replace the cell `[x0, x_end) × [y0, y_end)` with its average color.
fn fill_block_with_average(pixels: &mut RgbaImage, x0: u32, y0: u32, x_end: u32, y_end: u32) {
    let mut sum = [0u64; 4];
    let mut count = 0u64;
    for y in y0..y_end {
        for x in x0..x_end {
            let pixel = pixels.get_pixel(x, y).0;
            for (acc, channel) in sum.iter_mut().zip(pixel) {
                *acc += channel as u64;
            }
            count += 1;
        }
    }
    if count == 0 {
        return;
    }
    let average = image::Rgba(sum.map(|total| (total / count) as u8));
    for y in y0..y_end {
        for x in x0..x_end {
            pixels.put_pixel(x, y, average);
        }
    }
}

/// Decode, pixelate, and re-encode, returning the encoded bytes.
pub fn pixelate_to_bytes(
    bytes: &[u8],
    options: &PixelateOptions,
) -> Result<Vec<u8>, PixelateError> {
    if options.block_size == 0 {
        return Err(PixelateError::InvalidBlockSize(0));
    }
    let decoded = image::load_from_memory(bytes).map_err(PixelateError::Decode)?;
    let pixelated = pixelate_image(&decoded, options.block_size)?;
    encode(&pixelated, options.format)
}

/// Decode, pixelate, re-encode, and return the base64 encoding of the
/// result — the string form hosts hand straight to an `src` attribute or a
/// cache.
pub fn pixelate_bytes(bytes: &[u8], options: &PixelateOptions) -> Result<String, PixelateError> {
    let encoded = pixelate_to_bytes(bytes, options)?;
    Ok(STANDARD.encode(encoded))
}

fn encode(pixels: &RgbaImage, format: OutputFormat) -> Result<Vec<u8>, PixelateError> {
    let mut out = Cursor::new(Vec::new());
    match format {
        OutputFormat::Png => {
            DynamicImage::ImageRgba8(pixels.clone())
                .write_to(&mut out, ImageFormat::Png)
                .map_err(PixelateError::Encode)?;
        }
        OutputFormat::Jpeg { quality } => {
            // JPEG has no alpha channel; flatten first.
            let rgb = DynamicImage::ImageRgba8(pixels.clone()).to_rgb8();
            let mut encoder = JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
            encoder.encode_image(&rgb).map_err(PixelateError::Encode)?;
        }
    }
    Ok(out.into_inner())
}

/// Errors raised by pixelation.
#[derive(Debug)]
pub enum PixelateError {
    /// Block size must be a positive integer.
    InvalidBlockSize(u32),
    /// The input could not be decoded as an image.
    Decode(image::ImageError),
    /// The result could not be encoded.
    Encode(image::ImageError),
}

impl std::fmt::Display for PixelateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBlockSize(size) => {
                write!(f, "block size must be positive, got {size}")
            }
            Self::Decode(err) => write!(f, "image decode error: {err}"),
            Self::Encode(err) => write!(f, "image encode error: {err}"),
        }
    }
}

impl std::error::Error for PixelateError {}
