//! Property-based invariant tests for pixelation.
//!
//! These tests verify:
//!
//! 1. Output dimensions always equal input dimensions.
//! 2. Every block of the output is uniform over the area it covers.
//! 3. Block size 1 is the identity over pixel data.
//! 4. No panics for any image content or block size.

use image::{DynamicImage, RgbaImage};
use proptest::prelude::*;
use proton_pixelate::pixelate_image;

// ── Helpers ─────────────────────────────────────────────────────────────

fn arbitrary_image() -> impl Strategy<Value = RgbaImage> {
    (1u32..24, 1u32..24, any::<u64>()).prop_map(|(width, height, seed)| {
        // Cheap deterministic pixel noise from the seed.
        RgbaImage::from_fn(width, height, |x, y| {
            let mixed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add((u64::from(y) << 32) | u64::from(x));
            let bytes = mixed.to_le_bytes();
            image::Rgba([bytes[0], bytes[1], bytes[2], bytes[3]])
        })
    })
}

fn assert_blocks_uniform(pixels: &RgbaImage, block_size: u32) -> Result<(), TestCaseError> {
    let (width, height) = pixels.dimensions();
    for block_y in (0..height).step_by(block_size as usize) {
        for block_x in (0..width).step_by(block_size as usize) {
            let expected = pixels.get_pixel(block_x, block_y);
            for y in block_y..(block_y + block_size).min(height) {
                for x in block_x..(block_x + block_size).min(width) {
                    prop_assert_eq!(
                        pixels.get_pixel(x, y),
                        expected,
                        "block ({}, {}) not uniform at ({}, {})",
                        block_x,
                        block_y,
                        x,
                        y
                    );
                }
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn dimensions_preserved(source in arbitrary_image(), block in 1u32..16) {
        let dims = source.dimensions();
        let out = pixelate_image(&DynamicImage::ImageRgba8(source), block).unwrap();
        prop_assert_eq!(out.dimensions(), dims);
    }

    #[test]
    fn every_block_is_uniform(source in arbitrary_image(), block in 1u32..16) {
        let out = pixelate_image(&DynamicImage::ImageRgba8(source), block).unwrap();
        assert_blocks_uniform(&out, block)?;
    }

    #[test]
    fn block_one_is_identity(source in arbitrary_image()) {
        let out = pixelate_image(&DynamicImage::ImageRgba8(source.clone()), 1).unwrap();
        prop_assert_eq!(out, source);
    }

    #[test]
    fn never_panics_even_for_oversized_blocks(
        source in arbitrary_image(),
        block in 1u32..1000,
    ) {
        let _ = pixelate_image(&DynamicImage::ImageRgba8(source), block).unwrap();
    }
}
