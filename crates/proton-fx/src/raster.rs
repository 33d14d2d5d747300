#![forbid(unsafe_code)]

//! RGBA raster helper.
//!
//! The particle system owns only particle data; the drawing surface belongs
//! to the host. For hosts whose surface is a plain RGBA buffer, this module
//! blends each particle's square footprint into a caller-provided slice —
//! the same write-into-slice contract a backdrop effect uses.
//!
//! Rotation is not applied here: footprints are axis-aligned squares, which
//! is what a blocky retro aesthetic wants. Hosts that rotate sprites should
//! consume [`crate::Particle::rotation`] themselves.

use proton_style::Rgba;

use crate::FxError;
use crate::system::ParticleSystem;

/// Alpha-blend every particle footprint into `frame`.
///
/// `frame` is a row-major `width * height` RGBA buffer. Footprints that
/// fall partly outside the surface are clipped. Fails with
/// [`FxError::SurfaceMismatch`] when the buffer length disagrees with the
/// declared dimensions.
pub fn render_into(
    system: &ParticleSystem,
    frame: &mut [Rgba],
    width: usize,
    height: usize,
) -> Result<(), FxError> {
    let expected = width * height;
    if frame.len() != expected {
        return Err(FxError::SurfaceMismatch {
            expected,
            actual: frame.len(),
        });
    }
    if expected == 0 {
        return Ok(());
    }

    for particle in system.particles() {
        let half = particle.size / 2.0;
        let x0 = (particle.position.x - half).floor().max(0.0) as usize;
        let y0 = (particle.position.y - half).floor().max(0.0) as usize;
        let x1 = ((particle.position.x + half).ceil().max(0.0) as usize).min(width);
        let y1 = ((particle.position.y + half).ceil().max(0.0) as usize).min(height);

        let src = particle.color.scale_alpha(particle.opacity);
        if src.a() == 0 {
            continue;
        }

        for y in y0..y1 {
            let row = y * width;
            for x in x0..x1 {
                frame[row + x] = blend_over(frame[row + x], src);
            }
        }
    }

    Ok(())
}

/// Source-over blending with straight (non-premultiplied) alpha.
#[must_use]
fn blend_over(dst: Rgba, src: Rgba) -> Rgba {
    let sa = src.a() as f32 / 255.0;
    if sa >= 1.0 {
        return src;
    }
    let da = dst.a() as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba::TRANSPARENT;
    }
    let mix = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let c = (s * sa + d * da * (1.0 - sa)) / out_a;
        (c * 255.0).round().clamp(0.0, 255.0) as u8
    };
    Rgba::rgba(
        mix(src.r(), dst.r()),
        mix(src.g(), dst.g()),
        mix(src.b(), dst.b()),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}
