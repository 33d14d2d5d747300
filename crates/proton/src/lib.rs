#![forbid(unsafe_code)]

//! Proton UI public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! ```ignore
//! use std::time::Duration;
//! use proton::prelude::*;
//!
//! let mut fx = ParticleSystem::new(ParticleSystemOptions::new().with_max_particles(128));
//! fx.emit(&EmitOptions::new(Vec2::new(64.0, 0.0)).with_preset(EmissionPreset::Explosion))?;
//!
//! // Host frame loop:
//! fx.tick(Duration::from_millis(16));
//! for particle in fx.particles() {
//!     // paint particle.position / particle.color / particle.opacity
//! }
//! # Ok::<(), proton::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use proton_core::{
    Animation, EasingFn, Fade, FrameClock, MotionHints, MotionPreference, Rect, Vec2,
    detect_motion_preference, ease_in, ease_in_out, ease_out,
};

// --- Style re-exports ------------------------------------------------------

pub use proton_style::{
    FilePreferences, MemoryPreferences, PreferenceError, PreferenceStore, Rgba, THEME_KEY, Theme,
    ThemeBuilder, ThemeContext, ThemeId,
};

// --- Effects re-exports ----------------------------------------------------

pub use proton_fx::{
    EmissionPreset, EmitOptions, FxError, Particle, ParticleSystem, ParticleSystemOptions,
    raster::render_into,
};

// --- Pixelation re-exports -------------------------------------------------

pub use proton_pixelate::{
    OutputFormat, PixelateError, PixelateOptions, pixelate_bytes, pixelate_image,
    pixelate_to_bytes,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type collapsing every subsystem failure onto the two
/// kinds callers act on.
#[derive(Debug)]
pub enum Error {
    /// The caller's input was rejected: bad emission parameters, a
    /// non-decodable image, or a non-positive block size.
    InvalidInput(String),
    /// A required resource is unavailable in this environment: preference
    /// storage, or an encoder target.
    ResourceUnavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::ResourceUnavailable(msg) => write!(f, "resource unavailable: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<FxError> for Error {
    fn from(err: FxError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<PixelateError> for Error {
    fn from(err: PixelateError) -> Self {
        match err {
            PixelateError::InvalidBlockSize(_) | PixelateError::Decode(_) => {
                Self::InvalidInput(err.to_string())
            }
            PixelateError::Encode(_) => Self::ResourceUnavailable(err.to_string()),
        }
    }
}

impl From<PreferenceError> for Error {
    fn from(err: PreferenceError) -> Self {
        Self::ResourceUnavailable(err.to_string())
    }
}

// --- Prelude ---------------------------------------------------------------

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        Animation, EmissionPreset, EmitOptions, Error, FrameClock, MemoryPreferences,
        MotionPreference, OutputFormat, Particle, ParticleSystem, ParticleSystemOptions,
        PixelateOptions, PreferenceStore, Rect, Rgba, Theme, ThemeContext, ThemeId, Vec2,
        pixelate_bytes, render_into,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fx_errors_map_to_invalid_input() {
        let err: Error = FxError::InvalidEmission("origin must be finite".into()).into();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("origin"));
    }

    #[test]
    fn pixelate_errors_split_by_kind() {
        let err: Error = PixelateError::InvalidBlockSize(0).into();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn preference_errors_map_to_resource_unavailable() {
        let err: Error = PreferenceError::Unavailable("no storage".into()).into();
        assert!(matches!(err, Error::ResourceUnavailable(_)));
    }

    #[test]
    fn prelude_drives_a_minimal_frame() {
        use crate::prelude::*;

        let mut fx = ParticleSystem::with_motion_preference(
            ParticleSystemOptions::new().with_max_particles(32).with_seed(3),
            MotionPreference::Full,
        );
        fx.emit(&EmitOptions::new(Vec2::new(8.0, 8.0)).with_count(16))
            .unwrap();
        fx.tick(std::time::Duration::from_millis(16));
        assert!(!fx.particles().is_empty());

        let mut frame = vec![Rgba::TRANSPARENT; 16 * 16];
        render_into(&fx, &mut frame, 16, 16).unwrap();
    }
}
