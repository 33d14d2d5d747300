#![forbid(unsafe_code)]

//! Decorative particle effects for Proton UI.
//!
//! # Role in Proton UI
//! `proton-fx` owns the particle data and its simulation: a bounded set of
//! particles advanced in discrete time steps, with batch emission from
//! visual presets. It never owns a frame loop or a drawing surface — hosts
//! drive [`ParticleSystem::tick`] from their own frame driver and paint the
//! [`Particle`] snapshot (or use [`raster::render_into`] to blend into a
//! caller-owned RGBA buffer).
//!
//! # Determinism
//! Randomness is consumed only at emission time; `tick` is a pure function
//! of the particle set and the delta, so replaying the same emissions and
//! deltas reproduces the same trajectory.

use std::fmt;

/// A single animated particle.
pub mod particle;
/// Emission presets and their parameter tables.
pub mod preset;
/// RGBA raster helper for caller-owned buffers.
pub mod raster;
/// The particle system.
pub mod system;

pub use particle::Particle;
pub use preset::EmissionPreset;
pub use system::{EmitOptions, ParticleSystem, ParticleSystemOptions};

/// Errors raised by the particle system.
#[derive(Debug)]
pub enum FxError {
    /// Emission parameters were rejected (non-finite origin, velocity, or
    /// spread).
    InvalidEmission(String),
    /// A raster target's length does not match its declared dimensions.
    SurfaceMismatch {
        /// `width * height` the caller declared.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
}

impl fmt::Display for FxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmission(msg) => write!(f, "invalid emission: {msg}"),
            Self::SurfaceMismatch { expected, actual } => {
                write!(
                    f,
                    "surface buffer length {actual} does not match declared size {expected}"
                )
            }
        }
    }
}

impl std::error::Error for FxError {}
