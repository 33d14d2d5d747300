#![forbid(unsafe_code)]

//! Core: geometry, animation primitives, and motion preference for Proton UI.
//!
//! # Role in Proton UI
//! `proton-core` is the shared foundation. It owns the small vocabulary the
//! effect crates agree on: surface-space geometry, the [`Animation`] seam
//! that hosts drive from their own frame loop, and motion-preference
//! detection for accessibility-aware effects.
//!
//! # Primary responsibilities
//! - **Geometry**: [`Vec2`] and [`Rect`] in f32 surface coordinates.
//! - **Animation**: the [`Animation`] trait, easing, [`Fade`], and
//!   [`FrameClock`] for capped wall-clock deltas.
//! - **Motion preference**: [`MotionPreference`] resolution from explicit
//!   hints or the environment.
//!
//! # How it fits in the system
//! `proton-fx` advances its particle set through the [`Animation`] seam, and
//! `proton-style` and `proton-pixelate` stay independent of timing entirely.
//! Nothing here touches a rendering surface; hosts own their own frame
//! driver and drawing context.

pub mod animation;
pub mod geometry;
pub mod logging;
pub mod motion;

pub use animation::{Animation, EasingFn, Fade, FrameClock, ease_in, ease_in_out, ease_out};
pub use geometry::{Rect, Vec2};
pub use motion::{MotionHints, MotionPreference, detect_motion_preference};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
