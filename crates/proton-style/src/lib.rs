#![forbid(unsafe_code)]

//! Color and theme primitives for Proton UI.
//!
//! # Role in Proton UI
//! `proton-style` is the shared vocabulary for colors and theming. The effect
//! crates use these types to stay visually consistent without dragging in
//! rendering or runtime dependencies.
//!
//! # This crate provides
//! - [`Rgba`] packed color with blending helpers.
//! - [`Theme`] with semantic color slots and a builder.
//! - [`ThemeId`] built-in retro/glass palettes.
//! - [`ThemeContext`] holding the active theme behind a lock-free handle,
//!   with an injected [`PreferenceStore`] persisting the selection.
//!
//! # How it fits in the system
//! `proton-fx` draws particle colors from the active theme's palette, and
//! hosts read semantic slots when painting their own surfaces. The theme
//! selection is explicit state owned by the host — there is no process-wide
//! global.

/// Color types and blending utilities.
pub mod color;
/// Theme context and preference persistence.
pub mod store;
/// Theme system with semantic color slots.
pub mod theme;

pub use color::Rgba;
pub use store::{
    FilePreferences, MemoryPreferences, PreferenceError, PreferenceStore, THEME_KEY, ThemeContext,
};
pub use theme::{Theme, ThemeBuilder, ThemeId};
