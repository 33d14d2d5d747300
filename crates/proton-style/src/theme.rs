#![forbid(unsafe_code)]

//! Theme system with built-in palettes.
//!
//! This module provides a small set of coherent retro-pixel and glass themes
//! plus a builder for custom ones. Themes are plain values; the active
//! selection lives in [`crate::store::ThemeContext`].

use crate::color::Rgba;

/// Built-in theme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThemeId {
    /// Glassmorphism dark (default).
    #[default]
    ProtonDark,
    /// Glassmorphism light.
    ProtonLight,
    /// Amber phosphor CRT.
    PixelAmber,
    /// Green phosphor CRT.
    PixelGreen,
    /// Synthwave neon dark.
    Synthwave,
    /// High contrast accessibility theme.
    HighContrast,
}

impl ThemeId {
    /// All built-in themes.
    pub const ALL: [ThemeId; 6] = [
        ThemeId::ProtonDark,
        ThemeId::ProtonLight,
        ThemeId::PixelAmber,
        ThemeId::PixelGreen,
        ThemeId::Synthwave,
        ThemeId::HighContrast,
    ];

    /// Stable kebab-case name; this is the persisted preference value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ThemeId::ProtonDark => "proton-dark",
            ThemeId::ProtonLight => "proton-light",
            ThemeId::PixelAmber => "pixel-amber",
            ThemeId::PixelGreen => "pixel-green",
            ThemeId::Synthwave => "synthwave",
            ThemeId::HighContrast => "high-contrast",
        }
    }

    /// Look up a theme by its persisted name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<ThemeId> {
        ThemeId::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Whether this is a dark theme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        !matches!(self, ThemeId::ProtonLight)
    }

    /// The opposite-brightness theme used by
    /// [`crate::store::ThemeContext::toggle`].
    #[must_use]
    pub const fn counterpart(self) -> ThemeId {
        if self.is_dark() {
            ThemeId::ProtonLight
        } else {
            ThemeId::ProtonDark
        }
    }
}

/// Semantic color slots resolved against the active palette.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    /// Page background.
    pub background: Rgba,
    /// Card/panel surface.
    pub surface: Rgba,
    /// Translucent glass overlay laid over the surface.
    pub overlay: Rgba,
    /// Border and divider color.
    pub border: Rgba,
    /// Primary text.
    pub text: Rgba,
    /// Secondary/muted text.
    pub text_muted: Rgba,
    /// Primary accent.
    pub accent: Rgba,
    /// Secondary accent.
    pub accent_alt: Rgba,
    /// Glow color for emphasis halos.
    pub glow: Rgba,
    /// Colors particle presets draw from.
    pub particle_palette: [Rgba; 4],
}

impl Theme {
    /// Start building a custom theme on top of the default palette.
    #[must_use]
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::from_theme(Theme::from_id(ThemeId::default()))
    }

    /// The built-in palette for `id`.
    #[must_use]
    pub fn from_id(id: ThemeId) -> Theme {
        match id {
            ThemeId::ProtonDark => Theme {
                background: Rgba::rgb(0x0b, 0x0e, 0x14),
                surface: Rgba::rgb(0x14, 0x19, 0x25),
                overlay: Rgba::rgba(0xff, 0xff, 0xff, 0x22),
                border: Rgba::rgb(0x2a, 0x33, 0x47),
                text: Rgba::rgb(0xe6, 0xe9, 0xf0),
                text_muted: Rgba::rgb(0x8a, 0x93, 0xa6),
                accent: Rgba::rgb(0x7c, 0x5c, 0xff),
                accent_alt: Rgba::rgb(0x00, 0xd4, 0xff),
                glow: Rgba::rgba(0x7c, 0x5c, 0xff, 0x80),
                particle_palette: [
                    Rgba::rgb(0x7c, 0x5c, 0xff),
                    Rgba::rgb(0x00, 0xd4, 0xff),
                    Rgba::rgb(0xff, 0x4f, 0xd8),
                    Rgba::rgb(0xff, 0xff, 0xff),
                ],
            },
            ThemeId::ProtonLight => Theme {
                background: Rgba::rgb(0xf5, 0xf7, 0xfb),
                surface: Rgba::rgb(0xff, 0xff, 0xff),
                overlay: Rgba::rgba(0xff, 0xff, 0xff, 0xaa),
                border: Rgba::rgb(0xd7, 0xdc, 0xe6),
                text: Rgba::rgb(0x1a, 0x20, 0x30),
                text_muted: Rgba::rgb(0x5d, 0x66, 0x78),
                accent: Rgba::rgb(0x5a, 0x3f, 0xf0),
                accent_alt: Rgba::rgb(0x00, 0x99, 0xcc),
                glow: Rgba::rgba(0x5a, 0x3f, 0xf0, 0x55),
                particle_palette: [
                    Rgba::rgb(0x5a, 0x3f, 0xf0),
                    Rgba::rgb(0x00, 0x99, 0xcc),
                    Rgba::rgb(0xe0, 0x3c, 0xa8),
                    Rgba::rgb(0x1a, 0x20, 0x30),
                ],
            },
            ThemeId::PixelAmber => Theme {
                background: Rgba::rgb(0x10, 0x08, 0x00),
                surface: Rgba::rgb(0x1c, 0x0f, 0x00),
                overlay: Rgba::rgba(0xff, 0xb0, 0x00, 0x22),
                border: Rgba::rgb(0x7a, 0x52, 0x00),
                text: Rgba::rgb(0xff, 0xb0, 0x00),
                text_muted: Rgba::rgb(0x9a, 0x7a, 0x30),
                accent: Rgba::rgb(0xff, 0xd7, 0x5f),
                accent_alt: Rgba::rgb(0xff, 0x8c, 0x00),
                glow: Rgba::rgba(0xff, 0xb0, 0x00, 0x80),
                particle_palette: [
                    Rgba::rgb(0xff, 0xd7, 0x5f),
                    Rgba::rgb(0xff, 0xb0, 0x00),
                    Rgba::rgb(0xff, 0x8c, 0x00),
                    Rgba::rgb(0xff, 0xf2, 0xcc),
                ],
            },
            ThemeId::PixelGreen => Theme {
                background: Rgba::rgb(0x00, 0x14, 0x00),
                surface: Rgba::rgb(0x02, 0x1f, 0x02),
                overlay: Rgba::rgba(0x33, 0xff, 0x66, 0x22),
                border: Rgba::rgb(0x14, 0x66, 0x2a),
                text: Rgba::rgb(0x33, 0xff, 0x66),
                text_muted: Rgba::rgb(0x2a, 0xa8, 0x4a),
                accent: Rgba::rgb(0x7d, 0xff, 0xa0),
                accent_alt: Rgba::rgb(0x00, 0xcc, 0x44),
                glow: Rgba::rgba(0x33, 0xff, 0x66, 0x80),
                particle_palette: [
                    Rgba::rgb(0x7d, 0xff, 0xa0),
                    Rgba::rgb(0x33, 0xff, 0x66),
                    Rgba::rgb(0x00, 0xcc, 0x44),
                    Rgba::rgb(0xe6, 0xff, 0xee),
                ],
            },
            ThemeId::Synthwave => Theme {
                background: Rgba::rgb(0x1a, 0x0b, 0x2e),
                surface: Rgba::rgb(0x26, 0x14, 0x41),
                overlay: Rgba::rgba(0xff, 0x2b, 0xd6, 0x1e),
                border: Rgba::rgb(0x4a, 0x2b, 0x73),
                text: Rgba::rgb(0xf4, 0xe9, 0xff),
                text_muted: Rgba::rgb(0xa8, 0x90, 0xcc),
                accent: Rgba::rgb(0xff, 0x2b, 0xd6),
                accent_alt: Rgba::rgb(0x00, 0xf0, 0xff),
                glow: Rgba::rgba(0xff, 0x2b, 0xd6, 0x80),
                particle_palette: [
                    Rgba::rgb(0xff, 0x2b, 0xd6),
                    Rgba::rgb(0x00, 0xf0, 0xff),
                    Rgba::rgb(0xff, 0xd3, 0x00),
                    Rgba::rgb(0x9d, 0x5c, 0xff),
                ],
            },
            ThemeId::HighContrast => Theme {
                background: Rgba::BLACK,
                surface: Rgba::rgb(0x10, 0x10, 0x10),
                overlay: Rgba::rgba(0xff, 0xff, 0xff, 0x30),
                border: Rgba::WHITE,
                text: Rgba::WHITE,
                text_muted: Rgba::rgb(0xc0, 0xc0, 0xc0),
                accent: Rgba::rgb(0xff, 0xff, 0x00),
                accent_alt: Rgba::rgb(0x00, 0xff, 0xff),
                glow: Rgba::rgba(0xff, 0xff, 0x00, 0xa0),
                particle_palette: [
                    Rgba::rgb(0xff, 0xff, 0x00),
                    Rgba::rgb(0x00, 0xff, 0xff),
                    Rgba::rgb(0xff, 0x00, 0xff),
                    Rgba::WHITE,
                ],
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_id(ThemeId::default())
    }
}

/// Builder for custom themes.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    /// Start from an existing theme.
    #[must_use]
    pub fn from_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Set the page background.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.theme.background = color;
        self
    }

    /// Set the surface color.
    #[must_use]
    pub fn surface(mut self, color: Rgba) -> Self {
        self.theme.surface = color;
        self
    }

    /// Set the glass overlay color.
    #[must_use]
    pub fn overlay(mut self, color: Rgba) -> Self {
        self.theme.overlay = color;
        self
    }

    /// Set the border color.
    #[must_use]
    pub fn border(mut self, color: Rgba) -> Self {
        self.theme.border = color;
        self
    }

    /// Set the primary text color.
    #[must_use]
    pub fn text(mut self, color: Rgba) -> Self {
        self.theme.text = color;
        self
    }

    /// Set the muted text color.
    #[must_use]
    pub fn text_muted(mut self, color: Rgba) -> Self {
        self.theme.text_muted = color;
        self
    }

    /// Set the primary accent.
    #[must_use]
    pub fn accent(mut self, color: Rgba) -> Self {
        self.theme.accent = color;
        self
    }

    /// Set the secondary accent.
    #[must_use]
    pub fn accent_alt(mut self, color: Rgba) -> Self {
        self.theme.accent_alt = color;
        self
    }

    /// Set the glow color.
    #[must_use]
    pub fn glow(mut self, color: Rgba) -> Self {
        self.theme.glow = color;
        self
    }

    /// Set the particle palette.
    #[must_use]
    pub fn particle_palette(mut self, palette: [Rgba; 4]) -> Self {
        self.theme.particle_palette = palette;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Theme {
        self.theme
    }
}
