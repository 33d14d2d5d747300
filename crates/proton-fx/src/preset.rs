#![forbid(unsafe_code)]

//! Emission presets.
//!
//! Each preset is a parameter table the system samples from when seeding a
//! batch of particles. Angles are radians in surface space (y down), so
//! "down" is `FRAC_PI_2` and "up" is `-FRAC_PI_2`.
//!
//! | Preset | Motion |
//! |--------|--------|
//! | [`Drift`](EmissionPreset::Drift) | gentle downward fall (default) |
//! | [`Explosion`](EmissionPreset::Explosion) | radial burst with gravity pull |
//! | [`Fountain`](EmissionPreset::Fountain) | upward jet arcing back down |
//! | [`Sparkle`](EmissionPreset::Sparkle) | short weightless shimmer |

use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

/// Visual preset selecting a parameter table for emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmissionPreset {
    /// Gentle downward drift (the default).
    #[default]
    Drift,
    /// Radial velocity spread from the origin.
    Explosion,
    /// Upward jet pulled back down by gravity.
    Fountain,
    /// Short-lived, near-weightless shimmer around the origin.
    Sparkle,
}

/// Sampling ranges for one preset.
///
/// Velocities are sampled as a direction within `spread` around
/// `direction`, at a speed within `[speed_min, speed_max]`.
#[derive(Debug, Clone, Copy)]
pub struct PresetParams {
    /// Central emission direction in radians.
    pub direction: f32,
    /// Total angular spread around `direction` in radians.
    pub spread: f32,
    /// Minimum initial speed.
    pub speed_min: f32,
    /// Maximum initial speed.
    pub speed_max: f32,
    /// Downward acceleration.
    pub gravity: f32,
    /// Velocity damping per second.
    pub drag: f32,
    /// Minimum lifetime.
    pub lifetime_min: Duration,
    /// Maximum lifetime.
    pub lifetime_max: Duration,
    /// Minimum footprint edge.
    pub size_min: f32,
    /// Maximum footprint edge.
    pub size_max: f32,
    /// Maximum angular velocity magnitude.
    pub spin_max: f32,
    /// Alpha at spawn.
    pub opacity: f32,
}

impl EmissionPreset {
    /// The parameter table for this preset.
    #[must_use]
    pub fn params(self) -> PresetParams {
        match self {
            EmissionPreset::Drift => PresetParams {
                direction: FRAC_PI_2,
                spread: 0.4,
                speed_min: 10.0,
                speed_max: 30.0,
                gravity: 12.0,
                drag: 0.2,
                lifetime_min: Duration::from_millis(2000),
                lifetime_max: Duration::from_millis(4000),
                size_min: 2.0,
                size_max: 5.0,
                spin_max: 1.0,
                opacity: 0.9,
            },
            EmissionPreset::Explosion => PresetParams {
                direction: 0.0,
                spread: TAU,
                speed_min: 60.0,
                speed_max: 180.0,
                gravity: 90.0,
                drag: 1.2,
                lifetime_min: Duration::from_millis(600),
                lifetime_max: Duration::from_millis(1200),
                size_min: 2.0,
                size_max: 6.0,
                spin_max: 6.0,
                opacity: 1.0,
            },
            EmissionPreset::Fountain => PresetParams {
                direction: -FRAC_PI_2,
                spread: 0.5,
                speed_min: 80.0,
                speed_max: 140.0,
                gravity: 160.0,
                drag: 0.4,
                lifetime_min: Duration::from_millis(1200),
                lifetime_max: Duration::from_millis(2400),
                size_min: 2.0,
                size_max: 4.0,
                spin_max: 2.0,
                opacity: 1.0,
            },
            EmissionPreset::Sparkle => PresetParams {
                direction: 0.0,
                spread: TAU,
                speed_min: 4.0,
                speed_max: 16.0,
                gravity: 0.0,
                drag: 0.8,
                lifetime_min: Duration::from_millis(400),
                lifetime_max: Duration::from_millis(900),
                size_min: 1.0,
                size_max: 3.0,
                spin_max: 4.0,
                opacity: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EmissionPreset; 4] = [
        EmissionPreset::Drift,
        EmissionPreset::Explosion,
        EmissionPreset::Fountain,
        EmissionPreset::Sparkle,
    ];

    #[test]
    fn default_preset_is_drift() {
        assert_eq!(EmissionPreset::default(), EmissionPreset::Drift);
    }

    #[test]
    fn drift_points_down_explosion_is_radial() {
        assert_eq!(EmissionPreset::Drift.params().direction, FRAC_PI_2);
        assert_eq!(EmissionPreset::Explosion.params().spread, TAU);
    }

    #[test]
    fn all_param_tables_are_well_formed() {
        for preset in ALL {
            let p = preset.params();
            assert!(p.speed_min <= p.speed_max, "{preset:?} speed range");
            assert!(p.lifetime_min <= p.lifetime_max, "{preset:?} lifetime range");
            assert!(p.size_min <= p.size_max, "{preset:?} size range");
            assert!(p.spread >= 0.0 && p.spread <= TAU, "{preset:?} spread");
            assert!(p.opacity > 0.0 && p.opacity <= 1.0, "{preset:?} opacity");
            assert!(!p.lifetime_min.is_zero(), "{preset:?} lifetime must be positive");
        }
    }

    #[test]
    fn fountain_fights_gravity() {
        let p = EmissionPreset::Fountain.params();
        assert!(p.direction < 0.0, "fountain launches upward");
        assert!(p.gravity > 0.0, "gravity pulls it back down");
    }
}
