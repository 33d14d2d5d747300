#![forbid(unsafe_code)]

//! Particle data.

use std::time::Duration;

use proton_core::Vec2;
use proton_style::Rgba;

/// A single animated particle.
///
/// Owned exclusively by [`crate::ParticleSystem`]: created on emit, mutated
/// every tick, removed when its life is exhausted or it becomes invisible.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position in surface coordinates.
    pub position: Vec2,
    /// Velocity in surface units per second.
    pub velocity: Vec2,
    /// Square footprint edge length.
    pub size: f32,
    /// Base color; `opacity` scales its alpha when painting.
    pub color: Rgba,
    /// Current alpha in [0.0, 1.0]. Decays with remaining life and never
    /// increases.
    pub opacity: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Angular velocity in radians per second.
    pub spin: f32,
    /// Downward acceleration in surface units per second squared.
    pub gravity: f32,
    /// Velocity damping coefficient per second.
    pub drag: f32,
    /// Time lived so far.
    pub age: Duration,
    /// Total time to live.
    pub lifetime: Duration,
    /// Alpha at spawn; the decay anchor.
    pub(crate) spawn_opacity: f32,
}

impl Particle {
    /// Whether the particle should remain in the set.
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.age < self.lifetime && self.opacity > 0.0
    }

    /// Fraction of life remaining, in [0.0, 1.0].
    #[must_use]
    pub fn remaining_fraction(&self) -> f32 {
        if self.lifetime.is_zero() {
            return 0.0;
        }
        (1.0 - self.age.as_secs_f64() / self.lifetime.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    /// Advance physics and decay by `dt`. Deterministic.
    pub(crate) fn step(&mut self, dt: Duration) {
        let dt_s = dt.as_secs_f32();
        self.velocity.y += self.gravity * dt_s;
        // First-order damping, stable for any dt.
        let damp = 1.0 / (1.0 + self.drag * dt_s);
        self.velocity = self.velocity * damp;
        self.position = self.position + self.velocity * dt_s;
        self.rotation += self.spin * dt_s;
        self.age = self.age.saturating_add(dt);
        self.opacity = self.spawn_opacity * self.remaining_fraction();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Particle {
        Particle {
            position: Vec2::ZERO,
            velocity: Vec2::new(10.0, 0.0),
            size: 3.0,
            color: Rgba::WHITE,
            opacity: 1.0,
            rotation: 0.0,
            spin: 1.0,
            gravity: 0.0,
            drag: 0.0,
            age: Duration::ZERO,
            lifetime: Duration::from_secs(2),
            spawn_opacity: 1.0,
        }
    }

    #[test]
    fn step_advances_position_by_velocity() {
        let mut p = sample();
        p.step(Duration::from_millis(500));
        assert!((p.position.x - 5.0).abs() < 0.001);
        assert_eq!(p.position.y, 0.0);
    }

    #[test]
    fn step_applies_gravity() {
        let mut p = sample();
        p.gravity = 100.0;
        p.step(Duration::from_millis(100));
        assert!(p.velocity.y > 0.0, "gravity accelerates downward");
    }

    #[test]
    fn step_damps_velocity() {
        let mut p = sample();
        p.drag = 4.0;
        let before = p.velocity.x;
        p.step(Duration::from_millis(250));
        assert!(p.velocity.x < before);
        assert!(p.velocity.x > 0.0, "drag never reverses direction");
    }

    #[test]
    fn opacity_tracks_remaining_life() {
        let mut p = sample();
        p.step(Duration::from_secs(1));
        assert!((p.opacity - 0.5).abs() < 0.001);
        assert!(p.is_alive());

        p.step(Duration::from_secs(1));
        assert_eq!(p.opacity, 0.0);
        assert!(!p.is_alive());
    }

    #[test]
    fn remaining_fraction_clamps_past_lifetime() {
        let mut p = sample();
        p.step(Duration::from_secs(5));
        assert_eq!(p.remaining_fraction(), 0.0);
    }

    #[test]
    fn zero_lifetime_is_dead() {
        let mut p = sample();
        p.lifetime = Duration::ZERO;
        p.step(Duration::from_millis(1));
        assert!(!p.is_alive());
    }
}
