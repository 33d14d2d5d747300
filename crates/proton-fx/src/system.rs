#![forbid(unsafe_code)]

//! The particle system.
//!
//! A bounded, host-driven particle set. [`ParticleSystem::emit`] seeds a
//! batch from a preset, [`ParticleSystem::tick`] advances the simulation by
//! an explicit delta, and [`ParticleSystem::particles`] exposes a read-only
//! snapshot for the host to paint.
//!
//! # Invariants
//!
//! 1. The set never holds more than `max_particles`; excess emission is
//!    dropped silently and the spawned count is returned.
//! 2. `emit` with `n` ≤ remaining capacity grows the set by exactly `n`.
//! 3. `clear` empties the set unconditionally.
//! 4. A particle's opacity never increases across ticks.
//! 5. `tick` consumes no randomness: replaying the same emissions and
//!    deltas reproduces the same trajectories.
//!
//! # Failure Modes
//!
//! - Non-finite origin, velocity, or spread: rejected with
//!   [`FxError::InvalidEmission`]; the set is left untouched.
//! - Reduced motion: when the system respects the motion preference and the
//!   environment prefers reduced motion, `emit` is a no-op returning 0 so
//!   decorative bursts silently disappear while explicit `tick`/`clear`
//!   still drain anything visible.

use std::time::Duration;

use proton_core::{Animation, MotionHints, MotionPreference, Vec2, detect_motion_preference};
use proton_style::{Rgba, Theme};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::FxError;
use crate::particle::Particle;
use crate::preset::EmissionPreset;

/// Default particle capacity.
const DEFAULT_MAX_PARTICLES: usize = 256;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Construction options for [`ParticleSystem`].
#[derive(Debug, Clone)]
pub struct ParticleSystemOptions {
    /// Upper bound on live particles. Clamped to at least 1.
    pub max_particles: usize,
    /// Suppress emission when the environment prefers reduced motion.
    pub respect_motion_preference: bool,
    /// Fixed RNG seed for reproducible emission. `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for ParticleSystemOptions {
    fn default() -> Self {
        Self {
            max_particles: DEFAULT_MAX_PARTICLES,
            respect_motion_preference: true,
            seed: None,
        }
    }
}

impl ParticleSystemOptions {
    /// Create the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the particle capacity (builder pattern). Zero is clamped to 1.
    #[must_use]
    pub fn with_max_particles(mut self, max: usize) -> Self {
        self.max_particles = max.max(1);
        self
    }

    /// Set whether emission honors the motion preference (builder pattern).
    #[must_use]
    pub fn with_respect_motion_preference(mut self, respect: bool) -> Self {
        self.respect_motion_preference = respect;
        self
    }

    /// Fix the emission RNG seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A single emission request.
///
/// Transient: consumed immediately to produce a batch of particles.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Origin of the batch in surface coordinates.
    pub origin: Vec2,
    /// Requested particle count.
    pub count: usize,
    /// Visual preset seeding the batch.
    pub preset: EmissionPreset,
    /// Extra velocity added to every spawned particle.
    pub velocity: Option<Vec2>,
    /// Override for the preset's angular spread, in radians.
    pub spread: Option<f32>,
    /// Override for the colors the batch draws from. Defaults to the
    /// default theme's particle palette.
    pub palette: Option<[Rgba; 4]>,
}

impl EmitOptions {
    /// A default-preset batch of 16 particles at `origin`.
    #[must_use]
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            count: 16,
            preset: EmissionPreset::default(),
            velocity: None,
            spread: None,
            palette: None,
        }
    }

    /// Set the particle count (builder pattern).
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the visual preset (builder pattern).
    #[must_use]
    pub fn with_preset(mut self, preset: EmissionPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Add a base velocity to every particle (builder pattern).
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Override the angular spread (builder pattern).
    #[must_use]
    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = Some(spread);
        self
    }

    /// Override the color palette (builder pattern).
    #[must_use]
    pub fn with_palette(mut self, palette: [Rgba; 4]) -> Self {
        self.palette = Some(palette);
        self
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// A bounded set of particles advanced in discrete time steps.
#[derive(Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    max_particles: usize,
    respect_motion_preference: bool,
    motion: MotionPreference,
    rng: SmallRng,
}

impl ParticleSystem {
    /// Create a system, resolving the motion preference from the
    /// environment.
    #[must_use]
    pub fn new(options: ParticleSystemOptions) -> Self {
        let motion = detect_motion_preference(&MotionHints::from_env());
        Self::with_motion_preference(options, motion)
    }

    /// Create a system with an explicitly resolved motion preference.
    ///
    /// The preference only suppresses emission when
    /// `respect_motion_preference` is set.
    #[must_use]
    pub fn with_motion_preference(
        options: ParticleSystemOptions,
        motion: MotionPreference,
    ) -> Self {
        let rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let max_particles = options.max_particles.max(1);
        Self {
            particles: Vec::with_capacity(max_particles.min(DEFAULT_MAX_PARTICLES)),
            max_particles,
            respect_motion_preference: options.respect_motion_preference,
            motion,
            rng,
        }
    }

    /// Spawn a batch of particles, returning how many were created.
    ///
    /// At most the remaining capacity is spawned; the rest of the request
    /// is dropped. Zero-count requests succeed with 0.
    pub fn emit(&mut self, options: &EmitOptions) -> Result<usize, FxError> {
        if !options.origin.is_finite() {
            return Err(FxError::InvalidEmission("origin must be finite".into()));
        }
        if let Some(velocity) = options.velocity
            && !velocity.is_finite()
        {
            return Err(FxError::InvalidEmission("velocity must be finite".into()));
        }
        if let Some(spread) = options.spread
            && !(spread.is_finite() && spread >= 0.0)
        {
            return Err(FxError::InvalidEmission(
                "spread must be finite and non-negative".into(),
            ));
        }

        if self.respect_motion_preference && self.motion == MotionPreference::Reduced {
            tracing::debug!(
                target: "proton.fx",
                preset = ?options.preset,
                "emission suppressed by reduced motion preference"
            );
            return Ok(0);
        }

        let remaining = self.max_particles - self.particles.len();
        let spawn = options.count.min(remaining);
        let params = options.preset.params();
        let spread = options.spread.unwrap_or(params.spread);
        let base_velocity = options.velocity.unwrap_or(Vec2::ZERO);
        let palette = options
            .palette
            .unwrap_or_else(|| Theme::default().particle_palette);

        for _ in 0..spawn {
            let angle =
                params.direction + self.rng.random_range(-spread / 2.0..=spread / 2.0);
            let speed = self.rng.random_range(params.speed_min..=params.speed_max);
            let lifetime = Duration::from_secs_f32(self.rng.random_range(
                params.lifetime_min.as_secs_f32()..=params.lifetime_max.as_secs_f32(),
            ));
            let velocity =
                Vec2::new(angle.cos() * speed, angle.sin() * speed) + base_velocity;
            self.particles.push(Particle {
                position: options.origin,
                velocity,
                size: self.rng.random_range(params.size_min..=params.size_max),
                color: palette[self.rng.random_range(0..palette.len())],
                opacity: params.opacity,
                rotation: self.rng.random_range(0.0..std::f32::consts::TAU),
                spin: self.rng.random_range(-params.spin_max..=params.spin_max),
                gravity: params.gravity,
                drag: params.drag,
                age: Duration::ZERO,
                lifetime,
                spawn_opacity: params.opacity,
            });
        }

        tracing::debug!(
            target: "proton.fx",
            spawned = spawn,
            requested = options.count,
            live = self.particles.len(),
            preset = ?options.preset,
            "particles emitted"
        );
        Ok(spawn)
    }

    /// Advance every particle by `dt` and drop the expired ones.
    ///
    /// Deterministic for a fixed delta; consumes no randomness.
    pub fn tick(&mut self, dt: Duration) {
        if dt.is_zero() || self.particles.is_empty() {
            return;
        }
        for particle in &mut self.particles {
            particle.step(dt);
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Remove every particle unconditionally.
    pub fn clear(&mut self) {
        self.particles.clear();
        tracing::debug!(target: "proton.fx", "particle set cleared");
    }

    /// Read-only snapshot of the live particles.
    ///
    /// The host owns the drawing surface; this crate owns only the data.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the set is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Configured particle capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_particles
    }

    /// The motion preference the system resolved at construction.
    #[inline]
    #[must_use]
    pub fn motion_preference(&self) -> MotionPreference {
        self.motion
    }

    /// Tear the system down, releasing its particle storage.
    ///
    /// There are no internal timers or background resources; dropping the
    /// system is equivalent. Provided for hosts that want an explicit
    /// teardown point.
    pub fn destroy(mut self) {
        self.clear();
    }
}

impl Animation for ParticleSystem {
    fn tick(&mut self, dt: Duration) {
        ParticleSystem::tick(self, dt);
    }

    fn is_complete(&self) -> bool {
        self.is_empty()
    }

    fn value(&self) -> f32 {
        self.len() as f32 / self.max_particles as f32
    }

    fn reset(&mut self) {
        self.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const DT: Duration = Duration::from_millis(16);

    fn seeded(max: usize) -> ParticleSystem {
        ParticleSystem::with_motion_preference(
            ParticleSystemOptions::new()
                .with_max_particles(max)
                .with_seed(7),
            MotionPreference::Full,
        )
    }

    #[test]
    fn emit_grows_by_exact_count_under_capacity() {
        let mut system = seeded(100);
        let spawned = system.emit(&EmitOptions::new(Vec2::ZERO).with_count(40)).unwrap();
        assert_eq!(spawned, 40);
        assert_eq!(system.len(), 40);
    }

    #[test]
    fn emit_never_exceeds_capacity() {
        let mut system = seeded(50);
        let spawned = system.emit(&EmitOptions::new(Vec2::ZERO).with_count(200)).unwrap();
        assert_eq!(spawned, 50);
        assert_eq!(system.len(), 50);

        // Subsequent requests against a full set spawn nothing.
        let spawned = system.emit(&EmitOptions::new(Vec2::ZERO).with_count(10)).unwrap();
        assert_eq!(spawned, 0);
        assert_eq!(system.len(), 50);
    }

    #[test]
    fn emit_zero_count_is_ok() {
        let mut system = seeded(10);
        assert_eq!(system.emit(&EmitOptions::new(Vec2::ZERO).with_count(0)).unwrap(), 0);
        assert!(system.is_empty());
    }

    #[test]
    fn emit_rejects_non_finite_origin() {
        let mut system = seeded(10);
        let err = system
            .emit(&EmitOptions::new(Vec2::new(f32::NAN, 0.0)))
            .unwrap_err();
        assert!(matches!(err, FxError::InvalidEmission(_)));
        assert!(system.is_empty(), "failed emission must not mutate the set");
    }

    #[test]
    fn emit_rejects_non_finite_velocity_and_spread() {
        let mut system = seeded(10);
        let opts = EmitOptions::new(Vec2::ZERO).with_velocity(Vec2::new(f32::INFINITY, 0.0));
        assert!(system.emit(&opts).is_err());

        let opts = EmitOptions::new(Vec2::ZERO).with_spread(f32::NAN);
        assert!(system.emit(&opts).is_err());

        let opts = EmitOptions::new(Vec2::ZERO).with_spread(-1.0);
        assert!(system.emit(&opts).is_err());
    }

    #[test]
    fn clear_empties_regardless_of_state() {
        let mut system = seeded(100);
        system.emit(&EmitOptions::new(Vec2::ZERO).with_count(30)).unwrap();
        system.tick(DT);
        system.clear();
        assert!(system.is_empty());

        // Clearing an empty set is fine too.
        system.clear();
        assert!(system.is_empty());
    }

    #[test]
    fn tick_observes_prior_emission() {
        let mut system = seeded(10);
        system.emit(&EmitOptions::new(Vec2::new(5.0, 5.0)).with_count(10)).unwrap();
        let before: Vec<_> = system.particles().iter().map(|p| p.position).collect();
        system.tick(DT);
        let moved = system
            .particles()
            .iter()
            .zip(&before)
            .any(|(p, b)| p.position != *b);
        assert!(moved, "tick must advance previously emitted particles");
    }

    #[test]
    fn tick_zero_delta_is_noop() {
        let mut system = seeded(10);
        system.emit(&EmitOptions::new(Vec2::ZERO)).unwrap();
        let before: Vec<_> = system.particles().iter().map(|p| p.position).collect();
        system.tick(Duration::ZERO);
        let after: Vec<_> = system.particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn same_seed_reproduces_trajectories() {
        let run = || {
            let mut system = seeded(64);
            system
                .emit(
                    &EmitOptions::new(Vec2::new(10.0, 10.0))
                        .with_count(64)
                        .with_preset(EmissionPreset::Explosion),
                )
                .unwrap();
            for _ in 0..30 {
                system.tick(DT);
            }
            system
                .particles()
                .iter()
                .map(|p| (p.position.x, p.position.y, p.opacity))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn particles_expire() {
        let mut system = seeded(32);
        system
            .emit(
                &EmitOptions::new(Vec2::ZERO)
                    .with_count(32)
                    .with_preset(EmissionPreset::Sparkle),
            )
            .unwrap();
        // Sparkle lives at most 900ms; tick well past that.
        for _ in 0..120 {
            system.tick(DT);
        }
        assert!(system.is_empty(), "expired particles must be removed");
    }

    #[test]
    fn opacity_never_increases() {
        let mut system = seeded(16);
        system.emit(&EmitOptions::new(Vec2::ZERO).with_count(16)).unwrap();
        let mut last: Vec<f32> = system.particles().iter().map(|p| p.opacity).collect();
        for _ in 0..60 {
            system.tick(DT);
            let current: Vec<f32> = system.particles().iter().map(|p| p.opacity).collect();
            // Positional compare is only sound while nothing was removed
            // (tick never adds, so equal lengths mean identical ordering).
            if current.len() == last.len() {
                for (new, old) in current.iter().zip(last.iter()) {
                    assert!(new <= old, "opacity must be monotonically non-increasing");
                }
            }
            last = current;
        }
    }

    #[test]
    fn reduced_motion_suppresses_emission() {
        let mut system = ParticleSystem::with_motion_preference(
            ParticleSystemOptions::new().with_seed(1),
            MotionPreference::Reduced,
        );
        let spawned = system.emit(&EmitOptions::new(Vec2::ZERO).with_count(20)).unwrap();
        assert_eq!(spawned, 0);
        assert!(system.is_empty());
    }

    #[test]
    fn reduced_motion_ignored_when_not_respected() {
        let mut system = ParticleSystem::with_motion_preference(
            ParticleSystemOptions::new()
                .with_seed(1)
                .with_respect_motion_preference(false),
            MotionPreference::Reduced,
        );
        let spawned = system.emit(&EmitOptions::new(Vec2::ZERO).with_count(20)).unwrap();
        assert_eq!(spawned, 20);
    }

    #[test]
    fn capacity_clamps_to_one() {
        let system = seeded(0);
        assert_eq!(system.capacity(), 1);
    }

    #[test]
    fn emit_uses_custom_palette() {
        let palette = [Rgba::rgb(9, 9, 9); 4];
        let mut system = seeded(8);
        system
            .emit(&EmitOptions::new(Vec2::ZERO).with_count(8).with_palette(palette))
            .unwrap();
        assert!(system.particles().iter().all(|p| p.color == Rgba::rgb(9, 9, 9)));
    }

    #[test]
    fn animation_seam_reflects_fill() {
        let mut system = seeded(10);
        assert!(Animation::is_complete(&system));
        system.emit(&EmitOptions::new(Vec2::ZERO).with_count(5)).unwrap();
        assert!((Animation::value(&system) - 0.5).abs() < f32::EPSILON);
        Animation::reset(&mut system);
        assert!(system.is_empty());
    }

    #[test]
    fn destroy_consumes_the_system() {
        let mut system = seeded(10);
        system.emit(&EmitOptions::new(Vec2::ZERO)).unwrap();
        system.destroy();
    }

    #[test]
    fn base_velocity_shifts_the_batch() {
        let mut with_push = seeded(32);
        with_push
            .emit(
                &EmitOptions::new(Vec2::ZERO)
                    .with_count(32)
                    .with_velocity(Vec2::new(1000.0, 0.0)),
            )
            .unwrap();
        with_push.tick(Duration::from_millis(100));
        let mean_x = with_push
            .particles()
            .iter()
            .map(|p| p.position.x)
            .sum::<f32>()
            / with_push.len() as f32;
        assert!(mean_x > 50.0, "base velocity must push the whole batch");
    }
}
