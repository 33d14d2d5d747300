#![forbid(unsafe_code)]

//! Animation primitives: the tick seam, easing, and frame timing.
//!
//! Proton UI never owns a frame loop. Anything time-driven implements
//! [`Animation`] and is advanced by the host application's own frame driver
//! through explicit `tick(dt)` calls. [`FrameClock`] converts wall-clock
//! readings into capped deltas for hosts that want one.
//!
//! # Invariants
//!
//! 1. `tick` with `Duration::ZERO` is a no-op for every implementor.
//! 2. `value()` is always in [0.0, 1.0].
//! 3. `reset()` returns an implementor to its initial state.
//! 4. [`FrameClock`] deltas never exceed the configured cap, so a stalled
//!    host cannot feed a huge dt into a simulation step.

use std::time::Duration;

use web_time::Instant;

/// Default cap for a single frame delta (100ms). Larger gaps are clamped;
/// a host that stalls resumes smoothly instead of teleporting particles.
const DEFAULT_FRAME_CAP: Duration = Duration::from_millis(100);

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A discrete-time animation driven by the host's frame loop.
pub trait Animation {
    /// Advance by `dt`. Implementations must be deterministic for a fixed dt.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has finished.
    fn is_complete(&self) -> bool;

    /// Current value, normalized to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);
}

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// An easing function mapping linear progress to eased progress.
///
/// Input and output are both in [0.0, 1.0].
pub type EasingFn = fn(f32) -> f32;

/// Quadratic ease-in: slow start, fast finish.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out: fast start, slow finish.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Fade
// ---------------------------------------------------------------------------

/// Linear 0→1 progress over a fixed duration, with optional easing.
///
/// The minimal [`Animation`] implementor; also used by tests as a probe.
#[derive(Debug)]
pub struct Fade {
    duration: Duration,
    elapsed: Duration,
    easing: Option<EasingFn>,
}

impl Fade {
    /// Create a fade over `duration`. Zero durations are clamped to 1ns so
    /// progress stays well-defined.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            elapsed: Duration::ZERO,
            easing: None,
        }
    }

    /// Apply an easing function to the output (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Total duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        let linear =
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32;
        match self.easing {
            Some(easing) => easing(linear),
            None => linear,
        }
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

// ---------------------------------------------------------------------------
// FrameClock
// ---------------------------------------------------------------------------

/// Converts wall-clock readings into capped frame deltas.
///
/// The first `tick()` returns [`Duration::ZERO`]; every later call returns
/// the time since the previous call, clamped to the cap.
#[derive(Debug)]
pub struct FrameClock {
    last: Option<Instant>,
    cap: Duration,
}

impl FrameClock {
    /// Create a clock with the default 100ms cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: None,
            cap: DEFAULT_FRAME_CAP,
        }
    }

    /// Override the delta cap (builder pattern). Zero is clamped to 1ms.
    #[must_use]
    pub fn with_cap(mut self, cap: Duration) -> Self {
        self.cap = if cap.is_zero() {
            Duration::from_millis(1)
        } else {
            cap
        };
        self
    }

    /// The configured delta cap.
    #[inline]
    #[must_use]
    pub fn cap(&self) -> Duration {
        self.cap
    }

    /// Delta since the previous call, clamped to the cap.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).min(self.cap),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        dt
    }

    /// Forget the previous reading; the next `tick()` returns zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
