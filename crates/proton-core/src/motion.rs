#![forbid(unsafe_code)]

//! Motion preference detection.
//!
//! Hosts that respect reduced-motion accessibility settings resolve a
//! [`MotionPreference`] once and hand it to effect constructors. Environment
//! capture is separated from resolution so tests never touch the process
//! environment: [`MotionHints::from_env`] reads the environment, and
//! [`detect_motion_preference`] is a pure function over the hints.

use std::env;

/// Resolved motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionPreference {
    /// Full animation.
    #[default]
    Full,
    /// The user prefers reduced motion; decorative animation should be
    /// suppressed.
    Reduced,
}

/// External hints for motion preference detection.
#[derive(Debug, Clone, Default)]
pub struct MotionHints {
    /// Explicit reduced-motion override. `None` means undetected.
    pub reduce: Option<bool>,
}

impl MotionHints {
    /// Capture hints from the environment.
    ///
    /// `PROTON_REDUCED_MOTION` set to anything other than `0` or the empty
    /// string requests reduced motion.
    #[must_use]
    pub fn from_env() -> Self {
        let reduce = env::var("PROTON_REDUCED_MOTION")
            .ok()
            .map(|value| reduce_from_value(&value));
        Self { reduce }
    }

    /// Override the reduced-motion hint (builder pattern).
    #[must_use]
    pub fn with_reduce(mut self, reduce: bool) -> Self {
        self.reduce = Some(reduce);
        self
    }
}

/// Interpret an environment value as a reduced-motion request.
fn reduce_from_value(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

/// Resolve the motion preference from hints.
///
/// Undetected hints resolve to [`MotionPreference::Full`].
#[must_use]
pub fn detect_motion_preference(hints: &MotionHints) -> MotionPreference {
    if hints.reduce.unwrap_or(false) {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    }
}
