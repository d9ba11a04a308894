use std::time::Duration;

/// Timing of a single tween: how long it runs and how it is eased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn millis(ms: u64, easing: Easing) -> Self {
        Self::new(Duration::from_millis(ms), easing)
    }

    /// Same easing, different duration.
    pub fn with_duration(self, duration: Duration) -> Self {
        Self { duration, ..self }
    }
}

/// Easing curve of a tween.
///
/// These are the accelerate, decelerate and accelerate-decelerate curves the
/// preview sequences are timed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Starts slow, ends at full speed.
    EaseIn,
    /// Starts at full speed, settles slowly.
    EaseOut,
    /// Cosine curve, slow at both ends.
    EaseInOut,
}

impl Easing {
    /// Map linear progress to eased progress. `t` is clamped to `0.0..=1.0`
    /// and both ends map exactly onto themselves.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => {
                let rest = 1.0 - t;
                1.0 - rest * rest
            }
            Easing::EaseInOut => 0.5 - (std::f32::consts::PI * t).cos() / 2.0,
        }
    }
}
