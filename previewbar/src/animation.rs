//! Tween engine port and the frame-driven reference engine.
//!
//! The host owns the clock: it calls [`AnimationEngine::advance`] once per
//! frame with the elapsed time, the engine writes interpolated values into the
//! [`Stage`] and reports which tweens finished. Completion is never signalled
//! from inside `start`, so callers can start tweens from within an end handler
//! without re-entering themselves.

use std::time::Duration;

use crate::stage::{ElementId, Property, Stage};
use crate::transitions::{Easing, TransitionConfig};

/// Handle of a started tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

/// A request to interpolate one property of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub element: ElementId,
    pub property: Property,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(
        element: ElementId,
        property: Property,
        from: f32,
        to: f32,
        config: TransitionConfig,
    ) -> Self {
        Self {
            element,
            property,
            from,
            to,
            duration: config.duration,
            easing: config.easing,
        }
    }

    /// Interpolated value at `elapsed`.
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let eased = self.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }
}

/// Why a tween stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Completed,
    Cancelled,
}

/// Report of a tween that stopped running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenEnd {
    pub id: TweenId,
    pub element: ElementId,
    pub property: Property,
    pub reason: EndReason,
    /// Time the tween still had to run; zero when it completed.
    pub remaining: Duration,
}

impl TweenEnd {
    pub fn is_cancelled(&self) -> bool {
        self.reason == EndReason::Cancelled
    }
}

/// The host's tweening capability, injected into the delegate.
pub trait AnimationEngine {
    /// Start a tween. A tween already running on the same element and
    /// property is dropped without being reported.
    fn start(&mut self, tween: Tween) -> TweenId;

    /// Stop the tween running on `element`/`property`, if any. The stage
    /// keeps whatever value was last written.
    fn cancel(&mut self, element: ElementId, property: Property) -> Option<TweenEnd>;

    /// Stop every tween running on `element`.
    fn cancel_element(&mut self, element: ElementId) -> Vec<TweenEnd> {
        [
            Property::X,
            Property::Y,
            Property::Scale,
            Property::Alpha,
            Property::RevealRadius,
        ]
        .into_iter()
        .filter_map(|property| self.cancel(element, property))
        .collect()
    }

    fn is_running(&self, element: ElementId, property: Property) -> bool;

    /// Returns true if any tween is still running.
    fn has_active(&self) -> bool;

    /// Move time forward by `dt`, write interpolated values into `stage` and
    /// return the tweens that completed, in the order they were started.
    fn advance(&mut self, stage: &mut Stage, dt: Duration) -> Vec<TweenEnd>;
}

#[derive(Debug, Clone)]
struct ActiveTween {
    id: TweenId,
    tween: Tween,
    elapsed: Duration,
}

impl ActiveTween {
    fn remaining(&self) -> Duration {
        self.tween.duration.saturating_sub(self.elapsed)
    }

    fn end(&self, reason: EndReason) -> TweenEnd {
        TweenEnd {
            id: self.id,
            element: self.tween.element,
            property: self.tween.property,
            reason,
            remaining: match reason {
                EndReason::Completed => Duration::ZERO,
                EndReason::Cancelled => self.remaining(),
            },
        }
    }
}

/// Reference engine: time only moves when [`AnimationEngine::advance`] is
/// called, which makes it deterministic.
#[derive(Debug, Default)]
pub struct Timeline {
    active: Vec<ActiveTween>,
    next_id: u64,
    /// Reduced motion flag - when true, tweens complete on the next advance.
    reduced_motion: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Number of running tweens.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Time until the earliest running tween completes.
    pub fn next_completion(&self) -> Option<Duration> {
        self.active.iter().map(ActiveTween::remaining).min()
    }

    /// Target value of the tween running on `element`/`property`.
    pub fn target(&self, element: ElementId, property: Property) -> Option<f32> {
        self.find(element, property).map(|a| a.tween.to)
    }

    fn find(&self, element: ElementId, property: Property) -> Option<&ActiveTween> {
        self.active
            .iter()
            .find(|a| a.tween.element == element && a.tween.property == property)
    }
}

impl AnimationEngine for Timeline {
    fn start(&mut self, mut tween: Tween) -> TweenId {
        if self.reduced_motion {
            tween.duration = Duration::ZERO;
        }

        self.active
            .retain(|a| !(a.tween.element == tween.element && a.tween.property == tween.property));

        let id = TweenId(self.next_id);
        self.next_id += 1;
        log::trace!(
            "[timeline] start {:?} {:?}.{:?} {} -> {} over {:?}",
            id,
            tween.element,
            tween.property,
            tween.from,
            tween.to,
            tween.duration
        );
        self.active.push(ActiveTween {
            id,
            tween,
            elapsed: Duration::ZERO,
        });
        id
    }

    fn cancel(&mut self, element: ElementId, property: Property) -> Option<TweenEnd> {
        let index = self
            .active
            .iter()
            .position(|a| a.tween.element == element && a.tween.property == property)?;
        let removed = self.active.remove(index);
        log::trace!("[timeline] cancel {:?} {:?}.{:?}", removed.id, element, property);
        Some(removed.end(EndReason::Cancelled))
    }

    fn is_running(&self, element: ElementId, property: Property) -> bool {
        self.find(element, property).is_some()
    }

    fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    fn advance(&mut self, stage: &mut Stage, dt: Duration) -> Vec<TweenEnd> {
        let mut ended = Vec::new();

        for active in &mut self.active {
            active.elapsed = active.elapsed.saturating_add(dt);
            let value = active.tween.sample(active.elapsed);
            stage.set(active.tween.element, active.tween.property, value);
            if active.elapsed >= active.tween.duration {
                ended.push(active.end(EndReason::Completed));
            }
        }

        self.active.retain(|a| a.elapsed < a.tween.duration);
        ended
    }
}
