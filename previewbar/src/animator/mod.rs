//! Pluggable show/hide/move strategies for the preview overlay.
//!
//! Implementations: [`FadeAnimator`] and [`MorphAnimator`].

mod fade;
pub(crate) mod morph;

pub use fade::FadeAnimator;
pub use morph::{MorphAnimator, MorphPhase, MorphTimings};

use crate::animation::{AnimationEngine, TweenEnd};
use crate::bar::ScrubberState;
use crate::geometry::{self, MorphPath};
use crate::layout::PreviewLayout;
use crate::stage::Stage;

/// Everything an animator may read or drive during one call.
pub struct AnimatorContext<'a> {
    pub stage: &'a mut Stage,
    pub engine: &'a mut dyn AnimationEngine,
    pub bar: &'a ScrubberState,
    pub layout: &'a PreviewLayout,
}

impl AnimatorContext<'_> {
    /// Fraction of the track covered by the scrubber's progress.
    pub fn fraction(&self) -> f32 {
        geometry::progress_fraction(self.bar.progress, self.bar.max, self.layout.direction)
    }

    /// Travel path of the morph element for the current progress and overlay
    /// position.
    pub fn morph_path(&self) -> MorphPath {
        MorphPath::new(
            self.layout.bar,
            self.stage.overlay.bounds(),
            self.bar.thumb_offset as f32,
            self.fraction(),
        )
    }

    /// Collapsed and fully open radius of the overlay's circular reveal.
    pub fn reveal_radii(&self) -> (f32, f32) {
        geometry::reveal_radii(self.stage.overlay.width, self.stage.overlay.height)
    }
}

/// Reported by an animator when a show or hide sequence has run to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Shown,
    Hidden,
}

/// Animates the overlay that displays the preview.
///
/// `show` and `hide` may be called while a previous sequence is still
/// running; implementations pick up from the current visual state.
pub trait PreviewAnimator {
    /// Follow a progress change. The delegate has already placed the overlay
    /// at its new x.
    fn move_preview(&mut self, cx: &mut AnimatorContext<'_>);

    /// Start animating the overlay in.
    fn show(&mut self, cx: &mut AnimatorContext<'_>);

    /// Start animating the overlay out.
    fn hide(&mut self, cx: &mut AnimatorContext<'_>);

    /// Stop everything started by `move_preview`, `show` or `hide`.
    fn cancel(&mut self, cx: &mut AnimatorContext<'_>);

    /// Called for every tween the engine completed. Returns the sequence that
    /// finished, if this tween was its last step.
    fn on_tween_end(&mut self, end: &TweenEnd, cx: &mut AnimatorContext<'_>) -> Option<Settled>;
}
