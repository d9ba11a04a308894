//! Morphs the scrubber's thumb into the preview overlay.
//!
//! Show runs in two steps: the morph element travels from the thumb to the
//! overlay's center while growing to the overlay's height, then the overlay
//! opens with a circular reveal while its tint layer fades out. Hide runs the
//! same steps backwards. Either sequence can be interrupted by the other at
//! any point and continues from what is currently on screen.

use std::time::Duration;

use super::{AnimatorContext, PreviewAnimator, Settled};
use crate::animation::{Tween, TweenEnd, TweenId};
use crate::geometry::MorphPath;
use crate::stage::{ElementId, Property};
use crate::transitions::{Easing, TransitionConfig};

pub const SHOW_TRANSLATION_MS: u64 = 150;
pub const REVEAL_MS: u64 = 150;
pub const UNREVEAL_MS: u64 = 125;
pub const HIDE_TRANSLATION_MS: u64 = 125;

/// Durations and easings of the four steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorphTimings {
    pub show_translation: TransitionConfig,
    pub reveal: TransitionConfig,
    pub unreveal: TransitionConfig,
    pub hide_translation: TransitionConfig,
}

impl Default for MorphTimings {
    fn default() -> Self {
        Self::from_millis(SHOW_TRANSLATION_MS, REVEAL_MS, UNREVEAL_MS, HIDE_TRANSLATION_MS)
    }
}

impl MorphTimings {
    pub fn from_millis(
        show_translation: u64,
        reveal: u64,
        unreveal: u64,
        hide_translation: u64,
    ) -> Self {
        Self {
            show_translation: TransitionConfig::millis(show_translation, Easing::EaseInOut),
            reveal: TransitionConfig::millis(reveal, Easing::EaseOut),
            unreveal: TransitionConfig::millis(unreveal, Easing::EaseIn),
            hide_translation: TransitionConfig::millis(hide_translation, Easing::EaseIn),
        }
    }
}

/// Which step of a sequence is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphPhase {
    Idle,
    MovingToShow,
    MorphingToShow,
    MorphingToHide,
    MovingToHide,
}

/// Running step plus the tween whose completion ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Idle,
    MovingToShow(TweenId),
    MorphingToShow(TweenId),
    MorphingToHide(TweenId),
    MovingToHide(TweenId),
}

#[derive(Debug, Clone)]
pub struct MorphAnimator {
    timings: MorphTimings,
    step: Step,
}

impl Default for MorphAnimator {
    fn default() -> Self {
        Self::new(MorphTimings::default())
    }
}

impl MorphAnimator {
    pub fn new(timings: MorphTimings) -> Self {
        Self {
            timings,
            step: Step::Idle,
        }
    }

    pub fn phase(&self) -> MorphPhase {
        match self.step {
            Step::Idle => MorphPhase::Idle,
            Step::MovingToShow(_) => MorphPhase::MovingToShow,
            Step::MorphingToShow(_) => MorphPhase::MorphingToShow,
            Step::MorphingToHide(_) => MorphPhase::MorphingToHide,
            Step::MovingToHide(_) => MorphPhase::MovingToHide,
        }
    }

    fn tint(cx: &mut AnimatorContext<'_>) {
        let color = cx.bar.color;
        if cx.stage.morph.color != Some(color) {
            cx.stage.morph.color = Some(color);
            cx.stage.tint.color = Some(color);
        }
    }

    fn cancel_travel(cx: &mut AnimatorContext<'_>) {
        cx.engine.cancel_element(ElementId::Morph);
    }

    fn cancel_reveal(cx: &mut AnimatorContext<'_>) {
        cx.engine.cancel(ElementId::Overlay, Property::RevealRadius);
        cx.engine.cancel(ElementId::Tint, Property::Alpha);
    }

    /// Put the morph element on the thumb, invisible overlay, and travel.
    fn start_show(&mut self, cx: &mut AnimatorContext<'_>) {
        let path = cx.morph_path();
        let (collapsed, _) = cx.reveal_radii();

        cx.stage.overlay.visible = false;
        cx.stage.overlay.alpha = 1.0;
        cx.stage.overlay.reveal_radius = Some(collapsed);
        cx.stage.tint.alpha = 1.0;
        cx.stage.tint.visible = false;

        let morph = &mut cx.stage.morph;
        morph.width = path.size;
        morph.height = path.size;
        morph.x = path.start.0;
        morph.y = path.start.1;
        morph.scale = 0.0;
        morph.alpha = 1.0;
        morph.visible = true;

        self.move_to_show(cx, &path, self.timings.show_translation);
    }

    /// Travel from wherever the morph element is towards the overlay.
    fn move_to_show(
        &mut self,
        cx: &mut AnimatorContext<'_>,
        path: &MorphPath,
        config: TransitionConfig,
    ) {
        let (x, y, scale) = morph_position(cx);
        cx.engine
            .start(Tween::new(ElementId::Morph, Property::X, x, path.end.0, config));
        cx.engine
            .start(Tween::new(ElementId::Morph, Property::Y, y, path.end.1, config));
        let lead = cx.engine.start(Tween::new(
            ElementId::Morph,
            Property::Scale,
            scale,
            path.scale,
            config,
        ));
        self.step = Step::MovingToShow(lead);
    }

    /// Travel from wherever the morph element is back onto the thumb.
    fn move_to_hide(
        &mut self,
        cx: &mut AnimatorContext<'_>,
        path: &MorphPath,
        config: TransitionConfig,
    ) {
        let (x, y, scale) = morph_position(cx);
        cx.engine
            .start(Tween::new(ElementId::Morph, Property::X, x, path.start.0, config));
        cx.engine
            .start(Tween::new(ElementId::Morph, Property::Y, y, path.start.1, config));
        let lead = cx.engine.start(Tween::new(
            ElementId::Morph,
            Property::Scale,
            scale,
            0.0,
            config,
        ));
        self.step = Step::MovingToHide(lead);
    }

    /// Open the overlay from its current radius.
    fn reveal(&mut self, cx: &mut AnimatorContext<'_>, config: TransitionConfig) {
        let (_, full) = cx.reveal_radii();
        let radius = cx.stage.overlay.get(Property::RevealRadius);
        let tint_alpha = cx.stage.tint.alpha;

        cx.stage.overlay.visible = true;
        cx.stage.tint.visible = true;
        cx.stage.morph.visible = false;

        cx.engine.start(Tween::new(
            ElementId::Tint,
            Property::Alpha,
            tint_alpha,
            0.0,
            config,
        ));
        let lead = cx.engine.start(Tween::new(
            ElementId::Overlay,
            Property::RevealRadius,
            radius,
            full,
            config,
        ));
        self.step = Step::MorphingToShow(lead);
    }

    /// Close the overlay from its current radius.
    fn unreveal(&mut self, cx: &mut AnimatorContext<'_>, config: TransitionConfig) {
        let (collapsed, _) = cx.reveal_radii();
        let radius = cx.stage.overlay.get(Property::RevealRadius);
        let tint_alpha = cx.stage.tint.alpha;

        cx.stage.overlay.visible = true;
        cx.stage.overlay.reveal_radius = Some(radius);
        cx.stage.tint.visible = true;
        cx.stage.morph.visible = false;

        cx.engine.start(Tween::new(
            ElementId::Tint,
            Property::Alpha,
            tint_alpha,
            1.0,
            config,
        ));
        let lead = cx.engine.start(Tween::new(
            ElementId::Overlay,
            Property::RevealRadius,
            radius,
            collapsed,
            config,
        ));
        self.step = Step::MorphingToHide(lead);
    }

    /// Full hide from a settled, visible overlay.
    fn start_hide(&mut self, cx: &mut AnimatorContext<'_>) {
        let path = cx.morph_path();
        let (_, full) = cx.reveal_radii();

        cx.stage.overlay.reveal_radius = Some(full);
        cx.stage.tint.alpha = 0.0;

        let morph = &mut cx.stage.morph;
        morph.width = path.size;
        morph.height = path.size;
        morph.x = path.end.0;
        morph.y = path.end.1;
        morph.scale = path.scale;

        self.unreveal(cx, self.timings.unreveal);
    }

    fn finish_reveal(&mut self, cx: &mut AnimatorContext<'_>) -> Option<Settled> {
        cx.stage.overlay.reveal_radius = None;
        cx.stage.tint.alpha = 0.0;
        cx.stage.tint.visible = false;
        self.step = Step::Idle;
        Some(Settled::Shown)
    }

    fn finish_unreveal(&mut self, cx: &mut AnimatorContext<'_>) {
        let path = cx.morph_path();
        let (collapsed, _) = cx.reveal_radii();
        cx.stage.overlay.visible = false;
        cx.stage.overlay.reveal_radius = Some(collapsed);
        cx.stage.tint.alpha = 1.0;
        cx.stage.tint.visible = false;

        let morph = &mut cx.stage.morph;
        morph.x = path.end.0;
        morph.y = path.end.1;
        morph.scale = path.scale;
        morph.visible = true;

        self.move_to_hide(cx, &path, self.timings.hide_translation);
    }

    fn finish_hide(&mut self, cx: &mut AnimatorContext<'_>) -> Option<Settled> {
        cx.stage.overlay.reveal_radius = None;
        cx.stage.tint.alpha = 0.0;
        cx.stage.tint.visible = false;
        cx.stage.morph.visible = false;
        cx.stage.morph.scale = 0.0;
        self.step = Step::Idle;
        Some(Settled::Hidden)
    }

    /// Re-aim a running translation at `target_x`, keeping its remaining time.
    fn retarget_x(&self, cx: &mut AnimatorContext<'_>, target_x: f32, easing: Easing) {
        let Some(end) = cx.engine.cancel(ElementId::Morph, Property::X) else {
            return;
        };
        let from = cx.stage.morph.x;
        cx.engine.start(Tween::new(
            ElementId::Morph,
            Property::X,
            from,
            target_x,
            TransitionConfig::new(end.remaining, easing),
        ));
    }
}

impl PreviewAnimator for MorphAnimator {
    fn move_preview(&mut self, cx: &mut AnimatorContext<'_>) {
        match self.step {
            Step::MovingToShow(_) => {
                let path = cx.morph_path();
                self.retarget_x(cx, path.end.0, self.timings.show_translation.easing);
            }
            Step::MovingToHide(_) => {
                let path = cx.morph_path();
                self.retarget_x(cx, path.start.0, self.timings.hide_translation.easing);
            }
            Step::Idle | Step::MorphingToShow(_) | Step::MorphingToHide(_) => {}
        }
    }

    fn show(&mut self, cx: &mut AnimatorContext<'_>) {
        Self::tint(cx);
        match self.step {
            Step::MovingToShow(_) | Step::MorphingToShow(_) => {}
            Step::Idle => {
                Self::cancel_travel(cx);
                Self::cancel_reveal(cx);
                self.start_show(cx);
            }
            Step::MorphingToHide(_) => {
                Self::cancel_reveal(cx);
                let config = self.timings.reveal;
                let done = reveal_progress(cx);
                self.reveal(cx, scaled(config, 1.0 - done));
            }
            Step::MovingToHide(_) => {
                Self::cancel_travel(cx);
                let path = cx.morph_path();
                let done = travel_progress(cx, &path);
                let config = self.timings.show_translation;
                self.move_to_show(cx, &path, scaled(config, 1.0 - done));
            }
        }
        log::debug!("[morph] show -> {:?}", self.phase());
    }

    fn hide(&mut self, cx: &mut AnimatorContext<'_>) {
        Self::tint(cx);
        match self.step {
            Step::MorphingToHide(_) | Step::MovingToHide(_) => {}
            Step::Idle => {
                Self::cancel_travel(cx);
                Self::cancel_reveal(cx);
                self.start_hide(cx);
            }
            Step::MorphingToShow(_) => {
                Self::cancel_reveal(cx);
                let config = self.timings.unreveal;
                let done = reveal_progress(cx);
                self.unreveal(cx, scaled(config, done));
            }
            Step::MovingToShow(_) => {
                Self::cancel_travel(cx);
                let path = cx.morph_path();
                let done = travel_progress(cx, &path);
                let config = self.timings.hide_translation;
                self.move_to_hide(cx, &path, scaled(config, done));
            }
        }
        log::debug!("[morph] hide -> {:?}", self.phase());
    }

    fn cancel(&mut self, cx: &mut AnimatorContext<'_>) {
        for element in [ElementId::Overlay, ElementId::Morph, ElementId::Tint] {
            cx.engine.cancel_element(element);
        }
        self.step = Step::Idle;
    }

    fn on_tween_end(&mut self, end: &TweenEnd, cx: &mut AnimatorContext<'_>) -> Option<Settled> {
        if end.is_cancelled() {
            return None;
        }
        match self.step {
            Step::MovingToShow(lead) if lead == end.id => {
                self.reveal(cx, self.timings.reveal);
                None
            }
            Step::MorphingToShow(lead) if lead == end.id => self.finish_reveal(cx),
            Step::MorphingToHide(lead) if lead == end.id => {
                self.finish_unreveal(cx);
                None
            }
            Step::MovingToHide(lead) if lead == end.id => self.finish_hide(cx),
            _ => None,
        }
    }
}

fn morph_position(cx: &AnimatorContext<'_>) -> (f32, f32, f32) {
    let morph = &cx.stage.morph;
    (morph.x, morph.y, morph.scale)
}

/// How far the morph element has grown towards the overlay, in `[0, 1]`.
fn travel_progress(cx: &AnimatorContext<'_>, path: &MorphPath) -> f32 {
    if path.scale <= 0.0 {
        return 1.0;
    }
    (cx.stage.morph.scale / path.scale).clamp(0.0, 1.0)
}

/// How far the overlay has opened, in `[0, 1]`.
fn reveal_progress(cx: &AnimatorContext<'_>) -> f32 {
    let (collapsed, full) = cx.reveal_radii();
    let span = full - collapsed;
    if span <= 0.0 {
        return 1.0;
    }
    let radius = cx.stage.overlay.get(Property::RevealRadius);
    ((radius - collapsed) / span).clamp(0.0, 1.0)
}

/// Shorten a step to the fraction of it that is left to play.
fn scaled(config: TransitionConfig, fraction: f32) -> TransitionConfig {
    let fraction = fraction.clamp(0.0, 1.0);
    config.with_duration(Duration::from_secs_f32(config.duration.as_secs_f32() * fraction))
}
