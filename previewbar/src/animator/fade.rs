use std::time::Duration;

use super::{AnimatorContext, PreviewAnimator, Settled};
use crate::animation::{Tween, TweenEnd, TweenId};
use crate::stage::{ElementId, Property};
use crate::transitions::{Easing, TransitionConfig};

const FADE_DURATION: Duration = Duration::from_millis(350);

/// Cross-fades the overlay's opacity. Positioning is left to the delegate.
#[derive(Debug, Clone)]
pub struct FadeAnimator {
    show: TransitionConfig,
    hide: TransitionConfig,
    fade: Fade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fade {
    Idle,
    In(TweenId),
    Out(TweenId),
}

impl Default for FadeAnimator {
    fn default() -> Self {
        Self::new(FADE_DURATION, FADE_DURATION)
    }
}

impl FadeAnimator {
    pub fn new(show: Duration, hide: Duration) -> Self {
        Self {
            show: TransitionConfig::new(show, Easing::Linear),
            hide: TransitionConfig::new(hide, Easing::Linear),
            fade: Fade::Idle,
        }
    }

    /// True while a fade in or out is running.
    pub fn is_fading(&self) -> bool {
        self.fade != Fade::Idle
    }

    /// Stop the running fade. An interrupted fade-out still leaves the
    /// overlay hidden at full opacity.
    fn stop(&mut self, cx: &mut AnimatorContext<'_>) {
        cx.engine.cancel(ElementId::Overlay, Property::Alpha);
        if let Fade::Out(_) = self.fade {
            reset_after_hide(cx);
        }
        self.fade = Fade::Idle;
    }
}

impl PreviewAnimator for FadeAnimator {
    fn move_preview(&mut self, _cx: &mut AnimatorContext<'_>) {}

    fn show(&mut self, cx: &mut AnimatorContext<'_>) {
        self.stop(cx);
        let overlay = &mut cx.stage.overlay;
        overlay.alpha = 0.0;
        overlay.visible = true;
        let id = cx.engine.start(Tween::new(
            ElementId::Overlay,
            Property::Alpha,
            0.0,
            1.0,
            self.show,
        ));
        self.fade = Fade::In(id);
    }

    fn hide(&mut self, cx: &mut AnimatorContext<'_>) {
        self.stop(cx);
        let overlay = &mut cx.stage.overlay;
        overlay.visible = true;
        overlay.alpha = 1.0;
        let id = cx.engine.start(Tween::new(
            ElementId::Overlay,
            Property::Alpha,
            1.0,
            0.0,
            self.hide,
        ));
        self.fade = Fade::Out(id);
    }

    fn cancel(&mut self, cx: &mut AnimatorContext<'_>) {
        self.stop(cx);
    }

    fn on_tween_end(&mut self, end: &TweenEnd, cx: &mut AnimatorContext<'_>) -> Option<Settled> {
        if end.is_cancelled() {
            return None;
        }
        match self.fade {
            Fade::In(id) if id == end.id => {
                self.fade = Fade::Idle;
                Some(Settled::Shown)
            }
            Fade::Out(id) if id == end.id => {
                self.fade = Fade::Idle;
                reset_after_hide(cx);
                Some(Settled::Hidden)
            }
            _ => None,
        }
    }
}

// The next show may skip setting the opacity, so a hidden overlay must never
// be left transparent.
fn reset_after_hide(cx: &mut AnimatorContext<'_>) {
    cx.stage.overlay.alpha = 1.0;
    cx.stage.overlay.visible = false;
}
