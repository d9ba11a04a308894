//! The preview coordinator.
//!
//! [`PreviewDelegate`] sits between a scrubber and its preview overlay. The
//! scrubber reports gestures and progress, the delegate keeps the overlay
//! positioned over the thumb, decides when it should show or hide, drives the
//! active [`PreviewAnimator`] and fans events out to listeners.
//!
//! Everything runs on the host's UI thread. Animation completions only arrive
//! through [`PreviewDelegate::tick`], so the delegate is never re-entered from
//! inside one of its own calls.

use std::rc::Rc;
use std::time::Duration;

use crate::animation::{AnimationEngine, Timeline};
use crate::animator::{AnimatorContext, PreviewAnimator, Settled};
use crate::bar::{Scrubber, ScrubberState};
use crate::config::PreviewConfig;
use crate::error::SetupError;
use crate::geometry;
use crate::layout::{HostLayout, OverlayHandle, PreviewLayout};
use crate::listener::{ListenerSet, PreviewLoader, ScrubListener, VisibilityListener};
use crate::stage::{ElementId, Stage};
use crate::types::{Color, Direction, Phase};

/// Coordinates one scrubber with its preview overlay.
pub struct PreviewDelegate<E: AnimationEngine = Timeline> {
    engine: E,
    stage: Stage,
    animator: Box<dyn PreviewAnimator>,
    bar: ScrubberState,
    layout: PreviewLayout,
    overlay: Option<OverlayHandle>,
    phase: Phase,

    preview_enabled: bool,
    animation_enabled: bool,
    auto_hide: bool,

    /// Set by the first user move of a drag.
    user_scrubbing: bool,
    /// Set from scrub start until scrub stop.
    user_started_scrubbing: bool,

    loader: Option<Box<dyn PreviewLoader>>,
    scrub_listeners: ListenerSet<dyn ScrubListener>,
    visibility_listeners: ListenerSet<dyn VisibilityListener>,
}

impl Default for PreviewDelegate<Timeline> {
    fn default() -> Self {
        Self::new(Timeline::new())
    }
}

impl<E: AnimationEngine> PreviewDelegate<E> {
    /// Create an unattached delegate with the default configuration.
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, &PreviewConfig::default())
    }

    pub fn with_config(engine: E, config: &PreviewConfig) -> Self {
        Self {
            engine,
            stage: Stage::new(),
            animator: config.animator.build(),
            bar: ScrubberState::default(),
            layout: PreviewLayout::default().with_direction(config.direction),
            overlay: None,
            phase: Phase::Hidden,
            preview_enabled: config.preview_enabled,
            animation_enabled: config.animation_enabled,
            auto_hide: config.auto_hide,
            user_scrubbing: false,
            user_started_scrubbing: false,
            loader: None,
            scrub_listeners: ListenerSet::new(),
            visibility_listeners: ListenerSet::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------------

    /// Bind to the overlay. Only the first call has an effect.
    pub fn attach(&mut self, overlay: OverlayHandle, layout: PreviewLayout) {
        if self.overlay.is_some() {
            log::trace!("[delegate] already attached, ignoring overlay {}", overlay.id);
            return;
        }

        let direction = self.layout.direction;
        self.layout = PreviewLayout { direction, ..layout };
        self.overlay = Some(overlay);
        self.phase = Phase::Hidden;

        self.stage.overlay.set_bounds(overlay.bounds);
        self.stage.tint.set_bounds(overlay.bounds);
        self.settle_visuals(false);
        self.reposition();
        log::debug!("[delegate] attached to overlay {}", overlay.id);
    }

    /// Find the preview frame `frame_id` among the scrubber's siblings and
    /// attach to it.
    pub fn attach_from_layout(
        &mut self,
        host: &HostLayout,
        frame_id: u32,
        frame_margin: f32,
    ) -> Result<(), SetupError> {
        if self.overlay.is_some() {
            return Ok(());
        }
        let overlay = host.find_preview_frame(frame_id)?;
        let layout = host.preview_layout(frame_margin, self.layout.direction)?;
        self.attach(overlay, layout);
        Ok(())
    }

    /// Replace the layout measurements, for instance after a resize.
    pub fn set_layout(&mut self, layout: PreviewLayout) {
        let direction = self.layout.direction;
        self.layout = PreviewLayout { direction, ..layout };
        self.reposition();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.layout.direction = direction;
        self.reposition();
    }

    // -------------------------------------------------------------------------
    // Flags
    // -------------------------------------------------------------------------

    pub fn set_preview_enabled(&mut self, enabled: bool) {
        self.preview_enabled = enabled;
    }

    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.animation_enabled = enabled;
    }

    pub fn set_auto_hide(&mut self, auto_hide: bool) {
        self.auto_hide = auto_hide;
    }

    /// Swap the animator. The outgoing one is cancelled and the overlay jumps
    /// to where its running sequence would have ended.
    pub fn set_animator(&mut self, animator: Box<dyn PreviewAnimator>) {
        self.with_animator(|old, cx| old.cancel(cx));
        self.animator = animator;

        match self.phase {
            Phase::Showing | Phase::Shown => {
                self.settle_visuals(true);
                self.phase = Phase::Shown;
            }
            Phase::Hiding | Phase::Hidden => {
                self.settle_visuals(false);
                self.phase = Phase::Hidden;
            }
        }
        log::debug!("[delegate] animator replaced, phase {:?}", self.phase);
    }

    // -------------------------------------------------------------------------
    // Scrubber
    // -------------------------------------------------------------------------

    /// The user touched the scrubber. Never shows the preview by itself.
    pub fn on_scrub_start(&mut self) {
        self.user_started_scrubbing = true;
        for listener in self.scrub_listeners.iter() {
            listener.on_scrub_start();
        }
    }

    /// The scrubber's progress changed.
    pub fn on_scrub_move(&mut self, progress: i32, from_user: bool) {
        self.bar.progress = self.bar.clamp(progress);
        if from_user && self.user_started_scrubbing {
            self.user_scrubbing = true;
        }
        if !self.is_attached() {
            log::trace!("[delegate] move to {} ignored, not attached", progress);
            return;
        }

        self.reposition();

        if !self.phase.is_showing() && self.preview_enabled && from_user {
            self.show();
        }

        let progress = self.bar.progress;
        for listener in self.scrub_listeners.iter() {
            listener.on_scrub_move(progress, from_user);
        }

        if self.phase.is_showing() {
            if let Some(loader) = self.loader.as_mut() {
                loader.load_preview(i64::from(progress), i64::from(self.bar.max));
            }
        }
    }

    /// The user released the scrubber.
    pub fn on_scrub_stop(&mut self) {
        self.user_scrubbing = false;
        self.user_started_scrubbing = false;
        if self.auto_hide {
            self.hide();
        }
        for listener in self.scrub_listeners.iter() {
            listener.on_scrub_stop();
        }
    }

    /// Programmatic progress update, e.g. from playback. Ignored while the
    /// user is dragging; never shows the preview.
    pub fn update_progress(&mut self, progress: i32, max: i32) {
        if self.user_scrubbing || self.user_started_scrubbing {
            log::trace!("[delegate] update to {}/{} ignored while scrubbing", progress, max);
            return;
        }
        self.bar.max = max.max(0);
        self.on_scrub_move(progress, false);
    }

    /// Copy progress, range, thumb size and color from the host's slider.
    pub fn sync_scrubber(&mut self, scrubber: &impl Scrubber) {
        let state = scrubber.state();
        self.bar.max = state.max.max(0);
        self.bar.progress = self.bar.clamp(state.progress);
        self.bar.thumb_offset = state.thumb_offset;
        self.bar.color = state.color;
        self.reposition();
    }

    /// Color of the morph element and of the overlay's tint layer. Applied
    /// when the next sequence starts.
    pub fn set_scrubber_color(&mut self, color: Color) {
        self.bar.color = color;
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    /// Start showing the preview.
    pub fn show(&mut self) {
        if self.phase.is_showing() {
            return;
        }
        if !self.is_attached() || !self.preview_enabled || !self.bar.is_measured() {
            log::trace!(
                "[delegate] show ignored (attached: {}, enabled: {}, max: {})",
                self.is_attached(),
                self.preview_enabled,
                self.bar.max
            );
            return;
        }

        if self.animation_enabled {
            self.with_animator(|animator, cx| animator.show(cx));
            self.phase = Phase::Showing;
        } else {
            self.with_animator(|animator, cx| animator.cancel(cx));
            self.settle_visuals(true);
            self.phase = Phase::Shown;
        }
        log::debug!("[delegate] show -> {:?}", self.phase);
        self.notify_visibility(true);
    }

    /// Start hiding the preview.
    pub fn hide(&mut self) {
        if !self.phase.is_showing() || !self.is_attached() {
            return;
        }

        if self.animation_enabled {
            self.with_animator(|animator, cx| animator.hide(cx));
            self.phase = Phase::Hiding;
        } else {
            self.with_animator(|animator, cx| animator.cancel(cx));
            self.settle_visuals(false);
            self.phase = Phase::Hidden;
        }
        log::debug!("[delegate] hide -> {:?}", self.phase);
        self.notify_visibility(false);
    }

    /// Advance running animations by `dt` and apply the ones that finished.
    ///
    /// Returns true while animations are still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let ended = self.engine.advance(&mut self.stage, dt);
        for end in &ended {
            let settled = self.with_animator(|animator, cx| animator.on_tween_end(end, cx));
            match (settled, self.phase) {
                (Some(Settled::Shown), Phase::Showing) => {
                    self.phase = Phase::Shown;
                    log::debug!("[delegate] preview shown");
                }
                (Some(Settled::Hidden), Phase::Hiding) => {
                    self.phase = Phase::Hidden;
                    log::debug!("[delegate] preview hidden");
                }
                (Some(settled), phase) => {
                    log::trace!("[delegate] stale {:?} while {:?}", settled, phase);
                }
                (None, _) => {}
            }
        }
        self.engine.has_active()
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Returns false if the listener was already registered.
    pub fn add_scrub_listener(&mut self, listener: Rc<dyn ScrubListener>) -> bool {
        self.scrub_listeners.add(listener)
    }

    pub fn remove_scrub_listener(&mut self, listener: &Rc<dyn ScrubListener>) -> bool {
        self.scrub_listeners.remove(listener)
    }

    /// Returns false if the listener was already registered.
    pub fn add_visibility_listener(&mut self, listener: Rc<dyn VisibilityListener>) -> bool {
        self.visibility_listeners.add(listener)
    }

    pub fn remove_visibility_listener(&mut self, listener: &Rc<dyn VisibilityListener>) -> bool {
        self.visibility_listeners.remove(listener)
    }

    /// Set or clear the loader called while the preview is visible.
    pub fn set_preview_loader(&mut self, loader: Option<Box<dyn PreviewLoader>>) {
        self.loader = loader;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the preview is shown or on its way in.
    pub fn is_showing_preview(&self) -> bool {
        self.phase.is_showing()
    }

    pub fn is_preview_enabled(&self) -> bool {
        self.preview_enabled
    }

    pub fn is_animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn is_auto_hide(&self) -> bool {
        self.auto_hide
    }

    pub fn is_attached(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn is_user_scrubbing(&self) -> bool {
        self.user_scrubbing
    }

    pub fn overlay(&self) -> Option<&OverlayHandle> {
        self.overlay.as_ref()
    }

    /// Elements to render.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn scrubber(&self) -> &ScrubberState {
        &self.bar
    }

    pub fn layout(&self) -> &PreviewLayout {
        &self.layout
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn with_animator<R>(
        &mut self,
        f: impl FnOnce(&mut dyn PreviewAnimator, &mut AnimatorContext<'_>) -> R,
    ) -> R {
        let mut cx = AnimatorContext {
            stage: &mut self.stage,
            engine: &mut self.engine,
            bar: &self.bar,
            layout: &self.layout,
        };
        f(self.animator.as_mut(), &mut cx)
    }

    /// Place the overlay over the thumb and let the animator follow.
    fn reposition(&mut self) {
        if !self.is_attached() {
            return;
        }
        if self.bar.is_measured() {
            let bounds = self
                .layout
                .frame_bounds(&self.bar, self.stage.overlay.width);
            self.stage.set_overlay_x(geometry::frame_x(&bounds));
        }
        self.with_animator(|animator, cx| animator.move_preview(cx));
    }

    /// Put every element in its resting state for a shown or hidden preview.
    fn settle_visuals(&mut self, shown: bool) {
        for element in ElementId::ALL {
            self.engine.cancel_element(element);
        }
        let overlay = &mut self.stage.overlay;
        overlay.visible = shown;
        overlay.alpha = 1.0;
        overlay.reveal_radius = None;

        let tint = &mut self.stage.tint;
        tint.visible = false;
        tint.alpha = 0.0;

        let morph = &mut self.stage.morph;
        morph.visible = false;
        morph.scale = 0.0;
    }

    fn notify_visibility(&self, is_showing: bool) {
        for listener in self.visibility_listeners.iter() {
            listener.on_visibility_changed(is_showing);
        }
    }
}
