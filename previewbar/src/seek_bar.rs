//! A pointer-driven scrubber that owns its preview.

use std::time::Duration;

use crate::animation::{AnimationEngine, Timeline};
use crate::bar::{Scrubber, ScrubberState};
use crate::delegate::PreviewDelegate;
use crate::geometry;
use crate::layout::{PreviewLayout, Rect};
use crate::types::{Color, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    /// Progress under the pointer when it went down.
    pressed_at: i32,
    moved: bool,
}

/// Horizontal seek bar translating pointer input into scrub gestures.
///
/// A press followed by a drag scrubs with the preview; a press released
/// without moving is a tap and seeks without showing anything.
pub struct SeekBar<E: AnimationEngine = Timeline> {
    bounds: Rect,
    progress: i32,
    max: i32,
    thumb_offset: i32,
    color: Color,
    drag: Option<Drag>,
    delegate: PreviewDelegate<E>,
}

impl<E: AnimationEngine> SeekBar<E> {
    pub fn new(bounds: Rect, max: i32, thumb_offset: i32, delegate: PreviewDelegate<E>) -> Self {
        let mut bar = Self {
            bounds,
            progress: 0,
            max: max.max(0),
            thumb_offset,
            color: Color::default(),
            drag: None,
            delegate,
        };
        bar.sync();
        bar
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.sync();
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move the track. The delegate's layout follows so the overlay keeps
    /// tracking the thumb.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let layout = PreviewLayout {
            bar: bounds,
            ..*self.delegate.layout()
        };
        self.delegate.set_layout(layout);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Progress matching a pointer at `x`, clamped to the track.
    pub fn progress_at(&self, x: f32) -> i32 {
        if self.max <= 0 {
            return 0;
        }
        let start = self.bounds.left() + self.thumb_offset as f32;
        let end = self.bounds.right() - self.thumb_offset as f32;
        let offset = if end > start {
            ((x - start) / (end - start)).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let offset = match self.direction() {
            Direction::Ltr => offset,
            Direction::Rtl => 1.0 - offset,
        };
        (offset * self.max as f32).round() as i32
    }

    /// Center of the thumb for the current progress.
    pub fn thumb_x(&self) -> f32 {
        let fraction = geometry::progress_fraction(self.progress, self.max, self.direction());
        geometry::thumb_center_x(
            self.bounds.left(),
            self.bounds.right(),
            self.thumb_offset as f32,
            fraction,
        )
    }

    /// Returns true if the press landed on the bar and started a scrub.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        if !self.bounds.contains(x, y) {
            return false;
        }
        self.drag = Some(Drag {
            pressed_at: self.progress_at(x),
            moved: false,
        });
        self.delegate.on_scrub_start();
        true
    }

    pub fn pointer_move(&mut self, x: f32) {
        let progress = self.progress_at(x);
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if progress == self.progress {
            return;
        }
        drag.moved = true;
        self.progress = progress;
        self.delegate.on_scrub_move(progress, true);
    }

    /// End the gesture. Returns the progress to seek to, if the gesture
    /// ended a scrub or a tap.
    pub fn pointer_up(&mut self) -> Option<i32> {
        let drag = self.drag.take()?;
        self.delegate.on_scrub_stop();
        if !drag.moved && drag.pressed_at != self.progress {
            self.progress = drag.pressed_at;
            self.delegate.update_progress(self.progress, self.max);
        }
        Some(self.progress)
    }

    /// Programmatic position change, e.g. from playback.
    pub fn set_progress(&mut self, progress: i32) {
        let progress = progress.clamp(0, self.max);
        if progress == self.progress {
            return;
        }
        self.progress = progress;
        self.delegate.update_progress(progress, self.max);
    }

    pub fn set_max(&mut self, max: i32) {
        let max = max.max(0);
        if max == self.max {
            return;
        }
        self.max = max;
        self.progress = self.progress.min(max);
        self.delegate.update_progress(self.progress, max);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.delegate.set_scrubber_color(color);
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        self.delegate.tick(dt)
    }

    pub fn delegate(&self) -> &PreviewDelegate<E> {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut PreviewDelegate<E> {
        &mut self.delegate
    }

    fn direction(&self) -> Direction {
        self.delegate.layout().direction
    }

    fn sync(&mut self) {
        let state = self.state();
        self.delegate.sync_scrubber(&state);
    }
}

impl<E: AnimationEngine> Scrubber for SeekBar<E> {
    fn progress(&self) -> i32 {
        self.progress
    }

    fn max(&self) -> i32 {
        self.max
    }

    fn thumb_offset(&self) -> i32 {
        self.thumb_offset
    }

    fn scrubber_color(&self) -> Color {
        self.color
    }

    fn state(&self) -> ScrubberState {
        ScrubberState {
            progress: self.progress,
            max: self.max,
            thumb_offset: self.thumb_offset,
            color: self.color,
        }
    }
}
