//! The scrubber side of a preview: its state and the adapter the host's slider
//! implements.

use crate::types::Color;

/// Values the delegate needs from the scrubber.
///
/// `max == 0` means the scrubber hasn't been measured yet (for instance a
/// media duration that isn't known); positioning is disabled until it is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrubberState {
    pub progress: i32,
    pub max: i32,
    /// Radius of the draggable thumb.
    pub thumb_offset: i32,
    pub color: Color,
}

impl ScrubberState {
    pub fn new(max: i32, thumb_offset: i32, color: Color) -> Self {
        Self {
            progress: 0,
            max: max.max(0),
            thumb_offset,
            color,
        }
    }

    /// Returns true once the scrubber has a usable range.
    pub fn is_measured(&self) -> bool {
        self.max > 0
    }

    /// Clamp `progress` into `[0, max]`.
    pub fn clamp(&self, progress: i32) -> i32 {
        progress.clamp(0, self.max.max(0))
    }
}

/// Read side of the host's slider.
pub trait Scrubber {
    fn progress(&self) -> i32;

    fn max(&self) -> i32;

    /// Radius of the draggable thumb.
    fn thumb_offset(&self) -> i32;

    fn scrubber_color(&self) -> Color;

    fn state(&self) -> ScrubberState {
        ScrubberState {
            progress: self.progress(),
            max: self.max(),
            thumb_offset: self.thumb_offset(),
            color: self.scrubber_color(),
        }
    }
}

impl Scrubber for ScrubberState {
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
        *self
    }
}
