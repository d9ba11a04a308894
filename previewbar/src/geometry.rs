//! Pure geometry for placing the preview frame and the morph element.
//!
//! Nothing here holds state: the delegate and the animators feed in the
//! scrubber's progress and the host layout and get pixel coordinates back.

use crate::layout::Rect;
use crate::types::Direction;

/// Scalar inputs for [`frame_x`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameBounds {
    pub progress: i32,
    pub max: i32,
    /// Left edge of the scrubber.
    pub bar_left: f32,
    /// Right edge of the scrubber.
    pub bar_right: f32,
    /// Padding applied on both ends of the track so the frame follows the
    /// thumb, not the raw track.
    pub thumb_offset: f32,
    pub frame_width: f32,
    /// Lowest x the frame may take.
    pub container_left: f32,
    pub container_width: f32,
    pub container_right_padding: f32,
    pub frame_right_margin: f32,
    pub direction: Direction,
}

/// Fraction of the track covered by `progress`, in `[0, 1]`.
///
/// A `max` of zero means the bar hasn't been measured yet and maps to 0.
pub fn progress_fraction(progress: i32, max: i32, direction: Direction) -> f32 {
    if max <= 0 {
        return 0.0;
    }
    let offset = (progress as f32 / max as f32).clamp(0.0, 1.0);
    match direction {
        Direction::Ltr => offset,
        Direction::Rtl => 1.0 - offset,
    }
}

/// Center of the thumb along the usable track.
pub fn thumb_center_x(bar_left: f32, bar_right: f32, thumb_offset: f32, fraction: f32) -> f32 {
    let start = bar_left + thumb_offset;
    let end = bar_right - thumb_offset;
    start + (end - start) * fraction
}

/// Target x of the preview frame's left edge.
///
/// The frame stays put until the thumb is more than half the frame's width
/// away from either end of the container, then tracks the thumb.
pub fn frame_x(bounds: &FrameBounds) -> f32 {
    if bounds.max == 0 {
        return 0.0;
    }
    let fraction = progress_fraction(bounds.progress, bounds.max, bounds.direction);
    let center = thumb_center_x(
        bounds.bar_left,
        bounds.bar_right,
        bounds.thumb_offset,
        fraction,
    );
    let next_x = center - bounds.frame_width / 2.0;

    let low = bounds.container_left;
    let high = bounds.container_width
        - bounds.container_right_padding
        - bounds.frame_right_margin
        - bounds.frame_width;

    if next_x < low {
        low
    } else if next_x > high {
        high
    } else {
        next_x
    }
}

/// Endpoints of the morph element's travel between the thumb and the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphPath {
    /// Top-left of the morph element when it sits on the thumb.
    pub start: (f32, f32),
    /// Top-left of the morph element when centered on the frame.
    pub end: (f32, f32),
    /// Side length of the (square) morph element at scale 1.
    pub size: f32,
    /// Scale at which the morph element covers the frame's height.
    pub scale: f32,
}

impl MorphPath {
    /// Compute the path for a morph element sized after the thumb.
    ///
    /// `frame` must already carry the x the delegate placed it at.
    pub fn new(bar: Rect, frame: Rect, thumb_offset: f32, fraction: f32) -> Self {
        let size = thumb_offset.max(1.0);
        let thumb_x = thumb_center_x(bar.left(), bar.right(), thumb_offset, fraction);
        let (_, bar_center_y) = bar.center();
        let (frame_center_x, frame_center_y) = frame.center();

        Self {
            start: (thumb_x - size / 2.0, bar_center_y - size / 2.0),
            end: (frame_center_x - size / 2.0, frame_center_y - size / 2.0),
            size,
            scale: frame.height / size,
        }
    }
}

/// Radii of the circular reveal: collapsed (a circle inscribed in the
/// frame's height) and fully open (reaching the frame's corners).
pub fn reveal_radii(frame_width: f32, frame_height: f32) -> (f32, f32) {
    let collapsed = frame_height / 2.0;
    let full = (frame_width / 2.0).hypot(frame_height / 2.0);
    (collapsed, full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_ignores_unmeasured_bar() {
        assert_eq!(progress_fraction(10, 0, Direction::Ltr), 0.0);
        assert_eq!(progress_fraction(10, 0, Direction::Rtl), 0.0);
    }

    #[test]
    fn test_fraction_mirrors_for_rtl() {
        assert_eq!(progress_fraction(25, 100, Direction::Ltr), 0.25);
        assert_eq!(progress_fraction(25, 100, Direction::Rtl), 0.75);
    }

    #[test]
    fn test_reveal_radii() {
        let (collapsed, full) = reveal_radii(60.0, 80.0);
        assert_eq!(collapsed, 40.0);
        assert_eq!(full, 50.0);
    }
}
