//! Host layout as seen by a preview: where the scrubber and the container
//! sit, and how to find the preview frame among the scrubber's siblings.

mod rect;

pub use rect::Rect;

use crate::bar::ScrubberState;
use crate::error::SetupError;
use crate::geometry::FrameBounds;
use crate::types::Direction;

/// The host region that displays preview content.
///
/// The host owns it; the delegate only reads its laid-out bounds when it
/// attaches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayHandle {
    pub id: u32,
    pub bounds: Rect,
}

impl OverlayHandle {
    pub fn new(id: u32, bounds: Rect) -> Self {
        Self { id, bounds }
    }
}

/// Measurements the geometry needs besides the overlay itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreviewLayout {
    /// Bounds of the scrubber, in the container's coordinates.
    pub bar: Rect,
    /// Bounds of the container shared by the scrubber and the overlay, in its
    /// own coordinates. Its left edge is the lowest x the overlay may take.
    pub container: Rect,
    pub container_right_padding: f32,
    pub frame_right_margin: f32,
    pub direction: Direction,
}

impl PreviewLayout {
    pub fn new(bar: Rect, container: Rect) -> Self {
        Self {
            bar,
            container,
            ..Default::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_right_padding(mut self, padding: f32) -> Self {
        self.container_right_padding = padding;
        self
    }

    pub fn with_frame_margin(mut self, margin: f32) -> Self {
        self.frame_right_margin = margin;
        self
    }

    /// Geometry inputs for the current scrubber state and overlay width.
    pub fn frame_bounds(&self, bar: &ScrubberState, frame_width: f32) -> FrameBounds {
        FrameBounds {
            progress: bar.progress,
            max: bar.max,
            bar_left: self.bar.left(),
            bar_right: self.bar.right(),
            thumb_offset: bar.thumb_offset as f32,
            frame_width,
            container_left: self.container.left(),
            container_width: self.container.width,
            container_right_padding: self.container_right_padding,
            frame_right_margin: self.frame_right_margin,
            direction: self.direction,
        }
    }
}

/// What a child of the container is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Bar,
    PreviewFrame,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutNode {
    pub id: u32,
    pub kind: NodeKind,
    pub bounds: Rect,
}

impl LayoutNode {
    pub fn new(id: u32, kind: NodeKind, bounds: Rect) -> Self {
        Self { id, kind, bounds }
    }
}

/// A measured container holding the scrubber and its siblings. Children are
/// positioned relative to the container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostLayout {
    pub bounds: Rect,
    pub padding_right: f32,
    pub children: Vec<LayoutNode>,
}

impl HostLayout {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    pub fn child(mut self, node: LayoutNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn padding_right(mut self, padding: f32) -> Self {
        self.padding_right = padding;
        self
    }

    pub fn find_bar(&self) -> Result<&LayoutNode, SetupError> {
        self.children
            .iter()
            .find(|node| node.kind == NodeKind::Bar)
            .ok_or(SetupError::MissingBar)
    }

    /// Find the preview frame with `id` among the container's children.
    pub fn find_preview_frame(&self, id: u32) -> Result<OverlayHandle, SetupError> {
        let node = self
            .children
            .iter()
            .find(|node| node.id == id && node.kind == NodeKind::PreviewFrame)
            .ok_or(SetupError::FrameNotFound(id))?;
        if node.bounds.is_empty() {
            return Err(SetupError::EmptyFrame(id));
        }
        Ok(OverlayHandle::new(node.id, node.bounds))
    }

    /// Measurements for a preview whose frame uses `frame_margin` on its
    /// right side.
    pub fn preview_layout(
        &self,
        frame_margin: f32,
        direction: Direction,
    ) -> Result<PreviewLayout, SetupError> {
        let bar = self.find_bar()?;
        let container = Rect::from_size(self.bounds.width, self.bounds.height);
        Ok(PreviewLayout::new(bar.bounds, container)
            .with_right_padding(self.padding_right)
            .with_frame_margin(frame_margin)
            .with_direction(direction))
    }
}
