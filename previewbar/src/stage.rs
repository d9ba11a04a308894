//! Host-visible state of the elements the animators drive.
//!
//! The host renders from the [`Stage`] after every tick; the delegate and the
//! animators are the only writers, together with the engine interpolating
//! running tweens.

use crate::geometry::reveal_radii;
use crate::layout::Rect;
use crate::types::Color;

/// Elements owned by a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// The frame displaying the preview content.
    Overlay,
    /// Transient element that travels between the thumb and the overlay.
    Morph,
    /// Solid layer on top of the overlay's content, faded out as the reveal
    /// opens and back in as it closes.
    Tint,
}

impl ElementId {
    pub const ALL: [ElementId; 3] = [ElementId::Overlay, ElementId::Morph, ElementId::Tint];
}

/// Which scalar property is being tweened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    Scale,
    Alpha,
    RevealRadius,
}

/// Snapshot of one element's renderable properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementState {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub alpha: f32,
    pub visible: bool,
    /// Radius of the circular clip centered on the element; `None` when the
    /// element is not clipped.
    pub reveal_radius: Option<f32>,
    pub color: Option<Color>,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            scale: 1.0,
            alpha: 1.0,
            visible: false,
            reveal_radius: None,
            color: None,
        }
    }
}

impl ElementState {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
    }

    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::X => self.x,
            Property::Y => self.y,
            Property::Scale => self.scale,
            Property::Alpha => self.alpha,
            Property::RevealRadius => self
                .reveal_radius
                .unwrap_or_else(|| reveal_radii(self.width, self.height).1),
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Scale => self.scale = value,
            Property::Alpha => self.alpha = value,
            Property::RevealRadius => self.reveal_radius = Some(value),
        }
    }
}

/// All elements of one preview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stage {
    pub overlay: ElementState,
    pub morph: ElementState,
    pub tint: ElementState,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: ElementId) -> &ElementState {
        match id {
            ElementId::Overlay => &self.overlay,
            ElementId::Morph => &self.morph,
            ElementId::Tint => &self.tint,
        }
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut ElementState {
        match id {
            ElementId::Overlay => &mut self.overlay,
            ElementId::Morph => &mut self.morph,
            ElementId::Tint => &mut self.tint,
        }
    }

    pub fn get(&self, id: ElementId, property: Property) -> f32 {
        self.element(id).get(property)
    }

    pub fn set(&mut self, id: ElementId, property: Property, value: f32) {
        self.element_mut(id).set(property, value);
    }

    /// Move the overlay horizontally. The tint layer follows its parent.
    pub fn set_overlay_x(&mut self, x: f32) {
        self.overlay.x = x;
        self.tint.x = x;
    }
}
