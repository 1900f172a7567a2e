//! Brush definitions and draw primitives
//!
//! The panel never talks to a platform canvas. It emits `DrawPrimitive`s into
//! a `DrawScope`; a host backend rasterizes them, and tests inspect them.

use crate::color::Color;
use crate::geometry::{Rect, Side, Size};

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Gradient from the first color at `from` edge to the last color at the
    /// opposite edge of the filled rect.
    LinearGradient { colors: Vec<Color>, from: Side },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn linear_gradient(colors: Vec<Color>, from: Side) -> Self {
        Brush::LinearGradient { colors, from }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect { rect: Rect, brush: Brush },
}

pub trait DrawScope {
    fn size(&self) -> Size;
    /// Draws a rectangle at the specified position and size.
    fn draw_rect_at(&mut self, rect: Rect, brush: Brush);
}

/// Primitive-collecting scope used by tests and software hosts.
#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_rect_at(&mut self, rect: Rect, brush: Brush) {
        self.primitives.push(DrawPrimitive::Rect { rect, brush });
    }
}
