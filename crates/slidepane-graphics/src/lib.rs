//! Pure math/data for drawing & units in Slidepane
//!
//! This crate contains the geometry primitives, color definitions, and brushes
//! shared by the layout, input, and panel crates. It has no dependencies and
//! no host-framework types: element geometry is plain rectangles, painting is
//! a list of brush-filled primitives.

mod brush;
mod color;
mod geometry;

pub use brush::*;
pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Side, Size};
}
