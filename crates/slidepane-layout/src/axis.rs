//! Slide axis of the panel.
//!
//! The main axis is the direction children stack and the sliding element
//! travels; the cross axis is where children are aligned.

use slidepane_graphics::{Point, Side, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Children stack left to right, the panel slides horizontally.
    Horizontal,

    /// Children stack top to bottom, the panel slides vertically.
    /// This is the bottom-sheet configuration.
    Vertical,
}

impl Axis {
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Extent of `size` along the main axis.
    #[inline]
    pub fn main_extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` along the cross axis.
    #[inline]
    pub fn cross_extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Builds a size from main- and cross-axis extents.
    #[inline]
    pub fn size_from(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Coordinate of `point` along the main axis.
    #[inline]
    pub fn main_coord(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Coordinate of `point` along the cross axis.
    #[inline]
    pub fn cross_coord(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.y,
            Axis::Vertical => point.x,
        }
    }

    /// Builds a point from main- and cross-axis coordinates.
    #[inline]
    pub fn point_from(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }

    /// The trailing edge along the main axis: the side the fit-to-screen
    /// inset is applied to so sliding content is never permanently obscured.
    #[inline]
    pub fn trailing_side(self) -> Side {
        match self {
            Axis::Horizontal => Side::Right,
            Axis::Vertical => Side::Bottom,
        }
    }
}
