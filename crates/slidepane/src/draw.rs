//! Shade and elevation shadow primitives.
//!
//! Visual-only: both derive entirely from the current ratio and static
//! configuration.

use crate::constants::{MAX_SHADE_ALPHA, SHADE_COLOR, SHADOW_COLOR};
use slidepane_graphics::{Brush, Color, Rect, Side};
use slidepane_layout::Axis;

/// The translucent scrim composited over the non-sliding element while the
/// panel is anywhere past fully collapsed.
pub(crate) fn shade_primitive(non_sliding_frame: Rect, ratio: f32) -> (Rect, Brush) {
    let alpha = MAX_SHADE_ALPHA * ratio;
    (
        non_sliding_frame,
        Brush::solid(SHADE_COLOR.with_alpha(alpha)),
    )
}

/// The elevation shadow strip along the sliding element's leading edge,
/// fading from transparent (away from the panel) to its darkest stop at the
/// edge itself.
pub(crate) fn shadow_primitive(sliding_frame: Rect, axis: Axis, length: f32) -> (Rect, Brush) {
    let (rect, from) = match axis {
        Axis::Vertical => (
            Rect::new(
                sliding_frame.x,
                sliding_frame.y - length,
                sliding_frame.width,
                length,
            ),
            Side::Top,
        ),
        Axis::Horizontal => (
            Rect::new(
                sliding_frame.x - length,
                sliding_frame.y,
                length,
                sliding_frame.height,
            ),
            Side::Left,
        ),
    };
    (
        rect,
        Brush::linear_gradient(vec![Color::TRANSPARENT, SHADOW_COLOR], from),
    )
}

#[cfg(test)]
#[path = "tests/draw_tests.rs"]
mod tests;
