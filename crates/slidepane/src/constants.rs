//! Panel-wide constants.

use slidepane_graphics::Color;

/// Default duration of an animated slide, in milliseconds.
pub const SLIDE_DURATION_SHORT: u64 = 300;

/// A slower slide for hosts that want a more deliberate motion.
pub const SLIDE_DURATION_LONG: u64 = 600;

/// Default depth of the elevation shadow drawn along the sliding element's
/// leading edge, in logical pixels.
pub const DEFAULT_SHADOW_LENGTH: f32 = 10.0;

/// The shade that fades over the non-sliding element as the panel expands.
pub(crate) const SHADE_COLOR: Color = Color::BLACK;

/// Shade opacity at full expansion (0x99 of 0xFF in the classic bottom-sheet
/// scrim).
pub(crate) const MAX_SHADE_ALPHA: f32 = 153.0 / 255.0;

/// Darkest stop of the elevation shadow gradient.
pub(crate) const SHADOW_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.25);
