//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

/// Base drag threshold in logical pixels, matching common platform touch
/// slop conventions (Android uses ~8dp for ViewConfiguration.TOUCH_SLOP).
pub const TOUCH_SLOP: f32 = 8.0;

/// The panel arms its drag at a fraction of the base slop so it wins the
/// gesture before embedded scrollable children do. Child taps still register:
/// below this distance the panel never consumes the sequence.
pub const PANEL_SLOP_DIVISOR: f32 = 4.0;

/// Distance along the slide axis after which an armed touch sequence becomes
/// an active drag.
pub const DRAG_ACTIVATION_DISTANCE: f32 = TOUCH_SLOP / PANEL_SLOP_DIVISOR;

/// Releasing an upward drag past this ratio commits to fully expanding.
/// The strict `>` comparison means a release at exactly 0.1 collapses.
pub const EXPAND_COMMIT_THRESHOLD: f32 = 0.1;

/// Releasing a downward drag before this ratio commits to fully collapsing.
/// The strict `<` comparison means a release at exactly 0.9 expands.
pub const COLLAPSE_COMMIT_THRESHOLD: f32 = 0.9;
