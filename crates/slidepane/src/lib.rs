//! A sliding panel (bottom sheet pattern) that is part of the view
//! hierarchy, not above it.
//!
//! The panel hosts exactly two children: a fixed element that establishes the
//! travel range and a sliding element that travels over it. A drag on the
//! configured drag element moves the sliding element; releasing mid-travel
//! snaps it open or closed; [`SlidingPanel::slide_to`] and
//! [`SlidingPanel::set_state`] drive the same motion programmatically over
//! the frame clock.
//!
//! All state lives on the UI thread. Hosts feed pointer events into
//! [`SlidingPanel::handle_pointer_event`], pump
//! `RuntimeHandle::drain_frame_callbacks` once per frame, and rasterize the
//! primitives the panel emits into a `DrawScope`.

mod config;
mod constants;
mod draw;
mod listener;
mod panel;
mod policy;
mod state;

pub use config::PanelSpec;
pub use constants::{DEFAULT_SHADOW_LENGTH, SLIDE_DURATION_LONG, SLIDE_DURATION_SHORT};
pub use listener::SlideListener;
pub use panel::SlidingPanel;
pub use state::PanelState;

pub use slidepane_animation::{AnimationSpec, Easing};
pub use slidepane_core::{Runtime, RuntimeHandle};
pub use slidepane_graphics::prelude::*;
pub use slidepane_graphics::{DrawPrimitive, DrawScope, DrawScopeDefault};
pub use slidepane_input::{PointerEvent, PointerEventKind, SlideDirection};
pub use slidepane_layout::prelude::*;
pub use slidepane_layout::BlockElement;
