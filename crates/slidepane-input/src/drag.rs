//! The drag gesture state machine.
//!
//! One instance lives in the panel and is fed main-axis scalars extracted
//! from pointer events. It owns the Idle → Armed → Dragging classification
//! and the per-touch-sequence session state; the panel translates positions
//! into ratios and applies them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// No touch sequence in progress, or the sequence started outside the
    /// drag element.
    Idle,
    /// Pointer went down inside the drag element; waiting to see whether
    /// the sequence is a tap or a drag.
    Armed,
    /// Displacement passed the activation distance; the panel owns every
    /// remaining event of the sequence.
    Dragging,
}

/// Direction of travel at release time along the slide axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    /// Toward decreasing coordinates (expanding a bottom sheet).
    Up,
    /// Toward increasing coordinates (collapsing a bottom sheet).
    Down,
    /// Release at exactly the initial coordinate; no snap is performed.
    None,
}

impl SlideDirection {
    /// Classifies travel from the initial touch coordinate to the release
    /// coordinate.
    pub fn from_travel(initial: f32, released: f32) -> Self {
        if released > initial {
            SlideDirection::Down
        } else if released < initial {
            SlideDirection::Up
        } else {
            SlideDirection::None
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct DragSession {
    /// Main-axis touch coordinate at pointer-down.
    initial_coord: f32,
    /// Sliding element's main-axis position at pointer-down.
    position_at_start: f32,
}

/// Outcome of feeding a move event to the gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// Not armed, or armed but still within the activation distance;
    /// the event should pass through to children.
    Ignored,
    /// The activation distance was just exceeded; the sequence is now a
    /// drag and `position` is the sliding element's new main-axis target.
    Activated { position: f32 },
    /// An already-active drag moved; `position` is the new target.
    Moved { position: f32 },
}

/// Outcome of ending a touch sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEnd {
    /// True when the sequence had activated into a drag; the release then
    /// belongs to the panel, not to child click handlers.
    pub was_dragging: bool,
    pub direction: SlideDirection,
}

pub struct DragGesture {
    activation_distance: f32,
    phase: DragPhase,
    session: Option<DragSession>,
}

impl DragGesture {
    pub fn new(activation_distance: f32) -> Self {
        Self {
            activation_distance,
            phase: DragPhase::Idle,
            session: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Arms the gesture from a pointer-down inside the drag element.
    /// `position` is the sliding element's current main-axis coordinate, the
    /// anchor all subsequent displacement is relative to.
    pub fn arm(&mut self, touch_coord: f32, position: f32) {
        self.phase = DragPhase::Armed;
        self.session = Some(DragSession {
            initial_coord: touch_coord,
            position_at_start: position,
        });
    }

    /// Feeds a move event. Position targets are the raw, unclamped
    /// `position_at_start - (initial - current)`; the caller clamps to the
    /// travel range before converting to a ratio.
    pub fn update(&mut self, touch_coord: f32) -> DragUpdate {
        let Some(session) = self.session else {
            return DragUpdate::Ignored;
        };

        let offset = session.initial_coord - touch_coord;
        let position = session.position_at_start - offset;

        match self.phase {
            DragPhase::Idle => DragUpdate::Ignored,
            DragPhase::Armed => {
                if offset.abs() > self.activation_distance {
                    self.phase = DragPhase::Dragging;
                    log::debug!(
                        "drag activated: displacement {:.1} exceeds {:.1}",
                        offset.abs(),
                        self.activation_distance
                    );
                    DragUpdate::Activated { position }
                } else {
                    DragUpdate::Ignored
                }
            }
            DragPhase::Dragging => DragUpdate::Moved { position },
        }
    }

    /// Ends the touch sequence and returns what it amounted to. The gesture
    /// returns to `Idle` regardless of prior phase.
    pub fn finish(&mut self, touch_coord: f32) -> DragEnd {
        let was_dragging = self.phase == DragPhase::Dragging;
        let direction = match self.session {
            Some(session) => SlideDirection::from_travel(session.initial_coord, touch_coord),
            None => SlideDirection::None,
        };
        self.reset();
        DragEnd {
            was_dragging,
            direction,
        }
    }

    /// Aborts the sequence (pointer-cancel, or pointer-down outside the
    /// drag element while a stale session lingers).
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.session = None;
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
