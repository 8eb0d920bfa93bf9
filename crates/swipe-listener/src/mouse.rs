//! Mouse input normalization.
//!
//! Touch input already arrives as a move stream that ends in a release. Mouse
//! input also reports moves while no button is held, so the adapter tracks the
//! button state and only forwards moves made during a drag. Both kinds then
//! feed the listener through the same [`GestureInput`] values.

use swipe_listener_core::Point;

use crate::events::PointerPhase;

/// A pointer signal reduced to what the gesture session consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    /// Record a sample.
    Move(Point),
    /// End the gesture.
    Release,
}

impl GestureInput {
    /// Maps a touch signal. Touch presses carry nothing the session needs.
    pub fn from_touch(phase: PointerPhase, position: Point) -> Option<Self> {
        match phase {
            PointerPhase::Pressed => None,
            PointerPhase::Moved => Some(Self::Move(position)),
            PointerPhase::Released => Some(Self::Release),
        }
    }
}

/// Turns mouse press/move/release into drag-only gesture input.
#[derive(Debug, Clone, Default)]
pub struct MouseDragAdapter {
    dragging: bool,
}

impl MouseDragAdapter {
    /// Creates an adapter with no button held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a button is currently held.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Maps a mouse signal.
    ///
    /// A release is always forwarded, even without a preceding press; the
    /// session ignores it when nothing was recorded.
    pub fn translate(&mut self, phase: PointerPhase, position: Point) -> Option<GestureInput> {
        match phase {
            PointerPhase::Pressed => {
                self.dragging = true;
                None
            }
            PointerPhase::Moved => self.dragging.then_some(GestureInput::Move(position)),
            PointerPhase::Released => {
                self.dragging = false;
                Some(GestureInput::Release)
            }
        }
    }

    /// Forgets any held button.
    pub fn reset(&mut self) {
        self.dragging = false;
    }
}
