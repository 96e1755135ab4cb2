//! Turns polled mouse state into discrete pointer events.
//!
//! The window only tells us "is the button down now" and "where is the
//! mouse now". Comparing against the previous frame yields down/move/up.

use crate::editor::{PointerEvent, PointerKind};

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    left_was_down: bool,
    right_was_down: bool,
    last_pos: Option<(i32, i32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of mouse state; returns the events in delivery order
    /// (move first, then button transitions).
    ///
    /// When the window reports no position, the last known one is reused.
    pub fn poll(
        &mut self,
        pos: Option<(i32, i32)>,
        left_down: bool,
        right_down: bool,
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let moved = pos.is_some() && pos != self.last_pos;
        if let Some(p) = pos {
            self.last_pos = Some(p);
        }

        if let Some((x, y)) = self.last_pos {
            if moved {
                events.push(PointerEvent::new(PointerKind::Move, x, y));
            }
            if left_down && !self.left_was_down {
                events.push(PointerEvent::new(PointerKind::Down, x, y));
            }
            if !left_down && self.left_was_down {
                events.push(PointerEvent::new(PointerKind::Up, x, y));
            }
            if !right_down && self.right_was_down {
                events.push(PointerEvent::new(PointerKind::SecondaryUp, x, y));
            }
        }

        self.left_was_down = left_down;
        self.right_was_down = right_down;
        events
    }
}
