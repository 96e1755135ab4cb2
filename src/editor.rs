//! Control-point editing: the point store, hit-testing and the drag gesture.
//!
//! Input arrives as discrete `PointerEvent`s. `Editor::apply` handles one
//! event fully and reports what happened; nothing here touches the window.

use crate::config::{Config, MAX_POINTS};
use crate::types::ControlPoint;
use glam::Vec2;

/// What the pointer did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// Secondary (right) button released.
    SecondaryUp,
}

/// One pointer event in framebuffer pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Ordered control points p0..p3. Insertion order is curve order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<ControlPoint>, // never longer than MAX_POINTS
}

impl PointSet {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(MAX_POINTS),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= MAX_POINTS
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// The four points of a complete cubic, or None while still placing.
    pub fn as_cubic(&self) -> Option<[ControlPoint; 4]> {
        self.points.as_slice().try_into().ok()
    }

    /// First point (in insertion order) within `radius` of `pos`.
    pub fn pick(&self, pos: Vec2, radius: f32) -> Option<usize> {
        let r2 = radius * radius;
        self.points
            .iter()
            .position(|p| p.distance_squared(pos) <= r2)
    }

    /// Append `pos` unless the set is full or `pos` lies within
    /// `min_separation` of an existing point. Returns the new index.
    pub fn try_add(&mut self, pos: Vec2, min_separation: f32) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let s2 = min_separation * min_separation;
        if self.points.iter().any(|p| p.distance_squared(pos) <= s2) {
            return None;
        }
        self.points.push(pos);
        Some(self.points.len() - 1)
    }

    /// Overwrite point `index`. False if the index does not exist.
    pub fn move_to(&mut self, index: usize, pos: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p = pos;
                true
            }
            None => false,
        }
    }
}

/// Where the primary-button gesture currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    /// Button up.
    #[default]
    Idle,
    /// Button held with no point grabbed; release tries to add one.
    Selecting,
    /// Button held on a control point; moves follow the pointer.
    Dragging,
}

/// Selected point plus gesture. `Dragging` implies `index` is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub index: Option<usize>,
    pub gesture: Gesture,
}

impl Selection {
    pub fn is_dragging(&self) -> bool {
        self.gesture == Gesture::Dragging
    }
}

/// Result of applying one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Event had no effect in the current state.
    Ignored,
    /// Pointer-down hit point `i`; drag started.
    Grabbed(usize),
    /// Pointer-down hit nothing; selection cleared.
    Missed,
    /// Dragged point `i` to the pointer.
    Moved(usize),
    /// Drag finished on point `i`.
    Released(usize),
    /// New point placed at index `i` and selected.
    Added(usize),
    /// Click on empty space did not add a point (set full or too close).
    Rejected,
    /// Secondary click cleared the selection.
    Deselected,
}

/// Owned editing context: the points, the selection and the hit-test tunables.
#[derive(Clone, Debug)]
pub struct Editor {
    points: PointSet,
    selection: Selection,
    pick_radius: f32,
    min_separation: f32,
}

impl Editor {
    pub fn new(pick_radius: f32, min_separation: f32) -> Self {
        Self {
            points: PointSet::new(),
            selection: Selection::default(),
            pick_radius,
            min_separation,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.pick_radius, cfg.min_separation)
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Process one event to completion.
    pub fn apply(&mut self, ev: PointerEvent) -> EditOutcome {
        let pos = ev.pos();
        let outcome = match ev.kind {
            PointerKind::Down => match self.points.pick(pos, self.pick_radius) {
                Some(i) => {
                    self.selection = Selection {
                        index: Some(i),
                        gesture: Gesture::Dragging,
                    };
                    EditOutcome::Grabbed(i)
                }
                None => {
                    self.selection = Selection {
                        index: None,
                        gesture: Gesture::Selecting,
                    };
                    EditOutcome::Missed
                }
            },

            PointerKind::Move => match (self.selection.gesture, self.selection.index) {
                (Gesture::Dragging, Some(i)) if self.points.move_to(i, pos) => {
                    EditOutcome::Moved(i)
                }
                _ => EditOutcome::Ignored,
            },

            PointerKind::Up => {
                let gesture = std::mem::replace(&mut self.selection.gesture, Gesture::Idle);
                match gesture {
                    Gesture::Idle => EditOutcome::Ignored,
                    Gesture::Dragging => match self.selection.index {
                        Some(i) => EditOutcome::Released(i),
                        None => EditOutcome::Ignored,
                    },
                    Gesture::Selecting => match self.points.try_add(pos, self.min_separation) {
                        Some(i) => {
                            self.selection.index = Some(i);
                            EditOutcome::Added(i)
                        }
                        None => EditOutcome::Rejected,
                    },
                }
            }

            // Drops the index only. A drag without a point falls back to Selecting,
            // so the pending primary release still tries to add.
            PointerKind::SecondaryUp => {
                self.selection.index = None;
                if self.selection.gesture == Gesture::Dragging {
                    self.selection.gesture = Gesture::Selecting;
                }
                EditOutcome::Deselected
            }
        };

        if outcome != EditOutcome::Ignored {
            log::debug!("{:?} at ({}, {}) -> {:?}", ev.kind, ev.x, ev.y, outcome);
        }
        outcome
    }
}
