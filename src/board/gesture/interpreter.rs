//! Press, drag and release state machine.

use super::{DropZone, Point, Rect, closest_corners};
use crate::board::domain::DropTarget;
use crate::task::domain::TaskId;

/// Pointer travel, in board units, that turns a press into a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: u32 = 5;

/// A completed drag, ready for [`crate::board::domain::TaskStore::move_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    /// Dragged task.
    pub active: TaskId,
    /// Where it was dropped.
    pub target: DropTarget,
}

/// What a finished gesture means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing to do.
    Nothing,
    /// A press and release without a drag; opens the task.
    Click(TaskId),
    /// A drag released over a drop zone.
    Move(MoveCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    Pressed {
        task: TaskId,
        origin: Point,
        card: Rect,
    },
    Dragging {
        task: TaskId,
        origin: Point,
        card: Rect,
        pointer: Point,
    },
}

/// Interprets pointer telemetry for one board.
#[derive(Debug, Clone)]
pub struct DragInterpreter {
    activation_distance: u32,
    state: GestureState,
}

impl Default for DragInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl DragInterpreter {
    /// Creates an idle interpreter.
    #[must_use]
    pub const fn new(activation_distance: u32) -> Self {
        Self {
            activation_distance,
            state: GestureState::Idle,
        }
    }

    /// Starts tracking a press on `task`'s card. Ignored unless idle.
    pub fn press(&mut self, task: TaskId, point: Point, card: Rect) {
        if self.state == GestureState::Idle {
            self.state = GestureState::Pressed {
                task,
                origin: point,
                card,
            };
        }
    }

    /// Follows the pointer, starting a drag once it has travelled further
    /// than the activation distance.
    pub fn move_to(&mut self, point: Point) {
        self.state = match self.state {
            GestureState::Pressed { task, origin, card }
                if origin.distance_squared(point) > self.activation_distance_squared() =>
            {
                tracing::trace!(task_id = %task, "drag started");
                GestureState::Dragging {
                    task,
                    origin,
                    card,
                    pointer: point,
                }
            }
            GestureState::Dragging {
                task, origin, card, ..
            } => GestureState::Dragging {
                task,
                origin,
                card,
                pointer: point,
            },
            other => other,
        };
    }

    /// Ends the gesture at `point`, resolving the drop among `zones`.
    pub fn release(&mut self, point: Point, zones: &[DropZone]) -> GestureOutcome {
        let state = std::mem::replace(&mut self.state, GestureState::Idle);
        match state {
            GestureState::Idle => GestureOutcome::Nothing,
            GestureState::Pressed { task, .. } => GestureOutcome::Click(task),
            GestureState::Dragging {
                task, origin, card, ..
            } => {
                let dragged = translated(card, origin, point);
                closest_corners(dragged, point, zones).map_or(GestureOutcome::Nothing, |zone| {
                    GestureOutcome::Move(MoveCommand {
                        active: task,
                        target: zone.target,
                    })
                })
            }
        }
    }

    /// Abandons the gesture.
    pub const fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Returns whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Returns the task being pressed or dragged.
    #[must_use]
    pub const fn active_task(&self) -> Option<TaskId> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Pressed { task, .. } | GestureState::Dragging { task, .. } => Some(task),
        }
    }

    /// Returns where the dragged card currently is.
    #[must_use]
    pub fn dragged_rect(&self) -> Option<Rect> {
        match self.state {
            GestureState::Dragging {
                origin,
                card,
                pointer,
                ..
            } => Some(translated(card, origin, pointer)),
            _ => None,
        }
    }

    fn activation_distance_squared(&self) -> i64 {
        let distance = i64::from(self.activation_distance);
        distance.saturating_mul(distance)
    }
}

const fn translated(card: Rect, origin: Point, pointer: Point) -> Rect {
    card.translate(
        pointer.x.saturating_sub(origin.x),
        pointer.y.saturating_sub(origin.y),
    )
}
