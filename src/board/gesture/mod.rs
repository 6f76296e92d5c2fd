//! Pointer gestures on the board.
//!
//! [`DragInterpreter`] follows a press through an optional drag and reports
//! either a click or a move command. Drop targets are chosen among
//! [`DropZone`]s by [`closest_corners`].

mod collision;
mod geometry;
mod interpreter;

pub use collision::{DropZone, closest_corners};
pub use geometry::{Point, Rect};
pub use interpreter::{DEFAULT_ACTIVATION_DISTANCE, DragInterpreter, GestureOutcome, MoveCommand};
