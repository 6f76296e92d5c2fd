//! Board state: columns, the task store and the session workspace.

mod column;
mod drop_target;
mod error;
mod store;
mod workspace;

pub use column::{Column, ColumnId, ColumnSet};
pub use drop_target::DropTarget;
pub use error::ConsistencyError;
pub use store::{IgnoredMove, MoveOutcome, MoveRecord, Placement, TaskStore};
pub use workspace::{ProjectSnapshot, StatusChange, Workspace};
