//! Classification of the element a dragged card was released over.

use super::ColumnId;
use crate::task::domain::TaskId;

/// What a drag ended over, resolved once from the raw element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// An empty area of a column.
    Column(ColumnId),
    /// Another card, used as the insertion anchor.
    Task(TaskId),
    /// No recognisable target.
    Nothing,
}

impl DropTarget {
    /// Classifies a raw element id. Anything that is neither a column nor a
    /// task element id, including a missing id, is [`DropTarget::Nothing`].
    #[must_use]
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(element_id) = raw.map(str::trim) else {
            return Self::Nothing;
        };
        if let Some(column) = ColumnId::from_element_id(element_id) {
            return Self::Column(column);
        }
        TaskId::from_element_id(element_id).map_or(Self::Nothing, Self::Task)
    }

    /// Returns the element id this target was classified from.
    #[must_use]
    pub fn element_id(self) -> Option<String> {
        match self {
            Self::Column(column) => Some(column.element_id()),
            Self::Task(task) => Some(task.element_id()),
            Self::Nothing => None,
        }
    }
}
