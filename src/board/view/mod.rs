//! Projection of the workspace into renderable columns and cards.

mod coordinator;
mod layout;
mod model;
mod template;

pub use coordinator::BoardCoordinator;
pub use layout::BoardLayout;
pub use model::{
    BoardView, CardView, ColumnView, CreateFormView, ProjectHeader, ProjectListItem,
    TaskDetailView,
};
pub use template::{BOARD_TEMPLATE, render_board};
