//! Orchestration between the workspace and the persistence ports.

mod board;
mod error;

pub use board::BoardService;
pub use error::{BoardError, BoardResult};
