//! Error types surfaced by the task board.
use std::fmt;

use super::components::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskBoardError {
    UnknownTask { id: TaskId },
}

impl TaskBoardError {
    pub fn unknown_task(id: TaskId) -> Self {
        Self::UnknownTask { id }
    }
}

impl fmt::Display for TaskBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTask { id } => write!(f, "unknown task {}", id),
        }
    }
}

impl std::error::Error for TaskBoardError {}
