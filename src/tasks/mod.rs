//! Task module hosting the project board that feeds XP awards.
pub mod board;
pub mod components;
pub mod config;
pub mod errors;
pub mod events;
pub mod plugin;
pub mod systems;

pub use board::{BoardSummary, TaskBoard};
pub use components::{Task, TaskDifficulty, TaskId, TaskStatus};
pub use events::{TaskCompletedEvent, TaskStatusChangeRequest};
pub use plugin::TaskPlugin;
