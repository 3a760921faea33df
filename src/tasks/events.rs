//! Task board messages.
use bevy::prelude::Message;

use super::components::{TaskId, TaskStatus};

/// A user action moving a task to a new status.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct TaskStatusChangeRequest {
    pub task: TaskId,
    pub status: TaskStatus,
}

impl TaskStatusChangeRequest {
    pub fn new(task: TaskId, status: TaskStatus) -> Self {
        Self { task, status }
    }
}

/// Fired once per task when it first reaches `Completed`.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct TaskCompletedEvent {
    pub task: TaskId,
    pub title: String,
    pub xp_reward: u32,
}
