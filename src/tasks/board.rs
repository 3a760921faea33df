//! Task board resource tracking status changes and completion awards.
use bevy::prelude::Resource;
use serde::Serialize;

use super::{
    components::{Task, TaskDifficulty, TaskId, TaskStatus},
    errors::TaskBoardError,
};

/// Award owed for a task's first completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCompletion {
    pub task: TaskId,
    pub title: String,
    pub xp_reward: u32,
    pub difficulty: TaskDifficulty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub previous: TaskStatus,
    pub current: TaskStatus,
    pub completion: Option<TaskCompletion>,
}

impl StatusChange {
    pub fn is_redo(&self) -> bool {
        self.previous == TaskStatus::Completed && self.current != TaskStatus::Completed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub earned_xp: u64,
    pub remaining_xp: u64,
}

/// Ordered list of tasks for the current session.
///
/// Each task pays out at most once per session: redoing a completed task
/// keeps the XP already granted and a later re-completion pays nothing.
/// Tasks without a reward never pay out and are never marked as paid.
#[derive(Resource, Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn set_status(
        &mut self,
        id: &TaskId,
        status: TaskStatus,
    ) -> Result<StatusChange, TaskBoardError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .ok_or_else(|| TaskBoardError::unknown_task(id.clone()))?;

        let previous = task.status;
        task.status = status;

        let completion = if status == TaskStatus::Completed
            && previous != TaskStatus::Completed
            && !task.rewarded
            && task.xp_reward > 0
        {
            task.rewarded = true;
            Some(TaskCompletion {
                task: task.id.clone(),
                title: task.title.clone(),
                xp_reward: task.xp_reward,
                difficulty: task.difficulty,
            })
        } else {
            None
        };

        Ok(StatusChange {
            previous,
            current: status,
            completion,
        })
    }

    pub fn summary(&self) -> BoardSummary {
        let mut summary = BoardSummary::default();
        for task in &self.tasks {
            match task.status {
                TaskStatus::Todo => summary.todo += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Completed => summary.completed += 1,
            }
            if task.is_rewarded() {
                summary.earned_xp += u64::from(task.xp_reward);
            } else {
                summary.remaining_xp += u64::from(task.xp_reward);
            }
        }
        summary
    }
}
