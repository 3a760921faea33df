//! Task data shown on the project board.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TASK-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "to do",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskDifficulty {
    Easy,
    Medium,
    Hard,
}

impl TaskDifficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// A single unit of startup work with an XP reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: TaskStatus,
    pub xp_reward: u32,
    pub difficulty: TaskDifficulty,
    #[serde(skip)]
    pub(crate) rewarded: bool,
}

impl Task {
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        category: impl Into<String>,
        xp_reward: u32,
        difficulty: TaskDifficulty,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            category: category.into(),
            status: TaskStatus::Todo,
            xp_reward,
            difficulty,
            rewarded: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether this task already produced its completion award.
    pub fn is_rewarded(&self) -> bool {
        self.rewarded
    }
}
