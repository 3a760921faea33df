use std::fs;

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::config_path;

use super::components::{Task, TaskDifficulty, TaskId, TaskStatus};

const CONFIG_FILE: &str = "tasks.toml";

#[derive(Debug, Clone, Deserialize)]
struct RawTaskConfig {
    #[serde(default = "default_raw_tasks")]
    tasks: Vec<RawTask>,
}

impl Default for RawTaskConfig {
    fn default() -> Self {
        Self {
            tasks: default_raw_tasks(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawTask {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    xp_reward: u32,
    #[serde(default = "default_difficulty")]
    difficulty: TaskDifficulty,
    #[serde(default)]
    status: TaskStatus,
}

fn default_difficulty() -> TaskDifficulty {
    TaskDifficulty::Medium
}

fn raw_task(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    xp_reward: u32,
    difficulty: TaskDifficulty,
) -> RawTask {
    RawTask {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        xp_reward,
        difficulty,
        status: TaskStatus::Todo,
    }
}

fn default_raw_tasks() -> Vec<RawTask> {
    vec![
        raw_task(
            "1",
            "Define Target Audience",
            "Research and create detailed personas of your ideal customers",
            "Market Research",
            25,
            TaskDifficulty::Easy,
        ),
        raw_task(
            "2",
            "Competitor Analysis",
            "Analyze 5 direct competitors and identify market gaps",
            "Market Research",
            40,
            TaskDifficulty::Medium,
        ),
        raw_task(
            "3",
            "Brand Name & Logo",
            "Create brand identity including name, logo, and color scheme",
            "Brand Identity",
            35,
            TaskDifficulty::Medium,
        ),
        raw_task(
            "4",
            "Business Model Canvas",
            "Complete a comprehensive business model canvas",
            "Strategy",
            50,
            TaskDifficulty::Hard,
        ),
        raw_task(
            "5",
            "Create Social Media Accounts",
            "Set up Instagram, TikTok, and Twitter profiles",
            "Marketing",
            20,
            TaskDifficulty::Easy,
        ),
        raw_task(
            "6",
            "Find Suppliers",
            "Research and contact potential manufacturers",
            "Operations",
            45,
            TaskDifficulty::Hard,
        ),
    ]
}

/// Tasks a fresh board is seeded with at login.
#[derive(Resource, Debug, Clone)]
pub struct TaskBoardSeed {
    pub tasks: Vec<Task>,
}

impl TaskBoardSeed {
    pub fn load_or_default() -> Self {
        let path = config_path(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<RawTaskConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        path.display(),
                        err
                    );
                    RawTaskConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    path.display(),
                    err
                );
                RawTaskConfig::default().into()
            }
        }
    }
}

impl Default for TaskBoardSeed {
    fn default() -> Self {
        RawTaskConfig::default().into()
    }
}

impl From<RawTaskConfig> for TaskBoardSeed {
    fn from(value: RawTaskConfig) -> Self {
        let mut tasks: Vec<Task> = Vec::with_capacity(value.tasks.len());
        for raw in value.tasks {
            let id = raw.id.trim();
            if id.is_empty() {
                warn!("Skipping task '{}' without an id", raw.title);
                continue;
            }
            if raw.xp_reward == 0 {
                warn!("Skipping task {} with a zero XP reward", id);
                continue;
            }
            if tasks.iter().any(|task| task.id.as_str() == id) {
                warn!("Skipping duplicate task id {}", id);
                continue;
            }

            let mut task = Task::new(
                TaskId::new(id),
                raw.title.trim(),
                raw.category.trim(),
                raw.xp_reward,
                raw.difficulty,
            )
            .with_description(raw.description.trim());
            task.status = raw.status;
            // Seeded as already done: finished before this session, never pays out.
            task.rewarded = raw.status == TaskStatus::Completed;
            tasks.push(task);
        }

        Self { tasks }
    }
}
