//! End-of-session summary logged as JSON.
use std::time::Duration;

use serde::Serialize;

use crate::{
    progression::{
        config::ProgressionConfig,
        engine::{LevelProgress, ProgressionState},
    },
    tasks::board::{BoardSummary, TaskBoard},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub total_xp: u64,
    pub level: u64,
    pub tier: String,
    pub next_tier: Option<String>,
    pub progress: LevelProgress,
    pub progress_percent: f32,
    pub tasks: BoardSummary,
    pub milestones: Vec<String>,
    pub level_ups_seen: u64,
    /// Session-clock seconds at capture time.
    pub session_seconds: f32,
}

impl SessionReport {
    pub fn capture(
        state: &ProgressionState,
        board: &TaskBoard,
        config: &ProgressionConfig,
        level_ups_seen: u64,
        session_time: Duration,
    ) -> Self {
        let level = state.level();
        let progress = state.progress_within_level();
        Self {
            total_xp: state.total_xp(),
            level,
            tier: config.tiers.tier_for(level).name,
            next_tier: config.tiers.next_tier_preview(level).map(|tier| tier.name),
            progress,
            progress_percent: progress.percent(),
            tasks: board.summary(),
            milestones: config
                .milestones
                .unlocked(level)
                .into_iter()
                .map(|milestone| milestone.name)
                .collect(),
            level_ups_seen,
            session_seconds: session_time.as_secs_f32(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
