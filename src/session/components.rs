//! Session lifecycle state and the scripted user actions that drive it.
use std::{collections::VecDeque, time::Duration};

use bevy::prelude::Resource;
use serde::Deserialize;

use crate::{core::plugin::duration_from_seconds, tasks::components::TaskId};

use super::report::SessionReport;

/// One scripted user interaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    Login,
    Logout,
    Start { task: TaskId },
    Complete { task: TaskId },
    /// Reopen a completed task as in progress.
    Redo { task: TaskId },
    Wait { seconds: f32 },
    SkipCelebration,
}

impl SessionAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Start { .. } => "start",
            Self::Complete { .. } => "complete",
            Self::Redo { .. } => "redo",
            Self::Wait { .. } => "wait",
            Self::SkipCelebration => "skip celebration",
        }
    }
}

/// Remaining scripted actions, played back one per frame.
#[derive(Resource, Debug, Default)]
pub struct SessionScript {
    actions: VecDeque<SessionAction>,
    waiting: Duration,
}

impl SessionScript {
    pub fn new(actions: impl IntoIterator<Item = SessionAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            waiting: Duration::ZERO,
        }
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.actions.is_empty() && self.waiting.is_zero()
    }

    pub fn is_waiting(&self) -> bool {
        !self.waiting.is_zero()
    }

    /// Spends `delta` of an active wait. Returns true while still waiting.
    pub fn advance_wait(&mut self, delta: Duration) -> bool {
        self.waiting = self.waiting.saturating_sub(delta);
        self.is_waiting()
    }

    pub fn begin_wait(&mut self, seconds: f32) {
        self.waiting = duration_from_seconds(seconds);
    }

    pub fn next_action(&mut self) -> Option<SessionAction> {
        self.actions.pop_front()
    }
}

/// Login state plus the reports captured so far.
#[derive(Resource, Debug, Default)]
pub struct SessionState {
    logged_in: bool,
    pub level_ups_seen: u64,
    reports: Vec<SessionReport>,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn login(&mut self) -> bool {
        let changed = !self.logged_in;
        self.logged_in = true;
        self.level_ups_seen = 0;
        changed
    }

    pub fn logout(&mut self, report: SessionReport) {
        self.logged_in = false;
        self.reports.push(report);
    }

    pub fn reports(&self) -> &[SessionReport] {
        &self.reports
    }
}
