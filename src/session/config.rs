use std::fs;

use bevy::prelude::*;
use serde::Deserialize;

use crate::{core::config::config_path, tasks::components::TaskId};

use super::components::SessionAction;

const CONFIG_FILE: &str = "session.toml";

#[derive(Debug, Clone, Deserialize)]
struct RawSessionConfig {
    #[serde(default = "default_time_scale")]
    time_scale: f32,
    #[serde(default = "default_actions")]
    actions: Vec<SessionAction>,
}

impl Default for RawSessionConfig {
    fn default() -> Self {
        Self {
            time_scale: default_time_scale(),
            actions: default_actions(),
        }
    }
}

fn default_time_scale() -> f32 {
    1.0
}

fn default_actions() -> Vec<SessionAction> {
    let task = |id: &str| TaskId::new(id);
    vec![
        SessionAction::Login,
        SessionAction::Start { task: task("1") },
        SessionAction::Complete { task: task("1") },
        SessionAction::Complete { task: task("2") },
        SessionAction::Start { task: task("4") },
        SessionAction::Complete { task: task("4") },
        SessionAction::Wait { seconds: 3.5 },
        SessionAction::Complete { task: task("3") },
        SessionAction::Redo { task: task("1") },
        SessionAction::Complete { task: task("1") },
        SessionAction::Complete { task: task("6") },
        SessionAction::Complete { task: task("5") },
        SessionAction::SkipCelebration,
        SessionAction::Logout,
    ]
}

/// Scripted session loaded from `config/session.toml`.
#[derive(Resource, Debug, Clone)]
pub struct SessionConfig {
    pub time_scale: f32,
    pub actions: Vec<SessionAction>,
}

impl SessionConfig {
    pub fn load_or_default() -> Self {
        let path = config_path(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<RawSessionConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to the default script.",
                        path.display(),
                        err
                    );
                    RawSessionConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to the default script.",
                    path.display(),
                    err
                );
                RawSessionConfig::default().into()
            }
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        RawSessionConfig::default().into()
    }
}

impl From<RawSessionConfig> for SessionConfig {
    fn from(value: RawSessionConfig) -> Self {
        let time_scale = if value.time_scale.is_finite() && value.time_scale > 0.0 {
            value.time_scale
        } else {
            default_time_scale()
        };
        Self {
            time_scale,
            actions: value.actions,
        }
    }
}
