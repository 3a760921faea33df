use std::fs;

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::config_path;

const CONFIG_FILE: &str = "celebration.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawCelebrationConfig {
    level_up_seconds: f32,
    xp_toast_seconds: f32,
}

impl Default for RawCelebrationConfig {
    fn default() -> Self {
        Self {
            level_up_seconds: 3.0,
            xp_toast_seconds: 1.0,
        }
    }
}

/// How long celebration overlays stay up, in session-clock seconds.
#[derive(Resource, Debug, Clone)]
pub struct CelebrationSettings {
    pub level_up_seconds: f32,
    pub xp_toast_seconds: f32,
}

impl CelebrationSettings {
    pub fn load_or_default() -> Self {
        let path = config_path(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<RawCelebrationConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        path.display(),
                        err
                    );
                    RawCelebrationConfig::default().into()
                }
            },
            Err(err) => {
                debug!(
                    "No celebration overrides at {} ({}). Using defaults.",
                    path.display(),
                    err
                );
                RawCelebrationConfig::default().into()
            }
        }
    }
}

impl Default for CelebrationSettings {
    fn default() -> Self {
        RawCelebrationConfig::default().into()
    }
}

impl From<RawCelebrationConfig> for CelebrationSettings {
    fn from(value: RawCelebrationConfig) -> Self {
        let sanitise = |seconds: f32| {
            if seconds.is_finite() {
                seconds.max(0.0)
            } else {
                0.0
            }
        };
        Self {
            level_up_seconds: sanitise(value.level_up_seconds),
            xp_toast_seconds: sanitise(value.xp_toast_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_nan_durations_clamp_to_zero() {
        let settings = CelebrationSettings::from(RawCelebrationConfig {
            level_up_seconds: -2.0,
            xp_toast_seconds: f32::NAN,
        });
        assert_eq!(settings.level_up_seconds, 0.0);
        assert_eq!(settings.xp_toast_seconds, 0.0);

        let defaults = CelebrationSettings::default();
        assert_eq!(defaults.level_up_seconds, 3.0);
    }

    #[test]
    fn parses_durations_with_partial_overrides() {
        let raw: RawCelebrationConfig =
            toml::from_str("level_up_seconds = 5.5").expect("valid toml");
        let settings = CelebrationSettings::from(raw);
        assert_eq!(settings.level_up_seconds, 5.5);
        assert_eq!(settings.xp_toast_seconds, 1.0);

        let raw: RawCelebrationConfig =
            toml::from_str("level_up_seconds = 2.0\nxp_toast_seconds = 0.5")
                .expect("valid toml");
        assert_eq!(CelebrationSettings::from(raw).xp_toast_seconds, 0.5);
    }
}
