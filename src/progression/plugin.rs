//! Progression plugin wiring the per-session XP state and award system.
use bevy::prelude::*;

use crate::tasks::systems::apply_task_status_requests;

use super::{
    config::ProgressionConfig,
    engine::ProgressionState,
    events::{LevelUpEvent, XpAwardedEvent},
    systems::award_xp_for_completed_tasks,
};

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ProgressionConfig::load_or_default())
            .init_resource::<ProgressionState>()
            .add_message::<XpAwardedEvent>()
            .add_message::<LevelUpEvent>()
            .add_systems(Startup, log_progression_tables)
            .add_systems(
                Update,
                award_xp_for_completed_tasks.after(apply_task_status_requests),
            );
    }
}

fn log_progression_tables(config: Res<ProgressionConfig>) {
    info!(
        "ProgressionPlugin initialised with {} tiers ({} levels each) and {} milestones",
        config.tiers.len(),
        config.tiers.band_width(),
        config.milestones.iter().count()
    );
}
