//! Session plugin wiring the scripted user and login lifecycle.
use bevy::prelude::*;

use crate::{
    progression::systems::award_xp_for_completed_tasks,
    tasks::systems::apply_task_status_requests,
};

use super::{
    components::{SessionScript, SessionState},
    config::SessionConfig,
    systems::{apply_session_time_scale, count_level_ups, drive_session_script},
};

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        let config = SessionConfig::load_or_default();
        app.insert_resource(SessionScript::new(config.actions.clone()))
            .insert_resource(config)
            .init_resource::<SessionState>()
            .add_systems(Startup, apply_session_time_scale)
            .add_systems(
                Update,
                (
                    drive_session_script.before(apply_task_status_requests),
                    count_level_ups.after(award_xp_for_completed_tasks),
                ),
            );
    }
}
