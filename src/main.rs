use std::{path::Path, time::Duration};

use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};

mod celebration;
mod core;
mod progression;
mod session;
mod tasks;

use crate::{
    celebration::CelebrationPlugin, core::CorePlugin, progression::ProgressionPlugin,
    session::SessionPlugin, tasks::TaskPlugin,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    load_session_env();

    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FRAME_INTERVAL)),
            LogPlugin::default(),
            CorePlugin::default(),
            TaskPlugin,
            ProgressionPlugin, // After TaskPlugin to consume TaskCompletedEvent
            CelebrationPlugin,
            SessionPlugin,
        ))
        .run();
}

fn load_session_env() {
    const SESSION_ENV_FILE: &str = "session.env";

    let path = Path::new(SESSION_ENV_FILE);
    if !path.exists() {
        return;
    }

    if let Err(err) = dotenvy::from_filename(path) {
        eprintln!("Failed to load {}: {}", SESSION_ENV_FILE, err);
    }
}
