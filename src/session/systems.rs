//! Systems replaying the scripted session and handling login/logout.
use bevy::prelude::*;

use crate::{
    celebration::components::{LevelUpBanner, XpToasts},
    core::plugin::SessionClock,
    progression::{config::ProgressionConfig, engine::ProgressionState, events::LevelUpEvent},
    tasks::{
        board::TaskBoard, components::TaskStatus, config::TaskBoardSeed,
        events::TaskStatusChangeRequest,
    },
};

use super::{
    components::{SessionAction, SessionScript, SessionState},
    config::SessionConfig,
    report::SessionReport,
};

/// Applies the scripted time scale to the session clock.
pub fn apply_session_time_scale(config: Res<SessionConfig>, mut clock: ResMut<SessionClock>) {
    clock.set_time_scale(config.time_scale);
    info!(
        "Session script loaded: {} actions at time scale {:.2}",
        config.actions.len(),
        clock.time_scale()
    );
}

/// Plays back at most one scripted action per frame.
#[allow(clippy::too_many_arguments)]
pub fn drive_session_script(
    clock: Res<SessionClock>,
    config: Res<ProgressionConfig>,
    seed: Res<TaskBoardSeed>,
    mut script: ResMut<SessionScript>,
    mut session: ResMut<SessionState>,
    mut state: ResMut<ProgressionState>,
    mut board: ResMut<TaskBoard>,
    mut banner: ResMut<LevelUpBanner>,
    mut toasts: ResMut<XpToasts>,
    mut requests: MessageWriter<TaskStatusChangeRequest>,
    mut exit: MessageWriter<AppExit>,
    mut finished: Local<bool>,
) {
    if *finished {
        return;
    }

    if script.is_waiting() {
        script.advance_wait(clock.last_scaled_delta());
        return;
    }

    if script.is_finished() {
        if session.is_logged_in() {
            let report = capture_report(&state, &board, &config, &session, &clock);
            session.logout(report);
        }
        info!(
            "Session script finished with {} report(s)",
            session.reports().len()
        );
        *finished = true;
        exit.write(AppExit::Success);
        return;
    }

    let Some(action) = script.next_action() else {
        return;
    };
    debug!(
        "Session action '{}' ({} left)",
        action.label(),
        script.remaining()
    );

    let allowed_logged_out = matches!(action, SessionAction::Login | SessionAction::Wait { .. });
    if !session.is_logged_in() && !allowed_logged_out {
        warn!("Ignoring '{}' before login", action.label());
        return;
    }

    match action {
        SessionAction::Login => {
            if !session.login() {
                warn!("Login requested while already logged in");
                return;
            }
            *state = ProgressionState::new();
            *board = TaskBoard::new(seed.tasks.clone());
            info!(
                "Logged in: level {} with {} XP",
                state.level(),
                state.total_xp()
            );
        }
        SessionAction::Logout => {
            let report = capture_report(&state, &board, &config, &session, &clock);
            session.logout(report);
            *state = ProgressionState::new();
            *board = TaskBoard::new(seed.tasks.clone());
            banner.skip();
            toasts.clear();
            info!("Logged out; progression state discarded");
        }
        SessionAction::Start { task } => {
            requests.write(TaskStatusChangeRequest::new(task, TaskStatus::InProgress));
        }
        SessionAction::Complete { task } => {
            requests.write(TaskStatusChangeRequest::new(task, TaskStatus::Completed));
        }
        SessionAction::Redo { task } => {
            requests.write(TaskStatusChangeRequest::new(task, TaskStatus::InProgress));
        }
        SessionAction::Wait { seconds } => {
            script.begin_wait(seconds);
            debug!("Waiting {:.2}s of session time", seconds);
        }
        SessionAction::SkipCelebration => {
            if let Some(content) = banner.content() {
                info!(
                    "Level {} ({}) celebration skipped",
                    content.level, content.tier_name
                );
            }
            banner.skip();
            state.acknowledge_level_up();
        }
    }
}

/// Counts level-ups observed during the logged-in session.
pub fn count_level_ups(
    mut level_ups: MessageReader<LevelUpEvent>,
    mut session: ResMut<SessionState>,
) {
    let seen = level_ups.read().count() as u64;
    if session.is_logged_in() {
        session.level_ups_seen += seen;
    }
}

fn capture_report(
    state: &ProgressionState,
    board: &TaskBoard,
    config: &ProgressionConfig,
    session: &SessionState,
    clock: &SessionClock,
) -> SessionReport {
    let report = SessionReport::capture(
        state,
        board,
        config,
        session.level_ups_seen,
        clock.elapsed(),
    );
    match report.to_json() {
        Ok(json) => info!("Session report:\n{}", json),
        Err(err) => warn!("Failed to serialise session report: {}", err),
    }
    report
}
