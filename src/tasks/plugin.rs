//! Task plugin wiring the board and its status-change system.
use bevy::prelude::*;

use super::{
    board::TaskBoard,
    config::TaskBoardSeed,
    events::{TaskCompletedEvent, TaskStatusChangeRequest},
    systems::apply_task_status_requests,
};

pub struct TaskPlugin;

impl Plugin for TaskPlugin {
    fn build(&self, app: &mut App) {
        let seed = TaskBoardSeed::load_or_default();
        app.insert_resource(TaskBoard::new(seed.tasks.clone()))
            .insert_resource(seed)
            .add_message::<TaskStatusChangeRequest>()
            .add_message::<TaskCompletedEvent>()
            .add_systems(Startup, log_task_board)
            .add_systems(Update, apply_task_status_requests);
    }
}

fn log_task_board(board: Res<TaskBoard>) {
    if board.is_empty() {
        warn!("TaskPlugin initialised with an empty board; no XP can be earned");
        return;
    }
    let summary = board.summary();
    info!(
        "TaskPlugin initialised with {} tasks worth {} XP",
        board.len(),
        summary.remaining_xp
    );
}
