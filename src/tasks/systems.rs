//! Systems applying user task actions to the board.
use bevy::prelude::*;

use super::{
    board::TaskBoard,
    events::{TaskCompletedEvent, TaskStatusChangeRequest},
};

/// Applies status-change requests in arrival order, emitting one
/// `TaskCompletedEvent` per first-time completion.
pub fn apply_task_status_requests(
    mut requests: MessageReader<TaskStatusChangeRequest>,
    mut board: ResMut<TaskBoard>,
    mut completed: MessageWriter<TaskCompletedEvent>,
) {
    for request in requests.read() {
        let change = match board.set_status(&request.task, request.status) {
            Ok(change) => change,
            Err(err) => {
                warn!("Ignoring status change to {}: {}", request.status.label(), err);
                continue;
            }
        };

        if change.is_redo() {
            info!(
                "{} reopened as {} (XP already granted is kept)",
                request.task,
                change.current.label()
            );
        } else {
            debug!(
                "{} moved from {} to {}",
                request.task,
                change.previous.label(),
                change.current.label()
            );
        }

        if let Some(completion) = change.completion {
            info!(
                "{} \"{}\" completed ({}, +{} XP)",
                completion.task,
                completion.title,
                completion.difficulty.label(),
                completion.xp_reward
            );
            completed.write(TaskCompletedEvent {
                task: completion.task,
                title: completion.title,
                xp_reward: completion.xp_reward,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use super::*;
    use crate::tasks::{
        components::{Task, TaskDifficulty, TaskId, TaskStatus},
        events::TaskStatusChangeRequest,
    };

    fn app() -> App {
        let mut app = App::new();
        app.add_message::<TaskStatusChangeRequest>()
            .add_message::<TaskCompletedEvent>()
            .insert_resource(TaskBoard::new(vec![Task::new(
                TaskId::new("1"),
                "Audience",
                "Research",
                25,
                TaskDifficulty::Easy,
            )]))
            .add_systems(Update, apply_task_status_requests);
        app
    }

    fn request(app: &mut App, id: &str, status: TaskStatus) {
        app.world_mut()
            .resource_mut::<Messages<TaskStatusChangeRequest>>()
            .write(TaskStatusChangeRequest::new(TaskId::new(id), status));
    }

    fn completed(app: &App) -> Vec<TaskCompletedEvent> {
        let messages = app.world().resource::<Messages<TaskCompletedEvent>>();
        let mut cursor = messages.get_cursor();
        cursor.read(messages).cloned().collect()
    }

    #[test]
    fn completion_request_emits_single_event() {
        let mut app = app();
        request(&mut app, "1", TaskStatus::Completed);
        request(&mut app, "1", TaskStatus::Completed);
        request(&mut app, "missing", TaskStatus::Completed);
        app.update();

        let events = completed(&app);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].xp_reward, 25);
        assert_eq!(events[0].task, TaskId::new("1"));

        let board = app.world().resource::<TaskBoard>();
        assert_eq!(board.summary().completed, 1);
    }

    #[test]
    fn redo_then_complete_emits_nothing_new() {
        let mut app = app();
        request(&mut app, "1", TaskStatus::Completed);
        app.update();

        request(&mut app, "1", TaskStatus::InProgress);
        request(&mut app, "1", TaskStatus::Completed);
        app.update();

        let events = completed(&app);
        assert_eq!(events.len(), 1);
    }
}
