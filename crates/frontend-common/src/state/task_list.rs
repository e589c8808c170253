//! Task list view state

use std::collections::HashSet;
use std::rc::Rc;
use taskdeck_http::{Task, TaskStatus};
use yew::prelude::*;

/// Everything the task view renders besides form input
#[derive(Clone, Debug, PartialEq)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub loading: bool,
    /// Inline error above the list
    pub error: Option<String>,
    /// Tasks with a status change in flight
    pub updating: HashSet<i64>,
    /// Tasks with a delete in flight
    pub deleting: HashSet<i64>,
    /// Task open in the edit modal
    pub editing: Option<Task>,
    /// Inline error inside the edit modal
    pub edit_error: Option<String>,
}

/// Task list actions
///
/// Failure actions carry `None` when the failure ended the session; no
/// message is shown then, only the in-flight markers are dropped.
#[derive(Debug)]
pub enum TaskListAction {
    /// Fresh load, clears the inline error
    LoadStarted,
    /// Reload keeping the current error on screen
    Reloading,
    Loaded(Vec<Task>),
    LoadFailed(Option<String>),
    Failed(Option<String>),
    ClearError,
    StatusUpdating { id: i64, status: TaskStatus },
    StatusUpdated(i64),
    StatusFailed { id: i64, message: Option<String> },
    DeleteStarted(i64),
    DeleteFailed { id: i64, message: Option<String> },
    OpenEdit(Task),
    CloseEdit,
    EditStarted,
    EditFailed(Option<String>),
}

pub type TaskListHandle = UseReducerHandle<TaskListState>;

impl Default for TaskListState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            loading: true, // The view loads on mount
            error: None,
            updating: HashSet::new(),
            deleting: HashSet::new(),
            editing: None,
            edit_error: None,
        }
    }
}

impl TaskListState {
    pub fn is_updating(&self, id: i64) -> bool {
        self.updating.contains(&id)
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting.contains(&id)
    }

    /// Whether to show the empty-list hint
    pub fn show_empty(&self) -> bool {
        !self.loading && self.tasks.is_empty()
    }
}

impl Reducible for TaskListState {
    type Action = TaskListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            TaskListAction::LoadStarted => {
                next.loading = true;
                next.error = None;
            }
            TaskListAction::Reloading => next.loading = true,
            TaskListAction::Loaded(tasks) => {
                let present: HashSet<i64> = tasks.iter().map(|task| task.id).collect();
                next.updating.retain(|id| present.contains(id));
                next.deleting.retain(|id| present.contains(id));
                next.tasks = tasks;
                next.loading = false;
            }
            TaskListAction::LoadFailed(message) => {
                next.loading = false;
                if message.is_some() {
                    next.error = message;
                }
            }
            TaskListAction::Failed(message) => {
                if message.is_some() {
                    next.error = message;
                }
            }
            TaskListAction::ClearError => next.error = None,
            TaskListAction::StatusUpdating { id, status } => {
                next.error = None;
                next.updating.insert(id);
                if let Some(task) = next.tasks.iter_mut().find(|task| task.id == id) {
                    task.status = status;
                }
            }
            TaskListAction::StatusUpdated(id) => {
                next.updating.remove(&id);
            }
            TaskListAction::StatusFailed { id, message } => {
                next.updating.remove(&id);
                if message.is_some() {
                    next.error = message;
                }
            }
            TaskListAction::DeleteStarted(id) => {
                next.error = None;
                next.deleting.insert(id);
            }
            TaskListAction::DeleteFailed { id, message } => {
                next.deleting.remove(&id);
                if message.is_some() {
                    next.error = message;
                }
            }
            TaskListAction::OpenEdit(task) => {
                next.editing = Some(task);
                next.edit_error = None;
            }
            TaskListAction::CloseEdit => {
                next.editing = None;
                next.edit_error = None;
            }
            TaskListAction::EditStarted => next.edit_error = None,
            TaskListAction::EditFailed(message) => {
                if message.is_some() {
                    next.edit_error = message;
                }
            }
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: i64, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            description: None,
            status,
            created_at: Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap(),
        }
    }

    fn apply(state: Rc<TaskListState>, actions: Vec<TaskListAction>) -> Rc<TaskListState> {
        actions.into_iter().fold(state, TaskListState::reduce)
    }

    fn loaded(tasks: Vec<Task>) -> Rc<TaskListState> {
        apply(Rc::default(), vec![TaskListAction::Loaded(tasks)])
    }

    #[test]
    fn starts_loading_without_empty_hint() {
        let state = TaskListState::default();
        assert!(state.loading);
        assert!(!state.show_empty());

        let state = loaded(Vec::new());
        assert!(state.show_empty());
    }

    #[test]
    fn status_change_is_optimistic_and_marked_updating() {
        let state = loaded(vec![task(1, TaskStatus::Pending)]);
        let state = apply(
            state,
            vec![TaskListAction::StatusUpdating {
                id: 1,
                status: TaskStatus::Done,
            }],
        );

        assert_eq!(state.tasks[0].status, TaskStatus::Done);
        assert!(state.is_updating(1));

        let state = apply(state, vec![TaskListAction::StatusUpdated(1)]);
        assert!(!state.is_updating(1));
    }

    #[test]
    fn failed_status_change_keeps_error_through_reload() {
        let state = loaded(vec![task(1, TaskStatus::Pending)]);
        let state = apply(
            state,
            vec![
                TaskListAction::StatusUpdating {
                    id: 1,
                    status: TaskStatus::Done,
                },
                TaskListAction::StatusFailed {
                    id: 1,
                    message: Some("Failed to update task".into()),
                },
                TaskListAction::Reloading,
                TaskListAction::Loaded(vec![task(1, TaskStatus::Pending)]),
            ],
        );

        assert_eq!(state.error.as_deref(), Some("Failed to update task"));
        assert_eq!(state.tasks[0].status, TaskStatus::Pending);
        assert!(state.updating.is_empty());
    }

    #[test]
    fn failed_delete_leaves_task_and_clears_marker() {
        let state = loaded(vec![task(1, TaskStatus::Pending), task(2, TaskStatus::Done)]);
        let state = apply(state, vec![TaskListAction::DeleteStarted(2)]);
        assert!(state.is_deleting(2));

        let state = apply(
            state,
            vec![TaskListAction::DeleteFailed {
                id: 2,
                message: Some("Failed to delete task".into()),
            }],
        );
        assert!(!state.is_deleting(2));
        assert_eq!(state.tasks.len(), 2);
        assert_eq!(state.error.as_deref(), Some("Failed to delete task"));
    }

    #[test]
    fn silent_failure_keeps_previous_error() {
        let state = apply(
            loaded(Vec::new()),
            vec![
                TaskListAction::Failed(Some("Task title is required".into())),
                TaskListAction::Failed(None),
            ],
        );
        assert_eq!(state.error.as_deref(), Some("Task title is required"));

        let state = apply(state, vec![TaskListAction::LoadStarted]);
        assert!(state.error.is_none());
    }

    #[test]
    fn edit_modal_tracks_task_and_clears_error_on_close() {
        let state = loaded(vec![task(3, TaskStatus::InProgress)]);
        let state = apply(
            state,
            vec![
                TaskListAction::OpenEdit(task(3, TaskStatus::InProgress)),
                TaskListAction::EditFailed(Some("Task title is required".into())),
            ],
        );
        assert_eq!(state.editing.as_ref().map(|t| t.id), Some(3));
        assert_eq!(state.edit_error.as_deref(), Some("Task title is required"));

        let state = apply(state, vec![TaskListAction::CloseEdit]);
        assert!(state.editing.is_none());
        assert!(state.edit_error.is_none());
    }
}
