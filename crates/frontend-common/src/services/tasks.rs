//! Task list flows
//!
//! Each flow drives one user action against the task API and reports its
//! progress as [`TaskListAction`]s through `dispatch`.

use super::Services;
use crate::state::TaskListAction;
use taskdeck_http::{TaskForm, TaskStatus};

/// Load the list from scratch, clearing the inline error
pub async fn load_tasks(services: &Services, dispatch: impl Fn(TaskListAction)) {
    dispatch(TaskListAction::LoadStarted);
    fetch(services, &dispatch).await;
}

/// Reload the list to restore server state, keeping the inline error
pub async fn reload_tasks(services: &Services, dispatch: impl Fn(TaskListAction)) {
    dispatch(TaskListAction::Reloading);
    fetch(services, &dispatch).await;
}

async fn fetch(services: &Services, dispatch: &impl Fn(TaskListAction)) {
    match services.tasks().list().await {
        Ok(tasks) => {
            debug!("Loaded {} tasks", tasks.len());
            dispatch(TaskListAction::Loaded(tasks));
        }
        Err(e) => dispatch(TaskListAction::LoadFailed(services.inline_error(&e))),
    }
}

/// Create a task; `true` when the form should be cleared
pub async fn create_task(
    services: &Services,
    form: &TaskForm,
    dispatch: impl Fn(TaskListAction),
) -> bool {
    dispatch(TaskListAction::ClearError);

    match services.tasks().create(form).await {
        Ok(task) => {
            match task {
                Some(task) => info!("Created task {}", task.id),
                None => info!("Created task"),
            }
            load_tasks(services, &dispatch).await;
            true
        }
        Err(e) => {
            dispatch(TaskListAction::Failed(services.inline_error(&e)));
            false
        }
    }
}

/// Change a task's status optimistically; a failure reloads the list
pub async fn change_status(
    services: &Services,
    id: i64,
    status: TaskStatus,
    dispatch: impl Fn(TaskListAction),
) {
    dispatch(TaskListAction::StatusUpdating { id, status });

    match services.tasks().update_status(id, status).await {
        Ok(()) => dispatch(TaskListAction::StatusUpdated(id)),
        Err(e) => {
            dispatch(TaskListAction::StatusFailed {
                id,
                message: services.inline_error(&e),
            });
            if services.has_session() {
                reload_tasks(services, &dispatch).await;
            }
        }
    }
}

/// Save the task open in the edit modal
pub async fn save_edit(
    services: &Services,
    id: i64,
    form: &TaskForm,
    status: TaskStatus,
    dispatch: impl Fn(TaskListAction),
) {
    dispatch(TaskListAction::EditStarted);

    match services.tasks().save(id, form, status).await {
        Ok(()) => {
            dispatch(TaskListAction::CloseEdit);
            load_tasks(services, &dispatch).await;
        }
        Err(e) => dispatch(TaskListAction::EditFailed(services.inline_error(&e))),
    }
}

/// Delete a task; it stays listed unless the backend confirms
pub async fn delete_task(services: &Services, id: i64, dispatch: impl Fn(TaskListAction)) {
    dispatch(TaskListAction::DeleteStarted(id));

    match services.tasks().delete(id).await {
        Ok(()) => {
            info!("Deleted task {id}");
            load_tasks(services, &dispatch).await;
        }
        Err(e) => dispatch(TaskListAction::DeleteFailed {
            id,
            message: services.inline_error(&e),
        }),
    }
}
