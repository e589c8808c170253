//! Task list with its per-task actions

use super::{ErrorBanner, Spinner, TaskItem};
use crate::auth::use_services;
use crate::config::FrontendConfig;
use crate::services::tasks;
use crate::state::{TaskListAction, TaskListHandle};
use taskdeck_http::{Task, TaskStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub state: TaskListHandle,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    let services = use_services();
    let state = &props.state;

    let on_status_change = {
        let services = services.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |(id, status): (i64, TaskStatus)| {
            let services = services.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                tasks::change_status(&services, id, status, |action| dispatcher.dispatch(action))
                    .await;
            });
        })
    };

    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |task: Task| dispatcher.dispatch(TaskListAction::OpenEdit(task)))
    };

    let on_delete = {
        let services = services.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |id: i64| {
            if !gloo::dialogs::confirm(FrontendConfig::DELETE_CONFIRMATION) {
                return;
            }
            let services = services.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                tasks::delete_task(&services, id, |action| dispatcher.dispatch(action)).await;
            });
        })
    };

    html! {
        <>
            <ErrorBanner id="task-error" message={state.error.clone().map(AttrValue::from)} />
            <ul id="task-list" class={classes!("task-list", state.loading.then_some("loading"))}>
                if state.show_empty() {
                    <li class="no-tasks">{"No tasks yet. Create one above!"}</li>
                }
                {state.tasks.iter().map(|task| html! {
                    <TaskItem
                        key={task.id}
                        task={task.clone()}
                        updating={state.is_updating(task.id)}
                        deleting={state.is_deleting(task.id)}
                        on_status_change={on_status_change.clone()}
                        on_edit={on_edit.clone()}
                        on_delete={on_delete.clone()}
                    />
                }).collect::<Html>()}
            </ul>
            if state.loading && state.tasks.is_empty() {
                <Spinner text="Loading tasks..." />
            }
        </>
    }
}
