//! New task form

use super::input::{bind_input, bind_textarea};
use crate::auth::use_services;
use crate::hooks::{BusyGuard, use_busy};
use crate::services::tasks;
use crate::state::TaskListHandle;
use taskdeck_http::TaskForm;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreateTaskFormProps {
    pub state: TaskListHandle,
}

#[function_component(CreateTaskForm)]
pub fn create_task_form(props: &CreateTaskFormProps) -> Html {
    let services = use_services();
    let title = use_state(String::new);
    let description = use_state(String::new);
    let busy = use_busy();

    let onsubmit = {
        let dispatcher = props.state.dispatcher();
        let title = title.clone();
        let description = description.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let form = TaskForm {
                title: (*title).clone(),
                description: (*description).clone(),
            };
            let guard = BusyGuard::for_state(&busy);
            let services = services.clone();
            let dispatcher = dispatcher.clone();
            let title = title.clone();
            let description = description.clone();
            spawn_local(async move {
                let _guard = guard;
                let created =
                    tasks::create_task(&services, &form, |action| dispatcher.dispatch(action))
                        .await;
                if created {
                    title.set(String::new());
                    description.set(String::new());
                }
            });
        })
    };

    html! {
        <form class="task-form" {onsubmit}>
            <input
                id="task-title"
                type="text"
                placeholder="Task title"
                value={(*title).clone()}
                oninput={bind_input(&title)}
            />
            <textarea
                id="task-description"
                placeholder="Description (optional)"
                value={(*description).clone()}
                oninput={bind_textarea(&description)}
            />
            <button id="create-task-btn" type="submit" disabled={*busy}>
                {if *busy { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}
