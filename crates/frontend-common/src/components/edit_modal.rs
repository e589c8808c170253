//! Edit task modal

use super::ErrorBanner;
use super::input::{bind_input, bind_textarea};
use crate::auth::use_services;
use crate::hooks::{BusyGuard, use_busy};
use crate::services::tasks;
use crate::state::{TaskListAction, TaskListHandle};
use gloo::events::EventListener;
use taskdeck_http::{Task, TaskForm, TaskStatus};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EditModalProps {
    pub state: TaskListHandle,
}

/// Shown while a task is being edited
#[function_component(EditModal)]
pub fn edit_modal(props: &EditModalProps) -> Html {
    match &props.state.editing {
        Some(task) => html! {
            <EditDialog key={task.id} task={task.clone()} state={props.state.clone()} />
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct EditDialogProps {
    task: Task,
    state: TaskListHandle,
}

#[function_component(EditDialog)]
fn edit_dialog(props: &EditDialogProps) -> Html {
    let services = use_services();
    let title = use_state(|| props.task.title.clone());
    let description = use_state(|| props.task.description.clone().unwrap_or_default());
    let status = use_state(|| props.task.status);
    let busy = use_busy();
    let title_ref = use_node_ref();

    {
        let title_ref = title_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = title_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        });
    }

    // Escape closes the modal from anywhere on the page
    {
        let dispatcher = props.state.dispatcher();
        use_effect_with((), move |_| {
            let listener = web_sys::window()
                .and_then(|window| window.document())
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                            if event.key() == "Escape" {
                                dispatcher.dispatch(TaskListAction::CloseEdit);
                            }
                        }
                    })
                });
            move || drop(listener)
        });
    }

    let on_cancel = {
        let dispatcher = props.state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(TaskListAction::CloseEdit))
    };

    let on_status = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(value) = TaskStatus::parse(&select.value()) {
                status.set(value);
            }
        })
    };

    let onsubmit = {
        let id = props.task.id;
        let dispatcher = props.state.dispatcher();
        let title = title.clone();
        let description = description.clone();
        let status = status.clone();
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
            let status = *status;
            let guard = BusyGuard::for_state(&busy);
            let services = services.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let _guard = guard;
                tasks::save_edit(&services, id, &form, status, |action| {
                    dispatcher.dispatch(action);
                })
                .await;
            });
        })
    };

    html! {
        <div id="edit-modal" class="modal open">
            <div class="modal-content">
                <h2>{"Edit Task"}</h2>
                <ErrorBanner
                    id="edit-error"
                    message={props.state.edit_error.clone().map(AttrValue::from)}
                />
                <form class="edit-form" {onsubmit}>
                    <input
                        id="edit-task-title"
                        type="text"
                        ref={title_ref}
                        value={(*title).clone()}
                        oninput={bind_input(&title)}
                    />
                    <textarea
                        id="edit-task-description"
                        value={(*description).clone()}
                        oninput={bind_textarea(&description)}
                    />
                    <select id="edit-task-status" onchange={on_status}>
                        {TaskStatus::ALL.iter().map(|option| html! {
                            <option value={option.as_str()} selected={*option == *status}>
                                {option.label()}
                            </option>
                        }).collect::<Html>()}
                    </select>
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button id="save-edit-btn" type="submit" disabled={*busy}>
                            {if *busy { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
