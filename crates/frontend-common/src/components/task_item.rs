//! A single task row

use taskdeck_http::{Task, TaskStatus};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TaskItemProps {
    pub task: Task,
    #[prop_or_default]
    pub updating: bool,
    #[prop_or_default]
    pub deleting: bool,
    pub on_status_change: Callback<(i64, TaskStatus)>,
    pub on_edit: Callback<Task>,
    pub on_delete: Callback<i64>,
}

/// Task row; every task field is rendered as a text node
#[function_component(TaskItem)]
pub fn task_item(props: &TaskItemProps) -> Html {
    let task = &props.task;
    let select_ref = use_node_ref();

    // `selected` is ignored once the user has touched the select
    {
        let select_ref = select_ref.clone();
        use_effect_with(task.status, move |status| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(status.as_str());
            }
        });
    }

    let on_change = {
        let id = task.id;
        let on_status_change = props.on_status_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(status) = TaskStatus::parse(&select.value()) {
                on_status_change.emit((id, status));
            }
        })
    };

    let on_edit = {
        let task = task.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(task.clone()))
    };

    let on_delete = {
        let id = task.id;
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    let class = classes!(
        "task",
        format!("status-{}", task.status),
        props.updating.then_some("updating"),
        props.deleting.then_some("deleting"),
    );

    html! {
        <li id={format!("task-{}", task.id)} {class}>
            <div class="task-content">
                <span class="task-title">{&task.title}</span>
                if let Some(description) = task.description() {
                    <span class="task-description">{description}</span>
                }
                <span class="task-date">{format!("Created: {}", task.created_display())}</span>
            </div>
            <div class="task-actions">
                <select
                    class="status-select"
                    ref={select_ref}
                    onchange={on_change}
                    disabled={props.deleting}
                >
                    {TaskStatus::ALL.iter().map(|status| html! {
                        <option value={status.as_str()} selected={*status == task.status}>
                            {status.label()}
                        </option>
                    }).collect::<Html>()}
                </select>
                <button class="edit-btn" title="Edit task" onclick={on_edit} disabled={props.deleting}>
                    {"✎"}
                </button>
                <button class="delete-btn" title="Delete task" onclick={on_delete} disabled={props.deleting}>
                    {"✕"}
                </button>
            </div>
        </li>
    }
}
