//! Task view

use crate::app::Route;
use taskdeck_frontend_common::services::tasks;
use taskdeck_frontend_common::{
    CreateTaskForm, EditModal, SignOutButton, TaskList, TaskListState, use_session,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
    let session = use_session();
    let state = use_reducer(TaskListState::default);

    {
        let services = session.services();
        let authenticated = session.is_authenticated();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            if authenticated {
                spawn_local(async move {
                    tasks::load_tasks(&services, |action| dispatcher.dispatch(action)).await;
                });
            }
        });
    }

    // No session, or the session just ended
    if !session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Auth} /> };
    }

    html! {
        <div class="container">
            <header class="header">
                <h1>{"My Tasks"}</h1>
                <SignOutButton />
            </header>
            <CreateTaskForm state={state.clone()} />
            <TaskList state={state.clone()} />
            <EditModal state={state} />
        </div>
    }
}
