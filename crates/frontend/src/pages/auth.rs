//! Entry page: login and registration

use crate::app::Route;
use taskdeck_frontend_common::{AuthPanel, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let session = use_session();

    // Already signed in, or just signed in
    if session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Tasks} /> };
    }

    html! {
        <div class="container auth-container">
            <h1>{"Taskdeck"}</h1>
            <AuthPanel />
        </div>
    }
}
