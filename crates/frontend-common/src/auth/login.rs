//! Sign-in form

use crate::auth::use_session;
use crate::components::{ErrorBanner, bind_input};
use crate::hooks::{BusyGuard, use_busy};
use crate::services::auth;
use taskdeck_http::LoginForm;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(LoginPanel)]
pub fn login_panel() -> Html {
    let session = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_busy();

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            error.set(None);

            let form = LoginForm {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let guard = BusyGuard::for_state(&busy);
            let session = session.clone();
            let error = error.clone();
            spawn_local(async move {
                let _guard = guard;
                match auth::sign_in(&session.services(), &form).await {
                    Ok(()) => session.signed_in(),
                    Err(message) => error.set(Some(message)),
                }
            });
        })
    };

    html! {
        <form id="login-form" class="auth-form" {onsubmit}>
            <input
                id="login-email"
                type="email"
                placeholder="Email"
                value={(*email).clone()}
                oninput={bind_input(&email)}
            />
            <input
                id="login-password"
                type="password"
                placeholder="Password"
                value={(*password).clone()}
                oninput={bind_input(&password)}
            />
            <button id="login-btn" type="submit" disabled={*busy}>
                {if *busy { "Signing in..." } else { "Login" }}
            </button>
            <ErrorBanner id="auth-error" message={(*error).clone().map(AttrValue::from)} />
        </form>
    }
}
