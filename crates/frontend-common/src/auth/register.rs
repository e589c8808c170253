//! Registration form

use crate::auth::use_session;
use crate::components::{ErrorBanner, bind_input};
use crate::hooks::{BusyGuard, use_busy};
use crate::services::auth;
use taskdeck_http::RegisterForm;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(RegisterPanel)]
pub fn register_panel() -> Html {
    let session = use_session();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password1 = use_state(String::new);
    let password2 = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_busy();

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password1 = password1.clone();
        let password2 = password2.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            error.set(None);

            let form = RegisterForm {
                name: (*name).clone(),
                email: (*email).clone(),
                password1: (*password1).clone(),
                password2: (*password2).clone(),
            };
            let guard = BusyGuard::for_state(&busy);
            let session = session.clone();
            let error = error.clone();
            spawn_local(async move {
                let _guard = guard;
                match auth::register(&session.services(), &form).await {
                    Ok(()) => session.signed_in(),
                    Err(message) => error.set(Some(message)),
                }
            });
        })
    };

    html! {
        <form id="register-form" class="auth-form" {onsubmit}>
            <input
                id="register-name"
                type="text"
                placeholder="Name"
                value={(*name).clone()}
                oninput={bind_input(&name)}
            />
            <input
                id="register-email"
                type="email"
                placeholder="Email"
                value={(*email).clone()}
                oninput={bind_input(&email)}
            />
            <input
                id="register-password1"
                type="password"
                placeholder="Password"
                value={(*password1).clone()}
                oninput={bind_input(&password1)}
            />
            <input
                id="register-password2"
                type="password"
                placeholder="Confirm password"
                value={(*password2).clone()}
                oninput={bind_input(&password2)}
            />
            <button id="register-btn" type="submit" disabled={*busy}>
                {if *busy { "Creating account..." } else { "Register" }}
            </button>
            <ErrorBanner id="auth-error" message={(*error).clone().map(AttrValue::from)} />
        </form>
    }
}
