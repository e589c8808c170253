//! Sign-out control

use crate::auth::use_session;
use crate::hooks::{BusyGuard, use_busy};
use crate::services::auth;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(SignOutButton)]
pub fn sign_out_button() -> Html {
    let session = use_session();
    let busy = use_busy();

    let onclick = {
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            if *busy {
                return;
            }
            let guard = BusyGuard::for_state(&busy);
            let session = session.clone();
            spawn_local(async move {
                let _guard = guard;
                auth::sign_out(&session.services()).await;
                session.signed_out();
            });
        })
    };

    html! {
        <button id="logout-btn" class="logout-btn" {onclick} disabled={*busy}>
            {"Logout"}
        </button>
    }
}
