//! Entry page panel with login and register tabs

use super::{LoginPanel, RegisterPanel};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Login,
    Register,
}

#[function_component(AuthPanel)]
pub fn auth_panel() -> Html {
    let tab = use_state(|| Tab::Login);

    let select = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    html! {
        <div class="auth-panel">
            <div class="tabs">
                <button
                    type="button"
                    class={classes!("tab", (*tab == Tab::Login).then_some("active"))}
                    onclick={select(Tab::Login)}
                >
                    {"Login"}
                </button>
                <button
                    type="button"
                    class={classes!("tab", (*tab == Tab::Register).then_some("active"))}
                    onclick={select(Tab::Register)}
                >
                    {"Register"}
                </button>
            </div>
            // Switching tabs remounts the form, dropping its input and error
            if *tab == Tab::Login {
                <LoginPanel />
            } else {
                <RegisterPanel />
            }
        </div>
    }
}
