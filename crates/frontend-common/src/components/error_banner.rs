//! Inline error message

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorBannerProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Renders nothing without a message
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div id={props.id.clone()} class="error-message" role="alert">{message}</div>
        },
        None => html! {},
    }
}
