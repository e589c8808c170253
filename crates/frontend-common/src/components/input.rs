//! Input bindings for controlled form fields

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Write an `<input>`'s value into `state` on every keystroke
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

/// Write a `<textarea>`'s value into `state` on every keystroke
pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        state.set(input.value());
    })
}
