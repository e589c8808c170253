//! DOM rendering checks, run in a browser with `wasm-pack test`
#![cfg(target_arch = "wasm32")]

use chrono::{TimeZone, Utc};
use gloo_timers::future::TimeoutFuture;
use taskdeck_frontend_common::SessionProvider;
use taskdeck_frontend_common::auth::LoginPanel;
use taskdeck_frontend_common::components::{TaskItem, TaskItemProps};
use taskdeck_http::{Task, TaskStatus};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn props(task: Task) -> TaskItemProps {
    TaskItemProps {
        task,
        updating: false,
        deleting: false,
        on_status_change: Callback::noop(),
        on_edit: Callback::noop(),
        on_delete: Callback::noop(),
    }
}

fn task(title: &str, description: Option<&str>) -> Task {
    Task {
        id: 9,
        title: title.into(),
        description: description.map(Into::into),
        status: TaskStatus::InProgress,
        created_at: Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap(),
    }
}

#[wasm_bindgen_test]
async fn markup_in_title_is_rendered_as_text() {
    let root = mount();
    yew::Renderer::<TaskItem>::with_root_and_props(
        root.clone(),
        props(task("<script>alert(1)</script>", Some("<b>bold</b>"))),
    )
    .render();
    TimeoutFuture::new(0).await;

    assert!(root.query_selector("script").unwrap().is_none());
    assert!(root.query_selector("b").unwrap().is_none());

    let title = root.query_selector(".task-title").unwrap().unwrap();
    assert_eq!(title.text_content().as_deref(), Some("<script>alert(1)</script>"));
    assert!(root.inner_html().contains("&lt;script&gt;"));
}

#[wasm_bindgen_test]
async fn row_carries_status_class_and_date() {
    let root = mount();
    yew::Renderer::<TaskItem>::with_root_and_props(root.clone(), props(task("Plan", None)))
        .render();
    TimeoutFuture::new(0).await;

    let row = root.query_selector("li").unwrap().unwrap();
    assert_eq!(row.id(), "task-9");
    assert!(row.class_list().contains("status-in_progress"));
    assert!(root.query_selector(".task-description").unwrap().is_none());

    let date = root.query_selector(".task-date").unwrap().unwrap();
    assert_eq!(
        date.text_content().as_deref(),
        Some("Created: Jan 5, 2024, 02:30 PM")
    );
}

#[wasm_bindgen_test]
async fn status_select_follows_reverted_status() {
    let root = mount();
    let mut pending = task("Plan", None);
    pending.status = TaskStatus::Pending;
    let mut handle =
        yew::Renderer::<TaskItem>::with_root_and_props(root.clone(), props(pending.clone()))
            .render();
    TimeoutFuture::new(0).await;

    let select: HtmlSelectElement = root
        .query_selector(".status-select")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(select.value(), "pending");

    // User picks "done", the change is applied optimistically, then rejected
    select.set_value("done");
    let mut done = pending.clone();
    done.status = TaskStatus::Done;
    handle.update(props(done));
    TimeoutFuture::new(0).await;
    handle.update(props(pending));
    TimeoutFuture::new(0).await;

    assert_eq!(select.value(), "pending");
    let row = root.query_selector("li").unwrap().unwrap();
    assert!(row.class_list().contains("status-pending"));
}

/// Sign-in form wired to an API address that refuses connections
#[function_component(UnreachableSignIn)]
fn unreachable_sign_in() -> Html {
    html! {
        <SessionProvider base_url="http://127.0.0.1:1">
            <LoginPanel />
        </SessionProvider>
    }
}

fn type_into(root: &Element, selector: &str, value: &str) {
    let input: HtmlInputElement = root
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_value(value);
    let event = web_sys::Event::new("input").unwrap();
    input.dispatch_event(&event).unwrap();
}

fn login_button(root: &Element) -> HtmlButtonElement {
    root.query_selector("#login-btn").unwrap().unwrap().dyn_into().unwrap()
}

async fn wait_for_error(root: &Element) -> Option<String> {
    for _ in 0..100 {
        if let Some(error) = root.query_selector("#auth-error").unwrap() {
            return error.text_content();
        }
        TimeoutFuture::new(50).await;
    }
    None
}

#[wasm_bindgen_test]
async fn login_with_empty_fields_reports_and_stays_enabled() {
    let root = mount();
    yew::Renderer::<UnreachableSignIn>::with_root(root.clone()).render();
    TimeoutFuture::new(0).await;

    login_button(&root).click();

    assert_eq!(wait_for_error(&root).await.as_deref(), Some("Please fill in all fields"));
    TimeoutFuture::new(0).await;
    let button = login_button(&root);
    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Login"));
}

#[wasm_bindgen_test]
async fn rejected_login_re_enables_the_button() {
    let root = mount();
    yew::Renderer::<UnreachableSignIn>::with_root(root.clone()).render();
    TimeoutFuture::new(0).await;

    type_into(&root, "#login-email", "a@b.com");
    type_into(&root, "#login-password", "x");
    TimeoutFuture::new(0).await;
    login_button(&root).click();

    assert_eq!(wait_for_error(&root).await.as_deref(), Some("Unable to reach the server"));
    TimeoutFuture::new(0).await;
    let button = login_button(&root);
    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Login"));
}
