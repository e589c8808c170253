//! Browser building blocks of the Taskdeck web client
//!
//! Session handling on top of `localStorage`, the task list state and the
//! async flows that drive it, and the yew components of both pages.

#[macro_use]
extern crate tracing;

pub mod auth;
pub mod components;
pub mod config;
pub mod hooks;
pub mod services;
pub mod state;
pub mod storage;

pub use auth::{AuthPanel, SessionContext, SessionProvider, SignOutButton, use_session};
pub use components::{CreateTaskForm, EditModal, ErrorBanner, Spinner, TaskList};
pub use config::FrontendConfig;
pub use services::Services;
pub use state::{TaskListAction, TaskListHandle, TaskListState};
pub use storage::LocalTokenStore;
