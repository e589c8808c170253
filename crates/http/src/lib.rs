//! Taskdeck HTTP client
//!
//! Typed access to the Taskdeck REST API: public authentication endpoints,
//! and task endpoints reached through [`AuthGateway`], which attaches the
//! stored access token and transparently rotates it once on a 401.

#[macro_use]
extern crate tracing;

pub mod client;
pub mod config;
pub mod types;

pub use client::{
    AuthApi, AuthGateway, TaskApi, TaskdeckClient,
    error::ClientError,
    forms::{LoginForm, RegisterForm, TaskForm},
    gateway::ApiRequest,
    session::{MemoryTokenStore, Session, TokenStore},
};
pub use config::ApiConfig;
pub use types::{Task, TaskStatus};
