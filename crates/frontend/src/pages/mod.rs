mod auth;
mod tasks;

pub use auth::AuthPage;
pub use tasks::TasksPage;
