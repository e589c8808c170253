//! API configuration

/// Fixed endpoints and storage keys of the Taskdeck API
pub struct ApiConfig;

impl ApiConfig {
    /// Login endpoint
    pub const LOGIN_PATH: &'static str = "/api/auth/login";

    /// Registration endpoint
    pub const REGISTER_PATH: &'static str = "/api/auth/register";

    /// Access token refresh endpoint (authenticated with the refresh token)
    pub const REFRESH_PATH: &'static str = "/api/auth/refresh";

    /// Logout endpoint (authenticated with the refresh token)
    pub const LOGOUT_PATH: &'static str = "/api/auth/logout";

    /// Task collection endpoint
    pub const TASKS_PATH: &'static str = "/api/tasks";

    /// Storage key holding the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "access";

    /// Storage key holding the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refresh";

    /// Default user agent for native builds
    pub const USER_AGENT: &'static str = "taskdeck-client/0.1.0";

    /// Path of a single task
    pub fn task_path(id: i64) -> String {
        format!("{}/{id}", Self::TASKS_PATH)
    }
}
