//! Frontend configuration

use web_sys::window;

/// Client configuration
pub struct FrontendConfig;

impl FrontendConfig {
    /// API base baked in at build time, e.g. `TASKDECK_API_BASE=https://api.example.com`
    pub const API_BASE_OVERRIDE: Option<&'static str> = option_env!("TASKDECK_API_BASE");

    /// Confirmation shown before a task is deleted
    pub const DELETE_CONFIRMATION: &'static str = "Are you sure you want to delete this task?";

    /// Base URL for API calls
    pub fn api_base_url() -> String {
        resolve_base_url(Self::API_BASE_OVERRIDE, page_origin)
    }
}

fn page_origin() -> Option<String> {
    window().and_then(|window| window.location().origin().ok())
}

/// A configured base wins over the page origin; relative URLs otherwise
fn resolve_base_url(configured: Option<&str>, origin: impl FnOnce() -> Option<String>) -> String {
    match configured.map(str::trim).filter(|base| !base.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => origin().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_base_wins() {
        let base = resolve_base_url(Some("https://api.example.com/"), || {
            panic!("origin must not be consulted")
        });
        assert_eq!(base, "https://api.example.com");
    }

    #[test]
    fn falls_back_to_origin_then_relative() {
        assert_eq!(
            resolve_base_url(Some("  "), || Some("http://localhost:8080".into())),
            "http://localhost:8080"
        );
        assert_eq!(resolve_base_url(None, || None), "");
    }
}
