//! Authentication module

pub mod component;
pub mod context;
pub mod login;
pub mod register;
pub mod sign_out;

// Re-export commonly used items
pub use component::AuthPanel;
pub use context::{
    SessionAction, SessionContext, SessionProvider, SessionState, use_services, use_session,
};
pub use login::LoginPanel;
pub use register::RegisterPanel;
pub use sign_out::SignOutButton;
