//! Custom hooks for the application

pub mod busy;

pub use busy::{BusyGuard, use_busy};
