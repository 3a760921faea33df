//! Core module hosting the session clock and shared config-path helpers.
pub mod config;
pub mod plugin;

pub use plugin::{CorePlugin, SessionClock};
