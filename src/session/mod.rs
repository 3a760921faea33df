//! Session module: login/logout lifecycle and the scripted user driving it.
pub mod components;
pub mod config;
pub mod plugin;
pub mod report;
pub mod systems;

pub use components::{SessionAction, SessionScript, SessionState};
pub use plugin::SessionPlugin;
pub use report::SessionReport;
