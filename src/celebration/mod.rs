// src/celebration/mod.rs
//
// Stand-in for the front-end's level-up overlay: shows a banner for a fixed
// time on the session clock, then acknowledges the pending level-up.

pub mod components;
pub mod config;
pub mod plugin;
pub mod systems;

pub use components::{LevelUpBanner, XpToasts};
pub use plugin::CelebrationPlugin;
