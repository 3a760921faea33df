//! Progression module: XP totals, derived levels, tiers, and milestones.
pub mod config;
pub mod engine;
pub mod errors;
pub mod events;
pub mod milestones;
pub mod plugin;
pub mod systems;
pub mod tiers;

pub use config::ProgressionConfig;
pub use engine::{level_for_xp, LevelChangeResult, LevelProgress, ProgressionState, XP_PER_LEVEL};
pub use errors::ProgressionError;
pub use events::{LevelUpEvent, XpAwardedEvent};
pub use milestones::{Milestone, MilestoneTable};
pub use plugin::ProgressionPlugin;
pub use tiers::{level_tier, TierDescriptor, TierTable};
