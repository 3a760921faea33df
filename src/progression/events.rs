//! Messages emitted when XP is applied to the session's progression.
use bevy::prelude::Message;

use super::{milestones::Milestone, tiers::TierDescriptor};

/// Fired after every accepted XP award.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct XpAwardedEvent {
    pub amount: u64,
    pub total_xp: u64,
    pub level: u64,
}

/// Fired when an award raises the derived level (possibly by several levels).
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct LevelUpEvent {
    pub previous_level: u64,
    pub new_level: u64,
    pub tier: TierDescriptor,
    /// Set when the new level sits in a different tier than the previous one.
    pub tier_changed: bool,
    pub milestones: Vec<Milestone>,
}
