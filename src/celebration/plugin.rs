// src/celebration/plugin.rs
//
// Plugin registration for level-up celebrations.

use bevy::prelude::*;

use crate::progression::systems::award_xp_for_completed_tasks;

use super::components::{LevelUpBanner, XpToasts};
use super::config::CelebrationSettings;
use super::systems::{show_level_up_banner, show_xp_toasts, tick_celebrations};

/// Plugin presenting level-ups and XP gains.
///
/// # System Ordering
///
/// 1. `show_level_up_banner` / `show_xp_toasts` - read progression messages
/// 2. `tick_celebrations` - ages overlays, acknowledges expired level-ups
///
/// # Dependencies
///
/// - `ProgressionPlugin` provides `LevelUpEvent`, `XpAwardedEvent` and `ProgressionState`
/// - `CorePlugin` provides `SessionClock`
pub struct CelebrationPlugin;

impl Plugin for CelebrationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(CelebrationSettings::load_or_default())
            .init_resource::<LevelUpBanner>()
            .init_resource::<XpToasts>()
            .add_systems(
                Update,
                (show_level_up_banner, show_xp_toasts, tick_celebrations)
                    .chain()
                    .after(award_xp_for_completed_tasks),
            );

        info!("CelebrationPlugin registered");
    }
}
