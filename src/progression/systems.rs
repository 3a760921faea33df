use bevy::prelude::*;

use crate::tasks::events::TaskCompletedEvent;

use super::{
    config::ProgressionConfig,
    engine::ProgressionState,
    events::{LevelUpEvent, XpAwardedEvent},
};

/// Converts task completions into XP, one award per message in arrival order.
pub fn award_xp_for_completed_tasks(
    mut completions: MessageReader<TaskCompletedEvent>,
    config: Res<ProgressionConfig>,
    mut state: ResMut<ProgressionState>,
    mut awarded: MessageWriter<XpAwardedEvent>,
    mut level_ups: MessageWriter<LevelUpEvent>,
) {
    for completion in completions.read() {
        let result = match state.award_xp(i64::from(completion.xp_reward)) {
            Ok(result) => result,
            Err(err) => {
                warn!("Rejected XP award for {}: {}", completion.task, err);
                continue;
            }
        };

        awarded.write(XpAwardedEvent {
            amount: u64::from(completion.xp_reward),
            total_xp: result.total_xp,
            level: result.level,
        });

        let Some(new_level) = result.new_level else {
            continue;
        };

        let tier = config.tiers.tier_for(new_level);
        let tier_changed = config.tiers.tier_for(result.previous_level).index != tier.index;
        let milestones = config.milestones.crossed(result.previous_level, new_level);
        info!(
            "Level up: {} -> {} (+{}, {}, {} XP total)",
            result.previous_level,
            new_level,
            result.levels_gained(),
            tier.name,
            result.total_xp
        );

        level_ups.write(LevelUpEvent {
            previous_level: result.previous_level,
            new_level,
            tier,
            tier_changed,
            milestones,
        });
    }
}
