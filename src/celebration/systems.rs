// src/celebration/systems.rs
//
// Systems showing level-up banners and acknowledging them once they expire.

use bevy::prelude::*;

use crate::{
    core::plugin::{duration_from_seconds, SessionClock},
    progression::{
        engine::ProgressionState,
        events::{LevelUpEvent, XpAwardedEvent},
    },
};

use super::{
    components::{BannerContent, LevelUpBanner, XpToasts},
    config::CelebrationSettings,
};

/// Shows the banner for each level-up, newest level winning.
pub fn show_level_up_banner(
    mut level_ups: MessageReader<LevelUpEvent>,
    settings: Res<CelebrationSettings>,
    mut banner: ResMut<LevelUpBanner>,
) {
    for event in level_ups.read() {
        let milestones: Vec<String> = event
            .milestones
            .iter()
            .map(|milestone| milestone.name.clone())
            .collect();

        info!("LEVEL UP! Level {} - {}", event.new_level, event.tier.name);
        if event.tier_changed {
            info!("Avatar evolved: {}", event.tier.description);
        }
        for name in &milestones {
            info!("Milestone unlocked: {}", name);
        }

        banner.show(
            BannerContent {
                level: event.new_level,
                tier_name: event.tier.name.clone(),
                milestones,
            },
            duration_from_seconds(settings.level_up_seconds),
        );
    }
}

/// Pops a "+N XP" toast for every accepted award.
pub fn show_xp_toasts(
    mut awarded: MessageReader<XpAwardedEvent>,
    settings: Res<CelebrationSettings>,
    mut toasts: ResMut<XpToasts>,
) {
    for event in awarded.read() {
        info!(
            "+{} XP ({} total, level {})",
            event.amount, event.total_xp, event.level
        );
        toasts.push(
            event.amount,
            duration_from_seconds(settings.xp_toast_seconds),
        );
    }
}

/// Ages overlays on the session clock and acknowledges expired level-ups.
pub fn tick_celebrations(
    clock: Res<SessionClock>,
    mut banner: ResMut<LevelUpBanner>,
    mut toasts: ResMut<XpToasts>,
    mut state: ResMut<ProgressionState>,
) {
    let delta = clock.last_scaled_delta();
    let expired = toasts.tick(delta);
    if expired > 0 {
        debug!("{} XP toast(s) faded, {} still up", expired, toasts.len());
    }

    if let Some(level) = banner.tick(delta) {
        state.acknowledge_level_up();
        debug!("Level {} banner finished; level-up acknowledged", level);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::ecs::message::Messages;

    use super::*;
    use crate::progression::tiers::level_tier;

    fn app(level_up_seconds: f32) -> App {
        let mut app = App::new();
        app.add_message::<LevelUpEvent>()
            .add_message::<XpAwardedEvent>()
            .insert_resource(CelebrationSettings {
                level_up_seconds,
                xp_toast_seconds: 1.0,
            })
            .insert_resource(SessionClock::default())
            .init_resource::<LevelUpBanner>()
            .init_resource::<XpToasts>()
            .init_resource::<ProgressionState>()
            .add_systems(
                Update,
                (show_level_up_banner, show_xp_toasts, tick_celebrations).chain(),
            );
        app
    }

    fn level_up(app: &mut App) {
        let result = app
            .world_mut()
            .resource_mut::<ProgressionState>()
            .award_xp(100)
            .expect("positive award");
        app.world_mut()
            .resource_mut::<Messages<XpAwardedEvent>>()
            .write(XpAwardedEvent {
                amount: 100,
                total_xp: result.total_xp,
                level: result.level,
            });
        app.world_mut()
            .resource_mut::<Messages<LevelUpEvent>>()
            .write(LevelUpEvent {
                previous_level: result.previous_level,
                new_level: result.level,
                tier: level_tier(result.level),
                tier_changed: false,
                milestones: Vec::new(),
            });
    }

    fn advance(app: &mut App, seconds: f32) {
        app.world_mut()
            .resource_mut::<SessionClock>()
            .advance(Duration::from_secs_f32(seconds));
        app.update();
    }

    #[test]
    fn banner_acknowledges_after_display_time() {
        let mut app = app(3.0);
        level_up(&mut app);
        advance(&mut app, 0.0);

        assert!(app.world().resource::<LevelUpBanner>().is_visible());
        assert_eq!(app.world().resource::<XpToasts>().len(), 1);
        assert_eq!(
            app.world().resource::<ProgressionState>().pending_level_up(),
            Some(2)
        );

        advance(&mut app, 2.0);
        assert_eq!(
            app.world().resource::<ProgressionState>().pending_level_up(),
            Some(2)
        );

        advance(&mut app, 1.5);
        assert!(!app.world().resource::<LevelUpBanner>().is_visible());
        assert!(app.world().resource::<XpToasts>().is_empty());
        assert_eq!(
            app.world().resource::<ProgressionState>().pending_level_up(),
            None
        );
    }
}
