// src/celebration/components.rs
//
// Overlay state for the level-up banner and XP toasts.

use std::time::Duration;

use bevy::prelude::Resource;

/// What the level-up banner is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerContent {
    pub level: u64,
    pub tier_name: String,
    pub milestones: Vec<String>,
}

/// One-shot level-up banner.
///
/// Showing a new level while visible replaces the content and restarts the
/// timer. The banner never touches progression state itself; the caller
/// acknowledges the level-up when `tick` or `skip` reports a dismissal.
#[derive(Resource, Debug, Default)]
pub struct LevelUpBanner {
    content: Option<BannerContent>,
    remaining: Duration,
}

impl LevelUpBanner {
    pub fn show(&mut self, content: BannerContent, duration: Duration) {
        self.content = Some(content);
        self.remaining = duration;
    }

    pub fn content(&self) -> Option<&BannerContent> {
        self.content.as_ref()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    /// Advances the display timer. Returns the level that was dismissed.
    pub fn tick(&mut self, delta: Duration) -> Option<u64> {
        if self.content.is_none() {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() {
            self.skip()
        } else {
            None
        }
    }

    /// Hides the banner immediately. Returns the level that was dismissed.
    pub fn skip(&mut self) -> Option<u64> {
        self.remaining = Duration::ZERO;
        self.content.take().map(|content| content.level)
    }
}

/// Short-lived "+N XP" toasts.
#[derive(Resource, Debug, Default)]
pub struct XpToasts {
    active: Vec<(u64, Duration)>,
}

impl XpToasts {
    pub fn push(&mut self, amount: u64, duration: Duration) {
        self.active.push((amount, duration));
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Ages every toast and drops expired ones, returning how many expired.
    pub fn tick(&mut self, delta: Duration) -> usize {
        let before = self.active.len();
        for (_, remaining) in &mut self.active {
            *remaining = remaining.saturating_sub(delta);
        }
        self.active.retain(|(_, remaining)| !remaining.is_zero());
        before - self.active.len()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(level: u64) -> BannerContent {
        BannerContent {
            level,
            tier_name: "Student Builder".to_string(),
            milestones: Vec::new(),
        }
    }

    #[test]
    fn banner_dismisses_after_duration() {
        let mut banner = LevelUpBanner::default();
        banner.show(content(2), Duration::from_secs(3));

        assert_eq!(banner.tick(Duration::from_secs(2)), None);
        assert!(banner.is_visible());
        assert_eq!(banner.tick(Duration::from_secs(1)), Some(2));
        assert!(!banner.is_visible());
        assert_eq!(banner.tick(Duration::from_secs(1)), None);
    }

    #[test]
    fn newer_level_restarts_banner() {
        let mut banner = LevelUpBanner::default();
        banner.show(content(2), Duration::from_secs(3));
        banner.tick(Duration::from_secs(2));
        banner.show(content(3), Duration::from_secs(3));

        assert_eq!(banner.tick(Duration::from_secs(2)), None);
        assert_eq!(banner.content().map(|c| c.level), Some(3));
        assert_eq!(banner.skip(), Some(3));
        assert_eq!(banner.skip(), None);
    }

    #[test]
    fn toasts_expire_independently() {
        let mut toasts = XpToasts::default();
        toasts.push(25, Duration::from_millis(500));
        toasts.push(40, Duration::from_secs(1));

        assert_eq!(toasts.tick(Duration::from_millis(600)), 1);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.tick(Duration::from_millis(600)), 1);
        assert!(toasts.is_empty());
    }
}
