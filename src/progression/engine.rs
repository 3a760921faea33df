//! XP and level arithmetic for a single user session.
//!
//! Level is never stored: it is derived from the XP total on every read, so
//! the two can not drift apart.
use bevy::prelude::Resource;
use serde::Serialize;

use super::errors::ProgressionError;

/// XP required to advance one level.
pub const XP_PER_LEVEL: u64 = 100;

/// Level for a given XP total.
pub fn level_for_xp(total_xp: u64) -> u64 {
    total_xp / XP_PER_LEVEL + 1
}

/// Outcome of a successful [`ProgressionState::award_xp`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelChangeResult {
    pub total_xp: u64,
    pub level: u64,
    pub previous_level: u64,
    pub leveled_up: bool,
    pub new_level: Option<u64>,
}

impl LevelChangeResult {
    /// Number of levels gained by the award (zero when no level-up happened).
    pub fn levels_gained(&self) -> u64 {
        self.level - self.previous_level
    }
}

/// XP position inside the current level band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub current_level_xp: u64,
    pub xp_to_next: u64,
}

impl LevelProgress {
    /// Completion of the current level as a percentage in `[0, 100)`.
    pub fn percent(&self) -> f32 {
        self.current_level_xp as f32 / XP_PER_LEVEL as f32 * 100.0
    }
}

/// Per-session XP total plus the one-shot level-up flag shown by the UI.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressionState {
    total_xp: u64,
    pending_level_up: Option<u64>,
}

impl ProgressionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_xp(&self) -> u64 {
        self.total_xp
    }

    pub fn level(&self) -> u64 {
        level_for_xp(self.total_xp)
    }

    /// Level waiting to be celebrated, if any.
    pub fn pending_level_up(&self) -> Option<u64> {
        self.pending_level_up
    }

    /// Adds `amount` XP and reports whether the derived level increased.
    ///
    /// Non-positive amounts are rejected without touching the state. Awards
    /// crossing several level boundaries at once report the final level.
    pub fn award_xp(&mut self, amount: i64) -> Result<LevelChangeResult, ProgressionError> {
        if amount <= 0 {
            return Err(ProgressionError::invalid_amount(amount));
        }

        let previous_level = self.level();
        self.total_xp = self.total_xp.saturating_add(amount.unsigned_abs());
        let level = self.level();

        let leveled_up = level > previous_level;
        if leveled_up {
            self.pending_level_up = Some(level);
        }

        Ok(LevelChangeResult {
            total_xp: self.total_xp,
            level,
            previous_level,
            leveled_up,
            new_level: leveled_up.then_some(level),
        })
    }

    /// Clears the pending level-up. No-op when nothing is pending.
    pub fn acknowledge_level_up(&mut self) {
        self.pending_level_up = None;
    }

    pub fn progress_within_level(&self) -> LevelProgress {
        let level_floor = (self.level() - 1) * XP_PER_LEVEL;
        let current_level_xp = self.total_xp.saturating_sub(level_floor).min(XP_PER_LEVEL);
        LevelProgress {
            current_level_xp,
            xp_to_next: XP_PER_LEVEL - current_level_xp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_starts_at_level_one() {
        let state = ProgressionState::new();
        assert_eq!(state.total_xp(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.pending_level_up(), None);
        assert_eq!(
            state.progress_within_level(),
            LevelProgress {
                current_level_xp: 0,
                xp_to_next: 100
            }
        );
    }

    #[test]
    fn chunking_does_not_change_totals() {
        let chunkings: [&[i64]; 4] = [
            &[370],
            &[100, 100, 100, 70],
            &[1; 370],
            &[25, 40, 35, 50, 20, 45, 155],
        ];
        for chunks in chunkings {
            let mut state = ProgressionState::new();
            for amount in chunks {
                state.award_xp(*amount).expect("positive award");
            }
            assert_eq!(state.total_xp(), 370);
            assert_eq!(state.level(), 4);
        }
    }

    #[test]
    fn single_award_can_cross_several_levels() {
        let mut state = ProgressionState::new();
        let result = state.award_xp(250).expect("positive award");

        assert_eq!(result.total_xp, 250);
        assert_eq!(result.level, 3);
        assert_eq!(result.previous_level, 1);
        assert!(result.leveled_up);
        assert_eq!(result.new_level, Some(3));
        assert_eq!(result.levels_gained(), 2);
        assert_eq!(state.pending_level_up(), Some(3));
    }

    #[test]
    fn award_below_boundary_does_not_level() {
        let mut state = ProgressionState::new();
        let result = state.award_xp(99).expect("positive award");
        assert!(!result.leveled_up);
        assert_eq!(result.new_level, None);
        assert_eq!(state.pending_level_up(), None);

        let result = state.award_xp(1).expect("positive award");
        assert!(result.leveled_up);
        assert_eq!(result.new_level, Some(2));
    }

    #[test]
    fn non_positive_awards_are_rejected_without_mutation() {
        let mut state = ProgressionState::new();
        state.award_xp(120).expect("positive award");
        state.acknowledge_level_up();
        let before = state.clone();

        assert_eq!(
            state.award_xp(0),
            Err(ProgressionError::InvalidAmount { amount: 0 })
        );
        assert_eq!(
            state.award_xp(-5),
            Err(ProgressionError::InvalidAmount { amount: -5 })
        );
        assert_eq!(state, before);
        assert_eq!(state.level(), 2);
    }

    #[test]
    fn progress_within_level_reports_band_position() {
        let mut state = ProgressionState::new();
        state.award_xp(250).expect("positive award");
        let progress = state.progress_within_level();
        assert_eq!(progress.current_level_xp, 50);
        assert_eq!(progress.xp_to_next, 50);
        assert!((progress.percent() - 50.0).abs() < f32::EPSILON);

        state.award_xp(50).expect("positive award");
        let progress = state.progress_within_level();
        assert_eq!(progress.current_level_xp, 0);
        assert_eq!(progress.xp_to_next, 100);
    }

    #[test]
    fn acknowledge_clears_pending_and_is_idempotent() {
        let mut state = ProgressionState::new();
        state.award_xp(100).expect("positive award");
        assert_eq!(state.pending_level_up(), Some(2));

        state.acknowledge_level_up();
        assert_eq!(state.pending_level_up(), None);
        let after_first = state.clone();

        state.acknowledge_level_up();
        assert_eq!(state, after_first);
    }

    #[test]
    fn newer_level_up_replaces_unacknowledged_one() {
        let mut state = ProgressionState::new();
        state.award_xp(100).expect("positive award");
        state.award_xp(30).expect("positive award");
        assert_eq!(state.pending_level_up(), Some(2));

        state.award_xp(100).expect("positive award");
        assert_eq!(state.pending_level_up(), Some(3));
    }

    #[test]
    fn total_saturates_instead_of_wrapping() {
        let mut state = ProgressionState::new();
        state.award_xp(i64::MAX).expect("positive award");
        state.award_xp(i64::MAX).expect("positive award");
        state.award_xp(i64::MAX).expect("positive award");
        assert_eq!(state.total_xp(), u64::MAX);
        assert_eq!(state.level(), u64::MAX / XP_PER_LEVEL + 1);
        let progress = state.progress_within_level();
        assert!(progress.current_level_xp < XP_PER_LEVEL);
        assert!(progress.xp_to_next >= 1);
    }
}
