//! CorePlugin owns the session clock that paces banners and scripted waits.
use bevy::prelude::*;
use std::time::Duration;

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.001;

/// Converts configured seconds into a duration.
///
/// Negative or NaN values mean "no time"; values too large for a
/// `Duration` (including infinity) saturate to `Duration::MAX`.
pub fn duration_from_seconds(seconds: f32) -> Duration {
    if !(seconds > 0.0) {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f32(seconds).unwrap_or(Duration::MAX)
}

/// Session time, fast-forwarded by the scripted time scale.
///
/// Only scaled values are kept: nothing in a session cares about the real
/// frame delta once it has been multiplied.
#[derive(Resource, Debug)]
pub struct SessionClock {
    time_scale: f32,
    last_scaled_delta: Duration,
    elapsed: Duration,
}

impl SessionClock {
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: clamp_time_scale(time_scale),
            last_scaled_delta: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = clamp_time_scale(scale);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Session time that passed during the last frame.
    pub fn last_scaled_delta(&self) -> Duration {
        self.last_scaled_delta
    }

    /// Session time since startup.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn advance(&mut self, real_delta: Duration) {
        self.last_scaled_delta = real_delta.mul_f32(self.time_scale);
        self.elapsed = self.elapsed.saturating_add(self.last_scaled_delta);
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

fn clamp_time_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.max(MIN_TIME_SCALE)
    } else {
        DEFAULT_TIME_SCALE
    }
}

/// Inserts the session clock and advances it before `Update` runs.
#[derive(Debug, Clone, Copy)]
pub struct CorePlugin {
    time_scale: f32,
}

impl CorePlugin {
    pub const fn with_time_scale(time_scale: f32) -> Self {
        Self { time_scale }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self::with_time_scale(DEFAULT_TIME_SCALE)
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SessionClock::new(self.time_scale))
            .add_systems(PreUpdate, advance_session_clock);

        #[cfg(feature = "core_debug")]
        app.add_systems(Update, log_session_seconds);
    }
}

/// Advances the session clock by the frame's real delta.
pub fn advance_session_clock(mut clock: ResMut<SessionClock>, time: Res<Time>) {
    clock.advance(time.delta());
}

#[cfg(feature = "core_debug")]
fn log_session_seconds(clock: Res<SessionClock>, mut last_logged: Local<u64>) {
    let second = clock.elapsed().as_secs();
    if second > *last_logged {
        *last_logged = second;
        info!(
            target: "core_debug",
            "Session time {}s | scale {:.3} | scaled dt {:.4}s",
            second,
            clock.time_scale(),
            clock.last_scaled_delta().as_secs_f32(),
        );
    }
}
