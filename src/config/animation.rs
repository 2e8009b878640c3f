//! Replay timing.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Time between two advance ticks (one more point becomes visible)
    pub advance_interval: Duration,
    /// How long the complete chart is held before the replay restarts
    pub pause_duration: Duration,
}

pub const ANIMATION: AnimationConfig = AnimationConfig {
    advance_interval: Duration::from_millis(150),
    pause_duration: Duration::from_millis(15_000),
};
