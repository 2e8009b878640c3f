use super::timer::IntervalTimer;

/// Where the replay currently is.
///
/// Each phase owns the only timer that may fire in it, so the advance timer
/// and the pause timer can never be armed at the same time.
#[derive(Debug, Clone)]
pub enum Phase {
    /// Points are being revealed one advance tick at a time.
    Running { advance: IntervalTimer },
    /// The full series is on screen; waiting for the pause to elapse.
    EndedWaiting { pause: IntervalTimer },
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Running { .. } => "running",
            Phase::EndedWaiting { .. } => "ended-waiting",
        }
    }

    /// The timer armed in this phase.
    pub fn timer(&self) -> &IntervalTimer {
        match self {
            Phase::Running { advance } => advance,
            Phase::EndedWaiting { pause } => pause,
        }
    }
}

/// Read-only snapshot of the replay, handed to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    /// Number of leading points visible (exclusive end of the prefix)
    pub frame_index: usize,
    /// Advance timer armed
    pub running: bool,
    /// Pause timer armed
    pub paused: bool,
}

impl AnimationState {
    pub fn new(frame_index: usize, phase: &Phase) -> Self {
        let running = phase.is_running();
        Self {
            frame_index,
            running,
            paused: !running,
        }
    }
}
