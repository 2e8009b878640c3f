/// A timer firing, as delivered to the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationEvent {
    /// The advance timer elapsed: show one more point (or notice the end).
    AdvanceTick,
    /// The one-shot pause timer elapsed: restart the replay.
    PauseTick,
}

/// What a single event did to the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// One more point is visible; carries the new frame index.
    Advanced { frame_index: usize },
    /// The whole series is visible. Advancing stopped and the pause is armed.
    Ended,
    /// The pause elapsed. Frame index is back to 0 and advancing resumed.
    Reset,
    /// The event does not apply to the current phase and changed nothing.
    Ignored(AnimationEvent),
}
