pub mod core;
pub mod messages;
pub mod state;
pub mod timer;

// Re-export key components
pub use self::core::Sequencer;
pub use messages::{AnimationEvent, Transition};
pub use state::{AnimationState, Phase};
pub use timer::IntervalTimer;
