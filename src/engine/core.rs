use std::sync::Arc;
use std::time::Duration;

use crate::config::AnimationConfig;
use crate::domain::Series;
use crate::utils::app_time::AppInstant;

use super::messages::{AnimationEvent, Transition};
use super::state::{AnimationState, Phase};
use super::timer::IntervalTimer;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Drives the replay: owns the frame index and whichever timer the current
/// phase allows.
///
/// RUNNING + AdvanceTick while points remain: reveal one more point.
/// RUNNING + AdvanceTick at the end: stop advancing, arm the pause.
/// ENDED_WAITING + PauseTick: back to frame 0, advancing again.
/// Anything else is ignored.
pub struct Sequencer {
    /// Shared immutable data
    series: Arc<Series>,
    config: AnimationConfig,
    frame_index: usize,
    phase: Phase,
    cycles_completed: u64,
}

impl Sequencer {
    /// Starts in RUNNING at frame 0 with the first advance due one interval after `now`.
    pub fn new(series: Arc<Series>, config: AnimationConfig, now: AppInstant) -> Self {
        let advance = Self::advance_timer(series.len(), &config, now);
        Self {
            series,
            config,
            frame_index: 0,
            phase: Phase::Running { advance },
            cycles_completed: 0,
        }
    }

    /// One tick per point, plus the tick that notices the end.
    fn advance_timer(len: usize, config: &AnimationConfig, now: AppInstant) -> IntervalTimer {
        let budget = u32::try_from(len).ok().and_then(|n| n.checked_add(1));
        IntervalTimer::start(config.advance_interval, now, budget)
    }

    pub fn series(&self) -> &Arc<Series> {
        &self.series
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn state(&self) -> AnimationState {
        AnimationState::new(self.frame_index, &self.phase)
    }

    /// Number of full replays that have been reset so far.
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// Delivers every tick due at `now`, in order, and returns what each did.
    ///
    /// Each transition is applied before the next tick is looked at, so a
    /// phase change drops the old timer before it can fire again.
    pub fn poll(&mut self, now: AppInstant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        while let Some(event) = self.next_due_event(now) {
            transitions.push(self.handle(event, now));
        }
        transitions
    }

    fn next_due_event(&mut self, now: AppInstant) -> Option<AnimationEvent> {
        match &mut self.phase {
            Phase::Running { advance } => advance
                .fire_if_due(now)
                .then_some(AnimationEvent::AdvanceTick),
            Phase::EndedWaiting { pause } => {
                pause.fire_if_due(now).then_some(AnimationEvent::PauseTick)
            }
        }
    }

    /// The transition function. `now` is used only to arm the next timer.
    pub fn handle(&mut self, event: AnimationEvent, now: AppInstant) -> Transition {
        let len = self.series.len();

        let transition = match (self.phase.is_running(), event) {
            (true, AnimationEvent::AdvanceTick) if self.frame_index < len => {
                self.frame_index += 1;
                Transition::Advanced {
                    frame_index: self.frame_index,
                }
            }
            (true, AnimationEvent::AdvanceTick) => {
                self.phase = Phase::EndedWaiting {
                    pause: IntervalTimer::one_shot(self.config.pause_duration, now),
                };
                log::debug!(
                    "Replay reached the end ({} points), holding for {:?}",
                    len,
                    self.config.pause_duration
                );
                Transition::Ended
            }
            (false, AnimationEvent::PauseTick) => {
                self.frame_index = 0;
                self.phase = Phase::Running {
                    advance: Self::advance_timer(len, &self.config, now),
                };
                self.cycles_completed += 1;
                log::debug!("Replay restarting (cycle {})", self.cycles_completed);
                Transition::Reset
            }
            (_, event) => Transition::Ignored(event),
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_animation_transitions {
            log::debug!(
                "[sequencer] {:?} -> {:?} (frame {}/{}, {}, {} ticks fired)",
                event,
                transition,
                self.frame_index,
                len,
                self.phase.name(),
                self.phase.timer().fired()
            );
        }

        transition
    }

    /// How long until the armed timer fires next. Used to schedule repaints.
    pub fn time_until_next_tick(&self, now: AppInstant) -> Option<Duration> {
        match &self.phase {
            Phase::Running { advance } => advance.time_until_due(now),
            Phase::EndedWaiting { pause } => pause.time_until_due(now),
        }
    }
}
