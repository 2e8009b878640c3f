use std::time::Duration;

use crate::utils::app_time::{self, AppInstant};

/// A periodic timer with an optional tick budget.
///
/// It does not run by itself: the owner asks [`IntervalTimer::fire_if_due`]
/// whenever it gets control. Ticks that were missed while the owner was not
/// polling are delivered one by one on the next polls, in deadline order.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_due: AppInstant,
    fired: u32,
    max_ticks: Option<u32>,
}

impl IntervalTimer {
    /// Arms a timer whose first tick is due one `period` after `now`.
    pub fn start(period: Duration, now: AppInstant, max_ticks: Option<u32>) -> Self {
        Self {
            period,
            next_due: now + period,
            fired: 0,
            max_ticks,
        }
    }

    /// A timer that fires exactly once, `delay` after `now`.
    pub fn one_shot(delay: Duration, now: AppInstant) -> Self {
        Self::start(delay, now, Some(1))
    }

    pub fn fired(&self) -> u32 {
        self.fired
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_ticks.is_some_and(|max| self.fired >= max)
    }

    /// Consumes one tick if it is due at `now`. An exhausted timer never fires.
    pub fn fire_if_due(&mut self, now: AppInstant) -> bool {
        if self.is_exhausted() || now < self.next_due {
            return false;
        }
        self.fired += 1;
        self.next_due += self.period;
        true
    }

    /// Time until the next tick, `None` once the budget is spent.
    pub fn time_until_due(&self, now: AppInstant) -> Option<Duration> {
        if self.is_exhausted() {
            None
        } else {
            Some(app_time::until(self.next_due, now))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_once_per_elapsed_period() {
        let t0 = app_time::now();
        let mut timer = IntervalTimer::start(MS * 100, t0, None);

        assert!(!timer.fire_if_due(t0 + MS * 99));
        assert!(timer.fire_if_due(t0 + MS * 100));
        assert!(!timer.fire_if_due(t0 + MS * 150));
        assert!(timer.fire_if_due(t0 + MS * 200));
        assert_eq!(timer.fired(), 2);
    }

    #[test]
    fn overdue_ticks_are_delivered_one_at_a_time() {
        let t0 = app_time::now();
        let mut timer = IntervalTimer::start(MS * 10, t0, None);
        let late = t0 + MS * 35;

        let mut count = 0;
        while timer.fire_if_due(late) {
            count += 1;
        }
        assert_eq!(count, 3);
        assert_eq!(timer.time_until_due(late), Some(MS * 5));
    }

    #[test]
    fn one_shot_fires_exactly_once() {
        let t0 = app_time::now();
        let mut timer = IntervalTimer::one_shot(MS * 50, t0);

        assert_eq!(timer.time_until_due(t0), Some(MS * 50));
        assert!(timer.fire_if_due(t0 + MS * 500));
        assert!(timer.is_exhausted());
        assert!(!timer.fire_if_due(t0 + MS * 5_000));
        assert_eq!(timer.time_until_due(t0), None);
    }
}
