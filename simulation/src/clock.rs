//! Fixed-period timers that turn elapsed time into ordered firings.

use std::time::Duration;

/// Timer firing produced while advancing the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Firing {
    /// The update pipeline should run once.
    Tick,
    /// The spawn controller should attempt one spawn.
    Spawn,
}

/// Scheduler owning the tick timer and the spawn timer.
///
/// Firings are reported in due-time order. When both timers are due at the
/// same instant the tick comes first.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    tick: FixedPeriod,
    spawn: FixedPeriod,
}

impl Clock {
    /// Creates a clock whose timers first fire one full period from now.
    ///
    /// A zero period disables the corresponding timer.
    #[must_use]
    pub const fn new(tick_period: Duration, spawn_period: Duration) -> Self {
        Self {
            tick: FixedPeriod::new(tick_period),
            spawn: FixedPeriod::new(spawn_period),
        }
    }

    /// Restarts both timers as if the clock had just been created.
    pub fn reset(&mut self) {
        self.tick.restart();
        self.spawn.restart();
    }

    /// Advances both timers by `elapsed`, appending every firing in order.
    pub fn advance(&mut self, elapsed: Duration, out: &mut Vec<Firing>) {
        let mut remaining = elapsed;

        loop {
            let next_due = match (self.tick.until_due(), self.spawn.until_due()) {
                (Some(tick), Some(spawn)) => tick.min(spawn),
                (Some(due), None) | (None, Some(due)) => due,
                (None, None) => return,
            };

            if next_due > remaining {
                let _ = self.tick.elapse(remaining);
                let _ = self.spawn.elapse(remaining);
                return;
            }

            remaining -= next_due;
            if self.tick.elapse(next_due) {
                out.push(Firing::Tick);
            }
            if self.spawn.elapse(next_due) {
                out.push(Firing::Spawn);
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct FixedPeriod {
    period: Duration,
    until_next: Duration,
}

impl FixedPeriod {
    const fn new(period: Duration) -> Self {
        Self {
            period,
            until_next: period,
        }
    }

    fn restart(&mut self) {
        self.until_next = self.period;
    }

    fn until_due(&self) -> Option<Duration> {
        (!self.period.is_zero()).then_some(self.until_next)
    }

    /// Consumes `elapsed`, returning whether the timer fired.
    fn elapse(&mut self, elapsed: Duration) -> bool {
        if self.period.is_zero() {
            return false;
        }

        self.until_next = self.until_next.saturating_sub(elapsed);
        if self.until_next.is_zero() {
            self.until_next = self.period;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn firings(clock: &mut Clock, elapsed: Duration) -> Vec<Firing> {
        let mut out = Vec::new();
        clock.advance(elapsed, &mut out);
        out
    }

    #[test]
    fn partial_periods_accumulate_across_calls() {
        let mut clock = Clock::new(Duration::from_millis(50), Duration::ZERO);

        assert!(firings(&mut clock, Duration::from_millis(30)).is_empty());
        assert_eq!(
            firings(&mut clock, Duration::from_millis(30)),
            vec![Firing::Tick]
        );
        assert!(firings(&mut clock, Duration::from_millis(30)).is_empty());
        assert_eq!(
            firings(&mut clock, Duration::from_millis(10)),
            vec![Firing::Tick]
        );
    }

    #[test]
    fn large_steps_replay_every_missed_firing() {
        let mut clock = Clock::new(Duration::from_millis(50), Duration::ZERO);

        assert_eq!(firings(&mut clock, Duration::from_millis(500)).len(), 10);
    }

    #[test]
    fn tick_precedes_spawn_when_both_are_due() {
        let mut clock = Clock::new(Duration::from_millis(50), Duration::from_millis(100));

        assert_eq!(
            firings(&mut clock, Duration::from_millis(100)),
            vec![Firing::Tick, Firing::Tick, Firing::Spawn]
        );
    }

    #[test]
    fn firings_are_ordered_by_due_time() {
        let mut clock = Clock::new(Duration::from_millis(40), Duration::from_millis(30));

        assert_eq!(
            firings(&mut clock, Duration::from_millis(90)),
            vec![
                Firing::Spawn,
                Firing::Tick,
                Firing::Spawn,
                Firing::Tick,
                Firing::Spawn
            ]
        );
    }

    #[test]
    fn zero_periods_never_fire() {
        let mut clock = Clock::new(Duration::ZERO, Duration::ZERO);

        assert!(firings(&mut clock, Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn reset_restarts_partial_progress() {
        let mut clock = Clock::new(Duration::from_millis(50), Duration::from_millis(2_000));
        let _ = firings(&mut clock, Duration::from_millis(1_990));

        clock.reset();

        let after = firings(&mut clock, Duration::from_millis(20));
        assert!(after.is_empty(), "reset must discard partial progress");
    }
}
