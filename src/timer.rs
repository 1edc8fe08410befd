use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// A fixed-interval task advanced by the elapsed time the host loop reports.
///
/// The task has no callback of its own: [`RepeatingTask::tick`] returns how many
/// intervals completed and the owner decides what to run for each one.
/// Cancelling is dropping the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTask {
    interval: Duration,
    elapsed: Duration,
}

impl RepeatingTask {
    /// Schedules a fresh task. A zero interval is bumped to one millisecond so
    /// a single tick can never fire without bound.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next firing.
    pub fn remaining(&self) -> Duration {
        self.interval - self.elapsed
    }

    /// Advances the task by `dt` and returns the number of completed intervals.
    /// Saturates at `u32::MAX` for absurdly long gaps.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let elapsed = self.elapsed.saturating_add(dt).as_nanos();
        let interval = self.interval.as_nanos();

        let rest = elapsed % interval;
        self.elapsed = Duration::new(
            (rest / NANOS_PER_SEC) as u64,
            (rest % NANOS_PER_SEC) as u32,
        );
        (elapsed / interval).min(u128::from(u32::MAX)) as u32
    }
}
