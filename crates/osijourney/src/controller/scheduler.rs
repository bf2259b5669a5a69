use std::time::Duration;

/// Named, cancellable recurring tasks driven by an explicit clock.
///
/// The scheduler never reads the wall clock. Callers move time forward with
/// [`Scheduler::pop_due`] and [`Scheduler::settle`], which keeps every timer
/// deterministic under test.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    entries: Vec<Entry<T>>,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    task: T,
    interval: Duration,
    due: Duration,
}

const MIN_INTERVAL: Duration = Duration::from_millis(1);

impl<T: Copy + Eq> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            entries: Vec::new(),
        }
    }

    /// Current scheduler time (time since creation).
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Start (or restart) `task`, first firing one `interval` from now.
    pub fn start(&mut self, task: T, interval: Duration) {
        self.cancel(task);
        let interval = interval.max(MIN_INTERVAL);
        self.entries.push(Entry {
            task,
            interval,
            due: self.now + interval,
        });
    }

    /// Cancel `task`. Returns whether it was scheduled.
    pub fn cancel(&mut self, task: T) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.task != task);
        self.entries.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub fn is_scheduled(&self, task: T) -> bool {
        self.entries.iter().any(|e| e.task == task)
    }

    /// Pop the earliest task due at or before `until`.
    ///
    /// The clock jumps to that task's due time and the task is re-armed for its
    /// next interval. Ties go to the task started first.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let (idx, due) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(i, e)| (e.due, *i))
            .map(|(i, e)| (i, e.due))?;

        self.now = self.now.max(due);
        let entry = &mut self.entries[idx];
        entry.due += entry.interval;
        Some(entry.task)
    }

    /// Move the clock forward to `until` once every due task has been popped.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl<T: Copy + Eq> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Job {
        Fast,
        Slow,
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(s: &mut Scheduler<Job>, until: Duration) -> Vec<(Job, Duration)> {
        let mut fired = Vec::new();
        while let Some(job) = s.pop_due(until) {
            fired.push((job, s.now()));
        }
        s.settle(until);
        fired
    }

    #[test]
    fn test_fires_in_chronological_order() {
        let mut s = Scheduler::new();
        s.start(Job::Slow, ms(300));
        s.start(Job::Fast, ms(100));
        let fired = drain(&mut s, ms(300));
        assert_eq!(
            fired,
            vec![
                (Job::Fast, ms(100)),
                (Job::Fast, ms(200)),
                (Job::Slow, ms(300)),
                (Job::Fast, ms(300)),
            ]
        );
        assert_eq!(s.now(), ms(300));
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut s = Scheduler::new();
        s.start(Job::Fast, ms(100));
        assert!(s.cancel(Job::Fast));
        assert!(!s.cancel(Job::Fast));
        assert!(drain(&mut s, ms(1000)).is_empty());
        assert!(!s.is_scheduled(Job::Fast));
    }

    #[test]
    fn test_restart_replaces_existing_entry() {
        let mut s = Scheduler::new();
        s.start(Job::Fast, ms(100));
        s.settle(ms(90));
        s.start(Job::Fast, ms(100));
        // Re-armed relative to the restart, not the original start.
        assert!(drain(&mut s, ms(150)).is_empty());
        assert_eq!(drain(&mut s, ms(190)), vec![(Job::Fast, ms(190))]);
    }

    #[test]
    fn test_nothing_due_before_interval() {
        let mut s = Scheduler::new();
        s.start(Job::Slow, ms(500));
        assert_eq!(s.pop_due(ms(499)), None);
        assert_eq!(s.pop_due(ms(500)), Some(Job::Slow));
        assert!(s.is_scheduled(Job::Slow));
        assert!(!s.is_scheduled(Job::Fast));
    }

    #[test]
    fn test_zero_interval_does_not_spin() {
        let mut s = Scheduler::new();
        s.start(Job::Fast, Duration::ZERO);
        assert_eq!(drain(&mut s, ms(3)).len(), 3);
    }
}
