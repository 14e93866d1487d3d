//! Timer scheduling for interview sessions
//!
//! A session never sleeps or spawns threads. It asks its [`Scheduler`] for a
//! repeating timer and the host calls [`InterviewSession::pump`] to apply
//! whatever ticks have fired. Tests swap in [`ManualScheduler`] and move time
//! forward by hand.
//!
//! [`InterviewSession::pump`]: super::InterviewSession::pump

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Identifies one scheduled timer; never reused within a scheduler
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Host-provided source of repeating ticks
pub trait Scheduler {
    /// Start a timer that fires once every `period`
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle;

    /// Stop a timer and drop any of its ticks not yet collected
    fn cancel(&mut self, handle: TimerHandle);

    /// Ticks that fired since the last call, oldest first, one entry per period
    fn fired(&mut self) -> Vec<TimerHandle>;

    /// Number of live timers
    fn pending(&self) -> usize;
}

#[derive(Debug)]
struct ManualTimer {
    handle: TimerHandle,
    period: Duration,
    next_due: Duration,
}

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    timers: Vec<ManualTimer>,
    fired: VecDeque<TimerHandle>,
}

/// Deterministic fake clock
///
/// Cloning yields another handle to the same clock, so a test can keep one
/// copy while the session owns the other.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, queueing every tick that falls due
    pub fn advance(&self, by: Duration) {
        let mut guard = self.inner.lock();
        let clock = &mut *guard;
        let target = clock.now + by;

        loop {
            let next = clock
                .timers
                .iter_mut()
                .filter(|t| t.next_due <= target)
                .min_by_key(|t| t.next_due);
            let Some(timer) = next else { break };

            let handle = timer.handle;
            timer.next_due += timer.period;
            clock.fired.push_back(handle);
        }

        clock.now = target;
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }

    /// Current fake time since creation
    pub fn now(&self) -> Duration {
        self.inner.lock().now
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        let mut clock = self.inner.lock();
        clock.next_id += 1;
        let handle = TimerHandle(clock.next_id);
        let period = period.max(Duration::from_millis(1));
        let next_due = clock.now + period;
        clock.timers.push(ManualTimer {
            handle,
            period,
            next_due,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let mut clock = self.inner.lock();
        clock.timers.retain(|t| t.handle != handle);
        clock.fired.retain(|h| *h != handle);
    }

    fn fired(&mut self) -> Vec<TimerHandle> {
        self.inner.lock().fired.drain(..).collect()
    }

    fn pending(&self) -> usize {
        self.inner.lock().timers.len()
    }
}

#[derive(Debug)]
struct ClockTimer {
    handle: TimerHandle,
    period: Duration,
    next_due: Instant,
}

/// Wall-clock scheduler polled once per UI frame
#[derive(Debug, Default)]
pub struct ClockScheduler {
    next_id: u64,
    timers: Vec<ClockTimer>,
}

impl ClockScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time until the earliest live timer is due, for repaint scheduling
    pub fn next_deadline(&self) -> Option<Duration> {
        let now = Instant::now();
        self.timers
            .iter()
            .map(|t| t.next_due.saturating_duration_since(now))
            .min()
    }
}

impl Scheduler for ClockScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        let period = period.max(Duration::from_millis(1));
        self.timers.push(ClockTimer {
            handle,
            period,
            next_due: Instant::now() + period,
        });
        debug!("[TIMER] Scheduled #{} every {:?}", handle.0, period);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }

    fn fired(&mut self) -> Vec<TimerHandle> {
        let now = Instant::now();
        let mut fired = Vec::new();
        for timer in &mut self.timers {
            while timer.next_due <= now {
                fired.push(timer.handle);
                timer.next_due += timer.period;
            }
        }
        fired
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_ticks_once_per_period() {
        let mut sched = ManualScheduler::new();
        let handle = sched.schedule_repeating(Duration::from_secs(1));

        sched.advance(Duration::from_millis(2500));
        assert_eq!(sched.fired(), vec![handle, handle]);
        assert!(sched.fired().is_empty());

        sched.advance(Duration::from_millis(500));
        assert_eq!(sched.fired(), vec![handle]);
    }

    #[test]
    fn test_manual_cancel_drops_queued_ticks() {
        let mut sched = ManualScheduler::new();
        let handle = sched.schedule_repeating(Duration::from_secs(1));
        sched.advance_secs(3);
        sched.cancel(handle);

        assert!(sched.fired().is_empty());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_manual_clones_share_state() {
        let observer = ManualScheduler::new();
        let mut owned = observer.clone();
        owned.schedule_repeating(Duration::from_secs(1));

        assert_eq!(observer.pending(), 1);
        observer.advance_secs(1);
        assert_eq!(owned.fired().len(), 1);
        assert_eq!(observer.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_handles_are_unique() {
        let mut sched = ManualScheduler::new();
        let a = sched.schedule_repeating(Duration::from_secs(1));
        sched.cancel(a);
        let b = sched.schedule_repeating(Duration::from_secs(1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_clock_scheduler_tracks_pending() {
        let mut sched = ClockScheduler::new();
        let handle = sched.schedule_repeating(Duration::from_secs(60));
        assert_eq!(sched.pending(), 1);
        assert!(sched.fired().is_empty());
        assert!(sched.next_deadline().is_some());

        sched.cancel(handle);
        assert_eq!(sched.pending(), 0);
        assert!(sched.next_deadline().is_none());
    }
}
