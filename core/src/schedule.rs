//! Deterministic Timer Queue
//!
//! Single-threaded cooperative timer facility on a logical clock. The
//! environment owns real time: it calls [`TimerQueue::advance`] with elapsed
//! time and then drains due firings with [`TimerQueue::pop_due`], one at a
//! time, so that a cancellation performed while handling one firing reliably
//! suppresses every not-yet-delivered firing of the cancelled timer.
//!
//! Ordering guarantee: firings are delivered in non-decreasing deadline
//! order; two timers due at the same instant fire in the order they were
//! armed. Repeating timers re-arm on delivery, so a large `advance` step
//! delivers every missed interval (catch-up) rather than dropping ticks.
//!
//! Cancellation is idempotent: cancelling an unknown or already-cancelled
//! handle is a no-op.

use std::time::Duration;

/// Handle to an armed timer.
///
/// Handles are unique for the lifetime of the queue and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug)]
enum Repeat {
    Once,
    Every(Duration),
}

#[derive(Clone, Copy, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: Duration,
    seq: u64,
    repeat: Repeat,
    token: T,
}

/// A logical-clock timer queue delivering typed tokens.
///
/// `T` is the token identifying what a firing means; the owner dispatches on
/// it. Tokens are plain data, never closures, so delivering a firing cannot
/// alias the state the handler mutates.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    entries: Vec<Entry<T>>,
}

impl<T: Copy> TimerQueue<T> {
    /// Create an empty queue with the logical clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            entries: Vec::new(),
        }
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm a one-shot timer due `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, token: T) -> TimerId {
        self.push(self.now + delay, Repeat::Once, token)
    }

    /// Arm a repeating timer first due one `interval` from now.
    ///
    /// A zero interval would make the timer due forever once it fires; the
    /// sequence configuration rejects that before a queue ever sees it.
    pub fn schedule_repeating(&mut self, interval: Duration, token: T) -> TimerId {
        self.push(self.now + interval, Repeat::Every(interval), token)
    }

    fn push(&mut self, deadline: Duration, repeat: Repeat, token: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            id,
            deadline,
            seq,
            repeat,
            token,
        });
        id
    }

    /// Disarm a timer. Idempotent: unknown handles are ignored.
    pub fn cancel(&mut self, id: TimerId) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Disarm every timer at once.
    ///
    /// Invoked on every phase exit so no timer of the old phase can fire
    /// into the new one.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Number of currently armed timers.
    #[must_use]
    pub fn armed_len(&self) -> usize {
        self.entries.len()
    }

    /// Move the logical clock forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;
    }

    /// Time until the earliest armed deadline, if any.
    ///
    /// Returns `Duration::ZERO` for timers already due.
    #[must_use]
    pub fn until_next_deadline(&self) -> Option<Duration> {
        self.entries
            .iter()
            .map(|entry| entry.deadline.saturating_sub(self.now))
            .min()
    }

    /// Deliver the earliest due firing, if any.
    ///
    /// One-shot timers are removed; repeating timers re-arm at
    /// `deadline + interval`. Returns `None` once nothing is due at the
    /// current logical time.
    pub fn pop_due(&mut self) -> Option<T> {
        let due_at = self.now;
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= due_at)
            .min_by_key(|(_, entry)| (entry.deadline, entry.seq))
            .map(|(idx, _)| idx)?;

        match self.entries[idx].repeat {
            Repeat::Once => {
                let entry = self.entries.remove(idx);
                Some(entry.token)
            }
            Repeat::Every(interval) => {
                let token = self.entries[idx].token;
                self.entries[idx].deadline += interval;
                self.entries[idx].seq = self.next_seq;
                self.next_seq += 1;
                Some(token)
            }
        }
    }
}

impl<T: Copy> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
