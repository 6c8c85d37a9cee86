//! Timer module - deferred events driven by an injected clock
//!
//! Game states never read wall-clock time. The front end (or a test) calls
//! `tick(elapsed_ms)` and the state drains whatever became due.
//! Tests fast-forward by passing large values.
//!
//! Events scheduled while another event is being handled are measured from
//! the handled event's due time, so one large `elapsed_ms` replays a whole
//! chain of delays in order.

/// A scheduled event waiting to fire
#[derive(Debug, Clone)]
struct Pending<E> {
    due_ms: u64,
    seq: u64,
    event: E,
}

/// Cancellable queue of delayed events
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Current scheduler time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `event` to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u32, event: E) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.pending.push(Pending {
            due_ms: self.now_ms + delay_ms as u64,
            seq,
            event,
        });
    }

    /// Drop every pending event, returning how many were cancelled
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending event
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    /// Pop the earliest event due at or before `until_ms`
    ///
    /// Moves the clock to that event's due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<E> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;

        let pending = self.pending.swap_remove(idx);
        self.now_ms = self.now_ms.max(pending.due_ms);
        Some(pending.event)
    }

    /// Move the clock forward to `until_ms` without firing anything
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let mut timers = Scheduler::new();
        timers.schedule(300, "c");
        timers.schedule(100, "a");
        timers.schedule(200, "b");

        assert_eq!(timers.pop_due(1000), Some("a"));
        assert_eq!(timers.now_ms(), 100);
        assert_eq!(timers.pop_due(1000), Some("b"));
        assert_eq!(timers.pop_due(1000), Some("c"));
        assert_eq!(timers.pop_due(1000), None);
    }

    #[test]
    fn test_ties_fire_fifo() {
        let mut timers = Scheduler::new();
        timers.schedule(50, 1);
        timers.schedule(50, 2);
        timers.schedule(50, 3);

        assert_eq!(timers.pop_due(50), Some(1));
        assert_eq!(timers.pop_due(50), Some(2));
        assert_eq!(timers.pop_due(50), Some(3));
    }

    #[test]
    fn test_not_due_yet() {
        let mut timers = Scheduler::new();
        timers.schedule(500, ());

        assert_eq!(timers.pop_due(499), None);
        timers.advance_to(499);
        assert_eq!(timers.now_ms(), 499);
        assert_eq!(timers.pop_due(500), Some(()));
    }

    #[test]
    fn test_chained_schedule_measures_from_due_time() {
        let mut timers = Scheduler::new();
        timers.schedule(100, 1);

        assert_eq!(timers.pop_due(1000), Some(1));
        // Scheduled while handling event 1 (now == 100).
        timers.schedule(100, 2);
        assert_eq!(timers.next_due_ms(), Some(200));
        assert_eq!(timers.pop_due(1000), Some(2));
    }

    #[test]
    fn test_cancel_all() {
        let mut timers = Scheduler::new();
        timers.schedule(10, 'x');
        timers.schedule(20, 'y');

        assert_eq!(timers.cancel_all(), 2);
        assert!(timers.is_empty());
        assert_eq!(timers.pop_due(u64::MAX), None);
    }
}
