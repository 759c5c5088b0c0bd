#[derive(Debug, Clone)]
struct PendingTimer<E> {
    seq: u64,
    due_ms: u64,
    event: E,
}

/// Virtual-clock timer queue. Every delay in the reveal flow goes through one
/// of these so a teardown can cancel all of them at once.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTimer<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Moves the clock forward. Moving backwards is ignored.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn schedule(&mut self, delay_ms: u32, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTimer {
            seq,
            due_ms: self.now_ms + delay_ms as u64,
            event,
        });
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|timer| timer.due_ms).min()
    }

    /// Removes the earliest timer due at or before `until_ms` and moves the
    /// clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(u64, E)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
            .map(|(index, _)| index)?;

        let timer = self.pending.remove(index);
        self.set_now(timer.due_ms);
        Some((timer.due_ms, timer.event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(300, "late");
        queue.schedule(100, "early");
        queue.schedule(100, "early-second");

        assert_eq!(queue.pop_due(1000), Some((100, "early")));
        assert_eq!(queue.pop_due(1000), Some((100, "early-second")));
        assert_eq!(queue.now(), 100);
        assert_eq!(queue.pop_due(1000), Some((300, "late")));
        assert_eq!(queue.pop_due(1000), None);
    }

    #[test]
    fn test_not_yet_due_stays_pending() {
        let mut queue = TimerQueue::new();
        queue.schedule(500, ());
        assert_eq!(queue.pop_due(499), None);
        assert_eq!(queue.next_due(), Some(500));
    }

    #[test]
    fn test_cancel_all_drops_pending_timers() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, 1);
        queue.schedule(200, 2);
        assert_eq!(queue.pop_due(150), Some((100, 1)));

        queue.schedule(50, 3);
        queue.cancel_all();
        assert!(queue.is_empty());
        assert_eq!(queue.pop_due(u64::MAX), None);
    }

    #[test]
    fn test_delays_are_relative_to_clock() {
        let mut queue = TimerQueue::new();
        queue.set_now(1000);
        queue.schedule(250, ());
        assert_eq!(queue.next_due(), Some(1250));
        queue.set_now(10);
        assert_eq!(queue.now(), 1000);
    }
}
