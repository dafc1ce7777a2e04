//! Single-threaded timer queue driven by a simulated clock.
//!
//! Nothing here sleeps. The host moves time forward and pulls due timers out
//! one at a time, so a handler always finishes before the next timer is
//! looked at, and a handler that cancels or re-arms timers is seen by the
//! very next pull.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Timer<T> {
    id: TimerId,
    period: Duration,
    task: T,
}

/// Ordered by due time, ties broken by arming order.
type Slot = (Duration, u64);

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    queue: BTreeMap<Slot, Timer<T>>,
    slots: HashMap<TimerId, Slot>,
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            queue: BTreeMap::new(),
            slots: HashMap::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arms a periodic timer firing every `period` from now on.
    pub fn set_interval(&mut self, period: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let period = period.max(MIN_PERIOD);
        self.arm(self.now + period, Timer { id, period, task });
        id
    }

    /// Cancels a timer. Returns false when it was not pending.
    pub fn clear_interval(&mut self, id: TimerId) -> bool {
        match self.slots.remove(&id) {
            Some(slot) => {
                self.queue.remove(&slot);
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Takes the earliest timer due at or before `until`, moves the clock to
    /// its due time and re-arms it for the following period.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let (&slot, _) = self.queue.first_key_value()?;
        if slot.0 > until {
            return None;
        }
        let timer = self.queue.remove(&slot)?;
        self.slots.remove(&timer.id);
        self.now = self.now.max(slot.0);

        let fired = (timer.id, timer.task.clone());
        self.arm(slot.0 + timer.period, timer);
        Some(fired)
    }

    /// Moves the clock to `until` once no timer before it remains.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn arm(&mut self, due: Duration, timer: Timer<T>) {
        let slot = (due, self.next_seq);
        self.next_seq += 1;
        self.slots.insert(timer.id, slot);
        self.queue.insert(slot, timer);
    }
}
