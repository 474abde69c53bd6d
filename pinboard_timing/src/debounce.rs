// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

/// Receipt for one scheduled firing of a key.
///
/// Scheduling the same key again replaces the firing this handle describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle<K> {
    key: K,
    deadline: u64,
}

impl<K: Copy> TimerHandle<K> {
    /// The key this handle was scheduled for.
    pub fn key(&self) -> K {
        self.key
    }

    /// When the firing is due, unless superseded.
    pub fn deadline(&self) -> u64 {
        self.deadline
    }
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    deadline: u64,
    generation: u64,
}

/// Per-key trailing-edge debouncer over caller-supplied millisecond timestamps.
#[derive(Clone, Debug)]
pub struct Debouncer<K> {
    delay: u64,
    pending: HashMap<K, Pending>,
    generation: u64,
}

impl<K> Debouncer<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates a debouncer that fires `delay_ms` after the last schedule of a key.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: delay_ms,
            pending: HashMap::new(),
            generation: 0,
        }
    }

    /// The quiet period in milliseconds.
    pub fn delay(&self) -> u64 {
        self.delay
    }

    /// Changes the quiet period. Deadlines already pending keep their old value.
    pub fn set_delay(&mut self, delay_ms: u64) {
        self.delay = delay_ms;
    }

    /// Schedules `key` to fire at `now + delay`, superseding any pending firing.
    pub fn schedule(&mut self, key: K, now: u64) -> TimerHandle<K> {
        self.generation += 1;
        let deadline = now.saturating_add(self.delay);
        let pending = Pending {
            deadline,
            generation: self.generation,
        };
        self.pending.insert(key, pending);
        TimerHandle { key, deadline }
    }

    /// Returns the deadline pending for `key`, if any.
    pub fn deadline(&self, key: &K) -> Option<u64> {
        self.pending.get(key).map(|p| p.deadline)
    }

    /// Earliest pending deadline, for arming a host timer.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.values().map(|p| p.deadline).min()
    }

    /// Removes and returns every key whose deadline is `<= now`.
    ///
    /// Keys come out in deadline order; equal deadlines keep schedule order.
    pub fn drain_due(&mut self, now: u64) -> Vec<K> {
        let mut due: Vec<(u64, u64, K)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(k, p)| (p.deadline, p.generation, *k))
            .collect();
        if due.is_empty() {
            return Vec::new();
        }
        due.sort_unstable_by_key(|&(deadline, generation, _)| (deadline, generation));
        for (_, _, key) in &due {
            self.pending.remove(key);
        }
        due.into_iter().map(|(_, _, key)| key).collect()
    }

    /// Number of keys with a pending firing.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::Debouncer;

    #[test]
    fn fires_once_after_quiet_period() {
        let mut d = Debouncer::new(100);
        d.schedule(1_u32, 0);
        d.schedule(1, 30);
        d.schedule(1, 60);

        assert!(d.drain_due(100).is_empty());
        assert_eq!(d.drain_due(160), vec![1]);
        assert!(d.drain_due(1_000).is_empty());
    }

    #[test]
    fn rescheduling_supersedes_pending_firing() {
        let mut d = Debouncer::new(50);
        let a = d.schedule(3_u32, 10);
        assert_eq!(a.deadline(), 60);
        let b = d.schedule(3, 20);
        assert_eq!(b.key(), 3);
        assert_eq!(b.deadline(), 70);
        assert_eq!(d.pending_len(), 1);
        assert_eq!(d.deadline(&3), Some(70));
        assert!(d.drain_due(a.deadline()).is_empty());
        assert_eq!(d.drain_due(b.deadline()), vec![3]);
    }

    #[test]
    fn keys_are_independent() {
        let mut d = Debouncer::new(100);
        d.schedule(1_u32, 0);
        d.schedule(2, 50);
        d.schedule(1, 60);

        assert_eq!(d.next_deadline(), Some(150));
        assert_eq!(d.drain_due(155), vec![2]);
        assert_eq!(d.drain_due(160), vec![1]);
        assert!(d.is_empty());
    }

    #[test]
    fn equal_deadlines_drain_in_schedule_order() {
        let mut d = Debouncer::new(10);
        d.schedule(9_u32, 0);
        d.schedule(4, 0);
        d.schedule(6, 0);
        assert_eq!(d.drain_due(10), vec![9, 4, 6]);
    }

    #[test]
    fn deadline_saturates_and_fired_key_is_cleared() {
        let mut d = Debouncer::new(10);
        let h = d.schedule(1_u32, u64::MAX - 1);
        assert_eq!(h.deadline(), u64::MAX);
        assert_eq!(d.drain_due(u64::MAX), vec![1]);
        assert_eq!(d.deadline(&1), None);
        assert!(d.is_empty());
    }

    #[test]
    fn set_delay_applies_to_new_schedules() {
        let mut d = Debouncer::new(10);
        d.schedule(1_u32, 0);
        d.set_delay(200);
        assert_eq!(d.delay(), 200);
        d.schedule(2, 0);
        assert_eq!(d.deadline(&1), Some(10));
        assert_eq!(d.deadline(&2), Some(200));
    }
}
