//! Pending deferred steps ordered by due time.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use battle_core::Deferred;

#[derive(Debug)]
struct Entry {
    due_ms: u64,
    seq: u64,
    deferred: Deferred,
}

// Reversed so the max-heap yields the earliest (due, seq) first.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due_ms, other.seq).cmp(&(self.due_ms, self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Fire-once timer queue for deferred battle steps.
///
/// Entries with the same due time come back in the order they were
/// scheduled. There is no cancellation; stale steps are filtered by the
/// session when they are resumed.
#[derive(Debug, Default)]
pub struct Timeline {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `deferred` to become due `delay_ms` after `now_ms`.
    ///
    /// Returns the absolute due time.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, deferred: Deferred) -> u64 {
        let due_ms = now_ms.saturating_add(delay_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            due_ms,
            seq,
            deferred,
        });
        due_ms
    }

    /// Remove and return the earliest entry if it is due at `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, Deferred)> {
        if self.heap.peek()?.due_ms > now_ms {
            return None;
        }
        self.heap.pop().map(|entry| (entry.due_ms, entry.deferred))
    }

    /// Due time of the earliest pending entry.
    pub fn next_due(&self) -> Option<u64> {
        self.heap.peek().map(|entry| entry.due_ms)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{BattleState, SessionId, Side, Step};

    use super::*;

    fn finish(attacker: Side) -> Deferred {
        Deferred::new(
            SessionId(1),
            attacker.turn_state(),
            Step::FinishTurn { attacker },
        )
    }

    #[test]
    fn equal_due_times_come_back_in_scheduling_order() {
        let mut timeline = Timeline::new();
        let steps = [
            finish(Side::Player),
            Deferred::new(SessionId(1), BattleState::EnemyTurn, Step::EnemyAttack),
            finish(Side::Enemy),
        ];
        for step in steps {
            timeline.schedule(100, 50, step);
        }

        let fired: Vec<_> = std::iter::from_fn(|| timeline.pop_due(150))
            .map(|(_, deferred)| deferred)
            .collect();

        assert_eq!(fired, steps);
    }

    #[test]
    fn earlier_due_time_wins_regardless_of_insertion() {
        let mut timeline = Timeline::new();
        timeline.schedule(0, 800, finish(Side::Player));
        timeline.schedule(0, 300, finish(Side::Enemy));

        assert_eq!(timeline.next_due(), Some(300));
        assert_eq!(timeline.pop_due(299), None);
        assert_eq!(timeline.pop_due(300), Some((300, finish(Side::Enemy))));
        assert_eq!(timeline.pop_due(799), None);
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut timeline = Timeline::new();
        timeline.schedule(0, 0, finish(Side::Player));
        timeline.clear();

        assert!(timeline.is_empty());
        assert_eq!(timeline.pop_due(u64::MAX), None);
    }
}
