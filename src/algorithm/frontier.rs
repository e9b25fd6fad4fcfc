use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::common::Position;

/// Queue entry keyed on `(f_score, sequence)`. The position is payload only
/// and never takes part in ordering.
#[derive(Debug, Clone, Copy)]
pub(super) struct FrontierEntry {
    pub(super) f_score: usize,
    pub(super) sequence: u64,
    pub(super) position: Position,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score && self.sequence == other.sequence
    }
}

impl Eq for FrontierEntry {}

// Reversed so the max-heap pops the smallest f first, then the earliest enqueued.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue plus membership set. A position is a member exactly while
/// it has an entry waiting in the queue.
#[derive(Debug, Default)]
pub(super) struct Frontier {
    queue: BinaryHeap<FrontierEntry>,
    members: HashSet<Position>,
    sequence: u64,
}

impl Frontier {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Enqueue under the next sequence number. Returns false, leaving the
    /// queue untouched, when the position is already a member.
    pub(super) fn push(&mut self, position: Position, f_score: usize) -> bool {
        if !self.members.insert(position) {
            return false;
        }
        self.queue.push(FrontierEntry {
            f_score,
            sequence: self.sequence,
            position,
        });
        self.sequence += 1;
        true
    }

    pub(super) fn pop(&mut self) -> Option<FrontierEntry> {
        let entry = self.queue.pop()?;
        self.members.remove(&entry.position);
        Some(entry)
    }

    pub(super) fn len(&self) -> usize {
        self.queue.len()
    }
}
