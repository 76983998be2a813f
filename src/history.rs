//! Bounded sample history for plotting.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::float::Float;

/// One plotted point: simulated time and the position reached at that time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<F: Float> {
    pub time: F,
    pub position: F,
}

/// Fixed-capacity FIFO. Pushing past capacity evicts the oldest entry, so
/// the buffer always holds the most recent `capacity` entries in the order
/// they were pushed.
#[derive(Clone, Debug)]
pub struct History<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> History<T> {
    /// `capacity` is clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        History {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `entry`, returning the evicted oldest entry if the buffer was full.
    pub fn push(&mut self, entry: T) -> Option<T> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn capacity(&self) -> usize { self.capacity }
    pub fn is_full(&self) -> bool { self.entries.len() == self.capacity }

    pub fn oldest(&self) -> Option<&T> { self.entries.front() }
    pub fn latest(&self) -> Option<&T> { self.entries.back() }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.entries.iter()
    }
}

impl<T: Clone> History<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

impl<F: Float> History<Sample<F>> {
    /// Positions only, oldest first.
    pub fn positions(&self) -> Vec<F> {
        self.entries.iter().map(|s| s.position).collect()
    }

    /// Flat `[t0, x0, t1, x1, ...]`, oldest first.
    pub fn flatten(&self) -> Vec<F> {
        let mut out = Vec::with_capacity(self.entries.len() * 2);
        for s in &self.entries {
            out.push(s.time);
            out.push(s.position);
        }
        out
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = &'a T;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
