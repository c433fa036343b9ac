use std::fmt::Debug;

use crate::{Error, Result};

/// A key paired with the priority it was queued under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapEntry<K, P> {
    pub key: K,
    pub priority: P,
}

/// Array-backed binary min-heap used as the Dijkstra frontier
///
/// There is no decrease-key: the same key may be queued several times with
/// different priorities. Callers are expected to recognise and skip the
/// outdated entries when they are extracted.
///
/// Children of index `i` live at `2i + 1` and `2i + 2`, its parent at
/// `(i - 1) / 2`.
#[derive(Debug, Clone)]
pub struct MinHeap<K, P>
where
    P: PartialOrd + Copy + Debug,
{
    heap: Vec<HeapEntry<K, P>>,
}

impl<K, P> MinHeap<K, P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap { heap: Vec::new() }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `key` with the given priority
    pub fn insert(&mut self, key: K, priority: P) {
        self.heap.push(HeapEntry { key, priority });
        self.bubble_up(self.heap.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority
    ///
    /// Fails with [`Error::EmptyQueue`] when there is nothing to extract.
    pub fn extract_min(&mut self) -> Result<HeapEntry<K, P>> {
        let last = self.heap.pop().ok_or(Error::EmptyQueue)?;
        if self.heap.is_empty() {
            return Ok(last);
        }

        let min = std::mem::replace(&mut self.heap[0], last);
        self.bubble_down(0);
        Ok(min)
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<&HeapEntry<K, P>> {
        self.heap.first()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            // Equal priorities stay where they are
            if self.heap[parent].priority <= self.heap[index].priority {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
    }

    fn bubble_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut swap = None;

            if left < len && self.heap[left].priority < self.heap[index].priority {
                swap = Some(left);
            }

            if right < len {
                let right_wins = match swap {
                    None => self.heap[right].priority < self.heap[index].priority,
                    Some(chosen) => self.heap[right].priority < self.heap[chosen].priority,
                };
                if right_wins {
                    swap = Some(right);
                }
            }

            match swap {
                Some(child) => {
                    self.heap.swap(index, child);
                    index = child;
                }
                None => break,
            }
        }
    }
}

impl<K, P> Default for MinHeap<K, P>
where
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
