use std::fmt::Debug;

use crate::{Error, Result};

/// A `(priority, id)` pair stored in the heap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry<P> {
    pub priority: P,
    pub id: usize,
}

/// Array-backed binary min-heap over `(priority, id)` pairs with an id -> position index
///
/// The index makes it possible to look up and decrease the priority of an
/// arbitrary id in O(log n), which a plain `BinaryHeap` cannot do without lazy
/// deletion.
///
/// Layout is 0-based: the root sits at index 0, the children of `i` at `2i + 1`
/// and `2i + 2`, its parent at `(i - 1) / 2`. Ids are dense in `0..capacity`.
///
/// Ties are broken by heap shape only: entries move only on a strict `<`, and
/// bubble-down prefers the left child when both children have equal priority.
/// The same sequence of operations therefore always produces the same order.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries, one per id still in the queue
    entries: Vec<HeapEntry<P>>,

    /// Maps id -> index in `entries`, or `None` once extracted / never inserted
    position_of: Vec<Option<usize>>,
}

impl<P> IndexedMinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty heap with room for `capacity` entries with ids in `0..capacity`
    pub fn new(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            position_of: vec![None; capacity],
        }
    }

    /// Returns the maximum number of entries, fixed at construction
    pub fn capacity(&self) -> usize {
        self.position_of.len()
    }

    /// Returns the number of entries still in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true iff no entries remain
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `id` is currently in the heap
    pub fn contains(&self, id: usize) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns the current index of `id` in heap order
    pub fn position_of(&self, id: usize) -> Option<usize> {
        self.position_of.get(id).copied().flatten()
    }

    /// Read-only view of the entries in heap order
    pub fn as_slice(&self) -> &[HeapEntry<P>] {
        &self.entries
    }

    /// Inserts `id` with the given priority and bubbles it up
    pub fn insert(&mut self, priority: P, id: usize) -> Result<()> {
        if self.entries.len() == self.capacity() {
            return Err(Error::CapacityExceeded(self.capacity()));
        }
        if id >= self.capacity() {
            return Err(Error::InvalidArgument(format!(
                "id {} is outside the heap's id range 0..{}",
                id,
                self.capacity()
            )));
        }
        if self.position_of[id].is_some() {
            return Err(Error::DuplicateId(id));
        }

        let index = self.entries.len();
        self.entries.push(HeapEntry { priority, id });
        self.position_of[id] = Some(index);
        self.bubble_up(index);
        Ok(())
    }

    /// Removes and returns the entry with the smallest priority
    pub fn extract_min(&mut self) -> Result<HeapEntry<P>> {
        if self.entries.is_empty() {
            return Err(Error::EmptyHeap);
        }

        let min = self.entries.swap_remove(0);
        self.position_of[min.id] = None;

        if let Some(root) = self.entries.first() {
            self.position_of[root.id] = Some(0);
            self.bubble_down(0);
            self.debug_check_slot(0);
        }

        Ok(min)
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek_min(&self) -> Option<HeapEntry<P>> {
        self.entries.first().copied()
    }

    /// Lowers the priority of `id` to `new_priority` and bubbles it up
    ///
    /// A `new_priority` that is not strictly smaller than the current one is
    /// ignored. Returns whether the priority actually changed.
    pub fn decrease_priority(&mut self, id: usize, new_priority: P) -> Result<bool> {
        let index = self.position_of(id).ok_or(Error::UnknownId(id))?;

        if new_priority >= self.entries[index].priority {
            return Ok(false);
        }

        self.entries[index].priority = new_priority;
        self.bubble_up(index);
        self.debug_check_slot(index);
        Ok(true)
    }

    /// Returns the current priority of `id`, or `None` if it is not in the heap
    pub fn peek_priority(&self, id: usize) -> Option<P> {
        self.position_of(id).map(|index| self.entries[index].priority)
    }

    fn parent(index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    /// Swaps two entries and keeps both index slots in step
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.position_of[self.entries[a].id] = Some(a);
        self.position_of[self.entries[b].id] = Some(b);
    }

    fn bubble_up(&mut self, mut index: usize) {
        while let Some(parent) = Self::parent(index) {
            if self.entries[index].priority < self.entries[parent].priority {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn bubble_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            // Left wins ties
            let smaller = if right < len && self.entries[right].priority < self.entries[left].priority {
                right
            } else {
                left
            };

            if self.entries[smaller].priority < self.entries[index].priority {
                self.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }

    fn debug_check_slot(&self, index: usize) {
        debug_assert_eq!(
            self.position_of[self.entries[index].id],
            Some(index),
            "heap index out of sync with entries"
        );
    }
}
