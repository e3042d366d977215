//! Ternary min-heap priority queue with handle-based decrease-key.
//!
//! The queue does not own its elements. Elements live in a caller-owned slice and are
//! referred to by their position in that slice (the element *id*). The queue stores ids in
//! a dense array laid out as a complete ternary tree: the parent of slot `i` is
//! `(i - 1) / 3` and its children are `3i + 1`, `3i + 2` and `3i + 3`.
//!
//! Every queued element records its current slot in its *handle*. The queue rewrites the
//! handles of both elements on every swap, so `slots[elements[id].handle()] == id` holds for
//! every queued id between calls. Membership checks and decrease-key use the handle directly
//! and never search the array.
//!
//! Every mutating call takes the element slice the queue was populated from. Passing a
//! different slice is a caller error. Ids the slice does not hold are reported as
//! [`Error::UnknownElement`] and stale handles as [`Error::StaleHandle`]; after such an error
//! the queue should be cleared.

use crate::error::{Error, Result};

const ARITY: usize = 3;

/// An element that can sit in a [`TernaryHeap`].
pub trait PriorityElement {
    fn priority(&self) -> f64;

    fn set_priority(&mut self, priority: f64);

    /// The element's slot in the queue, or `None` when it is not queued.
    fn handle(&self) -> Option<usize>;

    fn set_handle(&mut self, handle: Option<usize>);
}

/// Minimal [`PriorityElement`]: a priority and a handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapSlot {
    priority: f64,
    handle: Option<usize>,
}

impl HeapSlot {
    pub fn new(priority: f64) -> Self {
        Self {
            priority,
            handle: None,
        }
    }
}

impl Default for HeapSlot {
    fn default() -> Self {
        Self::new(f64::INFINITY)
    }
}

impl PriorityElement for HeapSlot {
    fn priority(&self) -> f64 {
        self.priority
    }

    fn set_priority(&mut self, priority: f64) {
        self.priority = priority;
    }

    fn handle(&self) -> Option<usize> {
        self.handle
    }

    fn set_handle(&mut self, handle: Option<usize>) {
        self.handle = handle;
    }
}

#[derive(Debug, Clone, Default)]
pub struct TernaryHeap {
    slots: Vec<usize>,
}

impl TernaryHeap {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The backing array: element ids in heap order.
    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    /// Whether `id` is currently queued, answered through its handle.
    pub fn contains<E: PriorityElement>(&self, elements: &[E], id: usize) -> bool {
        elements
            .get(id)
            .and_then(PriorityElement::handle)
            .is_some_and(|slot| self.slots.get(slot) == Some(&id))
    }

    pub fn insert<E: PriorityElement>(&mut self, elements: &mut [E], id: usize) -> Result<()> {
        let element = lookup(elements, id)?;
        if self.contains(elements, id) {
            return Err(Error::AlreadyQueued { id });
        }
        let priority = element.priority();
        if priority.is_nan() {
            return Err(Error::InvalidPriority { id, priority });
        }

        let slot = self.slots.len();
        self.slots.push(id);
        lookup_mut(elements, id)?.set_handle(Some(slot));
        self.sift_up(elements, slot)
    }

    /// The id of a minimum-priority element, without removing it.
    pub fn minimum(&self) -> Result<usize> {
        self.slots.first().copied().ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the id of a minimum-priority element. Its handle is cleared.
    ///
    /// Fails without touching the queue when `elements` does not hold the minimum or the
    /// last queued element.
    pub fn extract_minimum<E: PriorityElement>(&mut self, elements: &mut [E]) -> Result<usize> {
        let (Some(&min), Some(&last)) = (self.slots.first(), self.slots.last()) else {
            return Err(Error::EmptyQueue);
        };
        lookup(elements, min)?;
        lookup(elements, last)?;

        self.slots.swap_remove(0);
        lookup_mut(elements, min)?.set_handle(None);
        if !self.slots.is_empty() {
            lookup_mut(elements, last)?.set_handle(Some(0));
            self.sift_down(elements, 0)?;
        }
        Ok(min)
    }

    /// Lowers the priority of queued element `id` to `priority` and restores heap order.
    ///
    /// Fails with a not-found error when `id` is not queued and with an invalid-argument
    /// error when its handle is stale or `priority` is not strictly below the current one.
    pub fn decrease_priority<E: PriorityElement>(
        &mut self,
        elements: &mut [E],
        id: usize,
        priority: f64,
    ) -> Result<()> {
        let element = lookup(elements, id)?;
        let Some(slot) = element.handle() else {
            return Err(Error::NotQueued { id });
        };
        if self.slots.get(slot) != Some(&id) {
            return Err(Error::StaleHandle { id, handle: slot });
        }
        let current = element.priority();
        if priority.is_nan() || priority >= current {
            return Err(Error::PriorityNotDecreased {
                id,
                current,
                requested: priority,
            });
        }

        lookup_mut(elements, id)?.set_priority(priority);
        self.sift_up(elements, slot)
    }

    /// Empties the queue, clearing the handles of the elements it held.
    pub fn clear<E: PriorityElement>(&mut self, elements: &mut [E]) {
        for id in self.slots.drain(..) {
            if let Some(element) = elements.get_mut(id) {
                element.set_handle(None);
            }
        }
    }

    fn priority_at<E: PriorityElement>(&self, elements: &[E], slot: usize) -> Result<f64> {
        Ok(lookup(elements, self.slots[slot])?.priority())
    }

    /// Both ids must already have been looked up in `elements`.
    fn swap<E: PriorityElement>(&mut self, elements: &mut [E], a: usize, b: usize) -> Result<()> {
        self.slots.swap(a, b);
        lookup_mut(elements, self.slots[a])?.set_handle(Some(a));
        lookup_mut(elements, self.slots[b])?.set_handle(Some(b));
        Ok(())
    }

    fn sift_up<E: PriorityElement>(&mut self, elements: &mut [E], mut slot: usize) -> Result<()> {
        while slot > 0 {
            let parent = (slot - 1) / ARITY;
            if self.priority_at(elements, parent)? > self.priority_at(elements, slot)? {
                self.swap(elements, parent, slot)?;
                slot = parent;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn sift_down<E: PriorityElement>(&mut self, elements: &mut [E], mut slot: usize) -> Result<()> {
        let len = self.slots.len();
        loop {
            let first_child = ARITY * slot + 1;
            if first_child >= len {
                return Ok(());
            }
            let mut smallest = slot;
            let mut smallest_priority = self.priority_at(elements, slot)?;
            for child in first_child..(first_child + ARITY).min(len) {
                let priority = self.priority_at(elements, child)?;
                if priority < smallest_priority {
                    smallest = child;
                    smallest_priority = priority;
                }
            }
            if smallest == slot {
                return Ok(());
            }
            self.swap(elements, slot, smallest)?;
            slot = smallest;
        }
    }
}

fn lookup<E>(elements: &[E], id: usize) -> Result<&E> {
    elements.get(id).ok_or(Error::UnknownElement {
        id,
        len: elements.len(),
    })
}

fn lookup_mut<E>(elements: &mut [E], id: usize) -> Result<&mut E> {
    let len = elements.len();
    elements.get_mut(id).ok_or(Error::UnknownElement { id, len })
}
