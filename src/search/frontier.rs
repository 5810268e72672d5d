use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};


/// Generated-but-not-yet-expanded items, ordered by the concrete variant
/// Duplicate detection is left to the caller
pub trait Frontier<T> {
    /// Remove the next item to expand
    fn remove(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}


/// LIFO frontier
#[derive(Debug)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn remove(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}


/// FIFO frontier
#[derive(Debug)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> QueueFrontier<T> {
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push_back(item);
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn remove(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}


/// Heap entry - ordering only looks at priority, then insertion sequence
#[derive(Debug)]
struct Entry<T, P> {
    priority: P,
    seq: u64,
    item: T,
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: lower priority, then earlier insertion, is "greater"
        other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T, P: PartialEq> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}
impl<T, P: PartialEq> Eq for Entry<T, P> {}


/// Min-priority frontier
/// Entries with equal priority come out in insertion order.
/// Priorities are fixed at insertion; a better path to a state is a new entry,
/// the old one stays queued.
#[derive(Debug)]
pub struct PriorityQueueFrontier<T, P> {
    heap: BinaryHeap<Entry<T, P>>,
    next_seq: u64,
}

impl<T, P: Ord> PriorityQueueFrontier<T, P> {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }

    pub fn add(&mut self, item: T, priority: P) {
        self.heap.push(Entry { priority, seq: self.next_seq, item });
        self.next_seq += 1;
    }

    /// Remove the item with the lowest priority
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }
}

impl<T, P: Ord> Default for PriorityQueueFrontier<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Frontier<T> for PriorityQueueFrontier<T, P> {
    fn remove(&mut self) -> Option<T> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
