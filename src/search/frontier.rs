//! Frontier containers for graph search

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

use super::problem::Successor;

/// A discovered search node: the state, how we got there, and what it cost.
#[derive(Debug, Clone)]
pub(crate) struct Node<S, A> {
    pub state: S,
    pub path: Vec<A>,
    pub cost: f64,
}

impl<S, A: Clone> Node<S, A> {
    pub fn root(state: S) -> Self {
        Self {
            state,
            path: Vec::new(),
            cost: 0.0,
        }
    }

    /// Extend this node's path along `successor`.
    pub fn child(&self, successor: Successor<S, A>) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(successor.action);
        Self {
            state: successor.state,
            path,
            cost: self.cost + successor.cost,
        }
    }
}

/// Insertion/removal discipline of an unprioritised frontier.
pub(crate) trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
}

/// LIFO frontier for depth-first search.
#[derive(Debug)]
pub(crate) struct Stack<T>(Vec<T>);

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }
}

/// FIFO frontier for breadth-first search.
#[derive(Debug)]
pub(crate) struct Queue<T>(VecDeque<T>);

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

struct Entry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // BinaryHeap is a max-heap: reverse so the lowest priority, then the
    // earliest insertion, is popped first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority frontier; equal priorities pop in insertion order.
pub(crate) struct PriorityFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_sequence: u64,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Entry {
            priority,
            sequence,
            item,
        });
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }
}
