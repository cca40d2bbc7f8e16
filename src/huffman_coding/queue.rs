//! Min-priority queue of arena nodes, ordered by (weight, order).
//!
//! The queue stores only node indices. Weights live in the arena and may change between calls
//! (a leaf's weight is bumped in place), so every comparison reads the arena, and callers must
//! `heapify` after mutating a weight that the queue holds.

use super::node::{Node, NodeId};

#[derive(Debug, Clone, Default)]
pub struct NodeQueue {
    heap: Vec<NodeId>,
}

impl NodeQueue {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Build a queue over a copy of existing ids in O(n).
    pub fn from_ids(ids: &[NodeId], arena: &[Node]) -> Self {
        let mut queue = Self {
            heap: ids.to_vec(),
        };
        queue.heapify(arena);
        queue
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The ids currently held, in heap (not sorted) order.
    pub fn ids(&self) -> &[NodeId] {
        &self.heap
    }

    /// Insert a node and restore the heap property.
    pub fn push(&mut self, id: NodeId, arena: &[Node]) {
        self.heap.push(id);
        let last = self.heap.len() - 1;
        self.sift_up(last, arena);
    }

    /// Remove and return the smallest node, or None if the queue is empty.
    pub fn pop(&mut self, arena: &[Node]) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0, arena);
        }
        min
    }

    /// Re-establish the heap property over every element. Bottom up, so O(n).
    pub fn heapify(&mut self, arena: &[Node]) {
        let n = self.heap.len();
        for i in (0..n / 2).rev() {
            self.sift_down(i, arena);
        }
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize, arena: &[Node]) -> bool {
        arena[self.heap[i]].key() < arena[self.heap[j]].key()
    }

    fn sift_up(&mut self, mut idx: usize, arena: &[Node]) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.less(idx, parent, arena) {
                break;
            }
            self.heap.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize, arena: &[Node]) {
        let n = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            if left >= n {
                break;
            }
            // Pick the smaller child
            let mut child = left;
            let right = left + 1;
            if right < n && self.less(right, left, arena) {
                child = right;
            }
            if !self.less(child, idx, arena) {
                break;
            }
            self.heap.swap(idx, child);
            idx = child;
        }
    }
}
