/*!
 * Ready Queue
 * Bounded FIFO of ready process ids
 */

use crate::core::types::Pid;
use std::collections::VecDeque;
use tracing::warn;

/// Ordered ready queue
///
/// Insertion order is the only order kept. Policies that rank by something
/// other than arrival scan [`ReadyQueue::iter`] instead of reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyQueue {
    pids: VecDeque<Pid>,
    capacity: usize,
}

impl ReadyQueue {
    /// Queue that admits at most `capacity` ids; nothing is preallocated
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pids: VecDeque::new(),
            capacity,
        }
    }

    /// Append at the tail; a full queue drops the id and returns false
    pub fn push(&mut self, pid: Pid) -> bool {
        if self.pids.len() >= self.capacity {
            warn!(pid, capacity = self.capacity, "ready queue full, dropping process");
            return false;
        }
        self.pids.push_back(pid);
        true
    }

    /// Remove and return the head
    pub fn pop(&mut self) -> Option<Pid> {
        self.pids.pop_front()
    }

    /// Head without removing it
    pub fn peek(&self) -> Option<Pid> {
        self.pids.front().copied()
    }

    /// Remove `pid` wherever it is, keeping the order of the rest
    pub fn remove(&mut self, pid: Pid) -> bool {
        match self.pids.iter().position(|&p| p == pid) {
            Some(pos) => {
                self.pids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.pids.contains(&pid)
    }

    pub fn len(&self) -> usize {
        self.pids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.pids.clear();
    }

    /// Members in FIFO order
    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.pids.iter().copied()
    }

    /// Owned copy of the members in FIFO order
    pub fn to_vec(&self) -> Vec<Pid> {
        self.pids.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fifo_order() {
        let mut q = ReadyQueue::with_capacity(4);
        q.push(3);
        q.push(1);
        q.push(2);

        assert_eq!(q.peek(), Some(3));
        assert_eq!(q.pop(), Some(3));
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_empty_queue() {
        let mut q = ReadyQueue::with_capacity(2);
        assert!(q.is_empty());
        assert_eq!(q.pop(), None);
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn test_push_beyond_capacity_is_dropped() {
        let mut q = ReadyQueue::with_capacity(2);
        assert!(q.push(0));
        assert!(q.push(1));
        assert!(!q.push(2));
        assert_eq!(q.to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut q = ReadyQueue::with_capacity(8);
        for pid in [5, 6, 7, 8] {
            q.push(pid);
        }

        assert!(q.remove(6));
        assert_eq!(q.to_vec(), vec![5, 7, 8]);

        assert!(!q.remove(42));
        assert_eq!(q.to_vec(), vec![5, 7, 8]);
    }

    #[test]
    fn test_huge_capacity_is_only_a_limit() {
        let mut q = ReadyQueue::with_capacity(usize::MAX);
        assert_eq!(q.capacity(), usize::MAX);
        assert!(q.push(0));
        assert!(q.contains(0));
        assert!(!q.contains(1));
    }

    #[test]
    fn test_remove_frees_capacity() {
        let mut q = ReadyQueue::with_capacity(1);
        q.push(0);
        q.remove(0);
        assert!(q.push(1));
        assert_eq!(q.peek(), Some(1));
    }
}
