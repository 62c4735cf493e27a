/*!
 * Selection Policies
 * One selector per algorithm
 */

use super::traits::Selector;
use crate::core::types::Pid;
use crate::process::queue::ReadyQueue;
use crate::process::types::Process;
use std::cmp::Reverse;

/// Head of the queue
pub struct Fcfs;

/// Smallest burst time
pub struct Sjf;

/// Smallest remaining time
pub struct Srtf;

/// Smallest priority value
pub struct PriorityFirst;

/// Head of the queue; the engine enforces the quantum
pub struct RoundRobin;

/// Largest burst time
pub struct Ljf;

/// Largest remaining time
pub struct Lrtf;

/// Ready members in queue order, resolved against the table
fn ready_processes<'a>(
    ready: &'a ReadyQueue,
    processes: &'a [Process],
) -> impl Iterator<Item = &'a Process> + 'a {
    ready
        .iter()
        .filter_map(move |pid| processes.get(pid as usize))
}

/// First member with the smallest key
fn first_min_by<K: Ord>(
    ready: &ReadyQueue,
    processes: &[Process],
    key: impl Fn(&Process) -> K,
) -> Option<Pid> {
    // min_by_key keeps the first of equal minima
    ready_processes(ready, processes)
        .min_by_key(|p| key(*p))
        .map(|p| p.pid)
}

/// First member with the largest key
fn first_max_by<K: Ord>(
    ready: &ReadyQueue,
    processes: &[Process],
    key: impl Fn(&Process) -> K,
) -> Option<Pid> {
    // max_by_key would keep the last of equal maxima
    first_min_by(ready, processes, |p| Reverse(key(p)))
}

impl Selector for Fcfs {
    fn select(&self, ready: &ReadyQueue, _processes: &[Process]) -> Option<Pid> {
        ready.peek()
    }
}

impl Selector for Sjf {
    fn select(&self, ready: &ReadyQueue, processes: &[Process]) -> Option<Pid> {
        first_min_by(ready, processes, |p| p.burst)
    }
}

impl Selector for Srtf {
    fn select(&self, ready: &ReadyQueue, processes: &[Process]) -> Option<Pid> {
        first_min_by(ready, processes, |p| p.remaining)
    }
}

impl Selector for PriorityFirst {
    fn select(&self, ready: &ReadyQueue, processes: &[Process]) -> Option<Pid> {
        first_min_by(ready, processes, |p| p.priority)
    }
}

impl Selector for RoundRobin {
    fn select(&self, ready: &ReadyQueue, _processes: &[Process]) -> Option<Pid> {
        ready.peek()
    }
}

impl Selector for Ljf {
    fn select(&self, ready: &ReadyQueue, processes: &[Process]) -> Option<Pid> {
        first_max_by(ready, processes, |p| p.burst)
    }
}

impl Selector for Lrtf {
    fn select(&self, ready: &ReadyQueue, processes: &[Process]) -> Option<Pid> {
        first_max_by(ready, processes, |p| p.remaining)
    }
}
