/*!
 * Scheduler Queries
 * Read-only views of engine state and run counters
 */

use super::entry::GanttEntry;
use super::events::SchedulerEvent;
use super::Scheduler;
use crate::core::config::{AgingConfig, SchedulerConfig};
use crate::core::serde::is_zero_u64;
use crate::core::types::{Pid, Tick};
use crate::monitoring::{Metrics, TickSample};
use crate::process::types::{Process, ProcessView};
use crate::scheduler::Algorithm;
use serde::{Deserialize, Serialize};

/// Run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    /// Dispatches to a different process than the one that last held the CPU
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub context_switches: u64,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub preemptions: u64,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub dispatches: u64,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub idle_ticks: u64,
}

impl Scheduler {
    /// Process table in pid order
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.get(pid as usize)
    }

    /// Flat records of the process table
    pub fn process_views(&self) -> Vec<ProcessView> {
        self.processes.iter().map(ProcessView::from).collect()
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    pub fn max_processes(&self) -> usize {
        self.max_processes
    }

    /// Ready queue members in FIFO order
    pub fn ready_queue(&self) -> Vec<Pid> {
        self.ready.to_vec()
    }

    /// Process holding the CPU, `None` when idle
    pub fn running_pid(&self) -> Option<Pid> {
        self.running
    }

    pub fn gantt(&self) -> &[GanttEntry] {
        self.gantt.entries()
    }

    /// Whether the Gantt history hit capacity and stopped recording
    pub fn is_gantt_truncated(&self) -> bool {
        self.gantt.is_truncated()
    }

    pub fn events(&self) -> &[SchedulerEvent] {
        self.events.events()
    }

    /// The last `count` recorded events, oldest first
    pub fn recent_events(&self, count: usize) -> &[SchedulerEvent] {
        let events = self.events.events();
        &events[events.len().saturating_sub(count)..]
    }

    /// Running figures sampled at the end of every tick so far
    pub fn metrics_history(&self) -> &[TickSample] {
        self.history.samples()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn current_time(&self) -> Tick {
        self.current_time
    }

    /// Metrics of the finished run; `None` until completion
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn time_quantum(&self) -> u32 {
        self.time_quantum
    }

    pub fn quantum_remaining(&self) -> u32 {
        self.quantum_remaining
    }

    pub fn cores(&self) -> u32 {
        self.cores
    }

    pub fn aging(&self) -> Option<AgingConfig> {
        self.aging
    }

    pub fn tick_limit(&self) -> Tick {
        self.tick_limit
    }

    /// Current effective configuration
    pub fn config(&self) -> SchedulerConfig {
        SchedulerConfig {
            algorithm: self.algorithm,
            time_quantum: self.time_quantum,
            cores: self.cores,
            aging: self.aging,
            max_processes: self.max_processes,
            max_gantt_entries: self.base.max_gantt_entries,
            tick_limit: self.tick_limit,
            starvation_threshold: self.starvation_threshold,
        }
    }
}
