/*!
 * Scheduler Snapshots
 * Owned, field-named views of the whole engine for renderers
 */

use super::entry::GanttEntry;
use super::events::SchedulerEvent;
use super::Scheduler;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::SNAPSHOT_KERNEL_LOG_ENTRIES;
use crate::core::serde::sentinel;
use crate::core::types::{Pid, Tick};
use crate::monitoring::{Metrics, TickSample};
use crate::process::types::ProcessView;
use serde::{Deserialize, Serialize};

/// Full engine state at one instant
///
/// Metrics are all zero until the run completes; `metrics_history` carries the
/// running figures of every tick so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerSnapshot {
    pub current_time: Tick,
    #[serde(with = "sentinel")]
    pub running_pid: Option<Pid>,
    pub is_completed: bool,
    /// Numeric algorithm id
    pub algorithm: u8,
    pub time_quantum: u32,
    pub processes: Vec<ProcessView>,
    pub gantt: Vec<GanttEntry>,
    pub ready_queue: Vec<Pid>,
    pub metrics: Metrics,
    pub metrics_history: Vec<TickSample>,
    /// Most recent kernel events, oldest first
    pub kernel_log: Vec<SchedulerEvent>,
    pub context_switches: u64,
}

impl Scheduler {
    /// Capture the full state
    pub fn snapshot(&self) -> SchedulerSnapshot {
        SchedulerSnapshot {
            current_time: self.current_time,
            running_pid: self.running,
            is_completed: self.completed,
            algorithm: self.algorithm.id(),
            time_quantum: self.time_quantum,
            processes: self.process_views(),
            gantt: self.gantt().to_vec(),
            ready_queue: self.ready_queue(),
            metrics: self.metrics.unwrap_or_default(),
            metrics_history: self.metrics_history().to_vec(),
            kernel_log: self.recent_events(SNAPSHOT_KERNEL_LOG_ENTRIES).to_vec(),
            context_switches: self.stats.context_switches,
        }
    }

    /// Full state as a freshly allocated JSON string
    pub fn state_json(&self) -> SchedulerResult<String> {
        to_json(&self.snapshot())
    }

    pub fn processes_json(&self) -> SchedulerResult<String> {
        to_json(&self.process_views())
    }

    pub fn gantt_json(&self) -> SchedulerResult<String> {
        to_json(self.gantt())
    }

    pub fn ready_queue_json(&self) -> SchedulerResult<String> {
        to_json(&self.ready_queue())
    }

    pub fn metrics_json(&self) -> SchedulerResult<String> {
        to_json(&self.metrics.unwrap_or_default())
    }

    pub fn metrics_history_json(&self) -> SchedulerResult<String> {
        to_json(self.metrics_history())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> SchedulerResult<String> {
    serde_json::to_string(value).map_err(|e| SchedulerError::Serialization(e.to_string()))
}
