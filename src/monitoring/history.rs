/*!
 * Metrics History
 * Per-tick time series of running figures, recorded while a run is in progress
 */

use crate::core::serde::sentinel;
use crate::core::types::{Pid, Tick};
use crate::process::types::Process;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Running figures at the end of one tick
///
/// Averages cover what is known so far: wait over every process, turnaround
/// over finished ones, response over started ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickSample {
    pub tick: Tick,
    /// Process that held the CPU during the tick
    #[serde(with = "sentinel")]
    pub running_pid: Option<Pid>,
    pub ready_queue_length: usize,
    /// Busy ticks over elapsed ticks, as a percentage
    pub cpu_utilization: f64,
    /// Finished processes per elapsed tick
    pub throughput: f64,
    pub context_switches: u64,
    pub avg_wait_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
}

/// Bounded per-tick history
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MetricsHistory {
    samples: Vec<TickSample>,
    capacity: usize,
    busy_ticks: u64,
    truncated: bool,
}

impl MetricsHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::new(),
            capacity,
            busy_ticks: 0,
            truncated: false,
        }
    }

    /// Sample the table after tick `now` ran `ran`
    ///
    /// Busy time keeps accumulating after the history is full.
    pub fn record(
        &mut self,
        now: Tick,
        ran: Option<Pid>,
        ready_queue_length: usize,
        context_switches: u64,
        processes: &[Process],
    ) {
        if ran.is_some() {
            self.busy_ticks += 1;
        }
        if self.samples.len() >= self.capacity {
            if !self.truncated {
                warn!(capacity = self.capacity, "metrics history full, no longer recording");
                self.truncated = true;
            }
            return;
        }

        let elapsed = f64::from(now) + 1.0;
        let finished: Vec<&Process> = processes.iter().filter(|p| p.is_terminated()).collect();
        let started: Vec<u32> = processes.iter().filter_map(|p| p.response_time).collect();

        self.samples.push(TickSample {
            tick: now,
            running_pid: ran,
            ready_queue_length,
            cpu_utilization: self.busy_ticks as f64 / elapsed * 100.0,
            throughput: finished.len() as f64 / elapsed,
            context_switches,
            avg_wait_time: mean(processes.iter().map(|p| p.wait_time)),
            avg_turnaround_time: mean(finished.iter().map(|p| p.turnaround_time)),
            avg_response_time: mean(started.iter().copied()),
        });
    }

    pub fn samples(&self) -> &[TickSample] {
        &self.samples
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.busy_ticks = 0;
        self.truncated = false;
    }
}

fn mean(values: impl Iterator<Item = u32>) -> f64 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| (sum + u64::from(v), count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
