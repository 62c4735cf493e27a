/*!
 * Run Metrics
 * Aggregate performance figures derived from a finished process table
 */

use crate::process::types::Process;
use serde::{Deserialize, Serialize};

/// Aggregate metrics of a completed run
///
/// Computed once from the process table; never updated incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub avg_wait_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    /// Percentage of the execution span spent on bursts
    pub cpu_utilization: f64,
    /// Processes completed per tick of span
    pub throughput: f64,
    pub total_idle_time: i64,
    /// Latest finish minus earliest arrival
    pub total_execution_time: i64,
}

impl Metrics {
    /// Aggregate over every process in the table
    pub fn compute(processes: &[Process]) -> Self {
        if processes.is_empty() {
            return Self::default();
        }

        let count = processes.len() as f64;
        let mut total_wait = 0u64;
        let mut total_turnaround = 0u64;
        let mut total_response = 0u64;
        let mut total_burst = 0i64;
        let mut max_finish = 0i64;
        let mut min_arrival = i64::MAX;

        for p in processes {
            total_wait += u64::from(p.wait_time);
            total_turnaround += u64::from(p.turnaround_time);
            total_response += u64::from(p.response_time.unwrap_or(0));
            total_burst += i64::from(p.burst);
            if let Some(finish) = p.finish_time {
                max_finish = max_finish.max(i64::from(finish));
            }
            min_arrival = min_arrival.min(i64::from(p.arrival));
        }

        let span = max_finish - min_arrival;
        let (cpu_utilization, throughput) = if span > 0 {
            (
                total_burst as f64 / span as f64 * 100.0,
                count / span as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_wait_time: total_wait as f64 / count,
            avg_turnaround_time: total_turnaround as f64 / count,
            avg_response_time: total_response as f64 / count,
            cpu_utilization,
            throughput,
            total_idle_time: span - total_burst,
            total_execution_time: span,
        }
    }
}
