/*!
 * Algorithm Comparison
 * Run one workload under every algorithm on independent engines
 */

use super::metrics::Metrics;
use crate::core::config::SchedulerConfig;
use crate::core::errors::SchedulerResult;
use crate::process::scheduler::{GanttEntry, Scheduler, SchedulerStats};
use crate::process::types::ProcessView;
use crate::scheduler::Algorithm;
use crate::workload::Workload;
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of one algorithm on the shared workload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub algorithm: Algorithm,
    pub completed: bool,
    pub metrics: Metrics,
    pub context_switches: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<RunDetail>,
}

/// Per-process and Gantt detail of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunDetail {
    pub processes: Vec<ProcessView>,
    pub gantt: Vec<GanttEntry>,
}

/// Metrics of `workload` under each algorithm, in algorithm id order
pub fn compare(workload: &Workload, config: &SchedulerConfig) -> SchedulerResult<Vec<ComparisonResult>> {
    run_all(workload, config, false)
}

/// Like [`compare`], with process tables and Gantt histories attached
pub fn compare_detailed(
    workload: &Workload,
    config: &SchedulerConfig,
) -> SchedulerResult<Vec<ComparisonResult>> {
    run_all(workload, config, true)
}

/// Algorithm with the lowest average wait among completed runs
pub fn best_by_wait(results: &[ComparisonResult]) -> Option<Algorithm> {
    results
        .iter()
        .filter(|r| r.completed)
        .min_by(|a, b| a.metrics.avg_wait_time.total_cmp(&b.metrics.avg_wait_time))
        .map(|r| r.algorithm)
}

fn run_all(
    workload: &Workload,
    config: &SchedulerConfig,
    detailed: bool,
) -> SchedulerResult<Vec<ComparisonResult>> {
    let results = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let mut scheduler = Scheduler::from_config(SchedulerConfig {
                algorithm,
                ..config.clone()
            });
            workload.load_into(&mut scheduler)?;

            let completed = scheduler.run_to_completion();
            if !completed {
                warn!(%algorithm, "comparison run did not complete");
            }

            let stats: SchedulerStats = scheduler.stats();
            Ok(ComparisonResult {
                algorithm,
                completed,
                metrics: scheduler.metrics().copied().unwrap_or_default(),
                context_switches: stats.context_switches,
                detail: detailed.then(|| RunDetail {
                    processes: scheduler.process_views(),
                    gantt: scheduler.gantt().to_vec(),
                }),
            })
        })
        .collect::<SchedulerResult<Vec<_>>>()?;

    info!(runs = results.len(), "algorithm comparison finished");
    Ok(results)
}
