/*!
 * Workloads
 * Process sets for the engine: the demo sample and JSON documents
 */

use crate::core::config::SchedulerConfig;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Pid;
use crate::process::scheduler::Scheduler;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Inputs of one process, as a driver supplies them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    #[serde(alias = "arrivalTime")]
    pub arrival: i64,
    #[serde(alias = "burstTime")]
    pub burst: i64,
    #[serde(default)]
    pub priority: i64,
}

impl ProcessSpec {
    pub const fn new(arrival: i64, burst: i64, priority: i64) -> Self {
        Self {
            arrival,
            burst,
            priority,
        }
    }
}

/// A process set with optional engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SchedulerConfig>,
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    pub fn from_specs(processes: Vec<ProcessSpec>) -> Self {
        Self {
            config: None,
            processes,
        }
    }

    /// Five-process demonstration workload
    pub fn sample() -> Self {
        Self::from_specs(vec![
            ProcessSpec::new(0, 5, 2),
            ProcessSpec::new(1, 3, 1),
            ProcessSpec::new(2, 8, 3),
            ProcessSpec::new(3, 6, 2),
            ProcessSpec::new(4, 4, 1),
        ])
    }

    pub fn from_json(json: &str) -> SchedulerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SchedulerResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SchedulerError::Workload(format!("{}: {}", path.display(), e)))?;
        let workload = Self::from_json(&json)?;
        info!(path = %path.display(), processes = workload.processes.len(), "workload loaded");
        Ok(workload)
    }

    /// Add every process to `scheduler`, in order
    ///
    /// Stops at the first rejected process; earlier ones stay added.
    pub fn load_into(&self, scheduler: &mut Scheduler) -> SchedulerResult<Vec<Pid>> {
        self.processes
            .iter()
            .map(|spec| scheduler.add_process(spec.arrival, spec.burst, spec.priority))
            .collect()
    }

    /// Fresh engine built from the embedded configuration (or `fallback`) and loaded
    pub fn build_scheduler(&self, fallback: &SchedulerConfig) -> SchedulerResult<Scheduler> {
        let config = self.config.clone().unwrap_or_else(|| fallback.clone());
        let mut scheduler = Scheduler::from_config(config);
        self.load_into(&mut scheduler)?;
        Ok(scheduler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Algorithm;

    #[test]
    fn test_sample_workload() {
        let mut scheduler = Scheduler::default();
        let pids = Workload::sample().load_into(&mut scheduler).unwrap();
        assert_eq!(pids, vec![0, 1, 2, 3, 4]);
        assert_eq!(scheduler.process(2).unwrap().burst, 8);
    }

    #[test]
    fn test_document_with_aliases_and_config() {
        let workload = Workload::from_json(
            r#"{
                "config": {"algorithm": "srtf"},
                "processes": [
                    {"arrival": 0, "burst": 4},
                    {"arrivalTime": 2, "burstTime": 1, "priority": 3}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(workload.processes[0].priority, 0);
        assert_eq!(workload.processes[1], ProcessSpec::new(2, 1, 3));

        let scheduler = workload.build_scheduler(&SchedulerConfig::default()).unwrap();
        assert_eq!(scheduler.algorithm(), Algorithm::Srtf);
        assert_eq!(scheduler.process_count(), 2);
    }

    #[test]
    fn test_malformed_document() {
        let err = Workload::from_json(r#"{"processes": [{"burst": 2}]}"#).unwrap_err();
        assert!(matches!(err, SchedulerError::Workload(_)));
    }

    #[test]
    fn test_unbounded_process_limit_builds() {
        let json = format!(
            r#"{{"config": {{"max_processes": {}}}, "processes": [{{"arrival": 0, "burst": 1}}]}}"#,
            usize::MAX
        );
        let workload = Workload::from_json(&json).unwrap();
        let mut scheduler = workload.build_scheduler(&SchedulerConfig::default()).unwrap();

        assert_eq!(scheduler.max_processes(), usize::MAX);
        assert!(scheduler.run_to_completion());
    }

    #[test]
    fn test_invalid_process_surfaces() {
        let workload = Workload::from_specs(vec![ProcessSpec::new(0, 2, 0), ProcessSpec::new(0, 0, 0)]);
        let err = workload
            .build_scheduler(&SchedulerConfig::default())
            .unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidInput { field: "burst", .. }));
    }
}
