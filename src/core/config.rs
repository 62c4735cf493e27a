/*!
 * Simulator Configuration
 *
 * Runtime configuration for a scheduling engine, with environment overrides
 */

use super::limits::{
    DEFAULT_AGING_INTERVAL, DEFAULT_CORES, DEFAULT_MAX_GANTT_ENTRIES, DEFAULT_MAX_PROCESSES,
    DEFAULT_STARVATION_THRESHOLD, DEFAULT_TICK_LIMIT, DEFAULT_TIME_QUANTUM, MAX_CORES,
};
use super::types::Tick;
use crate::scheduler::Algorithm;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Aging configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingConfig {
    /// Ticks between priority boosts
    pub interval: Tick,
}

impl AgingConfig {
    /// Non-positive intervals fall back to the default
    pub fn new(interval: i64) -> Self {
        let interval = Tick::try_from(interval)
            .ok()
            .filter(|&i| i > 0)
            .unwrap_or(DEFAULT_AGING_INTERVAL);
        Self { interval }
    }
}

impl Default for AgingConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_AGING_INTERVAL,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub algorithm: Algorithm,
    pub time_quantum: u32,
    pub cores: u32,
    pub aging: Option<AgingConfig>,
    pub max_processes: usize,
    pub max_gantt_entries: usize,
    pub tick_limit: Tick,
    pub starvation_threshold: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Fcfs,
            time_quantum: DEFAULT_TIME_QUANTUM,
            cores: DEFAULT_CORES,
            aging: None,
            max_processes: DEFAULT_MAX_PROCESSES,
            max_gantt_entries: DEFAULT_MAX_GANTT_ENTRIES,
            tick_limit: DEFAULT_TICK_LIMIT,
            starvation_threshold: DEFAULT_STARVATION_THRESHOLD,
        }
    }
}

impl SchedulerConfig {
    /// Apply `SCHEDSIM_*` environment overrides
    ///
    /// Environment variables:
    /// - SCHEDSIM_ALGORITHM: algorithm name or id
    /// - SCHEDSIM_QUANTUM: Round Robin quantum
    /// - SCHEDSIM_AGING_INTERVAL: enables aging with this interval
    /// - SCHEDSIM_TICK_LIMIT: run-to-completion bound
    ///
    /// Unparseable values are logged and ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(algorithm) = env_value::<Algorithm>("SCHEDSIM_ALGORITHM") {
            self.algorithm = algorithm;
        }
        if let Some(quantum) = env_value::<i64>("SCHEDSIM_QUANTUM") {
            self.time_quantum = clamp_quantum(quantum);
        }
        if let Some(interval) = env_value::<i64>("SCHEDSIM_AGING_INTERVAL") {
            self.aging = Some(AgingConfig::new(interval));
        }
        if let Some(limit) = env_value::<Tick>("SCHEDSIM_TICK_LIMIT") {
            self.tick_limit = limit;
        }
        self
    }

    /// Clamp out-of-range values the same way the engine setters do
    pub fn normalized(mut self) -> Self {
        self.time_quantum = self.time_quantum.max(1);
        self.cores = clamp_cores(i64::from(self.cores));
        if let Some(aging) = self.aging {
            self.aging = Some(AgingConfig::new(i64::from(aging.interval)));
        }
        self
    }
}

/// Quantum below 1 is raised to 1
pub fn clamp_quantum(quantum: i64) -> u32 {
    u32::try_from(quantum.max(1)).unwrap_or(u32::MAX)
}

/// Core counts outside 1..=MAX_CORES fall back to 1
pub fn clamp_cores(cores: i64) -> u32 {
    match u32::try_from(cores) {
        Ok(c) if (1..=MAX_CORES).contains(&c) => c,
        _ => DEFAULT_CORES,
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
