/*!
 * CPU Scheduling Engine
 * Discrete-tick simulation of a single CPU under a pluggable policy
 */

use crate::core::config::{AgingConfig, SchedulerConfig};
use crate::core::limits::{MAX_EVENT_LOG_ENTRIES, MAX_METRICS_HISTORY_ENTRIES};
use crate::core::types::{Pid, Tick};
use crate::monitoring::{Metrics, MetricsHistory};
use crate::process::queue::ReadyQueue;
use crate::process::types::Process;
use crate::scheduler::Algorithm;
use tracing::info;

mod entry;
mod events;
mod operations;
mod policy;
mod snapshot;
mod stats;

use entry::GanttChart;
use events::EventLog;

pub use entry::GanttEntry;
pub use events::{EventKind, PreemptReason, SchedulerEvent};
pub use snapshot::SchedulerSnapshot;
pub use stats::SchedulerStats;

/// CPU scheduling engine
///
/// Owns the process table, ready queue, Gantt history and configuration. Each
/// [`Scheduler::step`] advances simulated time by one tick. Instances share
/// nothing; callers serialize access to a given instance.
#[derive(Debug, Clone)]
pub struct Scheduler {
    // Configuration the engine was built with; `reinit` returns to it
    base: SchedulerConfig,

    // Workload, indexed by pid
    processes: Vec<Process>,
    max_processes: usize,

    ready: ReadyQueue,
    gantt: GanttChart,
    events: EventLog,
    history: MetricsHistory,

    current_time: Tick,
    running: Option<Pid>,
    // Last process to hold the CPU, for context-switch accounting
    last_ran: Option<Pid>,

    algorithm: Algorithm,
    time_quantum: u32,
    quantum_remaining: u32,
    cores: u32,
    aging: Option<AgingConfig>,
    starvation_threshold: u32,
    tick_limit: Tick,

    completed: bool,
    metrics: Option<Metrics>,
    stats: SchedulerStats,
}

impl Scheduler {
    /// Create an engine running `algorithm` with default limits
    pub fn new(algorithm: Algorithm) -> Self {
        Self::from_config(SchedulerConfig {
            algorithm,
            ..SchedulerConfig::default()
        })
    }

    /// Create an engine from a full configuration (out-of-range values are clamped)
    pub fn from_config(config: SchedulerConfig) -> Self {
        let config = config.normalized();
        info!(
            algorithm = %config.algorithm,
            quantum = config.time_quantum,
            max_processes = config.max_processes,
            "scheduler initialized"
        );

        Self {
            processes: Vec::new(),
            max_processes: config.max_processes,
            ready: ReadyQueue::with_capacity(config.max_processes),
            gantt: GanttChart::with_capacity(config.max_gantt_entries),
            events: EventLog::with_capacity(MAX_EVENT_LOG_ENTRIES),
            history: MetricsHistory::with_capacity(MAX_METRICS_HISTORY_ENTRIES),
            current_time: 0,
            running: None,
            last_ran: None,
            algorithm: config.algorithm,
            time_quantum: config.time_quantum,
            quantum_remaining: 0,
            cores: config.cores,
            aging: config.aging,
            starvation_threshold: config.starvation_threshold,
            tick_limit: config.tick_limit,
            completed: false,
            metrics: None,
            stats: SchedulerStats::default(),
            base: config,
        }
    }

    /// Start building an engine
    pub fn builder() -> SchedulerBuilder {
        SchedulerBuilder::new()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::from_config(SchedulerConfig::default())
    }
}

/// Builder for [`Scheduler`]
#[derive(Debug, Clone, Default)]
pub struct SchedulerBuilder {
    config: SchedulerConfig,
}

impl SchedulerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Round Robin quantum; values below 1 become 1
    pub fn with_time_quantum(mut self, quantum: i64) -> Self {
        self.config.time_quantum = crate::core::config::clamp_quantum(quantum);
        self
    }

    pub fn with_cores(mut self, cores: i64) -> Self {
        self.config.cores = crate::core::config::clamp_cores(cores);
        self
    }

    /// Enable aging every `interval` ticks
    pub fn with_aging(mut self, interval: i64) -> Self {
        self.config.aging = Some(AgingConfig::new(interval));
        self
    }

    /// Workload capacity (also bounds the ready queue)
    pub fn with_max_processes(mut self, max: usize) -> Self {
        self.config.max_processes = max;
        self
    }

    pub fn with_gantt_capacity(mut self, max: usize) -> Self {
        self.config.max_gantt_entries = max;
        self
    }

    /// Tick bound for run-to-completion
    pub fn with_tick_limit(mut self, limit: Tick) -> Self {
        self.config.tick_limit = limit;
        self
    }

    pub fn with_starvation_threshold(mut self, threshold: u32) -> Self {
        self.config.starvation_threshold = threshold;
        self
    }

    pub fn build(self) -> Scheduler {
        Scheduler::from_config(self.config)
    }
}
