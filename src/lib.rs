/*!
 * CPU Scheduling Simulator Library
 * Tick-driven engine for classical CPU scheduling algorithms
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod workload;

// Re-exports
pub use crate::core::{
    AgingConfig, CoreId, Pid, Priority, SchedulerConfig, SchedulerError, SchedulerResult, Tick,
};
pub use monitoring::{init_tracing, Metrics};
pub use process::{GanttEntry, Process, ProcessState, ProcessView, Scheduler, SchedulerSnapshot};
pub use scheduler::Algorithm;
pub use workload::{ProcessSpec, Workload};
