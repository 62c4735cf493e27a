/*!
 * Process Module
 * Process records, the ready queue, and the scheduling engine
 */

pub mod queue;
pub mod scheduler;
pub mod types;

// Re-export for convenience
pub use queue::ReadyQueue;
pub use scheduler::{
    EventKind, GanttEntry, PreemptReason, Scheduler, SchedulerBuilder, SchedulerEvent,
    SchedulerSnapshot, SchedulerStats,
};
pub use types::{Process, ProcessState, ProcessView};
