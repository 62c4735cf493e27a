/*!
 * Simulator Limits and Constants
 *
 * Centralized location for capacities, defaults, and tuning knobs.
 * Everything here is a default: engines take the effective value from
 * `SchedulerConfig`.
 */

use super::types::Tick;

// =============================================================================
// WORKLOAD LIMITS
// =============================================================================

/// Maximum processes a single engine accepts by default
pub const DEFAULT_MAX_PROCESSES: usize = 100;

/// Maximum coalesced Gantt entries recorded before truncation
pub const DEFAULT_MAX_GANTT_ENTRIES: usize = 1000;

/// Maximum kernel events recorded before the log stops growing
pub const MAX_EVENT_LOG_ENTRIES: usize = 10_000;

/// Most recent kernel events carried in a state snapshot
pub const SNAPSHOT_KERNEL_LOG_ENTRIES: usize = 50;

/// Maximum per-tick metric samples recorded before the history stops growing
pub const MAX_METRICS_HISTORY_ENTRIES: usize = 10_000;

// =============================================================================
// CPU CONFIGURATION
// =============================================================================

/// Highest accepted core count; only core 0 is ever dispatched to
pub const MAX_CORES: u32 = 8;

/// Default core count
pub const DEFAULT_CORES: u32 = 1;

// =============================================================================
// SCHEDULING DEFAULTS
// =============================================================================

/// Default Round Robin time quantum (ticks)
pub const DEFAULT_TIME_QUANTUM: u32 = 2;

/// Default aging interval (ticks between priority boosts)
pub const DEFAULT_AGING_INTERVAL: Tick = 5;

/// Wait time at which a ready process is reported as starving
pub const DEFAULT_STARVATION_THRESHOLD: u32 = 10;

/// Hard bound on ticks for run-to-completion
pub const DEFAULT_TICK_LIMIT: Tick = 10_000;
