/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (assigned sequentially from 0, never reused)
pub type Pid = u32;

/// Simulated time, in abstract ticks
pub type Tick = u32;

/// Scheduling priority (lower value = scheduled first)
pub type Priority = u32;

/// CPU core index
pub type CoreId = u32;

/// Wire value for an absent pid (idle CPU) or a timing field not yet recorded
pub const UNSET: i64 = -1;
