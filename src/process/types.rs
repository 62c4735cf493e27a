/*!
 * Process Types
 * Process control block, lifecycle state, and the flat record handed to renderers
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::serde::sentinel;
use crate::core::types::{Pid, Priority, Tick};
use serde::{Deserialize, Serialize};

/// Process lifecycle state
///
/// NEW -> READY -> RUNNING -> TERMINATED, with RUNNING -> READY on preemption.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Created, arrival time not reached yet
    New = 0,
    /// Waiting in the ready queue
    Ready = 1,
    /// Holding the CPU
    Running = 2,
    /// Burst fully consumed
    Terminated = 3,
}

impl ProcessState {
    /// Display name used by renderers
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Terminated => "TERMINATED",
        }
    }

    /// Numeric wire code
    #[inline(always)]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Whether the lifecycle allows moving from `self` to `to`
    pub const fn can_transition_to(&self, to: ProcessState) -> bool {
        matches!(
            (self, to),
            (Self::New, Self::Ready)
                | (Self::Ready, Self::Running)
                | (Self::Running, Self::Ready)
                | (Self::Running, Self::Terminated)
        )
    }
}

/// Process control block
///
/// Inputs (`arrival`, `burst`, `base_priority`) are fixed at creation. Everything
/// else is run state owned by the engine and restored by [`Process::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub arrival: Tick,
    pub burst: u32,
    pub base_priority: Priority,
    /// Effective priority; aging lowers it towards 0
    pub priority: Priority,
    pub remaining: u32,
    pub start_time: Option<Tick>,
    pub finish_time: Option<Tick>,
    pub wait_time: u32,
    pub response_time: Option<u32>,
    pub turnaround_time: u32,
    pub state: ProcessState,
}

impl Process {
    /// Validate inputs and build a process in the NEW state
    pub fn new(pid: Pid, arrival: i64, burst: i64, priority: i64) -> SchedulerResult<Self> {
        let arrival = non_negative("arrival", arrival)?;
        let priority = non_negative("priority", priority)?;
        if burst <= 0 {
            return Err(SchedulerError::InvalidInput {
                field: "burst",
                value: burst,
            });
        }
        let burst = non_negative("burst", burst)?;

        Ok(Self {
            pid,
            arrival,
            burst,
            base_priority: priority,
            priority,
            remaining: burst,
            start_time: None,
            finish_time: None,
            wait_time: 0,
            response_time: None,
            turnaround_time: 0,
            state: ProcessState::New,
        })
    }

    /// Restore run state to its creation values
    pub fn reset(&mut self) {
        self.priority = self.base_priority;
        self.remaining = self.burst;
        self.start_time = None;
        self.finish_time = None;
        self.wait_time = 0;
        self.response_time = None;
        self.turnaround_time = 0;
        self.state = ProcessState::New;
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, ProcessState::Ready)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ProcessState::Running)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, ProcessState::Terminated)
    }

    /// Whether the process should enter the ready queue at `now`
    #[inline]
    pub fn has_arrived(&self, now: Tick) -> bool {
        self.state == ProcessState::New && self.arrival <= now
    }

    /// NEW -> READY
    pub(crate) fn admit(&mut self) {
        self.transition(ProcessState::Ready);
    }

    /// READY -> RUNNING; returns true on the first dispatch ever
    pub(crate) fn dispatch(&mut self, now: Tick) -> bool {
        self.transition(ProcessState::Running);
        if self.start_time.is_some() {
            return false;
        }
        self.start_time = Some(now);
        self.response_time = Some(now - self.arrival);
        true
    }

    /// RUNNING -> READY
    pub(crate) fn preempt(&mut self) {
        self.transition(ProcessState::Ready);
    }

    /// Consume one tick of CPU starting at `now`; returns true if the burst is done
    pub(crate) fn execute(&mut self, now: Tick) -> bool {
        debug_assert!(self.is_running(), "pid {} executed while {:?}", self.pid, self.state);
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return false;
        }

        let finish = now + 1;
        self.transition(ProcessState::Terminated);
        self.finish_time = Some(finish);
        self.turnaround_time = finish - self.arrival;
        self.wait_time = self.turnaround_time - self.burst;
        true
    }

    /// One aging step: raise effective priority by one level, floored at 0
    pub(crate) fn age(&mut self) {
        self.priority = self.priority.saturating_sub(1);
    }

    fn transition(&mut self, to: ProcessState) {
        debug_assert!(
            self.state.can_transition_to(to),
            "invalid transition for pid {}: {:?} -> {:?}",
            self.pid,
            self.state,
            to
        );
        self.state = to;
    }
}

fn non_negative(field: &'static str, value: i64) -> SchedulerResult<u32> {
    u32::try_from(value).map_err(|_| SchedulerError::InvalidInput { field, value })
}

/// Flat, field-named process record for renderers and embedding layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessView {
    pub pid: Pid,
    pub arrival_time: Tick,
    pub burst_time: u32,
    pub priority: Priority,
    pub remaining_time: u32,
    #[serde(with = "sentinel")]
    pub start_time: Option<Tick>,
    #[serde(with = "sentinel")]
    pub finish_time: Option<Tick>,
    pub wait_time: u32,
    #[serde(with = "sentinel")]
    pub response_time: Option<u32>,
    pub turnaround_time: u32,
    pub state: u8,
    pub state_name: String,
}

impl From<&Process> for ProcessView {
    fn from(p: &Process) -> Self {
        Self {
            pid: p.pid,
            arrival_time: p.arrival,
            burst_time: p.burst,
            priority: p.priority,
            remaining_time: p.remaining,
            start_time: p.start_time,
            finish_time: p.finish_time,
            wait_time: p.wait_time,
            response_time: p.response_time,
            turnaround_time: p.turnaround_time,
            state: p.state.code(),
            state_name: p.state.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_defaults() {
        let p = Process::new(0, 2, 5, 1).unwrap();
        assert_eq!(p.state, ProcessState::New);
        assert_eq!(p.remaining, 5);
        assert_eq!(p.start_time, None);
        assert_eq!(p.finish_time, None);
        assert_eq!(p.response_time, None);
        assert_eq!(p.wait_time, 0);
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(
            Process::new(0, 0, 0, 0),
            Err(SchedulerError::InvalidInput {
                field: "burst",
                value: 0
            })
        );
        assert!(Process::new(0, 0, -3, 0).is_err());
        assert!(Process::new(0, -1, 4, 0).is_err());
        assert!(Process::new(0, 0, 4, -2).is_err());
    }

    #[test]
    fn test_lifecycle_records_timing() {
        let mut p = Process::new(0, 1, 2, 0).unwrap();
        p.admit();
        assert!(p.dispatch(3));
        assert_eq!(p.start_time, Some(3));
        assert_eq!(p.response_time, Some(2));

        assert!(!p.execute(3));
        p.preempt();
        assert!(!p.dispatch(6), "second dispatch must not touch start time");
        assert_eq!(p.start_time, Some(3));

        assert!(p.execute(6));
        assert!(p.is_terminated());
        assert_eq!(p.finish_time, Some(7));
        assert_eq!(p.turnaround_time, 6);
        assert_eq!(p.wait_time, 4);
    }

    #[test]
    fn test_reset_restores_run_state() {
        let mut p = Process::new(0, 0, 1, 3).unwrap();
        let fresh = p.clone();
        p.admit();
        p.age();
        p.dispatch(0);
        p.execute(0);
        p.reset();
        assert_eq!(p, fresh);
    }

    #[test]
    fn test_aging_floors_at_zero() {
        let mut p = Process::new(0, 0, 1, 1).unwrap();
        p.age();
        p.age();
        assert_eq!(p.priority, 0);
        assert_eq!(p.base_priority, 1);
    }

    #[test]
    fn test_transition_table() {
        assert!(ProcessState::New.can_transition_to(ProcessState::Ready));
        assert!(ProcessState::Running.can_transition_to(ProcessState::Ready));
        assert!(!ProcessState::Terminated.can_transition_to(ProcessState::Ready));
        assert!(!ProcessState::New.can_transition_to(ProcessState::Running));
    }

    #[test]
    fn test_view_uses_wire_names() {
        let p = Process::new(4, 0, 3, 2).unwrap();
        let json = serde_json::to_value(ProcessView::from(&p)).unwrap();
        assert_eq!(json["pid"], 4);
        assert_eq!(json["burstTime"], 3);
        assert_eq!(json["startTime"], -1);
        assert_eq!(json["state"], 0);
        assert_eq!(json["stateName"], "NEW");
    }
}
