/*!
 * Kernel Event Log
 * Bounded record of what the engine did on each tick
 */

use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Serialize};

/// Why a running process lost the CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreemptReason {
    /// Round Robin quantum used up
    Quantum,
    /// A strictly better candidate under SRTF/LRTF
    Policy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    Arrive { pid: Pid },
    Preempt { pid: Pid, reason: PreemptReason },
    ContextSwitch { from_pid: Pid, to_pid: Pid },
    Dispatch { pid: Pid },
    Complete { pid: Pid },
    Idle,
    SimulationComplete,
}

/// Event stamped with the tick it happened on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerEvent {
    pub tick: Tick,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// Append-only log that stops growing at capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EventLog {
    events: Vec<SchedulerEvent>,
    capacity: usize,
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity,
        }
    }

    pub fn push(&mut self, tick: Tick, kind: EventKind) {
        if self.events.len() < self.capacity {
            self.events.push(SchedulerEvent { tick, kind });
        }
    }

    pub fn events(&self) -> &[SchedulerEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
