/*!
 * Gantt History
 * Coalesced intervals of CPU occupancy
 */

use crate::core::serde::sentinel;
use crate::core::types::{CoreId, Pid, Tick};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One interval of occupancy on a core; `pid == None` is idle time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttEntry {
    #[serde(with = "sentinel")]
    pub pid: Option<Pid>,
    pub start_time: Tick,
    pub end_time: Tick,
    pub core_id: CoreId,
}

impl GanttEntry {
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end_time - self.start_time
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pid.is_none()
    }
}

/// Append-only, fixed-capacity Gantt history
///
/// Abutting slices for the same pid on the same core extend the last entry.
/// Once full, nothing more is recorded (no eviction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GanttChart {
    entries: Vec<GanttEntry>,
    capacity: usize,
    truncated: bool,
}

impl GanttChart {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            truncated: false,
        }
    }

    pub fn record(&mut self, pid: Option<Pid>, start: Tick, end: Tick, core_id: CoreId) {
        if self.entries.len() >= self.capacity {
            if !self.truncated {
                warn!(capacity = self.capacity, "gantt history full, no longer recording");
                self.truncated = true;
            }
            return;
        }

        if let Some(last) = self.entries.last_mut() {
            if last.pid == pid && last.end_time == start && last.core_id == core_id {
                last.end_time = end;
                return;
            }
        }

        self.entries.push(GanttEntry {
            pid,
            start_time: start,
            end_time: end,
            core_id,
        });
    }

    pub fn entries(&self) -> &[GanttEntry] {
        &self.entries
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.truncated = false;
    }
}
