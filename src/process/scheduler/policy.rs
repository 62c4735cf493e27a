/*!
 * Scheduler Policy Management
 * Handle dynamic algorithm, quantum, core, and aging changes
 */

use super::Scheduler;
use crate::core::config::{clamp_cores, clamp_quantum, AgingConfig};
use crate::core::types::Tick;
use crate::scheduler::Algorithm;
use tracing::info;

impl Scheduler {
    /// Change the scheduling algorithm
    ///
    /// Takes effect on the next tick; queued processes keep their queue order.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if algorithm == self.algorithm {
            return;
        }
        info!(from = %self.algorithm, to = %algorithm, "scheduling algorithm changed");
        self.algorithm = algorithm;
    }

    /// Set the Round Robin quantum; non-positive values clamp to 1
    pub fn set_time_quantum(&mut self, quantum: i64) {
        self.time_quantum = clamp_quantum(quantum);
        info!(quantum = self.time_quantum, "time quantum updated");
    }

    /// Set the core count; values outside 1..=8 fall back to 1
    ///
    /// Only core 0 is ever dispatched to.
    pub fn set_cores(&mut self, cores: i64) {
        self.cores = clamp_cores(cores);
        info!(cores = self.cores, "core count updated");
    }

    /// Boost every ready process's priority once per `interval` ticks
    pub fn enable_aging(&mut self, interval: i64) {
        let aging = AgingConfig::new(interval);
        info!(interval = aging.interval, "aging enabled");
        self.aging = Some(aging);
    }

    pub fn disable_aging(&mut self) {
        if self.aging.take().is_some() {
            info!("aging disabled");
        }
    }

    /// Bound on ticks for [`Scheduler::run_to_completion`]
    pub fn set_tick_limit(&mut self, limit: Tick) {
        self.tick_limit = limit;
    }

    pub fn set_starvation_threshold(&mut self, threshold: u32) {
        self.starvation_threshold = threshold;
    }
}
