/*!
 * Scheduler Core Operations
 * Workload setup, the tick protocol, and run control
 */

use super::events::{EventKind, PreemptReason};
use super::Scheduler;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Pid, Tick};
use crate::monitoring::Metrics;
use crate::process::types::Process;
use crate::scheduler::Preemption;
use tracing::{debug, info, trace, warn};

/// The only core the stepping logic dispatches to
const DISPATCH_CORE: u32 = 0;

impl Scheduler {
    /// Add a process to the workload and return its pid
    ///
    /// Pids are assigned sequentially from 0. Adding to a completed run reopens it.
    pub fn add_process(&mut self, arrival: i64, burst: i64, priority: i64) -> SchedulerResult<Pid> {
        if self.processes.len() >= self.max_processes {
            warn!(limit = self.max_processes, "process table full");
            return Err(SchedulerError::CapacityExceeded {
                resource: "process table",
                limit: self.max_processes,
            });
        }

        let pid = self.processes.len() as Pid;
        let process = Process::new(pid, arrival, burst, priority)?;
        debug!(pid, arrival, burst, priority, "process added");
        self.processes.push(process);

        if self.completed {
            self.completed = false;
            self.metrics = None;
        }
        Ok(pid)
    }

    /// Advance the simulation by one tick
    ///
    /// Returns true while work remains. An empty workload or a completed run
    /// makes this a no-op returning false.
    pub fn step(&mut self) -> bool {
        if self.completed || self.processes.is_empty() {
            return false;
        }

        let now = self.current_time;
        self.admit_arrivals(now);
        self.apply_aging(now);
        self.check_preemption(now);
        if self.running.is_none() {
            self.dispatch_next(now);
        }
        let ran = self.execute(now);
        self.account_waiting();
        self.check_starvation();
        self.history.record(
            now,
            ran,
            self.ready.len(),
            self.stats.context_switches,
            &self.processes,
        );

        self.current_time += 1;

        if self.processes.iter().all(Process::is_terminated) {
            self.complete();
        }

        !self.completed
    }

    /// Step until every process terminates or the tick limit is reached
    ///
    /// Hitting the limit is not an error; check [`Scheduler::is_completed`].
    pub fn run_to_completion(&mut self) -> bool {
        while !self.completed && self.current_time < self.tick_limit {
            if !self.step() {
                break;
            }
        }

        if !self.completed && !self.processes.is_empty() {
            warn!(
                tick_limit = self.tick_limit,
                current_time = self.current_time,
                "run halted before completion"
            );
        }
        self.completed
    }

    /// Clear run state but keep the workload
    pub fn reset(&mut self) {
        self.ready.clear();
        self.gantt.clear();
        self.events.clear();
        self.history.clear();
        self.current_time = 0;
        self.running = None;
        self.last_ran = None;
        self.quantum_remaining = 0;
        self.completed = false;
        self.metrics = None;
        self.stats = Default::default();

        for process in &mut self.processes {
            process.reset();
        }
        info!(processes = self.processes.len(), "scheduler reset");
    }

    /// Discard the workload and return to the configuration the engine was built with
    pub fn reinit(&mut self) {
        *self = Scheduler::from_config(self.base.clone());
    }

    /// Report ready processes whose wait reached the starvation threshold
    ///
    /// Observation only: nothing is boosted or flagged.
    pub fn check_starvation(&self) {
        for pid in self.ready.iter() {
            let process = &self.processes[pid as usize];
            if process.wait_time >= self.starvation_threshold {
                debug!(pid, wait_time = process.wait_time, "process starving");
            }
        }
    }

    // Tick phases

    fn admit_arrivals(&mut self, now: Tick) {
        for process in self.processes.iter_mut().filter(|p| p.has_arrived(now)) {
            if self.ready.push(process.pid) {
                process.admit();
                self.events.push(now, EventKind::Arrive { pid: process.pid });
                trace!(pid = process.pid, now, "process arrived");
            }
        }
    }

    fn apply_aging(&mut self, now: Tick) {
        let Some(aging) = self.aging else {
            return;
        };
        if now == 0 || now % aging.interval != 0 {
            return;
        }

        for pid in self.ready.iter() {
            self.processes[pid as usize].age();
        }
        trace!(now, ready = self.ready.len(), "aging applied");
    }

    fn check_preemption(&mut self, now: Tick) {
        let Some(running) = self.running else {
            return;
        };

        match self.algorithm.preemption() {
            Preemption::Never => {}
            Preemption::Quantum => {
                if self.quantum_remaining == 0 {
                    self.preempt(running, PreemptReason::Quantum, now);
                }
            }
            rule => {
                // Compare the selector's top pick against the current runner
                let Some(candidate) = self.algorithm.selector().select(&self.ready, &self.processes)
                else {
                    return;
                };
                let candidate_remaining = self.processes[candidate as usize].remaining;
                let running_remaining = self.processes[running as usize].remaining;
                if candidate != running && rule.favors(candidate_remaining, running_remaining) {
                    self.preempt(running, PreemptReason::Policy, now);
                }
            }
        }
    }

    fn preempt(&mut self, pid: Pid, reason: PreemptReason, now: Tick) {
        debug_assert!(!self.ready.contains(pid), "running pid {pid} also queued");
        self.processes[pid as usize].preempt();
        self.ready.push(pid);
        self.running = None;
        self.last_ran = Some(pid);
        self.stats.preemptions += 1;
        self.events.push(now, EventKind::Preempt { pid, reason });
        debug!(pid, ?reason, now, "process preempted");
    }

    fn dispatch_next(&mut self, now: Tick) {
        let Some(pid) = self.algorithm.selector().select(&self.ready, &self.processes) else {
            return;
        };

        self.ready.remove(pid);
        if let Some(previous) = self.last_ran.filter(|&prev| prev != pid) {
            self.stats.context_switches += 1;
            self.events.push(
                now,
                EventKind::ContextSwitch {
                    from_pid: previous,
                    to_pid: pid,
                },
            );
        }

        let first = self.processes[pid as usize].dispatch(now);
        self.running = Some(pid);
        self.stats.dispatches += 1;
        if self.algorithm.preemption() == Preemption::Quantum {
            self.quantum_remaining = self.time_quantum;
        }

        self.events.push(now, EventKind::Dispatch { pid });
        debug!(pid, now, first, "process dispatched");
    }

    /// Run the CPU for tick `now`; returns the pid that executed, if any
    fn execute(&mut self, now: Tick) -> Option<Pid> {
        let Some(pid) = self.running else {
            self.gantt.record(None, now, now + 1, DISPATCH_CORE);
            self.stats.idle_ticks += 1;
            self.events.push(now, EventKind::Idle);
            return None;
        };

        if self.algorithm.preemption() == Preemption::Quantum {
            self.quantum_remaining = self.quantum_remaining.saturating_sub(1);
        }
        self.gantt.record(Some(pid), now, now + 1, DISPATCH_CORE);

        let process = &mut self.processes[pid as usize];
        if process.execute(now) {
            debug!(
                pid,
                finish = now + 1,
                turnaround = process.turnaround_time,
                wait = process.wait_time,
                "process terminated"
            );
            self.running = None;
            self.last_ran = Some(pid);
            self.events.push(now, EventKind::Complete { pid });
        }
        Some(pid)
    }

    fn account_waiting(&mut self) {
        for pid in self.ready.iter() {
            self.processes[pid as usize].wait_time += 1;
        }
    }

    fn complete(&mut self) {
        let metrics = Metrics::compute(&self.processes);
        self.completed = true;
        self.metrics = Some(metrics);
        self.events
            .push(self.current_time, EventKind::SimulationComplete);
        info!(
            algorithm = %self.algorithm,
            ticks = self.current_time,
            avg_wait = metrics.avg_wait_time,
            avg_turnaround = metrics.avg_turnaround_time,
            utilization = metrics.cpu_utilization,
            "simulation complete"
        );
    }
}
