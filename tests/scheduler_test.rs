/*!
 * Scheduler Tests
 * End-to-end runs of every policy through the public engine API
 */

use cpu_sched_sim::process::EventKind;
use cpu_sched_sim::{Algorithm, Pid, ProcessState, Scheduler, SchedulerError, Tick};
use pretty_assertions::assert_eq;

fn engine(algorithm: Algorithm, workload: &[(i64, i64, i64)]) -> Scheduler {
    let mut scheduler = Scheduler::new(algorithm);
    for &(arrival, burst, priority) in workload {
        scheduler.add_process(arrival, burst, priority).unwrap();
    }
    scheduler
}

fn spans(scheduler: &Scheduler) -> Vec<(Option<Pid>, Tick, Tick)> {
    scheduler
        .gantt()
        .iter()
        .map(|e| (e.pid, e.start_time, e.end_time))
        .collect()
}

#[test]
fn test_fcfs_runs_in_arrival_order() {
    let mut s = engine(Algorithm::Fcfs, &[(0, 5, 2), (1, 3, 1)]);
    assert!(s.run_to_completion());

    assert_eq!(spans(&s), vec![(Some(0), 0, 5), (Some(1), 5, 8)]);
    assert_eq!(s.process(0).unwrap().wait_time, 0);
    assert_eq!(s.process(1).unwrap().wait_time, 4);
    assert_eq!(s.process(1).unwrap().response_time, Some(4));
    assert_eq!(s.process(1).unwrap().turnaround_time, 7);

    let m = s.metrics().copied().unwrap();
    assert_eq!(m.avg_wait_time, 2.0);
    assert_eq!(m.avg_turnaround_time, 6.0);
    assert_eq!(m.avg_response_time, 2.0);
    assert_eq!(m.cpu_utilization, 100.0);
    assert_eq!(m.throughput, 0.25);
    assert_eq!(m.total_idle_time, 0);
    assert_eq!(m.total_execution_time, 8);
}

#[test]
fn test_srtf_preempts_longer_runner() {
    let mut s = engine(Algorithm::Srtf, &[(0, 8, 0), (1, 4, 0)]);
    s.run_to_completion();

    assert_eq!(
        spans(&s),
        vec![(Some(0), 0, 1), (Some(1), 1, 5), (Some(0), 5, 12)]
    );
    assert!(s
        .events()
        .iter()
        .any(|e| e.tick == 1 && matches!(e.kind, EventKind::Preempt { pid: 0, .. })));
    assert_eq!(s.stats().context_switches, 2);
}

#[test]
fn test_srtf_tie_does_not_preempt() {
    let mut s = engine(Algorithm::Srtf, &[(0, 4, 0), (1, 3, 0)]);
    s.run_to_completion();

    // At tick 1 both have 3 remaining
    assert_eq!(spans(&s), vec![(Some(0), 0, 4), (Some(1), 4, 7)]);
    assert_eq!(s.stats().preemptions, 0);
}

#[test]
fn test_round_robin_alternates_slices() {
    let mut s = Scheduler::builder()
        .with_algorithm(Algorithm::RoundRobin)
        .with_time_quantum(2)
        .build();
    s.add_process(0, 5, 0).unwrap();
    s.add_process(0, 3, 0).unwrap();
    s.run_to_completion();

    assert_eq!(
        spans(&s),
        vec![
            (Some(0), 0, 2),
            (Some(1), 2, 4),
            (Some(0), 4, 6),
            (Some(1), 6, 7),
            (Some(0), 7, 8),
        ]
    );
    assert_eq!(s.process(1).unwrap().finish_time, Some(7));
    assert_eq!(s.process(0).unwrap().finish_time, Some(8));
}

#[test]
fn test_empty_workload_stays_open() {
    let mut s = Scheduler::new(Algorithm::Srtf);
    for _ in 0..3 {
        assert!(!s.step());
    }
    assert!(!s.run_to_completion());
    assert!(!s.is_completed());
    assert_eq!(s.current_time(), 0);
    assert!(s.metrics().is_none());
}

#[test]
fn test_capacity_leaves_table_unchanged() {
    let mut s = Scheduler::builder().with_max_processes(3).build();
    for _ in 0..3 {
        s.add_process(0, 2, 0).unwrap();
    }
    let before = s.processes().to_vec();

    let err = s.add_process(0, 2, 0).unwrap_err();
    assert!(matches!(err, SchedulerError::CapacityExceeded { limit: 3, .. }));
    assert_eq!(s.processes(), before.as_slice());
}

#[test]
fn test_sjf_picks_shortest_burst_without_preempting() {
    let mut s = engine(Algorithm::Sjf, &[(0, 6, 0), (1, 4, 0), (2, 2, 0)]);
    s.run_to_completion();

    assert_eq!(
        spans(&s),
        vec![(Some(0), 0, 6), (Some(2), 6, 8), (Some(1), 8, 12)]
    );
}

#[test]
fn test_priority_lower_value_first_with_fifo_ties() {
    let mut s = engine(Algorithm::Priority, &[(0, 3, 2), (0, 2, 1), (0, 1, 1)]);
    s.run_to_completion();

    assert_eq!(
        spans(&s),
        vec![(Some(1), 0, 2), (Some(2), 2, 3), (Some(0), 3, 6)]
    );
}

#[test]
fn test_ljf_picks_first_of_longest() {
    let mut s = engine(Algorithm::Ljf, &[(0, 2, 0), (0, 5, 0), (0, 5, 0)]);
    s.run_to_completion();

    assert_eq!(
        spans(&s),
        vec![(Some(1), 0, 5), (Some(2), 5, 10), (Some(0), 10, 12)]
    );
}

#[test]
fn test_lrtf_preempts_for_longer_remaining() {
    let mut s = engine(Algorithm::Lrtf, &[(0, 2, 0), (1, 5, 0)]);
    s.run_to_completion();

    // At tick 5 both have 1 remaining, so P1 keeps the CPU
    assert_eq!(
        spans(&s),
        vec![(Some(0), 0, 1), (Some(1), 1, 6), (Some(0), 6, 7)]
    );
    assert_eq!(s.stats().preemptions, 1);
}

#[test]
fn test_single_running_process_per_tick() {
    let mut s = engine(Algorithm::Srtf, &[(0, 7, 0), (2, 3, 0), (3, 1, 0), (9, 2, 0)]);
    while s.step() {
        let running = s
            .processes()
            .iter()
            .filter(|p| p.state == ProcessState::Running)
            .count();
        assert!(running <= 1);
        assert_eq!(s.running_pid().is_some(), running == 1);
    }
}

#[test]
fn test_runs_are_deterministic() {
    let workload = [(0, 5, 2), (1, 3, 1), (2, 8, 3), (3, 6, 2), (4, 4, 1)];
    for algorithm in Algorithm::ALL {
        let mut a = engine(algorithm, &workload);
        let mut b = engine(algorithm, &workload);
        a.run_to_completion();
        b.run_to_completion();

        assert_eq!(a.gantt(), b.gantt(), "{algorithm}");
        assert_eq!(a.processes(), b.processes(), "{algorithm}");
    }
}

#[test]
fn test_reset_then_rerun_matches_first_run() {
    let mut s = Scheduler::builder()
        .with_algorithm(Algorithm::Priority)
        .with_aging(2)
        .build();
    for &(arrival, burst, priority) in &[(0, 6, 3), (1, 2, 1), (2, 4, 5)] {
        s.add_process(arrival, burst, priority).unwrap();
    }

    s.run_to_completion();
    let gantt = s.gantt().to_vec();
    let processes = s.processes().to_vec();

    s.reset();
    s.reset();
    s.run_to_completion();
    assert_eq!(s.gantt(), gantt.as_slice());
    assert_eq!(s.processes(), processes.as_slice());
}

#[test]
fn test_gantt_stops_recording_at_capacity() {
    let mut s = Scheduler::builder()
        .with_algorithm(Algorithm::RoundRobin)
        .with_time_quantum(1)
        .with_gantt_capacity(2)
        .build();
    s.add_process(0, 2, 0).unwrap();
    s.add_process(0, 2, 0).unwrap();

    assert!(s.run_to_completion());
    assert_eq!(spans(&s), vec![(Some(0), 0, 1), (Some(1), 1, 2)]);
    assert!(s.is_gantt_truncated());
    assert_eq!(s.process(1).unwrap().finish_time, Some(4));
}

#[test]
fn test_snapshot_json_fields() {
    let mut s = engine(Algorithm::Fcfs, &[(0, 2, 0), (3, 1, 0)]);
    s.step();

    let value: serde_json::Value = serde_json::from_str(&s.state_json().unwrap()).unwrap();
    assert_eq!(value["currentTime"], 1);
    assert_eq!(value["runningPid"], 0);
    assert_eq!(value["isCompleted"], false);
    assert_eq!(value["algorithm"], 0);
    assert_eq!(value["processes"][1]["startTime"], -1);
    assert_eq!(value["processes"][1]["stateName"], "NEW");
    assert_eq!(value["metrics"]["avgWaitTime"], 0.0);

    s.run_to_completion();
    let gantt: serde_json::Value = serde_json::from_str(&s.gantt_json().unwrap()).unwrap();
    assert_eq!(gantt[1]["pid"], -1);
    assert_eq!(gantt[1]["startTime"], 2);
    assert_eq!(gantt[1]["endTime"], 3);
}

#[test]
fn test_metrics_history_tracks_running_figures() {
    let mut s = engine(Algorithm::Fcfs, &[(0, 2, 0), (0, 1, 0)]);
    assert!(s.run_to_completion());

    let history = s.metrics_history();
    assert_eq!(history.len(), 3);
    let ticks: Vec<(Tick, Option<Pid>, usize, u64)> = history
        .iter()
        .map(|h| (h.tick, h.running_pid, h.ready_queue_length, h.context_switches))
        .collect();
    assert_eq!(
        ticks,
        vec![(0, Some(0), 1, 0), (1, Some(0), 1, 0), (2, Some(1), 0, 1)]
    );

    assert_eq!(history[0].avg_wait_time, 0.5);
    assert_eq!(history[0].avg_turnaround_time, 0.0);
    assert_eq!(history[1].throughput, 0.5);
    assert_eq!(history[1].avg_turnaround_time, 2.0);
    assert_eq!(history[2].avg_turnaround_time, 2.5);
    assert_eq!(history[2].avg_response_time, 1.0);
    assert!(history.iter().all(|h| h.cpu_utilization == 100.0));

    s.reset();
    assert!(s.metrics_history().is_empty());
    assert!(s.events().is_empty());
}
