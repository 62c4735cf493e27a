/*!
 * schedsim - CPU Scheduling Simulator
 *
 * Thin driver around the engine:
 * - load the sample workload or a JSON workload file
 * - run to completion (or a fixed number of ticks)
 * - print the process table, Gantt history, and metrics
 */

use clap::Parser;
use cpu_sched_sim::monitoring::{best_by_wait, compare};
use cpu_sched_sim::{init_tracing, Algorithm, Scheduler, SchedulerConfig, Workload};
use miette::IntoDiagnostic;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "schedsim", version, about = "Simulate classical CPU scheduling algorithms")]
struct Opts {
    /// Algorithm name or id (fcfs=0 sjf=1 srtf=2 priority=3 rr=4 ljf=5 lrtf=6)
    #[clap(short = 'a', long, env = "SCHEDSIM_ALGORITHM")]
    algorithm: Option<Algorithm>,

    /// Round Robin time quantum
    #[clap(short = 'q', long)]
    quantum: Option<i64>,

    /// Enable aging with this interval (ticks)
    #[clap(long)]
    aging: Option<i64>,

    /// Load the built-in five-process sample
    #[clap(short = 's', long, conflicts_with = "workload")]
    sample: bool,

    /// Load processes (and optional config) from a JSON file
    #[clap(short = 'w', long)]
    workload: Option<PathBuf>,

    /// Stop after this many ticks instead of running to completion
    #[clap(long)]
    steps: Option<u32>,

    /// Run the workload under every algorithm and compare
    #[clap(long)]
    compare: bool,

    /// Print JSON instead of tables
    #[clap(long)]
    json: bool,
}

fn main() -> miette::Result<()> {
    init_tracing();
    let opts = Opts::parse();

    let workload = match &opts.workload {
        Some(path) => Workload::from_path(path)?,
        None if opts.sample => Workload::sample(),
        None => {
            eprintln!("No workload given; pass --sample or --workload FILE");
            return Ok(());
        }
    };

    let mut config = workload
        .config
        .clone()
        .unwrap_or_default()
        .with_env_overrides();
    apply_opts(&opts, &mut config);

    if opts.compare {
        let results = compare(&workload, &config)?;
        if opts.json {
            println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
        } else {
            print_comparison(&results);
        }
        return Ok(());
    }

    let mut scheduler = workload.build_scheduler(&config)?;
    match opts.steps {
        Some(steps) => {
            for _ in 0..steps {
                if !scheduler.step() {
                    break;
                }
            }
        }
        None => {
            scheduler.run_to_completion();
        }
    }
    info!(
        ticks = scheduler.current_time(),
        completed = scheduler.is_completed(),
        "run finished"
    );

    if opts.json {
        let snapshot = scheduler.snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot).into_diagnostic()?);
    } else {
        print_run(&scheduler);
    }
    Ok(())
}

fn apply_opts(opts: &Opts, config: &mut SchedulerConfig) {
    if let Some(algorithm) = opts.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(quantum) = opts.quantum {
        config.time_quantum = cpu_sched_sim::core::config::clamp_quantum(quantum);
    }
    if let Some(interval) = opts.aging {
        config.aging = Some(cpu_sched_sim::AgingConfig::new(interval));
    }
}

fn print_run(scheduler: &Scheduler) {
    println!(
        "Algorithm: {}  Quantum: {}  Time: {}  Completed: {}",
        scheduler.algorithm(),
        scheduler.time_quantum(),
        scheduler.current_time(),
        scheduler.is_completed()
    );

    println!();
    println!(
        "{:>4} {:>7} {:>5} {:>4} {:>6} {:>5} {:>6} {:>4} {:>5} {:>4}  {}",
        "PID", "Arrival", "Burst", "Prio", "Remain", "Start", "Finish", "Wait", "Resp", "TAT", "State"
    );
    for p in scheduler.processes() {
        println!(
            "{:>4} {:>7} {:>5} {:>4} {:>6} {:>5} {:>6} {:>4} {:>5} {:>4}  {}",
            format!("P{}", p.pid),
            p.arrival,
            p.burst,
            p.priority,
            p.remaining,
            show(p.start_time),
            show(p.finish_time),
            p.wait_time,
            show(p.response_time),
            p.turnaround_time,
            p.state.name()
        );
    }

    println!();
    println!("Gantt:");
    let mut line = String::new();
    for entry in scheduler.gantt() {
        let label = entry.pid.map_or_else(|| "idle".to_string(), |pid| format!("P{pid}"));
        line.push_str(&format!("| {} [{}-{}) ", label, entry.start_time, entry.end_time));
    }
    println!("{line}|");

    if !scheduler.ready_queue().is_empty() {
        println!("Ready queue: {:?}", scheduler.ready_queue());
    }

    if let Some(m) = scheduler.metrics() {
        println!();
        println!("Average wait time:       {:.2}", m.avg_wait_time);
        println!("Average turnaround time: {:.2}", m.avg_turnaround_time);
        println!("Average response time:   {:.2}", m.avg_response_time);
        println!("CPU utilization:         {:.2}%", m.cpu_utilization);
        println!("Throughput:              {:.4} processes/tick", m.throughput);
        println!("Idle time:               {}", m.total_idle_time);
        println!("Execution span:          {}", m.total_execution_time);
        println!("Context switches:        {}", scheduler.stats().context_switches);
    }
}

fn print_comparison(results: &[cpu_sched_sim::monitoring::ComparisonResult]) {
    println!(
        "{:<12} {:>9} {:>9} {:>9} {:>8} {:>10} {:>9}",
        "Algorithm", "AvgWait", "AvgTAT", "AvgResp", "CPU%", "Throughput", "Switches"
    );
    for r in results {
        let m = &r.metrics;
        println!(
            "{:<12} {:>9.2} {:>9.2} {:>9.2} {:>8.2} {:>10.4} {:>9}",
            r.algorithm.label(),
            m.avg_wait_time,
            m.avg_turnaround_time,
            m.avg_response_time,
            m.cpu_utilization,
            m.throughput,
            r.context_switches
        );
    }
    if let Some(best) = best_by_wait(results) {
        println!("\nLowest average wait: {best}");
    }
}

fn show(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
