/*!
 * Engine Benchmarks
 * Full runs per algorithm and snapshot serialization cost
 */

use cpu_sched_sim::{Algorithm, ProcessSpec, Scheduler, Workload};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Deterministic mixed workload: staggered arrivals, varied bursts and priorities
fn workload(count: usize) -> Workload {
    let specs = (0..count as i64)
        .map(|i| ProcessSpec::new(i * 2, 1 + (i * 7) % 13, (i * 3) % 5))
        .collect();
    Workload::from_specs(specs)
}

fn loaded(algorithm: Algorithm, workload: &Workload) -> Scheduler {
    let mut scheduler = Scheduler::builder()
        .with_algorithm(algorithm)
        .with_time_quantum(3)
        .build();
    workload.load_into(&mut scheduler).unwrap();
    scheduler
}

fn bench_run_to_completion(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_to_completion");
    let workload = workload(50);

    for algorithm in Algorithm::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.as_str()),
            &algorithm,
            |b, &algorithm| {
                b.iter(|| {
                    let mut scheduler = loaded(algorithm, &workload);
                    black_box(scheduler.run_to_completion())
                });
            },
        );
    }

    group.finish();
}

fn bench_workload_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("srtf_scaling");

    for count in [10, 25, 50, 100] {
        let workload = workload(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &workload, |b, workload| {
            b.iter(|| {
                let mut scheduler = loaded(Algorithm::Srtf, workload);
                black_box(scheduler.run_to_completion())
            });
        });
    }

    group.finish();
}

fn bench_state_json(c: &mut Criterion) {
    let mut scheduler = loaded(Algorithm::RoundRobin, &workload(50));
    scheduler.run_to_completion();

    c.bench_function("state_json", |b| {
        b.iter(|| black_box(scheduler.state_json().unwrap()))
    });
}

criterion_group!(
    benches,
    bench_run_to_completion,
    bench_workload_scaling,
    bench_state_json,
);

criterion_main!(benches);
