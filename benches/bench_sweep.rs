use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};

use fftbench::sweep::Sweep;
use fftbench::{Registry, TimeUnit};

// Plans are built outside the timed loop; what is measured is one prepared
// transform execution, including the copy into backend buffers and the
// canonical conversion, identically for every backend.
fn bench_sweep(c: &mut Criterion) {
    let registry = Registry::detect();
    let sweep = Sweep::from_env();

    for (point, trials) in sweep.matrix(&registry) {
        let signal = point.signal();
        let mut group = c.benchmark_group(format!("rfft_{}", point.size));
        if point.unit == TimeUnit::Millis {
            group.sampling_mode(SamplingMode::Flat);
            group.sample_size(10);
        }
        for trial in trials {
            let mut plan = match trial.backend.plan(point.size, trial.strategy) {
                Ok(plan) => plan,
                Err(err) => {
                    eprintln!("{}: {err}", trial.label());
                    continue;
                }
            };
            group.bench_function(BenchmarkId::new(trial.label(), point.size), |b| {
                b.iter(|| plan.execute(&signal).unwrap())
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
