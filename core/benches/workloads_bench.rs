use cpubench_core::lcg::Lcg;
use cpubench_core::perf::scenarios::prepare_workloads;
use cpubench_core::sizes::WorkloadSizes;
use cpubench_core::tree::Tree;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_standard_workloads(c: &mut Criterion) {
    let workloads = prepare_workloads(WorkloadSizes::STANDARD).expect("prepare workloads for benchmarking");
    let mut group = c.benchmark_group("standard");
    // Each standard run takes tens to hundreds of milliseconds.
    group.sample_size(10);
    for workload in workloads {
        group.bench_function(workload.bench_case_name(), |b| {
            b.iter(|| {
                let outcome = workload.run().expect("workload failed while benchmarking");
                black_box(outcome.value);
            });
        });
    }
    group.finish();
}

// Insert cost alone, with the value stream generated up front
fn bench_tree_insert(c: &mut Criterion) {
    let values: Vec<i64> = Lcg::new().take(WorkloadSizes::STANDARD.tree_count).collect();
    c.bench_function("tree_insert_only", |b| {
        b.iter(|| {
            let mut tree = Tree::new();
            tree.extend(values.iter().copied());
            black_box(tree.count_nodes());
        })
    });
}

criterion_group!(workloads, bench_standard_workloads, bench_tree_insert);
criterion_main!(workloads);
