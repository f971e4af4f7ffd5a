use crate::{counting, fib, matrix, sieve, sizes::WorkloadSizes, tree};
use anyhow::{Context, Result, anyhow};
use tracing::debug;

pub struct WorkloadOutcome {
    pub value: i64,
    pub summary: String,
}

#[derive(Clone)]
pub struct PreparedWorkload {
    spec: &'static WorkloadScenario,
    sizes: WorkloadSizes,
}

impl PreparedWorkload {
    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn title(&self) -> &'static str {
        self.spec.title
    }

    pub fn sizes(&self) -> &WorkloadSizes {
        &self.sizes
    }

    pub fn bench_case_name(&self) -> String {
        format!("{}_native", self.spec.key)
    }

    /// Run the workload once and check the value against the reference, if any.
    pub fn run(&self) -> Result<WorkloadOutcome> {
        let value = (self.spec.run)(&self.sizes).with_context(|| format!("workload '{}' failed", self.spec.key))?;
        let expected = (self.spec.reference)(&self.sizes);
        if let Some(expected) = expected {
            if value != expected {
                return Err(anyhow!(
                    "workload '{}' expected {} but observed {}",
                    self.spec.key,
                    expected,
                    value
                ));
            }
        }
        debug!(workload = self.spec.key, value, verified = expected.is_some(), "workload finished");
        Ok(WorkloadOutcome {
            value,
            summary: (self.spec.summary)(&self.sizes, value),
        })
    }
}

struct WorkloadScenario {
    key: &'static str,
    title: &'static str,
    run: fn(&WorkloadSizes) -> Result<i64>,
    reference: fn(&WorkloadSizes) -> Option<i64>,
    summary: fn(&WorkloadSizes, i64) -> String,
}

const STANDARD_PRIME_COUNT: i64 = 664_579;

fn to_i64(value: impl TryInto<i64>, what: &str) -> Result<i64> {
    value
        .try_into()
        .map_err(|_| anyhow!("{} does not fit in i64", what))
}

fn run_tree(sizes: &WorkloadSizes) -> Result<i64> {
    to_i64(tree::run(sizes.tree_count), "tree node count")
}

fn run_fib(sizes: &WorkloadSizes) -> Result<i64> {
    Ok(fib::fib(sizes.fib_n))
}

fn run_matrix(sizes: &WorkloadSizes) -> Result<i64> {
    matrix::run(sizes.matrix_size)
}

fn run_sieve(sizes: &WorkloadSizes) -> Result<i64> {
    to_i64(sieve::run(sizes.sieve_limit)?, "prime count")
}

fn run_counting(sizes: &WorkloadSizes) -> Result<i64> {
    to_i64(counting::run(sizes.loop_iterations), "loop sum")
}

static WORKLOAD_SCENARIOS: &[WorkloadScenario] = &[
    WorkloadScenario {
        key: "binary_tree",
        title: "Unbalanced BST insert and count",
        run: run_tree,
        // Every insert adds exactly one node.
        reference: |sizes| i64::try_from(sizes.tree_count).ok(),
        summary: |_, nodes| format!("Tree nodes: {}", nodes),
    },
    WorkloadScenario {
        key: "fibonacci_recursive",
        title: "Naive recursive Fibonacci",
        run: run_fib,
        reference: |sizes| Some(fib::fib_reference(sizes.fib_n)),
        summary: |sizes, result| format!("Fib({}) = {}", sizes.fib_n, result),
    },
    WorkloadScenario {
        key: "matrix_multiplication",
        title: "Dense integer matrix product",
        run: run_matrix,
        reference: |sizes| matrix::closed_form_sum(sizes.matrix_size),
        summary: |sizes, sum| format!("Matrix {0}x{0} sum: {1}", sizes.matrix_size, sum),
    },
    WorkloadScenario {
        key: "prime_sieve",
        title: "Sieve of Eratosthenes prime count",
        run: run_sieve,
        reference: |sizes| (sizes.sieve_limit == WorkloadSizes::STANDARD.sieve_limit).then_some(STANDARD_PRIME_COUNT),
        summary: |sizes, count| format!("Primes up to {}: {}", sizes.sieve_limit, count),
    },
    WorkloadScenario {
        key: "loop_to_million",
        title: "Counting loop",
        run: run_counting,
        reference: |sizes| i64::try_from(sizes.loop_iterations).ok(),
        summary: |_, sum| format!("Loop sum: {}", sum),
    },
];

pub fn workload_keys() -> impl Iterator<Item = &'static str> {
    WORKLOAD_SCENARIOS.iter().map(|spec| spec.key)
}

pub fn prepare_workloads(sizes: WorkloadSizes) -> Result<Vec<PreparedWorkload>> {
    sizes.validate().context("invalid workload sizes")?;
    Ok(WORKLOAD_SCENARIOS
        .iter()
        .map(|spec| PreparedWorkload { spec, sizes })
        .collect())
}

pub fn find_workload(key: &str, sizes: WorkloadSizes) -> Result<PreparedWorkload> {
    prepare_workloads(sizes)?
        .into_iter()
        .find(|workload| workload.key() == key)
        .ok_or_else(|| {
            anyhow!(
                "unknown workload '{}'; expected one of: {}",
                key,
                workload_keys().collect::<Vec<_>>().join(", ")
            )
        })
}
