use std::io::Write;
use std::sync::Once;

use anyhow::Context;
use cpubench_core::{
    perf::scenarios::{PreparedWorkload, find_workload, prepare_workloads},
    sizes::WorkloadSizes,
};
use tracing::info;

#[cfg(test)]
mod lib_test;

static PERF_TRACE_INIT: Once = Once::new();
const TRACE_ENV: &str = "CPUBENCH_TRACE";
const DEFAULT_TRACE_FILTER: &str = "cpubench_core=debug,cpubench_cli=info";

/// `CPUBENCH_TRACE` is off when empty or one of `0`, `false`, `off` (any case);
/// every other value turns tracing on.
pub(crate) fn env_toggle_enabled(raw: &str) -> bool {
    let value = raw.trim();
    !value.is_empty() && !["0", "false", "off"].iter().any(|off| value.eq_ignore_ascii_case(off))
}

/// Plain switches (`1`, `true`, `on`) fall back to the default filter; anything
/// else is handed to `EnvFilter` as a directive string.
pub(crate) fn filter_expr_from(raw: &str) -> Option<String> {
    let value = raw.trim();
    let plain_switch = value.is_empty() || ["1", "true", "on"].iter().any(|on| value.eq_ignore_ascii_case(on));
    (!plain_switch).then(|| value.to_string())
}

/// Install a stderr subscriber when `CPUBENCH_TRACE` is set. Stdout stays reserved
/// for the summary lines.
pub fn maybe_init_perf_tracing() {
    let raw = match std::env::var(TRACE_ENV) {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    PERF_TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

pub(crate) fn emit(out: &mut impl Write, workload: &PreparedWorkload) -> anyhow::Result<()> {
    info!(workload = workload.key(), title = workload.title(), "running workload");
    let outcome = workload.run()?;
    writeln!(out, "{}", outcome.summary).context("write summary line")?;
    out.flush().context("flush stdout")?;
    Ok(())
}

/// Entry point shared by the per-workload binaries.
pub fn run_workload(key: &str) -> anyhow::Result<()> {
    maybe_init_perf_tracing();
    let workload = find_workload(key, WorkloadSizes::STANDARD)?;
    emit(&mut std::io::stdout().lock(), &workload)
}

/// Run every workload in table order, one summary line each.
pub fn run_suite() -> anyhow::Result<()> {
    maybe_init_perf_tracing();
    let workloads = prepare_workloads(WorkloadSizes::STANDARD)?;
    let mut out = std::io::stdout().lock();
    for workload in &workloads {
        emit(&mut out, workload)?;
    }
    Ok(())
}
