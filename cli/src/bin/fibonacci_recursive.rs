fn main() -> anyhow::Result<()> {
    cpubench_cli::run_workload("fibonacci_recursive")
}
