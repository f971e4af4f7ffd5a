fn main() -> anyhow::Result<()> {
    cpubench_cli::run_workload("binary_tree")
}
