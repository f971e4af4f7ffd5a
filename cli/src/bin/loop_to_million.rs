fn main() -> anyhow::Result<()> {
    cpubench_cli::run_workload("loop_to_million")
}
