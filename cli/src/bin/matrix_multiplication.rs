fn main() -> anyhow::Result<()> {
    cpubench_cli::run_workload("matrix_multiplication")
}
