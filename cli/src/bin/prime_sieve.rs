fn main() -> anyhow::Result<()> {
    cpubench_cli::run_workload("prime_sieve")
}
