#[cfg(test)]
mod tests {
    use crate::*;
    use cpubench_core::sizes::WorkloadSizes;

    #[test]
    fn test_env_toggle_disabled_values() {
        for raw in ["", "  ", "0", "false", "FALSE", "off", " Off "] {
            assert!(!env_toggle_enabled(raw), "{:?} should disable tracing", raw);
        }
    }

    #[test]
    fn test_env_toggle_enabled_values() {
        for raw in ["1", "true", "on", "cpubench_core=trace"] {
            assert!(env_toggle_enabled(raw), "{:?} should enable tracing", raw);
        }
    }

    #[test]
    fn test_filter_expr_uses_default_for_plain_toggles() {
        assert_eq!(filter_expr_from("1"), None);
        assert_eq!(filter_expr_from("TRUE"), None);
        assert_eq!(filter_expr_from(" on "), None);
    }

    #[test]
    fn test_filter_expr_passes_custom_directives() {
        assert_eq!(
            filter_expr_from(" cpubench_core=trace "),
            Some("cpubench_core=trace".to_string())
        );
    }

    #[test]
    fn test_emit_writes_one_line_per_workload() {
        let sizes = WorkloadSizes {
            tree_count: 64,
            fib_n: 10,
            matrix_size: 4,
            sieve_limit: 30,
            loop_iterations: 10,
        };
        let workloads = prepare_workloads(sizes).expect("small sizes are valid");
        let mut buf: Vec<u8> = Vec::new();
        for workload in &workloads {
            emit(&mut buf, workload).expect("emit summary");
        }
        let text = String::from_utf8(buf).expect("utf8 output");
        assert_eq!(
            text,
            "Tree nodes: 64\nFib(10) = 55\nMatrix 4x4 sum: 80\nPrimes up to 30: 10\nLoop sum: 10\n"
        );
    }
}
