#[cfg(test)]
mod tests {
    use crate::{
        lcg::Lcg,
        tree::{self, Tree, build_tree},
    };

    #[test]
    fn test_empty_tree_counts_zero() {
        let tree = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.count_nodes(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(tree.in_order().is_empty());
        assert_eq!(tree::run(0), 0);
    }

    #[test]
    fn test_insert_routes_less_left_and_rest_right() {
        let mut tree = Tree::new();
        tree.extend([50, 30, 70, 50, 29]);

        let root = tree.root().expect("root present");
        assert_eq!(root.value(), 50);
        let left = root.left().expect("left child");
        assert_eq!(left.value(), 30);
        assert_eq!(left.left().map(|n| n.value()), Some(29));
        let right = root.right().expect("right child");
        assert_eq!(right.value(), 70);
        // The duplicate 50 is not less than 50, so it lands in the right subtree.
        assert_eq!(right.left().map(|n| n.value()), Some(50));
        assert_eq!(tree.count_nodes(), 5);
    }

    #[test]
    fn test_duplicates_each_add_a_node() {
        let mut tree = Tree::new();
        for _ in 0..1_000 {
            tree.insert(7);
        }
        assert_eq!(tree.count_nodes(), 1_000);
        assert_eq!(tree.depth(), 1_000);
    }

    #[test]
    fn test_degenerate_chain_is_stack_safe() {
        // Sorted input produces a right-leaning chain as deep as the node count.
        let mut tree = Tree::new();
        tree.extend(0..20_000);
        assert_eq!(tree.count_nodes(), 20_000);
        assert_eq!(tree.depth(), 20_000);
        drop(tree);
    }

    #[test]
    fn test_in_order_is_sorted() {
        let mut lcg = Lcg::new();
        let tree = build_tree(5_000, &mut lcg);
        let values = tree.in_order();
        assert_eq!(values.len(), 5_000);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));

        let mut expected: Vec<i64> = Lcg::new().take(5_000).collect();
        expected.sort_unstable();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_build_tree_consumes_exactly_count_values() {
        let mut lcg = Lcg::new();
        let _ = build_tree(10, &mut lcg);
        let mut reference = Lcg::new();
        for _ in 0..10 {
            reference.next_value();
        }
        assert_eq!(lcg, reference);
    }

    #[test]
    fn test_node_count_matches_insert_count() {
        for count in [1, 2, 17, 1_000, 25_000] {
            assert_eq!(tree::run(count), count);
        }
    }

    #[test]
    fn test_standard_tree_shape() {
        let mut lcg = Lcg::new();
        let tree = build_tree(100_000, &mut lcg);
        assert_eq!(tree.count_nodes(), 100_000);
        assert_eq!(tree.depth(), 40);
        assert_eq!(tree.root().map(|n| n.value()), Some(87_628_878));
    }
}
