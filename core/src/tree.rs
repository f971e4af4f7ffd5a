//! Unbalanced binary search tree fed by the LCG stream.
//!
//! Insertion walks child slots iteratively, and counting, depth and drop use
//! explicit stacks, so a degenerate tree as deep as its node count never
//! touches the call-stack limit.

use crate::lcg::Lcg;
use tracing::debug;

#[derive(Debug)]
pub struct Node {
    value: i64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }
}

/// Left subtree values are strictly less than the node value; everything
/// else (duplicates included) goes right.
#[derive(Debug, Default)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Tree {
    pub const fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Always adds exactly one node; there is no dedup.
    pub fn insert(&mut self, value: i64) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value { &mut node.left } else { &mut node.right };
        }
        *slot = Some(Box::new(Node::leaf(value)));
    }

    pub fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let Some(left) = node.left() {
                stack.push((left, level + 1));
            }
            if let Some(right) = node.right() {
                stack.push((right, level + 1));
            }
        }
        deepest
    }

    /// Values in traversal order; non-decreasing whenever the ordering invariant holds.
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = Vec::new();
        let mut cursor = self.root();
        while cursor.is_some() || !stack.is_empty() {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left();
            }
            if let Some(node) = stack.pop() {
                out.push(node.value);
                cursor = node.right();
            }
        }
        out
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl Extend<i64> for Tree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Insert `count` values drawn from `lcg`, in generation order, into a fresh tree.
pub fn build_tree(count: usize, lcg: &mut Lcg) -> Tree {
    let mut tree = Tree::new();
    for _ in 0..count {
        tree.insert(lcg.next_value());
    }
    tree
}

/// Build from the default seed and return the node count.
pub fn run(count: usize) -> usize {
    let mut lcg = Lcg::new();
    let tree = build_tree(count, &mut lcg);
    let nodes = tree.count_nodes();
    debug!(count, nodes, depth = tree.depth(), "tree built");
    nodes
}
