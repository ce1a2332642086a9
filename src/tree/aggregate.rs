use super::arena::{NodeId, Tree};

/// Aggregate weights and sort children for the whole tree.
/// Call this after any tree modification, before placing.
pub fn prepare_tree<P>(tree: &mut Tree<P>) {
    let root = tree.root;
    prepare_subtree(tree, root);
}

/// Aggregate weights for every internal node under `node` (bottom-up), then
/// sort each node's children by weight (descending).
///
/// Leaf weights are authoritative and never touched. After this, every
/// internal node's `weight` equals the sum of its leaf descendants.
pub fn prepare_subtree<P>(tree: &mut Tree<P>, node: NodeId) {
    let mut visited = 0usize;
    let mut internal = 0usize;

    if node == tree.root {
        // Process nodes in reverse order (children before parents) since
        // children always have higher indices than their parents in the arena.
        // This is guaranteed by the add_child insertion order.
        for i in (0..tree.nodes.len()).rev() {
            visited += 1;
            internal += aggregate_node(tree, NodeId(i as u32)) as usize;
        }
    } else {
        // Reversed pre-order also visits every child before its parent.
        let order: Vec<NodeId> = tree.descendants(node).collect();
        for &id in order.iter().rev() {
            visited += 1;
            internal += aggregate_node(tree, id) as usize;
        }
    }

    tracing::debug!(
        "Prepared subtree {:?}: {} nodes ({} internal), weight={}",
        node,
        visited,
        internal,
        tree.get(node).weight
    );
}

/// Sum and sort the direct children of one node whose children are already
/// prepared. Returns false for leaves, which are left as they are.
fn aggregate_node<P>(tree: &mut Tree<P>, id: NodeId) -> bool {
    if tree.get(id).is_leaf() {
        return false;
    }

    let mut children = std::mem::take(&mut tree.nodes[id.index()].children);

    let mut total = 0.0;
    for child in &children {
        total += tree.nodes[child.index()].weight;
    }

    // Stable, so equal weights keep insertion order
    children.sort_by(|a, b| {
        tree.nodes[b.index()]
            .weight
            .total_cmp(&tree.nodes[a.index()].weight)
    });

    let n = &mut tree.nodes[id.index()];
    n.weight = total;
    n.children = children;
    true
}

/// Sum of the leaf weights under `node`, computed without touching the tree.
/// A leaf returns its own weight.
pub fn total_weight<P>(tree: &Tree<P>, node: NodeId) -> f64 {
    tree.leaves(node).map(|id| tree.get(id).weight).sum()
}
