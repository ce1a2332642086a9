use crate::layout::Rect;

/// Index into the arena `Vec<Node<P>>`. Uses u32 to save memory (supports up to ~4 billion nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node in the weighted tree, stored in a flat arena.
#[derive(Debug, Clone)]
pub struct Node<P> {
    pub(crate) weight: f64,
    /// Rectangle assigned by `place` (zero-sized until the first layout)
    pub rect: Rect,
    /// Opaque data carried through for the renderer
    pub payload: P,
    /// Parent node index (None for root)
    pub parent: Option<NodeId>,
    /// Depth in the tree (root = 0). Cannot overflow: it is below the node count.
    pub depth: u32,
    pub(crate) children: Vec<NodeId>,
}

impl<P> Node<P> {
    fn new(weight: f64, payload: P) -> Self {
        Self {
            weight,
            rect: Rect::ZERO,
            payload,
            parent: None,
            depth: 0,
            children: Vec::new(),
        }
    }

    /// For leaves: caller-supplied weight. For internal nodes: sum of children,
    /// as of the last `prepare_tree`. Only leaves can be set, via `Tree::set_leaf_weight`.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// A node without children is a leaf, whatever its weight.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct children, in their current order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A weighted tree stored as a flat arena of nodes.
///
/// Children are always appended after their parent, so a child's index is
/// greater than its parent's.
#[derive(Debug, Clone)]
pub struct Tree<P> {
    /// All nodes in contiguous memory
    pub nodes: Vec<Node<P>>,
    /// Root node index
    pub root: NodeId,
}

impl<P> Tree<P> {
    /// Create a tree holding only a root node with weight 0.
    pub fn new(root_payload: P) -> Self {
        Tree {
            nodes: vec![Node::new(0.0, root_payload)],
            root: NodeId(0),
        }
    }

    /// Append a child under the given parent. Returns the new node's ID.
    ///
    /// The weight is authoritative only while the new node stays a leaf.
    pub fn add_child(&mut self, parent: NodeId, weight: f64, payload: P) -> NodeId {
        let new_id = NodeId(self.nodes.len() as u32);
        let mut node = Node::new(weight, payload);
        node.parent = Some(parent);
        node.depth = self.nodes[parent.index()].depth + 1;

        self.nodes[parent.index()].children.push(new_id);
        self.nodes.push(node);
        new_id
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> &Node<P> {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<P> {
        &mut self.nodes[id.index()]
    }

    /// Set the weight of a leaf. Returns false (and changes nothing) for
    /// internal nodes, whose weight is derived from their children.
    pub fn set_leaf_weight(&mut self, id: NodeId, weight: f64) -> bool {
        let node = &mut self.nodes[id.index()];
        if !node.is_leaf() {
            return false;
        }
        node.weight = weight;
        true
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty (only root).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[parent.index()].children.iter().copied()
    }

    /// Pre-order walk over `node` and everything below it.
    pub fn descendants(&self, node: NodeId) -> Descendants<'_, P> {
        Descendants {
            tree: self,
            stack: vec![node],
        }
    }

    /// Leaves under `node` (the node itself if it is a leaf), in layout order.
    pub fn leaves(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(node).filter(move |&id| self.get(id).is_leaf())
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a, P> {
    tree: &'a Tree<P>,
    stack: Vec<NodeId>,
}

impl<'a, P> Iterator for Descendants<'a, P> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Reversed so the first child is visited first
        self.stack
            .extend(self.tree.nodes[id.index()].children.iter().rev().copied());
        Some(id)
    }
}
