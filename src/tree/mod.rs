pub mod aggregate;
pub mod arena;
pub mod random;

use std::fmt::Write;

pub use self::aggregate::{prepare_subtree, prepare_tree, total_weight};
pub use self::arena::{Node, NodeId, Tree};

impl<P> Tree<P> {
    /// Indented text dump of the subtree under `node`, two spaces per level.
    /// Internal nodes print as `\` followed by their weight, leaves as their weight.
    pub fn outline(&self, node: NodeId) -> String {
        let mut out = String::new();
        let base = self.get(node).depth;
        for id in self.descendants(node) {
            let n = self.get(id);
            let indent = (n.depth - base) as usize * 2;
            // Writing into a String cannot fail
            let _ = if n.is_leaf() {
                writeln!(out, "{:indent$}{}", "", n.weight, indent = indent)
            } else {
                writeln!(out, "{:indent$}\\ {}", "", n.weight, indent = indent)
            };
        }
        out
    }
}
