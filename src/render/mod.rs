//! Hand-off from the layout to an external renderer.

pub mod colors;

use bytemuck::{Pod, Zeroable};

use crate::render::colors::Rgba;
use crate::tree::arena::{NodeId, Tree};

/// One filled rectangle, laid out for direct upload as a GPU instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    /// min x, min y, max x, max y
    pub rect: [f32; 4],
    pub color: [f32; 4],
}

/// Pack every leaf under `node` (in layout order) into an instance,
/// coloring it from its payload.
///
/// Reads the rectangles as they are; run `place` first.
pub fn leaf_instances<P, F>(tree: &Tree<P>, node: NodeId, mut color_of: F) -> Vec<RectInstance>
where
    F: FnMut(&P) -> Rgba,
{
    let instances: Vec<RectInstance> = tree
        .leaves(node)
        .map(|id| {
            let leaf = tree.get(id);
            let r = leaf.rect;
            RectInstance {
                rect: [r.min[0], r.min[1], r.max[0], r.max[1]],
                color: color_of(&leaf.payload).to_array(),
            }
        })
        .collect();

    tracing::debug!("Packed {} leaf instances under {:?}", instances.len(), node);
    instances
}

/// Raw bytes of an instance slice, ready for a vertex/instance buffer write.
pub fn instance_bytes(instances: &[RectInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{place, PlaceOptions, Rect};
    use crate::tree::aggregate::prepare_tree;

    #[test]
    fn one_instance_per_leaf() {
        let mut tree = Tree::new(Rgba::new(0.0, 0.0, 0.0));
        let a = tree.add_child(tree.root, 0.0, Rgba::new(0.1, 0.1, 0.1));
        tree.add_child(a, 1.0, Rgba::new(1.0, 0.0, 0.0));
        tree.add_child(a, 1.0, Rgba::new(0.0, 1.0, 0.0));
        tree.add_child(tree.root, 2.0, Rgba::new(0.0, 0.0, 1.0));
        prepare_tree(&mut tree);
        let root = tree.root;
        place(&mut tree, root, Rect::from_size(200.0, 100.0), &PlaceOptions::default());

        let instances = leaf_instances(&tree, root, |c| *c);
        assert_eq!(instances.len(), 3);
        assert_eq!(instance_bytes(&instances).len(), 3 * 32);

        let area: f32 = instances
            .iter()
            .map(|i| (i.rect[2] - i.rect[0]) * (i.rect[3] - i.rect[1]))
            .sum();
        assert!((area - 20_000.0).abs() < 1e-2);
        assert!(instances.iter().all(|i| i.color[3] == 1.0));
    }
}
