//! Seeded random trees for demos and tests.

use compact_str::{format_compact, CompactString};

use super::arena::{NodeId, Tree};
use crate::render::colors::{hsv_to_rgb, Rgba};

/// Seed used by the `debug-layout` binary when none is given.
pub const DEMO_SEED: u32 = 1_245_136;

/// xorshift32 generator. Deterministic for a given seed; not for anything
/// security related.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift.
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Demo payload: a dotted path label and a fill color.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub label: CompactString,
    pub color: Rgba,
}

/// Build a random tree whose leaves all sit `depth` levels below the root.
///
/// Internal nodes get 1..=9 children, leaves a weight in [1, 10). Colors
/// lose saturation towards the root. Weights of internal nodes are left at
/// 0; run `prepare_tree` before placing.
pub fn random_tree(rng: &mut Xorshift32, depth: u32) -> Tree<Swatch> {
    let mut tree = Tree::new(Swatch {
        label: CompactString::new("root"),
        color: Rgba::new(0.0, 0.0, 0.0),
    });
    let root = tree.root;
    fill(&mut tree, root, depth, rng);

    tracing::debug!(
        "Generated random tree: depth={}, {} nodes, {} leaves",
        depth,
        tree.len(),
        tree.leaves(root).count()
    );
    tree
}

fn fill(tree: &mut Tree<Swatch>, node: NodeId, depth: u32, rng: &mut Xorshift32) {
    let saturation = (1.0 - 0.45 * depth as f32).clamp(0.0, 1.0);
    tree.get_mut(node).payload.color = hsv_to_rgb(rng.next_f32(), saturation, 1.0);

    if depth == 0 {
        tree.get_mut(node).weight = (rng.next_f32() * 9.0 + 1.0) as f64;
        return;
    }

    let n = rng.next_u32() % 9 + 1;
    for i in 0..n {
        let label = if node == tree.root {
            format_compact!("{}", i)
        } else {
            format_compact!("{}.{}", tree.get(node).payload.label, i)
        };
        let child = tree.add_child(
            node,
            0.0,
            Swatch {
                label,
                color: Rgba::new(0.0, 0.0, 0.0),
            },
        );
        fill(tree, child, depth - 1, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_tree() {
        let a = random_tree(&mut Xorshift32::new(DEMO_SEED), 3);
        let b = random_tree(&mut Xorshift32::new(DEMO_SEED), 3);
        assert_eq!(a.outline(a.root), b.outline(b.root));
        let pa: Vec<_> = a.nodes.iter().map(|n| n.payload.clone()).collect();
        let pb: Vec<_> = b.nodes.iter().map(|n| n.payload.clone()).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn zero_seed_still_produces_values() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn shape_and_weights_stay_in_range() {
        let mut rng = Xorshift32::new(7);
        let tree = random_tree(&mut rng, 3);

        for node in &tree.nodes {
            if node.is_leaf() {
                assert_eq!(node.depth, 3);
                assert!((1.0..10.0).contains(&node.weight), "weight {}", node.weight);
            } else {
                assert!((1..=9).contains(&node.children().len()));
            }
        }
    }

    #[test]
    fn depth_zero_is_a_single_leaf() {
        let tree = random_tree(&mut Xorshift32::new(3), 0);
        assert_eq!(tree.len(), 1);
        assert!(tree.get(tree.root).weight >= 1.0);
    }

    #[test]
    fn labels_are_dotted_paths() {
        let tree = random_tree(&mut Xorshift32::new(11), 2);
        let first = tree.children(tree.root).next().unwrap();
        let grandchild = tree.children(first).next().unwrap();
        assert_eq!(tree.get(first).payload.label, "0");
        assert_eq!(tree.get(grandchild).payload.label, "0.0");
    }
}
