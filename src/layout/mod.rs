pub mod rect;
pub mod squarify;

use anyhow::{bail, ensure, Result};

use crate::tree::arena::{NodeId, Tree};

pub use self::rect::{Axis, Rect};
pub use self::squarify::{place, worst_aspect};

/// Options for `place`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceOptions {
    /// Inset applied on all four sides of every node's target rectangle,
    /// at every depth (px)
    pub padding: f32,
}

impl Default for PlaceOptions {
    fn default() -> Self {
        Self { padding: 0.0 }
    }
}

impl PlaceOptions {
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}

/// Optional input check for callers that want to reject data `place` would
/// turn into degenerate geometry.
///
/// Fails on non-finite or negative leaf weights, a target rectangle with
/// `min > max` or non-finite corners, negative or non-finite padding, and
/// padding that would invert the content of `node` itself. Padding deeper
/// in the tree depends on the weights and is not checked.
pub fn validate<P>(tree: &Tree<P>, node: NodeId, rect: Rect, options: &PlaceOptions) -> Result<()> {
    ensure!(
        rect.min.iter().chain(rect.max.iter()).all(|v| v.is_finite()),
        "target rect {:?} has non-finite corners",
        rect
    );
    ensure!(
        rect.width() >= 0.0 && rect.height() >= 0.0,
        "target rect {:?} is inverted",
        rect
    );
    ensure!(
        options.padding.is_finite() && options.padding >= 0.0,
        "padding must be a finite non-negative number, got {}",
        options.padding
    );
    ensure!(
        options.padding * 2.0 <= rect.width().min(rect.height()),
        "padding {} inverts a {:.1}x{:.1} rect",
        options.padding,
        rect.width(),
        rect.height()
    );

    for id in tree.leaves(node) {
        let weight = tree.get(id).weight;
        if !weight.is_finite() {
            bail!("leaf {:?} has non-finite weight {}", id, weight);
        }
        if weight < 0.0 {
            bail!("leaf {:?} has negative weight {}", id, weight);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(weights: &[f64]) -> Tree<()> {
        let mut tree = Tree::new(());
        for &w in weights {
            tree.add_child(tree.root, w, ());
        }
        tree
    }

    #[test]
    fn accepts_well_formed_input() {
        let tree = tree_with(&[1.0, 0.0, 3.5]);
        let options = PlaceOptions::default().with_padding(2.0);
        assert!(validate(&tree, tree.root, Rect::from_size(10.0, 10.0), &options).is_ok());
    }

    #[test]
    fn rejects_bad_weights() {
        let options = PlaceOptions::default();
        let rect = Rect::from_size(10.0, 10.0);

        let tree = tree_with(&[1.0, -2.0]);
        let err = validate(&tree, tree.root, rect, &options).unwrap_err();
        assert!(err.to_string().contains("negative weight"));

        let tree = tree_with(&[f64::NAN]);
        let err = validate(&tree, tree.root, rect, &options).unwrap_err();
        assert!(err.to_string().contains("non-finite weight"));
    }

    #[test]
    fn rejects_bad_rect_and_padding() {
        let tree = tree_with(&[1.0]);
        let options = PlaceOptions::default();

        assert!(validate(&tree, tree.root, Rect::new(10.0, 0.0, 0.0, 10.0), &options).is_err());
        assert!(validate(
            &tree,
            tree.root,
            Rect::new(0.0, 0.0, f32::INFINITY, 10.0),
            &options
        )
        .is_err());
        assert!(validate(
            &tree,
            tree.root,
            Rect::from_size(10.0, 10.0),
            &options.with_padding(6.0)
        )
        .is_err());
        assert!(validate(
            &tree,
            tree.root,
            Rect::from_size(10.0, 10.0),
            &options.with_padding(-1.0)
        )
        .is_err());
    }
}
