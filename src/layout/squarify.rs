use super::rect::{Axis, Rect};
use super::PlaceOptions;
use crate::tree::arena::{NodeId, Tree};

/// Assign a rectangle to `node` and to everything below it.
///
/// The node gets `rect` inset by `options.padding`; its children split that
/// inset box in proportion to their weights and are placed recursively with
/// the same options. Expects `prepare_tree` to have run since the last edit.
/// Every rectangle in the subtree is overwritten, so calling this again
/// (e.g. on resize) is safe.
pub fn place<P>(tree: &mut Tree<P>, node: NodeId, rect: Rect, options: &PlaceOptions) {
    tracing::debug!(
        "Placing {:?} (weight={}) into {:.1}x{:.1} at ({:.1}, {:.1}), padding={}",
        node,
        tree.get(node).weight,
        rect.width(),
        rect.height(),
        rect.min[0],
        rect.min[1],
        options.padding
    );

    // One scratch strip for the whole walk; each level finishes with it
    // before recursing.
    let mut strip = Vec::new();
    place_node(tree, node, rect, options, &mut strip);
}

fn place_node<P>(
    tree: &mut Tree<P>,
    node: NodeId,
    rect: Rect,
    options: &PlaceOptions,
    strip: &mut Vec<NodeId>,
) {
    let inner = rect.inset(options.padding);
    tree.get_mut(node).rect = inner;
    if tree.get(node).is_leaf() {
        return;
    }

    partition(tree, node, inner, strip);

    for i in 0..tree.get(node).children.len() {
        let child = tree.get(node).children[i];
        let slot = tree.get(child).rect;
        place_node(tree, child, slot, options, strip);
    }
}

/// Weight and count of the children not yet placed when a strip starts.
#[derive(Debug, Clone, Copy)]
struct Outer {
    weight: f64,
    len: usize,
}

/// Squarified split of `area` among the direct children of `parent`.
///
/// Children are taken in their current (heaviest-first) order and grouped
/// into strips. A strip spans the short side of the remaining area and
/// grows while its worst aspect ratio does not get worse; the child that
/// makes it worse opens the next strip.
fn partition<P>(tree: &mut Tree<P>, parent: NodeId, mut area: Rect, strip: &mut Vec<NodeId>) {
    let count = tree.get(parent).children.len();
    let mut start = 0;

    while start < count {
        let long = if area.extent(Axis::X) < area.extent(Axis::Y) {
            Axis::Y
        } else {
            Axis::X
        };
        let outer = Outer {
            weight: tree.get(parent).children[start..]
                .iter()
                .map(|&id| tree.get(id).weight)
                .sum(),
            len: count - start,
        };

        strip.clear();
        let mut best = f32::INFINITY;
        let mut next = count;

        for i in start..count {
            strip.push(tree.get(parent).children[i]);
            arrange_strip(tree, strip, area, long, outer);

            let worst = strip_worst_aspect(tree, strip);
            if strip.len() == 1 || worst <= best {
                best = worst;
                continue;
            }

            // Undo the last addition; it starts the next strip.
            strip.pop();
            arrange_strip(tree, strip, area, long, outer);
            next = i;
            break;
        }

        tracing::trace!(
            "Strip under {:?}: children {}..{} along {:?}, worst aspect {:.3}",
            parent,
            start,
            next,
            long,
            best
        );

        if next < count {
            if let Some(&last) = strip.last() {
                let l = long.index();
                area.min[l] = tree.get(last).rect.max[l];
            }
        }
        start = next;
    }
}

/// Lay out `strip` against `area`: the strip covers `area` along the short
/// axis and takes its share of `outer` along the long axis.
fn arrange_strip<P>(tree: &mut Tree<P>, strip: &[NodeId], area: Rect, long: Axis, outer: Outer) {
    let l = long.index();
    let s = long.other().index();

    let strip_weight: f64 = strip.iter().map(|&id| tree.get(id).weight).sum();
    let far = lerp(
        area.min[l],
        area.max[l],
        share(strip_weight, outer.weight, strip.len(), outer.len),
    );

    let mut acc = 0.0;
    let mut next_min = area.min[s];
    for (k, &id) in strip.iter().enumerate() {
        acc += tree.get(id).weight;
        let next_max = lerp(
            area.min[s],
            area.max[s],
            share(acc, strip_weight, k + 1, strip.len()),
        );

        let rect = &mut tree.get_mut(id).rect;
        rect.min[l] = area.min[l];
        rect.max[l] = far;
        rect.min[s] = next_min;
        rect.max[s] = next_max;
        next_min = next_max;
    }
}

/// Fraction of a span covered by `part` of `whole`.
///
/// A zero `whole` means every member of the group weighs nothing; they are
/// then treated as equal, so the first `nth` of `len` members get `nth / len`.
fn share(part: f64, whole: f64, nth: usize, len: usize) -> f64 {
    if whole != 0.0 {
        part / whole
    } else {
        nth as f64 / len as f64
    }
}

fn lerp(lo: f32, hi: f32, t: f64) -> f32 {
    let (lo, hi) = (lo as f64, hi as f64);
    (lo + (hi - lo) * t) as f32
}

fn strip_worst_aspect<P>(tree: &Tree<P>, strip: &[NodeId]) -> f32 {
    strip
        .iter()
        .map(|&id| tree.get(id).rect.aspect())
        .fold(1.0, f32::max)
}

/// Worst aspect ratio among the leaves under `node` (1.0 = all square).
pub fn worst_aspect<P>(tree: &Tree<P>, node: NodeId) -> f32 {
    tree.leaves(node)
        .map(|id| tree.get(id).rect.aspect())
        .fold(1.0, f32::max)
}
