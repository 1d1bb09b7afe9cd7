use crate::collapse::CollapsedFolders;
use crate::model::Node;

/// The nodes currently visible: collapsed folders stay visible, their
/// descendants do not.
///
/// `nodes` must be in depth-first pre-order (see [`crate::sorter::sort`]).
/// Instead of a stack, the shallowest open collapsed depth is tracked;
/// the first later node at that depth ends the collapsed subtree.
pub fn project<'a>(nodes: &'a [Node], collapsed: &CollapsedFolders) -> Vec<&'a Node> {
    let mut visible = Vec::with_capacity(nodes.len());
    let mut suppress_below: Option<usize> = None;

    for node in nodes {
        let depth = node.depth;

        if suppress_below == Some(depth) {
            suppress_below = None;
        }

        if collapsed.contains(&node.full_path) {
            suppress_below = Some(suppress_below.map_or(depth, |d| d.min(depth)));
        }

        if suppress_below.is_some_and(|d| depth > d) {
            continue;
        }

        visible.push(node);
    }

    visible
}
