use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::iter::Peekable;
use std::str::Chars;

use tracing::trace;

use crate::model::{Node, NodeKind};
use crate::root::{parent_path, TraversalRoot};

/// Order nodes depth-first so that every folder precedes its
/// descendants and siblings follow [`compare_nodes`].
///
/// When the root is hidden the traversal starts at each of its direct
/// children. A node whose parent is not part of the list is placed
/// under the traversal root.
pub fn sort(mut nodes: Vec<Node>, root: &TraversalRoot) -> Vec<Node> {
    trace!(nodes = nodes.len(), root = root.path(), "sorting file list");

    nodes.sort_by(compare_nodes);

    let known: HashSet<String> = nodes.iter().map(|n| n.full_path.clone()).collect();
    let mut sorted = Vec::with_capacity(nodes.len());
    let mut children: HashMap<String, Vec<Node>> = HashMap::new();
    let mut root_node = None;

    for node in nodes {
        if node.full_path == root.path() {
            root_node = Some(node);
            continue;
        }
        let parent = match parent_path(&node.full_path) {
            Some(parent) if parent == root.path() || known.contains(parent) => parent.to_string(),
            _ => root.path().to_string(),
        };
        children.entry(parent).or_default().push(node);
    }

    if let Some(node) = root_node {
        sorted.push(node);
    }
    visit_children(root.path(), &mut children, &mut sorted);

    sorted
}

fn visit_children(path: &str, children: &mut HashMap<String, Vec<Node>>, sorted: &mut Vec<Node>) {
    let Some(list) = children.remove(path) else {
        return;
    };
    for child in list {
        if child.is_folder() {
            let child_path = child.full_path.clone();
            sorted.push(child);
            visit_children(&child_path, children, sorted);
        } else {
            sorted.push(child);
        }
    }
}

/// Sibling order: folders before files, then names in
/// [`natural_cmp`] order. Names that collate equal fall back to a byte
/// comparison so the order is total.
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    match (a.kind, b.kind) {
        (NodeKind::Folder, NodeKind::File) => Ordering::Less,
        (NodeKind::File, NodeKind::Folder) => Ordering::Greater,
        _ => natural_cmp(&a.name, &b.name).then_with(|| a.name.cmp(&b.name)),
    }
}

/// Case-insensitive comparison where runs of ASCII digits compare by
/// numeric value, so `file2` sorts before `file10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        let ord = match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let x_run = take_digits(&mut a_chars);
                let y_run = take_digits(&mut b_chars);
                compare_digit_runs(&x_run, &y_run)
            }
            (Some(x), Some(y)) => {
                a_chars.next();
                b_chars.next();
                x.to_lowercase().cmp(y.to_lowercase())
            }
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

// Digit runs of any length, without parsing into a fixed-width integer.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
