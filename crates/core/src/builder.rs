use std::collections::HashMap;

use crate::filter::{is_hidden, HiddenRule};
use crate::model::{FileMap, Node, NodeId, NodeKind};
use crate::root::{TraversalRoot, ROOT};

/// Turn a flat file map into an unordered list of nodes with depths.
///
/// Hidden entries produce no node at all. Folders are created for every
/// ancestor of a visible entry inside the root's subtree and are
/// deduplicated by path. A path listed as a file that also has
/// descendants becomes a single folder node.
pub fn build(files: &FileMap, root: &TraversalRoot, rules: &[HiddenRule]) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::with_capacity(files.len() + 1);
    let mut index_by_path: HashMap<String, usize> = HashMap::new();

    if root.shows_global_root() {
        push_node(&mut nodes, &mut index_by_path, ROOT, ROOT.to_string(), 0, NodeKind::Folder);
    }

    for (path, dirent) in files {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some(&file_name) = segments.last() else {
            continue;
        };
        if is_hidden(path, file_name, rules) {
            continue;
        }

        let mut full_path = String::with_capacity(path.len());
        let mut depth = 0;

        for (i, name) in segments.iter().enumerate() {
            full_path.push('/');
            full_path.push_str(name);

            if !root.contains(&full_path) || root.skips(&full_path) {
                continue;
            }

            let kind = if i == segments.len() - 1 && dirent.is_file() {
                NodeKind::File
            } else {
                NodeKind::Folder
            };

            match index_by_path.get(&full_path) {
                Some(&idx) => {
                    if kind == NodeKind::Folder {
                        nodes[idx].kind = NodeKind::Folder;
                    }
                }
                None => push_node(
                    &mut nodes,
                    &mut index_by_path,
                    name,
                    full_path.clone(),
                    depth + root.depth_offset(),
                    kind,
                ),
            }

            depth += 1;
        }
    }

    nodes
}

fn push_node(
    nodes: &mut Vec<Node>,
    index_by_path: &mut HashMap<String, usize>,
    name: &str,
    full_path: String,
    depth: usize,
    kind: NodeKind,
) {
    let idx = nodes.len();
    index_by_path.insert(full_path.clone(), idx);
    nodes.push(Node {
        id: NodeId(idx as u64),
        depth,
        name: name.to_string(),
        full_path,
        kind,
    });
}
