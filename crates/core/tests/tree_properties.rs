//! Property tests for the ordering, depth and visibility guarantees of a
//! built file tree.

use std::cmp::Ordering;
use std::collections::HashMap;

use filetree_core::projector::project;
use filetree_core::root::parent_path;
use filetree_core::sorter::compare_nodes;
use filetree_core::{CollapsedFolders, Dirent, FileMap, FileTreeStore, Node, TreeOptions};
use proptest::prelude::*;
use proptest::sample::Index;

fn segment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["a", "B", "file2", "file10", "File1", "x", "node_modules", "01"])
}

fn entry() -> impl Strategy<Value = (String, Dirent)> {
    (prop::collection::vec(segment(), 1..5), any::<bool>()).prop_map(|(segments, is_file)| {
        let dirent = if is_file { Dirent::file() } else { Dirent::Folder };
        (format!("/{}", segments.join("/")), dirent)
    })
}

fn file_map() -> impl Strategy<Value = FileMap> {
    prop::collection::vec(entry(), 0..30).prop_map(|entries| entries.into_iter().collect())
}

fn options() -> impl Strategy<Value = TreeOptions> {
    (prop::sample::select(vec!["/", "/a", "/a/B"]), any::<bool>()).prop_map(|(root, hide_root)| {
        TreeOptions {
            root_folder: root.to_string(),
            hide_root,
            ..TreeOptions::default()
        }
    })
}

fn is_descendant(path: &str, ancestor: &str) -> bool {
    if ancestor == "/" {
        return path != "/";
    }
    path.strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with('/'))
}

fn build(files: &FileMap, options: &TreeOptions) -> Vec<Node> {
    let mut store = FileTreeStore::new();
    store.set_files(files, options);
    store.file_list().to_vec()
}

/// Everything but the per-build id.
fn shape(nodes: &[Node]) -> Vec<(usize, String, String, bool)> {
    nodes
        .iter()
        .map(|n| (n.depth, n.name.clone(), n.full_path.clone(), n.is_folder()))
        .collect()
}

proptest! {
    #[test]
    fn paths_are_unique(files in file_map(), options in options()) {
        let nodes = build(&files, &options);
        let mut seen = std::collections::HashSet::new();
        for node in &nodes {
            prop_assert!(seen.insert(node.full_path.clone()), "duplicate {}", node.full_path);
        }
    }

    #[test]
    fn depth_follows_parent(files in file_map(), options in options()) {
        let nodes = build(&files, &options);
        let depth_by_path: HashMap<&str, usize> =
            nodes.iter().map(|n| (n.full_path.as_str(), n.depth)).collect();

        for node in &nodes {
            let parent_depth = parent_path(&node.full_path).and_then(|p| depth_by_path.get(p));
            match parent_depth {
                Some(parent_depth) => prop_assert_eq!(node.depth, parent_depth + 1),
                None => prop_assert_eq!(node.depth, 0),
            }
        }
    }

    #[test]
    fn folders_own_a_contiguous_block(files in file_map(), options in options()) {
        let nodes = build(&files, &options);

        for (i, folder) in nodes.iter().enumerate().filter(|(_, n)| n.is_folder()) {
            let end = nodes[i + 1..]
                .iter()
                .position(|n| n.depth <= folder.depth)
                .map_or(nodes.len(), |offset| i + 1 + offset);

            for (k, node) in nodes.iter().enumerate() {
                let inside = k > i && k < end;
                prop_assert_eq!(
                    is_descendant(&node.full_path, &folder.full_path),
                    inside,
                    "{} relative to {}",
                    node.full_path,
                    folder.full_path
                );
            }
        }
    }

    #[test]
    fn siblings_are_ordered(files in file_map(), options in options()) {
        let nodes = build(&files, &options);
        let mut siblings: HashMap<Option<&str>, Vec<&Node>> = HashMap::new();
        for node in &nodes {
            siblings.entry(parent_path(&node.full_path)).or_default().push(node);
        }

        for group in siblings.values() {
            for pair in group.windows(2) {
                prop_assert_eq!(compare_nodes(pair[0], pair[1]), Ordering::Less);
            }
        }
    }

    #[test]
    fn rebuilds_are_idempotent(files in file_map(), options in options()) {
        let mut store = FileTreeStore::new();
        store.set_files(&files, &options);
        let first = shape(store.file_list());
        store.set_files(&files, &options);
        prop_assert_eq!(first, shape(store.file_list()));
    }

    #[test]
    fn projection_hides_exactly_collapsed_descendants(
        files in file_map(),
        options in options(),
        picks in prop::collection::vec(any::<Index>(), 0..5),
    ) {
        let nodes = build(&files, &options);
        let folders: Vec<&str> = nodes
            .iter()
            .filter(|n| n.is_folder())
            .map(|n| n.full_path.as_str())
            .collect();

        let mut collapsed = CollapsedFolders::new();
        if !folders.is_empty() {
            for pick in &picks {
                collapsed.collapse(folders[pick.index(folders.len())]);
            }
        }

        let expected: Vec<&str> = nodes
            .iter()
            .filter(|n| !collapsed.iter().any(|c| is_descendant(&n.full_path, c)))
            .map(|n| n.full_path.as_str())
            .collect();
        let visible: Vec<&str> = project(&nodes, &collapsed)
            .into_iter()
            .map(|n| n.full_path.as_str())
            .collect();

        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn toggle_round_trip(files in file_map(), path in "/[a-z]{1,3}(/[a-z]{1,3}){0,2}") {
        let mut store = FileTreeStore::new();
        store.set_files(&files, &TreeOptions::default());
        store.collapse_all();
        let before = store.collapsed_folders().clone();

        store.toggle_folder(&path);
        store.toggle_folder(&path);

        prop_assert_eq!(store.collapsed_folders(), &before);
    }
}

fn files(entries: &[(&str, Dirent)]) -> FileMap {
    entries
        .iter()
        .map(|(path, dirent)| (path.to_string(), dirent.clone()))
        .collect()
}

fn visible_paths(store: &FileTreeStore) -> Vec<String> {
    store
        .filtered_file_list()
        .iter()
        .map(|n| n.full_path.clone())
        .collect()
}

#[test]
fn collapsed_folder_suppresses_its_subtree() {
    let mut store = FileTreeStore::new();
    store.set_files(
        &files(&[
            ("/a/x", Dirent::file()),
            ("/a/y/z", Dirent::file()),
            ("/b", Dirent::file()),
        ]),
        &TreeOptions {
            hide_root: true,
            ..TreeOptions::default()
        },
    );
    store.collapse_folder("/a");

    assert_eq!(visible_paths(&store), vec!["/a", "/b"]);
}

#[test]
fn hidden_root_keeps_children_at_depth_zero() {
    let mut store = FileTreeStore::new();
    store.set_files(
        &files(&[("/src/index.ts", Dirent::file()), ("/src/", Dirent::Folder)]),
        &TreeOptions {
            hide_root: true,
            ..TreeOptions::default()
        },
    );

    let nodes: Vec<(&str, usize)> = store
        .file_list()
        .iter()
        .map(|n| (n.full_path.as_str(), n.depth))
        .collect();
    assert_eq!(nodes, vec![("/src", 0), ("/src/index.ts", 1)]);
}

#[test]
fn node_modules_are_hidden_by_default() {
    let mut store = FileTreeStore::new();
    store.set_files(
        &files(&[("/pkg/node_modules/x.js", Dirent::file())]),
        &TreeOptions {
            hide_root: true,
            ..TreeOptions::default()
        },
    );
    assert!(store.file_list().is_empty());
}

#[test]
fn vanished_folder_is_no_longer_collapsed() {
    let mut store = FileTreeStore::new();
    store.set_files(
        &files(&[("/p/lib.rs", Dirent::file()), ("/q/main.rs", Dirent::file())]),
        &TreeOptions::default(),
    );
    store.collapse_folder("/p");
    store.collapse_folder("/q");

    store.set_files(&files(&[("/q/main.rs", Dirent::file())]), &TreeOptions::default());

    let collapsed: Vec<&str> = store.collapsed_folders().iter().collect();
    assert_eq!(collapsed, vec!["/q"]);
}

#[test]
fn numeric_siblings_sort_naturally() {
    let mut store = FileTreeStore::new();
    store.set_files(
        &files(&[
            ("/file10", Dirent::file()),
            ("/file2", Dirent::file()),
            ("/File1", Dirent::file()),
            ("/docs", Dirent::Folder),
        ]),
        &TreeOptions {
            hide_root: true,
            ..TreeOptions::default()
        },
    );

    let names: Vec<&str> = store.file_list().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["docs", "File1", "file2", "file10"]);
}
