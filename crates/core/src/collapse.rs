use std::collections::BTreeSet;

use tracing::trace;

use crate::model::Node;

/// Folders the user has collapsed, keyed by full path.
///
/// The set outlives any single build: [`CollapsedFolders::reconcile`]
/// drops entries for folders that disappeared and keeps the rest.
/// Mutators return `true` when the set actually changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapsedFolders {
    paths: BTreeSet<String>,
}

impl CollapsedFolders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Collapsed paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn toggle(&mut self, path: &str) -> bool {
        if !self.paths.remove(path) {
            self.paths.insert(path.to_string());
        }
        true
    }

    pub fn collapse(&mut self, path: &str) -> bool {
        if self.paths.contains(path) {
            return false;
        }
        self.paths.insert(path.to_string())
    }

    pub fn expand(&mut self, path: &str) -> bool {
        self.paths.remove(path)
    }

    /// Collapse exactly the folders present in `nodes`.
    pub fn collapse_all(&mut self, nodes: &[Node]) -> bool {
        let folders: BTreeSet<String> = folder_paths(nodes).map(str::to_string).collect();
        if folders == self.paths {
            return false;
        }
        self.paths = folders;
        true
    }

    pub fn expand_all(&mut self) -> bool {
        if self.paths.is_empty() {
            return false;
        }
        self.paths.clear();
        true
    }

    /// Keep only entries that still name a folder in `nodes`; returns how
    /// many entries were pruned.
    pub fn reconcile(&mut self, nodes: &[Node]) -> usize {
        let before = self.paths.len();
        let kept: BTreeSet<String> = folder_paths(nodes)
            .filter(|path| self.paths.contains(*path))
            .map(str::to_string)
            .collect();
        self.paths = kept;

        let pruned = before - self.paths.len();
        trace!(kept = self.paths.len(), pruned, "reconciled collapsed folders");
        pruned
    }
}

fn folder_paths(nodes: &[Node]) -> impl Iterator<Item = &str> {
    nodes
        .iter()
        .filter(|n| n.is_folder())
        .map(|n| n.full_path.as_str())
}
