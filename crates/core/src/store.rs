use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::debug;

use crate::builder::build;
use crate::collapse::CollapsedFolders;
use crate::filter::{default_hidden_rules, HiddenRule};
use crate::model::{FileMap, Node};
use crate::projector::project;
use crate::root::{TraversalRoot, ROOT};
use crate::sorter::sort;

/// Result of the latest build. Replaced wholesale on every rebuild.
#[derive(Debug, Clone)]
pub struct FileTreeState {
    /// Every node in depth-first order.
    pub file_list: Vec<Node>,
    /// Rules the list was built with, base rules first.
    pub hidden_files: Vec<HiddenRule>,
    pub root_folder: String,
    pub hide_root: bool,
}

impl Default for FileTreeState {
    fn default() -> Self {
        Self {
            file_list: Vec::new(),
            hidden_files: default_hidden_rules(),
            root_folder: ROOT.to_string(),
            hide_root: false,
        }
    }
}

/// Per-call options for [`FileTreeStore::set_files`].
#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub root_folder: String,
    pub hide_root: bool,
    /// Applied after the store's base rules.
    pub extra_hidden_rules: Vec<HiddenRule>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            root_folder: ROOT.to_string(),
            hide_root: false,
            extra_hidden_rules: Vec::new(),
        }
    }
}

/// Change notifications delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    TreeRebuilt { nodes: usize, pruned: usize },
    CollapseChanged { collapsed: usize },
}

/// Owns the tree snapshot and the collapse state of one explorer.
///
/// Both cells have a single writer: mutations take `&mut self` and run to
/// completion. Readers may keep an older snapshot from [`Self::state`]
/// while a newer one is installed.
pub struct FileTreeStore {
    state: Arc<FileTreeState>,
    collapsed: CollapsedFolders,
    base_rules: Vec<HiddenRule>,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl Default for FileTreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTreeStore {
    pub fn new() -> Self {
        Self::with_hidden_rules(default_hidden_rules())
    }

    /// A store whose base rules replace the built-in defaults.
    pub fn with_hidden_rules(base_rules: Vec<HiddenRule>) -> Self {
        let state = FileTreeState {
            hidden_files: base_rules.clone(),
            ..FileTreeState::default()
        };
        Self {
            state: Arc::new(state),
            collapsed: CollapsedFolders::new(),
            base_rules,
            subscribers: Vec::new(),
        }
    }

    /// Rebuild the tree from `files`, install it and prune collapse state.
    pub fn set_files(&mut self, files: &FileMap, options: &TreeOptions) {
        let root = TraversalRoot::new(&options.root_folder, options.hide_root);
        let hidden_files: Vec<HiddenRule> = self
            .base_rules
            .iter()
            .chain(&options.extra_hidden_rules)
            .cloned()
            .collect();

        let file_list = sort(build(files, &root, &hidden_files), &root);

        self.state = Arc::new(FileTreeState {
            file_list,
            hidden_files,
            root_folder: root.path().to_string(),
            hide_root: root.hide_root(),
        });

        let pruned = self.collapsed.reconcile(&self.state.file_list);
        debug!(
            entries = files.len(),
            nodes = self.state.file_list.len(),
            pruned,
            root = root.path(),
            "file tree rebuilt"
        );
        self.notify(StoreEvent::TreeRebuilt {
            nodes: self.state.file_list.len(),
            pruned,
        });
    }

    /// The current snapshot.
    pub fn state(&self) -> Arc<FileTreeState> {
        Arc::clone(&self.state)
    }

    pub fn file_list(&self) -> &[Node] {
        &self.state.file_list
    }

    pub fn collapsed_folders(&self) -> &CollapsedFolders {
        &self.collapsed
    }

    /// Nodes visible with the current collapse state.
    pub fn filtered_file_list(&self) -> Vec<&Node> {
        project(&self.state.file_list, &self.collapsed)
    }

    pub fn toggle_folder(&mut self, path: &str) {
        let changed = self.collapsed.toggle(path);
        self.collapse_changed(changed);
    }

    pub fn collapse_folder(&mut self, path: &str) {
        let changed = self.collapsed.collapse(path);
        self.collapse_changed(changed);
    }

    pub fn expand_folder(&mut self, path: &str) {
        let changed = self.collapsed.expand(path);
        self.collapse_changed(changed);
    }

    pub fn collapse_all(&mut self) {
        let changed = self.collapsed.collapse_all(&self.state.file_list);
        self.collapse_changed(changed);
    }

    pub fn expand_all(&mut self) {
        let changed = self.collapsed.expand_all();
        self.collapse_changed(changed);
    }

    /// Receive an event for every rebuild and every collapse change.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn collapse_changed(&mut self, changed: bool) {
        if changed {
            self.notify(StoreEvent::CollapseChanged {
                collapsed: self.collapsed.len(),
            });
        }
    }

    fn notify(&mut self, event: StoreEvent) {
        // Receivers that were dropped are forgotten.
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
