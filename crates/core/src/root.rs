/// The global root path.
pub const ROOT: &str = "/";

/// Where a build starts and how depths are offset, computed once and
/// shared by the builder and the sorter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalRoot {
    path: String,
    hide_root: bool,
    depth_offset: usize,
}

impl TraversalRoot {
    pub fn new(root_folder: &str, hide_root: bool) -> Self {
        let path = normalize_path(root_folder);
        // Only the shown global root is a synthetic node of its own.
        let depth_offset = usize::from(path == ROOT && !hide_root);
        Self {
            path,
            hide_root,
            depth_offset,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn hide_root(&self) -> bool {
        self.hide_root
    }

    pub fn depth_offset(&self) -> usize {
        self.depth_offset
    }

    /// Whether the synthetic `/` node is part of the tree.
    pub fn shows_global_root(&self) -> bool {
        self.depth_offset == 1
    }

    /// Whether `path` is the root or lies under it.
    pub fn contains(&self, path: &str) -> bool {
        if self.path == ROOT {
            return path.starts_with('/');
        }
        match path.strip_prefix(self.path.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Whether `path` is the root itself and must not become a node.
    pub fn skips(&self, path: &str) -> bool {
        self.hide_root && path == self.path
    }
}

impl Default for TraversalRoot {
    fn default() -> Self {
        Self::new(ROOT, false)
    }
}

/// Collapse repeated separators and drop any trailing slash. An empty
/// path normalizes to `/`.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        normalized.push('/');
        normalized.push_str(segment);
    }
    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Path up to the last separator; `/` for top-level entries and `None`
/// for the root itself.
pub fn parent_path(path: &str) -> Option<&str> {
    if path == ROOT {
        return None;
    }
    match path.rfind('/') {
        Some(0) => Some(ROOT),
        Some(idx) => Some(&path[..idx]),
        None => None,
    }
}
