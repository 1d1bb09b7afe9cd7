use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Sequential id assigned while building; only unique within one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// One entry of a built tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub depth: usize,
    pub name: String,
    pub full_path: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }
}

/// Descriptor for one path of a [`FileMap`]. File contents are carried
/// along for the provider's benefit but never inspected by the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Dirent {
    File {
        #[serde(default)]
        content: String,
        #[serde(default, rename = "isBinary")]
        is_binary: bool,
    },
    Folder,
}

impl Dirent {
    /// A file entry with no content.
    pub fn file() -> Self {
        Dirent::File {
            content: String::new(),
            is_binary: false,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Dirent::File { .. })
    }
}

/// Flat mapping from absolute path to its descriptor.
pub type FileMap = BTreeMap<String, Dirent>;

/// Parse a JSON file map of the form `{"/path": {"type": "file"}, ...}`.
pub fn parse_file_map(json: &str) -> Result<FileMap> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_file_map(path: &Path) -> Result<FileMap> {
    let content = std::fs::read_to_string(path)?;
    parse_file_map(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_files_and_folders() {
        let map = parse_file_map(
            r#"{
                "/src": {"type": "folder"},
                "/src/main.rs": {"type": "file", "content": "fn main() {}", "isBinary": false},
                "/logo.png": {"type": "file", "isBinary": true}
            }"#,
        )
        .unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map["/src"], Dirent::Folder);
        assert!(map["/src/main.rs"].is_file());
        assert_eq!(
            map["/logo.png"],
            Dirent::File {
                content: String::new(),
                is_binary: true
            }
        );
    }

    #[test]
    fn rejects_unknown_dirent_type() {
        let err = parse_file_map(r#"{"/a": {"type": "symlink"}}"#).unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }

    #[test]
    fn node_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&NodeKind::Folder).unwrap(), "\"folder\"");
    }
}
