use std::path::{Component, Path};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{Dirent, FileMap};
use crate::root::normalize_path;

/// Walk `dir` once and describe it as a [`FileMap`] rooted at `mount`.
///
/// Every entry below `dir` is keyed by `mount` joined with its relative
/// path. Folders are listed explicitly so empty ones still appear; file
/// contents are not read. `.gitignore` is honored, hidden files are
/// included and symlinks are not followed. Entries that cannot be read
/// are skipped.
pub fn scan_dir(dir: &Path, mount: &str) -> Result<FileMap> {
    if !dir.is_dir() {
        return Err(Error::InvalidPath(dir.display().to_string()));
    }

    let mount = normalize_path(mount);
    let mut files = FileMap::new();

    let mut builder = WalkBuilder::new(dir);
    builder.hidden(false).git_global(false).follow_links(false);

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let Some(key) = mounted_key(&mount, relative) else {
            warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            continue;
        };

        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        let dirent = if is_dir { Dirent::Folder } else { Dirent::file() };
        files.insert(key, dirent);
    }

    debug!(dir = %dir.display(), mount = %mount, entries = files.len(), "scanned directory");
    Ok(files)
}

fn mounted_key(mount: &str, relative: &Path) -> Option<String> {
    let mut key = if mount == "/" {
        String::new()
    } else {
        mount.to_string()
    };
    for component in relative.components() {
        if let Component::Normal(segment) = component {
            key.push('/');
            key.push_str(segment.to_str()?);
        }
    }
    Some(key)
}
