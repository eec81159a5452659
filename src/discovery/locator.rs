use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::IoError;

/// A located source file and the short key it is known by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub key: String,
    pub path: PathBuf,
}

/// Strips the first matching extension, then everything up to the last
/// path separator. Returns `None` when no extension matches.
pub fn derive_key(path: &str, extensions: &[String]) -> Option<String> {
    let ext = extensions.iter().find(|ext| path.ends_with(ext.as_str()))?;
    let stem = &path[..path.len() - ext.len()];
    let key = stem
        .rsplit(['/', std::path::MAIN_SEPARATOR])
        .next()
        .unwrap_or(stem);
    Some(key.to_string())
}

/// Walks `root` in preorder, siblings sorted by file name, and returns one
/// file per key. On collision the lexically later path wins; output keeps
/// first-seen key order.
///
/// Any traversal error aborts the walk.
pub fn locate_sources(root: &Path, extensions: &[String]) -> Result<Vec<SourceFile>, IoError> {
    if !root.is_dir() {
        return Err(IoError::directory_not_found(root));
    }

    let mut files: Vec<SourceFile> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| IoError::walk_error(root, e))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path_str = entry.path().to_string_lossy();
        let Some(key) = derive_key(&path_str, extensions) else {
            continue;
        };

        let file = SourceFile {
            key: key.clone(),
            path: entry.path().to_path_buf(),
        };

        match index.get(&key) {
            Some(&slot) => {
                warn!(
                    key = %key,
                    previous = %files[slot].path.display(),
                    replacement = %file.path.display(),
                    "duplicate short name, keeping the later file"
                );
                files[slot] = file;
            }
            None => {
                index.insert(key, files.len());
                files.push(file);
            }
        }
    }

    debug!(root = %root.display(), count = files.len(), "located source files");
    Ok(files)
}
