//! Input discovery
//!
//! Both modes return paths sorted by their raw bytes, which is the only
//! thing that decides page order.

use crate::constants::{FILE_LIST_SEPARATOR, JPEG_EXTENSIONS};
use crate::options::InputSource;
use crate::types::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Collect the input paths for the selected mode
pub async fn collect_inputs(source: &InputSource) -> Result<Vec<PathBuf>> {
    match source {
        InputSource::Folder(root) => collect_from_folder(root).await,
        InputSource::List(list) => Ok(collect_from_list(list)),
    }
}

/// Recursively scan `root` for JPEG files.
///
/// Any entry that cannot be read aborts the whole scan.
pub async fn collect_from_folder(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref().to_owned();

    let files = tokio::task::spawn_blocking(move || {
        let mut files = Vec::new();
        walk(&root, &mut files)?;
        sort_paths(&mut files);
        Ok::<_, MergeError>(files)
    })
    .await??;

    log::debug!("Found {} JPEG files", files.len());
    Ok(files)
}

/// Split a comma-separated list into trimmed paths.
///
/// Tokens are taken verbatim; nothing is checked on disk here.
pub fn collect_from_list(list: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = list
        .split(FILE_LIST_SEPARATOR)
        .map(|name| PathBuf::from(name.trim()))
        .collect();
    sort_paths(&mut files);
    files
}

fn walk(path: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let walk_error = |source| MergeError::Walk {
        path: path.to_owned(),
        source,
    };

    // symlink_metadata: links are reported as-is, never followed
    let file_type = fs::symlink_metadata(path).map_err(walk_error)?.file_type();
    if !file_type.is_dir() {
        if has_jpeg_extension(path) {
            files.push(path.to_owned());
        }
        return Ok(());
    }

    for entry in fs::read_dir(path).map_err(walk_error)? {
        let entry = entry.map_err(walk_error)?;
        walk(&entry.path(), files)?;
    }

    Ok(())
}

fn has_jpeg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| JPEG_EXTENSIONS.contains(&ext))
}

/// Byte-wise ascending order over the whole path string
fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| {
        a.as_os_str()
            .as_encoded_bytes()
            .cmp(b.as_os_str().as_encoded_bytes())
    });
}
