//! Writing a `FileTree` to disk

use crate::error::{Result, ScaffoldError};
use crate::tree::FileTree;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// Create every directory chain under `root`; already existing directories are fine
pub async fn ensure_directories(root: &Path, directories: &[String]) -> Result<()> {
    for dir in directories {
        let dir_path = root.join(dir);
        fs::create_dir_all(&dir_path)
            .await
            .map_err(|e| ScaffoldError::fs("create directory", &dir_path, e))?;
        tracing::debug!(path = %dir_path.display(), "created directory");
    }
    Ok(())
}

/// Write each file under `root` with its content trimmed, replacing what was there
///
/// Returns the relative paths written, in write order. Stops at the first failure
/// and leaves whatever was already written in place.
pub async fn write_files(root: &Path, files: &BTreeMap<String, String>) -> Result<Vec<String>> {
    let mut written = Vec::with_capacity(files.len());

    for (file_path, content) in files {
        let target_path = root.join(file_path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::fs("create directory", parent, e))?;
        }

        fs::write(&target_path, content.trim())
            .await
            .map_err(|e| ScaffoldError::fs("write file", &target_path, e))?;
        tracing::debug!(path = %target_path.display(), bytes = content.trim().len(), "wrote file");

        written.push(file_path.clone());
    }

    Ok(written)
}

/// Directories first, then files
pub async fn emit(root: &Path, tree: &FileTree) -> Result<Vec<String>> {
    ensure_directories(root, &tree.directories).await?;
    write_files(root, &tree.files).await
}
