//! Filesystem collaborator: reads asset bytes by internal path.

use std::io;
use std::path::{Path, PathBuf};

/// Resolves an internal path under the assets root: the leading slash is
/// stripped and separators are converted to the host's convention.
pub fn asset_path(root: &Path, internal: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for part in internal.trim_start_matches('/').split('/') {
        path.push(part);
    }
    path
}

/// Reads the full contents of the asset at `internal` under `root`.
/// Callers only distinguish success from failure; the error cause is not
/// interpreted.
pub async fn load(root: &Path, internal: &str) -> io::Result<Vec<u8>> {
    tokio::fs::read(asset_path(root, internal)).await
}
