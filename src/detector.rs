use std::path::{Path, PathBuf};

use crate::models::ManifestKind;

/// Name of the entry whose presence marks a directory as a git repository.
pub const GIT_MARKER: &str = ".git";

/// Whether `dir` contains a `.git` entry. Its contents are not inspected.
pub fn is_repository(dir: &Path) -> bool {
    dir.join(GIT_MARKER).exists()
}

/// Pick the manifest to read in `repo`.
///
/// `requirements.txt` wins over `package.json` when both are present; only one
/// manifest is ever consulted per repository.
pub fn detect_manifest(repo: &Path) -> Option<(ManifestKind, PathBuf)> {
    ManifestKind::ALL
        .into_iter()
        .map(|kind| (kind, repo.join(kind.file_name())))
        .find(|(_, path)| path.exists())
}
