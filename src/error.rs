//! Errors raised while reading a repository manifest.
//!
//! Manifests are parsed strictly: a line or document that does not have the
//! expected shape fails the whole scan instead of being skipped.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// A `requirements.txt` line without exactly one `==`.
    #[error("{}:{line}: expected `name==version`, got {content:?}", .path.display())]
    MalformedRequirement {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        content: String,
    },

    /// A `package.json` with no top-level `dependencies` key.
    #[error("{}: no `dependencies` key", .path.display())]
    MissingDependencies { path: PathBuf },

    /// `dependencies` is present but is not an object.
    #[error("{}: `dependencies` is not an object", .path.display())]
    InvalidDependencies { path: PathBuf },

    #[error("{}: version of `{name}` is not a string", .path.display())]
    InvalidVersion { path: PathBuf, name: String },
}
