use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single declared dependency, as written in a repository's manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
    /// Manifest file the record was extracted from.
    pub path: PathBuf,
    #[serde(rename = "dependency_file_type")]
    pub kind: ManifestKind,
}

impl Dependency {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        path: impl Into<PathBuf>,
        kind: ManifestKind,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            path: path.into(),
            kind,
        }
    }
}

/// Which manifest format a [`Dependency`] was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestKind {
    /// Pinned `requirements.txt`.
    Pip,
    /// Node `package.json`.
    Npm,
}

impl ManifestKind {
    /// Every kind, in the order the scanner looks for its manifest.
    pub const ALL: [ManifestKind; 2] = [ManifestKind::Pip, ManifestKind::Npm];

    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::Pip => "requirements.txt",
            ManifestKind::Npm => "package.json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestKind::Pip => "pip",
            ManifestKind::Npm => "npm",
        }
    }
}

impl std::fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
