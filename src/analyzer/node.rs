use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::ManifestError;
use crate::models::{Dependency, ManifestKind};

/// Analyzer for `package.json` manifests.
///
/// Only the top-level `dependencies` object is read. Versions are taken
/// verbatim, ranges included.
#[derive(Default)]
pub struct NodeAnalyzer {
    sorted: bool,
}

impl NodeAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report dependencies sorted by name instead of in document order.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}

impl super::Analyzer for NodeAnalyzer {
    fn analyze(&self, path: &Path) -> Result<Vec<Dependency>> {
        let mut deps = parse_package_manifest(path)?;
        if self.sorted {
            deps.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(deps)
    }
}

/// Parse `package.json` into one [`ManifestKind::Npm`] record per
/// `dependencies` entry, in document order.
pub fn parse_package_manifest(path: &Path) -> Result<Vec<Dependency>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let pkgs = json
        .get("dependencies")
        .ok_or_else(|| ManifestError::MissingDependencies {
            path: path.to_path_buf(),
        })?
        .as_object()
        .ok_or_else(|| ManifestError::InvalidDependencies {
            path: path.to_path_buf(),
        })?;

    let mut deps = Vec::with_capacity(pkgs.len());
    for (name, version) in pkgs {
        let version = version.as_str().ok_or_else(|| ManifestError::InvalidVersion {
            path: path.to_path_buf(),
            name: name.clone(),
        })?;
        deps.push(Dependency::new(name.clone(), version, path, ManifestKind::Npm));
    }

    tracing::debug!(path = %path.display(), count = deps.len(), "parsed package manifest");
    Ok(deps)
}
