use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ManifestError;
use crate::models::{Dependency, ManifestKind};

/// Analyzer for pinned `requirements.txt` files.
///
/// Every line must be exactly `name==version`. Blank lines, comments and
/// unpinned requirements are rejected rather than skipped.
pub struct PythonAnalyzer;

impl PythonAnalyzer {
    /// Create a new `PythonAnalyzer`.
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for PythonAnalyzer {
    fn analyze(&self, path: &Path) -> Result<Vec<Dependency>> {
        parse_requirements(path)
    }
}

/// Parse `requirements.txt` into one [`ManifestKind::Pip`] record per line.
pub fn parse_requirements(path: &Path) -> Result<Vec<Dependency>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut deps = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let (name, version) = split_pin(line).ok_or_else(|| ManifestError::MalformedRequirement {
            path: path.to_path_buf(),
            line: idx + 1,
            content: line.to_string(),
        })?;
        deps.push(Dependency::new(name, version, path, ManifestKind::Pip));
    }

    tracing::debug!(path = %path.display(), count = deps.len(), "parsed requirements");
    Ok(deps)
}

/// Split `name==version` on its single `==`. Whitespace is kept as written.
fn split_pin(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split("==");
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(version), None) => Some((name, version)),
        _ => None,
    }
}
