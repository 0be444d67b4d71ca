//! Manifest parsers, one per [`ManifestKind`].
//!
//! Both parsers are strict: any line or document that does not match the
//! expected shape is an error, never a silently skipped entry.

use std::path::Path;

use anyhow::Result;

use crate::models::{Dependency, ManifestKind};

pub mod node;
pub mod python;

pub trait Analyzer {
    /// Parse the manifest at `path` into dependency records, in file order.
    fn analyze(&self, path: &Path) -> Result<Vec<Dependency>>;
}

/// Parse `path` with the analyzer matching `kind`.
///
/// `sorted` only affects `package.json`, whose keys are otherwise reported in
/// document order.
pub fn analyze(kind: ManifestKind, path: &Path, sorted: bool) -> Result<Vec<Dependency>> {
    match kind {
        ManifestKind::Pip => python::PythonAnalyzer::new().analyze(path),
        ManifestKind::Npm => node::NodeAnalyzer::new().sorted(sorted).analyze(path),
    }
}
