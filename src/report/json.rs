use anyhow::{Context, Result};

use crate::models::Dependency;

pub const FILE_NAME: &str = "sbom.json";

/// Render the contents of `sbom.json`: an array of objects with keys `name`,
/// `version`, `path` and `dependency_file_type`, indented by two spaces.
pub fn render(deps: &[Dependency]) -> Result<String> {
    serde_json::to_string_pretty(deps).context("failed to serialize SBOM as JSON")
}
