//! SBOM writers and terminal output.
//!
//! - [`csv`] — `sbom.csv`, one headerless row per dependency.
//! - [`json`] — `sbom.json`, a pretty-printed array of dependency objects.
//! - [`terminal`] — per-manifest summary table shown with `--verbose`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::Dependency;

pub mod csv;
pub mod json;
pub mod terminal;

/// Write both `sbom.csv` and `sbom.json` into `output_dir`.
///
/// Both documents are rendered before either file is touched, so a
/// serialization failure leaves no SBOM behind.
pub fn write_all(deps: &[Dependency], output_dir: &Path) -> Result<[PathBuf; 2]> {
    let csv = csv::render(deps)?;
    let json = json::render(deps)?;

    Ok([
        save(output_dir, csv::FILE_NAME, "CSV", &csv)?,
        save(output_dir, json::FILE_NAME, "JSON", &json)?,
    ])
}

fn save(output_dir: &Path, file_name: &str, format: &str, content: &str) -> Result<PathBuf> {
    let output_path = output_dir.join(file_name);

    std::fs::write(&output_path, content)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!("Saved SBOM in {} format to {}", format, output_path.display());
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ManifestKind;
    use tempfile::TempDir;

    #[test]
    fn test_write_all_writes_both_files() {
        let dir = TempDir::new().unwrap();
        let deps = vec![Dependency::new("a", "1", "/r/a/requirements.txt", ManifestKind::Pip)];

        let [csv, json] = write_all(&deps, dir.path()).unwrap();
        assert_eq!(csv, dir.path().join("sbom.csv"));
        assert_eq!(json, dir.path().join("sbom.json"));
        assert!(csv.exists());
        assert!(json.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_writes_nothing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let path = Path::new("/r").join(OsStr::from_bytes(b"repo\xff")).join("requirements.txt");
        let deps = vec![
            Dependency::new("a", "1", "/r/a/requirements.txt", ManifestKind::Pip),
            Dependency::new("b", "2", path, ManifestKind::Pip),
        ];

        let err = write_all(&deps, dir.path()).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
        assert!(err.to_string().contains("requirements.txt"));
        assert!(!dir.path().join("sbom.csv").exists());
        assert!(!dir.path().join("sbom.json").exists());
    }
}
