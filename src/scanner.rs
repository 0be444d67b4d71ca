use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::analyzer;
use crate::detector::{detect_manifest, is_repository, GIT_MARKER};
use crate::models::Dependency;

/// Options controlling a [`scan`].
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Visit repositories in name order and sort `package.json` keys.
    /// Otherwise both follow filesystem / document order.
    pub sorted: bool,
    /// Suppress the "no git dir" diagnostics.
    pub quiet: bool,
}

/// Collect the dependencies of every git repository directly under `root`.
///
/// Children without a `.git` entry are skipped with a diagnostic, and
/// repositories without a manifest are skipped silently. Any manifest that
/// fails to parse aborts the whole scan.
///
/// Returns `None` when no dependency was found at all.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Option<Vec<Dependency>>> {
    let mut children = std::fs::read_dir(root)
        .with_context(|| format!("failed to read directory {}", root.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read directory {}", root.display()))?;

    if options.sorted {
        children.sort();
    }

    let mut all_deps = Vec::new();

    for child in &children {
        if !is_repository(child) {
            if !options.quiet {
                eprintln!(
                    "  {} no git dir {}",
                    "-".dimmed(),
                    child.join(GIT_MARKER).display()
                );
            }
            continue;
        }

        let Some((kind, manifest)) = detect_manifest(child) else {
            tracing::debug!(repo = %child.display(), "no manifest, skipping");
            continue;
        };

        let deps = analyzer::analyze(kind, &manifest, options.sorted)?;
        tracing::info!(
            manifest = %manifest.display(),
            kind = %kind,
            count = deps.len(),
            "scanned repository"
        );

        all_deps.extend(deps);
    }

    Ok(if all_deps.is_empty() {
        None
    } else {
        Some(all_deps)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ManifestKind;
    use std::fs;
    use tempfile::TempDir;

    const QUIET: ScanOptions = ScanOptions {
        sorted: false,
        quiet: true,
    };

    fn repo(root: &Path, name: &str, files: &[(&str, &str)]) {
        let dir = root.join(name);
        fs::create_dir_all(dir.join(".git")).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
    }

    #[test]
    fn test_only_git_repositories_with_manifests_count() {
        let root = TempDir::new().unwrap();
        repo(root.path(), "a", &[("requirements.txt", "pkg==1.0\n")]);
        fs::create_dir(root.path().join("b")).unwrap();
        fs::write(root.path().join("b/requirements.txt"), "other==2.0\n").unwrap();
        repo(root.path(), "c", &[]);

        let deps = scan(root.path(), &QUIET).unwrap().unwrap();
        assert_eq!(
            deps,
            vec![Dependency::new(
                "pkg",
                "1.0",
                root.path().join("a/requirements.txt"),
                ManifestKind::Pip,
            )]
        );
    }

    #[test]
    fn test_requirements_wins_when_both_present() {
        let root = TempDir::new().unwrap();
        repo(
            root.path(),
            "a",
            &[
                ("requirements.txt", "pkg==1.0\n"),
                ("package.json", r#"{"dependencies": {"express": "4"}}"#),
            ],
        );

        let deps = scan(root.path(), &QUIET).unwrap().unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].kind, ManifestKind::Pip);
    }

    #[test]
    fn test_package_json_never_read_when_requirements_present() {
        let root = TempDir::new().unwrap();
        // A broken package.json must not matter when requirements.txt is there.
        repo(
            root.path(),
            "a",
            &[("requirements.txt", "pkg==1.0\n"), ("package.json", "{}")],
        );
        assert!(scan(root.path(), &QUIET).unwrap().is_some());
    }

    #[test]
    fn test_no_repositories_is_none() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("plain")).unwrap();
        fs::write(root.path().join("README.md"), "hi").unwrap();
        assert!(scan(root.path(), &QUIET).unwrap().is_none());
    }

    #[test]
    fn test_empty_manifests_is_none() {
        let root = TempDir::new().unwrap();
        repo(root.path(), "a", &[("requirements.txt", "")]);
        repo(root.path(), "b", &[("package.json", r#"{"dependencies": {}}"#)]);
        assert!(scan(root.path(), &QUIET).unwrap().is_none());
    }

    #[test]
    fn test_parse_error_aborts_scan() {
        let root = TempDir::new().unwrap();
        repo(root.path(), "a", &[("requirements.txt", "pkg==1.0\n")]);
        repo(root.path(), "b", &[("package.json", r#"{"name": "b"}"#)]);
        assert!(scan(root.path(), &QUIET).is_err());
    }

    #[test]
    fn test_sorted_visits_repositories_by_name() {
        let root = TempDir::new().unwrap();
        repo(root.path(), "zeta", &[("requirements.txt", "z==1\n")]);
        repo(root.path(), "alpha", &[("package.json", r#"{"dependencies": {"b": "2", "a": "1"}}"#)]);
        repo(root.path(), "mid", &[("requirements.txt", "m==1\n")]);

        let options = ScanOptions {
            sorted: true,
            quiet: true,
        };
        let deps = scan(root.path(), &options).unwrap().unwrap();
        let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "m", "z"]);
    }

    #[test]
    fn test_root_is_file_fails() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("file");
        fs::write(&file, "").unwrap();
        assert!(scan(&file, &QUIET).is_err());
    }
}
