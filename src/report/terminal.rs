use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Dependency, ManifestKind};

/// Print a per-manifest summary of the scan rooted at `root`.
pub fn render(deps: &[Dependency], root: &Path) {
    println!(
        "\n {} v{}",
        "repo-sbom".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanned: {}\n", root.display());

    println!("{}", build_table(deps, root));

    let manifests = group_by_manifest(deps).len();
    println!(
        "\n Total: {} dependencies from {} manifests\n",
        deps.len().to_string().bold(),
        manifests.to_string().bold()
    );
}

fn build_table(deps: &[Dependency], root: &Path) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Manifest").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Dependencies").add_attribute(Attribute::Bold),
        ]);

    for (path, kind, count) in group_by_manifest(deps) {
        let kind_color = match kind {
            ManifestKind::Pip => Color::Blue,
            ManifestKind::Npm => Color::Red,
        };
        let shown = path.strip_prefix(root).unwrap_or(path);

        table.add_row(vec![
            Cell::new(shown.display()),
            Cell::new(kind).fg(kind_color),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Count records per manifest, keeping first-seen order.
fn group_by_manifest(deps: &[Dependency]) -> Vec<(&Path, ManifestKind, usize)> {
    let mut groups: Vec<(&Path, ManifestKind, usize)> = Vec::new();
    for dep in deps {
        match groups.iter_mut().find(|(path, _, _)| *path == dep.path) {
            Some((_, _, count)) => *count += 1,
            None => groups.push((dep.path.as_path(), dep.kind, 1)),
        }
    }
    groups
}
