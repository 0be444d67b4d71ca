use anyhow::{anyhow, Result};

use crate::models::Dependency;

pub const FILE_NAME: &str = "sbom.csv";

/// Render the contents of `sbom.csv`.
///
/// Columns are `name,version,path,dependency_file_type`, with no header row.
/// Rows end with `\r\n` regardless of platform. Fails on a manifest path
/// that is not UTF-8.
pub fn render(deps: &[Dependency]) -> Result<String> {
    let mut out = String::new();
    for dep in deps {
        let path = dep
            .path
            .to_str()
            .ok_or_else(|| anyhow!("path is not valid UTF-8: {}", dep.path.display()))?;
        let fields = [
            dep.name.as_str(),
            dep.version.as_str(),
            path,
            dep.kind.as_str(),
        ];
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            push_field(&mut out, field);
        }
        out.push_str("\r\n");
    }
    Ok(out)
}

/// Quote only when the field holds a delimiter, quote or line break.
fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
