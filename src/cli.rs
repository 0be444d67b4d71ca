use std::path::{Component, Path, PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "repo-sbom",
    about = "Scan a directory of git repositories and emit a consolidated SBOM",
    version
)]
pub struct Cli {
    /// Root directory holding the repositories to scan
    #[arg(value_name = "DIRECTORY")]
    pub path: PathBuf,

    /// Config file [default: <DIRECTORY>/.repo-sbom/config.toml, fallback ~/.config/repo-sbom/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for sbom.csv and sbom.json [default: DIRECTORY]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Sort repositories and package.json dependencies by name
    #[arg(long)]
    pub sorted: bool,

    /// Print a summary table of the scanned manifests
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not report directories skipped for lacking a .git entry
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter for diagnostics on stderr (e.g. `debug`, `repo_sbom=trace`)
    #[arg(long, default_value = "warn", value_name = "FILTER")]
    pub log_level: String,
}

/// Make `path` absolute against the working directory and drop `.` / `..`
/// components lexically. Symlinks are kept as given.
pub fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    let mut out = PathBuf::new();
    for component in std::path::absolute(path)?.components() {
        match component {
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir => {}
            other => out.push(other),
        }
    }
    Ok(out)
}
