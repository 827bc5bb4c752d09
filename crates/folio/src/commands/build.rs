//! Overview page build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_static::{Project, ProjectFile, SiteBuilder};

/// Load the project file, or defaults when it does not exist.
/// Returns an error if the file exists but is malformed.
pub(crate) fn load_project(path: &Path) -> Result<Project> {
    if path.exists() {
        let project = Project::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(project);
    }

    tracing::warn!("{} not found, using defaults", path.display());
    Ok(ProjectFile::default().into_project(Path::new(""))?)
}

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building overview page...");

    let mut project = load_project(config_path)?;
    if let Some(output) = output {
        project.config.output_dir = output;
    }

    let result = SiteBuilder::new(project).build()?;

    tracing::info!(
        "Listed {} {:?} in {}ms",
        result.entries,
        result.kind,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_project_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let project = load_project(&temp.path().join("folio.toml")).unwrap();

        assert_eq!(project.config.output_dir, PathBuf::from("dist"));
        assert!(project.packages.is_empty());
    }

    #[test]
    fn malformed_project_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[docs\n").unwrap();

        let err = load_project(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to load"));
    }
}
