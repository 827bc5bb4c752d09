//! Project file (`folio.toml`) loading.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use folio_doc::{DocBody, MetaKeywords, ParseError, Resources};
use serde::Deserialize;

use crate::config::{DocConfig, NavOptions};
use crate::index::{ModuleEntry, PackageEntry};

/// Configuration file structure (folio.toml).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    pub docs: DocsSection,
    pub navigation: NavOptions,
    /// Resource string overrides
    pub resources: HashMap<String, String>,
    pub modules: Vec<ModuleEntry>,
    pub packages: Vec<PackageEntry>,
}

/// The `[docs]` table.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocsSection {
    pub output: String,
    pub doc_title: Option<String>,
    pub window_title: Option<String>,
    /// Path of the overview markdown file
    pub overview: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub keywords: bool,
    pub stylesheet: Option<String>,
    pub lang: String,
}

impl Default for DocsSection {
    fn default() -> Self {
        Self {
            output: "dist".to_string(),
            doc_title: None,
            window_title: None,
            overview: None,
            top: None,
            bottom: None,
            header: None,
            footer: None,
            keywords: false,
            stylesheet: None,
            lang: "en".to_string(),
        }
    }
}

/// Errors that can occur while loading a project.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid overview file {}: {source}", .path.display())]
    Overview { path: PathBuf, source: ParseError },
}

/// A loaded project: the build configuration and the elements to list.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub config: DocConfig,
    pub modules: Vec<ModuleEntry>,
    pub packages: Vec<PackageEntry>,
}

impl Project {
    /// Load a project file. Relative paths inside it resolve against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = ProjectFile::load(path)?;
        let base_dir = path.parent().unwrap_or(Path::new(""));
        file.into_project(base_dir)
    }
}

impl ProjectFile {
    /// Read and parse a project file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded project file");

        Ok(file)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve into a [`Project`], reading the overview file if one is named.
    pub fn into_project(self, base_dir: &Path) -> Result<Project, ConfigError> {
        let docs = self.docs;

        let overview = match docs.overview {
            Some(name) if !name.is_empty() => {
                let path = base_dir.join(name);
                let source = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                let body = DocBody::parse(&source)
                    .map_err(|source| ConfigError::Overview { path, source })?;
                Some(body)
            }
            _ => None,
        };

        let config = DocConfig {
            doc_title: docs.doc_title,
            window_title: docs.window_title,
            overview,
            top: docs.top,
            bottom: docs.bottom,
            header: docs.header,
            footer: docs.footer,
            meta_keywords: MetaKeywords::new(docs.keywords),
            nav: self.navigation,
            resources: Resources::with_overrides(self.resources),
            output_dir: base_dir.join(docs.output),
            stylesheet: docs.stylesheet,
            lang: docs.lang,
        };

        Ok(Project {
            config,
            modules: self.modules,
            packages: self.packages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_apply_to_empty_file() {
        let file = ProjectFile::from_toml("").unwrap();

        assert_eq!(file.docs.output, "dist");
        assert_eq!(file.docs.lang, "en");
        assert!(!file.docs.keywords);
        assert_eq!(file.navigation, NavOptions::default());
        assert!(file.packages.is_empty());
    }

    #[test]
    fn parses_full_file() {
        let file = ProjectFile::from_toml(
            r#"
[docs]
doc_title = "MyProj API"
window_title = "MyProj"
top = "<b>Draft</b>"
keywords = true

[navigation]
no_tree = true

[resources]
"index.packages" = "All packages"

[[packages]]
name = "com.example.io"
summary = "Streams."

[[packages]]
name = "com.example.net"
"#,
        )
        .unwrap();

        assert_eq!(file.docs.doc_title.as_deref(), Some("MyProj API"));
        assert!(file.docs.keywords);
        assert!(file.navigation.no_tree);
        assert!(!file.navigation.no_help);
        assert_eq!(file.packages.len(), 2);
        assert_eq!(file.packages[1].summary, None);
        assert_eq!(file.resources["index.packages"], "All packages");
    }

    #[test]
    fn loads_overview_relative_to_project_file() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("overview.md"),
            "---\ndescription: API reference\n---\nSee overview.\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("folio.toml"),
            "[docs]\noverview = \"overview.md\"\noutput = \"site\"\n",
        )
        .unwrap();

        let project = Project::load(&temp.path().join("folio.toml")).unwrap();
        let overview = project.config.overview().unwrap();

        assert_eq!(overview.markdown().trim(), "See overview.");
        assert_eq!(
            overview.frontmatter().and_then(|f| f.description.as_deref()),
            Some("API reference")
        );
        assert_eq!(project.config.output_dir, temp.path().join("site"));
    }

    #[test]
    fn missing_overview_is_a_read_error() {
        let result = ProjectFile::from_toml("[docs]\noverview = \"nope.md\"\n")
            .unwrap()
            .into_project(Path::new("/nonexistent"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[docs\n").unwrap();

        assert!(matches!(
            ProjectFile::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
