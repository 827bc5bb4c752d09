//! Front page builder.

use std::convert::Infallible;
use std::path::PathBuf;
use std::time::Instant;

use crate::emitter::FileEmitter;
use crate::index::{ModuleIndex, PackageIndex};
use crate::project::Project;
use crate::writer::{OverviewIndexWriter, PageError};

/// Resource key of the overview page's window title.
pub const OVERVIEW_TITLE_KEY: &str = "page.overview_summary";

/// File name of the overview page.
pub const OVERVIEW_FILE: &str = "index.html";

/// Which listing the overview page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Modules,
    Packages,
}

impl IndexKind {
    fn description(self) -> &'static str {
        match self {
            Self::Modules => "module index",
            Self::Packages => "package index",
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Listing on the overview page
    pub kind: IndexKind,

    /// Number of modules or packages listed
    pub entries: usize,

    /// Path of the written page
    pub output_path: PathBuf,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Page(#[from] PageError<Infallible>),
}

/// Builds the overview page of a project.
pub struct SiteBuilder {
    project: Project,
}

impl SiteBuilder {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    /// Modules are listed when the project has any, packages otherwise.
    pub fn index_kind(&self) -> IndexKind {
        if self.project.modules.is_empty() {
            IndexKind::Packages
        } else {
            IndexKind::Modules
        }
    }

    /// Meta description: the overview's frontmatter description if given.
    fn description(&self, kind: IndexKind) -> String {
        self.project
            .config
            .overview
            .as_ref()
            .and_then(|body| body.frontmatter())
            .and_then(|fm| fm.description.clone())
            .unwrap_or_else(|| kind.description().to_string())
    }

    /// Build and write the overview page.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let config = &self.project.config;
        let emitter = FileEmitter::new(config);
        let kind = self.index_kind();
        let description = self.description(kind);

        tracing::debug!(?kind, output = %config.output_dir.display(), "building overview page");

        let entries = match kind {
            IndexKind::Modules => {
                let index = ModuleIndex::new(self.project.modules.clone());
                let entries = index.modules().len();
                OverviewIndexWriter::new(config, OVERVIEW_FILE, index, &emitter)
                    .build_overview_index_file(OVERVIEW_TITLE_KEY, &description)?;
                entries
            }
            IndexKind::Packages => {
                let index = PackageIndex::new(self.project.packages.clone());
                let entries = index.packages().len();
                OverviewIndexWriter::new(config, OVERVIEW_FILE, index, &emitter)
                    .build_overview_index_file(OVERVIEW_TITLE_KEY, &description)?;
                entries
            }
        };

        let duration = start.elapsed();

        Ok(BuildResult {
            kind,
            entries,
            output_path: emitter.output_dir().join(OVERVIEW_FILE),
            duration_ms: duration.as_millis() as u64,
        })
    }
}
