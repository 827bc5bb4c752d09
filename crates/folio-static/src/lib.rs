//! Overview page generator for folio documentation.
//!
//! Assembles the front page of a documentation set (title, overview comment
//! and a module or package listing between two navigation bars) and writes
//! it as an HTML document.

pub mod builder;
pub mod config;
pub mod emitter;
pub mod index;
pub mod navigation;
pub mod project;
pub mod templates;
pub mod writer;

pub use builder::{BuildError, BuildResult, IndexKind, SiteBuilder};
pub use config::{DocConfig, NavOptions};
pub use emitter::{DocumentEmitter, EmitError, FileEmitter};
pub use index::{ModuleEntry, ModuleIndex, PackageEntry, PackageIndex};
pub use navigation::{NavPosition, Navigation, PageMode};
pub use project::{ConfigError, Project, ProjectFile};
pub use writer::{IndexContent, OverviewIndexWriter, PageBody, PageError};
