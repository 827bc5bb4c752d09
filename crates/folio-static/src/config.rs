//! Read-only configuration shared by page writers.

use std::path::PathBuf;

use folio_doc::{DocBody, MetaKeywords, Resources};
use serde::Deserialize;

/// Switches for the navigation bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavOptions {
    /// Leave the navigation bar out entirely
    pub no_navbar: bool,
    /// Omit the Tree entry
    pub no_tree: bool,
    /// Omit the Deprecated entry
    pub no_deprecated_list: bool,
    /// Omit the Index entry
    pub no_index: bool,
    /// Omit the Help entry
    pub no_help: bool,
}

/// Configuration of a documentation build.
///
/// Built once and shared by reference with every page writer; writers never
/// mutate it. Optional texts set to an empty string behave as if unset.
#[derive(Debug, Clone)]
pub struct DocConfig {
    /// Title placed at the top of the overview page (may contain markup)
    pub doc_title: Option<String>,

    /// Suffix for window titles; defaults to the plain-text doc title
    pub window_title: Option<String>,

    /// Overview comment
    pub overview: Option<DocBody>,

    /// Markup placed above the top navigation bar
    pub top: Option<String>,

    /// Markup placed below the bottom navigation bar
    pub bottom: Option<String>,

    /// Markup placed inside the top navigation bar
    pub header: Option<String>,

    /// Markup placed inside the bottom navigation bar
    pub footer: Option<String>,

    /// Meta keyword generation
    pub meta_keywords: MetaKeywords,

    /// Navigation bar switches
    pub nav: NavOptions,

    /// Resource strings
    pub resources: Resources,

    /// Output directory
    pub output_dir: PathBuf,

    /// Stylesheet linked from every page
    pub stylesheet: Option<String>,

    /// Document language
    pub lang: String,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            doc_title: None,
            window_title: None,
            overview: None,
            top: None,
            bottom: None,
            header: None,
            footer: None,
            meta_keywords: MetaKeywords::default(),
            nav: NavOptions::default(),
            resources: Resources::new(),
            output_dir: PathBuf::from("dist"),
            stylesheet: None,
            lang: "en".to_string(),
        }
    }
}

impl DocConfig {
    pub fn doc_title(&self) -> Option<&str> {
        non_empty(&self.doc_title)
    }

    pub fn window_title(&self) -> Option<&str> {
        non_empty(&self.window_title)
    }

    /// The overview comment, unless it is absent or has no text.
    pub fn overview(&self) -> Option<&DocBody> {
        self.overview.as_ref().filter(|body| !body.is_empty())
    }

    pub fn top(&self) -> Option<&str> {
        non_empty(&self.top)
    }

    pub fn bottom(&self) -> Option<&str> {
        non_empty(&self.bottom)
    }

    pub fn header(&self) -> Option<&str> {
        non_empty(&self.header)
    }

    pub fn footer(&self) -> Option<&str> {
        non_empty(&self.footer)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
