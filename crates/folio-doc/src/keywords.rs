//! Meta keywords for generated pages.

use folio_markup::strip_tags;

use crate::resources::Resources;

/// Produces the `keywords` meta entries of a page.
///
/// Keywords are only produced when enabled for the project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetaKeywords {
    enabled: bool,
}

impl MetaKeywords {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Keywords for an overview page: the resolved page title, followed by
    /// the document title when there is one.
    pub fn overview(
        &self,
        resources: &Resources,
        title_key: &str,
        doc_title: Option<&str>,
    ) -> Vec<String> {
        if !self.enabled {
            return Vec::new();
        }

        let mut keyword = resources.get_text(title_key);
        if let Some(doc_title) = doc_title.map(strip_tags).filter(|t| !t.is_empty()) {
            keyword.push_str(", ");
            keyword.push_str(&doc_title);
        }
        vec![keyword]
    }
}
