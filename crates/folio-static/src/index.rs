//! Module and package listings for the overview page.

use std::convert::Infallible;

use folio_doc::{first_sentence, Resources};
use folio_markup::{HtmlAttr, HtmlStyle, HtmlTag, HtmlTree};
use serde::Deserialize;

use crate::config::DocConfig;
use crate::writer::IndexContent;

/// A documented module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleEntry {
    pub name: String,
    /// Markdown summary; the first sentence is shown in the listing
    #[serde(default)]
    pub summary: Option<String>,
}

/// A documented package.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageEntry {
    /// Dotted package name, e.g. `com.example.io`
    pub name: String,
    /// Markdown summary; the first sentence is shown in the listing
    #[serde(default)]
    pub summary: Option<String>,
}

/// Listing of all modules, sorted by name.
#[derive(Debug, Clone, Default)]
pub struct ModuleIndex {
    modules: Vec<ModuleEntry>,
}

impl ModuleIndex {
    pub fn new(mut modules: Vec<ModuleEntry>) -> Self {
        modules.sort_by(|a, b| a.name.cmp(&b.name));
        modules.dedup_by(|a, b| a.name == b.name);
        Self { modules }
    }

    pub fn modules(&self) -> &[ModuleEntry] {
        &self.modules
    }
}

impl IndexContent for ModuleIndex {
    type Error = Infallible;

    fn add_index(&self, config: &DocConfig, main: &mut HtmlTree) -> Result<(), Infallible> {
        if self.modules.is_empty() {
            return Ok(());
        }

        let rows = self.modules.iter().map(|module| SummaryRow {
            href: format!("{}/module-summary.html", module.name),
            name: &module.name,
            summary: module.summary.as_deref(),
        });
        main.add(summary_table(
            &config.resources,
            "index.modules",
            "index.module",
            rows,
        ));

        Ok(())
    }
}

/// Listing of all packages, sorted by name.
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    packages: Vec<PackageEntry>,
}

impl PackageIndex {
    pub fn new(mut packages: Vec<PackageEntry>) -> Self {
        packages.sort_by(|a, b| a.name.cmp(&b.name));
        packages.dedup_by(|a, b| a.name == b.name);
        Self { packages }
    }

    pub fn packages(&self) -> &[PackageEntry] {
        &self.packages
    }
}

impl IndexContent for PackageIndex {
    type Error = Infallible;

    fn add_index(&self, config: &DocConfig, main: &mut HtmlTree) -> Result<(), Infallible> {
        if self.packages.is_empty() {
            return Ok(());
        }

        let rows = self.packages.iter().map(|package| SummaryRow {
            href: format!("{}/package-summary.html", package.name.replace('.', "/")),
            name: &package.name,
            summary: package.summary.as_deref(),
        });
        main.add(summary_table(
            &config.resources,
            "index.packages",
            "index.package",
            rows,
        ));

        Ok(())
    }
}

struct SummaryRow<'a> {
    href: String,
    name: &'a str,
    summary: Option<&'a str>,
}

/// Two-column table of linked names and first-sentence summaries.
fn summary_table<'a>(
    resources: &Resources,
    caption_key: &str,
    column_key: &str,
    rows: impl Iterator<Item = SummaryRow<'a>>,
) -> HtmlTree {
    let caption = HtmlTree::new(HtmlTag::Caption)
        .with(HtmlTree::new(HtmlTag::Span).with(resources.get_text(caption_key)));

    let head_row = HtmlTree::new(HtmlTag::Tr)
        .with(column_heading(HtmlStyle::ColFirst, resources.get_text(column_key)))
        .with(column_heading(
            HtmlStyle::ColLast,
            resources.get_text("index.description"),
        ));

    let mut body = HtmlTree::new(HtmlTag::Tbody);
    for (i, row) in rows.enumerate() {
        let style = if i % 2 == 0 {
            HtmlStyle::AltColor
        } else {
            HtmlStyle::RowColor
        };

        let name = HtmlTree::new(HtmlTag::Th)
            .with_style(HtmlStyle::ColFirst)
            .with_attr(HtmlAttr::Scope, "row")
            .with(HtmlTree::link(row.href, row.name));

        let summary = row.summary.map(first_sentence).unwrap_or_default();
        let mut description = HtmlTree::new(HtmlTag::Td).with_style(HtmlStyle::ColLast);
        if !summary.is_empty() {
            description.add(HtmlTree::div(HtmlStyle::Block, summary));
        }

        body.add(
            HtmlTree::new(HtmlTag::Tr)
                .with_style(style)
                .with(name)
                .with(description),
        );
    }

    HtmlTree::new(HtmlTag::Table)
        .with_style(HtmlStyle::OverviewSummary)
        .with(caption)
        .with(HtmlTree::new(HtmlTag::Thead).with(head_row))
        .with(body)
}

fn column_heading(style: HtmlStyle, label: String) -> HtmlTree {
    HtmlTree::new(HtmlTag::Th)
        .with_style(style)
        .with_attr(HtmlAttr::Scope, "col")
        .with(label)
}
