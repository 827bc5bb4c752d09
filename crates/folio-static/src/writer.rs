//! Overview page assembly.
//!
//! [`OverviewIndexWriter`] builds the site's front page in a fixed order:
//! header (top text, navigation bar), main (document title, overview
//! comment, page-specific index), footer (navigation bar, bottom text). The
//! index is the only part that differs between page kinds and is supplied
//! through [`IndexContent`].

use std::path::{Path, PathBuf};

use folio_markup::{strip_tags, Content, HtmlStyle, HtmlTag, HtmlTree};

use crate::config::DocConfig;
use crate::emitter::{DocumentEmitter, EmitError};
use crate::navigation::{NavPosition, Navigation, PageMode};

/// Page-specific listing placed after the overview header.
pub trait IndexContent {
    /// Failure reported by this listing; passed through to the caller as is.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append the listing to `main`. Called exactly once per page build.
    fn add_index(&self, config: &DocConfig, main: &mut HtmlTree) -> Result<(), Self::Error>;
}

/// The `body` element of a page, tagged with the page's window title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBody {
    window_title: String,
    tree: HtmlTree,
}

impl PageBody {
    pub fn new(window_title: impl Into<String>) -> Self {
        Self {
            window_title: window_title.into(),
            tree: HtmlTree::body(),
        }
    }

    pub fn add(&mut self, content: impl Into<Content>) {
        self.tree.add(content);
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn tree(&self) -> &HtmlTree {
        &self.tree
    }

    /// The first child element with the given tag.
    pub fn section(&self, tag: HtmlTag) -> Option<&HtmlTree> {
        self.tree.child_trees().find(|t| t.tag() == tag)
    }
}

/// Errors that can occur while building an overview page.
#[derive(Debug, thiserror::Error)]
pub enum PageError<E: std::error::Error + 'static> {
    #[error("Failed to build index content")]
    Index(#[source] E),

    #[error(transparent)]
    Emission(#[from] EmitError),
}

/// Writer for an overview page.
pub struct OverviewIndexWriter<'a, P, E> {
    config: &'a DocConfig,
    filename: PathBuf,
    navigation: Navigation,
    index: P,
    emitter: E,
}

impl<'a, P, E> OverviewIndexWriter<'a, P, E>
where
    P: IndexContent,
    E: DocumentEmitter,
{
    /// Create a writer for the page stored at `filename`.
    pub fn new(config: &'a DocConfig, filename: impl Into<PathBuf>, index: P, emitter: E) -> Self {
        Self {
            config,
            filename: filename.into(),
            navigation: Navigation::new(PageMode::Overview, config.nav),
            index,
            emitter,
        }
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Add the top text and the top navigation bar.
    pub fn add_navigation_bar_header(&self, header: &mut HtmlTree) {
        self.add_top(header);
        header.add(self.navigation.render(
            &self.config.resources,
            NavPosition::Top,
            self.config.header(),
        ));
    }

    /// Add the bottom navigation bar and the bottom text.
    pub fn add_navigation_bar_footer(&self, footer: &mut HtmlTree) {
        footer.add(self.navigation.render(
            &self.config.resources,
            NavPosition::Bottom,
            self.config.footer(),
        ));
        self.add_bottom(footer);
    }

    /// Add the document title and, if there is one, the overview comment.
    pub fn add_overview_header(&self, main: &mut HtmlTree) {
        self.add_configuration_title(main);
        if self.config.overview().is_some() {
            let mut div = HtmlTree::new(HtmlTag::Div).with_style(HtmlStyle::ContentContainer);
            self.add_overview_comment(&mut div);
            main.add(div);
        }
    }

    /// Add the rendered overview comment.
    pub fn add_overview_comment(&self, tree: &mut HtmlTree) {
        if let Some(overview) = self.config.overview() {
            tree.add(HtmlTree::div(
                HtmlStyle::Block,
                Content::raw(overview.to_html()),
            ));
        }
    }

    /// Add the document title as the page heading, if one is configured.
    pub fn add_configuration_title(&self, tree: &mut HtmlTree) {
        if let Some(doc_title) = self.config.doc_title() {
            let heading = HtmlTree::heading(HtmlTag::H1, HtmlStyle::Title, Content::raw(doc_title));
            tree.add(HtmlTree::div(HtmlStyle::Header, heading));
        }
    }

    fn add_top(&self, header: &mut HtmlTree) {
        if let Some(top) = self.config.top() {
            header.add(Content::raw(top));
        }
    }

    fn add_bottom(&self, footer: &mut HtmlTree) {
        if let Some(bottom) = self.config.bottom() {
            footer.add(
                HtmlTree::new(HtmlTag::P)
                    .with_style(HtmlStyle::LegalCopy)
                    .with(HtmlTree::new(HtmlTag::Small).with(Content::raw(bottom))),
            );
        }
    }

    /// Decorate a page label with the project's window title.
    ///
    /// The suffix is the configured window title, or else the document title
    /// with its markup removed.
    pub fn window_title(&self, label: &str) -> String {
        let suffix = self
            .config
            .window_title()
            .map(str::to_string)
            .or_else(|| self.config.doc_title().map(strip_tags))
            .filter(|s| !s.is_empty());

        match suffix {
            Some(suffix) => self
                .config
                .resources
                .get_text_with("page.window_title", &[label, suffix.as_str()]),
            None => label.to_string(),
        }
    }

    /// Assemble the page body without emitting it.
    pub fn assemble(&self, title_key: &str) -> Result<PageBody, P::Error> {
        let label = self.config.resources.get_text(title_key);
        let mut body = PageBody::new(self.window_title(&label));

        let mut header = HtmlTree::header();
        self.add_navigation_bar_header(&mut header);

        let mut main = HtmlTree::main();
        self.add_overview_header(&mut main);
        self.index.add_index(self.config, &mut main)?;

        let mut footer = HtmlTree::footer();
        self.add_navigation_bar_footer(&mut footer);

        body.add(header);
        body.add(main);
        body.add(footer);

        tracing::debug!(window_title = body.window_title(), "assembled overview page");

        Ok(body)
    }

    /// Assemble the page and hand it to the emitter.
    ///
    /// `title_key` names the resource string used for the window title;
    /// `description` becomes the page's meta description.
    pub fn build_overview_index_file(
        &self,
        title_key: &str,
        description: &str,
    ) -> Result<(), PageError<P::Error>> {
        let body = self.assemble(title_key).map_err(PageError::Index)?;

        let keywords = self.config.meta_keywords.overview(
            &self.config.resources,
            title_key,
            self.config.doc_title(),
        );

        self.emitter
            .emit(&self.filename, &keywords, description, &body)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::io;

    use folio_doc::{DocBody, MetaKeywords};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::NavOptions;

    const TITLE_KEY: &str = "page.overview_summary";

    /// Appends a single list labelled with the given text.
    struct ListIndex(&'static str);

    impl IndexContent for ListIndex {
        type Error = Infallible;

        fn add_index(&self, _config: &DocConfig, main: &mut HtmlTree) -> Result<(), Infallible> {
            main.add(list(self.0));
            Ok(())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("listing unavailable")]
    struct ListingError;

    struct FailingIndex;

    impl IndexContent for FailingIndex {
        type Error = ListingError;

        fn add_index(&self, _config: &DocConfig, _main: &mut HtmlTree) -> Result<(), ListingError> {
            Err(ListingError)
        }
    }

    #[derive(Debug, Clone)]
    struct Emitted {
        path: PathBuf,
        keywords: Vec<String>,
        description: String,
        body: PageBody,
    }

    #[derive(Default)]
    struct RecordingEmitter {
        pages: RefCell<Vec<Emitted>>,
    }

    impl DocumentEmitter for RecordingEmitter {
        fn emit(
            &self,
            path: &Path,
            meta_keywords: &[String],
            description: &str,
            body: &PageBody,
        ) -> Result<(), EmitError> {
            self.pages.borrow_mut().push(Emitted {
                path: path.to_path_buf(),
                keywords: meta_keywords.to_vec(),
                description: description.to_string(),
                body: body.clone(),
            });
            Ok(())
        }
    }

    struct FailingEmitter;

    impl DocumentEmitter for FailingEmitter {
        fn emit(&self, path: &Path, _: &[String], _: &str, _: &PageBody) -> Result<(), EmitError> {
            Err(EmitError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    fn list(label: &str) -> HtmlTree {
        HtmlTree::new(HtmlTag::Ul).with(HtmlTree::li(label))
    }

    fn title_heading(text: &str) -> HtmlTree {
        HtmlTree::div(
            HtmlStyle::Header,
            HtmlTree::heading(HtmlTag::H1, HtmlStyle::Title, Content::raw(text)),
        )
    }

    fn quiet_nav() -> NavOptions {
        NavOptions {
            no_navbar: true,
            ..Default::default()
        }
    }

    fn assemble(config: &DocConfig, label: &'static str) -> PageBody {
        OverviewIndexWriter::new(config, "index.html", ListIndex(label), RecordingEmitter::default())
            .assemble(TITLE_KEY)
            .unwrap()
    }

    fn section(body: &PageBody, tag: HtmlTag) -> HtmlTree {
        body.section(tag).cloned().unwrap()
    }

    fn count_style(tree: &HtmlTree, style: HtmlStyle) -> usize {
        let own = usize::from(tree.style() == Some(style));
        own + tree
            .child_trees()
            .map(|child| count_style(child, style))
            .sum::<usize>()
    }

    #[test]
    fn titled_page_without_overview() {
        let config = DocConfig {
            doc_title: Some("MyProj API".to_string()),
            overview: Some(DocBody::from_markdown("")),
            ..Default::default()
        };

        let main = section(&assemble(&config, "Packages"), HtmlTag::Main);

        assert_eq!(
            main.children(),
            &[
                Content::Tree(title_heading("MyProj API")),
                Content::Tree(list("Packages")),
            ]
        );
    }

    #[test]
    fn untitled_page_with_overview() {
        let config = DocConfig {
            doc_title: Some(String::new()),
            overview: Some(DocBody::from_markdown("See overview.")),
            ..Default::default()
        };

        let main = section(&assemble(&config, "Modules"), HtmlTag::Main);

        let overview = HtmlTree::new(HtmlTag::Div)
            .with_style(HtmlStyle::ContentContainer)
            .with(HtmlTree::div(
                HtmlStyle::Block,
                Content::raw("<p>See overview.</p>\n"),
            ));
        assert_eq!(
            main.children(),
            &[Content::Tree(overview), Content::Tree(list("Modules"))]
        );
    }

    #[test]
    fn title_heading_uses_configured_text() {
        let config = DocConfig {
            doc_title: Some("<em>MyProj</em> 2.0".to_string()),
            ..Default::default()
        };

        let main = section(&assemble(&config, "Packages"), HtmlTag::Main);

        assert_eq!(count_style(&main, HtmlStyle::Title), 1);
        assert!(main.to_html().contains("<h1 class=\"title\"><em>MyProj</em> 2.0</h1>"));
    }

    #[test]
    fn no_heading_without_title() {
        let main = section(&assemble(&DocConfig::default(), "Packages"), HtmlTag::Main);

        assert_eq!(count_style(&main, HtmlStyle::Title), 0);
        assert_eq!(main.children(), &[Content::Tree(list("Packages"))]);
    }

    #[test]
    fn overview_sits_between_title_and_index() {
        let config = DocConfig {
            doc_title: Some("MyProj API".to_string()),
            overview: Some(DocBody::from_markdown("See overview.")),
            ..Default::default()
        };

        let main = section(&assemble(&config, "Packages"), HtmlTag::Main);
        let styles: Vec<_> = main.child_trees().map(|t| t.style()).collect();

        assert_eq!(
            styles,
            vec![
                Some(HtmlStyle::Header),
                Some(HtmlStyle::ContentContainer),
                None
            ]
        );
        assert_eq!(count_style(&main, HtmlStyle::ContentContainer), 1);
    }

    #[test]
    fn absent_overview_adds_no_container() {
        let main = section(&assemble(&DocConfig::default(), "Packages"), HtmlTag::Main);

        assert_eq!(count_style(&main, HtmlStyle::ContentContainer), 0);
    }

    #[test]
    fn header_puts_top_text_before_navigation() {
        let config = DocConfig {
            top: Some("<b>Top</b>".to_string()),
            ..Default::default()
        };

        let header = section(&assemble(&config, "Packages"), HtmlTag::Header);
        let children = header.children();

        assert_eq!(children.len(), 2);
        assert_eq!(children[0], Content::raw("<b>Top</b>"));
        assert!(matches!(&children[1], Content::Tree(t) if t.tag() == HtmlTag::Nav));
    }

    #[test]
    fn footer_puts_navigation_before_bottom_text() {
        let config = DocConfig {
            bottom: Some("Copyright".to_string()),
            ..Default::default()
        };

        let footer = section(&assemble(&config, "Packages"), HtmlTag::Footer);
        let children: Vec<_> = footer.child_trees().collect();

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag(), HtmlTag::Nav);
        assert_eq!(children[1].style(), Some(HtmlStyle::LegalCopy));
        assert_eq!(children[1].text_content(), "Copyright");
    }

    #[test]
    fn user_header_and_footer_go_inside_navigation() {
        let config = DocConfig {
            header: Some("Header text".to_string()),
            footer: Some("Footer text".to_string()),
            ..Default::default()
        };

        let body = assemble(&config, "Packages");
        let header = section(&body, HtmlTag::Header).to_html();
        let footer = section(&body, HtmlTag::Footer).to_html();

        assert!(header.contains("<div class=\"aboutLanguage\">Header text</div>"));
        assert!(!header.contains("Footer text"));
        assert!(footer.contains("<div class=\"aboutLanguage\">Footer text</div>"));
    }

    #[test]
    fn optional_texts_absent_leave_sections_minimal() {
        let config = DocConfig {
            nav: quiet_nav(),
            ..Default::default()
        };

        let body = assemble(&config, "Packages");

        assert!(section(&body, HtmlTag::Header).is_empty());
        assert!(section(&body, HtmlTag::Footer).is_empty());
    }

    #[test]
    fn body_orders_header_main_footer() {
        let body = assemble(&DocConfig::default(), "Packages");
        let tags: Vec<_> = body.tree().child_trees().map(HtmlTree::tag).collect();

        assert_eq!(tags, vec![HtmlTag::Header, HtmlTag::Main, HtmlTag::Footer]);
    }

    #[test]
    fn assembly_is_repeatable() {
        let config = DocConfig {
            doc_title: Some("MyProj API".to_string()),
            overview: Some(DocBody::from_markdown("See overview.")),
            top: Some("Top".to_string()),
            bottom: Some("Bottom".to_string()),
            ..Default::default()
        };
        let writer = OverviewIndexWriter::new(
            &config,
            "index.html",
            ListIndex("Packages"),
            RecordingEmitter::default(),
        );

        assert_eq!(
            writer.assemble(TITLE_KEY).unwrap(),
            writer.assemble(TITLE_KEY).unwrap()
        );
    }

    #[test]
    fn window_title_prefers_configured_window_title() {
        let config = DocConfig {
            doc_title: Some("<b>MyProj</b> API".to_string()),
            window_title: Some("MyProj".to_string()),
            ..Default::default()
        };

        assert_eq!(assemble(&config, "Packages").window_title(), "Overview (MyProj)");
    }

    #[test]
    fn window_title_falls_back_to_plain_doc_title() {
        let config = DocConfig {
            doc_title: Some("<b>MyProj</b> API".to_string()),
            ..Default::default()
        };

        assert_eq!(
            assemble(&config, "Packages").window_title(),
            "Overview (MyProj API)"
        );
        assert_eq!(
            assemble(&DocConfig::default(), "Packages").window_title(),
            "Overview"
        );
    }

    #[test]
    fn build_emits_keywords_and_description() {
        let config = DocConfig {
            doc_title: Some("MyProj API".to_string()),
            meta_keywords: MetaKeywords::new(true),
            ..Default::default()
        };
        let emitter = RecordingEmitter::default();
        let writer = OverviewIndexWriter::new(&config, "index.html", ListIndex("Packages"), &emitter);

        writer
            .build_overview_index_file(TITLE_KEY, "package index")
            .unwrap();

        let pages = emitter.pages.borrow();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].path, PathBuf::from("index.html"));
        assert_eq!(pages[0].keywords, vec!["Overview, MyProj API".to_string()]);
        assert_eq!(pages[0].description, "package index");
        assert_eq!(pages[0].body, writer.assemble(TITLE_KEY).unwrap());
    }

    #[test]
    fn emission_failure_is_surfaced() {
        let config = DocConfig::default();
        let writer = OverviewIndexWriter::new(&config, "index.html", ListIndex("Packages"), FailingEmitter);

        let err = writer
            .build_overview_index_file(TITLE_KEY, "package index")
            .unwrap_err();

        match err {
            PageError::Emission(EmitError::Io { path, source }) => {
                assert_eq!(path, PathBuf::from("index.html"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected an emission failure, got {other:?}"),
        }
    }

    #[test]
    fn index_failure_stops_before_emission() {
        let config = DocConfig::default();
        let emitter = RecordingEmitter::default();
        let writer = OverviewIndexWriter::new(&config, "index.html", FailingIndex, &emitter);

        let err = writer
            .build_overview_index_file(TITLE_KEY, "package index")
            .unwrap_err();

        assert!(matches!(err, PageError::Index(ListingError)));
        assert!(emitter.pages.borrow().is_empty());
    }
}
