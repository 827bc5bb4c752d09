//! Navigation bar shown above and below every page.

use folio_doc::Resources;
use folio_markup::{Content, HtmlAttr, HtmlStyle, HtmlTag, HtmlTree};

use crate::config::NavOptions;

/// The kinds of page a navigation bar can be rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMode {
    Overview,
    Module,
    Package,
    Class,
    Tree,
    Deprecated,
    Index,
    Help,
}

impl PageMode {
    /// Every mode, in navigation bar order.
    pub const ALL: [PageMode; 8] = [
        Self::Overview,
        Self::Module,
        Self::Package,
        Self::Class,
        Self::Tree,
        Self::Deprecated,
        Self::Index,
        Self::Help,
    ];

    fn label_key(self) -> &'static str {
        match self {
            Self::Overview => "nav.overview",
            Self::Module => "nav.module",
            Self::Package => "nav.package",
            Self::Class => "nav.class",
            Self::Tree => "nav.tree",
            Self::Deprecated => "nav.deprecated",
            Self::Index => "nav.index",
            Self::Help => "nav.help",
        }
    }

    /// File of the site-wide page for this mode. Module, package and class
    /// pages depend on the element being shown, so they have none.
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::Overview => Some("index.html"),
            Self::Tree => Some("overview-tree.html"),
            Self::Deprecated => Some("deprecated-list.html"),
            Self::Index => Some("index-all.html"),
            Self::Help => Some("help-doc.html"),
            Self::Module | Self::Package | Self::Class => None,
        }
    }
}

/// Where a navigation bar is placed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPosition {
    Top,
    Bottom,
}

impl NavPosition {
    fn id(self) -> &'static str {
        match self {
            Self::Top => "navbar.top",
            Self::Bottom => "navbar.bottom",
        }
    }

    fn style(self) -> HtmlStyle {
        match self {
            Self::Top => HtmlStyle::TopNav,
            Self::Bottom => HtmlStyle::BottomNav,
        }
    }
}

/// Navigation bar for one kind of page.
#[derive(Debug, Clone, Copy)]
pub struct Navigation {
    page_mode: PageMode,
    options: NavOptions,
}

impl Navigation {
    pub fn new(page_mode: PageMode, options: NavOptions) -> Self {
        Self { page_mode, options }
    }

    pub fn page_mode(&self) -> PageMode {
        self.page_mode
    }

    fn shows(&self, mode: PageMode) -> bool {
        match mode {
            PageMode::Tree => !self.options.no_tree,
            PageMode::Deprecated => !self.options.no_deprecated_list,
            PageMode::Index => !self.options.no_index,
            PageMode::Help => !self.options.no_help,
            _ => true,
        }
    }

    /// Render the bar for `position`, with the user's header or footer text.
    ///
    /// Returns an empty fragment when the navigation bar is switched off.
    pub fn render(
        &self,
        resources: &Resources,
        position: NavPosition,
        user_text: Option<&str>,
    ) -> Content {
        if self.options.no_navbar {
            return Content::empty();
        }

        let skip_label = resources.get_text("nav.skip");
        let skip_target = format!("skip.{}", position.id());

        let mut bar = HtmlTree::new(HtmlTag::Div)
            .with_style(position.style())
            .with_attr(HtmlAttr::Id, position.id());

        bar.add(HtmlTree::div(
            HtmlStyle::SkipNav,
            HtmlTree::link(format!("#{skip_target}"), skip_label.as_str())
                .with_attr(HtmlAttr::Title, skip_label.as_str()),
        ));

        let mut list = HtmlTree::new(HtmlTag::Ul)
            .with_style(HtmlStyle::NavList)
            .with_attr(HtmlAttr::Title, resources.get_text("nav.label"));

        for mode in PageMode::ALL.into_iter().filter(|m| self.shows(*m)) {
            let label = resources.get_text(mode.label_key());
            let item = if mode == self.page_mode {
                HtmlTree::li(label).with_style(HtmlStyle::NavBarCell1Rev)
            } else if let Some(target) = mode.target() {
                HtmlTree::li(HtmlTree::link(target, label))
            } else {
                HtmlTree::li(label)
            };
            list.add(item);
        }
        bar.add(list);

        if let Some(text) = user_text.filter(|t| !t.is_empty()) {
            bar.add(HtmlTree::div(HtmlStyle::AboutLanguage, Content::raw(text)));
        }

        HtmlTree::new(HtmlTag::Nav)
            .with_attr(HtmlAttr::Role, "navigation")
            .with(bar)
            .with(HtmlTree::new(HtmlTag::A).with_attr(HtmlAttr::Id, skip_target))
            .into()
    }
}
