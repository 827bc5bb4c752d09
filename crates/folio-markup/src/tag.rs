//! Element names, attributes and style classes.

/// HTML elements used by folio pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlTag {
    A,
    Body,
    Caption,
    Div,
    Footer,
    H1,
    H2,
    Header,
    Li,
    Main,
    Nav,
    P,
    Small,
    Span,
    Table,
    Tbody,
    Td,
    Th,
    Thead,
    Tr,
    Ul,
}

impl HtmlTag {
    /// Element name as written in markup.
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::Body => "body",
            Self::Caption => "caption",
            Self::Div => "div",
            Self::Footer => "footer",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::Header => "header",
            Self::Li => "li",
            Self::Main => "main",
            Self::Nav => "nav",
            Self::P => "p",
            Self::Small => "small",
            Self::Span => "span",
            Self::Table => "table",
            Self::Tbody => "tbody",
            Self::Td => "td",
            Self::Th => "th",
            Self::Thead => "thead",
            Self::Tr => "tr",
            Self::Ul => "ul",
        }
    }

    /// Inline elements are dropped when added without content or attributes.
    pub fn is_inline(self) -> bool {
        matches!(self, Self::A | Self::Small | Self::Span)
    }
}

/// Attributes other than `class`, which is carried by [`HtmlStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlAttr {
    Href,
    Id,
    Role,
    Scope,
    Title,
}

impl HtmlAttr {
    pub fn name(self) -> &'static str {
        match self {
            Self::Href => "href",
            Self::Id => "id",
            Self::Role => "role",
            Self::Scope => "scope",
            Self::Title => "title",
        }
    }
}

/// Style classes understood by folio stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlStyle {
    AboutLanguage,
    AltColor,
    Block,
    BottomNav,
    ColFirst,
    ColLast,
    ContentContainer,
    Header,
    LegalCopy,
    NavBarCell1Rev,
    NavList,
    OverviewSummary,
    RowColor,
    SkipNav,
    Title,
    TopNav,
}

impl HtmlStyle {
    /// Class name written to the `class` attribute.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::AboutLanguage => "aboutLanguage",
            Self::AltColor => "altColor",
            Self::Block => "block",
            Self::BottomNav => "bottomNav",
            Self::ColFirst => "colFirst",
            Self::ColLast => "colLast",
            Self::ContentContainer => "contentContainer",
            Self::Header => "header",
            Self::LegalCopy => "legalCopy",
            Self::NavBarCell1Rev => "navBarCell1Rev",
            Self::NavList => "navList",
            Self::OverviewSummary => "overviewSummary",
            Self::RowColor => "rowColor",
            Self::SkipNav => "skipNav",
            Self::Title => "title",
            Self::TopNav => "topNav",
        }
    }
}
