//! Composable markup tree.

use crate::tag::{HtmlAttr, HtmlStyle, HtmlTag};
use crate::text::escape_html;

/// A piece of page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// An element and its children.
    Tree(HtmlTree),
    /// Plain text, escaped on output.
    Text(String),
    /// Markup written verbatim.
    Raw(String),
    /// A sequence of siblings with no element of its own.
    ///
    /// Fragments are flattened into the tree they are added to, so an empty
    /// fragment adds nothing.
    Fragment(Vec<Content>),
}

impl Content {
    /// Create escaped text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create verbatim markup content.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    /// Create an empty fragment.
    pub fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    /// Whether adding this content to a tree would add nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Tree(tree) => tree.is_discardable(),
            Self::Text(text) | Self::Raw(text) => text.is_empty(),
            Self::Fragment(items) => items.iter().all(Content::is_empty),
        }
    }

    /// Text of this content with markup removed.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Tree(tree) => {
                for child in &tree.children {
                    child.collect_text(out);
                }
            }
            Self::Text(text) => out.push_str(text),
            Self::Raw(markup) => out.push_str(&crate::text::strip_tags(markup)),
            Self::Fragment(items) => {
                for item in items {
                    item.collect_text(out);
                }
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Tree(tree) => tree.write_html(out),
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::Raw(markup) => out.push_str(markup),
            Self::Fragment(items) => {
                for item in items {
                    item.write_html(out);
                }
            }
        }
    }
}

impl From<HtmlTree> for Content {
    fn from(tree: HtmlTree) -> Self {
        Self::Tree(tree)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// An element with an optional style class, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTree {
    tag: HtmlTag,
    style: Option<HtmlStyle>,
    attrs: Vec<(HtmlAttr, String)>,
    children: Vec<Content>,
}

impl HtmlTree {
    /// Create an empty element.
    pub fn new(tag: HtmlTag) -> Self {
        Self {
            tag,
            style: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the style class.
    pub fn with_style(mut self, style: HtmlStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn with_attr(mut self, attr: HtmlAttr, value: impl Into<String>) -> Self {
        self.set_attr(attr, value);
        self
    }

    /// Append content and return the tree.
    pub fn with(mut self, content: impl Into<Content>) -> Self {
        self.add(content);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, attr: HtmlAttr, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(a, _)| *a == attr) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((attr, value)),
        }
    }

    /// Append content as the last child.
    ///
    /// Empty text, empty fragments and empty inline elements without
    /// attributes are skipped. Fragments are flattened.
    pub fn add(&mut self, content: impl Into<Content>) {
        match content.into() {
            Content::Fragment(items) => {
                for item in items {
                    self.add(item);
                }
            }
            content if content.is_empty() => {}
            content => self.children.push(content),
        }
    }

    pub fn tag(&self) -> HtmlTag {
        self.tag
    }

    pub fn style(&self) -> Option<HtmlStyle> {
        self.style
    }

    /// Value of an attribute, if set.
    pub fn attr(&self, attr: HtmlAttr) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(a, _)| *a == attr)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Content] {
        &self.children
    }

    /// Whether the element has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn is_discardable(&self) -> bool {
        self.tag.is_inline() && self.children.is_empty() && self.attrs.is_empty()
    }

    /// Child elements, skipping text and raw markup.
    pub fn child_trees(&self) -> impl Iterator<Item = &HtmlTree> {
        self.children.iter().filter_map(|c| match c {
            Content::Tree(tree) => Some(tree),
            _ => None,
        })
    }

    /// Text of this element with markup removed.
    pub fn text_content(&self) -> String {
        Content::Tree(self.clone()).text_content()
    }

    /// Serialize the tree as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let name = self.tag.name();
        out.push('<');
        out.push_str(name);
        if let Some(style) = self.style {
            out.push_str(" class=\"");
            out.push_str(style.class_name());
            out.push('"');
        }
        for (attr, value) in &self.attrs {
            out.push(' ');
            out.push_str(attr.name());
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        if !self.tag.is_inline() {
            out.push('\n');
        }
    }

    // Constructors for the elements page writers use most.

    pub fn body() -> Self {
        Self::new(HtmlTag::Body)
    }

    pub fn header() -> Self {
        Self::new(HtmlTag::Header)
    }

    pub fn main() -> Self {
        Self::new(HtmlTag::Main)
    }

    pub fn footer() -> Self {
        Self::new(HtmlTag::Footer)
    }

    /// A styled `div` wrapping `content`.
    pub fn div(style: HtmlStyle, content: impl Into<Content>) -> Self {
        Self::new(HtmlTag::Div).with_style(style).with(content)
    }

    /// A styled heading wrapping `content`.
    pub fn heading(tag: HtmlTag, style: HtmlStyle, content: impl Into<Content>) -> Self {
        Self::new(tag).with_style(style).with(content)
    }

    /// A hyperlink to `href`.
    pub fn link(href: impl Into<String>, content: impl Into<Content>) -> Self {
        Self::new(HtmlTag::A)
            .with_attr(HtmlAttr::Href, href)
            .with(content)
    }

    pub fn li(content: impl Into<Content>) -> Self {
        Self::new(HtmlTag::Li).with(content)
    }
}
