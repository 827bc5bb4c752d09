//! Doc-comment bodies written in markdown.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};

/// The body of a documentation comment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocBody {
    frontmatter: Option<Frontmatter>,
    markdown: String,
}

/// Errors that can occur when parsing a body.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

impl DocBody {
    /// Parse a body that may start with a frontmatter block.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let (frontmatter, content) = extract_frontmatter(source)?;
        Ok(Self {
            frontmatter,
            markdown: content.to_string(),
        })
    }

    /// Wrap markdown that has no frontmatter.
    pub fn from_markdown(markdown: impl Into<String>) -> Self {
        Self {
            frontmatter: None,
            markdown: markdown.into(),
        }
    }

    /// Whether the body has no text. Frontmatter does not count.
    pub fn is_empty(&self) -> bool {
        self.markdown.trim().is_empty()
    }

    pub fn frontmatter(&self) -> Option<&Frontmatter> {
        self.frontmatter.as_ref()
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// Render the body to HTML.
    pub fn to_html(&self) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;

        let parser = Parser::new_ext(&self.markdown, options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        html_output
    }

    /// Plain text of the first sentence, used for summaries.
    pub fn first_sentence(&self) -> String {
        first_sentence(&self.markdown)
    }
}

/// Plain text of the first sentence of the first paragraph.
///
/// A sentence ends at a period followed by whitespace or the end of the
/// paragraph. Without such a period the whole paragraph is returned.
pub fn first_sentence(markdown: &str) -> String {
    let mut text = String::new();
    let mut in_paragraph = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Paragraph) => in_paragraph = true,
            Event::End(TagEnd::Paragraph) => {
                if !text.trim().is_empty() {
                    break;
                }
                in_paragraph = false;
            }
            Event::Text(t) | Event::Code(t) if in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }

    let text = text.trim();
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '.' {
            continue;
        }
        match chars.peek() {
            None => break,
            Some((_, next)) if next.is_whitespace() => return text[..=i].to_string(),
            Some(_) => {}
        }
    }

    text.to_string()
}
