//! Markup tree for folio pages.
//!
//! Pages are composed as trees of [`HtmlTree`] nodes and serialized to HTML
//! only once the whole document has been assembled.

pub mod tag;
pub mod text;
pub mod tree;

pub use tag::{HtmlAttr, HtmlStyle, HtmlTag};
pub use text::{escape_html, strip_tags};
pub use tree::{Content, HtmlTree};
