//! Documentation model consumed by folio page writers.
//!
//! Provides doc-comment bodies written in markdown (with optional YAML
//! frontmatter), localized resource strings, and meta keyword generation.

pub mod body;
pub mod frontmatter;
pub mod keywords;
pub mod resources;

pub use body::{first_sentence, DocBody, ParseError};
pub use frontmatter::{Frontmatter, FrontmatterError};
pub use keywords::MetaKeywords;
pub use resources::Resources;
