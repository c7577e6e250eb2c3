//! dtsdoc: API documentation extracted from TypeScript declaration files.
//!
//! ```
//! use dtsdoc::markup::MarkdownRenderer;
//!
//! let source = "/** Returns the size. */\ndeclare function size(): number;";
//! let doc = dtsdoc::extract(source, &MarkdownRenderer::default()).unwrap();
//! let call = doc.get("size").unwrap().call.as_ref().unwrap();
//! assert_eq!(call.signatures[0].line, 2);
//! ```

pub mod builder;
pub mod comment;
pub mod error;
pub mod highlight;
pub mod markup;
pub mod merge;
pub mod model;
pub mod render;
pub mod scope;
pub mod toc;
pub mod types;
pub mod visitor;

pub use error::{Error, ErrorKind, ExtractError};
pub use model::DocumentNode;

use markup::Markup;

/// Parse `source` and extract its document tree.
pub fn extract(source: &str, markup: &dyn Markup) -> Result<DocumentNode, Error> {
    let file = dtsdoc_syntax::parse(source)?;
    Ok(visitor::extract_file(&file, markup)?)
}
