//! Syntax library for TypeScript declaration files.
//!
//! Produces the typed tree that `dtsdoc` walks: a closed set of node kinds,
//! first-token positions with their leading comments, and a line map.
//!
//! ```
//! let file = dtsdoc_syntax::parse("/** Doc. */\ndeclare function f(x: number): string;").unwrap();
//! let start = file.declarations[0].start();
//! assert_eq!(file.line_map.line_of(start.offset), 2);
//! assert_eq!(start.doc_comments().len(), 1);
//! ```

pub mod ast;
pub mod error;
pub mod kind;
pub mod lexer;
pub mod line_map;
pub mod parser;

pub use ast::*;
pub use error::ParseError;
pub use kind::SyntaxKind;
pub use lexer::{Comment, CommentKind};
pub use line_map::LineMap;
pub use parser::{parse, parse_type};
