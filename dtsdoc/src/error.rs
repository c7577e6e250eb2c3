//! Extraction errors.

use dtsdoc_syntax::{ParseError, SyntaxKind};
use thiserror::Error;

/// What went wrong while extracting a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A construct the extractor refuses to document.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),
    /// A syntax node the type normalizer has no rule for.
    #[error("unrecognized syntax: {0}")]
    UnrecognizedSyntax(SyntaxKind),
    /// A heritage clause whose keyword is neither `extends` nor `implements`.
    #[error("invalid heritage clause keyword: {0}")]
    InvalidHeritage(SyntaxKind),
}

/// Declaration being extracted when an error surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub name: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}", site_suffix(.site))]
pub struct ExtractError {
    pub kind: ErrorKind,
    pub site: Option<Site>,
}

impl ExtractError {
    pub fn unsupported(construct: impl Into<String>) -> Self {
        ErrorKind::UnsupportedFeature(construct.into()).into()
    }

    pub fn unrecognized(kind: SyntaxKind) -> Self {
        ErrorKind::UnrecognizedSyntax(kind).into()
    }

    pub fn invalid_heritage(kind: SyntaxKind) -> Self {
        ErrorKind::InvalidHeritage(kind).into()
    }

    /// Attach the innermost declaration site; an existing site is kept.
    pub fn at(mut self, name: &str, line: usize) -> Self {
        if self.site.is_none() {
            self.site = Some(Site {
                name: name.to_string(),
                line,
            });
        }
        self
    }
}

impl From<ErrorKind> for ExtractError {
    fn from(kind: ErrorKind) -> Self {
        ExtractError { kind, site: None }
    }
}

fn site_suffix(site: &Option<Site>) -> String {
    match site {
        Some(site) => format!(" (in `{}` at line {})", site.name, site.line),
        None => String::new(),
    }
}

/// Errors returned by [`crate::extract`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error at {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
