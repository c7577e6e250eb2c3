//! Output renderers, dispatched by format name.

pub mod html;
pub mod json;

use crate::markup::Markup;
use crate::model::DocumentNode;
use anyhow::{anyhow, Result};

/// Trait for rendering a document tree into a specific output format.
pub trait Renderer {
    /// `title` names the page (usually the module name).
    fn render(&self, title: &str, doc: &DocumentNode) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
///
/// `markup` renders the few plain-text fragments (group titles) that the
/// document tree does not already hold as HTML.
pub fn create_renderer<'a>(format: &str, markup: &'a dyn Markup) -> Result<Box<dyn Renderer + 'a>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer::new(markup))),
        _ => Err(anyhow!("unknown format: {}. Use json or html", format)),
    }
}
