//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the document tree as-is. This is the format downstream page
//! generators consume.

use crate::model::DocumentNode;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, _title: &str, doc: &DocumentNode) -> Result<String> {
        let mut out = serde_json::to_string_pretty(doc).context("failed to serialize document")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
