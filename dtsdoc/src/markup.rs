//! Markdown rendering of doc comment text.
//!
//! Comment text is CommonMark. Fenced code blocks are pulled out before
//! rendering so they can go through a [`Highlight`] implementation and be
//! wrapped in `<code class="...">` instead of the default `<pre><code>`.

use crate::highlight::{escape_html, Highlight, PrismHighlighter};
use regex::Regex;
use std::sync::LazyLock;

/// Renders comment text to HTML.
pub trait Markup {
    /// A single-line fragment, without the wrapping paragraph.
    fn render_inline(&self, text: &str) -> String;
    /// One or more blocks.
    fn render_block(&self, text: &str) -> String;
}

/// Settings of [`MarkdownRenderer`].
pub struct MarkupOptions {
    /// Class of the `<code>` element wrapping code blocks.
    pub code_class: String,
    /// Language assumed for fences without an info string.
    pub default_language: String,
    /// `None` disables highlighting.
    pub highlighter: Option<Box<dyn Highlight>>,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        MarkupOptions {
            code_class: "codeBlock".to_string(),
            default_language: "javascript".to_string(),
            highlighter: Some(Box::new(PrismHighlighter)),
        }
    }
}

impl std::fmt::Debug for MarkupOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkupOptions")
            .field("code_class", &self.code_class)
            .field("default_language", &self.default_language)
            .field("highlighter", &self.highlighter.is_some())
            .finish()
    }
}

static RE_FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(`{3,}|~{3,})\s*([^\s`]*)").unwrap());

/// CommonMark renderer backed by the `markdown` crate.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    options: MarkupOptions,
}

impl MarkdownRenderer {
    pub fn new(options: MarkupOptions) -> Self {
        MarkdownRenderer { options }
    }

    fn render_code(&self, code: &str, info: &str) -> String {
        let language = if info.is_empty() {
            self.options.default_language.as_str()
        } else {
            info
        };
        let body = self
            .options
            .highlighter
            .as_ref()
            .and_then(|h| h.highlight(code, language))
            .unwrap_or_else(|| escape_html(code));
        format!("<code class=\"{}\">{}</code>", self.options.code_class, body)
    }
}

impl Markup for MarkdownRenderer {
    fn render_inline(&self, text: &str) -> String {
        let html = self.render_block(text);
        let trimmed = html.trim();
        match trimmed
            .strip_prefix("<p>")
            .and_then(|rest| rest.strip_suffix("</p>"))
        {
            Some(inner) if !inner.contains("<p>") => inner.to_string(),
            _ => trimmed.to_string(),
        }
    }

    fn render_block(&self, text: &str) -> String {
        let mut out = String::new();
        for segment in split_fences(text) {
            match segment {
                Segment::Text(text) => {
                    if !text.trim().is_empty() {
                        out.push_str(&::markdown::to_html(&text));
                    }
                }
                Segment::Code { info, code } => {
                    if !out.is_empty() && !out.ends_with('\n') {
                        out.push('\n');
                    }
                    out.push_str(&self.render_code(&code, &info));
                    out.push('\n');
                }
            }
        }
        out
    }
}

#[derive(Debug, PartialEq)]
enum Segment {
    Text(String),
    Code { info: String, code: String },
}

/// Split text into prose and fenced code blocks.
/// An unclosed fence runs to the end of the text.
fn split_fences(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut prose: Vec<&str> = Vec::new();
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        let Some(caps) = RE_FENCE_OPEN.captures(line) else {
            prose.push(line);
            continue;
        };
        let fence = &caps[1];
        let info = caps[2].to_string();
        if !prose.is_empty() {
            segments.push(Segment::Text(prose.join("\n")));
            prose.clear();
        }
        let mut code: Vec<&str> = Vec::new();
        for line in lines.by_ref() {
            let trimmed = line.trim();
            if trimmed.starts_with(fence) && trimmed.chars().all(|c| c == fence.as_bytes()[0] as char) {
                break;
            }
            code.push(line);
        }
        segments.push(Segment::Code {
            info,
            code: code.join("\n"),
        });
    }
    if !prose.is_empty() {
        segments.push(Segment::Text(prose.join("\n")));
    }
    segments
}
