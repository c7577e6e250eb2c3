//! Syntax highlighting for code blocks inside doc comments.
//!
//! Produces prism-compatible markup (`<span class="token keyword">`), so
//! existing prism themes style the generated pages.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Turns source code into highlighted HTML.
///
/// Returns `None` when the language is not supported; the caller then falls
/// back to escaped plain text.
pub trait Highlight: Send + Sync {
    fn highlight(&self, code: &str, language: &str) -> Option<String>;
}

// -- Token patterns -------------------------------------------------------------

// Alternation order is priority order: block keywords come before ordinary
// keywords and function names.
static RE_JS_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<comment>//[^\n]*|/\*[\s\S]*?\*/)",
        r#"|(?P<string>"(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*'|`(?:\\[\s\S]|[^`\\])*`)"#,
        r"|(?P<block>\b(?:if|else|while|for|function)\b)",
        r"|(?P<keyword>\b(?:as|async|await|break|case|catch|class|const|continue|debugger|default|delete|do|export|extends|finally|from|implements|import|in|instanceof|interface|let|new|null|of|return|static|super|switch|this|throw|try|typeof|undefined|var|void|with|yield)\b)",
        r"|(?P<boolean>\b(?:true|false)\b)",
        r"|(?P<function>[A-Za-z_$][\w$]*)\s*\(",
        r"|(?P<number>\b(?:0[xX][\da-fA-F]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\b)",
    ))
    .unwrap()
});

const TOKEN_CLASSES: &[(&str, &str)] = &[
    ("comment", "comment"),
    ("string", "string"),
    ("block", "block-keyword"),
    ("keyword", "keyword"),
    ("boolean", "boolean"),
    ("function", "function"),
    ("number", "number"),
];

/// Regex tokenizer for JavaScript and TypeScript snippets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrismHighlighter;

impl PrismHighlighter {
    fn supports(language: &str) -> bool {
        matches!(
            language.to_ascii_lowercase().as_str(),
            "javascript" | "js" | "typescript" | "ts"
        )
    }
}

impl Highlight for PrismHighlighter {
    fn highlight(&self, code: &str, language: &str) -> Option<String> {
        if !Self::supports(language) {
            return None;
        }

        let mut out = String::with_capacity(code.len() * 2);
        let mut last = 0;
        for caps in RE_JS_TOKEN.captures_iter(code) {
            let Some(whole) = caps.get(0) else { continue };
            out.push_str(&escape_html(&code[last..whole.start()]));
            push_token(&mut out, &caps, code);
            last = whole.end();
        }
        out.push_str(&escape_html(&code[last..]));
        Some(out)
    }
}

fn push_token(out: &mut String, caps: &Captures<'_>, code: &str) {
    for (group, class) in TOKEN_CLASSES {
        let Some(token) = caps.name(group) else { continue };
        out.push_str(&format!(
            "<span class=\"token {}\">{}</span>",
            class,
            escape_html(token.as_str())
        ));
        // A function name match also consumed the call's `(`.
        if let Some(whole) = caps.get(0) {
            out.push_str(&escape_html(&code[token.end()..whole.end()]));
        }
        return;
    }
}

/// Escape text for inclusion in HTML, quotes included.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
