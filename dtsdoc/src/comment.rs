//! Doc comment parser.
//!
//! Splits a comment into a synopsis (first paragraph), a description (the
//! remaining paragraphs) and `@name body` notes. Prose goes through a
//! [`Markup`] renderer; `@alias` bodies stay raw because they name a
//! declaration.

use crate::markup::Markup;
use crate::model::{DocComment, Note};
use dtsdoc_syntax::{Comment, CommentKind};
use regex::Regex;
use std::sync::LazyLock;

// Unanchored: a line with `@name` anywhere in it is a note.
static RE_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)(?:\s+(.*))?").unwrap());

/// Notes recognized but never emitted.
const DROPPED_NOTES: &[&str] = &["override"];

pub const NOTE_ALIAS: &str = "alias";
pub const NOTE_IGNORE: &str = "ignore";

/// Parse the comment documenting a declaration, if any.
pub fn parse_comment(comment: Option<&Comment>, markup: &dyn Markup) -> Option<DocComment> {
    comment.map(|c| parse_comment_text(&c.text, c.kind, markup))
}

/// Parse raw comment text, delimiters included.
pub fn parse_comment_text(text: &str, kind: CommentKind, markup: &dyn Markup) -> DocComment {
    let lines = comment_lines(text, kind);

    let mut notes = Vec::new();
    let mut prose = Vec::new();
    for line in lines {
        match RE_NOTE.captures(line) {
            Some(caps) => {
                let name = &caps[1];
                if DROPPED_NOTES.contains(&name) {
                    continue;
                }
                let body = caps.get(2).map(|m| m.as_str()).filter(|b| !b.is_empty());
                let body = match body {
                    Some(b) if name == NOTE_ALIAS => Some(b.trim().to_string()),
                    Some(b) => Some(markup.render_block(b)),
                    None => None,
                };
                notes.push(Note {
                    name: name.to_string(),
                    body,
                });
            }
            None => prose.push(line),
        }
    }

    let joined = prose.join("\n");
    let mut paragraphs = joined.split("\n\n");
    let synopsis = paragraphs.next().unwrap_or_default();
    let description = paragraphs.collect::<Vec<_>>().join("\n\n");

    DocComment {
        synopsis: render(markup, synopsis),
        description: if description.is_empty() {
            None
        } else {
            Some(markup.render_block(&description))
        },
        notes,
    }
}

/// Body lines of a comment with the comment markers removed.
fn comment_lines(text: &str, kind: CommentKind) -> Vec<&str> {
    match kind {
        CommentKind::SingleLine => vec![text.strip_prefix("//").unwrap_or(text)],
        CommentKind::MultiLine => {
            let lines: Vec<&str> = text.split('\n').collect();
            if lines.len() < 2 {
                let inner = text.trim_start_matches('/').trim_start_matches('*');
                let inner = inner.strip_suffix("*/").unwrap_or(inner);
                return vec![inner.trim()];
            }
            lines[1..lines.len() - 1]
                .iter()
                .map(|l| strip_leader(l.trim()))
                .collect()
        }
    }
}

/// Drop the two-character ` *` leader of a trimmed interior line.
fn strip_leader(line: &str) -> &str {
    match line.char_indices().nth(2) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

fn render(markup: &dyn Markup, text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        markup.render_block(text)
    }
}

/// Whether a comment asks for its declaration to be left out.
pub fn should_ignore(doc: Option<&DocComment>) -> bool {
    doc.is_some_and(|d| d.has_note(NOTE_IGNORE))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wraps text in markers so tests can see what was rendered.
    struct Tagged;

    impl Markup for Tagged {
        fn render_inline(&self, text: &str) -> String {
            format!("<i>{}</i>", text)
        }
        fn render_block(&self, text: &str) -> String {
            format!("<b>{}</b>", text)
        }
    }

    fn block(text: &str) -> DocComment {
        parse_comment_text(text, CommentKind::MultiLine, &Tagged)
    }

    #[test]
    fn absent_comment() {
        assert_eq!(parse_comment(None, &Tagged), None);
    }

    #[test]
    fn synopsis_only() {
        let doc = block("/**\n * Returns the size.\n */");
        assert_eq!(doc.synopsis, "<b>Returns the size.</b>");
        assert_eq!(doc.description, None);
        assert!(doc.notes.is_empty());
    }

    #[test]
    fn synopsis_and_description() {
        let doc = block("/**\n * Sets a value.\n *\n * Overwrites any\n * previous value.\n *\n * Second paragraph.\n */");
        assert_eq!(doc.synopsis, "<b>Sets a value.</b>");
        assert_eq!(
            doc.description.as_deref(),
            Some("<b>Overwrites any\nprevious value.\n\nSecond paragraph.</b>")
        );
    }

    #[test]
    fn notes_are_extracted() {
        let doc = block("/**\n * Gets a value.\n * @alias get\n * @see `Map#set`\n * @ignore\n */");
        assert_eq!(doc.synopsis, "<b>Gets a value.</b>");
        assert_eq!(
            doc.notes,
            vec![
                Note {
                    name: "alias".to_string(),
                    body: Some("get".to_string())
                },
                Note {
                    name: "see".to_string(),
                    body: Some("<b>`Map#set`</b>".to_string())
                },
                Note {
                    name: "ignore".to_string(),
                    body: None
                },
            ]
        );
        assert!(should_ignore(Some(&doc)));
    }

    #[test]
    fn override_is_dropped() {
        let doc = block("/**\n * Sized.\n * @override\n */");
        assert!(doc.notes.is_empty());
    }

    #[test]
    fn mid_line_note_leaves_the_prose() {
        let doc = block("/**\n * Lazy sequence.\n * See also @see `Immutable.Seq`\n */");
        assert_eq!(doc.synopsis, "<b>Lazy sequence.</b>");
        assert_eq!(doc.notes.len(), 1);
        assert_eq!(doc.notes[0].name, "see");
        assert_eq!(doc.notes[0].body.as_deref(), Some("<b>`Immutable.Seq`</b>"));
    }

    #[test]
    fn notes_only_comment_has_empty_synopsis() {
        let doc = block("/**\n * @ignore\n */");
        assert_eq!(doc.synopsis, "");
        assert!(should_ignore(Some(&doc)));
    }

    #[test]
    fn single_line_comment() {
        let doc = parse_comment_text("// Reads a file", CommentKind::SingleLine, &Tagged);
        assert_eq!(doc.synopsis, "<b> Reads a file</b>");
    }

    #[test]
    fn one_line_block_comment() {
        let doc = block("/** Inline. */");
        assert_eq!(doc.synopsis, "<b>Inline.</b>");
        let doc = block("/** @ignore */");
        assert!(should_ignore(Some(&doc)));
    }
}
