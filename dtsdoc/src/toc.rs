//! Index and anchor generation for rendered pages.
//!
//! Every documented name gets a path (`Immutable.Map#get`) and an anchor
//! slug derived from it.

use crate::model::{member_name, DocumentNode, Entry};

/// Separator between a container and its members in a path.
pub const MEMBER_SEPARATOR: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocKind {
    Module,
    Interface,
    Function,
    Property,
    Method,
}

impl TocKind {
    pub fn label(self) -> &'static str {
        match self {
            TocKind::Module => "module",
            TocKind::Interface => "interface",
            TocKind::Function => "function",
            TocKind::Property => "property",
            TocKind::Method => "method",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub depth: usize,
    pub path: String,
    pub title: String,
    pub kind: TocKind,
}

impl TocEntry {
    pub fn anchor(&self) -> String {
        slug(&self.path)
    }
}

/// Anchor slug for a path.
///
/// - lowercase
/// - `.`, `#`, spaces and underscores become `-`
/// - other non-alphanumeric characters are dropped
pub fn slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '-' {
            slug.push(c);
        } else if matches!(c, '.' | '#' | ' ' | '_') {
            slug.push('-');
        }
    }
    slug
}

/// Path of `name` inside `parent` (empty at the top level).
pub fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

pub fn member_path(parent: &str, name: &str) -> String {
    format!("{}{}{}", parent, MEMBER_SEPARATOR, name)
}

/// Kind shown for an entry carrying several parts.
pub fn entry_kind(entry: &Entry) -> TocKind {
    if entry.interface.is_some() {
        TocKind::Interface
    } else if entry.module.is_some() {
        TocKind::Module
    } else {
        TocKind::Function
    }
}

/// Flatten a document tree into index entries in document order.
pub fn build_index(node: &DocumentNode) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    collect(node, "", 0, &mut entries);
    entries
}

fn collect(node: &DocumentNode, parent: &str, depth: usize, out: &mut Vec<TocEntry>) {
    for (name, entry) in &node.entries {
        let path = child_path(parent, name);
        out.push(TocEntry {
            depth,
            path: path.clone(),
            title: name.clone(),
            kind: entry_kind(entry),
        });
        if let Some(iface) = &entry.interface {
            for group in &iface.groups {
                for key in group.properties.keys() {
                    out.push(member_entry(&path, key, depth + 1, TocKind::Property));
                }
                for key in group.methods.keys() {
                    out.push(member_entry(&path, key, depth + 1, TocKind::Method));
                }
            }
        }
        if let Some(module) = &entry.module {
            collect(module, &path, depth + 1, out);
        }
    }
}

fn member_entry(parent: &str, key: &str, depth: usize, kind: TocKind) -> TocEntry {
    let name = member_name(key);
    TocEntry {
        depth,
        path: member_path(parent, name),
        title: name.to_string(),
        kind,
    }
}
