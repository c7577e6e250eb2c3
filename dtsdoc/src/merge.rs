//! Merging of document trees.
//!
//! The same rules serve two callers: the builder, when a name is declared
//! more than once in one file (overloads, reopened modules and interfaces),
//! and the CLI, when several files document one module or are bundled into
//! a single output.

use crate::model::*;
use indexmap::IndexMap;

/// Merge documents that share a module name, keeping first-seen order.
///
/// "lib/map.d.ts" and "types/map.d.ts" both document "map".
pub fn merge(docs: Vec<(String, DocumentNode)>) -> Vec<(String, DocumentNode)> {
    let mut groups: IndexMap<String, DocumentNode> = IndexMap::new();
    for (source_file, doc) in docs {
        let name = module_name(&source_file);
        match groups.get_mut(&name) {
            Some(existing) => merge_into(existing, doc),
            None => {
                groups.insert(name, doc);
            }
        }
    }
    groups.into_iter().collect()
}

/// Merge every document into one tree.
pub fn merge_all(docs: impl IntoIterator<Item = DocumentNode>) -> DocumentNode {
    let mut merged = DocumentNode::default();
    for doc in docs {
        merge_into(&mut merged, doc);
    }
    merged
}

/// Merge `source` into `target`. Entries new to `target` are appended.
pub fn merge_into(target: &mut DocumentNode, source: DocumentNode) {
    for (name, entry) in source.entries {
        match target.entries.get_mut(&name) {
            Some(existing) => merge_entry(existing, entry),
            None => {
                target.entries.insert(name, entry);
            }
        }
    }
}

pub fn merge_entry(existing: &mut Entry, incoming: Entry) {
    if existing.doc.is_none() {
        existing.doc = incoming.doc;
    }
    if let Some(more) = incoming.module {
        match &mut existing.module {
            Some(module) => merge_into(module, more),
            None => existing.module = Some(more),
        }
    }
    if let Some(more) = incoming.interface {
        match &mut existing.interface {
            Some(iface) => merge_interface(iface, more),
            None => existing.interface = Some(more),
        }
    }
    if let Some(more) = incoming.call {
        match &mut existing.call {
            Some(call) => merge_call(call, more),
            None => existing.call = Some(more),
        }
    }
}

/// Append overloads from another file. The call keeps its own comment;
/// an incoming one moves to the first incoming signature.
pub fn merge_call(existing: &mut CallEntry, incoming: CallEntry) {
    let mut signatures = incoming.signatures;
    match incoming.doc {
        Some(doc) if existing.doc.is_some() => {
            if let Some(first) = signatures.first_mut() {
                first.doc.get_or_insert(doc);
            }
        }
        doc => {
            if existing.doc.is_none() {
                existing.doc = doc;
            }
        }
    }
    existing.signatures.extend(signatures);
}

/// Combine a reopened interface with its earlier declaration.
pub fn merge_interface(existing: &mut InterfaceEntry, incoming: InterfaceEntry) {
    if existing.doc.is_none() {
        existing.doc = incoming.doc;
    }
    if existing.type_params.is_none() {
        existing.type_params = incoming.type_params;
    }
    append(&mut existing.extends, incoming.extends);
    append(&mut existing.implements, incoming.implements);
    existing.groups.extend(incoming.groups);
}

/// Extend an optional list, leaving it absent when nothing is added.
pub fn append<T>(target: &mut Option<Vec<T>>, items: Option<Vec<T>>) {
    match items {
        Some(items) if !items.is_empty() => target.get_or_insert_with(Vec::new).extend(items),
        _ => {}
    }
}

/// Derive a module name from a source file path.
/// "types/immutable.d.ts" → "immutable", "src/map.ts" → "map"
pub fn module_name(path: &str) -> String {
    let filename = path.rsplit(['/', '\\']).next().unwrap_or(path);
    filename
        .strip_suffix(".d.ts")
        .or_else(|| filename.strip_suffix(".ts"))
        .unwrap_or(filename)
        .to_string()
}
