//! Document tree builders.
//!
//! One builder per insertion point: [`DocumentBuilder`] for a file or module
//! level, [`InterfaceBuilder`] for the members of one interface.

use crate::merge::{append, merge_entry, merge_interface};
use crate::model::*;

/// The entries of one container, as seen by alias resolution.
pub trait AliasLevel {
    /// Give `name` a comment if it has none. Returns whether anything changed.
    fn adopt_doc(&mut self, name: &str, doc: DocComment) -> bool;
    /// Drop the entry already emitted for `name`. Returns whether there was one.
    fn remove(&mut self, name: &str) -> bool;
}

// -- Levels ---------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct DocumentBuilder {
    node: DocumentNode,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, name: &str) -> &mut Entry {
        self.node.entries.entry(name.to_string()).or_default()
    }

    /// Add or reopen a module.
    pub fn upsert_module(&mut self, name: &str, doc: Option<DocComment>, module: DocumentNode) {
        merge_entry(
            self.entry(name),
            Entry {
                doc,
                module: Some(module),
                ..Default::default()
            },
        );
    }

    /// Append one overload of a function.
    pub fn push_call_signature(&mut self, name: &str, signature: CallSignature, doc: Option<DocComment>) {
        let call = self.entry(name).call.get_or_insert_with(CallEntry::default);
        push_overload(call, signature, doc);
    }

    /// Add or reopen an interface.
    pub fn upsert_interface(&mut self, name: &str, interface: InterfaceEntry) {
        let entry = self.entry(name);
        match &mut entry.interface {
            Some(existing) => merge_interface(existing, interface),
            None => entry.interface = Some(interface),
        }
    }

    pub fn finish(self) -> DocumentNode {
        self.node
    }
}

impl AliasLevel for DocumentBuilder {
    fn adopt_doc(&mut self, name: &str, doc: DocComment) -> bool {
        let Some(entry) = self.node.entries.get_mut(name) else {
            return false;
        };
        let mut changed = false;
        if let Some(call) = &mut entry.call {
            changed |= fill(&mut call.doc, &doc);
        }
        if let Some(iface) = &mut entry.interface {
            changed |= fill(&mut iface.doc, &doc);
        }
        if entry.module.is_some() {
            changed |= fill(&mut entry.doc, &doc);
        }
        changed
    }

    fn remove(&mut self, name: &str) -> bool {
        self.node.entries.shift_remove(name).is_some()
    }
}

// -- Interfaces -----------------------------------------------------------------

#[derive(Debug)]
pub struct InterfaceBuilder {
    entry: InterfaceEntry,
}

impl InterfaceBuilder {
    pub fn new(line: usize, doc: Option<DocComment>, type_params: Vec<String>) -> Self {
        InterfaceBuilder {
            entry: InterfaceEntry {
                line,
                doc,
                type_params: non_empty(type_params),
                ..Default::default()
            },
        }
    }

    pub fn extend(&mut self, types: Vec<TypeDescriptor>) {
        append(&mut self.entry.extends, Some(types));
    }

    pub fn implement(&mut self, types: Vec<TypeDescriptor>) {
        append(&mut self.entry.implements, Some(types));
    }

    /// Open one group per title, then return the group members go into.
    /// An untitled group is created when the interface has none yet.
    pub fn ensure_group(&mut self, titles: &[String]) -> &mut Group {
        for title in titles {
            self.entry.groups.push(Group {
                title: Some(title.clone()),
                ..Default::default()
            });
        }
        if self.entry.groups.is_empty() {
            self.entry.groups.push(Group::default());
        }
        let last = self.entry.groups.len() - 1;
        &mut self.entry.groups[last]
    }

    /// Set a property in the current group, replacing an earlier one there.
    pub fn upsert_property(&mut self, titles: &[String], name: &str, property: PropertyEntry) {
        self.ensure_group(titles)
            .properties
            .insert(member_key(name), property);
    }

    /// Append one overload of a method in the current group.
    pub fn push_method_signature(
        &mut self,
        titles: &[String],
        name: &str,
        signature: CallSignature,
        doc: Option<DocComment>,
    ) {
        let call = self
            .ensure_group(titles)
            .methods
            .entry(member_key(name))
            .or_default();
        push_overload(call, signature, doc);
    }

    pub fn finish(self) -> InterfaceEntry {
        self.entry
    }
}

impl AliasLevel for InterfaceBuilder {
    fn adopt_doc(&mut self, name: &str, doc: DocComment) -> bool {
        let key = member_key(name);
        let mut changed = false;
        for group in &mut self.entry.groups {
            if let Some(property) = group.properties.get_mut(&key) {
                changed |= fill(&mut property.doc, &doc);
            }
            if let Some(method) = group.methods.get_mut(&key) {
                changed |= fill(&mut method.doc, &doc);
            }
        }
        changed
    }

    fn remove(&mut self, name: &str) -> bool {
        let key = member_key(name);
        let mut removed = false;
        for group in &mut self.entry.groups {
            removed |= group.properties.shift_remove(&key).is_some();
            removed |= group.methods.shift_remove(&key).is_some();
        }
        removed
    }
}

/// Overloads in one file: the last documented one documents the call.
fn push_overload(call: &mut CallEntry, signature: CallSignature, doc: Option<DocComment>) {
    call.signatures.push(signature);
    if doc.is_some() {
        call.doc = doc;
    }
}

fn fill(slot: &mut Option<DocComment>, doc: &DocComment) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(doc.clone());
    true
}

/// `None` for an empty list, so it is left out of the output.
pub fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
