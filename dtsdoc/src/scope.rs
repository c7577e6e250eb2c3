//! Scopes carried down the declaration walk.
//!
//! Type parameters live in a persistent linked list: entering a generic
//! construct borrows the enclosing scope and adds one frame, so leaving it
//! is simply dropping the child. Aliases are per container and owned by the
//! call that visits that container.

use crate::comment::NOTE_ALIAS;
use crate::error::{ExtractError, Result};
use crate::model::DocComment;
use indexmap::IndexMap;
use std::collections::HashSet;

// -- Type parameters ------------------------------------------------------------

/// Open type-parameter frames, innermost first.
#[derive(Debug, Default)]
pub struct TypeScope<'a> {
    names: Vec<String>,
    parent: Option<&'a TypeScope<'a>>,
}

impl TypeScope<'static> {
    /// The empty scope at the top of a file.
    pub fn root() -> Self {
        TypeScope {
            names: Vec::new(),
            parent: None,
        }
    }
}

impl<'a> TypeScope<'a> {
    /// Open a frame holding exactly `names`.
    pub fn push<I, S>(&'a self, names: I) -> TypeScope<'a>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeScope {
            names: names.into_iter().map(Into::into).collect(),
            parent: Some(self),
        }
    }

    /// Whether `name` is bound by any open frame.
    pub fn contains(&self, name: &str) -> bool {
        self.frames().any(|frame| frame.names.iter().any(|n| n == name))
    }

    fn frames(&self) -> impl Iterator<Item = &TypeScope<'a>> + '_ {
        std::iter::successors(Some(self), |scope| scope.parent)
    }
}

// -- Aliases --------------------------------------------------------------------

/// Aliases declared among the direct children of one container.
///
/// `@alias A` on a declaration `B` makes `B` a second name for its sibling
/// `A`: `B` gets no entry and `A` inherits `B`'s comment when it has none.
#[derive(Debug, Default)]
pub struct AliasFrame {
    /// Target name → alias name, in registration order.
    targets: IndexMap<String, String>,
    /// Names that are aliases of a sibling.
    aliases: HashSet<String>,
    /// Comments waiting for a target that has not been visited yet.
    pending: IndexMap<String, DocComment>,
    siblings: HashSet<String>,
}

impl AliasFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration name seen in this container.
    pub fn note_sibling(&mut self, name: &str) {
        self.siblings.insert(name.to_string());
    }

    pub fn has_sibling(&self, name: &str) -> bool {
        self.siblings.contains(name)
    }

    /// Whether `name` was declared an alias of a sibling.
    pub fn is_aliased(&self, name: &str) -> bool {
        self.aliases.contains(name)
    }

    /// Register `alias` as a second name for `target`, keeping the alias's
    /// comment for the target. Returns that comment rewritten for the target.
    pub fn register(&mut self, target: &str, alias: &str, doc: &DocComment) -> DocComment {
        self.targets.insert(target.to_string(), alias.to_string());
        self.aliases.insert(alias.to_string());
        let adopted = adopted_doc(doc, target, alias);
        self.pending.insert(target.to_string(), adopted.clone());
        adopted
    }

    /// The comment a target inherits from its alias, consumed once.
    pub fn take_doc(&mut self, target: &str) -> Option<DocComment> {
        self.pending.shift_remove(target)
    }

    /// Close the container. Every alias must name a sibling.
    pub fn finish(self) -> Result<()> {
        for (target, alias) in &self.targets {
            if !self.siblings.contains(target) {
                return Err(ExtractError::unsupported(format!(
                    "`@alias {}` on `{}` does not name a declaration in the same container",
                    target, alias
                )));
            }
        }
        Ok(())
    }
}

/// `doc` with its `@alias target` note rewritten to name `alias`.
fn adopted_doc(doc: &DocComment, target: &str, alias: &str) -> DocComment {
    let mut adopted = doc.clone();
    for note in &mut adopted.notes {
        if note.name == NOTE_ALIAS && note.body.as_deref() == Some(target) {
            note.body = Some(alias.to_string());
        }
    }
    adopted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::Note;

    #[test]
    fn frames_stack_and_unwind() {
        let root = TypeScope::root();
        assert!(!root.contains("K"));
        {
            let map = root.push(["K", "V"]);
            let method = map.push(["M"]);
            assert!(method.contains("K"));
            assert!(method.contains("M"));
            assert!(!map.contains("M"));
        }
        assert!(!root.contains("V"));
    }

    #[test]
    fn empty_frame_binds_nothing() {
        let root = TypeScope::root();
        let child = root.push(Vec::<String>::new());
        assert!(!child.contains("T"));
    }

    fn alias_doc(target: &str) -> DocComment {
        DocComment {
            synopsis: "<p>Size.</p>".to_string(),
            description: None,
            notes: vec![Note {
                name: "alias".to_string(),
                body: Some(target.to_string()),
            }],
        }
    }

    #[test]
    fn alias_registration() {
        let mut frame = AliasFrame::new();
        frame.note_sibling("count");
        let adopted = frame.register("size", "count", &alias_doc("size"));
        assert!(frame.is_aliased("count"));
        assert!(!frame.is_aliased("size"));
        assert_eq!(adopted.notes[0].body.as_deref(), Some("count"));

        frame.note_sibling("size");
        assert_eq!(frame.take_doc("size"), Some(adopted));
        assert_eq!(frame.take_doc("size"), None);
        assert!(frame.finish().is_ok());
    }

    #[test]
    fn alias_to_missing_sibling_is_unsupported() {
        let mut frame = AliasFrame::new();
        frame.note_sibling("count");
        frame.register("size", "count", &alias_doc("size"));
        let err = frame.finish().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnsupportedFeature(_)));
    }
}
