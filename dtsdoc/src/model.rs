//! Data model for extracted documentation, independent of output format.
//!
//! This is the document tree handed to renderers. Its serialized form
//! (camelCase keys, omitted empty fields, source-ordered maps) is the
//! compatibility surface for downstream tooling.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Prefix applied to property and method keys inside a [`Group`].
pub const MEMBER_KEY_PREFIX: char = '#';

/// Declarations of one level, keyed by name in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DocumentNode {
    pub entries: IndexMap<String, Entry>,
}

impl DocumentNode {
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// What one declaration name contributes to its level.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocComment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<DocumentNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<InterfaceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<CallEntry>,
}

/// Parsed doc comment. Text fields hold rendered HTML.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocComment {
    pub synopsis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<Note>,
}

impl DocComment {
    pub fn has_note(&self, name: &str) -> bool {
        self.notes.iter().any(|n| n.name == name)
    }

    /// Bodies of every `@alias` note.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.notes
            .iter()
            .filter(|n| n.name == "alias")
            .filter_map(|n| n.body.as_deref())
    }
}

/// `@name body` line. `body` is rendered unless the note is an alias.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Overloads of a function or method, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CallEntry {
    pub signatures: Vec<CallSignature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocComment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSignature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_params: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Param>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<TypeDescriptor>,
    pub line: usize,
    /// Comment of an overload merged in from another file whose call was
    /// already documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocComment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceEntry {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocComment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_params: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<Vec<TypeDescriptor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implements: Option<Vec<TypeDescriptor>>,
    pub groups: Vec<Group>,
}

/// Run of interface members sharing a `// Title` comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, PropertyEntry>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub methods: IndexMap<String, CallEntry>,
}

impl Group {
    pub fn property(&self, name: &str) -> Option<&PropertyEntry> {
        self.properties.get(&member_key(name))
    }

    pub fn method(&self, name: &str) -> Option<&CallEntry> {
        self.methods.get(&member_key(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyEntry {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocComment>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDescriptor>,
}

/// Key of a property or method inside a group.
pub fn member_key(name: &str) -> String {
    format!("{}{}", MEMBER_KEY_PREFIX, name)
}

/// Member name from a group key.
pub fn member_name(key: &str) -> &str {
    key.strip_prefix(MEMBER_KEY_PREFIX).unwrap_or(key)
}

// -- Types ----------------------------------------------------------------------

/// Normalized type expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDescriptor {
    Any,
    Boolean,
    Number,
    String,
    ArrayOf {
        #[serde(rename = "type")]
        element: Box<TypeDescriptor>,
    },
    #[serde(rename_all = "camelCase")]
    FunctionType {
        params: Vec<Param>,
        returns: Box<TypeDescriptor>,
    },
    ObjectType {
        members: Vec<ObjectMember>,
    },
    #[serde(rename_all = "camelCase")]
    NamedType {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        qualifier: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        type_args: Option<Vec<TypeDescriptor>>,
    },
    TypeParamRef {
        name: String,
    },
}

impl TypeDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::NamedType {
            name: name.into(),
            qualifier: None,
            type_args: None,
        }
    }

    pub fn param(name: impl Into<String>) -> Self {
        TypeDescriptor::TypeParamRef { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDescriptor>,
    #[serde(skip_serializing_if = "is_false")]
    pub var_args: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
}

/// Member of an inline object type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectMember {
    /// `[key: string]: V`; serialized with `index: true`.
    Index {
        index: bool,
        params: Vec<Param>,
        #[serde(rename = "type")]
        ty: TypeDescriptor,
    },
    Property {
        name: String,
        #[serde(rename = "type")]
        ty: TypeDescriptor,
    },
}

impl ObjectMember {
    pub fn index(params: Vec<Param>, ty: TypeDescriptor) -> Self {
        ObjectMember::Index {
            index: true,
            params,
            ty,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

// -- Source-syntax display ------------------------------------------------------

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Any => f.write_str("any"),
            TypeDescriptor::Boolean => f.write_str("boolean"),
            TypeDescriptor::Number => f.write_str("number"),
            TypeDescriptor::String => f.write_str("string"),
            TypeDescriptor::ArrayOf { element } => match element.as_ref() {
                TypeDescriptor::FunctionType { .. } => write!(f, "({})[]", element),
                _ => write!(f, "{}[]", element),
            },
            TypeDescriptor::FunctionType { params, returns } => {
                write!(f, "({}) => {}", ParamList(params), returns)
            }
            TypeDescriptor::ObjectType { members } => {
                if members.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    match member {
                        ObjectMember::Index { params, ty, .. } => {
                            write!(f, "[{}]: {}", ParamList(params), ty)?
                        }
                        ObjectMember::Property { name, ty } => write!(f, "{}: {}", name, ty)?,
                    }
                }
                f.write_str(" }")
            }
            TypeDescriptor::NamedType {
                name,
                qualifier,
                type_args,
            } => {
                for part in qualifier.iter().flatten() {
                    write!(f, "{}.", part)?;
                }
                f.write_str(name)?;
                if let Some(args) = type_args {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            TypeDescriptor::TypeParamRef { name } => f.write_str(name),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.var_args {
            f.write_str("...")?;
        }
        f.write_str(&self.name)?;
        if self.optional {
            f.write_str("?")?;
        }
        if let Some(ty) = &self.ty {
            write!(f, ": {}", ty)?;
        }
        Ok(())
    }
}

/// Comma-separated parameters.
pub struct ParamList<'a>(pub &'a [Param]);

impl fmt::Display for ParamList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn named_type_serializes_with_qualifier_and_args() {
        let ty = TypeDescriptor::NamedType {
            name: "C".into(),
            qualifier: Some(vec!["A".into(), "B".into()]),
            type_args: Some(vec![TypeDescriptor::param("T")]),
        };
        assert_eq!(
            serde_json::to_value(&ty).unwrap(),
            json!({
                "kind": "namedType",
                "name": "C",
                "qualifier": ["A", "B"],
                "typeArgs": [{ "kind": "typeParamRef", "name": "T" }]
            })
        );
        assert_eq!(ty.to_string(), "A.B.C<T>");
    }

    #[test]
    fn object_members_keep_index_marker() {
        let ty = TypeDescriptor::ObjectType {
            members: vec![
                ObjectMember::index(
                    vec![Param {
                        name: "key".into(),
                        ty: Some(TypeDescriptor::String),
                        var_args: false,
                        optional: false,
                    }],
                    TypeDescriptor::Number,
                ),
                ObjectMember::Property {
                    name: "size".into(),
                    ty: TypeDescriptor::Number,
                },
            ],
        };
        assert_eq!(
            serde_json::to_value(&ty).unwrap(),
            json!({
                "kind": "objectType",
                "members": [
                    {
                        "index": true,
                        "params": [{ "name": "key", "type": { "kind": "string" } }],
                        "type": { "kind": "number" }
                    },
                    { "name": "size", "type": { "kind": "number" } }
                ]
            })
        );
        assert_eq!(ty.to_string(), "{ [key: string]: number; size: number }");
    }

    #[test]
    fn function_type_display() {
        let ty = TypeDescriptor::ArrayOf {
            element: Box::new(TypeDescriptor::FunctionType {
                params: vec![Param {
                    name: "rest".into(),
                    ty: Some(TypeDescriptor::ArrayOf {
                        element: Box::new(TypeDescriptor::Any),
                    }),
                    var_args: true,
                    optional: false,
                }],
                returns: Box::new(TypeDescriptor::Boolean),
            }),
        };
        assert_eq!(ty.to_string(), "((...rest: any[]) => boolean)[]");
    }

    #[test]
    fn empty_fields_are_omitted() {
        let entry = Entry {
            call: Some(CallEntry {
                signatures: vec![CallSignature {
                    line: 3,
                    ..Default::default()
                }],
                doc: None,
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({ "call": { "signatures": [{ "line": 3 }] } })
        );
    }

    #[test]
    fn member_keys_round_trip() {
        assert_eq!(member_key("size"), "#size");
        assert_eq!(member_name("#size"), "size");
    }
}
