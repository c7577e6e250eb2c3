//! Closed enumeration of syntax node kinds.

use std::fmt;

/// Kind tag carried by every node of the syntax tree.
///
/// Consumers dispatch on the typed node enums; the kind is what they report
/// back when a node falls outside the set they understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    SourceFile,

    // Declarations
    ModuleDeclaration,
    FunctionDeclaration,
    InterfaceDeclaration,
    VariableStatement,
    TypeAliasDeclaration,
    ExportAssignment,

    // Interface and object-type members
    PropertySignature,
    MethodSignature,
    IndexSignature,
    CallSignature,
    ConstructSignature,

    // Signature parts
    Parameter,
    TypeParameter,
    HeritageClause,

    // Heritage keywords
    ExtendsKeyword,
    ImplementsKeyword,

    // Types
    AnyKeyword,
    BooleanKeyword,
    NumberKeyword,
    StringKeyword,
    VoidKeyword,
    ObjectType,
    ArrayType,
    FunctionType,
    IdentifierName,
    GenericType,
    QualifiedName,
    UnionType,
    TupleType,
    ParenthesizedType,
    StringLiteralType,
    TypeQuery,
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
