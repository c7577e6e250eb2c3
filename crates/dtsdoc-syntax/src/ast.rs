//! Typed syntax tree for declaration files.
//!
//! Nodes own their children. Declarations and members carry a [`NodeStart`]
//! recording where their first token begins and which comments precede it.

use crate::kind::SyntaxKind;
use crate::lexer::{Comment, CommentKind};
use crate::line_map::LineMap;

/// A parsed file together with the line map of its text.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub declarations: Vec<Declaration>,
    pub line_map: LineMap,
}

/// First-token information of a declaration or member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeStart {
    /// Byte offset of the first token (modifiers included).
    pub offset: usize,
    /// Comments immediately preceding the first token.
    pub trivia: Vec<Comment>,
}

impl NodeStart {
    /// `/** */` comments preceding the node, in source order.
    pub fn doc_comments(&self) -> Vec<&Comment> {
        self.trivia.iter().filter(|c| c.is_doc()).collect()
    }

    /// `//` comments preceding the node, in source order.
    pub fn line_comments(&self) -> Vec<&Comment> {
        self.trivia
            .iter()
            .filter(|c| c.kind == CommentKind::SingleLine)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub text: String,
    pub offset: usize,
}

/// A quoted string literal; `text` keeps the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub text: String,
    pub offset: usize,
}

impl StringLiteral {
    pub fn value(&self) -> &str {
        self.text
            .get(1..self.text.len().saturating_sub(1))
            .unwrap_or_default()
    }
}

// -- Declarations ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Module(ModuleDeclaration),
    Function(FunctionDeclaration),
    Interface(InterfaceDeclaration),
    Variable(VariableStatement),
    TypeAlias(TypeAliasDeclaration),
    ExportAssignment(ExportAssignment),
}

impl Declaration {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Declaration::Module(_) => SyntaxKind::ModuleDeclaration,
            Declaration::Function(_) => SyntaxKind::FunctionDeclaration,
            Declaration::Interface(_) => SyntaxKind::InterfaceDeclaration,
            Declaration::Variable(_) => SyntaxKind::VariableStatement,
            Declaration::TypeAlias(_) => SyntaxKind::TypeAliasDeclaration,
            Declaration::ExportAssignment(_) => SyntaxKind::ExportAssignment,
        }
    }

    pub fn start(&self) -> &NodeStart {
        match self {
            Declaration::Module(d) => &d.start,
            Declaration::Function(d) => &d.start,
            Declaration::Interface(d) => &d.start,
            Declaration::Variable(d) => &d.start,
            Declaration::TypeAlias(d) => &d.start,
            Declaration::ExportAssignment(d) => &d.start,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleName {
    /// `module A.B.C` has one identifier per segment.
    Identifiers(Vec<Identifier>),
    /// `module "name"`
    StringLiteral(StringLiteral),
}

impl ModuleName {
    /// Dotted names are joined with `.`; string names lose their quotes.
    pub fn text(&self) -> String {
        match self {
            ModuleName::Identifiers(parts) => parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("."),
            ModuleName::StringLiteral(lit) => lit.value().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDeclaration {
    pub start: NodeStart,
    pub name: ModuleName,
    pub body: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub start: NodeStart,
    pub name: Identifier,
    pub signature: CallSignature,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDeclaration {
    pub start: NodeStart,
    pub name: Identifier,
    pub type_params: Vec<TypeParameter>,
    pub heritage: Vec<HeritageClause>,
    pub members: Vec<InterfaceMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableStatement {
    pub start: NodeStart,
    pub name: Identifier,
    pub type_annotation: Option<TypeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDeclaration {
    pub start: NodeStart,
    pub name: Identifier,
    pub type_params: Vec<TypeParameter>,
    pub ty: TypeNode,
}

/// `export = Name;`
#[derive(Debug, Clone, PartialEq)]
pub struct ExportAssignment {
    pub start: NodeStart,
    pub name: Identifier,
}

/// `extends A, B` / `implements C`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeritageClause {
    /// `ExtendsKeyword` or `ImplementsKeyword` when produced by the parser.
    pub keyword: SyntaxKind,
    pub types: Vec<TypeNode>,
}

// -- Signatures -----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameter {
    pub name: Identifier,
    pub constraint: Option<TypeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Identifier,
    /// Leading `...`
    pub dot_dot_dot: bool,
    /// Trailing `?`
    pub question: bool,
    pub type_annotation: Option<TypeNode>,
    /// Source text of a `= value` clause.
    pub initializer: Option<String>,
}

/// Type parameters, parameters and return type shared by functions, methods,
/// call and construct signatures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallSignature {
    pub type_params: Vec<TypeParameter>,
    pub params: Vec<Parameter>,
    pub return_type: Option<TypeNode>,
}

// -- Members --------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum InterfaceMember {
    Property(PropertySignature),
    Method(MethodSignature),
    Index(IndexSignature),
    Call(CallSignatureMember),
    Construct(CallSignatureMember),
}

impl InterfaceMember {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            InterfaceMember::Property(_) => SyntaxKind::PropertySignature,
            InterfaceMember::Method(_) => SyntaxKind::MethodSignature,
            InterfaceMember::Index(_) => SyntaxKind::IndexSignature,
            InterfaceMember::Call(_) => SyntaxKind::CallSignature,
            InterfaceMember::Construct(_) => SyntaxKind::ConstructSignature,
        }
    }

    pub fn start(&self) -> &NodeStart {
        match self {
            InterfaceMember::Property(m) => &m.start,
            InterfaceMember::Method(m) => &m.start,
            InterfaceMember::Index(m) => &m.start,
            InterfaceMember::Call(m) | InterfaceMember::Construct(m) => &m.start,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    pub start: NodeStart,
    pub name: Identifier,
    pub question: bool,
    pub type_annotation: Option<TypeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodSignature {
    pub start: NodeStart,
    pub name: Identifier,
    pub question: bool,
    pub signature: CallSignature,
}

/// `[key: string]: V`
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSignature {
    pub start: NodeStart,
    pub params: Vec<Parameter>,
    pub type_annotation: TypeNode,
}

/// `(x: T): R` or `new (x: T): R` inside an interface body.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSignatureMember {
    pub start: NodeStart,
    pub signature: CallSignature,
}

// -- Types ----------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// `any`, `boolean`, `number`, `string`, `void`
    Keyword(KeywordType),
    Object(ObjectType),
    Array(Box<TypeNode>),
    Function(FunctionType),
    Identifier(Identifier),
    Generic(GenericType),
    Qualified(QualifiedName),
    Union(Vec<TypeNode>),
    Tuple(Vec<TypeNode>),
    Parenthesized(Box<TypeNode>),
    StringLiteral(StringLiteral),
    Query(Identifier),
}

impl TypeNode {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            TypeNode::Keyword(k) => k.kind,
            TypeNode::Object(_) => SyntaxKind::ObjectType,
            TypeNode::Array(_) => SyntaxKind::ArrayType,
            TypeNode::Function(_) => SyntaxKind::FunctionType,
            TypeNode::Identifier(_) => SyntaxKind::IdentifierName,
            TypeNode::Generic(_) => SyntaxKind::GenericType,
            TypeNode::Qualified(_) => SyntaxKind::QualifiedName,
            TypeNode::Union(_) => SyntaxKind::UnionType,
            TypeNode::Tuple(_) => SyntaxKind::TupleType,
            TypeNode::Parenthesized(_) => SyntaxKind::ParenthesizedType,
            TypeNode::StringLiteral(_) => SyntaxKind::StringLiteralType,
            TypeNode::Query(_) => SyntaxKind::TypeQuery,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordType {
    pub kind: SyntaxKind,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub members: Vec<InterfaceMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub type_params: Vec<TypeParameter>,
    pub params: Vec<Parameter>,
    pub return_type: Box<TypeNode>,
}

/// `Name<Args...>`
#[derive(Debug, Clone, PartialEq)]
pub struct GenericType {
    pub name: Identifier,
    pub args: Vec<TypeNode>,
}

/// `A.rest`, nested to the right: `A.B.C<T>` is `A . (B . C<T>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedName {
    pub left: Identifier,
    pub right: Box<TypeNode>,
}
