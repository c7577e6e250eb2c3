//! Recursive-descent parser for the declaration-file subset.
//!
//! Covers what API documentation is written against: modules and namespaces,
//! function declarations, interfaces, variables, type aliases and
//! `export =`. Function bodies are skipped, not parsed.

use crate::ast::*;
use crate::error::{ParseError, Result};
use crate::kind::SyntaxKind;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::line_map::LineMap;

/// Parse a whole declaration file.
pub fn parse(source: &str) -> Result<SourceFile> {
    let mut parser = Parser::new(source)?;
    let mut declarations = Vec::new();
    loop {
        while parser.eat(TokenKind::Semicolon) {}
        if parser.at(TokenKind::Eof) {
            break;
        }
        declarations.push(parser.declaration()?);
    }
    Ok(SourceFile {
        declarations,
        line_map: parser.line_map,
    })
}

/// Parse a standalone type expression such as `Map<K, V[]>`.
pub fn parse_type(source: &str) -> Result<TypeNode> {
    let mut parser = Parser::new(source)?;
    let ty = parser.ty()?;
    parser.expect(TokenKind::Eof, "end of input")?;
    Ok(ty)
}

struct Parser<'s> {
    source: &'s str,
    tokens: Vec<Token>,
    pos: usize,
    line_map: LineMap,
}

impl<'s> Parser<'s> {
    fn new(source: &'s str) -> Result<Self> {
        Ok(Self {
            source,
            tokens: tokenize(source)?,
            pos: 0,
            line_map: LineMap::new(source),
        })
    }

    // -- Token cursor ---------------------------------------------------------

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn nth_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.error(format!("expected {}, found {}", what, self.describe_current())))
        }
    }

    fn describe_current(&self) -> String {
        let token = self.peek();
        if token.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            format!("`{}`", token.text)
        }
    }

    fn error(&self, message: String) -> ParseError {
        let offset = self.peek().offset;
        ParseError {
            message,
            line: self.line_map.line_of(offset),
            column: self.line_map.column_of(offset),
        }
    }

    fn start(&self) -> NodeStart {
        let token = self.peek();
        NodeStart {
            offset: token.offset,
            trivia: token.leading.clone(),
        }
    }

    /// A name: identifiers, and keywords used as names.
    fn identifier(&mut self, what: &str) -> Result<Identifier> {
        if self.peek().kind.is_identifier_like() {
            let token = self.bump();
            Ok(Identifier {
                text: token.text,
                offset: token.offset,
            })
        } else {
            Err(self.error(format!("expected {}, found {}", what, self.describe_current())))
        }
    }

    /// Skip tokens up to (not including) one of `stop` at nesting depth zero,
    /// returning the skipped source text.
    fn skip_expression(&mut self, stop: &[TokenKind]) -> Result<String> {
        let begin = self.peek().offset;
        let mut end = begin;
        let mut depth = 0usize;
        loop {
            let kind = self.peek().kind;
            if kind == TokenKind::Eof {
                return Err(self.error("unterminated expression".to_string()));
            }
            if depth == 0 && stop.contains(&kind) {
                break;
            }
            match kind {
                TokenKind::OpenParen | TokenKind::OpenBracket | TokenKind::OpenBrace => depth += 1,
                TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseBrace => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            let token = self.bump();
            end = token.offset + token.text.len();
        }
        Ok(self.source[begin..end].to_string())
    }

    fn skip_block(&mut self) -> Result<()> {
        self.expect(TokenKind::OpenBrace, "`{`")?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.bump().kind {
                TokenKind::OpenBrace => depth += 1,
                TokenKind::CloseBrace => depth -= 1,
                TokenKind::Eof => return Err(self.error("unterminated block".to_string())),
                _ => {}
            }
        }
        Ok(())
    }

    // -- Declarations ---------------------------------------------------------

    fn declaration(&mut self) -> Result<Declaration> {
        let start = self.start();
        loop {
            match self.peek().kind {
                TokenKind::Export if self.nth_kind(1) == TokenKind::Equals => {
                    self.bump();
                    self.bump();
                    let name = self.identifier("exported name")?;
                    self.eat(TokenKind::Semicolon);
                    return Ok(Declaration::ExportAssignment(ExportAssignment { start, name }));
                }
                TokenKind::Export | TokenKind::Declare => {
                    self.bump();
                }
                _ => break,
            }
        }

        match self.peek().kind {
            TokenKind::Module | TokenKind::Namespace => self.module(start).map(Declaration::Module),
            TokenKind::Function => self.function(start).map(Declaration::Function),
            TokenKind::Interface => self.interface(start).map(Declaration::Interface),
            TokenKind::Var | TokenKind::Let | TokenKind::Const => {
                self.variable(start).map(Declaration::Variable)
            }
            TokenKind::Type if self.nth_kind(1).is_identifier_like() => {
                self.type_alias(start).map(Declaration::TypeAlias)
            }
            _ => Err(self.error(format!(
                "expected a declaration, found {}",
                self.describe_current()
            ))),
        }
    }

    fn module(&mut self, start: NodeStart) -> Result<ModuleDeclaration> {
        self.bump();
        let name = if self.at(TokenKind::StringLiteral) {
            let token = self.bump();
            ModuleName::StringLiteral(StringLiteral {
                text: token.text,
                offset: token.offset,
            })
        } else {
            let mut parts = vec![self.identifier("module name")?];
            while self.eat(TokenKind::Dot) {
                parts.push(self.identifier("module name")?);
            }
            ModuleName::Identifiers(parts)
        };

        self.expect(TokenKind::OpenBrace, "`{`")?;
        let mut body = Vec::new();
        loop {
            while self.eat(TokenKind::Semicolon) {}
            if self.at(TokenKind::CloseBrace) || self.at(TokenKind::Eof) {
                break;
            }
            body.push(self.declaration()?);
        }
        self.expect(TokenKind::CloseBrace, "`}`")?;
        Ok(ModuleDeclaration { start, name, body })
    }

    fn function(&mut self, start: NodeStart) -> Result<FunctionDeclaration> {
        self.bump();
        let name = self.identifier("function name")?;
        let signature = self.call_signature()?;
        if self.at(TokenKind::OpenBrace) {
            self.skip_block()?;
        } else {
            self.eat(TokenKind::Semicolon);
        }
        Ok(FunctionDeclaration {
            start,
            name,
            signature,
        })
    }

    fn interface(&mut self, start: NodeStart) -> Result<InterfaceDeclaration> {
        self.bump();
        let name = self.identifier("interface name")?;
        let type_params = if self.at(TokenKind::LessThan) {
            self.type_parameters()?
        } else {
            Vec::new()
        };

        let mut heritage = Vec::new();
        loop {
            let keyword = match self.peek().kind {
                TokenKind::Extends => SyntaxKind::ExtendsKeyword,
                TokenKind::Implements => SyntaxKind::ImplementsKeyword,
                _ => break,
            };
            self.bump();
            let mut types = vec![self.type_reference_start()?];
            while self.eat(TokenKind::Comma) {
                types.push(self.type_reference_start()?);
            }
            heritage.push(HeritageClause { keyword, types });
        }

        self.expect(TokenKind::OpenBrace, "`{`")?;
        let members = self.type_members()?;
        self.expect(TokenKind::CloseBrace, "`}`")?;
        Ok(InterfaceDeclaration {
            start,
            name,
            type_params,
            heritage,
            members,
        })
    }

    fn variable(&mut self, start: NodeStart) -> Result<VariableStatement> {
        self.bump();
        let name = self.identifier("variable name")?;
        let type_annotation = if self.eat(TokenKind::Colon) {
            Some(self.ty()?)
        } else {
            None
        };
        if self.eat(TokenKind::Equals) {
            self.skip_expression(&[TokenKind::Semicolon])?;
        }
        self.eat(TokenKind::Semicolon);
        Ok(VariableStatement {
            start,
            name,
            type_annotation,
        })
    }

    fn type_alias(&mut self, start: NodeStart) -> Result<TypeAliasDeclaration> {
        self.bump();
        let name = self.identifier("type name")?;
        let type_params = if self.at(TokenKind::LessThan) {
            self.type_parameters()?
        } else {
            Vec::new()
        };
        self.expect(TokenKind::Equals, "`=`")?;
        let ty = self.ty()?;
        self.eat(TokenKind::Semicolon);
        Ok(TypeAliasDeclaration {
            start,
            name,
            type_params,
            ty,
        })
    }

    // -- Signatures -----------------------------------------------------------

    fn type_parameters(&mut self) -> Result<Vec<TypeParameter>> {
        self.expect(TokenKind::LessThan, "`<`")?;
        let mut params = Vec::new();
        while !self.at(TokenKind::GreaterThan) {
            let name = self.identifier("type parameter")?;
            let constraint = if self.eat(TokenKind::Extends) {
                Some(self.ty()?)
            } else {
                None
            };
            params.push(TypeParameter { name, constraint });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::GreaterThan, "`>`")?;
        Ok(params)
    }

    fn parameters(&mut self, close: TokenKind) -> Result<Vec<Parameter>> {
        let mut params = Vec::new();
        while !self.at(close) {
            params.push(self.parameter()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(params)
    }

    fn parameter(&mut self) -> Result<Parameter> {
        let dot_dot_dot = self.eat(TokenKind::DotDotDot);
        let name = self.identifier("parameter name")?;
        let question = self.eat(TokenKind::Question);
        let type_annotation = if self.eat(TokenKind::Colon) {
            Some(self.ty()?)
        } else {
            None
        };
        let initializer = if self.eat(TokenKind::Equals) {
            Some(self.skip_expression(&[TokenKind::Comma, TokenKind::CloseParen])?)
        } else {
            None
        };
        Ok(Parameter {
            name,
            dot_dot_dot,
            question,
            type_annotation,
            initializer,
        })
    }

    fn call_signature(&mut self) -> Result<CallSignature> {
        let type_params = if self.at(TokenKind::LessThan) {
            self.type_parameters()?
        } else {
            Vec::new()
        };
        self.expect(TokenKind::OpenParen, "`(`")?;
        let params = self.parameters(TokenKind::CloseParen)?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        let return_type = if self.eat(TokenKind::Colon) {
            Some(self.ty()?)
        } else {
            None
        };
        Ok(CallSignature {
            type_params,
            params,
            return_type,
        })
    }

    // -- Members --------------------------------------------------------------

    /// Members up to the closing brace, which is left for the caller.
    fn type_members(&mut self) -> Result<Vec<InterfaceMember>> {
        let mut members = Vec::new();
        while !self.at(TokenKind::CloseBrace) && !self.at(TokenKind::Eof) {
            members.push(self.member()?);
            if !self.eat(TokenKind::Semicolon) {
                self.eat(TokenKind::Comma);
            }
        }
        Ok(members)
    }

    fn member(&mut self) -> Result<InterfaceMember> {
        let start = self.start();
        match self.peek().kind {
            TokenKind::OpenBracket => {
                self.bump();
                let params = self.parameters(TokenKind::CloseBracket)?;
                self.expect(TokenKind::CloseBracket, "`]`")?;
                self.expect(TokenKind::Colon, "`:`")?;
                let type_annotation = self.ty()?;
                Ok(InterfaceMember::Index(IndexSignature {
                    start,
                    params,
                    type_annotation,
                }))
            }
            TokenKind::OpenParen | TokenKind::LessThan => {
                let signature = self.call_signature()?;
                Ok(InterfaceMember::Call(CallSignatureMember { start, signature }))
            }
            TokenKind::New
                if matches!(self.nth_kind(1), TokenKind::OpenParen | TokenKind::LessThan) =>
            {
                self.bump();
                let signature = self.call_signature()?;
                Ok(InterfaceMember::Construct(CallSignatureMember { start, signature }))
            }
            TokenKind::StringLiteral | TokenKind::NumberLiteral => {
                let token = self.bump();
                let name = Identifier {
                    text: token.text,
                    offset: token.offset,
                };
                self.named_member(start, name)
            }
            _ => {
                let name = self.identifier("member name")?;
                self.named_member(start, name)
            }
        }
    }

    fn named_member(&mut self, start: NodeStart, name: Identifier) -> Result<InterfaceMember> {
        let question = self.eat(TokenKind::Question);
        if matches!(self.peek().kind, TokenKind::OpenParen | TokenKind::LessThan) {
            let signature = self.call_signature()?;
            return Ok(InterfaceMember::Method(MethodSignature {
                start,
                name,
                question,
                signature,
            }));
        }
        let type_annotation = if self.eat(TokenKind::Colon) {
            Some(self.ty()?)
        } else {
            None
        };
        Ok(InterfaceMember::Property(PropertySignature {
            start,
            name,
            question,
            type_annotation,
        }))
    }

    // -- Types ----------------------------------------------------------------

    fn ty(&mut self) -> Result<TypeNode> {
        self.eat(TokenKind::Bar);
        let first = self.postfix_type()?;
        if !self.at(TokenKind::Bar) {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.eat(TokenKind::Bar) {
            types.push(self.postfix_type()?);
        }
        Ok(TypeNode::Union(types))
    }

    fn postfix_type(&mut self) -> Result<TypeNode> {
        let mut ty = self.primary_type()?;
        while self.at(TokenKind::OpenBracket) && self.nth_kind(1) == TokenKind::CloseBracket {
            self.bump();
            self.bump();
            ty = TypeNode::Array(Box::new(ty));
        }
        Ok(ty)
    }

    fn primary_type(&mut self) -> Result<TypeNode> {
        let keyword = match self.peek().kind {
            TokenKind::AnyKeyword => Some(SyntaxKind::AnyKeyword),
            TokenKind::BooleanKeyword => Some(SyntaxKind::BooleanKeyword),
            TokenKind::NumberKeyword => Some(SyntaxKind::NumberKeyword),
            TokenKind::StringKeyword => Some(SyntaxKind::StringKeyword),
            TokenKind::VoidKeyword => Some(SyntaxKind::VoidKeyword),
            _ => None,
        };
        if let Some(kind) = keyword {
            let token = self.bump();
            return Ok(TypeNode::Keyword(KeywordType {
                kind,
                offset: token.offset,
            }));
        }

        match self.peek().kind {
            TokenKind::OpenBrace => {
                self.bump();
                let members = self.type_members()?;
                self.expect(TokenKind::CloseBrace, "`}`")?;
                Ok(TypeNode::Object(ObjectType { members }))
            }
            TokenKind::LessThan => self.function_type(),
            TokenKind::OpenParen if self.is_function_type_start() => self.function_type(),
            TokenKind::OpenParen => {
                self.bump();
                let inner = self.ty()?;
                self.expect(TokenKind::CloseParen, "`)`")?;
                Ok(TypeNode::Parenthesized(Box::new(inner)))
            }
            TokenKind::OpenBracket => {
                self.bump();
                let mut types = Vec::new();
                while !self.at(TokenKind::CloseBracket) {
                    types.push(self.ty()?);
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(TokenKind::CloseBracket, "`]`")?;
                Ok(TypeNode::Tuple(types))
            }
            TokenKind::StringLiteral => {
                let token = self.bump();
                Ok(TypeNode::StringLiteral(StringLiteral {
                    text: token.text,
                    offset: token.offset,
                }))
            }
            TokenKind::Typeof => {
                self.bump();
                let first = self.identifier("name")?;
                let mut text = first.text;
                while self.eat(TokenKind::Dot) {
                    text.push('.');
                    text.push_str(&self.identifier("name")?.text);
                }
                Ok(TypeNode::Query(Identifier {
                    text,
                    offset: first.offset,
                }))
            }
            TokenKind::Identifier => self.type_reference_start(),
            _ => Err(self.error(format!("expected a type, found {}", self.describe_current()))),
        }
    }

    /// At `(`: does the matching `)` precede `=>`?
    fn is_function_type_start(&self) -> bool {
        let mut depth = 0usize;
        for (i, token) in self.tokens[self.pos..].iter().enumerate() {
            match token.kind {
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen => {
                    depth -= 1;
                    if depth == 0 {
                        return self.nth_kind(i + 1) == TokenKind::Arrow;
                    }
                }
                TokenKind::Eof => return false,
                _ => {}
            }
        }
        false
    }

    fn function_type(&mut self) -> Result<TypeNode> {
        let type_params = if self.at(TokenKind::LessThan) {
            self.type_parameters()?
        } else {
            Vec::new()
        };
        self.expect(TokenKind::OpenParen, "`(`")?;
        let params = self.parameters(TokenKind::CloseParen)?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        self.expect(TokenKind::Arrow, "`=>`")?;
        let return_type = Box::new(self.ty()?);
        Ok(TypeNode::Function(FunctionType {
            type_params,
            params,
            return_type,
        }))
    }

    fn type_reference_start(&mut self) -> Result<TypeNode> {
        let name = self.identifier("type name")?;
        self.type_reference(name)
    }

    /// `name`, `name<args>` or `name.rest`, with `rest` parsed recursively so
    /// qualification nests to the right.
    fn type_reference(&mut self, name: Identifier) -> Result<TypeNode> {
        if self.eat(TokenKind::Dot) {
            let next = self.identifier("type name")?;
            let right = self.type_reference(next)?;
            return Ok(TypeNode::Qualified(QualifiedName {
                left: name,
                right: Box::new(right),
            }));
        }
        if self.eat(TokenKind::LessThan) {
            let mut args = Vec::new();
            while !self.at(TokenKind::GreaterThan) {
                args.push(self.ty()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::GreaterThan, "`>`")?;
            return Ok(TypeNode::Generic(GenericType { name, args }));
        }
        Ok(TypeNode::Identifier(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(source: &str) -> Declaration {
        let mut file = parse(source).unwrap();
        assert_eq!(file.declarations.len(), 1);
        file.declarations.remove(0)
    }

    #[test]
    fn parses_function_declaration() {
        let Declaration::Function(f) = single("declare function get<T>(key: string, ...rest: T[]): T;")
        else {
            panic!("expected function");
        };
        assert_eq!(f.name.text, "get");
        assert_eq!(f.signature.type_params.len(), 1);
        assert_eq!(f.signature.params.len(), 2);
        assert!(f.signature.params[1].dot_dot_dot);
        assert!(matches!(
            f.signature.params[1].type_annotation,
            Some(TypeNode::Array(_))
        ));
        assert!(matches!(f.signature.return_type, Some(TypeNode::Identifier(_))));
    }

    #[test]
    fn skips_function_bodies() {
        let file = parse("function f(a) { if (a) { return 1; } }\nfunction g(): void;").unwrap();
        assert_eq!(file.declarations.len(), 2);
    }

    #[test]
    fn parses_nested_modules() {
        let Declaration::Module(m) = single("declare module A.B { export module C { } }") else {
            panic!("expected module");
        };
        assert_eq!(m.name.text(), "A.B");
        assert_eq!(m.body.len(), 1);
        assert_eq!(m.body[0].kind(), SyntaxKind::ModuleDeclaration);
    }

    #[test]
    fn parses_string_module_with_export_assignment() {
        let Declaration::Module(m) = single("declare module \"immutable\" { export = Immutable }")
        else {
            panic!("expected module");
        };
        assert_eq!(m.name.text(), "immutable");
        assert_eq!(m.body[0].kind(), SyntaxKind::ExportAssignment);
    }

    #[test]
    fn parses_interface_members() {
        let source = r#"
            interface Map<K, V> extends Collection<K, V>, Iterable {
                size: number;
                get(key: K, notSetValue?: V): V;
                [key: string]: V;
                (x: K): V;
                new (x: K): Map<K, V>;
                opt?: string
            }
        "#;
        let Declaration::Interface(i) = single(source) else {
            panic!("expected interface");
        };
        assert_eq!(i.name.text, "Map");
        assert_eq!(i.type_params.len(), 2);
        assert_eq!(i.heritage.len(), 1);
        assert_eq!(i.heritage[0].keyword, SyntaxKind::ExtendsKeyword);
        assert_eq!(i.heritage[0].types.len(), 2);
        let kinds: Vec<_> = i.members.iter().map(|m| m.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::PropertySignature,
                SyntaxKind::MethodSignature,
                SyntaxKind::IndexSignature,
                SyntaxKind::CallSignature,
                SyntaxKind::ConstructSignature,
                SyntaxKind::PropertySignature,
            ]
        );
        let InterfaceMember::Property(opt) = &i.members[5] else {
            panic!("expected property");
        };
        assert!(opt.question);
    }

    #[test]
    fn member_trivia_keeps_group_comment_and_doc() {
        let source = "interface I {\n  // Reading\n  /** Size. */\n  size: number;\n}";
        let Declaration::Interface(i) = single(source) else {
            panic!("expected interface");
        };
        let start = i.members[0].start();
        assert_eq!(start.line_comments()[0].text, "// Reading");
        assert_eq!(start.doc_comments()[0].text, "/** Size. */");
    }

    #[test]
    fn declaration_start_includes_modifiers() {
        let file = parse("\n/** Doc */\nexport declare function f(): void;").unwrap();
        let start = file.declarations[0].start();
        assert_eq!(file.line_map.line_of(start.offset), 3);
        assert_eq!(start.doc_comments().len(), 1);
    }

    #[test]
    fn records_parameter_initializer() {
        let Declaration::Function(f) = single("function f(a: number[] = [1, 2], b?: string) {}")
        else {
            panic!("expected function");
        };
        assert_eq!(f.signature.params[0].initializer.as_deref(), Some("[1, 2]"));
        assert!(f.signature.params[1].question);
    }

    #[test]
    fn qualified_names_nest_to_the_right() {
        let TypeNode::Qualified(q) = parse_type("A.B.C<T>").unwrap() else {
            panic!("expected qualified name");
        };
        assert_eq!(q.left.text, "A");
        let TypeNode::Qualified(inner) = *q.right else {
            panic!("expected nested qualified name");
        };
        assert_eq!(inner.left.text, "B");
        let TypeNode::Generic(g) = *inner.right else {
            panic!("expected generic");
        };
        assert_eq!(g.name.text, "C");
        assert_eq!(g.args.len(), 1);
    }

    #[test]
    fn function_types_and_parentheses() {
        assert_eq!(
            parse_type("(value: V, key: K) => boolean").unwrap().kind(),
            SyntaxKind::FunctionType
        );
        assert_eq!(
            parse_type("<T>(x: T) => T").unwrap().kind(),
            SyntaxKind::FunctionType
        );
        assert_eq!(parse_type("(string)").unwrap().kind(), SyntaxKind::ParenthesizedType);
        assert_eq!(parse_type("(() => void)[]").unwrap().kind(), SyntaxKind::ArrayType);
    }

    #[test]
    fn other_type_forms() {
        assert_eq!(parse_type("string | number").unwrap().kind(), SyntaxKind::UnionType);
        assert_eq!(parse_type("[K, V]").unwrap().kind(), SyntaxKind::TupleType);
        assert_eq!(parse_type("'a'").unwrap().kind(), SyntaxKind::StringLiteralType);
        assert_eq!(parse_type("typeof Foo.bar").unwrap().kind(), SyntaxKind::TypeQuery);
        assert_eq!(parse_type("void").unwrap().kind(), SyntaxKind::VoidKeyword);
        assert_eq!(
            parse_type("{ [key: string]: V; size: number }").unwrap().kind(),
            SyntaxKind::ObjectType
        );
    }

    #[test]
    fn type_parameter_constraints_are_parsed() {
        let Declaration::Function(f) = single("function f<T extends Map<K, V>>(x: T): T;") else {
            panic!("expected function");
        };
        assert!(f.signature.type_params[0].constraint.is_some());
    }

    #[test]
    fn reports_position_of_unexpected_token() {
        let err = parse("declare\n  class Foo {}").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 3);
        assert!(err.message.contains("expected a declaration"));
    }

    #[test]
    fn rejects_trailing_tokens_in_type() {
        assert!(parse_type("Map<K> extra").is_err());
    }
}
