//! Tokenizer for declaration files.
//!
//! Comments are not tokens of the grammar: they are collected as trivia and
//! attached to the token that follows them, which is where doc comments and
//! group titles are looked up.

use crate::error::{ParseError, Result};
use crate::line_map::LineMap;
use logos::Logos;

/// The kind of token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // -- Trivia ---------------------------------------------------------------
    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // -- Keywords -------------------------------------------------------------
    #[token("module")]
    Module,
    #[token("namespace")]
    Namespace,
    #[token("declare")]
    Declare,
    #[token("export")]
    Export,
    #[token("function")]
    Function,
    #[token("interface")]
    Interface,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("const")]
    Const,
    #[token("type")]
    Type,
    #[token("typeof")]
    Typeof,
    #[token("new")]
    New,
    #[token("any")]
    AnyKeyword,
    #[token("boolean")]
    BooleanKeyword,
    #[token("number")]
    NumberKeyword,
    #[token("string")]
    StringKeyword,
    #[token("void")]
    VoidKeyword,

    // -- Literals and names ---------------------------------------------------
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Identifier,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    StringLiteral,
    #[regex(r"[0-9]+")]
    NumberLiteral,

    // -- Punctuation ----------------------------------------------------------
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token(".")]
    Dot,
    #[token("...")]
    DotDotDot,
    #[token("=>")]
    Arrow,
    #[token("=")]
    Equals,
    #[token("|")]
    Bar,
    #[token("&")]
    Ampersand,
    #[token("-")]
    Minus,

    /// End of input; carries the trailing trivia.
    Eof,
}

impl TokenKind {
    /// Keywords double as identifiers in name positions (`type: string`).
    pub fn is_identifier_like(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Module
                | TokenKind::Namespace
                | TokenKind::Declare
                | TokenKind::Export
                | TokenKind::Function
                | TokenKind::Interface
                | TokenKind::Extends
                | TokenKind::Implements
                | TokenKind::Var
                | TokenKind::Let
                | TokenKind::Const
                | TokenKind::Type
                | TokenKind::Typeof
                | TokenKind::New
                | TokenKind::AnyKeyword
                | TokenKind::BooleanKeyword
                | TokenKind::NumberKeyword
                | TokenKind::StringKeyword
                | TokenKind::VoidKeyword
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    SingleLine,
    MultiLine,
}

/// A comment, kept verbatim including its delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
    pub offset: usize,
}

impl Comment {
    /// `/** ... */` comments document the declaration that follows them.
    pub fn is_doc(&self) -> bool {
        self.kind == CommentKind::MultiLine && self.text.starts_with("/**") && self.text != "/**/"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
    /// Comments on the lines between the previous token and this one, in
    /// source order.
    pub leading: Vec<Comment>,
    /// Comments after this token on the line where it ends.
    pub trailing: Vec<Comment>,
}

impl Token {
    /// Offset just past this token and its trailing comments.
    fn end(&self) -> usize {
        match self.trailing.last() {
            Some(comment) => comment.offset + comment.text.len(),
            None => self.offset + self.text.len(),
        }
    }
}

/// Split `source` into tokens.
///
/// A comment starting on the line where the previous token ends trails that
/// token; every other comment leads the following token. The returned list
/// always ends with an [`TokenKind::Eof`] token.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut pending: Vec<Comment> = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(next) = lexer.next() {
        let span = lexer.span();
        let kind = next.map_err(|_| {
            let map = LineMap::new(source);
            ParseError {
                message: format!("unexpected character {:?}", lexer.slice()),
                line: map.line_of(span.start),
                column: map.column_of(span.start),
            }
        })?;
        let text = lexer.slice().to_string();
        let comment_kind = match kind {
            TokenKind::LineComment => CommentKind::SingleLine,
            TokenKind::BlockComment => CommentKind::MultiLine,
            _ => {
                tokens.push(Token {
                    kind,
                    text,
                    offset: span.start,
                    leading: std::mem::take(&mut pending),
                    trailing: Vec::new(),
                });
                continue;
            }
        };
        let comment = Comment {
            kind: comment_kind,
            text,
            offset: span.start,
        };
        match tokens.last_mut() {
            Some(previous)
                if pending.is_empty() && !source[previous.end()..span.start].contains('\n') =>
            {
                previous.trailing.push(comment)
            }
            _ => pending.push(comment),
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        text: String::new(),
        offset: source.len(),
        leading: pending,
        trailing: Vec::new(),
    });
    Ok(tokens)
}
