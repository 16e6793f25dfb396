//! Logos-based tokenizer for stylesheet text.
//!
//! Comments and whitespace are trivia and never reach the parser, with one
//! exception: trivia separating two compound selectors is the descendant
//! combinator and is kept as an implicit [`TokenKind::Descendant`] token.

use logos::Logos;

use super::position::SourcePosition;
use crate::{Error, Result};

/// The kind of a stylesheet token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier: element names, class names, property names, keywords.
    Ident,
    /// `.` class marker.
    Dot,
    /// `>` child combinator.
    Greater,
    /// `+` adjacent-sibling combinator.
    Plus,
    /// `*` universal selector.
    Star,
    /// `:` pseudo-class marker or property/value separator.
    Colon,
    /// `,` selector separator.
    Comma,
    /// `;` declaration terminator.
    Semicolon,
    /// `{` block start.
    LBrace,
    /// `}` block end.
    RBrace,
    /// Number with optional unit suffix, or `#` color.
    Value,
    /// Whitespace acting as the descendant combinator.
    Descendant,
    /// A character the language does not know.
    Invalid,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Whether a compound selector can end with this token.
    fn ends_compound(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Star)
    }

    /// Whether a compound selector can start with this token.
    pub fn starts_compound(self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::Star | TokenKind::Dot | TokenKind::Colon
        )
    }
}

/// A token with its kind, text, and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

impl Token<'_> {
    /// Byte offset just past this token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// How the token is named in diagnostics: `EOF` or the quoted lexeme.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "EOF".to_string(),
            TokenKind::Descendant => "\" \"".to_string(),
            _ => format!("\"{}\"", self.text),
        }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    // Never ends in `*/`, so it only wins when the comment is not closed.
    #[regex(r"/\*(?:[^*]|\*+[^*/])*\**")]
    UnterminatedComment,

    #[regex(r"-?[\p{L}_][\p{L}\p{N}_-]*")]
    Ident,

    #[regex(r"-?[0-9]+(?:\.[0-9]+)?[a-zA-Z0-9_%-]*")]
    #[regex(r"#[a-zA-Z0-9_-]*")]
    Value,

    #[token(".")]
    Dot,

    #[token(">")]
    Greater,

    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,
}

/// Split stylesheet text into tokens.
///
/// The returned stream always ends with a single [`TokenKind::Eof`] token.
/// The only lexical failure is a block comment that is never closed.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut depth = 0usize;
    let mut trivia_start: Option<usize> = None;

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let kind = match raw {
            Ok(RawToken::Whitespace | RawToken::LineComment | RawToken::BlockComment) => {
                trivia_start.get_or_insert(span.start);
                continue;
            }
            Ok(RawToken::UnterminatedComment) => {
                let pos = SourcePosition::locate(source, span.start);
                return Err(Error::lex("Expected */ but got EOF", pos.line, pos.column));
            }
            Ok(RawToken::Ident) => TokenKind::Ident,
            Ok(RawToken::Value) => TokenKind::Value,
            Ok(RawToken::Dot) => TokenKind::Dot,
            Ok(RawToken::Greater) => TokenKind::Greater,
            Ok(RawToken::Plus) => TokenKind::Plus,
            Ok(RawToken::Star) => TokenKind::Star,
            Ok(RawToken::Colon) => TokenKind::Colon,
            Ok(RawToken::Comma) => TokenKind::Comma,
            Ok(RawToken::Semicolon) => TokenKind::Semicolon,
            Ok(RawToken::LBrace) => TokenKind::LBrace,
            Ok(RawToken::RBrace) => TokenKind::RBrace,
            Err(()) => TokenKind::Invalid,
        };

        if let Some(start) = trivia_start.take()
            && depth == 0
            && kind.starts_compound()
            && tokens.last().is_some_and(|prev| prev.kind.ends_compound())
        {
            tokens.push(Token {
                kind: TokenKind::Descendant,
                text: &source[start..span.start],
                offset: start,
            });
        }

        match kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => depth = depth.saturating_sub(1),
            _ => {}
        }

        tokens.push(Token {
            kind,
            text: lexer.slice(),
            offset: span.start,
        });
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        text: "",
        offset: source.len(),
    });
    tracing::trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}
