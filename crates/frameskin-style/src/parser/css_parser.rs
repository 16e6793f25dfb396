//! Recursive-descent parser for stylesheet text.
//!
//! The parser consumes the token stream produced by [`tokenize`] and builds
//! [`Rule`]s containing selector lists and validated declarations. Parsing
//! stops at the first violated expectation: no recovery is attempted and no
//! partial stylesheet is returned.
//!
//! Grammar:
//!
//! ```text
//! stylesheet       := rule*
//! rule             := selector_list '{' declaration* '}'
//! selector_list    := complex_selector (',' complex_selector)*
//! complex_selector := compound (combinator compound)*
//! combinator       := '>' | '+' | <whitespace>
//! compound         := (ident | '*')? ('.' ident)* (':' ident)?
//! declaration      := ident ':' value+ (';' | before '}')
//! ```

use super::lexer::{Token, TokenKind, tokenize};
use super::position::SourcePosition;
use crate::properties::{PropertyRegistry, PropertyValue, ValueError};
use crate::rules::{Declaration, Rule, Stylesheet};
use crate::selector::{Combinator, PseudoClass, Selector, SelectorList, SelectorPart, TypeSelector};
use crate::{Error, Result};

/// What to do with a declaration whose property the registry does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownPropertyPolicy {
    /// Fail with `unknown property "<name>"`.
    #[default]
    Reject,
    /// Keep the declaration as an opaque key/value pair, unchecked.
    Accept,
}

/// Parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub unknown_properties: UnknownPropertyPolicy,
}

impl ParseOptions {
    /// Default options: unknown properties are rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown-property policy.
    pub fn with_unknown_properties(mut self, policy: UnknownPropertyPolicy) -> Self {
        self.unknown_properties = policy;
        self
    }
}

/// Parse a stylesheet with the default options.
///
/// # Example
///
/// ```
/// use frameskin_style::parser::parse_stylesheet;
///
/// let sheet = parse_stylesheet(".tab { border-width: 2px; } .tab.focused { color: red }").unwrap();
/// assert_eq!(sheet.len(), 2);
/// ```
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet> {
    parse_stylesheet_with(css, &ParseOptions::default())
}

/// Parse a stylesheet.
pub fn parse_stylesheet_with(css: &str, options: &ParseOptions) -> Result<Stylesheet> {
    let mut parser = Parser::new(css, options)?;
    let mut rules = vec![];
    while parser.peek().kind != TokenKind::Eof {
        rules.push(parser.rule()?);
    }
    tracing::debug!("parsed {} rules from {} bytes", rules.len(), css.len());
    Ok(Stylesheet {
        rules,
        source_path: None,
    })
}

/// Parse text that must consist of exactly one selector list.
pub fn parse_selector_list(text: &str) -> Result<SelectorList> {
    let options = ParseOptions::default();
    let mut parser = Parser::new(text, &options)?;
    let list = parser.selector_list()?;
    parser.expect(TokenKind::Eof, "EOF")?;
    Ok(list)
}

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, options: &'a ParseOptions) -> Result<Self> {
        Ok(Self {
            source,
            tokens: tokenize(source)?,
            pos: 0,
            options,
        })
    }

    fn peek(&self) -> Token<'a> {
        // The stream always ends with Eof and `bump` never moves past it.
        self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token<'a> {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn error_at(&self, token: Token<'_>, message: impl Into<String>) -> Error {
        let pos = SourcePosition::locate(self.source, token.offset);
        Error::parse(message, pos.line, pos.column)
    }

    fn expected(&self, what: &str, token: Token<'_>) -> Error {
        self.error_at(token, format!("Expected {} but got {}", what, token.describe()))
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token<'a>> {
        let token = self.bump();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self.expected(what, token))
        }
    }

    fn rule(&mut self) -> Result<Rule> {
        if self.peek().kind == TokenKind::LBrace {
            return Err(self.error_at(self.peek(), "need at least one selector"));
        }
        let selectors = self.selector_list()?;
        self.expect(TokenKind::LBrace, "{")?;

        let mut declarations = vec![];
        loop {
            match self.peek().kind {
                TokenKind::RBrace => {
                    self.bump();
                    break;
                }
                TokenKind::Eof => return Err(self.expected("}", self.peek())),
                _ => declarations.push(self.declaration()?),
            }
        }
        Ok(Rule::new(selectors, declarations))
    }

    fn selector_list(&mut self) -> Result<SelectorList> {
        let mut selectors = vec![self.selector()?];
        while self.peek().kind == TokenKind::Comma {
            self.bump();
            selectors.push(self.selector()?);
        }
        // `selectors` holds at least the first selector.
        SelectorList::new(selectors).ok_or_else(|| self.error_at(self.peek(), "need at least one selector"))
    }

    fn selector(&mut self) -> Result<Selector> {
        let mut selector = Selector::new(self.compound()?);
        loop {
            let combinator = match self.peek().kind {
                TokenKind::Greater => Combinator::Child,
                TokenKind::Plus => Combinator::AdjacentSibling,
                TokenKind::Descendant => Combinator::Descendant,
                _ => break,
            };
            let op = self.bump();
            let next = self.peek();
            if !next.kind.starts_compound() {
                return Err(self.error_at(
                    next,
                    format!("Expected selector after {} but got {}", op.describe(), next.describe()),
                ));
            }
            selector.push(combinator, self.compound()?);
        }
        Ok(selector)
    }

    fn compound(&mut self) -> Result<SelectorPart> {
        let start = self.peek();
        let mut part = SelectorPart::new();

        match start.kind {
            TokenKind::Ident => {
                part.type_selector = Some(TypeSelector::Element(start.text.to_string()));
                self.bump();
            }
            TokenKind::Star => {
                part.type_selector = Some(TypeSelector::Universal);
                self.bump();
            }
            _ => {}
        }

        while self.peek().kind == TokenKind::Dot {
            let dot = self.bump();
            let name = self.attached_ident(dot, "class name")?;
            part.classes.push(name.text.to_string());
        }

        if self.peek().kind == TokenKind::Colon {
            let colon = self.bump();
            let name = self.attached_ident(colon, "pseudo-class")?;
            let pseudo = PseudoClass::from_css(name.text).ok_or_else(|| {
                self.error_at(name, format!("unknown pseudo-class \":{}\"", name.text))
            })?;
            part.pseudo_class = Some(pseudo);
        }

        if part.is_empty() {
            return Err(self.error_at(
                start,
                format!("selector must not be empty but got {}", start.describe()),
            ));
        }
        Ok(part)
    }

    /// The identifier written directly after a `.` or `:` marker.
    fn attached_ident(&mut self, marker: Token<'a>, what: &str) -> Result<Token<'a>> {
        let next = self.peek();
        if next.kind != TokenKind::Ident {
            return Err(self.expected(what, next));
        }
        if next.offset != marker.end() {
            return Err(self.error_at(
                next,
                format!("Expected {} directly after {}", what, marker.describe()),
            ));
        }
        Ok(self.bump())
    }

    fn declaration(&mut self) -> Result<Declaration> {
        let name = self.bump();
        if name.kind != TokenKind::Ident {
            return Err(self.expected("property name", name));
        }
        self.expect(TokenKind::Colon, ":")?;

        let mut values = vec![];
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::Value | TokenKind::Ident => {
                    values.push(token.text.to_string());
                    self.bump();
                }
                TokenKind::Semicolon | TokenKind::RBrace if values.is_empty() => {
                    return Err(self.expected("value", token));
                }
                TokenKind::Semicolon => {
                    self.bump();
                    break;
                }
                // `;` is optional after the last declaration of a block.
                TokenKind::RBrace => break,
                TokenKind::Eof => return Err(self.expected("}", token)),
                _ => return Err(self.expected(";", token)),
            }
        }

        let value = self.validate(name, &values)?;
        Ok(Declaration {
            property: name.text.to_string(),
            values,
            value,
        })
    }

    fn validate(&self, name: Token<'_>, values: &[String]) -> Result<PropertyValue> {
        let to_error = |source: ValueError| {
            let pos = SourcePosition::locate(self.source, name.offset);
            Error::validation(source, pos.line, pos.column)
        };

        match PropertyRegistry::global().get(name.text) {
            Some(spec) => spec.validate(values).map_err(to_error),
            None => match self.options.unknown_properties {
                UnknownPropertyPolicy::Reject => {
                    Err(to_error(ValueError::UnknownProperty(name.text.to_string())))
                }
                UnknownPropertyPolicy::Accept => {
                    tracing::debug!("accepting unknown property \"{}\"", name.text);
                    Ok(PropertyValue::Opaque(values.to_vec()))
                }
            },
        }
    }
}
