//! Stylesheet parsing: tokenizer, source positions and the rule parser.

mod css_parser;
pub mod lexer;
mod position;

pub use css_parser::{
    ParseOptions, UnknownPropertyPolicy, parse_selector_list, parse_stylesheet,
    parse_stylesheet_with,
};
pub use lexer::{Token, TokenKind, tokenize};
pub use position::SourcePosition;
