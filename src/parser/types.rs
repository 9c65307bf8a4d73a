//! Type keyword parsing.
//!
//! The language has four built-in types and no type expressions, so every
//! type is a single keyword token mapped by a NUD handler.

use std::collections::HashMap;

use crate::{
    ast::statements::TypeKeyword,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeKeyword, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Int, parse_keyword_type);
    parser.type_nud(TokenKind::Point, parse_keyword_type);
    parser.type_nud(TokenKind::Vector, parse_keyword_type);
    parser.type_nud(TokenKind::Matrix, parse_keyword_type);
}

pub fn parse_type(parser: &mut Parser) -> Result<TypeKeyword, Error> {
    let token_kind = parser.current_token_kind();
    let handler = match parser.get_type_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => {
            let token = parser.current_token();
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.to_string(),
                    message: String::from("expected a type"),
                },
                token.span.start,
            ));
        }
    };

    handler(parser)
}

fn parse_keyword_type(parser: &mut Parser) -> Result<TypeKeyword, Error> {
    let token = parser.advance();
    let position = token.span.start;

    match token.kind {
        TokenKind::Int => Ok(TypeKeyword::Int),
        TokenKind::Point => Ok(TypeKeyword::Point),
        TokenKind::Vector => Ok(TypeKeyword::Vector),
        TokenKind::Matrix => Ok(TypeKeyword::Matrix),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.to_string(),
            },
            position,
        )),
    }
}
