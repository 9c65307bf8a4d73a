use crate::{
    ast::statements::{PrintStmt, Stmt, VarDeclStmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        let handler = *handler;
        return handler(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(expr))
}

/// `type name;` or `type name = expr;`
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.get_position();
    let ty = parse_type(parser)?;

    let token = parser.current_token();
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: token.to_string(),
            message: String::from("expected identifier during variable declaration"),
        },
        token.span.start,
    );
    let name_token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    let initializer = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        ty,
        name: name_token.value,
        name_position: name_token.span.start,
        initializer,
        position,
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Print(PrintStmt {
        expression,
        position,
    }))
}
