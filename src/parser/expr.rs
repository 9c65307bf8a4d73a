use crate::{
    ast::{
        ast::add_sibling,
        expressions::{BinaryOp, Expr, UnaryOp},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected()),
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => return Err(parser.unexpected()),
        };

        let led_bp = parser.current_binding_power();
        left = led(parser, left, led_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();
            Expr::int_lit(token.value, token.span.start)
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Expr::id(token.value, token.span.start)
        }
        _ => Err(parser.unexpected()),
    }
}

fn binary_operator(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Dash => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mult),
        TokenKind::DotProduct => Some(BinaryOp::Dot),
        TokenKind::CrossProduct => Some(BinaryOp::Cross),
        _ => None,
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operator = binary_operator(operator_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.to_string(),
            },
            operator_token.span.start,
        )
    })?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(operator, left, right, operator_token.span.start))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::unary(UnaryOp::Neg, rhs, operator_token.span.start))
}

/// `a = b = c` parses as `a = (b = c)`: the right-hand side is parsed below
/// assignment power so a following `=` keeps extending it.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Comma)?;

    Ok(Expr::assign(left, rhs, operator_token.span.start))
}

/// Comma separated expressions up to (and including) `close`.
fn parse_expr_list(parser: &mut Parser, close: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut items = vec![];

    loop {
        items = add_sibling(items, Some(parse_expr(parser, BindingPower::Comma)?));

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
            }
            kind if kind == close => {
                parser.advance();
                return Ok(items);
            }
            _ => {
                let token = parser.current_token();
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.to_string(),
                        message: format!("expected Comma or {}", close),
                    },
                    token.span.start,
                ));
            }
        }
    }
}

/// `(e)` is a grouping, `(x, y, z)` a point literal.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start;
    let mut items = parse_expr_list(parser, TokenKind::CloseParen)?;

    if items.len() == 1 {
        if let Some(expr) = items.pop() {
            return Ok(expr);
        }
    }

    Expr::point_lit(items, start)
}

pub fn parse_matrix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start;
    let items = parse_expr_list(parser, TokenKind::CloseBracket)?;

    Expr::matrix_lit(items, start)
}

/// `dot(a, b)` and `cross(a, b)`.
pub fn parse_builtin_binary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let keyword = parser.advance().clone();
    let operator = binary_operator(keyword.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: keyword.to_string(),
            },
            keyword.span.start,
        )
    })?;

    parser.expect(TokenKind::OpenParen)?;
    let lhs = parse_expr(parser, BindingPower::Comma)?;
    parser.expect(TokenKind::Comma)?;
    let rhs = parse_expr(parser, BindingPower::Comma)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::binary(operator, lhs, rhs, keyword.span.start))
}

pub fn parse_transpose_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start;

    parser.expect(TokenKind::OpenParen)?;
    let operand = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::unary(UnaryOp::Transpose, operand, start))
}

/// `p.x`, `m.23`: the attribute is a single identifier or number token.
pub fn parse_member_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();

    match parser.current_token_kind() {
        TokenKind::Identifier | TokenKind::Number => {
            let attribute = parser.advance().value.clone();
            Expr::at(left, attribute, operator.span.start)
        }
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.to_string(),
                    message: String::from("expected attribute name after '.'"),
                },
                token.span.start,
            ))
        }
    }
}
