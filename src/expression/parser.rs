//! Parsing support for boolean expressions

use super::error::{ExpressionParseError, ParseBoolExprError};
use super::BoolExpr;
use lalrpop_util::ParseError;
use std::fmt;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/bool_expr.rs"));
}

impl BoolExpr {
    /// Parse a boolean expression from a string
    ///
    /// Supports standard boolean operators:
    /// - `+`, `|` or `or` for OR
    /// - `*`, `&` or `and` for AND
    /// - `~`, `!` or `not` for NOT
    /// - Parentheses for grouping
    /// - Constants: `0`, `1`, `true`, `false`
    ///
    /// Identifiers start with a letter or underscore. NOT binds tightest, then AND, then OR.
    pub fn parse(input: &str) -> Result<Self, ParseBoolExprError> {
        parser_impl::ExprParser::new()
            .parse(input)
            .map_err(|e| convert_error(e, input).into())
    }
}

impl std::str::FromStr for BoolExpr {
    type Err = ParseBoolExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoolExpr::parse(s)
    }
}

/// Translate a lalrpop error into our error type, keeping the byte offset
fn convert_error<T, E>(err: ParseError<usize, T, E>, input: &str) -> ExpressionParseError
where
    T: fmt::Display,
    E: fmt::Display,
{
    let input: Arc<str> = Arc::from(input);
    let (message, position) = match err {
        ParseError::UnrecognizedEof { .. } => {
            return ExpressionParseError::UnexpectedEnd { input };
        }
        ParseError::InvalidToken { location } => ("invalid token".to_string(), Some(location)),
        ParseError::UnrecognizedToken {
            token: (start, token, _),
            expected,
        } => (
            format!(
                "unexpected token `{}`, expected one of {}",
                token,
                expected.join(", ")
            ),
            Some(start),
        ),
        ParseError::ExtraToken {
            token: (start, token, _),
        } => (format!("extra token `{}`", token), Some(start)),
        ParseError::User { error } => (error.to_string(), None),
    };
    ExpressionParseError::InvalidSyntax {
        message: Arc::from(message.as_str()),
        input,
        position,
    }
}
