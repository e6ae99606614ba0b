//! Display and Debug formatting for boolean expressions

use super::{BoolExpr, BoolExprAst};
use std::fmt;

/// Context for formatting expressions with minimal parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None, // Top level or inside parentheses
    And,  // Inside an AND operation
    Or,   // Inside an OR operation
}

fn fmt_with_context(
    ast: &BoolExprAst,
    f: &mut fmt::Formatter<'_>,
    ctx: OpContext,
) -> fmt::Result {
    match ast {
        BoolExprAst::Variable(name) => write!(f, "{}", name),
        BoolExprAst::Constant(val) => write!(f, "{}", if *val { "1" } else { "0" }),

        BoolExprAst::And(left, right) => {
            fmt_with_context(left, f, OpContext::And)?;
            write!(f, " * ")?;
            fmt_with_context(right, f, OpContext::And)
        }

        BoolExprAst::Or(left, right) => {
            // OR needs parens inside AND (lower precedence)
            let needs_parens = ctx == OpContext::And;

            if needs_parens {
                write!(f, "(")?;
            }

            fmt_with_context(left, f, OpContext::Or)?;
            write!(f, " + ")?;
            fmt_with_context(right, f, OpContext::Or)?;

            if needs_parens {
                write!(f, ")")?;
            }
            Ok(())
        }

        BoolExprAst::Not(inner) => {
            write!(f, "~")?;
            match inner.as_ref() {
                BoolExprAst::Variable(_) | BoolExprAst::Constant(_) | BoolExprAst::Not(_) => {
                    fmt_with_context(inner, f, OpContext::None)
                }
                _ => {
                    write!(f, "(")?;
                    fmt_with_context(inner, f, OpContext::None)?;
                    write!(f, ")")
                }
            }
        }
    }
}

/// Debug formatting for boolean expressions
///
/// Formats expressions with minimal parentheses based on operator precedence.
/// Uses standard boolean algebra notation: `*` for AND, `+` for OR, `~` for NOT.
impl fmt::Debug for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_context(&self.ast, f, OpContext::None)
    }
}

/// Display formatting for boolean expressions
///
/// Delegates to the `Debug` implementation. Use `{}` or `{:?}` interchangeably.
///
/// # Examples
///
/// ```
/// use kmap_logic::BoolExpr;
///
/// let expr = BoolExpr::parse("(a or b) and not c").unwrap();
/// assert_eq!(expr.to_string(), "(a + b) * ~c");
/// ```
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
