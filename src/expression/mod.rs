//! Boolean expression types with operator overloading and parsing support
//!
//! This module replaces free-form code evaluation with a dedicated parser: text is
//! turned into an explicit tree over variables, constants, AND, OR and NOT, and
//! that tree is interpreted directly.
//!
//! # Main Types
//!
//! - [`BoolExpr`] - A boolean expression that supports three construction methods:
//!   1. Parsing: `BoolExpr::parse("a and not b")`
//!   2. Method API: `a.and(&b).or(&c)`
//!   3. Operator overloading: `&a * &b + &c`
//!
//! # Quick Start
//!
//! ```
//! use kmap_logic::BoolExpr;
//!
//! # fn main() -> std::io::Result<()> {
//! // Symbolic and keyword operators can be mixed
//! let expr = BoolExpr::parse("a * b + not c")?;
//! let same = BoolExpr::parse("(a & b) | !c")?;
//! assert_eq!(expr, same);
//! println!("{}", expr);  // a * b + ~c
//! # Ok(())
//! # }
//! ```
//!
//! ## Evaluating
//!
//! ```
//! use kmap_logic::BoolExpr;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! let expr = BoolExpr::parse("a or b").unwrap();
//!
//! let mut assignment = HashMap::new();
//! assignment.insert(Arc::from("a"), false);
//! assignment.insert(Arc::from("b"), true);
//! assert_eq!(expr.evaluate(&assignment), Ok(true));
//! ```

mod ast;
mod display;
pub mod error;
mod eval;
mod operators;
mod parser;

pub use ast::ExprNode;
pub use error::{EvaluationError, ExpressionParseError, ParseBoolExprError};

pub(crate) use ast::BoolExprAst;

use std::collections::BTreeSet;
use std::sync::Arc;

/// A boolean expression that can be manipulated programmatically
///
/// Uses `Arc` internally for efficient cloning. Equality is structural: two
/// expressions are equal when their trees are identical, not when they are
/// logically equivalent.
///
/// # Examples
///
/// ## Method-based API
/// ```
/// use kmap_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let expr = a.and(&b).or(&a.not().and(&b.not()));
/// ```
///
/// ## Using operator overloading (requires explicit &)
/// ```
/// use kmap_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let expr = &a * &b + !&a * !&b;
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoolExpr {
    pub(crate) ast: Arc<BoolExprAst>,
}

impl BoolExpr {
    /// Create a variable expression with the given name
    pub fn variable(name: &str) -> Self {
        BoolExpr {
            ast: Arc::new(BoolExprAst::Variable(Arc::from(name))),
        }
    }

    /// Create a constant expression (true or false)
    pub fn constant(value: bool) -> Self {
        BoolExpr {
            ast: Arc::new(BoolExprAst::Constant(value)),
        }
    }

    /// Logical AND of `self` and `other`
    pub fn and(&self, other: &BoolExpr) -> Self {
        BoolExpr {
            ast: Arc::new(BoolExprAst::And(
                Arc::clone(&self.ast),
                Arc::clone(&other.ast),
            )),
        }
    }

    /// Logical OR of `self` and `other`
    pub fn or(&self, other: &BoolExpr) -> Self {
        BoolExpr {
            ast: Arc::new(BoolExprAst::Or(
                Arc::clone(&self.ast),
                Arc::clone(&other.ast),
            )),
        }
    }

    /// Logical NOT of `self`
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Self {
        BoolExpr {
            ast: Arc::new(BoolExprAst::Not(Arc::clone(&self.ast))),
        }
    }

    /// Collect every variable name referenced by the expression
    ///
    /// Returned in sorted order with duplicates removed.
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        self.fold(|node| match node {
            ExprNode::Variable(name) => BTreeSet::from([Arc::from(name)]),
            ExprNode::Constant(_) => BTreeSet::new(),
            ExprNode::Not(inner) => inner,
            ExprNode::And(mut left, right) | ExprNode::Or(mut left, right) => {
                left.extend(right);
                left
            }
        })
    }
}

#[cfg(test)]
mod tests;
