//! The boolean-function seam between callers and the table generator
//!
//! Anything that maps N positional input bits to one output bit can drive the
//! pipeline by implementing [`BooleanFunction`]. Two implementations ship with
//! the crate: [`BoundExpr`] for parsed expressions and [`FnFunction`] for plain
//! closures.

use crate::error::KmapError;
use crate::expression::{BoolExpr, EvaluationError, ExprNode};
use crate::variables::VariableList;
use std::fmt;

/// A boolean function of a fixed number of positional arguments
pub trait BooleanFunction {
    /// Number of arguments the function expects
    fn arity(&self) -> usize;

    /// Evaluate on one assignment; `inputs.len()` equals [`arity`](Self::arity)
    fn evaluate(&self, inputs: &[bool]) -> Result<bool, EvaluationError>;
}

/// Expression tree with variable names resolved to argument positions
#[derive(Debug, Clone, PartialEq, Eq)]
enum Compiled {
    Input(usize),
    Constant(bool),
    Not(Box<Compiled>),
    And(Box<Compiled>, Box<Compiled>),
    Or(Box<Compiled>, Box<Compiled>),
}

impl Compiled {
    fn evaluate(&self, inputs: &[bool]) -> Result<bool, EvaluationError> {
        match self {
            Compiled::Input(index) => inputs.get(*index).copied().ok_or_else(|| {
                EvaluationError::new(format!(
                    "argument {} requested but only {} supplied",
                    index,
                    inputs.len()
                ))
            }),
            Compiled::Constant(value) => Ok(*value),
            Compiled::Not(inner) => Ok(!inner.evaluate(inputs)?),
            Compiled::And(left, right) => Ok(left.evaluate(inputs)? && right.evaluate(inputs)?),
            Compiled::Or(left, right) => Ok(left.evaluate(inputs)? || right.evaluate(inputs)?),
        }
    }
}

/// A [`BoolExpr`] bound to a [`VariableList`]
///
/// Argument *i* supplies the value of the list's *i*-th variable. Variables in
/// the list that the expression never mentions are simply ignored.
///
/// # Examples
///
/// ```
/// use kmap_logic::{BoolExpr, BooleanFunction, VariableList};
///
/// let vars = VariableList::new(['a', 'b']).unwrap();
/// let f = BoolExpr::parse("a and not b").unwrap().bind(&vars).unwrap();
///
/// assert_eq!(f.arity(), 2);
/// assert_eq!(f.evaluate(&[true, false]), Ok(true));
/// assert_eq!(f.evaluate(&[true, true]), Ok(false));
/// ```
#[derive(Debug, Clone)]
pub struct BoundExpr {
    expr: BoolExpr,
    compiled: Compiled,
    arity: usize,
}

impl BoundExpr {
    /// Resolve every variable of `expr` to its position in `variables`
    pub fn new(expr: &BoolExpr, variables: &VariableList) -> Result<Self, KmapError> {
        let compiled = expr.fold(|node| -> Result<Compiled, KmapError> {
            Ok(match node {
                ExprNode::Variable(name) => Compiled::Input(resolve(name, variables)?),
                ExprNode::Constant(value) => Compiled::Constant(value),
                ExprNode::Not(inner) => Compiled::Not(Box::new(inner?)),
                ExprNode::And(left, right) => Compiled::And(Box::new(left?), Box::new(right?)),
                ExprNode::Or(left, right) => Compiled::Or(Box::new(left?), Box::new(right?)),
            })
        })?;
        Ok(BoundExpr {
            expr: expr.clone(),
            compiled,
            arity: variables.len(),
        })
    }

    /// The source expression
    pub fn expr(&self) -> &BoolExpr {
        &self.expr
    }
}

fn resolve(name: &str, variables: &VariableList) -> Result<usize, KmapError> {
    let mut chars = name.chars();
    let position = match (chars.next(), chars.next()) {
        (Some(c), None) => variables.position(c),
        _ => None,
    };
    position.ok_or_else(|| KmapError::UnknownVariable {
        name: name.to_string(),
    })
}

impl BooleanFunction for BoundExpr {
    fn arity(&self) -> usize {
        self.arity
    }

    fn evaluate(&self, inputs: &[bool]) -> Result<bool, EvaluationError> {
        self.compiled.evaluate(inputs)
    }
}

/// Adapter that turns a closure into a [`BooleanFunction`]
///
/// Built with [`from_fn`].
#[derive(Clone)]
pub struct FnFunction<F> {
    arity: usize,
    f: F,
}

/// Wrap a closure of `arity` positional bits as a [`BooleanFunction`]
///
/// # Examples
///
/// ```
/// use kmap_logic::{from_fn, BooleanFunction};
///
/// let majority = from_fn(3, |x: &[bool]| Ok(x.iter().filter(|&&b| b).count() >= 2));
/// assert_eq!(majority.evaluate(&[true, false, true]), Ok(true));
/// ```
pub fn from_fn<F>(arity: usize, f: F) -> FnFunction<F>
where
    F: Fn(&[bool]) -> Result<bool, EvaluationError>,
{
    FnFunction { arity, f }
}

impl<F> BooleanFunction for FnFunction<F>
where
    F: Fn(&[bool]) -> Result<bool, EvaluationError>,
{
    fn arity(&self) -> usize {
        self.arity
    }

    fn evaluate(&self, inputs: &[bool]) -> Result<bool, EvaluationError> {
        (self.f)(inputs)
    }
}

impl<F> fmt::Debug for FnFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFunction")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_uses_list_order() {
        let vars = VariableList::new(['b', 'a']).unwrap();
        let f = BoolExpr::parse("a and not b").unwrap().bind(&vars).unwrap();
        // position 0 is b, position 1 is a
        assert_eq!(f.evaluate(&[false, true]), Ok(true));
        assert_eq!(f.evaluate(&[true, false]), Ok(false));
    }

    #[test]
    fn test_bind_rejects_unknown_variable() {
        let vars = VariableList::new(['a']).unwrap();
        let err = BoolExpr::parse("a or z").unwrap().bind(&vars).unwrap_err();
        assert!(matches!(err, KmapError::UnknownVariable { name } if name == "z"));
    }

    #[test]
    fn test_bound_expr_ignores_unused_variables() {
        let vars = VariableList::new(['a', 'b', 'c']).unwrap();
        let f = BoolExpr::parse("b").unwrap().bind(&vars).unwrap();
        assert_eq!(f.arity(), 3);
        assert_eq!(f.evaluate(&[false, true, false]), Ok(true));
        assert_eq!(f.evaluate(&[true, false, true]), Ok(false));
    }

    #[test]
    fn test_short_input_is_an_evaluation_error() {
        let vars = VariableList::new(['a', 'b']).unwrap();
        let f = BoolExpr::parse("b").unwrap().bind(&vars).unwrap();
        assert!(f.evaluate(&[true]).is_err());
    }

    #[test]
    fn test_closure_errors_propagate() {
        let f = from_fn(1, |x: &[bool]| {
            if x[0] {
                Err(EvaluationError::new("refused"))
            } else {
                Ok(false)
            }
        });
        assert_eq!(f.evaluate(&[false]), Ok(false));
        assert_eq!(f.evaluate(&[true]).unwrap_err().message(), "refused");
    }
}
