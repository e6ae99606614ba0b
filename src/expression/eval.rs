//! Evaluation of boolean expressions and binding to a variable list

use super::error::EvaluationError;
use super::{BoolExpr, ExprNode};
use crate::error::KmapError;
use crate::function::BoundExpr;
use crate::variables::VariableList;
use std::collections::HashMap;
use std::sync::Arc;

impl BoolExpr {
    /// Evaluate the expression with a given variable assignment
    ///
    /// Every variable the expression references must be present in `assignment`;
    /// a missing one is reported as an [`EvaluationError`] rather than defaulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::BoolExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let expr = BoolExpr::parse("a and b").unwrap();
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assignment.insert(Arc::from("b"), true);
    /// assert_eq!(expr.evaluate(&assignment), Ok(true));
    ///
    /// assignment.remove("b");
    /// assert!(expr.evaluate(&assignment).is_err());
    /// ```
    pub fn evaluate(
        &self,
        assignment: &HashMap<Arc<str>, bool>,
    ) -> Result<bool, EvaluationError> {
        self.fold(|node| -> Result<bool, EvaluationError> {
            match node {
                ExprNode::Variable(name) => assignment
                    .get(name)
                    .copied()
                    .ok_or_else(|| EvaluationError::unbound_variable(name)),
                ExprNode::Constant(value) => Ok(value),
                ExprNode::Not(inner) => Ok(!inner?),
                ExprNode::And(left, right) => Ok(left? && right?),
                ExprNode::Or(left, right) => Ok(left? || right?),
            }
        })
    }

    /// Resolve the expression's variables against `variables`
    ///
    /// The result evaluates positionally: argument *i* is the value of
    /// `variables[i]`. Fails with [`KmapError::UnknownVariable`] if the
    /// expression names a variable outside the list.
    pub fn bind(&self, variables: &VariableList) -> Result<BoundExpr, KmapError> {
        BoundExpr::new(self, variables)
    }
}
