//! AST representation and tree traversal operations
//!
//! This module contains the AST types and fold operations for boolean expressions.

use super::BoolExpr;
use std::sync::Arc;

/// Node type for expression tree folding
///
/// This enum represents the structure of an expression node without exposing
/// internal Arc types. It's used with [`BoolExpr::fold`] to traverse and
/// transform expression trees.
///
/// `T` is the accumulated result from child nodes (bottom-up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// Logical AND with results from left and right subtrees
    And(T, T),
    /// Logical OR with results from left and right subtrees
    Or(T, T),
    /// Logical NOT with result from inner subtree
    Not(T),
    /// A constant boolean value
    Constant(bool),
}

/// AST representation of a boolean expression
///
/// Children are shared through `Arc`, so cloning a [`BoolExpr`] never copies the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BoolExprAst {
    /// A named variable
    Variable(Arc<str>),
    /// Logical AND of two expressions
    And(Arc<BoolExprAst>, Arc<BoolExprAst>),
    /// Logical OR of two expressions
    Or(Arc<BoolExprAst>, Arc<BoolExprAst>),
    /// Logical NOT of an expression
    Not(Arc<BoolExprAst>),
    /// A constant value (true or false)
    Constant(bool),
}

impl BoolExpr {
    /// Fold the expression tree depth-first from leaves to root
    ///
    /// This method traverses the expression tree recursively, calling the provided
    /// function `f` on each node. The function receives an [`ExprNode`] containing
    /// the node type and accumulated results from child nodes.
    ///
    /// # Examples
    ///
    /// Count the number of operations in an expression:
    ///
    /// ```
    /// use kmap_logic::{BoolExpr, ExprNode};
    ///
    /// let expr = BoolExpr::parse("a and not b").unwrap();
    ///
    /// let op_count = expr.fold(|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) => l + r + 1,
    ///     ExprNode::Not(inner) => inner + 1,
    /// });
    ///
    /// assert_eq!(op_count, 2);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T + Copy,
    {
        Self::fold_ast(&self.ast, &f)
    }

    fn fold_ast<T, F>(ast: &BoolExprAst, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match ast {
            BoolExprAst::Variable(name) => f(ExprNode::Variable(name)),
            BoolExprAst::And(left, right) => {
                let left_result = Self::fold_ast(left, f);
                let right_result = Self::fold_ast(right, f);
                f(ExprNode::And(left_result, right_result))
            }
            BoolExprAst::Or(left, right) => {
                let left_result = Self::fold_ast(left, f);
                let right_result = Self::fold_ast(right, f);
                f(ExprNode::Or(left_result, right_result))
            }
            BoolExprAst::Not(inner) => {
                let inner_result = Self::fold_ast(inner, f);
                f(ExprNode::Not(inner_result))
            }
            BoolExprAst::Constant(val) => f(ExprNode::Constant(*val)),
        }
    }
}
