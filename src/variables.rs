//! Ordered variable lists
//!
//! A [`VariableList`] fixes the mapping from bit position to variable name used
//! by every later stage: position 0 is the most significant bit of an
//! assignment's integer value.

use crate::error::KmapError;
use crate::expression::BoolExpr;
use std::fmt;

/// An ordered, duplicate-free list of single-character variable names
///
/// Immutable once built.
///
/// # Examples
///
/// ```
/// use kmap_logic::VariableList;
///
/// let vars = VariableList::new(['a', 'b', 'c']).unwrap();
/// assert_eq!(vars.len(), 3);
/// assert_eq!(vars.position('b'), Some(1));
/// assert_eq!(vars.to_string(), "[a, b, c]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableList {
    names: Vec<char>,
}

impl VariableList {
    /// Build a list from names in the given order
    ///
    /// Fails on an empty list, a non-alphabetic name, or a repeated name.
    pub fn new<I>(names: I) -> Result<Self, KmapError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut list = Vec::new();
        for name in names {
            if !name.is_alphabetic() {
                return Err(KmapError::InvalidVariableName {
                    name: name.to_string(),
                });
            }
            if list.contains(&name) {
                return Err(KmapError::DuplicateVariable { name });
            }
            list.push(name);
        }
        if list.is_empty() {
            return Err(KmapError::NoVariables);
        }
        Ok(VariableList { names: list })
    }

    /// Parse a compact name string such as `"abc"`
    ///
    /// Whitespace and commas are ignored, so `"a, b, c"` is accepted too.
    pub fn parse(names: &str) -> Result<Self, KmapError> {
        Self::new(
            names.chars()
                .filter(|c| !c.is_whitespace() && *c != ','),
        )
    }

    /// The variables referenced by `expr`, sorted and deduplicated
    ///
    /// Names longer than one character are rejected, as is an expression that
    /// references no variable at all.
    pub fn from_expression(expr: &BoolExpr) -> Result<Self, KmapError> {
        let mut names = Vec::new();
        for name in expr.collect_variables() {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => names.push(c),
                _ => {
                    return Err(KmapError::InvalidVariableName {
                        name: name.to_string(),
                    })
                }
            }
        }
        // collect_variables sorts by string, which for single chars is char order
        Self::new(names)
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a successfully built list
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The name at bit position `index`
    pub fn get(&self, index: usize) -> Option<char> {
        self.names.get(index).copied()
    }

    /// Bit position of `name`, if present
    pub fn position(&self, name: char) -> Option<usize> {
        self.names.iter().position(|&c| c == name)
    }

    /// Iterate over names in order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.names.iter().copied()
    }

    /// Names as a slice
    pub fn as_slice(&self) -> &[char] {
        &self.names
    }
}

impl fmt::Display for VariableList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_list() {
        assert!(matches!(
            VariableList::new(std::iter::empty()),
            Err(KmapError::NoVariables)
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        assert!(matches!(
            VariableList::new(['a', 'b', 'a']),
            Err(KmapError::DuplicateVariable { name: 'a' })
        ));
    }

    #[test]
    fn test_rejects_non_alphabetic() {
        assert!(matches!(
            VariableList::new(['a', '1']),
            Err(KmapError::InvalidVariableName { .. })
        ));
    }

    #[test]
    fn test_parse_ignores_separators() {
        let vars = VariableList::parse("c, a b").unwrap();
        assert_eq!(vars.as_slice(), &['c', 'a', 'b']);
    }

    #[test]
    fn test_from_expression_sorts_names() {
        let expr = BoolExpr::parse("c and (b or not a) or c").unwrap();
        let vars = VariableList::from_expression(&expr).unwrap();
        assert_eq!(vars.as_slice(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_from_expression_rejects_long_names() {
        let expr = BoolExpr::parse("alpha * b").unwrap();
        assert!(matches!(
            VariableList::from_expression(&expr),
            Err(KmapError::InvalidVariableName { name }) if name == "alpha"
        ));
    }

    #[test]
    fn test_from_constant_expression_is_empty() {
        let expr = BoolExpr::parse("1").unwrap();
        assert!(matches!(
            VariableList::from_expression(&expr),
            Err(KmapError::NoVariables)
        ));
    }
}
