//! Error types for the Karnaugh-map pipeline
//!
//! Every failure is terminal to the run and surfaces to the caller as a
//! [`KmapError`]; nothing is retried or silently dropped.

use crate::expression::{EvaluationError, ParseBoolExprError};
use std::fmt;
use std::io;

/// The main error type for the crate
#[derive(Debug)]
pub enum KmapError {
    /// A variable list must name at least one variable
    NoVariables,

    /// Variable names are single alphabetic characters
    InvalidVariableName {
        /// The rejected name
        name: String,
    },

    /// The same variable appears twice in a variable list
    DuplicateVariable {
        /// The repeated name
        name: char,
    },

    /// An expression references a variable the list does not contain
    UnknownVariable {
        /// The referenced name
        name: String,
    },

    /// The function's arity disagrees with the number of variables
    ArityMismatch {
        /// Number of variables in the list
        expected: usize,
        /// Arity reported by the function
        found: usize,
    },

    /// 2^N rows cannot be addressed on this platform
    TooManyVariables {
        /// Number of variables requested
        count: usize,
    },

    /// The function failed for one assignment; no partial table is kept
    Evaluation {
        /// The input row that failed
        assignment: Vec<bool>,
        /// The underlying failure
        source: EvaluationError,
    },

    /// The expression text could not be parsed
    Parse(ParseBoolExprError),
}

impl fmt::Display for KmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmapError::NoVariables => write!(
                f,
                "Variable list is empty; at least one variable is required"
            ),
            KmapError::InvalidVariableName { name } => write!(
                f,
                "Invalid variable name {:?}: names must be a single alphabetic character",
                name
            ),
            KmapError::DuplicateVariable { name } => {
                write!(f, "Variable '{}' appears more than once", name)
            }
            KmapError::UnknownVariable { name } => write!(
                f,
                "Expression references variable {:?} which is not in the variable list",
                name
            ),
            KmapError::ArityMismatch { expected, found } => write!(
                f,
                "Function takes {} argument(s) but the variable list has {}",
                found, expected
            ),
            KmapError::TooManyVariables { count } => write!(
                f,
                "{} variables is too many: a table of 2^{} rows cannot be addressed",
                count, count
            ),
            KmapError::Evaluation { assignment, source } => {
                let bits: String = assignment
                    .iter()
                    .map(|&b| if b { '1' } else { '0' })
                    .collect();
                write!(f, "Failed at assignment {}: {}", bits, source)
            }
            KmapError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for KmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmapError::Evaluation { source, .. } => Some(source),
            KmapError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseBoolExprError> for KmapError {
    fn from(err: ParseBoolExprError) -> Self {
        KmapError::Parse(err)
    }
}

impl From<KmapError> for io::Error {
    fn from(err: KmapError) -> Self {
        let kind = match err {
            KmapError::Evaluation { .. } | KmapError::Parse(_) => io::ErrorKind::InvalidData,
            _ => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_arity_mismatch_message() {
        let err = KmapError::ArityMismatch {
            expected: 3,
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("takes 2 argument(s)"));
        assert!(msg.contains("has 3"));
    }

    #[test]
    fn test_evaluation_error_carries_assignment_and_source() {
        let err = KmapError::Evaluation {
            assignment: vec![true, false, true],
            source: EvaluationError::new("boom"),
        };
        assert!(err.to_string().contains("101"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_kinds() {
        let io_err: io::Error = KmapError::NoVariables.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);

        let io_err: io::Error = KmapError::Evaluation {
            assignment: vec![false],
            source: EvaluationError::new("x"),
        }
        .into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
