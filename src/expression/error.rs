//! Error types for boolean expression parsing and evaluation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to boolean expression parsing
///
/// These errors occur when parsing a boolean expression string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// The input contains a token the grammar does not accept at this point
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Byte offset in the input where the error occurred
        position: Option<usize>,
    },
    /// The input ended while an operand or closing parenthesis was still expected
    UnexpectedEnd {
        /// The original input string that failed to parse
        input: Arc<str>,
    },
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse boolean expression at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(
                        f,
                        "Failed to parse boolean expression: {}. Input: {:?}",
                        message, input
                    )
                }
            }
            ExpressionParseError::UnexpectedEnd { input } => write!(
                f,
                "Failed to parse boolean expression: unexpected end of input. Input: {:?}",
                input
            ),
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when parsing a boolean expression
///
/// This error type is returned by `BoolExpr::parse()`.
#[derive(Debug)]
pub enum ParseBoolExprError {
    /// Expression parsing error
    Parse(ExpressionParseError),
}

impl fmt::Display for ParseBoolExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoolExprError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseBoolExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseBoolExprError::Parse(e) => Some(e),
        }
    }
}

impl From<ExpressionParseError> for ParseBoolExprError {
    fn from(err: ExpressionParseError) -> Self {
        ParseBoolExprError::Parse(err)
    }
}

impl From<ParseBoolExprError> for io::Error {
    fn from(err: ParseBoolExprError) -> Self {
        match err {
            ParseBoolExprError::Parse(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

/// A boolean function could not produce a value for some input
///
/// Raised by [`BoolExpr::evaluate`](super::BoolExpr::evaluate) when a referenced
/// variable has no value, and by user-supplied functions through
/// [`EvaluationError::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationError {
    message: Arc<str>,
}

impl EvaluationError {
    /// Create an evaluation error with a free-form message
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        EvaluationError {
            message: message.into(),
        }
    }

    /// Error for a variable that was referenced but not assigned
    pub fn unbound_variable(name: &str) -> Self {
        EvaluationError::new(format!("variable '{}' has no assigned value", name))
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evaluation failed: {}", self.message)
    }
}

impl std::error::Error for EvaluationError {}
