// SPDX-License-Identifier: MPL-2.0

//! Errors reported while parsing interval expressions.

use thiserror::Error;

/// Errors that may occur while parsing an interval expression.
///
/// All variants are immediate and non-retryable: the first failing token
/// aborts the whole parse, and no partial
/// [`Expression`](crate::expression::Expression) is produced. Evaluation
/// methods (`matches`, `normalize`, `Display`) have no error path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The configured delimiter is the empty string.
    #[error("ParseOptions::delimiter must not be empty")]
    EmptyDelimiter,

    /// The input contained no subexpressions (e.g. `""` or `",,,"`) and
    /// [`ParseOptions::allow_empty_expression`](crate::options::ParseOptions::allow_empty_expression)
    /// is unset.
    #[error("expression contains no subintervals, which the current options prohibit")]
    EmptyExpression,

    /// A token matched none of the recognized subexpression shapes.
    #[error("invalid subexpression syntax: {token:?}")]
    MalformedToken {
        /// The offending token, as sliced out of the input.
        token: String,
    },

    /// A two-endpoint range `a-b` where `b` is lower than `a`.
    #[error("invalid interval {token:?}: end {end} is lower than start {start}")]
    InvalidRange {
        /// The offending token.
        token: String,
        /// Parsed start of the range.
        start: u64,
        /// Parsed end of the range.
        end: u64,
    },

    /// A numeric literal does not fit in `u64`.
    #[error("value {literal:?} in interval {token:?} is out of range")]
    NumericOverflow {
        /// The offending token.
        token: String,
        /// The literal within the token that failed to convert.
        literal: String,
    },
}
