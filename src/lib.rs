// SPDX-License-Identifier: MPL-2.0

//! Parsing and evaluation of integer interval expressions.
//!
//! An interval expression such as `1,3-5,7-` is a delimiter-separated list
//! of subexpressions, each describing a single value (`1`), a bounded range
//! (`3-5`), a half-open range extending to infinity (`7-`), or the wildcard
//! `*` matching every integer. Expressions of this kind show up in
//! user-facing contexts such as the page selector of a print dialog or the
//! field list of the `cut` tool.
//!
//! Parsing an expression string produces an
//! [`Expression`](expression::Expression): an abstract predicate over `u64`
//! values. The parsed form never materializes any integer sequence, so an
//! unbounded range costs no more than a singleton.
//!
//! # Basic usage
//!
//! ```
//! use interval_expr::expression::Expression;
//!
//! let expr = Expression::parse_default("1,3-5,7-")?;
//! assert!(expr.matches(1));
//! assert!(!expr.matches(2));
//! assert!(expr.matches(4));
//! assert!(expr.matches(1_000_000));
//! # Ok::<(), interval_expr::error::ParseError>(())
//! ```
//!
//! Semantically each subexpression is a predicate and the expression is
//! their disjunction: `1,3-5,7-` matches `x` iff `x == 1`, or
//! `3 <= x && x <= 5`, or `x >= 7`.
//!
//! # Parse options
//!
//! The delimiter and a few behavioral switches are adjustable through
//! [`ParseOptions`](options::ParseOptions):
//!
//! ```
//! use interval_expr::expression::Expression;
//! use interval_expr::options::ParseOptions;
//!
//! let opts = ParseOptions::default().with_delimiter(";");
//! let expr = Expression::parse("2;4-6", opts)?;
//! assert!(expr.matches(5));
//! # Ok::<(), interval_expr::error::ParseError>(())
//! ```
//!
//! # Normalization
//!
//! A freshly parsed expression keeps its subexpressions in input order,
//! overlaps included. [`Expression::normalize`](expression::Expression::normalize)
//! returns the minimal equivalent expression: non-overlapping subintervals
//! in ascending order, with touching neighbors merged.
//!
//! ```
//! use interval_expr::expression::Expression;
//!
//! let expr = Expression::parse_default("2-4,3-5")?;
//! assert_eq!(expr.normalize().to_string(), "2-5");
//! # Ok::<(), interval_expr::error::ParseError>(())
//! ```
//!
//! Normalizing is never required for correctness; it only reduces the work
//! later `matches` calls have to do.

#![warn(missing_docs)]

pub mod error;
pub mod expression;
pub mod options;
pub mod subinterval;
