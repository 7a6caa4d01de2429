// SPDX-License-Identifier: MPL-2.0

//! Parsed interval expressions and the operations on them.

use std::fmt;
use std::str::FromStr;

use log::debug;
use smallvec::{smallvec, SmallVec};

use crate::error::ParseError;
use crate::options::ParseOptions;
use crate::subinterval::SubInterval;

/// Storage for subinterval lists. Expressions typically hold only a handful
/// of entries, so a small inline buffer avoids most allocations.
type SubIntervals = SmallVec<[SubInterval; 2]>;

/// A parsed interval expression: an ordered sequence of [`SubInterval`]s
/// together with the [`ParseOptions`] used to produce it.
///
/// An `Expression` can only be constructed by [`Expression::parse`] (or one
/// of its convenience wrappers) and by [`Expression::normalize`]; it is
/// never mutated afterwards, which makes instances freely shareable.
///
/// Evaluate it with [`matches`](Expression::matches):
///
/// ```
/// use interval_expr::expression::Expression;
///
/// let expr = Expression::parse_default("1,3-5,7-")?;
/// assert!(expr.matches(4));
/// assert!(!expr.matches(6));
/// # Ok::<(), interval_expr::error::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expression {
    subintervals: SubIntervals,
    options: ParseOptions,
}

impl Expression {
    /// Attempts to extract an interval expression from `input`.
    ///
    /// The input is split on `options.delimiter` and every non-empty token
    /// is parsed as a [`SubInterval`]. Tokens that are exactly the empty
    /// string produce no subinterval, so `"1,,3"` or a trailing delimiter
    /// are tolerated. The first failing token aborts the whole parse.
    ///
    /// An input with zero subexpressions (`""`, `",,,,"`) is rejected
    /// unless [`ParseOptions::allow_empty_expression`] is set, in which
    /// case it parses into an expression matching nothing.
    ///
    /// The result is not normalized unless
    /// [`ParseOptions::post_process_normalize`] is set; see
    /// [`normalize`](Self::normalize).
    pub fn parse(input: &str, options: ParseOptions) -> Result<Self, ParseError> {
        if options.delimiter.is_empty() {
            return Err(ParseError::EmptyDelimiter);
        }
        let mut subintervals = SubIntervals::new();
        for token in input.split(options.delimiter.as_str()) {
            // '1,,3' is not pretty, but an absent subexpression is not invalid
            if token.is_empty() {
                continue;
            }
            subintervals.push(token.parse()?);
        }
        debug!(
            "parsed {:?} into {} subintervals",
            input,
            subintervals.len()
        );

        let expression = Self {
            subintervals,
            options,
        };
        if expression.matches_none() && !expression.options.allow_empty_expression {
            return Err(ParseError::EmptyExpression);
        }
        if expression.options.post_process_normalize {
            return Ok(expression.normalize());
        }
        Ok(expression)
    }

    /// Calls [`Expression::parse`] with [`ParseOptions::default`].
    pub fn parse_default(input: &str) -> Result<Self, ParseError> {
        Self::parse(input, ParseOptions::default())
    }

    /// The subintervals of this expression, in parse order (ascending by
    /// start after [`normalize`](Self::normalize)).
    pub fn subintervals(&self) -> &[SubInterval] {
        &self.subintervals
    }

    /// The options this expression was parsed with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Returns true if `value` lies inside any of the intervals of this
    /// expression.
    ///
    /// The subintervals are a disjunction, evaluated left to right with a
    /// short-circuit on the first hit; there is no precomputed index.
    /// Normalized instances should evaluate faster due to the reduced
    /// number of subintervals, but normalization is never required.
    pub fn matches(&self, value: u64) -> bool {
        self.subintervals.iter().any(|sub| sub.contains(value))
    }

    /// Returns true if this expression will never match anything, i.e.
    /// `matches(x)` is false for every `x`.
    ///
    /// Such expressions result from inputs containing no subexpressions,
    /// which the parser only accepts under
    /// [`ParseOptions::allow_empty_expression`].
    pub fn matches_none(&self) -> bool {
        self.subintervals.is_empty()
    }

    /// Returns true if this expression matches every possible value, i.e.
    /// `matches(x)` is true for every `x`.
    ///
    /// This is the case exactly when a wildcard subexpression is present.
    pub fn matches_all(&self) -> bool {
        self.subintervals
            .iter()
            .any(|sub| matches!(sub, SubInterval::Wildcard))
    }

    /// Reduces this expression to the minimal equivalent set of intervals:
    /// non-overlapping, ascending by start, with touching neighbors merged.
    ///
    /// For example, `1-4,2-5` normalizes to `1-5`, and the singletons `2,3`
    /// merge into `2-3`. A wildcard erases all other information, so any
    /// expression containing one normalizes to `*` alone.
    ///
    /// Returns a new expression carrying the receiver's options; the
    /// receiver itself is never changed, not even its internal order.
    /// Normalization preserves `matches` semantics and is idempotent.
    pub fn normalize(&self) -> Self {
        // Nothing to reduce.
        if self.matches_none() {
            return self.clone();
        }
        // The wildcard dominates every other subexpression.
        if self.matches_all() {
            return Self {
                subintervals: smallvec![SubInterval::Wildcard],
                options: self.options.clone(),
            };
        }

        // The sweep below needs the subintervals ordered by start value.
        // Sort a working copy so the receiver keeps its observable order.
        let mut sorted = self.subintervals.clone();
        sorted.sort_by_key(SubInterval::sort_start);

        let mut normalized = SubIntervals::new();
        let mut current = sorted[0];
        for &next in &sorted[1..] {
            let SubInterval::Bounded { start, end } = current else {
                // current extends to infinity, nothing left can widen it
                break;
            };
            let next_start = next.sort_start();
            if next_start > end.saturating_add(1) {
                // genuine gap, next is outside and not adjacent to current
                normalized.push(current);
                current = next;
                continue;
            }
            // next starts inside current or immediately after its last
            // value: absorb it
            current = match next {
                SubInterval::Bounded { end: next_end, .. } => SubInterval::Bounded {
                    start,
                    end: end.max(next_end),
                },
                SubInterval::Unbounded { .. } => SubInterval::Unbounded { start },
                SubInterval::Wildcard => unreachable!("wildcards are short-circuited above"),
            };
        }
        normalized.push(current);

        debug!(
            "normalized {} subintervals down to {}",
            self.subintervals.len(),
            normalized.len()
        );
        Self {
            subintervals: normalized,
            options: self.options.clone(),
        }
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    /// Parses `s` with [`ParseOptions::default`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_default(s)
    }
}

/// Convert the expression back to textual form: each subinterval in its
/// canonical spelling, joined by the delimiter it was parsed with.
///
/// The output is not guaranteed to reproduce the original input byte for
/// byte (whitespace is dropped, and a normalized expression may order and
/// merge intervals differently), but it always re-parses, under the same
/// options, into an expression with identical `matches` behavior.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, sub) in self.subintervals.iter().enumerate() {
            if idx > 0 {
                f.write_str(&self.options.delimiter)?;
            }
            write!(f, "{}", sub)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use proptest::prelude::*;

    use super::*;

    fn subinterval_strategy() -> impl Strategy<Value = SubInterval> {
        // u32-sized values keep `end + 1` far away from the u64 edge while
        // still exercising large starts.
        prop_oneof![
            4 => (any::<u32>(), any::<u32>()).prop_map(|(a, b)| {
                let (start, end) = if a <= b { (a, b) } else { (b, a) };
                SubInterval::Bounded {
                    start: start as u64,
                    end: end as u64,
                }
            }),
            1 => any::<u32>().prop_map(|start| SubInterval::Unbounded {
                start: start as u64,
            }),
        ]
    }

    pub fn strategy() -> impl Strategy<Value = Expression> {
        prop::collection::vec(subinterval_strategy(), 0..10).prop_map(|subs| Expression {
            subintervals: subs.into_iter().collect(),
            options: ParseOptions::default().with_allow_empty_expression(true),
        })
    }

    fn value_strategy() -> impl Strategy<Value = u64> {
        any::<u32>().prop_map(|v| v as u64)
    }

    proptest! {

        // Testing serde ----------------------------------

        #[cfg(feature = "serde")]
        #[test]
        fn serde_round_trip(expr in strategy()) {
            let s = ron::ser::to_string(&expr).unwrap();
            let r = ron::de::from_str(&s).unwrap();
            assert_eq!(expr, r);
        }

        // Testing normalize -------------------------------

        #[test]
        fn normalize_preserves_matches(expr in strategy(), value in value_strategy()) {
            assert_eq!(expr.matches(value), expr.normalize().matches(value));
        }

        #[test]
        fn normalize_is_idempotent(expr in strategy()) {
            let norm = expr.normalize();
            assert_eq!(norm.normalize(), norm);
        }

        #[test]
        fn normalize_leaves_receiver_untouched(expr in strategy()) {
            let copy = expr.clone();
            let _ = expr.normalize();
            assert_eq!(expr, copy);
        }

        #[test]
        fn normalize_output_is_sorted_and_disjoint(expr in strategy()) {
            let norm = expr.normalize();
            let subs = norm.subintervals();
            for pair in subs.windows(2) {
                // only the last entry may be unbounded
                let SubInterval::Bounded { end, .. } = pair[0] else {
                    panic!("unbounded subinterval before the end: {:?}", subs);
                };
                // a merged-out gap would have joined the pair
                assert!(pair[1].sort_start() > end + 1, "not disjoint: {:?}", subs);
            }
        }

        #[test]
        fn normalize_never_grows(expr in strategy()) {
            assert!(expr.normalize().subintervals().len() <= expr.subintervals().len());
        }

        // Testing matches ---------------------------------

        #[test]
        fn matches_is_the_disjunction_of_contains(expr in strategy(), value in value_strategy()) {
            let expected = expr.subintervals().iter().any(|sub| sub.contains(value));
            assert_eq!(expr.matches(value), expected);
        }

        #[test]
        fn matches_none_matches_nothing(expr in strategy(), value in value_strategy()) {
            if expr.matches_none() {
                assert!(!expr.matches(value));
            }
        }

        // Testing Display ---------------------------------

        #[test]
        fn display_reparses_to_equal_semantics(expr in strategy(), value in value_strategy()) {
            let opts = expr.options().clone();
            let reparsed = Expression::parse(&expr.to_string(), opts).unwrap();
            assert_eq!(expr.matches(value), reparsed.matches(value));
        }

        #[test]
        fn canonical_round_trip_is_stable(expr in strategy()) {
            let norm = expr.normalize();
            let reparsed = Expression::parse(&norm.to_string(), norm.options().clone()).unwrap();
            assert_eq!(reparsed.to_string(), norm.to_string());
        }
    }
}
