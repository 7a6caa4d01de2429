// SPDX-License-Identifier: MPL-2.0

//! The atomic unit of an interval expression: one contiguous set of
//! integers, or the wildcard matching everything.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// One contiguous set of non-negative integers, or the wildcard.
///
/// A `SubInterval` is produced by parsing a single token of an interval
/// expression:
///
/// | token | value                          |
/// |-------|--------------------------------|
/// | `7`   | `Bounded { start: 7, end: 7 }` |
/// | `3-5` | `Bounded { start: 3, end: 5 }` |
/// | `7-`  | `Unbounded { start: 7 }`       |
/// | `*`   | `Wildcard`                     |
///
/// Bounds are inclusive at both ends, and `start <= end` holds for every
/// value built by the parser. Values are immutable after construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubInterval {
    /// The inclusive range `[start, end]`; a singleton when `start == end`.
    Bounded {
        /// First value of the range.
        start: u64,
        /// Last value of the range, inclusive.
        end: u64,
    },
    /// The half-open range `[start, +∞)`.
    Unbounded {
        /// First value of the range.
        start: u64,
    },
    /// Matches every integer, dominating all other subintervals.
    Wildcard,
}

impl SubInterval {
    /// Returns true if `value` lies inside this subinterval.
    pub fn contains(&self, value: u64) -> bool {
        match *self {
            SubInterval::Bounded { start, end } => start <= value && value <= end,
            SubInterval::Unbounded { start } => value >= start,
            SubInterval::Wildcard => true,
        }
    }

    /// Sort key for the normalization sweep. Wildcard expressions are
    /// short-circuited before sorting, so the wildcard key only has to keep
    /// the ordering total.
    pub(crate) fn sort_start(&self) -> u64 {
        match *self {
            SubInterval::Bounded { start, .. } | SubInterval::Unbounded { start } => start,
            SubInterval::Wildcard => 0,
        }
    }
}

/// Convert a full ASCII digit run into a `u64`.
///
/// `str::parse::<u64>` alone would accept a leading `+`, which the grammar
/// does not allow, so every byte is required to be a digit first; after
/// that check the only way conversion can fail is overflow.
fn parse_literal(literal: &str, token: &str) -> Result<u64, ParseError> {
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::MalformedToken {
            token: token.to_string(),
        });
    }
    literal.parse().map_err(|_| ParseError::NumericOverflow {
        token: token.to_string(),
        literal: literal.to_string(),
    })
}

impl FromStr for SubInterval {
    type Err = ParseError;

    /// Parses a single subexpression token.
    ///
    /// Whitespace around the token is ignored; whitespace inside it
    /// (`"1 - 3"`, `"1 2"`) is a syntax error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token == "*" {
            return Ok(SubInterval::Wildcard);
        }
        match token.split_once('-') {
            // "7"
            None => {
                let start = parse_literal(token, token)?;
                Ok(SubInterval::Bounded { start, end: start })
            }
            // "7-"
            Some((start, "")) => {
                let start = parse_literal(start, token)?;
                Ok(SubInterval::Unbounded { start })
            }
            // "3-5"; a second dash ends up in `end` and fails the digit scan
            Some((start, end)) => {
                let start = parse_literal(start, token)?;
                let end = parse_literal(end, token)?;
                if end < start {
                    return Err(ParseError::InvalidRange {
                        token: token.to_string(),
                        start,
                        end,
                    });
                }
                Ok(SubInterval::Bounded { start, end })
            }
        }
    }
}

impl fmt::Display for SubInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SubInterval::Bounded { start, end } if start == end => write!(f, "{}", start),
            SubInterval::Bounded { start, end } => write!(f, "{}-{}", start, end),
            SubInterval::Unbounded { start } => write!(f, "{}-", start),
            SubInterval::Wildcard => write!(f, "*"),
        }
    }
}
