// SPDX-License-Identifier: MPL-2.0

//! Options adjusting how expression strings are interpreted.

/// Adjusts how [`Expression::parse`](crate::expression::Expression::parse)
/// interprets its input.
///
/// The options travel with the parsed
/// [`Expression`](crate::expression::Expression): its `Display`
/// implementation reuses the delimiter, and
/// [`normalize`](crate::expression::Expression::normalize) propagates the
/// options onto the value it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// Separator between subexpressions. Must not be empty.
    pub delimiter: String,

    /// Whether inputs containing no subexpressions are accepted.
    /// If false, the parser returns an error on such input.
    /// If true, the input parses into an expression matching nothing.
    pub allow_empty_expression: bool,

    /// Normalize the expression directly after a successful parse.
    pub post_process_normalize: bool,
}

impl Default for ParseOptions {
    /// A sensible set of options for default usage: comma delimiter, no
    /// post-parse normalization, and empty expressions rejected (they match
    /// nothing and likely confuse users).
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            allow_empty_expression: false,
            post_process_normalize: false,
        }
    }
}

impl ParseOptions {
    /// Replace the delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set whether inputs containing no subexpressions are accepted.
    pub fn with_allow_empty_expression(mut self, allow: bool) -> Self {
        self.allow_empty_expression = allow;
        self
    }

    /// Set whether the expression is normalized directly after parsing.
    pub fn with_post_process_normalize(mut self, normalize: bool) -> Self {
        self.post_process_normalize = normalize;
        self
    }
}
