// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::num::ParseIntError;

/// Errors raised while turning command tokens into typed values.
///
/// These are distinct from validation rejections: a token that parses but
/// fails a calendar rule is reported through [`crate::Rejection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required field is absent from the command line.
    #[error("missing {field}")]
    MissingField {
        /// Name of the field that was expected
        field: &'static str,
    },

    /// A numeric field could not be parsed as an integer.
    #[error("invalid {field} `{value}`: {source}")]
    InvalidNumber {
        /// Name of the field being parsed
        field: &'static str,
        /// The offending token
        value: String,
        /// Underlying integer parse error
        source: ParseIntError,
    },
}

impl ParseError {
    /// Creates a [`ParseError::InvalidNumber`] for the given field and token.
    pub fn invalid_number(field: &'static str, value: &str, source: ParseIntError) -> Self {
        ParseError::InvalidNumber {
            field,
            value: value.to_string(),
            source,
        }
    }
}
