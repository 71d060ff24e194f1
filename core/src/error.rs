// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

/// Errors raised when turning raw presentation input into typed course values.
///
/// The date model itself never fails: these only come out of the parsing
/// helpers and the persistence hand-off of the wizard step.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CourseDateError {
    /// The value is not a well-formed `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The raw input.
        value: String,
    },

    /// The field key does not name an editable course field.
    #[error("Unknown course field '{key}'")]
    UnknownField {
        /// The raw key.
        key: String,
    },

    /// The weekday selection could not be parsed.
    #[error("Invalid weekday '{value}', expected 0-6 or a seven character bitmap")]
    InvalidWeekday {
        /// The raw input.
        value: String,
    },

    /// The value is not valid for a boolean field.
    #[error("Invalid flag '{value}', expected true or false")]
    InvalidFlag {
        /// The raw input.
        value: String,
    },

    /// The persistence gateway refused to save the course.
    #[error("Failed to persist course: {0}")]
    Persist(#[source] Box<dyn Error + Send + Sync>),
}
