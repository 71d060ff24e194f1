// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::CourseDateError;

/// NOTE: Used for storing course files, so it should be stable across different runs.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";

/// The position of a date relative to a range defined by optional start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePosition {
    /// The date is before the start of the range.
    Before,

    /// The date is within the range.
    InRange,

    /// The date is after the end of the range.
    After,

    /// The range is invalid, e.g., start date is after end date.
    InvalidRange,
}

impl RangePosition {
    /// Determines the position of `date` relative to `[start, end]`, a missing bound is open.
    pub fn of(date: Date, start: Option<Date>, end: Option<Date>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) if start > end => RangePosition::InvalidRange,
            (Some(start), _) if date < start => RangePosition::Before,
            (_, Some(end)) if date > end => RangePosition::After,
            _ => RangePosition::InRange,
        }
    }
}

/// Whether the value is a well-formed `YYYY-MM-DD` calendar date.
///
/// Fails closed: empty, malformed or non-existent dates (e.g. `2023-02-29`)
/// are reported as invalid.
pub fn is_date_valid(value: &str) -> bool {
    parse_date(value).is_ok()
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<Date, CourseDateError> {
    let invalid = || CourseDateError::InvalidDate {
        value: value.to_string(),
    };

    // strptime is lenient about field widths, check the shape first
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }

    Date::strptime(STABLE_FORMAT_DATEONLY, value).map_err(|_| invalid())
}

/// Formats a date the same way [`parse_date`] reads it.
pub fn format_date(date: Date) -> String {
    date.strftime(STABLE_FORMAT_DATEONLY).to_string()
}

/// Clamps `date` into `[min, max]`, a missing bound is open.
///
/// If the bounds are inverted the lower bound wins.
pub(crate) fn clamp_date(date: Date, min: Option<Date>, max: Option<Date>) -> Date {
    let date = match max {
        Some(max) if date > max => max,
        _ => date,
    };
    match min {
        Some(min) if date < min => min,
        _ => date,
    }
}
