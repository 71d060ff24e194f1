// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;

use jiff::civil::Date;

use crate::{CourseDateError, RangePosition, WeekdaySet};

/// The scheduling record edited by the course date wizard.
///
/// The record is owned by the caller, every edit produces a new value, see
/// [`Course::apply`].
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Course {
    /// Unique identifier handed to the persistence gateway.
    pub slug: String,

    /// Display title, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// First day of the course.
    #[serde(default)]
    pub start: Option<Date>,

    /// Last day of the course.
    #[serde(default)]
    pub end: Option<Date>,

    /// First day of the assignment timeline, within `[start, end]`.
    #[serde(default)]
    pub timeline_start: Option<Date>,

    /// Last day of the assignment timeline, within `[start, end]`.
    #[serde(default)]
    pub timeline_end: Option<Date>,

    /// Weekdays with class sessions.
    #[serde(default)]
    pub weekdays: WeekdaySet,

    /// Dates excluded from the weekly schedule, sorted and without duplicates.
    #[serde(default)]
    pub day_exceptions: Vec<Date>,

    /// The exception list is intentionally empty.
    #[serde(default)]
    pub no_day_exceptions: bool,
}

impl Course {
    /// A course with only its identifier set.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Default::default()
        }
    }

    /// Returns the value of one of the date fields.
    pub fn date(&self, field: DateField) -> Option<Date> {
        match field {
            DateField::Start => self.start,
            DateField::End => self.end,
            DateField::TimelineStart => self.timeline_start,
            DateField::TimelineEnd => self.timeline_end,
        }
    }

    /// Whether the wizard may advance past the date step: at least one weekday
    /// is selected and holidays are either listed or explicitly declared absent.
    pub fn is_step_complete(&self) -> bool {
        !self.weekdays.is_empty() && (!self.day_exceptions.is_empty() || self.no_day_exceptions)
    }

    /// Per-field validity of the date fields.
    pub fn validation(&self) -> CourseValidation {
        let within = |d: Option<Date>| {
            d.is_some_and(|d| RangePosition::of(d, self.start, self.end) == RangePosition::InRange)
        };
        let ordered = match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => false,
        };
        let timeline_ordered = match (self.timeline_start, self.timeline_end) {
            (Some(a), Some(b)) => a <= b,
            _ => true,
        };

        CourseValidation {
            start: self.start.is_some(),
            end: self.end.is_some() && ordered,
            timeline_start: within(self.timeline_start),
            timeline_end: within(self.timeline_end) && timeline_ordered,
        }
    }
}

/// Validity flags for the date fields of a course, consumed by the
/// presentation layer to mark fields and block progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CourseValidation {
    /// Start is set.
    pub start: bool,

    /// End is set and not before start.
    pub end: bool,

    /// Timeline start is set and inside the course range.
    pub timeline_start: bool,

    /// Timeline end is set, inside the course range and not before timeline start.
    pub timeline_end: bool,
}

impl CourseValidation {
    pub fn is_valid(&self) -> bool {
        self.start && self.end && self.timeline_start && self.timeline_end
    }

    /// The fields that failed validation.
    pub fn invalid_fields(&self) -> Vec<DateField> {
        [
            (DateField::Start, self.start),
            (DateField::End, self.end),
            (DateField::TimelineStart, self.timeline_start),
            (DateField::TimelineEnd, self.timeline_end),
        ]
        .into_iter()
        .filter_map(|(field, ok)| (!ok).then_some(field))
        .collect()
    }
}

/// The date fields of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DateField {
    /// Course start.
    #[cfg_attr(feature = "clap", clap(name = "start"))]
    Start,

    /// Course end.
    #[cfg_attr(feature = "clap", clap(name = "end"))]
    End,

    /// Assignment timeline start.
    #[cfg_attr(feature = "clap", clap(name = "timeline_start", alias = "timeline-start"))]
    TimelineStart,

    /// Assignment timeline end.
    #[cfg_attr(feature = "clap", clap(name = "timeline_end", alias = "timeline-end"))]
    TimelineEnd,
}

const KEY_START: &str = "start";
const KEY_END: &str = "end";
const KEY_TIMELINE_START: &str = "timeline_start";
const KEY_TIMELINE_END: &str = "timeline_end";

impl DateField {
    pub const ALL: [DateField; 4] = [
        DateField::Start,
        DateField::End,
        DateField::TimelineStart,
        DateField::TimelineEnd,
    ];
}

impl AsRef<str> for DateField {
    fn as_ref(&self) -> &str {
        match self {
            DateField::Start => KEY_START,
            DateField::End => KEY_END,
            DateField::TimelineStart => KEY_TIMELINE_START,
            DateField::TimelineEnd => KEY_TIMELINE_END,
        }
    }
}

impl Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for DateField {
    type Err = CourseDateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            KEY_START => Ok(DateField::Start),
            KEY_END => Ok(DateField::End),
            KEY_TIMELINE_START => Ok(DateField::TimelineStart),
            KEY_TIMELINE_END => Ok(DateField::TimelineEnd),
            _ => Err(CourseDateError::UnknownField {
                key: value.to_string(),
            }),
        }
    }
}
