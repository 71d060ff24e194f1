// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::date::clamp_date;
use crate::{Course, CourseDateError, DateField, WeekdaySet, parse_date};

const KEY_WEEKDAYS: &str = "weekdays";
const KEY_DAY_EXCEPTIONS: &str = "day_exceptions";
const KEY_NO_DAY_EXCEPTIONS: &str = "no_day_exceptions";

/// A single user edit of a course, as produced by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseEdit {
    /// Set or clear one of the date fields.
    Date(DateField, Option<Date>),

    /// Replace the weekday selection.
    Weekdays(WeekdaySet),

    /// Flip a single weekday, by index with 0 as Sunday.
    ToggleWeekday(u8),

    /// Replace the day exception list.
    DayExceptions(Vec<Date>),

    /// Add the date to the exception list, or remove it if already present.
    ToggleDayException(Date),

    /// Declare that the course has no holidays.
    NoDayExceptions(bool),
}

impl CourseEdit {
    /// Builds an edit from a raw `(field key, value)` pair.
    ///
    /// An empty value clears a date field. Day exceptions are a comma separated
    /// list of dates.
    pub fn parse(key: &str, value: &str) -> Result<Self, CourseDateError> {
        let value = value.trim();
        match key {
            KEY_WEEKDAYS => value.parse().map(CourseEdit::Weekdays),
            KEY_DAY_EXCEPTIONS => value
                .split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(parse_date)
                .collect::<Result<Vec<_>, _>>()
                .map(CourseEdit::DayExceptions),
            KEY_NO_DAY_EXCEPTIONS => match value {
                "true" | "1" | "yes" => Ok(CourseEdit::NoDayExceptions(true)),
                "false" | "0" | "no" => Ok(CourseEdit::NoDayExceptions(false)),
                _ => Err(CourseDateError::InvalidFlag {
                    value: value.to_string(),
                }),
            },
            _ => {
                let field: DateField = key.parse()?;
                match value {
                    "" => Ok(CourseEdit::Date(field, None)),
                    _ => parse_date(value).map(|d| CourseEdit::Date(field, Some(d))),
                }
            }
        }
    }
}

impl Course {
    /// Applies one edit and returns the resulting course.
    ///
    /// The edited field wins: when it conflicts with a neighbouring field, the
    /// neighbour is moved to meet it. Timeline dates are clamped into the
    /// course range. Edits to a date field that is disabled because the course
    /// has no start are ignored, though the result is still normalized.
    ///
    /// Applying the same edit twice gives the same course as applying it once,
    /// except for [`CourseEdit::ToggleWeekday`] and
    /// [`CourseEdit::ToggleDayException`], which flip their target each time.
    #[must_use]
    pub fn apply(&self, edit: &CourseEdit) -> Course {
        let mut course = self.clone();
        match edit {
            CourseEdit::Date(field, value) => {
                match *field != DateField::Start && self.start.is_none() {
                    true => tracing::debug!(%field, "ignoring edit of a disabled date field"),
                    false => course.set_date(*field, *value),
                }
            }
            CourseEdit::Weekdays(weekdays) => course.weekdays = *weekdays,
            CourseEdit::ToggleWeekday(index) => course.weekdays = course.weekdays.toggled(*index),
            CourseEdit::DayExceptions(dates) => {
                course.day_exceptions = dates.clone();
                if !dates.is_empty() {
                    course.no_day_exceptions = false;
                }
            }
            CourseEdit::ToggleDayException(date) => {
                match course.day_exceptions.iter().position(|d| d == date) {
                    Some(i) => {
                        course.day_exceptions.remove(i);
                    }
                    None => {
                        course.day_exceptions.push(*date);
                        course.no_day_exceptions = false;
                    }
                }
            }
            CourseEdit::NoDayExceptions(flag) => course.no_day_exceptions = *flag,
        }

        course.normalize();
        tracing::debug!(slug = %course.slug, ?edit, "applied course edit");
        course
    }

    fn set_date(&mut self, field: DateField, value: Option<Date>) {
        let (prev_start, prev_end) = (self.start, self.end);
        match (field, value) {
            (DateField::Start, Some(start)) => {
                self.start = Some(start);
                if self.end.is_some_and(|end| end < start) {
                    self.end = Some(start);
                }
                if self.timeline_start.is_none() || self.timeline_start == prev_start {
                    self.timeline_start = Some(start);
                }
            }
            (DateField::End, Some(end)) => {
                self.end = Some(end);
                if self.start.is_some_and(|start| start > end) {
                    self.start = Some(end);
                }
                if self.timeline_end.is_none() || self.timeline_end == prev_end {
                    self.timeline_end = Some(end);
                }
            }
            (DateField::TimelineStart, Some(date)) => {
                let date = clamp_date(date, self.start, self.end);
                self.timeline_start = Some(date);
                if self.timeline_end.is_some_and(|end| end < date) {
                    self.timeline_end = Some(date);
                }
            }
            (DateField::TimelineEnd, Some(date)) => {
                let date = clamp_date(date, self.start, self.end);
                self.timeline_end = Some(date);
                if self.timeline_start.is_some_and(|start| start > date) {
                    self.timeline_start = Some(date);
                }
            }
            (DateField::Start, None) => self.start = None,
            (DateField::End, None) => self.end = None,
            (DateField::TimelineStart, None) => self.timeline_start = None,
            (DateField::TimelineEnd, None) => self.timeline_end = None,
        }
    }

    /// Re-establishes the course invariants regardless of the input state.
    fn normalize(&mut self) {
        if let (Some(start), Some(end)) = (self.start, self.end)
            && end < start
        {
            self.end = Some(start);
        }

        self.timeline_start = self.timeline_start.map(|d| clamp_date(d, self.start, self.end));
        self.timeline_end = self.timeline_end.map(|d| clamp_date(d, self.start, self.end));
        if let (Some(a), Some(b)) = (self.timeline_start, self.timeline_end)
            && b < a
        {
            self.timeline_end = Some(a);
        }

        self.day_exceptions.sort_unstable();
        self.day_exceptions.dedup();
    }
}
