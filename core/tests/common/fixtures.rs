// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use coursedate_core::{Course, CourseEdit, DateField, WeekdaySet};
use jiff::civil::{Date, date};

/// A January 2024 course meeting on Mondays and Wednesdays, no holidays chosen yet.
#[must_use]
pub fn january_course() -> Course {
    CourseBuilder::new("intro-2024")
        .range(date(2024, 1, 1), date(2024, 1, 31))
        .weekdays([1, 3])
        .build()
}

/// Builder for test courses.
#[derive(Debug, Clone)]
pub struct CourseBuilder {
    course: Course,
}

#[allow(dead_code)]
impl CourseBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            course: Course::new(slug),
        }
    }

    /// Sets the course range and a timeline spanning all of it.
    pub fn range(mut self, start: Date, end: Date) -> Self {
        self.course.start = Some(start);
        self.course.end = Some(end);
        self.course.timeline_start = Some(start);
        self.course.timeline_end = Some(end);
        self
    }

    pub fn timeline(mut self, start: Date, end: Date) -> Self {
        self.course.timeline_start = Some(start);
        self.course.timeline_end = Some(end);
        self
    }

    pub fn weekdays(mut self, indices: impl IntoIterator<Item = u8>) -> Self {
        self.course.weekdays = WeekdaySet::from_indices(indices);
        self
    }

    pub fn exceptions(mut self, dates: impl IntoIterator<Item = Date>) -> Self {
        self.course.day_exceptions = dates.into_iter().collect();
        self
    }

    pub fn no_day_exceptions(mut self, flag: bool) -> Self {
        self.course.no_day_exceptions = flag;
        self
    }

    pub fn build(self) -> Course {
        self.course
    }
}

/// A spread of edits touching every field, including conflicting and
/// out-of-range values.
#[must_use]
pub fn sample_edits() -> Vec<CourseEdit> {
    let dates = [
        date(2023, 12, 1),
        date(2024, 1, 1),
        date(2024, 1, 10),
        date(2024, 1, 20),
        date(2024, 1, 31),
        date(2024, 3, 15),
    ];

    let mut edits = Vec::new();
    for field in DateField::ALL {
        edits.push(CourseEdit::Date(field, None));
        for d in dates {
            edits.push(CourseEdit::Date(field, Some(d)));
        }
    }
    edits.push(CourseEdit::Weekdays(WeekdaySet::from_indices([2, 4])));
    edits.push(CourseEdit::ToggleWeekday(0));
    edits.push(CourseEdit::DayExceptions(vec![date(2024, 1, 15), date(2024, 1, 3)]));
    edits.push(CourseEdit::ToggleDayException(date(2024, 1, 17)));
    edits.push(CourseEdit::NoDayExceptions(true));
    edits.push(CourseEdit::NoDayExceptions(false));
    edits
}
