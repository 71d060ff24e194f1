// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use coursedate_core::{Course, CourseEdit, DateField};
use jiff::civil::date;

use crate::common::{CourseBuilder, january_course};

fn set(course: &Course, field: DateField, value: jiff::civil::Date) -> Course {
    course.apply(&CourseEdit::Date(field, Some(value)))
}

#[test]
fn apply_does_not_touch_the_input() {
    let course = january_course();
    let before = course.clone();
    let _ = set(&course, DateField::End, date(2024, 2, 28));
    assert_eq!(course, before);
}

#[test]
fn start_after_end_pulls_end_forward() {
    let c = set(&january_course(), DateField::Start, date(2024, 2, 10));
    assert_eq!(c.start, Some(date(2024, 2, 10)));
    assert_eq!(c.end, Some(date(2024, 2, 10)));
    assert_eq!(c.timeline_start, Some(date(2024, 2, 10)));
    assert_eq!(c.timeline_end, Some(date(2024, 2, 10)));
}

#[test]
fn end_before_start_pulls_start_back() {
    let c = set(&january_course(), DateField::End, date(2023, 12, 20));
    assert_eq!(c.start, Some(date(2023, 12, 20)));
    assert_eq!(c.end, Some(date(2023, 12, 20)));
}

#[test]
fn end_moves_matching_timeline_end() {
    let c = set(&january_course(), DateField::End, date(2024, 2, 28));
    assert_eq!(c.timeline_end, Some(date(2024, 2, 28)));

    let c = CourseBuilder::new("x")
        .range(date(2024, 1, 1), date(2024, 1, 31))
        .timeline(date(2024, 1, 8), date(2024, 1, 26))
        .build();
    let c = set(&c, DateField::End, date(2024, 2, 28));
    assert_eq!(c.timeline_end, Some(date(2024, 1, 26)));
}

#[test]
fn shrinking_end_clamps_timeline() {
    let c = CourseBuilder::new("x")
        .range(date(2024, 1, 1), date(2024, 1, 31))
        .timeline(date(2024, 1, 8), date(2024, 1, 26))
        .build();
    let c = set(&c, DateField::End, date(2024, 1, 20));
    assert_eq!(c.timeline_end, Some(date(2024, 1, 20)));
    assert_eq!(c.timeline_start, Some(date(2024, 1, 8)));
}

#[test]
fn timeline_start_before_start_is_clamped() {
    let c = set(&january_course(), DateField::TimelineStart, date(2023, 12, 1));
    assert_eq!(c.timeline_start, Some(date(2024, 1, 1)));
}

#[test]
fn timeline_end_after_end_is_clamped() {
    let c = set(&january_course(), DateField::TimelineEnd, date(2024, 3, 1));
    assert_eq!(c.timeline_end, Some(date(2024, 1, 31)));
}

#[test]
fn timeline_start_past_timeline_end_pushes_it() {
    let c = CourseBuilder::new("x")
        .range(date(2024, 1, 1), date(2024, 1, 31))
        .timeline(date(2024, 1, 8), date(2024, 1, 12))
        .build();
    let c = set(&c, DateField::TimelineStart, date(2024, 1, 20));
    assert_eq!(c.timeline_start, Some(date(2024, 1, 20)));
    assert_eq!(c.timeline_end, Some(date(2024, 1, 20)));
}

#[test]
fn dependent_fields_ignored_without_start() {
    let c = Course::new("x");
    for field in [DateField::End, DateField::TimelineStart, DateField::TimelineEnd] {
        let edited = set(&c, field, date(2024, 1, 10));
        assert_eq!(edited, c, "{field} should be ignored");
    }
}

#[test]
fn setting_start_on_empty_course_seeds_timeline() {
    let c = set(&Course::new("x"), DateField::Start, date(2024, 1, 1));
    assert_eq!(c.start, Some(date(2024, 1, 1)));
    assert_eq!(c.timeline_start, Some(date(2024, 1, 1)));
    assert_eq!(c.end, None);
}

#[test]
fn toggling_an_exception_twice_restores_the_list() {
    let c = january_course().apply(&CourseEdit::DayExceptions(vec![date(2024, 1, 3)]));
    let toggled = c.apply(&CourseEdit::ToggleDayException(date(2024, 1, 15)));
    assert_eq!(toggled.day_exceptions, vec![date(2024, 1, 3), date(2024, 1, 15)]);
    let restored = toggled.apply(&CourseEdit::ToggleDayException(date(2024, 1, 15)));
    assert_eq!(restored.day_exceptions, c.day_exceptions);
}

#[test]
fn adding_an_exception_clears_no_day_exceptions() {
    let c = CourseBuilder::new("x").no_day_exceptions(true).build();
    let c = c.apply(&CourseEdit::ToggleDayException(date(2024, 1, 15)));
    assert!(!c.no_day_exceptions);
}

#[test]
fn no_day_exceptions_keeps_the_list() {
    let c = CourseBuilder::new("x").exceptions([date(2024, 1, 15)]).build();
    let c = c.apply(&CourseEdit::NoDayExceptions(true));
    assert!(c.no_day_exceptions);
    assert_eq!(c.day_exceptions, vec![date(2024, 1, 15)]);
}

#[test]
fn raw_edits_flow_through_parse() {
    let mut course = Course::new("x");
    for (key, value) in [
        ("start", "2024-01-01"),
        ("end", "2024-01-31"),
        ("timeline_end", "2024-01-26"),
        ("weekdays", "0101000"),
        ("no_day_exceptions", "true"),
    ] {
        course = course.apply(&CourseEdit::parse(key, value).unwrap());
    }
    assert_eq!(course.timeline_start, Some(date(2024, 1, 1)));
    assert_eq!(course.timeline_end, Some(date(2024, 1, 26)));
    assert!(course.is_step_complete());
    assert!(course.validation().is_valid());
}
