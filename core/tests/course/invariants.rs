// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Invariants that must hold for any edit or sequence of edits.

use coursedate_core::Course;
use jiff::civil::date;

use crate::common::{CourseBuilder, assert_course_invariants, january_course, sample_edits};

fn starting_courses() -> Vec<Course> {
    vec![
        Course::new("empty"),
        january_course(),
        CourseBuilder::new("narrow")
            .range(date(2024, 1, 10), date(2024, 1, 12))
            .timeline(date(2024, 1, 11), date(2024, 1, 11))
            .exceptions([date(2024, 1, 11)])
            .build(),
    ]
}

#[test]
fn every_single_edit_preserves_invariants() {
    for course in starting_courses() {
        for edit in sample_edits() {
            let edited = course.apply(&edit);
            assert_course_invariants(&edited);
        }
    }
}

#[test]
fn every_pair_of_edits_preserves_invariants() {
    let edits = sample_edits();
    for course in starting_courses() {
        for first in &edits {
            let once = course.apply(first);
            for second in &edits {
                assert_course_invariants(&once.apply(second));
            }
        }
    }
}

#[test]
fn edits_are_idempotent() {
    for course in starting_courses() {
        for edit in sample_edits() {
            // toggles flip by definition
            if matches!(
                edit,
                coursedate_core::CourseEdit::ToggleWeekday(_)
                    | coursedate_core::CourseEdit::ToggleDayException(_)
            ) {
                continue;
            }
            let once = course.apply(&edit);
            let twice = once.apply(&edit);
            assert_eq!(once, twice, "{edit:?} on {}", course.slug);
        }
    }
}

#[test]
fn edits_are_deterministic() {
    for course in starting_courses() {
        for edit in sample_edits() {
            assert_eq!(course.apply(&edit), course.apply(&edit));
        }
    }
}

#[test]
fn step_completion_follows_weekdays_and_exceptions() {
    let c = january_course();
    assert!(!c.is_step_complete());

    let c = c.apply(&coursedate_core::CourseEdit::NoDayExceptions(true));
    assert!(c.is_step_complete());

    let c = CourseBuilder::new("x").exceptions([date(2024, 1, 15)]).build();
    assert!(!c.is_step_complete(), "no weekday selected");

    let c = CourseBuilder::new("x")
        .weekdays([5])
        .exceptions([date(2024, 1, 15)])
        .build();
    assert!(c.is_step_complete());
}

#[test]
fn toggles_flip_back_on_second_application() {
    use coursedate_core::CourseEdit;

    for course in starting_courses() {
        for edit in [
            CourseEdit::ToggleWeekday(0),
            CourseEdit::ToggleDayException(date(2024, 1, 17)),
        ] {
            let once = course.apply(&edit);
            assert_ne!(once, course, "{edit:?} on {}", course.slug);
            assert_eq!(once.apply(&edit).weekdays, course.weekdays);
            assert_eq!(once.apply(&edit).day_exceptions, course.day_exceptions);
        }
    }
}
