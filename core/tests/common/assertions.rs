// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Assertion helpers shared by the integration tests.

use coursedate_core::{Course, RangePosition};

/// Asserts the ordering invariants every course must satisfy after an edit.
#[track_caller]
pub fn assert_course_invariants(course: &Course) {
    if let (Some(start), Some(end)) = (course.start, course.end) {
        assert!(start <= end, "start {start} after end {end}");
    }

    for (name, date) in [
        ("timeline_start", course.timeline_start),
        ("timeline_end", course.timeline_end),
    ] {
        if let Some(date) = date {
            assert_eq!(
                RangePosition::of(date, course.start, course.end),
                RangePosition::InRange,
                "{name} {date} outside [{:?}, {:?}]",
                course.start,
                course.end,
            );
        }
    }

    if let (Some(a), Some(b)) = (course.timeline_start, course.timeline_end) {
        assert!(a <= b, "timeline_start {a} after timeline_end {b}");
    }

    let mut sorted = course.day_exceptions.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted, course.day_exceptions, "day exceptions not normalized");
}
