// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use coursedate_core::{Course, CourseEdit, DateField};
use jiff::civil::date;

use crate::common::january_course;

#[test]
fn constraints_track_edits() {
    let c = january_course();
    let constraints = c.constraints();
    assert!(constraints.timeline_start.allows(date(2024, 1, 31)));
    assert!(!constraints.timeline_start.allows(date(2024, 2, 1)));

    let c = c.apply(&CourseEdit::Date(DateField::End, Some(date(2024, 2, 29))));
    assert!(c.constraints().timeline_start.allows(date(2024, 2, 1)));
}

#[test]
fn clearing_start_disables_dependent_fields() {
    let c = january_course().apply(&CourseEdit::Date(DateField::Start, None));
    let constraints = c.constraints();
    assert!(!constraints.end.enabled);
    assert!(!constraints.timeline_start.enabled);
    assert!(!constraints.timeline_end.enabled);
    assert!(constraints.get(DateField::Start).enabled);
}

#[test]
fn applied_values_are_always_selectable() {
    let mut c = Course::new("x");
    for (field, value) in [
        (DateField::Start, date(2024, 1, 1)),
        (DateField::End, date(2024, 1, 31)),
        (DateField::TimelineStart, date(2023, 6, 1)),
        (DateField::TimelineEnd, date(2025, 6, 1)),
    ] {
        c = c.apply(&CourseEdit::Date(field, Some(value)));
        let constraints = c.constraints();
        for field in [DateField::End, DateField::TimelineStart, DateField::TimelineEnd] {
            if let Some(d) = c.date(field) {
                assert!(constraints.get(field).allows(d), "{field} = {d}");
            }
        }
    }
}
