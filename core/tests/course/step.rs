// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::error::Error;

use coursedate_core::{
    CourseEdit, DateField, DateStep, DefaultText, PersistCourse, StepOutcome, TextTable,
    text_keys::KEY_FORM_ERRORS,
};
use jiff::civil::date;

use crate::common::{CourseBuilder, january_course};

#[derive(Default)]
struct MemoryGateway {
    persisted: Vec<String>,
}

impl PersistCourse for MemoryGateway {
    fn persist_course(&mut self, slug: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.persisted.push(slug.to_owned());
        Ok(())
    }
}

#[test]
fn next_enabled_matches_step_completion() {
    let step = DateStep::new(&DefaultText);
    let c = january_course();
    assert!(!step.next_enabled(&c));
    assert!(step.next_enabled(&c.apply(&CourseEdit::NoDayExceptions(true))));
}

#[test]
fn confirm_uses_configured_notice() {
    let text = TextTable::new(HashMap::from([(
        KEY_FORM_ERRORS.to_string(),
        "Fix the dates first".to_string(),
    )]));
    let course = january_course().apply(&CourseEdit::Date(DateField::End, None));

    let mut gateway = MemoryGateway::default();
    let outcome = DateStep::new(&text).confirm(&course, &mut gateway).unwrap();
    assert_eq!(
        outcome,
        StepOutcome::Blocked {
            notice: "Fix the dates first".to_string()
        }
    );
    assert!(gateway.persisted.is_empty());
}

#[test]
fn confirm_blocks_course_without_weekdays() {
    let course = CourseBuilder::new("no-meetings")
        .range(date(2024, 1, 1), date(2024, 1, 31))
        .build();
    assert!(course.validation().is_valid());

    let mut gateway = MemoryGateway::default();
    let outcome = DateStep::new(&DefaultText)
        .confirm(&course, &mut gateway)
        .unwrap();
    assert!(matches!(outcome, StepOutcome::Blocked { .. }));
    assert!(gateway.persisted.is_empty());

    let course = course.apply(&CourseEdit::NoDayExceptions(true));
    let outcome = DateStep::new(&DefaultText)
        .confirm(&course, &mut gateway)
        .unwrap();
    assert!(matches!(outcome, StepOutcome::Blocked { .. }));
    assert!(gateway.persisted.is_empty());
}

#[test]
fn confirm_persists_only_the_slug() {
    let course = january_course()
        .apply(&CourseEdit::Date(DateField::TimelineEnd, Some(date(2024, 1, 26))))
        .apply(&CourseEdit::NoDayExceptions(true));

    let mut gateway = MemoryGateway::default();
    let outcome = DateStep::new(&DefaultText)
        .confirm(&course, &mut gateway)
        .unwrap();
    assert_eq!(outcome, StepOutcome::Persisted);
    assert_eq!(gateway.persisted, vec!["intro-2024".to_string()]);
}
