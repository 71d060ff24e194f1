// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::error::Error;

use crate::text::{KEY_CONFIRM_DATES, KEY_FORM_ERRORS, KEY_SELECT_DATES_AND_CONTINUE};
use crate::{Course, CourseDateError, TextLookup};

/// Saves the current state of a course, identified by its slug only.
pub trait PersistCourse {
    fn persist_course(&mut self, slug: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// Result of confirming the date step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The course was handed to the persistence gateway.
    Persisted,

    /// The course has invalid or missing dates, the notice tells the user why.
    Blocked {
        /// Localized notice.
        notice: String,
    },
}

/// The course date step of the wizard.
#[derive(Debug, Clone, Copy)]
pub struct DateStep<'a, T: TextLookup> {
    text: &'a T,
}

impl<'a, T: TextLookup> DateStep<'a, T> {
    pub fn new(text: &'a T) -> Self {
        Self { text }
    }

    /// Whether the "next" control is enabled.
    pub fn next_enabled(&self, course: &Course) -> bool {
        course.is_step_complete()
    }

    /// The step heading, numbered when the wizard shows its steps.
    pub fn heading(&self, show_steps: bool) -> String {
        let text = self.text.text(KEY_CONFIRM_DATES);
        match show_steps {
            true => format!("1. {text}"),
            false => text.into_owned(),
        }
    }

    pub fn helper_text(&self) -> Cow<'a, str> {
        self.text.text(KEY_SELECT_DATES_AND_CONTINUE)
    }

    /// Persists a valid, complete course. Blocks with a notice when its dates
    /// are invalid, or when meeting days or holidays are still missing.
    #[tracing::instrument(skip_all, fields(slug = %course.slug))]
    pub fn confirm(
        &self,
        course: &Course,
        gateway: &mut impl PersistCourse,
    ) -> Result<StepOutcome, CourseDateError> {
        let validation = course.validation();
        if !validation.is_valid() {
            tracing::debug!(invalid = ?validation.invalid_fields(), "blocking date step");
            return Ok(StepOutcome::Blocked {
                notice: self.text.text(KEY_FORM_ERRORS).into_owned(),
            });
        }
        if !self.next_enabled(course) {
            tracing::debug!(weekdays = %course.weekdays, "blocking incomplete date step");
            return Ok(StepOutcome::Blocked {
                notice: self.helper_text().into_owned(),
            });
        }

        gateway
            .persist_course(&course.slug)
            .map_err(CourseDateError::Persist)?;
        tracing::debug!("course persisted");
        Ok(StepOutcome::Persisted)
    }
}
