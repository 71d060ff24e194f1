// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date model of the course date wizard.
//!
//! A [`Course`] carries the course range, the assignment timeline, the weekly
//! meeting days and the holiday list. Every user edit goes through
//! [`Course::apply`], which returns a new, consistent course value; the
//! selectable ranges of dependent fields come from [`Course::constraints`].

mod config;
mod constraint;
mod course;
mod date;
mod edit;
mod error;
mod schedule;
mod step;
mod text;
mod training;
mod weekday;

pub use crate::config::{APP_NAME, Config, expand_path, get_config_dir};
pub use crate::constraint::{DateConstraints, FieldConstraint};
pub use crate::course::{Course, CourseValidation, DateField};
pub use crate::date::{RangePosition, format_date, is_date_valid, parse_date};
pub use crate::edit::CourseEdit;
pub use crate::error::CourseDateError;
pub use crate::step::{DateStep, PersistCourse, StepOutcome};
pub use crate::text::{DefaultText, TextLookup, TextTable};
pub use crate::training::{ModuleKind, ModuleState, TrainingModule, TrainingStatusRow, training_rows};
pub use crate::weekday::WeekdaySet;

/// Keys of the user-visible strings.
pub mod text_keys {
    pub use crate::text::{
        KEY_ASSIGNMENT_DESCRIPTION, KEY_CALENDAR_INSTRUCTIONS, KEY_COMPLETED_AT,
        KEY_COMPLETION_TIME, KEY_CONFIRM_DATES, KEY_DUE_BY, KEY_FORM_ERRORS, KEY_LATE,
        KEY_MINUTES, KEY_NO_CLASS_HOLIDAYS, KEY_SECONDS, KEY_SELECT_DATES_AND_CONTINUE,
    };
}
