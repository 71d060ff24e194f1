// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::collections::HashMap;

pub const KEY_CONFIRM_DATES: &str = "wizard.confirm_dates";
pub const KEY_SELECT_DATES_AND_CONTINUE: &str = "wizard.select_dates_and_continue";
pub const KEY_ASSIGNMENT_DESCRIPTION: &str = "wizard.assignment_description";
pub const KEY_CALENDAR_INSTRUCTIONS: &str = "wizard.calendar_instructions";
pub const KEY_NO_CLASS_HOLIDAYS: &str = "wizard.no_class_holidays";
pub const KEY_FORM_ERRORS: &str = "error.form_errors";
pub const KEY_COMPLETED_AT: &str = "training_status.completed_at";
pub const KEY_COMPLETION_TIME: &str = "training_status.completion_time";
pub const KEY_LATE: &str = "training_status.late";
pub const KEY_DUE_BY: &str = "training_status.due_by";
pub const KEY_MINUTES: &str = "users.training_module_time.minutes";
pub const KEY_SECONDS: &str = "users.training_module_time.seconds";

const DEFAULT_TEXT: &[(&str, &str)] = &[
    (KEY_CONFIRM_DATES, "Confirm the course’s start and end dates."),
    (
        KEY_SELECT_DATES_AND_CONTINUE,
        "Select meeting days and holiday dates, then continue.",
    ),
    (
        KEY_ASSIGNMENT_DESCRIPTION,
        "Assignment dates should fall within the course dates.",
    ),
    (
        KEY_CALENDAR_INSTRUCTIONS,
        "Select the days of the week your class meets, then click dates to mark holidays.",
    ),
    (KEY_NO_CLASS_HOLIDAYS, "I have no class holidays"),
    (
        KEY_FORM_ERRORS,
        "Please correct the highlighted fields before continuing.",
    ),
    (KEY_COMPLETED_AT, "Completed at"),
    (KEY_COMPLETION_TIME, "Completion time"),
    (KEY_LATE, "late"),
    (KEY_DUE_BY, "Due by"),
    (KEY_MINUTES, "minutes"),
    (KEY_SECONDS, "seconds"),
];

/// Looks up user-visible strings by key.
pub trait TextLookup {
    /// Returns the text for the key, if known.
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Returns the text for the key, or the key itself when unknown.
    fn text<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.lookup(key) {
            Some(text) => text,
            None => {
                tracing::warn!(key, "missing text for key");
                Cow::Borrowed(key)
            }
        }
    }
}

/// The built-in English strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultText;

impl TextLookup for DefaultText {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        DEFAULT_TEXT
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| Cow::Borrowed(*v))
    }
}

/// String overrides layered on top of another lookup.
#[derive(Debug, Default, Clone)]
pub struct TextTable<B = DefaultText> {
    entries: HashMap<String, String>,
    base: B,
}

impl TextTable {
    /// Overrides on top of the built-in English strings.
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self::with_base(entries, DefaultText)
    }
}

impl<B: TextLookup> TextTable<B> {
    pub fn with_base(entries: HashMap<String, String>, base: B) -> Self {
        Self { entries, base }
    }
}

impl<B: TextLookup> TextLookup for TextTable<B> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.entries.get(key) {
            Some(v) => Some(Cow::Borrowed(v.as_str())),
            None => self.base.lookup(key),
        }
    }
}
