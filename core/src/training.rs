// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use jiff::{Timestamp, Zoned};

use crate::TextLookup;
use crate::text::{KEY_COMPLETED_AT, KEY_COMPLETION_TIME, KEY_DUE_BY, KEY_MINUTES, KEY_SECONDS};

/// Completion times up to this many seconds are shown on the row.
const MAX_SHOWN_COMPLETION_SECS: u64 = 60 * 60;

/// A student's progress on one training module.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrainingModule {
    pub id: u64,

    pub module_name: String,

    #[serde(default)]
    pub kind: ModuleKind,

    /// The date the module should be finished by.
    pub due_date: Date,

    /// When the student finished the module, if they did.
    #[serde(default)]
    pub completion_date: Option<Timestamp>,

    /// Time spent on the module, in seconds.
    #[serde(default)]
    pub completion_time: Option<u64>,

    /// Progress status reported for unfinished modules.
    #[serde(default)]
    pub status: Option<String>,

    /// Marked overdue upstream.
    #[serde(default)]
    pub overdue: bool,
}

/// The kind of a course module, only training modules get status rows.
///
/// A missing or unrecognized kind is [`ModuleKind::Other`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Training,
    Exercise,
    Discussion,
    #[default]
    #[serde(other)]
    Other,
}

/// Display values of one training module row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TrainingStatusRow {
    pub id: u64,

    pub module_name: String,

    /// e.g. `Due by Jan 1st, 2024`
    pub due_by: String,

    pub state: ModuleState,

    /// Finished after the due date, or still unfinished past it.
    pub late: bool,
}

/// Whether the module is done.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ModuleState {
    Completed {
        /// e.g. `Completed at: 2024-01-05   3:04 PM`
        completed_at: String,

        /// e.g. `Completion time: 05 minutes 07 seconds`, only for modules
        /// finished within an hour.
        completion_time: Option<String>,
    },

    Pending {
        status: Option<String>,
    },
}

/// Builds the status rows of the training modules, in input order.
///
/// Dates are shown in the time zone of `now`.
pub fn training_rows(
    modules: &[TrainingModule],
    now: &Zoned,
    text: &impl TextLookup,
) -> Vec<TrainingStatusRow> {
    modules
        .iter()
        .filter(|m| m.kind == ModuleKind::Training)
        .map(|m| training_row(m, now, text))
        .collect()
}

fn training_row(module: &TrainingModule, now: &Zoned, text: &impl TextLookup) -> TrainingStatusRow {
    let tz = now.time_zone();
    let due_at = module.due_date.to_zoned(tz.clone()).ok();
    let finished_or_now = module.completion_date.unwrap_or(now.timestamp());
    let late = module.overdue || due_at.is_some_and(|due| due.timestamp() < finished_or_now);

    let state = match module.completion_date {
        Some(completed) => {
            let completed = completed.to_zoned(tz.clone());
            ModuleState::Completed {
                completed_at: format!(
                    "{}: {}",
                    text.text(KEY_COMPLETED_AT),
                    completed.strftime("%Y-%m-%d   %-I:%M %p")
                ),
                completion_time: module
                    .completion_time
                    .filter(|secs| *secs <= MAX_SHOWN_COMPLETION_SECS)
                    .map(|secs| {
                        format!(
                            "{}: {:02} {} {:02} {}",
                            text.text(KEY_COMPLETION_TIME),
                            (secs / 60) % 60,
                            text.text(KEY_MINUTES),
                            secs % 60,
                            text.text(KEY_SECONDS),
                        )
                    }),
            }
        }
        None => ModuleState::Pending {
            status: module.status.clone(),
        },
    };

    TrainingStatusRow {
        id: module.id,
        module_name: module.module_name.clone(),
        due_by: format!("{} {}", text.text(KEY_DUE_BY), format_due_date(module.due_date)),
        state,
        late,
    }
}

/// Formats like `Jan 1st, 2024`.
fn format_due_date(date: Date) -> String {
    format!(
        "{} {}, {}",
        date.strftime("%b"),
        ordinal(date.day()),
        date.year()
    )
}

fn ordinal(day: i8) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
