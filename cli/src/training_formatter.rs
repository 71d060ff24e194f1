// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Color;
use coursedate_core::{ModuleState, TextLookup, TrainingStatusRow, text_keys::KEY_LATE};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{ArgOutputFormat, truncate_to_width};

const MAX_NAME_WIDTH: usize = 40;

#[derive(Debug)]
pub struct TrainingFormatter<'t, T: TextLookup> {
    format: ArgOutputFormat,
    text: &'t T,
}

impl<'t, T: TextLookup> TrainingFormatter<'t, T> {
    pub fn new(format: ArgOutputFormat, text: &'t T) -> Self {
        Self { format, text }
    }

    pub fn format<'a>(&'a self, rows: &'a [TrainingStatusRow]) -> TrainingDisplay<'a, 't, T> {
        TrainingDisplay {
            formatter: self,
            rows,
        }
    }
}

pub struct TrainingDisplay<'a, 't, T: TextLookup> {
    formatter: &'a TrainingFormatter<'t, T>,
    rows: &'a [TrainingStatusRow],
}

impl<T: TextLookup> fmt::Display for TrainingDisplay<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => match serde_json::to_string_pretty(self.rows) {
                Ok(json) => write!(f, "{json}"),
                Err(e) => write!(f, "Failed to serialize training rows: {e}"),
            },
            ArgOutputFormat::Table => {
                let late = self.formatter.text.text(KEY_LATE);
                let columns = [
                    TrainingColumn::Id,
                    TrainingColumn::Name,
                    TrainingColumn::DueBy,
                    TrainingColumn::Status { late: &late },
                ];
                write!(f, "{}", Table::new(&columns, self.rows))
            }
        }
    }
}

enum TrainingColumn<'a> {
    Id,
    Name,
    DueBy,
    Status { late: &'a str },
}

impl Column<TrainingStatusRow> for TrainingColumn<'_> {
    fn format(&self, row: &TrainingStatusRow) -> String {
        match self {
            TrainingColumn::Id => row.id.to_string(),
            TrainingColumn::Name => truncate_to_width(&row.module_name, MAX_NAME_WIDTH),
            TrainingColumn::DueBy => row.due_by.clone(),
            TrainingColumn::Status { late } => {
                let mut parts: Vec<&str> = Vec::new();
                match &row.state {
                    ModuleState::Completed {
                        completed_at,
                        completion_time,
                    } => {
                        parts.push(completed_at);
                        if let Some(t) = completion_time {
                            parts.push(t);
                        }
                    }
                    ModuleState::Pending { status } => {
                        parts.push(status.as_deref().unwrap_or("-"));
                    }
                }

                let status = parts.join(", ");
                match row.late {
                    true => format!("{status} ({late})"),
                    false => status,
                }
            }
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TrainingColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, row: &TrainingStatusRow) -> Option<Color> {
        match (self, &row.state) {
            (TrainingColumn::Status { .. }, ModuleState::Completed { .. }) if !row.late => {
                Some(Color::Green)
            }
            (TrainingColumn::Status { .. }, _) if row.late => Some(Color::Red),
            _ => None,
        }
    }
}
