// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{Color, Colorize};
use coursedate_core::{
    Course, CourseValidation, DateConstraints, DateField, FieldConstraint, TextLookup, format_date,
    text_keys::{KEY_ASSIGNMENT_DESCRIPTION, KEY_NO_CLASS_HOLIDAYS},
};
use jiff::civil::Date;

use crate::table::{Column, PaddingDirection, Table};
use crate::util::ArgOutputFormat;

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Everything the date step shows about a course.
#[derive(Debug, serde::Serialize)]
pub struct CourseReport<'a> {
    pub course: &'a Course,
    pub constraints: DateConstraints,
    pub validation: CourseValidation,
    pub step_complete: bool,
    pub meeting_dates: Vec<Date>,
    pub open_weeks: usize,
}

impl<'a> CourseReport<'a> {
    pub fn new(course: &'a Course) -> Self {
        Self {
            course,
            constraints: course.constraints(),
            validation: course.validation(),
            step_complete: course.is_step_complete(),
            meeting_dates: course.meeting_dates(),
            open_weeks: course.open_weeks(),
        }
    }
}

#[derive(Debug)]
pub struct CourseFormatter<'t, T: TextLookup> {
    format: ArgOutputFormat,
    text: &'t T,
}

impl<'t, T: TextLookup> CourseFormatter<'t, T> {
    pub fn new(format: ArgOutputFormat, text: &'t T) -> Self {
        Self { format, text }
    }

    pub fn format<'a>(&'a self, report: &'a CourseReport<'a>) -> CourseDisplay<'a, 't, T> {
        CourseDisplay {
            formatter: self,
            report,
        }
    }
}

pub struct CourseDisplay<'a, 't, T: TextLookup> {
    formatter: &'a CourseFormatter<'t, T>,
    report: &'a CourseReport<'a>,
}

impl<T: TextLookup> fmt::Display for CourseDisplay<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => match serde_json::to_string_pretty(self.report) {
                Ok(json) => write!(f, "{json}"),
                Err(e) => write!(f, "Failed to serialize course: {e}"),
            },
            ArgOutputFormat::Table => self.fmt_table(f),
        }
    }
}

impl<T: TextLookup> CourseDisplay<'_, '_, T> {
    fn fmt_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let course = report.course;
        let text = self.formatter.text;

        match &course.title {
            Some(title) => writeln!(f, "{} ({})", title.bold(), course.slug)?,
            None => writeln!(f, "{}", course.slug.bold())?,
        }
        writeln!(f, "{}", text.text(KEY_ASSIGNMENT_DESCRIPTION).italic())?;

        let rows: Vec<FieldRow> = DateField::ALL
            .into_iter()
            .map(|field| FieldRow {
                field,
                value: course.date(field),
                constraint: report.constraints.get(field),
                valid: field_valid(&report.validation, field),
            })
            .collect();
        let columns = [
            FieldColumn::Name,
            FieldColumn::Value,
            FieldColumn::Range,
            FieldColumn::Status,
        ];
        writeln!(f, "{}", Table::new(&columns, &rows))?;
        writeln!(f)?;

        let weekdays: Vec<&str> = course
            .weekdays
            .indices()
            .map(|i| WEEKDAY_NAMES[usize::from(i)])
            .collect();
        writeln!(
            f,
            "Meets on:   {}",
            match weekdays.is_empty() {
                true => "-".to_string(),
                false => weekdays.join(", "),
            }
        )?;

        let exceptions = match (course.day_exceptions.is_empty(), course.no_day_exceptions) {
            (true, true) => text.text(KEY_NO_CLASS_HOLIDAYS).into_owned(),
            (true, false) => "-".to_string(),
            (false, _) => course
                .day_exceptions
                .iter()
                .map(|d| format_date(*d))
                .collect::<Vec<_>>()
                .join(", "),
        };
        writeln!(f, "Holidays:   {exceptions}")?;
        writeln!(
            f,
            "Meetings:   {} over {} open weeks",
            report.meeting_dates.len(),
            report.open_weeks
        )?;

        match report.step_complete {
            true => write!(f, "{}", "Ready to continue".green()),
            false => write!(f, "{}", "Select meeting days and holidays to continue".yellow()),
        }
    }
}

fn field_valid(validation: &CourseValidation, field: DateField) -> bool {
    match field {
        DateField::Start => validation.start,
        DateField::End => validation.end,
        DateField::TimelineStart => validation.timeline_start,
        DateField::TimelineEnd => validation.timeline_end,
    }
}

struct FieldRow {
    field: DateField,
    value: Option<Date>,
    constraint: FieldConstraint,
    valid: bool,
}

enum FieldColumn {
    Name,
    Value,
    Range,
    Status,
}

impl Column<FieldRow> for FieldColumn {
    fn format(&self, row: &FieldRow) -> String {
        match self {
            FieldColumn::Name => row.field.to_string(),
            FieldColumn::Value => row.value.map_or("-".to_string(), format_date),
            FieldColumn::Range => match (row.constraint.min, row.constraint.max) {
                (None, None) => String::new(),
                (min, max) => format!(
                    "[{}, {}]",
                    min.map_or("..".to_string(), format_date),
                    max.map_or("..".to_string(), format_date),
                ),
            },
            FieldColumn::Status => match (row.constraint.enabled, row.valid) {
                (false, _) => "disabled".to_string(),
                (true, true) => "ok".to_string(),
                (true, false) => "invalid".to_string(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            FieldColumn::Name => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, row: &FieldRow) -> Option<Color> {
        match self {
            FieldColumn::Status if !row.constraint.enabled => Some(Color::BrightBlack),
            FieldColumn::Status if !row.valid => Some(Color::Red),
            FieldColumn::Status => Some(Color::Green),
            _ => None,
        }
    }
}
