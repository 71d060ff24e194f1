// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use coursedate_core::{
    Course, CourseEdit, DateField, DateStep, StepOutcome, TextLookup, format_date, parse_date,
    text_keys::KEY_CALENDAR_INSTRUCTIONS,
};

use crate::course_formatter::{CourseFormatter, CourseReport};
use crate::session::Session;
use crate::util::{ArgOutputFormat, arg_slug, get_slug};

#[derive(Debug, Clone)]
pub struct CmdNew {
    pub slug: String,
    pub title: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Start a new course draft")
            .arg(arg_slug())
            .arg(arg!(-t --title <TITLE> "Title of the course"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            slug: get_slug(matches),
            title: matches.get_one::<String>("title").cloned(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating course draft...");
        let course = session.store.create(&self.slug, self.title)?;
        print_course(session, &course, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdShow {
    pub slug: String,
    pub output_format: ArgOutputFormat,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dates of a course")
            .arg(arg_slug())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            slug: get_slug(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing course...");
        let course = session.store.load_draft(&self.slug)?;

        if self.output_format == ArgOutputFormat::Table {
            let step = DateStep::new(&session.text);
            println!("{}", step.heading(true).bold());
            println!("{}", step.helper_text());
            println!("{}", session.text.text(KEY_CALENDAR_INSTRUCTIONS).dimmed());
            println!();
        }
        print_course(session, &course, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdSet {
    pub slug: String,
    pub field: String,
    pub value: String,
    pub output_format: ArgOutputFormat,
}

impl CmdSet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Set a field of a course")
            .long_about(
                "\
Set a field of a course. Date fields are start, end, timeline_start and timeline_end, \
an empty value clears the date. The other fields are weekdays, day_exceptions and \
no_day_exceptions.",
            )
            .arg(arg_slug())
            .arg(arg!(field: <FIELD> "The field to set"))
            .arg(arg!(value: [VALUE] "The new value, empty to clear").default_value(""))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            slug: get_slug(matches),
            field: matches
                .get_one::<String>("field")
                .cloned()
                .unwrap_or_default(),
            value: matches
                .get_one::<String>("value")
                .cloned()
                .unwrap_or_default(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "setting course field...");
        let edit = CourseEdit::parse(&self.field, &self.value)?;
        edit_course(session, &self.slug, &edit, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdClear {
    pub slug: String,
    pub field: DateField,
    pub output_format: ArgOutputFormat,
}

impl CmdClear {
    pub const NAME: &str = "clear";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Clear a date of a course")
            .arg(arg_slug())
            .arg(
                arg!(field: <FIELD> "The date field to clear")
                    .value_parser(value_parser!(DateField)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            slug: get_slug(matches),
            field: matches
                .get_one::<DateField>("field")
                .copied()
                .unwrap_or(DateField::Start),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "clearing course date...");
        let edit = CourseEdit::Date(self.field, None);
        edit_course(session, &self.slug, &edit, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdException {
    pub slug: String,
    pub date: String,
    pub output_format: ArgOutputFormat,
}

impl CmdException {
    pub const NAME: &str = "exception";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("holiday")
            .about("Add or remove a class holiday")
            .arg(arg_slug())
            .arg(arg!(date: <DATE> "The date to toggle, YYYY-MM-DD"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            slug: get_slug(matches),
            date: matches.get_one::<String>("date").cloned().unwrap_or_default(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "toggling day exception...");
        let date = parse_date(&self.date)?;
        let edit = CourseEdit::ToggleDayException(date);
        edit_course(session, &self.slug, &edit, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdWeekday {
    pub slug: String,
    pub weekday: u8,
    pub output_format: ArgOutputFormat,
}

impl CmdWeekday {
    pub const NAME: &str = "weekday";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Add or remove a meeting day")
            .arg(arg_slug())
            .arg(arg_weekday())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            slug: get_slug(matches),
            weekday: matches.get_one::<u8>("weekday").copied().unwrap_or(0),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "toggling weekday...");
        let edit = CourseEdit::ToggleWeekday(self.weekday);
        edit_course(session, &self.slug, &edit, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdConfirm {
    pub slug: String,
}

impl CmdConfirm {
    pub const NAME: &str = "confirm";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Confirm the dates of a course")
            .arg(arg_slug())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            slug: get_slug(matches),
        }
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "confirming course dates...");
        let course = session.store.load_draft(&self.slug)?;
        // the draft may only exist as a confirmed course so far
        session.store.save_draft(&course)?;

        let step = DateStep::new(&session.text);
        match step.confirm(&course, &mut session.store)? {
            StepOutcome::Persisted => {
                println!("{} {}", "Confirmed:".green(), describe(&course));
                Ok(())
            }
            StepOutcome::Blocked { notice } => Err(blocked_message(&notice, &course).into()),
        }
    }
}

fn arg_weekday() -> Arg {
    arg!(weekday: <WEEKDAY> "The weekday to toggle, 0 for Sunday to 6 for Saturday")
        .value_parser(value_parser!(u8).range(0..=6))
}

fn edit_course(
    session: &mut Session,
    slug: &str,
    edit: &CourseEdit,
    output_format: ArgOutputFormat,
) -> Result<(), Box<dyn Error>> {
    let course = session.store.load_draft(slug)?;
    let updated = course.apply(edit);
    if updated == course {
        tracing::info!(slug, ?edit, "edit left the course unchanged");
        eprintln!("{}", unchanged_notice(&course, edit).dimmed());
    }
    session.store.save_draft(&updated)?;
    print_course(session, &updated, output_format);
    Ok(())
}

fn unchanged_notice(course: &Course, edit: &CourseEdit) -> String {
    match edit {
        CourseEdit::Date(field, _) if *field != DateField::Start && course.start.is_none() => {
            format!("Ignored: set the start date before {field}")
        }
        _ => "Nothing changed".to_string(),
    }
}

fn blocked_message(notice: &str, course: &Course) -> String {
    let fields = course
        .validation()
        .invalid_fields()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    match fields.is_empty() {
        true => notice.to_string(),
        false => format!("{notice} ({})", fields.join(", ")),
    }
}

fn print_course(session: &Session, course: &Course, output_format: ArgOutputFormat) {
    let report = CourseReport::new(course);
    let formatter = CourseFormatter::new(output_format, &session.text);
    println!("{}", formatter.format(&report));
}

fn describe(course: &Course) -> String {
    match (course.start, course.end) {
        (Some(start), Some(end)) => format!(
            "{} ({} to {})",
            course.slug,
            format_date(start),
            format_date(end)
        ),
        _ => course.slug.clone(),
    }
}
