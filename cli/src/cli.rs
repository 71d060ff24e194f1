// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use coursedate_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_course::{
    CmdClear, CmdConfirm, CmdException, CmdNew, CmdSet, CmdShow, CmdWeekday,
};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_training::CmdTraining;
use crate::config::parse_config;
use crate::session::Session;

/// Run the coursedate command-line interface.
pub fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run() {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Pick the dates of a course: range, assignment timeline, meeting days and holidays.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/coursedate/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/coursedate/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdNew::command())
            .subcommand(CmdShow::command())
            .subcommand(CmdSet::command())
            .subcommand(CmdClear::command())
            .subcommand(CmdException::command())
            .subcommand(CmdWeekday::command())
            .subcommand(CmdConfirm::command())
            .subcommand(CmdTraining::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdNew::NAME, matches)) => New(CmdNew::from(matches)),
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)),
            Some((CmdSet::NAME, matches)) => Set(CmdSet::from(matches)),
            Some((CmdClear::NAME, matches)) => Clear(CmdClear::from(matches)),
            Some((CmdException::NAME, matches)) => Exception(CmdException::from(matches)),
            Some((CmdWeekday::NAME, matches)) => Weekday(CmdWeekday::from(matches)),
            Some((CmdConfirm::NAME, matches)) => Confirm(CmdConfirm::from(matches)),
            Some((CmdTraining::NAME, matches)) => Training(CmdTraining::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Start a new course draft
    New(CmdNew),

    /// Show the dates of a course
    Show(CmdShow),

    /// Set a field of a course
    Set(CmdSet),

    /// Clear a date of a course
    Clear(CmdClear),

    /// Toggle a class holiday
    Exception(CmdException),

    /// Toggle a meeting day
    Weekday(CmdWeekday),

    /// Confirm the dates of a course
    Confirm(CmdConfirm),

    /// Show training status
    Training(CmdTraining),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            New(a)       => Self::run_with(config, |x| a.run(x)),
            Show(a)      => Self::run_with(config, |x| a.run(x)),
            Set(a)       => Self::run_with(config, |x| a.run(x)),
            Clear(a)     => Self::run_with(config, |x| a.run(x)),
            Exception(a) => Self::run_with(config, |x| a.run(x)),
            Weekday(a)   => Self::run_with(config, |x| a.run(x)),
            Confirm(a)   => Self::run_with(config, |x| a.run(x)),
            Training(a)  => Self::run_with(config, |x| a.run(x)),
            GenerateCompletion(a) => a.run(),
        }
    }

    fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&mut Session) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let mut core_config = parse_config(config)?;
        core_config.normalize()?;
        let mut session = Session::new(&core_config)?;
        f(&mut session)
    }
}
