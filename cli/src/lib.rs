// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of the course date wizard.

mod cli;
mod cmd_course;
mod cmd_generate_completion;
mod cmd_training;
mod config;
mod course_formatter;
mod session;
mod store;
mod table;
mod training_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
