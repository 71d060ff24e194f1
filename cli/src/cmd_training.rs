// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use coursedate_core::{TrainingModule, training_rows};

use crate::session::Session;
use crate::training_formatter::TrainingFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdTraining {
    pub path: PathBuf,
    pub output_format: ArgOutputFormat,
}

impl CmdTraining {
    pub const NAME: &str = "training";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the training status of a student")
            .long_about(
                "\
Show the training status of a student. The file holds a JSON array of training modules, \
modules of other kinds are skipped.",
            )
            .arg(
                arg!(path: <FILE> "Path to the training modules")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: matches
                .get_one::<PathBuf>("path")
                .cloned()
                .unwrap_or_default(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing training status...");
        let modules = read_modules(&self.path)?;
        let rows = training_rows(&modules, &session.now(), &session.text);
        tracing::debug!(
            modules = modules.len(),
            rows = rows.len(),
            "built training rows"
        );

        let formatter = TrainingFormatter::new(self.output_format, &session.text);
        println!("{}", formatter.format(&rows));
        Ok(())
    }
}

fn read_modules(path: &Path) -> Result<Vec<TrainingModule>, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read training modules at {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Invalid training modules at {}: {e}", path.display()).into())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_training() {
        let cmd = Command::new("test").subcommand(CmdTraining::command());
        let matches = cmd
            .try_get_matches_from(["test", "training", "modules.json", "--output-format", "json"])
            .unwrap();
        let sub = matches.subcommand_matches(CmdTraining::NAME).unwrap();
        let parsed = CmdTraining::from(sub);
        assert_eq!(parsed.path, PathBuf::from("modules.json"));
        assert_eq!(parsed.output_format, ArgOutputFormat::Json);
    }

    #[test]
    fn test_read_modules() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("modules.json");
        fs::write(
            &path,
            r#"[
  { "id": 1, "module_name": "Essentials", "kind": "training", "due_date": "2024-01-15" },
  { "id": 2, "module_name": "Reflect", "kind": "exercise", "due_date": "2024-01-20" }
]"#,
        )
        .unwrap();

        let modules = read_modules(&path).unwrap();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].module_name, "Essentials");
    }

    #[test]
    fn test_read_modules_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("modules.json");
        fs::write(&path, "not json").unwrap();

        let err = read_modules(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid training modules"));
    }
}
