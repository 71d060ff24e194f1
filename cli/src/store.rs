// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use coursedate_core::{Config as CoreConfig, Course, PersistCourse};

/// Course files on disk: drafts being edited, and confirmed courses.
#[derive(Debug, Clone)]
pub struct CourseStore {
    drafts_dir: PathBuf,
    courses_path: PathBuf,
}

impl CourseStore {
    pub fn new(config: &CoreConfig) -> Result<Self, Box<dyn Error>> {
        let drafts_dir = config
            .drafts_dir
            .clone()
            .ok_or("No drafts directory configured")?;

        Ok(Self {
            drafts_dir,
            courses_path: config.courses_path.clone(),
        })
    }

    /// Creates an empty draft, failing when the course already exists.
    pub fn create(&self, slug: &str, title: Option<String>) -> Result<Course, Box<dyn Error>> {
        check_slug(slug)?;
        if self.draft_path(slug).exists() || self.course_path(slug).exists() {
            return Err(format!("Course '{slug}' already exists").into());
        }

        let course = Course {
            title,
            ..Course::new(slug)
        };
        self.save_draft(&course)?;
        Ok(course)
    }

    /// Loads the draft of a course, starting from the confirmed course when there is no draft.
    pub fn load_draft(&self, slug: &str) -> Result<Course, Box<dyn Error>> {
        check_slug(slug)?;
        for path in [self.draft_path(slug), self.course_path(slug)] {
            match read_course(&path) {
                Ok(course) => {
                    tracing::debug!(path = %path.display(), "loaded course");
                    return Ok(course);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(format!("Failed to read course at {}: {e}", path.display()).into());
                }
            }
        }
        Err(format!("Course '{slug}' not found").into())
    }

    pub fn save_draft(&self, course: &Course) -> Result<(), Box<dyn Error>> {
        check_slug(&course.slug)?;
        let path = self.draft_path(&course.slug);
        write_course(&path, course)?;
        tracing::debug!(path = %path.display(), "saved draft");
        Ok(())
    }

    fn draft_path(&self, slug: &str) -> PathBuf {
        self.drafts_dir.join(format!("{slug}.json"))
    }

    fn course_path(&self, slug: &str) -> PathBuf {
        self.courses_path.join(format!("{slug}.json"))
    }
}

impl PersistCourse for CourseStore {
    fn persist_course(&mut self, slug: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let from = self.draft_path(slug);
        let to = self.course_path(slug);
        fs::create_dir_all(&self.courses_path)?;
        fs::copy(&from, &to)?;
        tracing::info!(from = %from.display(), to = %to.display(), "course confirmed");
        Ok(())
    }
}

fn check_slug(slug: &str) -> Result<(), Box<dyn Error>> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    match valid {
        true => Ok(()),
        false => Err(format!("Invalid course slug '{slug}'").into()),
    }
}

fn read_course(path: &Path) -> io::Result<Course> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_course(path: &Path, course: &Course) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(course)?;
    fs::write(path, content)?;
    Ok(())
}
