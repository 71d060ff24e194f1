// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Training status rows built from a module list as served to the student drawer.

use coursedate_core::{DefaultText, ModuleState, TrainingModule, training_rows};
use jiff::civil::date;
use jiff::tz::TimeZone;

const MODULES: &str = r#"[
  {
    "id": 1,
    "module_name": "Wikipedia Essentials",
    "kind": "training",
    "due_date": "2024-01-15",
    "completion_date": "2024-01-12T18:30:00Z",
    "completion_time": 1805,
    "status": "Complete"
  },
  {
    "id": 2,
    "module_name": "Evaluating Articles",
    "kind": "exercise",
    "due_date": "2024-01-20"
  },
  {
    "id": 3,
    "module_name": "Editing Basics",
    "kind": "training",
    "due_date": "2024-01-22",
    "status": "Not started"
  },
  {
    "id": 4,
    "module_name": "Sandboxes",
    "kind": "training",
    "due_date": "2024-01-08",
    "completion_date": "2024-01-09T08:00:00Z",
    "completion_time": 7200
  },
  {
    "id": 5,
    "module_name": "Peer Review Quiz",
    "kind": "quiz",
    "due_date": "2024-01-10"
  },
  {
    "id": 6,
    "module_name": "Untyped Module",
    "due_date": "2024-01-10"
  }
]"#;

#[test]
fn rows_for_student_drawer() {
    let modules: Vec<TrainingModule> = serde_json::from_str(MODULES).unwrap();
    let now = date(2024, 1, 18)
        .at(9, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap();

    let rows = training_rows(&modules, &now, &DefaultText);
    assert_eq!(
        rows.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![1, 3, 4],
        "exercises, unknown and missing kinds are not listed"
    );

    let essentials = &rows[0];
    assert_eq!(essentials.due_by, "Due by Jan 15th, 2024");
    assert!(!essentials.late);
    assert_eq!(
        essentials.state,
        ModuleState::Completed {
            completed_at: "Completed at: 2024-01-12   6:30 PM".to_string(),
            completion_time: Some("Completion time: 30 minutes 05 seconds".to_string()),
        }
    );

    let basics = &rows[1];
    assert!(!basics.late, "not due yet");
    assert_eq!(
        basics.state,
        ModuleState::Pending {
            status: Some("Not started".to_string())
        }
    );

    let sandboxes = &rows[2];
    assert!(sandboxes.late, "finished the day after it was due");
    assert!(matches!(
        sandboxes.state,
        ModuleState::Completed {
            completion_time: None,
            ..
        }
    ));
}

#[test]
fn rows_shown_in_configured_zone() {
    let modules: Vec<TrainingModule> = serde_json::from_str(MODULES).unwrap();
    let tz = TimeZone::fixed(jiff::tz::offset(-5));
    let now = date(2024, 1, 18).at(9, 0, 0, 0).to_zoned(tz).unwrap();

    let rows = training_rows(&modules[..1], &now, &DefaultText);
    assert!(matches!(
        &rows[0].state,
        ModuleState::Completed { completed_at, .. } if completed_at.ends_with("1:30 PM")
    ));
}
