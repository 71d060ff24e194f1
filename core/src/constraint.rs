// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::{Course, DateField, RangePosition};

/// The selectable range of a dependent date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FieldConstraint {
    /// Whether the field accepts input at all.
    pub enabled: bool,

    /// Earliest selectable date, if bounded.
    pub min: Option<Date>,

    /// Latest selectable date, if bounded.
    pub max: Option<Date>,
}

impl FieldConstraint {
    const DISABLED: FieldConstraint = FieldConstraint {
        enabled: false,
        min: None,
        max: None,
    };

    const UNCONSTRAINED: FieldConstraint = FieldConstraint {
        enabled: true,
        min: None,
        max: None,
    };

    /// Whether the date may be picked for this field.
    pub fn allows(&self, date: Date) -> bool {
        self.enabled && RangePosition::of(date, self.min, self.max) == RangePosition::InRange
    }
}

/// Constraints for the fields that depend on the course start, used to gray
/// out or restrict date pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DateConstraints {
    /// Course end, never before start.
    pub end: FieldConstraint,

    /// Timeline start, within the course range.
    pub timeline_start: FieldConstraint,

    /// Timeline end, within the course range.
    pub timeline_end: FieldConstraint,
}

impl DateConstraints {
    /// The constraint for any date field, the course start is always enabled.
    pub fn get(&self, field: DateField) -> FieldConstraint {
        match field {
            DateField::Start => FieldConstraint::UNCONSTRAINED,
            DateField::End => self.end,
            DateField::TimelineStart => self.timeline_start,
            DateField::TimelineEnd => self.timeline_end,
        }
    }
}

impl Course {
    /// Derives the selectable ranges of the dependent date fields.
    ///
    /// Every dependent field is disabled while the course has no start.
    pub fn constraints(&self) -> DateConstraints {
        let Some(start) = self.start else {
            return DateConstraints {
                end: FieldConstraint::DISABLED,
                timeline_start: FieldConstraint::DISABLED,
                timeline_end: FieldConstraint::DISABLED,
            };
        };

        let timeline = FieldConstraint {
            enabled: true,
            min: Some(start),
            max: self.end,
        };
        DateConstraints {
            end: FieldConstraint {
                enabled: true,
                min: Some(start),
                max: None,
            },
            timeline_start: timeline,
            timeline_end: timeline,
        }
    }
}
