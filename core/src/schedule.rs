// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use jiff::ToSpan;
use jiff::civil::Date;

use crate::Course;
use crate::weekday::sunday_index;

impl Course {
    /// Class meeting dates: every day in `[start, end]` on a selected weekday
    /// that is not a day exception. Empty unless both bounds are set.
    pub fn meeting_dates(&self) -> Vec<Date> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => self.meetings_between(start, end),
            _ => Vec::new(),
        }
    }

    /// Number of weeks, starting on Sunday, in the assignment timeline that
    /// hold at least one meeting. The timeline falls back to the course range.
    pub fn open_weeks(&self) -> usize {
        let from = self.timeline_start.or(self.start);
        let to = self.timeline_end.or(self.end);
        let (Some(from), Some(to)) = (from, to) else {
            return 0;
        };

        self.meetings_between(from, to)
            .into_iter()
            .filter_map(week_start)
            .collect::<BTreeSet<_>>()
            .len()
    }

    fn meetings_between(&self, from: Date, to: Date) -> Vec<Date> {
        if self.weekdays.is_empty() || from > to {
            return Vec::new();
        }

        from.series(1.day())
            .take_while(|d| *d <= to)
            .filter(|d| self.weekdays.contains(d.weekday()))
            .filter(|d| !self.day_exceptions.contains(d))
            .collect()
    }
}

/// The Sunday on or before the date.
fn week_start(date: Date) -> Option<Date> {
    let offset = i64::from(sunday_index(date.weekday()));
    date.checked_sub(offset.days()).ok()
}
