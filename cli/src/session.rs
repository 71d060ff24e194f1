// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use coursedate_core::{Config as CoreConfig, TextTable};
use jiff::{Timestamp, Zoned, tz::TimeZone};

use crate::store::CourseStore;

/// What a command needs from the configuration.
#[derive(Debug)]
pub struct Session {
    pub store: CourseStore,
    pub text: TextTable,
    pub time_zone: TimeZone,
}

impl Session {
    pub fn new(config: &CoreConfig) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            store: CourseStore::new(config)?,
            text: config.text_table(),
            time_zone: config.time_zone()?,
        })
    }

    /// The current time in the configured time zone.
    pub fn now(&self) -> Zoned {
        Timestamp::now().to_zoned(self.time_zone.clone())
    }
}
