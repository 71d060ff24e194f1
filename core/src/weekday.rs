// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use jiff::civil::Weekday;
use serde::de;

use crate::CourseDateError;

/// The set of weekdays on which course sessions take place.
///
/// Indices follow the course calendar: 0 is Sunday, 6 is Saturday. The textual
/// form is a seven character bitmap, `"0101000"` selects Monday and Wednesday.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

const ALL_DAYS: u8 = 0b111_1111;

impl WeekdaySet {
    /// The empty selection.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from weekday indices, indices above 6 are ignored.
    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> Self {
        indices
            .into_iter()
            .filter(|i| *i < 7)
            .fold(Self::empty(), |set, i| Self(set.0 | (1 << i)))
    }

    pub fn is_empty(&self) -> bool {
        self.0 & ALL_DAYS == 0
    }

    pub fn len(&self) -> usize {
        (self.0 & ALL_DAYS).count_ones() as usize
    }

    pub fn contains_index(&self, index: u8) -> bool {
        index < 7 && self.0 & (1 << index) != 0
    }

    /// Whether sessions take place on the given weekday.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.contains_index(sunday_index(weekday))
    }

    /// Returns a copy with the weekday at `index` flipped.
    #[must_use]
    pub fn toggled(self, index: u8) -> Self {
        if index < 7 {
            Self(self.0 ^ (1 << index))
        } else {
            self
        }
    }

    /// The selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        (0..7).filter(|i| self.contains_index(*i))
    }
}

pub(crate) fn sunday_index(weekday: Weekday) -> u8 {
    // to_sunday_zero_offset is always within 0..=6
    weekday.to_sunday_zero_offset().unsigned_abs()
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..7 {
            f.write_str(if self.contains_index(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for WeekdaySet {
    type Err = CourseDateError;

    /// Accepts the seven character bitmap or a comma separated index list (`"1,3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CourseDateError::InvalidWeekday {
            value: s.to_string(),
        };

        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::empty());
        }

        if s.len() == 7 && s.bytes().all(|b| b == b'0' || b == b'1') {
            let indices = s
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'1')
                .map(|(i, _)| i as u8);
            return Ok(Self::from_indices(indices));
        }

        s.split(',')
            .map(|part| match part.trim().parse::<u8>() {
                Ok(i) if i < 7 => Ok(i),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_indices)
    }
}

impl serde::Serialize for WeekdaySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for WeekdaySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct WeekdayVisitor;

        impl<'de> de::Visitor<'de> for WeekdayVisitor {
            type Value = WeekdaySet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a weekday bitmap like "0101000" or a list of indices"#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut indices = Vec::new();
                while let Some(i) = seq.next_element::<u8>()? {
                    if i >= 7 {
                        return Err(de::Error::custom(format!("weekday index out of range: {i}")));
                    }
                    indices.push(i);
                }
                Ok(WeekdaySet::from_indices(indices))
            }
        }

        deserializer.deserialize_any(WeekdayVisitor)
    }
}
