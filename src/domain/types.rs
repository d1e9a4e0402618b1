//! Shared domain enumerations and small value types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Weekday;

pub use postcadence_api_types::{ContentItem, ItemId, MediaType, Slot};

use super::error::DomainError;

/// How candidate posting dates are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    /// Dates are generated from a weekly pattern and a start date.
    #[default]
    Week,
    /// Dates are picked explicitly.
    Month,
}

impl ViewType {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewType::Week => "week",
            ViewType::Month => "month",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(ViewType::Week),
            "month" => Ok(ViewType::Month),
            other => Err(DomainError::validation(format!(
                "unknown view type `{other}` (expected `week` or `month`)"
            ))),
        }
    }
}

/// Set of weekdays indexed from Sunday (`0`) to Saturday (`6`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from Sunday-based indices, rejecting anything above `6`.
    pub fn from_indices<I>(indices: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut set = Self::empty();
        for index in indices {
            if index > 6 {
                return Err(DomainError::validation(format!(
                    "weekday index {index} is out of range 0..=6 (Sunday = 0)"
                )));
            }
            set.0 |= 1 << index;
        }
        Ok(set)
    }

    pub fn insert(&mut self, weekday: Weekday) {
        self.0 |= 1 << weekday.number_days_from_sunday();
    }

    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.number_days_from_sunday()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members as Sunday-based indices in ascending order.
    pub fn indices(self) -> Vec<u8> {
        (0..7).filter(|&index| self.0 & (1 << index) != 0).collect()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        let mut set = Self::empty();
        for weekday in iter {
            set.insert(weekday);
        }
        set
    }
}
