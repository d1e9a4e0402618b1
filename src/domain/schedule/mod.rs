//! Content distribution engine: date sequences, slot assignment and grouping.

mod dates;
mod distribute;
mod group;

use serde::Serialize;
use time::{Date, Weekday};

pub use dates::{MAX_LOOKAHEAD_DAYS, generate_date_sequence};
pub use distribute::{SYNTHETIC_ID_PREFIX, distribute};
pub use group::{DateGroups, group_by_date};

use super::types::{ContentItem, ItemId, MediaType, Slot, ViewType, WeekdaySet};

pub const DEFAULT_FEED_TIME: &str = "20:00";
pub const DEFAULT_STORY_TIME: &str = "18:30";
pub const DEFAULT_MAX_PER_DAY: u32 = 2;
pub const DEFAULT_WEEKDAYS: [Weekday; 3] = [Weekday::Monday, Weekday::Wednesday, Weekday::Friday];
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Caller-held scheduling preferences.
///
/// The timezone is a display label only; dates and times are treated as local
/// wall-clock values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub view_type: ViewType,
    pub selected_weekdays: WeekdaySet,
    pub start_date: Date,
    /// Explicit dates, consulted only in [`ViewType::Month`].
    pub selected_dates: Vec<Date>,
    pub feed_time: String,
    pub story_time: String,
    pub max_per_day: u32,
    pub timezone: String,
}

impl ScheduleConfig {
    /// Fresh configuration with the default posting pattern (Mon/Wed/Fri,
    /// feed at 20:00, stories at 18:30, two items per day) starting on `today`.
    pub fn new(today: Date) -> Self {
        Self {
            view_type: ViewType::Week,
            selected_weekdays: DEFAULT_WEEKDAYS.into_iter().collect(),
            start_date: today,
            selected_dates: Vec::new(),
            feed_time: DEFAULT_FEED_TIME.to_string(),
            story_time: DEFAULT_STORY_TIME.to_string(),
            max_per_day: DEFAULT_MAX_PER_DAY,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// A content item bound to a date, time and slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledItem {
    pub id: ItemId,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    /// `YYYY-MM-DD`.
    pub scheduled_date: String,
    /// `HH:MM:SS` when the configured time was recognisable.
    pub scheduled_time: String,
    pub slot: Slot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DistributionResult {
    pub scheduled: Vec<ScheduledItem>,
    /// Items left without a slot, in distribution order.
    pub overflow: Vec<ContentItem>,
    pub total_slots: usize,
}

impl DistributionResult {
    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    pub fn free_slots(&self) -> usize {
        self.total_slots.saturating_sub(self.scheduled.len())
    }
}

/// Per-day capacity; zero is floored to one.
pub(crate) fn effective_capacity(max_per_day: u32) -> usize {
    max_per_day.max(1) as usize
}
