//! Shared request and response types exchanged with the content backend.
//!
//! [`ContentItem`] is the shape returned by the approved-items collection
//! query; [`BulkScheduleRequest`] and [`BulkScheduleResponse`] describe the
//! bulk schedule update call that persists a computed plan.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placement type of a post; decides which posting time applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    #[default]
    Feed,
    Story,
}

impl Slot {
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Feed => "feed",
            Slot::Story => "story",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Photo,
    Video,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Photo => "photo",
            MediaType::Video => "video",
        }
    }
}

/// Identifier of a content item as understood by the backend.
///
/// Numeric ids serialise as JSON numbers, content ids as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Numeric(id) => write!(f, "{id}"),
            ItemId::Text(id) => f.write_str(id),
        }
    }
}

/// One approved piece of media awaiting scheduling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<Slot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl ContentItem {
    /// Key used to order items before distribution: filename, then the raw
    /// file field, then the content id, then the empty string. Empty values
    /// count as missing.
    pub fn display_key(&self) -> &str {
        [&self.filename, &self.file, &self.content_id]
            .into_iter()
            .filter_map(|value| value.as_deref())
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// Backend identifier, preferring the numeric id. Blank content ids count
    /// as missing.
    pub fn item_id(&self) -> Option<ItemId> {
        if let Some(id) = self.id {
            return Some(ItemId::Numeric(id));
        }

        self.content_id
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| ItemId::Text(value.to_string()))
    }

    pub fn slot_or_default(&self) -> Slot {
        self.slot.unwrap_or_default()
    }
}

/// Single entry of a bulk schedule update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkScheduleItem {
    pub id: ItemId,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub slot: Slot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkScheduleRequest {
    pub items: Vec<BulkScheduleItem>,
    pub timezone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkScheduleResponse {
    pub updated: u64,
    pub total: u64,
}

impl BulkScheduleResponse {
    /// Whether the backend accepted every submitted item.
    pub fn is_complete(&self) -> bool {
        self.updated == self.total
    }
}
