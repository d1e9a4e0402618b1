use std::collections::HashMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

use super::ScheduledItem;

/// Scheduled items keyed by `YYYY-MM-DD`, in first-seen key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateGroups {
    groups: Vec<(String, Vec<ScheduledItem>)>,
}

impl DateGroups {
    pub fn get(&self, date: &str) -> Option<&[ScheduledItem]> {
        self.groups
            .iter()
            .find(|(key, _)| key == date)
            .map(|(_, items)| items.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScheduledItem])> {
        self.groups
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Reorder the groups by date key. `YYYY-MM-DD` keys sort chronologically.
    pub fn into_chronological(mut self) -> Self {
        self.groups.sort_by(|(left, _), (right, _)| left.cmp(right));
        self
    }
}

impl Serialize for DateGroups {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, items) in &self.groups {
            map.serialize_entry(key, items)?;
        }
        map.end()
    }
}

/// Group items by their scheduled date without reordering anything.
pub fn group_by_date(items: &[ScheduledItem]) -> DateGroups {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<ScheduledItem>)> = Vec::new();

    for item in items {
        let key = item.scheduled_date.as_str();
        match positions.get(key) {
            Some(&index) => groups[index].1.push(item.clone()),
            None => {
                positions.insert(key, groups.len());
                groups.push((key.to_string(), vec![item.clone()]));
            }
        }
    }

    DateGroups { groups }
}
