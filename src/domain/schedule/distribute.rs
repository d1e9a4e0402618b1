use time::Date;

use super::{DistributionResult, ScheduledItem, effective_capacity};
use crate::domain::{
    calendar::{format_date, format_time},
    types::{ContentItem, ItemId, Slot},
};

/// Prefix of identifiers assigned to items that carry neither an id nor a
/// content id.
pub const SYNTHETIC_ID_PREFIX: &str = "unidentified:";

/// Assign items to dates in a fixed, reproducible order.
///
/// Items are stably sorted by [`ContentItem::display_key`] and dates
/// ascending (duplicates collapse to one date). Each date then receives up to
/// `max_per_day` items in sorted order; whatever does not fit is returned as
/// overflow, so an empty date list overflows the whole batch. Story items take
/// `story_time`, everything else `feed_time`.
pub fn distribute(
    items: &[ContentItem],
    dates: &[Date],
    feed_time: &str,
    story_time: &str,
    max_per_day: u32,
) -> DistributionResult {
    let capacity = effective_capacity(max_per_day);

    let mut dates = dates.to_vec();
    dates.sort_unstable();
    dates.dedup();

    let total_slots = dates.len().saturating_mul(capacity);

    if items.is_empty() {
        return DistributionResult {
            scheduled: Vec::new(),
            overflow: Vec::new(),
            total_slots,
        };
    }

    let mut ordered: Vec<&ContentItem> = items.iter().collect();
    ordered.sort_by(|left, right| left.display_key().cmp(right.display_key()));

    let feed_time = format_time(feed_time);
    let story_time = format_time(story_time);

    let mut queue = ordered.into_iter().enumerate();
    let mut scheduled = Vec::with_capacity(items.len().min(total_slots));

    'dates: for date in &dates {
        let day = format_date(*date);
        for _ in 0..capacity {
            let Some((position, item)) = queue.next() else {
                break 'dates;
            };

            let slot = item.slot_or_default();
            let time = match slot {
                Slot::Story => &story_time,
                Slot::Feed => &feed_time,
            };

            scheduled.push(ScheduledItem {
                id: resolve_id(item, position),
                filename: item.display_key().to_string(),
                media_url: item.media_url.clone(),
                scheduled_date: day.clone(),
                scheduled_time: time.clone(),
                slot,
                media_type: item.media_type,
            });
        }
    }

    let overflow = queue.map(|(_, item)| item.clone()).collect();

    DistributionResult {
        scheduled,
        overflow,
        total_slots,
    }
}

/// Item id, or a synthetic key built from the display key and the item's
/// position in sorted order.
fn resolve_id(item: &ContentItem, position: usize) -> ItemId {
    item.item_id().unwrap_or_else(|| {
        ItemId::Text(format!(
            "{SYNTHETIC_ID_PREFIX}{}#{position}",
            item.display_key()
        ))
    })
}
