//! Turns a [`ScheduleConfig`] and a batch of approved items into a plan.

use postcadence_api_types::{BulkScheduleItem, BulkScheduleRequest};
use serde::Serialize;
use time::Date;
use tracing::{info, warn};

use crate::domain::{
    calendar::format_date,
    schedule::{
        DateGroups, DistributionResult, ScheduleConfig, ScheduledItem, distribute,
        generate_date_sequence, group_by_date,
    },
    types::{ContentItem, ViewType},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub requested: usize,
    pub scheduled: usize,
    pub overflow: usize,
    pub total_slots: usize,
    pub dates_used: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<String>,
    pub unidentified: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulePlan {
    pub timezone: String,
    pub summary: PlanSummary,
    #[serde(flatten)]
    pub result: DistributionResult,
}

impl SchedulePlan {
    pub fn grouped(&self) -> DateGroups {
        group_by_date(&self.result.scheduled)
    }

    pub fn bulk_request(&self) -> BulkScheduleRequest {
        bulk_request(&self.result.scheduled, &self.timezone)
    }
}

/// Candidate dates for the configured view.
///
/// Week view walks the weekly pattern from the start date, month view uses the
/// explicitly selected dates in ascending order.
pub fn resolve_dates(config: &ScheduleConfig, item_count: usize) -> Vec<Date> {
    match config.view_type {
        ViewType::Week => generate_date_sequence(
            config.start_date,
            config.selected_weekdays,
            item_count,
            config.max_per_day,
        ),
        ViewType::Month => {
            let mut dates = config.selected_dates.clone();
            dates.sort_unstable();
            dates.dedup();
            dates
        }
    }
}

pub fn plan(config: &ScheduleConfig, items: &[ContentItem]) -> SchedulePlan {
    let dates = resolve_dates(config, items.len());
    let result = distribute(
        items,
        &dates,
        &config.feed_time,
        &config.story_time,
        config.max_per_day,
    );

    let summary = PlanSummary {
        requested: items.len(),
        scheduled: result.scheduled.len(),
        overflow: result.overflow.len(),
        total_slots: result.total_slots,
        dates_used: count_dates_used(&result.scheduled),
        first_date: dates.first().copied().map(format_date),
        last_date: dates.last().copied().map(format_date),
        unidentified: items.iter().filter(|item| item.item_id().is_none()).count(),
    };

    info!(
        target = "application::planner::plan",
        view = %config.view_type,
        requested = summary.requested,
        scheduled = summary.scheduled,
        overflow = summary.overflow,
        total_slots = summary.total_slots,
        candidate_dates = dates.len(),
        "schedule planned"
    );

    if result.has_overflow() {
        warn!(
            target = "application::planner::plan",
            overflow = summary.overflow,
            total_slots = summary.total_slots,
            "not enough capacity for every item"
        );
    }

    if summary.unidentified > 0 {
        warn!(
            target = "application::planner::plan",
            unidentified = summary.unidentified,
            "items without id or content_id received synthetic identifiers"
        );
    }

    SchedulePlan {
        timezone: config.timezone.clone(),
        summary,
        result,
    }
}

/// Map scheduled items onto a bulk schedule update, preserving order.
pub fn bulk_request(scheduled: &[ScheduledItem], timezone: &str) -> BulkScheduleRequest {
    BulkScheduleRequest {
        items: scheduled
            .iter()
            .map(|item| BulkScheduleItem {
                id: item.id.clone(),
                scheduled_date: item.scheduled_date.clone(),
                scheduled_time: item.scheduled_time.clone(),
                slot: item.slot,
            })
            .collect(),
        timezone: timezone.to_string(),
    }
}

fn count_dates_used(scheduled: &[ScheduledItem]) -> usize {
    let mut days: Vec<&str> = scheduled
        .iter()
        .map(|item| item.scheduled_date.as_str())
        .collect();
    days.dedup();
    days.len()
}
