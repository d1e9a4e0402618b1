use askama::{Error as AskamaError, Template};
use thiserror::Error;

use crate::{
    application::planner::SchedulePlan,
    domain::calendar::{format_day_label, parse_date},
};

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(public_message: &'static str, error: AskamaError) -> Self {
        Self {
            public_message,
            error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreviewEntryView {
    pub time: String,
    pub slot: String,
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct PreviewDayView {
    pub key: String,
    pub label: String,
    pub entries: Vec<PreviewEntryView>,
}

#[derive(Template)]
#[template(path = "preview.txt")]
pub struct PreviewTemplate {
    pub timezone: String,
    pub days: Vec<PreviewDayView>,
    pub overflow: Vec<String>,
    pub requested: usize,
    pub scheduled: usize,
    pub total_slots: usize,
}

impl PreviewTemplate {
    pub fn from_plan(plan: &SchedulePlan) -> Self {
        let days = plan
            .grouped()
            .into_chronological()
            .iter()
            .map(|(key, items)| PreviewDayView {
                key: key.to_string(),
                label: parse_date(key)
                    .map(format_day_label)
                    .unwrap_or_else(|_| key.to_string()),
                entries: items
                    .iter()
                    .map(|item| PreviewEntryView {
                        time: item.scheduled_time.clone(),
                        slot: format!("{:<5}", item.slot.as_str()),
                        filename: item.filename.clone(),
                    })
                    .collect(),
            })
            .collect();

        let overflow = plan
            .result
            .overflow
            .iter()
            .map(|item| item.display_key().to_string())
            .collect();

        Self {
            timezone: plan.timezone.clone(),
            days,
            overflow,
            requested: plan.summary.requested,
            scheduled: plan.summary.scheduled,
            total_slots: plan.summary.total_slots,
        }
    }
}

/// Render a plan as a plain-text calendar, one block per date in date order.
pub fn render_preview(plan: &SchedulePlan) -> Result<String, TemplateRenderError> {
    let rendered = PreviewTemplate::from_plan(plan).render().map_err(|err| {
        TemplateRenderError::new("Failed to render schedule preview", err)
    })?;

    Ok(rendered.trim_end().to_string())
}
