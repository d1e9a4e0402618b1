//! Encodes a [`SchedulePlan`] in the representation requested on the command line.

use crate::{
    application::{error::AppError, planner::SchedulePlan},
    config::OutputFormat,
    infra::error::InfraError,
    presentation::preview::render_preview,
};

pub fn render_plan(plan: &SchedulePlan, format: OutputFormat) -> Result<String, AppError> {
    let rendered = match format {
        OutputFormat::Json => to_pretty_json(plan)?,
        OutputFormat::Bulk => to_pretty_json(&plan.bulk_request())?,
        OutputFormat::Grouped => to_pretty_json(&plan.grouped())?,
        OutputFormat::Preview => render_preview(plan)?,
    };
    Ok(rendered)
}

fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| AppError::from(InfraError::Encode(err)))
}
