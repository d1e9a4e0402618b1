//! Command handlers invoked by the binary once settings are resolved.

use time::Date;
use tracing::{info, warn};

use crate::{
    application::{error::AppError, output::render_plan, planner},
    config::{DatesArgs, PlanArgs, Settings},
    domain::{calendar::format_date, schedule::generate_date_sequence},
    infra::items::{load_items, write_output},
};

/// Plan the items listed in `args.items` and write the requested output.
pub fn execute_plan(settings: &Settings, args: &PlanArgs, today: Date) -> Result<(), AppError> {
    let items = load_items(&args.items)?;
    let config = settings.schedule.to_config(today);
    let plan = planner::plan(&config, &items);

    let rendered = render_plan(&plan, args.format)?;
    write_output(args.output.as_deref(), &rendered)?;

    info!(
        target = "application::commands::execute_plan",
        items = %args.items.display(),
        format = ?args.format,
        scheduled = plan.summary.scheduled,
        overflow = plan.summary.overflow,
        "plan written"
    );

    Ok(())
}

/// Print the dates the weekly pattern yields for `args.count` items.
pub fn execute_dates(settings: &Settings, args: &DatesArgs, today: Date) -> Result<(), AppError> {
    let config = settings.schedule.to_config(today);
    let dates = generate_date_sequence(
        config.start_date,
        config.selected_weekdays,
        args.count,
        config.max_per_day,
    );

    let needed = args.count.div_ceil(config.max_per_day.max(1) as usize);
    if dates.len() < needed {
        warn!(
            target = "application::commands::execute_dates",
            needed,
            found = dates.len(),
            "weekly pattern cannot supply enough dates within the lookahead window"
        );
    }

    if !dates.is_empty() {
        let lines: Vec<String> = dates.into_iter().map(format_date).collect();
        write_output(None, &lines.join("\n"))?;
    }

    Ok(())
}
