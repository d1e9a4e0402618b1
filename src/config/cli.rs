use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the postcadence binary.
#[derive(Debug, Parser)]
#[command(
    name = "postcadence",
    version,
    about = "Distribute approved content across posting dates"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "POSTCADENCE_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Assign approved items to dates, times and slots.
    Plan(Box<PlanArgs>),
    /// Print the posting dates generated from the weekly pattern.
    Dates(DatesArgs),
}

#[derive(Debug, Args, Clone)]
pub struct PlanArgs {
    /// JSON file holding an array of approved content items.
    #[arg(value_name = "ITEMS", value_hint = ValueHint::FilePath)]
    pub items: PathBuf,

    #[command(flatten)]
    pub schedule: ScheduleOverrides,

    #[command(flatten)]
    pub logging: LoggingOverrides,

    /// Output representation of the plan.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct DatesArgs {
    /// Number of items the dates must hold.
    #[arg(long, value_name = "COUNT")]
    pub count: usize,

    #[command(flatten)]
    pub schedule: ScheduleOverrides,

    #[command(flatten)]
    pub logging: LoggingOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full plan: summary, scheduled items, overflow and capacity.
    Json,
    /// Bulk schedule update request body.
    Bulk,
    /// Scheduled items grouped by date.
    Grouped,
    /// Human-readable calendar preview.
    Preview,
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ScheduleOverrides {
    /// Override the view type (week|month).
    #[arg(long = "view", value_name = "VIEW")]
    pub view: Option<String>,

    /// Override the posting weekdays, Sunday = 0 (e.g. `1,3,5`).
    #[arg(long = "weekdays", value_name = "DAYS", value_delimiter = ',')]
    pub weekdays: Option<Vec<u8>>,

    /// Override the first date considered in week view (YYYY-MM-DD).
    #[arg(long = "start", value_name = "DATE")]
    pub start_date: Option<String>,

    /// Override the explicit dates used in month view (YYYY-MM-DD, comma separated).
    #[arg(long = "dates", value_name = "DATES", value_delimiter = ',')]
    pub dates: Option<Vec<String>>,

    /// Override the feed posting time.
    #[arg(long = "feed-time", value_name = "TIME")]
    pub feed_time: Option<String>,

    /// Override the story posting time.
    #[arg(long = "story-time", value_name = "TIME")]
    pub story_time: Option<String>,

    /// Override the maximum number of items per date.
    #[arg(long = "max-per-day", value_name = "COUNT")]
    pub max_per_day: Option<u64>,

    /// Override the timezone label attached to the plan.
    #[arg(long = "timezone", value_name = "TZ")]
    pub timezone: Option<String>,
}
