//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{num::NonZeroU32, str::FromStr};

use chrono_tz::Tz;
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use time::Date;
use tracing::level_filters::LevelFilter;

pub use cli::{
    CliArgs, Command, DatesArgs, LoggingOverrides, OutputFormat, PlanArgs, ScheduleOverrides,
};

use crate::domain::{
    calendar::parse_date,
    schedule::{
        DEFAULT_FEED_TIME, DEFAULT_MAX_PER_DAY, DEFAULT_STORY_TIME, DEFAULT_TIMEZONE,
        DEFAULT_WEEKDAYS, ScheduleConfig,
    },
    types::{ViewType, WeekdaySet},
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "postcadence";
const ENV_PREFIX: &str = "POSTCADENCE";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub schedule: ScheduleSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSettings {
    pub view_type: ViewType,
    pub weekdays: WeekdaySet,
    /// `None` means "today" at the time the plan is built.
    pub start_date: Option<Date>,
    pub dates: Vec<Date>,
    pub feed_time: String,
    pub story_time: String,
    pub max_per_day: NonZeroU32,
    pub timezone: Tz,
}

impl ScheduleSettings {
    /// Build a fresh [`ScheduleConfig`] for one planning request.
    pub fn to_config(&self, today: Date) -> ScheduleConfig {
        ScheduleConfig {
            view_type: self.view_type,
            selected_weekdays: self.weekdays,
            start_date: self.start_date.unwrap_or(today),
            selected_dates: self.dates.clone(),
            feed_time: self.feed_time.clone(),
            story_time: self.story_time.clone(),
            max_per_day: self.max_per_day.get(),
            timezone: self.timezone.name().to_string(),
        }
    }

    /// Month view plans only onto explicitly selected dates.
    pub fn ensure_month_dates(&self) -> Result<(), LoadError> {
        if self.view_type == ViewType::Month && self.dates.is_empty() {
            return Err(LoadError::invalid(
                "schedule.dates",
                "month view requires at least one selected date",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("schedule.weekdays")
            .with_list_parse_key("schedule.dates"),
    );

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match &cli.command {
        Command::Plan(args) => {
            raw.apply_schedule_overrides(&args.schedule);
            raw.apply_logging_overrides(&args.logging);
            let settings = Settings::from_raw(raw)?;
            settings.schedule.ensure_month_dates()?;
            Ok(settings)
        }
        Command::Dates(args) => {
            raw.apply_schedule_overrides(&args.schedule);
            raw.apply_logging_overrides(&args.logging);
            Settings::from_raw(raw)
        }
    }
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    schedule: RawScheduleSettings,
}

impl RawSettings {
    fn apply_logging_overrides(&mut self, overrides: &LoggingOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }

    fn apply_schedule_overrides(&mut self, overrides: &ScheduleOverrides) {
        if let Some(view) = overrides.view.as_ref() {
            self.schedule.view = Some(view.clone());
        }
        if let Some(weekdays) = overrides.weekdays.as_ref() {
            self.schedule.weekdays = Some(weekdays.clone());
        }
        if let Some(start) = overrides.start_date.as_ref() {
            self.schedule.start_date = Some(start.clone());
        }
        if let Some(dates) = overrides.dates.as_ref() {
            self.schedule.dates = Some(dates.clone());
        }
        if let Some(time) = overrides.feed_time.as_ref() {
            self.schedule.feed_time = Some(time.clone());
        }
        if let Some(time) = overrides.story_time.as_ref() {
            self.schedule.story_time = Some(time.clone());
        }
        if let Some(max) = overrides.max_per_day {
            self.schedule.max_per_day = Some(max);
        }
        if let Some(timezone) = overrides.timezone.as_ref() {
            self.schedule.timezone = Some(timezone.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings { logging, schedule } = raw;

        let logging = build_logging_settings(logging)?;
        let schedule = build_schedule_settings(schedule)?;

        Ok(Self { logging, schedule })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_schedule_settings(schedule: RawScheduleSettings) -> Result<ScheduleSettings, LoadError> {
    let view_type = match schedule.view {
        Some(view) => ViewType::from_str(&view)
            .map_err(|err| LoadError::invalid("schedule.view", err.to_string()))?,
        None => ViewType::default(),
    };

    let weekdays = match schedule.weekdays {
        Some(indices) => WeekdaySet::from_indices(indices)
            .map_err(|err| LoadError::invalid("schedule.weekdays", err.to_string()))?,
        None => DEFAULT_WEEKDAYS.into_iter().collect(),
    };

    let start_date = schedule
        .start_date
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(parse_date)
        .transpose()
        .map_err(|err| LoadError::invalid("schedule.start_date", err.to_string()))?;

    let dates = schedule
        .dates
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(parse_date)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| LoadError::invalid("schedule.dates", err.to_string()))?;

    let feed_time = non_blank(schedule.feed_time, DEFAULT_FEED_TIME, "schedule.feed_time")?;
    let story_time = non_blank(schedule.story_time, DEFAULT_STORY_TIME, "schedule.story_time")?;

    let max_per_day = non_zero_u32(
        schedule.max_per_day.unwrap_or(DEFAULT_MAX_PER_DAY.into()),
        "schedule.max_per_day",
    )?;

    let timezone_name = schedule
        .timezone
        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
    let timezone = Tz::from_str(timezone_name.trim()).map_err(|err| {
        LoadError::invalid(
            "schedule.timezone",
            format!("unknown timezone `{timezone_name}`: {err}"),
        )
    })?;

    Ok(ScheduleSettings {
        view_type,
        weekdays,
        start_date,
        dates,
        feed_time,
        story_time,
        max_per_day,
        timezone,
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawScheduleSettings {
    view: Option<String>,
    weekdays: Option<Vec<u8>>,
    start_date: Option<String>,
    dates: Option<Vec<String>>,
    feed_time: Option<String>,
    story_time: Option<String>,
    max_per_day: Option<u64>,
    timezone: Option<String>,
}

fn non_blank(
    value: Option<String>,
    default: &str,
    key: &'static str,
) -> Result<String, LoadError> {
    match value {
        None => Ok(default.to_string()),
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(LoadError::invalid(key, "must not be empty"))
            } else {
                Ok(trimmed.to_string())
            }
        }
    }
}

fn non_zero_u32(value: u64, key: &'static str) -> Result<NonZeroU32, LoadError> {
    if value == 0 {
        return Err(LoadError::invalid(key, "must be greater than zero"));
    }
    let value_u32: u32 = value
        .try_into()
        .map_err(|_| LoadError::invalid(key, "value exceeds supported range for u32"))?;
    NonZeroU32::new(value_u32).ok_or_else(|| LoadError::invalid(key, "must be greater than zero"))
}
