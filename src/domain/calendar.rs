//! Calendar formatting helpers shared by the scheduling engine.
//!
//! Dates and times are opaque local wall-clock values: nothing here converts
//! between timezones or performs arithmetic on times of day.

use time::{Date, format_description::FormatItem, macros::format_description};

use super::error::DomainError;

pub const DATE_KEY_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month padding:zero]-[day padding:zero]");
pub const DAY_LABEL_FORMAT: &[FormatItem<'static>] =
    format_description!("[weekday repr:short] [day padding:none] [month repr:short] [year]");

/// `YYYY-MM-DD` key for a calendar date.
pub fn format_date(date: Date) -> String {
    date.format(DATE_KEY_FORMAT).expect("valid calendar date")
}

/// Human label such as `Mon 1 Dec 2025`.
pub fn format_day_label(date: Date) -> String {
    date.format(DAY_LABEL_FORMAT).expect("valid calendar date")
}

pub fn parse_date(input: &str) -> Result<Date, DomainError> {
    let trimmed = input.trim();
    Date::parse(trimmed, DATE_KEY_FORMAT).map_err(|_| DomainError::invalid_date(trimmed))
}

/// Normalise a posting time to `HH:MM:SS`.
///
/// `HH:MM` gains a `:00` seconds suffix, `HH:MM:SS` is returned unchanged and
/// any other text is passed through verbatim.
pub fn format_time(value: &str) -> String {
    if is_hour_minute(value) {
        format!("{value}:00")
    } else {
        value.to_string()
    }
}

fn is_hour_minute(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4]
            .into_iter()
            .all(|index| bytes[index].is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn format_date_zero_pads() {
        assert_eq!(format_date(date!(2025 - 03 - 07)), "2025-03-07");
    }

    #[test]
    fn format_day_label_includes_weekday() {
        assert_eq!(format_day_label(date!(2025 - 12 - 01)), "Mon 1 Dec 2025");
    }

    #[test]
    fn parse_date_accepts_padded_input() {
        assert_eq!(parse_date(" 2025-12-05 "), Ok(date!(2025 - 12 - 05)));
    }

    #[test]
    fn parse_date_rejects_other_layouts() {
        assert_eq!(
            parse_date("05/12/2025"),
            Err(DomainError::invalid_date("05/12/2025"))
        );
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn format_time_appends_seconds_to_hour_minute() {
        assert_eq!(format_time("20:00"), "20:00:00");
        assert_eq!(format_time("18:30:15"), "18:30:15");
    }

    #[test]
    fn format_time_passes_unrecognised_values_through() {
        assert_eq!(format_time("8pm"), "8pm");
        assert_eq!(format_time("9:30"), "9:30");
        assert_eq!(format_time(""), "");
    }
}
