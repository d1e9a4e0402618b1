use time::Date;

use super::effective_capacity;
use crate::domain::types::WeekdaySet;

/// Upper bound on days walked while looking for allowed weekdays.
pub const MAX_LOOKAHEAD_DAYS: usize = 365;

/// Produce the ascending dates needed to hold `item_count` items at
/// `max_per_day` per date, keeping only days in `weekdays`.
///
/// The walk starts at `start` and never looks further than
/// [`MAX_LOOKAHEAD_DAYS`] days ahead; when the pattern cannot supply enough
/// dates inside that window the sequence is returned short.
pub fn generate_date_sequence(
    start: Date,
    weekdays: WeekdaySet,
    item_count: usize,
    max_per_day: u32,
) -> Vec<Date> {
    if weekdays.is_empty() || item_count == 0 {
        return Vec::new();
    }

    let needed = item_count.div_ceil(effective_capacity(max_per_day));
    let mut dates = Vec::with_capacity(needed.min(MAX_LOOKAHEAD_DAYS));
    let mut cursor = Some(start);

    for _ in 0..MAX_LOOKAHEAD_DAYS {
        let Some(day) = cursor else {
            break;
        };

        if weekdays.contains(day.weekday()) {
            dates.push(day);
            if dates.len() == needed {
                break;
            }
        }

        cursor = day.next_day();
    }

    dates
}

#[cfg(test)]
mod tests {
    use time::{Duration, Weekday, macros::date};

    use super::*;

    fn weekdays(indices: &[u8]) -> WeekdaySet {
        WeekdaySet::from_indices(indices.iter().copied()).expect("valid weekdays")
    }

    #[test]
    fn mon_wed_fri_pattern_yields_needed_dates() {
        let dates = generate_date_sequence(date!(2025 - 12 - 01), weekdays(&[1, 3, 5]), 5, 2);

        assert_eq!(
            dates,
            vec![
                date!(2025 - 12 - 01),
                date!(2025 - 12 - 03),
                date!(2025 - 12 - 05)
            ]
        );
    }

    #[test]
    fn start_date_is_skipped_when_not_allowed() {
        // 2025-12-02 is a Tuesday.
        let dates = generate_date_sequence(date!(2025 - 12 - 02), weekdays(&[1]), 3, 1);

        assert_eq!(
            dates,
            vec![
                date!(2025 - 12 - 08),
                date!(2025 - 12 - 15),
                date!(2025 - 12 - 22)
            ]
        );
    }

    #[test]
    fn empty_weekdays_or_no_items_yield_nothing() {
        assert!(generate_date_sequence(date!(2025 - 12 - 01), WeekdaySet::empty(), 5, 2).is_empty());
        assert!(generate_date_sequence(date!(2025 - 12 - 01), weekdays(&[1]), 0, 2).is_empty());
    }

    #[test]
    fn zero_capacity_is_treated_as_one_per_day() {
        let dates = generate_date_sequence(date!(2025 - 12 - 01), weekdays(&[0, 1, 2, 3, 4, 5, 6]), 3, 0);
        assert_eq!(dates.len(), 3);
    }

    #[test]
    fn length_never_exceeds_needed_dates() {
        for item_count in 0..20 {
            for max_per_day in 1..5u32 {
                let dates = generate_date_sequence(
                    date!(2025 - 01 - 01),
                    weekdays(&[0, 2, 4, 6]),
                    item_count,
                    max_per_day,
                );
                assert!(dates.len() <= item_count.div_ceil(max_per_day as usize));
            }
        }
    }

    #[test]
    fn lookahead_is_capped_at_one_year() {
        let start = date!(2025 - 01 - 01);
        let dates = generate_date_sequence(start, weekdays(&[3]), 1_000, 1);

        // 2025-01-01 is a Wednesday; 365 days hold 53 Wednesdays.
        assert_eq!(dates.len(), 53);
        let last = *dates.last().expect("at least one date");
        assert!(last - start < Duration::days(MAX_LOOKAHEAD_DAYS as i64));
        assert!(dates.iter().all(|day| day.weekday() == Weekday::Wednesday));
    }

    #[test]
    fn output_is_strictly_ascending() {
        let dates = generate_date_sequence(date!(2025 - 12 - 29), weekdays(&[1, 2, 3, 4, 5]), 40, 3);

        assert_eq!(dates.len(), 14);
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn walk_stops_at_the_last_representable_date() {
        let dates = generate_date_sequence(Date::MAX, weekdays(&[0, 1, 2, 3, 4, 5, 6]), 10, 1);
        assert_eq!(dates, vec![Date::MAX]);
    }
}
