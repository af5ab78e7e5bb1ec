//! Deterministic day-of-year fact selection
//!
//! Maps the current calendar date onto an index into the seeded fact list.
//! Pure function of the wall-clock date and the fact count: no persisted
//! "today" pointer, no randomness, no admin rotation. Adding or removing
//! facts shifts the mapping for future days; that is accepted behavior.

use chrono::{Datelike, NaiveDate};

/// Index of today's fact within the insertion-ordered fact list.
///
/// Computed as `day_of_year mod fact_count`, where day-of-year is 1-based
/// (Jan 1 = 1, Dec 31 = 365 or 366). Leap day wraps naturally via modulo.
/// Returns `None` only when the fact list is empty.
pub fn fact_index(date: NaiveDate, fact_count: usize) -> Option<usize> {
    if fact_count == 0 {
        return None;
    }
    Some(date.ordinal() as usize % fact_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_fact_list_selects_nothing() {
        assert_eq!(fact_index(date(2024, 6, 1), 0), None);
    }

    #[test]
    fn test_single_fact_always_selected() {
        assert_eq!(fact_index(date(2024, 1, 1), 1), Some(0));
        assert_eq!(fact_index(date(2024, 7, 19), 1), Some(0));
        assert_eq!(fact_index(date(2024, 12, 31), 1), Some(0));
    }

    #[test]
    fn test_same_date_is_deterministic() {
        let d = date(2025, 3, 14);
        let first = fact_index(d, 50);
        for _ in 0..10 {
            assert_eq!(fact_index(d, 50), first);
        }
    }

    #[test]
    fn test_index_stays_in_range() {
        for count in 1..=60 {
            let mut d = date(2024, 1, 1);
            while d.year() == 2024 {
                let idx = fact_index(d, count).unwrap();
                assert!(idx < count, "index {} out of range for count {}", idx, count);
                d = d.succ_opt().unwrap();
            }
        }
    }

    #[test]
    fn test_day_three_of_two_facts_selects_second() {
        // Jan 3 has day-of-year 3; 3 mod 2 = 1
        assert_eq!(fact_index(date(2024, 1, 3), 2), Some(1));
    }

    #[test]
    fn test_leap_day_wraps_via_modulo() {
        // Dec 31 of a leap year is day 366
        let leap_end = date(2024, 12, 31);
        assert_eq!(leap_end.ordinal(), 366);
        assert_eq!(fact_index(leap_end, 50), Some(366 % 50));
    }
}
