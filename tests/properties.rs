use chrono::{Datelike, Duration, NaiveDate, Weekday};
use ordo::{
    CalendarConfig, Locale, MAX_YEAR, MIN_YEAR, easter_sunday, generate_calendar, generate_liturgical_year,
    get_cycles, liturgical_year_bounds, season_ranges,
};
use proptest::prelude::*;

fn any_year() -> impl Strategy<Value = i32> {
    MIN_YEAR + 1..MAX_YEAR
}

fn any_locale() -> impl Strategy<Value = Locale> {
    prop_oneof![Just(Locale::Es), Just(Locale::La)]
}

proptest! {
    #[test]
    fn easter_is_a_sunday_in_its_window(year in 1900..=2200i32) {
        let easter = easter_sunday(year).unwrap();
        prop_assert_eq!(easter.weekday(), Weekday::Sun);
        prop_assert!(easter >= NaiveDate::from_ymd_opt(year, 3, 22).unwrap());
        prop_assert!(easter <= NaiveDate::from_ymd_opt(year, 4, 25).unwrap());
    }

    #[test]
    fn liturgical_years_tile_the_timeline(year in any_year()) {
        let current = liturgical_year_bounds(year).unwrap();
        let next = liturgical_year_bounds(year + 1).unwrap();
        prop_assert_eq!(current.start.weekday(), Weekday::Sun);
        prop_assert_eq!(current.end + Duration::days(1), next.start);
        prop_assert!(matches!(current.days().count(), 364 | 371));
    }

    #[test]
    fn seasons_partition_the_liturgical_year(year in any_year()) {
        let bounds = liturgical_year_bounds(year).unwrap();
        let ranges: Vec<_> = season_ranges(year, &CalendarConfig::default())
            .unwrap()
            .into_iter()
            .filter(|r| !r.is_overlay())
            .collect();
        prop_assert_eq!(ranges.first().unwrap().start, bounds.start);
        prop_assert_eq!(ranges.last().unwrap().end, bounds.end);
        for pair in ranges.windows(2) {
            prop_assert_eq!(pair[0].end + Duration::days(1), pair[1].start);
        }
    }

    #[test]
    fn cycles_repeat(year in any_year()) {
        prop_assert_eq!(get_cycles(year).sunday_cycle, get_cycles(year + 3).sunday_cycle);
        prop_assert_eq!(get_cycles(year).weekday_cycle, get_cycles(year + 2).weekday_cycle);
        prop_assert_ne!(get_cycles(year).weekday_cycle, get_cycles(year + 1).weekday_cycle);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn every_day_has_a_celebration(year in any_year(), locale in any_locale()) {
        let calendar = generate_calendar(year, locale).unwrap();
        let days_in_year = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() { 366 } else { 365 };
        prop_assert_eq!(calendar.len(), days_in_year);
        for day in &calendar {
            prop_assert!(!day.celebrations.is_empty(), "{} is empty", day.date);
            prop_assert!(day.celebrations.iter().all(|c| c.date == day.date));
        }
    }

    #[test]
    fn generation_is_idempotent(year in any_year(), locale in any_locale()) {
        prop_assert_eq!(generate_calendar(year, locale).unwrap(), generate_calendar(year, locale).unwrap());
    }

    #[test]
    fn liturgical_year_carries_one_cycle(year in any_year(), locale in any_locale()) {
        let calendar = generate_liturgical_year(year, locale).unwrap();
        let bounds = liturgical_year_bounds(year).unwrap();
        prop_assert_eq!(calendar.len(), bounds.days().count());
        let cycles = get_cycles(year);
        prop_assert!(calendar.iter().all(|day| day.head().cycles == cycles));
    }
}
