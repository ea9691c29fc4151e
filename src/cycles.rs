//! Lectionary cycles.
//!
//! Liturgical years are keyed by the civil year in which they *end*: the
//! liturgical year 2026 runs from the First Sunday of Advent 2025 to the
//! Saturday before the First Sunday of Advent 2026. Cycles are a function of
//! that key alone, so they never change at January 1.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::computus::first_sunday_of_advent;

/// A liturgical year known to read Sunday cycle A.
const SUNDAY_CYCLE_A_YEAR: i32 = 2023;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SundayCycle {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeekdayCycle {
    I,
    II,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cycles {
    pub sunday_cycle: SundayCycle,
    pub weekday_cycle: WeekdayCycle,
}

/// Reading cycles of the liturgical year ending in civil `liturgical_year`.
///
/// The key is the end year, the same key [`liturgical_year_bounds`] takes:
/// `get_cycles(2026)` is the year from Advent 2025, cycle A, weekday year II.
/// Use [`cycles_starting_in`] to key by the year Advent falls in.
///
/// [`liturgical_year_bounds`]: crate::liturgical_year_bounds
pub fn get_cycles(liturgical_year: i32) -> Cycles {
    let sunday_cycle = match (liturgical_year - SUNDAY_CYCLE_A_YEAR).rem_euclid(3) {
        0 => SundayCycle::A,
        1 => SundayCycle::B,
        _ => SundayCycle::C,
    };
    let weekday_cycle = if liturgical_year.rem_euclid(2) == 1 { WeekdayCycle::I } else { WeekdayCycle::II };
    Cycles { sunday_cycle, weekday_cycle }
}

/// Reading cycles of the liturgical year whose first Sunday of Advent falls
/// in civil `start_year`.
pub fn cycles_starting_in(start_year: i32) -> Cycles {
    get_cycles(start_year + 1)
}

/// Key of the liturgical year containing `date`.
pub fn liturgical_year_of(date: NaiveDate) -> i32 {
    match first_sunday_of_advent(date.year()) {
        Some(start) if date >= start => date.year() + 1,
        _ => date.year(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cycles() {
        assert_eq!(get_cycles(2024), Cycles { sunday_cycle: SundayCycle::B, weekday_cycle: WeekdayCycle::II });
        assert_eq!(get_cycles(2025), Cycles { sunday_cycle: SundayCycle::C, weekday_cycle: WeekdayCycle::I });
        assert_eq!(get_cycles(2026), Cycles { sunday_cycle: SundayCycle::A, weekday_cycle: WeekdayCycle::II });
        assert_eq!(get_cycles(2027).sunday_cycle, SundayCycle::B);
    }

    #[test]
    fn start_year_key_is_one_behind_the_end_year_key() {
        assert_eq!(get_cycles(2025), Cycles { sunday_cycle: SundayCycle::C, weekday_cycle: WeekdayCycle::I });
        assert_eq!(
            cycles_starting_in(2025),
            Cycles { sunday_cycle: SundayCycle::A, weekday_cycle: WeekdayCycle::II }
        );
        let advent_2025 = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert_eq!(cycles_starting_in(2025), get_cycles(liturgical_year_of(advent_2025)));
    }

    #[test]
    fn year_key_flips_at_advent_not_january() {
        let before_advent = NaiveDate::from_ymd_opt(2025, 11, 29).unwrap();
        let advent = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(liturgical_year_of(before_advent), 2025);
        assert_eq!(liturgical_year_of(advent), 2026);
        assert_eq!(liturgical_year_of(new_year), 2026);
    }
}
