//! Easter computus and the moveable feasts derived from it.
//!
//! ```text
//! year ──▶ easter_sunday ──┬─ Ash Wednesday   (−46)
//!                          ├─ Palm Sunday     (−7)
//!                          ├─ Holy Thursday   (−3) ... Holy Saturday (−1)
//!                          ├─ Ascension       (+39, or +42 on Sunday)
//!                          ├─ Pentecost       (+49)
//!                          ├─ Trinity         (+56)
//!                          └─ Corpus Christi  (+60, or +63 on Sunday)
//!
//! year ──▶ first_sunday_of_advent ──▶ Christ the King (−7)
//! ```
//!
//! Christ the King hangs off the *next* liturgical year's start, never off
//! Easter.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::api::CalendarConfig;
use crate::celebration::Anchor;

/// First year of the Gregorian calendar the computus is defined for.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;
/// Last year of the computus' documented validity window.
pub const LAST_COMPUTUS_YEAR: i32 = 4099;

/// Easter Sunday for `year` (anonymous Gregorian algorithm, Meeus/Jones/Butcher).
///
/// Returns `None` only when the year cannot be represented as a civil date.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// First Sunday of Advent falling in civil `year`: four Sundays before
/// Christmas, i.e. the Sunday between Nov 27 and Dec 3.
pub fn first_sunday_of_advent(year: i32) -> Option<NaiveDate> {
    let christmas_eve = NaiveDate::from_ymd_opt(year, 12, 24)?;
    let back = christmas_eve.weekday().num_days_from_sunday() as i64;
    let fourth_sunday = christmas_eve - Duration::days(back);
    Some(fourth_sunday - Duration::days(21))
}

/// The Sunday on or before `date`.
pub(crate) fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// The first `weekday` strictly after `date`.
pub(crate) fn next_weekday_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut next = date + Duration::days(1);
    while next.weekday() != weekday {
        next += Duration::days(1);
    }
    next
}

/// Every moveable date of one civil year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveableFeasts {
    pub year: i32,
    pub epiphany: NaiveDate,
    pub baptism_of_the_lord: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub palm_sunday: NaiveDate,
    pub holy_thursday: NaiveDate,
    pub good_friday: NaiveDate,
    pub holy_saturday: NaiveDate,
    pub easter: NaiveDate,
    pub divine_mercy_sunday: NaiveDate,
    pub ascension: NaiveDate,
    pub pentecost: NaiveDate,
    pub trinity_sunday: NaiveDate,
    pub corpus_christi: NaiveDate,
    pub sacred_heart: NaiveDate,
    pub christ_the_king: NaiveDate,
    pub first_sunday_of_advent: NaiveDate,
    pub holy_family: NaiveDate,
}

impl MoveableFeasts {
    /// Compute the moveable dates of civil `year` under `config`.
    pub fn compute(year: i32, config: &CalendarConfig) -> Option<Self> {
        let easter = easter_sunday(year)?;
        let first_sunday_of_advent = first_sunday_of_advent(year)?;

        let january_6 = NaiveDate::from_ymd_opt(year, 1, 6)?;
        let epiphany = if config.epiphany_on_sunday {
            // The Sunday between January 2 and January 8.
            next_weekday_after(NaiveDate::from_ymd_opt(year, 1, 1)?, Weekday::Sun)
        } else {
            january_6
        };
        // Sunday after Epiphany; Monday when a Sunday Epiphany lands on Jan 7 or 8.
        let baptism_of_the_lord = if config.epiphany_on_sunday && epiphany.day() >= 7 {
            epiphany + Duration::days(1)
        } else {
            next_weekday_after(epiphany, Weekday::Sun)
        };

        let christmas = NaiveDate::from_ymd_opt(year, 12, 25)?;
        // Sunday within the octave, or December 30 when Christmas is a Sunday.
        let holy_family = if christmas.weekday() == Weekday::Sun {
            NaiveDate::from_ymd_opt(year, 12, 30)?
        } else {
            next_weekday_after(christmas, Weekday::Sun)
        };

        let ascension = easter + Duration::days(if config.ascension_on_sunday { 42 } else { 39 });
        let corpus_christi = easter + Duration::days(if config.corpus_christi_on_sunday { 63 } else { 60 });

        Some(MoveableFeasts {
            year,
            epiphany,
            baptism_of_the_lord,
            ash_wednesday: easter - Duration::days(46),
            palm_sunday: easter - Duration::days(7),
            holy_thursday: easter - Duration::days(3),
            good_friday: easter - Duration::days(2),
            holy_saturday: easter - Duration::days(1),
            easter,
            divine_mercy_sunday: easter + Duration::days(7),
            ascension,
            pentecost: easter + Duration::days(49),
            trinity_sunday: easter + Duration::days(56),
            corpus_christi,
            sacred_heart: easter + Duration::days(68),
            christ_the_king: first_sunday_of_advent - Duration::days(7),
            first_sunday_of_advent,
            holy_family,
        })
    }

    pub fn anchor(&self, anchor: Anchor) -> NaiveDate {
        match anchor {
            Anchor::Easter => self.easter,
            Anchor::Pentecost => self.pentecost,
            Anchor::Ascension => self.ascension,
            Anchor::CorpusChristi => self.corpus_christi,
            Anchor::Epiphany => self.epiphany,
            Anchor::BaptismOfTheLord => self.baptism_of_the_lord,
            Anchor::HolyFamily => self.holy_family,
            Anchor::FirstSundayOfAdvent => self.first_sunday_of_advent,
        }
    }
}
