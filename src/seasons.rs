//! Liturgical year bounds and season partitioning.
//!
//! A liturgical year `Y` is partitioned as:
//!
//! ```text
//! Advent ─ Christmas ─ Ordinary Time (early) ─ Lent ─ Triduum ─ Easter ─ Ordinary Time (late)
//! │                                              └─ Holy Week ─┘  (sub-period overlay)
//! First Sunday of Advent (Y-1)                   Saturday before First Sunday of Advent (Y)
//! ```
//!
//! Holy Week overlaps the tail of Lent and the Triduum; it is reported as a
//! period, not as a season of its own.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::api::CalendarConfig;
use crate::computus::{MoveableFeasts, first_sunday_of_advent, sunday_on_or_before};
use crate::cycles::{Cycles, get_cycles, liturgical_year_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Advent,
    ChristmasTime,
    OrdinaryTime,
    Lent,
    PaschalTriduum,
    EasterTime,
}

bitflags::bitflags! {
    /// Sub-periods a day can belong to, independent of its season.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Periods: u16 {
        const ADVENT_DECEMBER_17_TO_24 = 1 << 0;
        const CHRISTMAS_OCTAVE         = 1 << 1;
        const DAYS_BEFORE_EPIPHANY     = 1 << 2;
        const DAYS_FROM_EPIPHANY       = 1 << 3;
        const EARLY_ORDINARY_TIME      = 1 << 4;
        const LATE_ORDINARY_TIME       = 1 << 5;
        const HOLY_WEEK                = 1 << 6;
        const EASTER_OCTAVE            = 1 << 7;
    }
}

/// Inclusive civil-date window of one liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LiturgicalYearBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl LiturgicalYearBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

/// Bounds of the liturgical year ending in civil `year`.
pub fn liturgical_year_bounds(year: i32) -> Option<LiturgicalYearBounds> {
    let start = first_sunday_of_advent(year - 1)?;
    let end = first_sunday_of_advent(year)? - Duration::days(1);
    Some(LiturgicalYearBounds { start, end })
}

/// A season (or sub-period overlay) as a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonRange {
    /// For the Holy Week overlay this is nominally `Lent`: the range runs on
    /// into Good Friday and Holy Saturday, which belong to the Paschal
    /// Triduum. Use [`LiturgicalYear::day_context`] for a date's seasons.
    pub season: Season,
    pub period: Option<Periods>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SeasonRange {
    /// Overlays (Holy Week) sit on top of the seasons and do not tile the year.
    pub fn is_overlay(&self) -> bool {
        self.period == Some(Periods::HOLY_WEEK)
    }
}

/// Ordered season ranges of the liturgical year ending in `year`.
pub fn season_ranges(year: i32, config: &CalendarConfig) -> Option<Vec<SeasonRange>> {
    Some(LiturgicalYear::new(year, config)?.season_ranges())
}

/// Season metadata shared by every celebration of a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayContext {
    /// Season the date is counted in.
    pub season: Season,
    /// Every season the date belongs to (Holy Thursday and Easter Sunday straddle two).
    pub seasons: Vec<Season>,
    pub periods: Periods,
    pub week_of_season: u32,
    pub cycles: Cycles,
}

/// One liturgical year with its moveable dates resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiturgicalYear {
    pub year: i32,
    pub bounds: LiturgicalYearBounds,
    /// Christmas of civil year `year - 1`.
    pub christmas: NaiveDate,
    /// Moveable dates of civil year `year`.
    pub feasts: MoveableFeasts,
    pub cycles: Cycles,
}

impl LiturgicalYear {
    pub fn new(year: i32, config: &CalendarConfig) -> Option<Self> {
        Some(LiturgicalYear {
            year,
            bounds: liturgical_year_bounds(year)?,
            christmas: NaiveDate::from_ymd_opt(year - 1, 12, 25)?,
            feasts: MoveableFeasts::compute(year, config)?,
            cycles: get_cycles(year),
        })
    }

    /// The liturgical year `date` belongs to.
    pub fn containing(date: NaiveDate, config: &CalendarConfig) -> Option<Self> {
        Self::new(liturgical_year_of(date), config)
    }

    pub fn season_ranges(&self) -> Vec<SeasonRange> {
        let f = &self.feasts;
        let day = Duration::days(1);
        vec![
            SeasonRange { season: Season::Advent, period: None, start: self.bounds.start, end: self.christmas - day },
            SeasonRange { season: Season::ChristmasTime, period: None, start: self.christmas, end: f.baptism_of_the_lord },
            SeasonRange {
                season: Season::OrdinaryTime,
                period: Some(Periods::EARLY_ORDINARY_TIME),
                start: f.baptism_of_the_lord + day,
                end: f.ash_wednesday - day,
            },
            SeasonRange { season: Season::Lent, period: None, start: f.ash_wednesday, end: f.holy_thursday },
            // Overlay, labelled Lent though it ends inside the Triduum.
            SeasonRange { season: Season::Lent, period: Some(Periods::HOLY_WEEK), start: f.palm_sunday, end: f.holy_saturday },
            SeasonRange { season: Season::PaschalTriduum, period: None, start: f.good_friday, end: f.holy_saturday },
            SeasonRange { season: Season::EasterTime, period: None, start: f.easter, end: f.pentecost },
            SeasonRange {
                season: Season::OrdinaryTime,
                period: Some(Periods::LATE_ORDINARY_TIME),
                start: f.pentecost + day,
                end: self.bounds.end,
            },
        ]
    }

    /// Season `date` is counted in. `date` must lie within the year's bounds.
    pub fn season_of(&self, date: NaiveDate) -> Season {
        let f = &self.feasts;
        if date < self.christmas {
            Season::Advent
        } else if date <= f.baptism_of_the_lord {
            Season::ChristmasTime
        } else if date < f.ash_wednesday {
            Season::OrdinaryTime
        } else if date <= f.holy_thursday {
            Season::Lent
        } else if date < f.easter {
            Season::PaschalTriduum
        } else if date <= f.pentecost {
            Season::EasterTime
        } else {
            Season::OrdinaryTime
        }
    }

    pub fn day_context(&self, date: NaiveDate) -> DayContext {
        let f = &self.feasts;
        let season = self.season_of(date);

        let seasons = if date == f.holy_thursday {
            vec![Season::Lent, Season::PaschalTriduum]
        } else if date == f.easter {
            vec![Season::PaschalTriduum, Season::EasterTime]
        } else {
            vec![season]
        };

        let mut periods = Periods::empty();
        match season {
            Season::Advent if date.month() == 12 && date.day() >= 17 => {
                periods |= Periods::ADVENT_DECEMBER_17_TO_24;
            }
            Season::ChristmasTime => {
                if date <= self.christmas + Duration::days(7) {
                    periods |= Periods::CHRISTMAS_OCTAVE;
                } else if date < f.epiphany {
                    periods |= Periods::DAYS_BEFORE_EPIPHANY;
                } else {
                    periods |= Periods::DAYS_FROM_EPIPHANY;
                }
            }
            Season::OrdinaryTime if date < f.easter => periods |= Periods::EARLY_ORDINARY_TIME,
            Season::OrdinaryTime => periods |= Periods::LATE_ORDINARY_TIME,
            _ => {}
        }
        if f.palm_sunday <= date && date <= f.holy_saturday {
            periods |= Periods::HOLY_WEEK;
        }
        if f.easter <= date && date <= f.divine_mercy_sunday {
            periods |= Periods::EASTER_OCTAVE;
        }

        DayContext { season, seasons, periods, week_of_season: self.week_of_season(date, season), cycles: self.cycles }
    }

    fn week_of_season(&self, date: NaiveDate, season: Season) -> u32 {
        let f = &self.feasts;
        let weeks_since = |origin: NaiveDate| (date - origin).num_days().div_euclid(7) + 1;
        let week = match season {
            Season::Advent => weeks_since(self.bounds.start),
            Season::ChristmasTime => weeks_since(sunday_on_or_before(self.christmas)),
            Season::OrdinaryTime if date < f.easter => weeks_since(sunday_on_or_before(f.baptism_of_the_lord)),
            // Late Ordinary Time counts back from Christ the King, the 34th Sunday.
            Season::OrdinaryTime => 34 - (f.christ_the_king - sunday_on_or_before(date)).num_days() / 7,
            // Ash Wednesday and the three days after it are week 0.
            Season::Lent | Season::PaschalTriduum => weeks_since(f.ash_wednesday + Duration::days(4)),
            Season::EasterTime => weeks_since(f.easter),
        };
        week.max(0) as u32
    }
}

/// Lowercase English weekday name, as used in generated celebration ids.
pub(crate) fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn year(y: i32) -> LiturgicalYear {
        LiturgicalYear::new(y, &CalendarConfig::default()).unwrap()
    }

    #[test]
    fn bounds_of_2026() {
        let bounds = liturgical_year_bounds(2026).unwrap();
        assert_eq!(bounds.start, date(2025, 11, 30));
        assert_eq!(bounds.end, date(2026, 11, 28));
        assert_eq!(bounds.start.weekday(), Weekday::Sun);
        assert_eq!(bounds.end.weekday(), Weekday::Sat);
    }

    #[test]
    fn seasons_tile_the_year() {
        let ly = year(2025);
        let ranges: Vec<SeasonRange> = ly.season_ranges().into_iter().filter(|r| !r.is_overlay()).collect();
        assert_eq!(ranges.first().unwrap().start, ly.bounds.start);
        assert_eq!(ranges.last().unwrap().end, ly.bounds.end);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end + Duration::days(1), pair[1].start, "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn holy_week_is_a_period_over_lent_and_triduum() {
        let ly = year(2026);
        let palm = ly.day_context(date(2026, 3, 29));
        assert_eq!(palm.season, Season::Lent);
        assert!(palm.periods.contains(Periods::HOLY_WEEK));

        let thursday = ly.day_context(date(2026, 4, 2));
        assert_eq!(thursday.seasons, vec![Season::Lent, Season::PaschalTriduum]);

        let friday = ly.day_context(date(2026, 4, 3));
        assert_eq!(friday.season, Season::PaschalTriduum);
        assert!(friday.periods.contains(Periods::HOLY_WEEK));

        let easter = ly.day_context(date(2026, 4, 5));
        assert_eq!(easter.seasons, vec![Season::PaschalTriduum, Season::EasterTime]);
        assert!(!easter.periods.contains(Periods::HOLY_WEEK));
        assert!(easter.periods.contains(Periods::EASTER_OCTAVE));
    }

    #[test]
    fn holy_week_overlay_spans_palm_sunday_to_holy_saturday() {
        let ly = year(2026);
        let ranges = ly.season_ranges();
        let overlays: Vec<_> = ranges.iter().filter(|r| r.is_overlay()).collect();
        assert_eq!(overlays.len(), 1);
        let holy_week = overlays[0];
        assert_eq!((holy_week.start, holy_week.end), (date(2026, 3, 29), date(2026, 4, 4)));
        assert_eq!(holy_week.season, Season::Lent);

        // The last two days are counted in the Triduum, not in Lent.
        let triduum = ranges.iter().find(|r| r.season == Season::PaschalTriduum).unwrap();
        assert_eq!((triduum.start, triduum.end), (date(2026, 4, 3), date(2026, 4, 4)));
        assert_eq!(ly.day_context(holy_week.end).season, Season::PaschalTriduum);
    }

    #[test]
    fn weeks_of_season() {
        let ly = year(2026);
        assert_eq!(ly.day_context(date(2025, 11, 30)).week_of_season, 1);
        assert_eq!(ly.day_context(date(2025, 12, 14)).week_of_season, 3);
        // Ash Wednesday 2026-02-18 and the days after it are week 0.
        assert_eq!(ly.day_context(date(2026, 2, 18)).week_of_season, 0);
        assert_eq!(ly.day_context(date(2026, 2, 22)).week_of_season, 1);
        assert_eq!(ly.day_context(date(2026, 4, 5)).week_of_season, 1);
        assert_eq!(ly.day_context(date(2026, 5, 24)).week_of_season, 8);
        // Baptism 2026-01-11: the next Sunday is the 2nd of Ordinary Time.
        assert_eq!(ly.day_context(date(2026, 1, 12)).week_of_season, 1);
        assert_eq!(ly.day_context(date(2026, 1, 18)).week_of_season, 2);
        // Christ the King 2026-11-22 closes week 34.
        assert_eq!(ly.day_context(date(2026, 11, 22)).week_of_season, 34);
        assert_eq!(ly.day_context(date(2026, 11, 28)).week_of_season, 34);
    }

    #[test]
    fn ordinary_time_splits_around_easter() {
        let ly = year(2026);
        assert!(ly.day_context(date(2026, 2, 1)).periods.contains(Periods::EARLY_ORDINARY_TIME));
        assert!(ly.day_context(date(2026, 7, 1)).periods.contains(Periods::LATE_ORDINARY_TIME));
    }
}
