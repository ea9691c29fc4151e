use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::calendars::{self, CalendarDefinition};
use crate::celebration::ResolvedDay;
use crate::computus::{FIRST_GREGORIAN_YEAR, LAST_COMPUTUS_YEAR};
use crate::engine::{Generator, RunResult, YearTable};
use crate::error::{CalendarError, Result};
use crate::seasons::liturgical_year_bounds;

/// First civil year a calendar can be generated for.
pub const MIN_YEAR: i32 = FIRST_GREGORIAN_YEAR;
/// Last civil year a calendar can be generated for.
pub const MAX_YEAR: i32 = LAST_COMPUTUS_YEAR;

/// Settings that move a handful of celebrations between a weekday and a Sunday.
///
/// Every field defaults to `false` (the universal norm). A locale calendar
/// carries its own config; [`Options::config`] overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Epiphany on the Sunday between January 2 and 8 instead of January 6.
    pub epiphany_on_sunday: bool,
    /// Ascension on the Seventh Sunday of Easter instead of Thursday.
    pub ascension_on_sunday: bool,
    /// Corpus Christi on the Sunday after Trinity instead of Thursday.
    pub corpus_christi_on_sunday: bool,
}

/// Supported output locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish national calendar, Spanish titles.
    Es,
    /// Spanish national calendar, Latin titles.
    La,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::La];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::La => "la",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "la" => Ok(Locale::La),
            _ => Err(CalendarError::UnknownLocale(s.to_string())),
        }
    }
}

/// Options that affect generation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Replaces the locale calendar's own [`CalendarConfig`].
    pub config: Option<CalendarConfig>,
}

/// Resolved days keyed by civil date, in date order.
///
/// Serializes as a JSON object keyed by ISO `YYYY-MM-DD` dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Calendar {
    days: BTreeMap<NaiveDate, ResolvedDay>,
}

impl Calendar {
    pub(crate) fn from_days(days: BTreeMap<NaiveDate, ResolvedDay>) -> Self {
        Calendar { days }
    }

    /// Day by ISO date string (`YYYY-MM-DD`).
    pub fn get(&self, iso_date: &str) -> Option<&ResolvedDay> {
        let date = NaiveDate::parse_from_str(iso_date, "%Y-%m-%d").ok()?;
        self.get_date(date)
    }

    pub fn get_date(&self, date: NaiveDate) -> Option<&ResolvedDay> {
        self.days.get(&date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedDay> {
        self.days.values()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Merge two consecutive civil years and keep the days of liturgical year `year`.
    ///
    /// `civil_years` are the calendars of `year - 1` and `year`; days outside
    /// the liturgical year's bounds are dropped.
    pub fn liturgical_year(year: i32, civil_years: [&Calendar; 2]) -> Calendar {
        let Some(bounds) = liturgical_year_bounds(year) else {
            return Calendar { days: BTreeMap::new() };
        };
        let days = civil_years
            .into_iter()
            .flat_map(|calendar| calendar.days.iter())
            .filter(|(date, _)| bounds.contains(**date))
            .map(|(date, day)| (*date, day.clone()))
            .collect();
        Calendar { days }
    }
}

impl<'a> IntoIterator for &'a Calendar {
    type Item = &'a ResolvedDay;
    type IntoIter = std::collections::btree_map::Values<'a, NaiveDate, ResolvedDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.values()
    }
}

pub(crate) fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::YearOutOfRange { year, min: MIN_YEAR, max: MAX_YEAR })
    }
}

/// A liturgical year spans civil years `year - 1` and `year`; both must be supported.
pub(crate) fn check_liturgical_year(year: i32) -> Result<()> {
    if (MIN_YEAR + 1..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::YearOutOfRange { year, min: MIN_YEAR + 1, max: MAX_YEAR })
    }
}

fn generator<'a>(year: i32, definition: &'a CalendarDefinition, options: &Options) -> Result<Generator<'a>> {
    let generator = Generator::new(year, definition)?;
    Ok(match options.config {
        Some(config) => generator.with_config(config),
        None => generator,
    })
}

/// Resolved days of civil year `year` (January 1 to December 31) for `locale`.
///
/// # Example
/// ```
/// use ordo::{Locale, generate_calendar};
///
/// let calendar = generate_calendar(2026, Locale::Es).unwrap();
/// assert_eq!(calendar.get("2026-04-05").unwrap().head().id(), "easter_sunday");
/// ```
pub fn generate_calendar(year: i32, locale: Locale) -> Result<Calendar> {
    generate_calendar_with(year, locale, &Options::default())
}

pub fn generate_calendar_with(year: i32, locale: Locale, options: &Options) -> Result<Calendar> {
    generate_calendar_for(year, calendars::for_locale(locale), options)
}

/// Generate from an explicit calendar definition, e.g. [`calendars::general_roman`].
pub fn generate_calendar_for(year: i32, definition: &CalendarDefinition, options: &Options) -> Result<Calendar> {
    Ok(generator(year, definition, options)?.run())
}

/// Like [`generate_calendar_with`], with per-stage timings.
pub fn generate_with_metrics(year: i32, locale: Locale, options: &Options) -> Result<RunResult> {
    Ok(generator(year, calendars::for_locale(locale), options)?.run_with_metrics())
}

/// Exactly the days of liturgical year `year`: from the First Sunday of
/// Advent of `year - 1` to the eve of the First Sunday of Advent of `year`.
pub fn generate_liturgical_year(year: i32, locale: Locale) -> Result<Calendar> {
    generate_liturgical_year_with(year, locale, &Options::default())
}

pub fn generate_liturgical_year_with(year: i32, locale: Locale, options: &Options) -> Result<Calendar> {
    check_liturgical_year(year)?;
    let previous = generate_calendar_with(year - 1, locale, options)?;
    let current = generate_calendar_with(year, locale, options)?;
    Ok(Calendar::liturgical_year(year, [&previous, &current]))
}

/// The dated candidate table of `year` after overlays, before transfers and precedence.
pub fn build_year_table(year: i32, locale: Locale, options: &Options) -> Result<YearTable> {
    Ok(generator(year, calendars::for_locale(locale), options)?.build_table())
}
