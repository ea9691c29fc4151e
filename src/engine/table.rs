//! Dated candidate table for one civil year.
//!
//! ```text
//! definitions ──date_definitions──▶ YearTable ──fill_seasons──▶ every date has
//!  (fixed + relative)                            its Sunday/weekday of season
//! ```
//!
//! Overlays and transfers mutate the table afterwards; resolution reads it.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::api::CalendarConfig;
use crate::calendars::proper_of_time::{saturday_memorial_of_mary, season_filler};
use crate::celebration::{Celebration, DateRule, Origin};
use crate::computus::MoveableFeasts;
use crate::seasons::{DayContext, LiturgicalYear, Season};

/// A solemnity moved off its own date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub id: Cow<'static, str>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Candidate celebrations of every date of one civil year, before precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTable {
    pub year: i32,
    pub(crate) days: BTreeMap<NaiveDate, Vec<Celebration>>,
    pub(crate) transfers: Vec<Transfer>,
}

impl YearTable {
    fn empty(year: i32, context: &YearContext) -> Self {
        let days = context.dates().map(|d| (d, Vec::new())).collect();
        YearTable { year, days, transfers: Vec::new() }
    }

    /// Candidates of `date`, in table order. Empty outside the year.
    pub fn get(&self, date: NaiveDate) -> &[Celebration] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<Celebration>)> {
        self.days.iter()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Dates holding a celebration with `id`.
    pub fn dates_of(&self, id: &str) -> Vec<NaiveDate> {
        self.days.iter().filter(|(_, cs)| cs.iter().any(|c| c.id == id)).map(|(d, _)| *d).collect()
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Total number of candidates across all dates.
    pub fn candidate_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub(crate) fn push(&mut self, date: NaiveDate, celebration: Celebration) {
        if let Some(list) = self.days.get_mut(&date) {
            list.push(celebration);
        } else {
            log::trace!("{} falls on {date}, outside {}", celebration.id, self.year);
        }
    }

    /// Remove every instance of `id`, returning them with their dates.
    pub(crate) fn take(&mut self, id: &str) -> Vec<(NaiveDate, Celebration)> {
        let mut taken = Vec::new();
        for (date, list) in self.days.iter_mut() {
            let mut i = 0;
            while i < list.len() {
                if list[i].id == id {
                    taken.push((*date, list.remove(i)));
                } else {
                    i += 1;
                }
            }
        }
        taken
    }

    /// Apply `f` to every instance of `id`; returns how many were touched.
    pub(crate) fn modify(&mut self, id: &str, mut f: impl FnMut(&mut Celebration)) -> usize {
        let mut touched = 0;
        for c in self.days.values_mut().flat_map(|list| list.iter_mut()).filter(|c| c.id == id) {
            f(c);
            touched += 1;
        }
        touched
    }

    pub(crate) fn remove_fillers(&mut self, date: NaiveDate) {
        if let Some(list) = self.days.get_mut(&date) {
            list.retain(|c| c.origin != Origin::Season);
        }
    }
}

/// Moveable dates and liturgical years needed to lay out one civil year.
///
/// A civil year spans two liturgical years: everything from the First Sunday
/// of Advent on belongs to the next one.
#[derive(Debug, Clone, Copy)]
pub(crate) struct YearContext {
    pub year: i32,
    pub feasts: MoveableFeasts,
    current: LiturgicalYear,
    next: LiturgicalYear,
}

impl YearContext {
    /// Panics when `year` cannot be laid out; callers validate the range first.
    pub fn new(year: i32, config: &CalendarConfig) -> Self {
        let feasts = MoveableFeasts::compute(year, config)
            .unwrap_or_else(|| panic!("moveable feasts of {year} failed to compute"));
        let current = LiturgicalYear::new(year, config)
            .unwrap_or_else(|| panic!("liturgical year {year} failed to compute"));
        let next = LiturgicalYear::new(year + 1, config)
            .unwrap_or_else(|| panic!("liturgical year {} failed to compute", year + 1));
        YearContext { year, feasts, current, next }
    }

    pub fn liturgical_year(&self, date: NaiveDate) -> &LiturgicalYear {
        if date >= self.next.bounds.start { &self.next } else { &self.current }
    }

    pub fn day_context(&self, date: NaiveDate) -> DayContext {
        self.liturgical_year(date).day_context(date)
    }

    /// Every date of the civil year, January 1 to December 31.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let year = self.year;
        NaiveDate::from_ymd_opt(year, 1, 1).into_iter().flat_map(move |start| {
            start.iter_days().take_while(move |d| d.year() == year)
        })
    }

    /// Civil date of `rule` in this year.
    pub fn date_of(&self, id: &str, rule: DateRule) -> NaiveDate {
        match rule {
            DateRule::Fixed { month, day } => NaiveDate::from_ymd_opt(self.year, month, day)
                .unwrap_or_else(|| panic!("{id}: {month:02}-{day:02} is not a date in {}", self.year)),
            DateRule::Relative { anchor, offset_days } => {
                self.feasts.anchor(anchor) + Duration::days(i64::from(offset_days))
            }
        }
    }
}

/// Bind every definition to its date in the context's civil year.
pub(crate) fn date_definitions<'a>(
    context: &YearContext,
    definitions: impl IntoIterator<Item = &'a Celebration>,
) -> YearTable {
    let mut table = YearTable::empty(context.year, context);
    for celebration in definitions {
        let date = context.date_of(&celebration.id, celebration.date_rule);
        table.push(date, celebration.clone());
    }
    table
}

/// Give every date without a Proper of Time celebration its Sunday or weekday
/// of the season, plus the Saturday memorial of Mary in Ordinary Time.
pub(crate) fn fill_seasons(context: &YearContext, table: &mut YearTable) {
    for (date, list) in table.days.iter_mut() {
        if list.iter().any(|c| c.origin == Origin::ProperOfTime) {
            continue;
        }
        let day = context.day_context(*date);
        list.push(season_filler(*date, &day));
        if day.season == Season::OrdinaryTime && date.weekday() == Weekday::Sat {
            list.push(saturday_memorial_of_mary(*date, day.week_of_season));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::base_definitions;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn table(year: i32) -> YearTable {
        let context = YearContext::new(year, &CalendarConfig::default());
        let mut table = date_definitions(&context, base_definitions());
        fill_seasons(&context, &mut table);
        table
    }

    #[test]
    fn every_date_has_a_candidate() {
        let table = table(2025);
        assert_eq!(table.days.len(), 365);
        assert!(table.iter().all(|(_, list)| !list.is_empty()));
    }

    #[test]
    fn proper_of_time_days_get_no_filler() {
        let table = table(2026);
        let easter = table.get(date(2026, 4, 5));
        assert_eq!(easter[0].id, "easter_sunday");
        assert!(easter.iter().all(|c| c.origin != Origin::Season));
    }

    #[test]
    fn moveable_definitions_land_on_their_anchor() {
        let table = table(2025);
        assert_eq!(table.dates_of("ash_wednesday"), vec![date(2025, 3, 5)]);
        assert_eq!(table.dates_of("most_holy_trinity"), vec![date(2025, 6, 15)]);
        assert_eq!(table.dates_of("our_lord_jesus_christ_king_of_the_universe"), vec![date(2025, 11, 23)]);
    }

    #[test]
    fn ordinary_time_saturdays_offer_the_memorial_of_mary() {
        let table = table(2026);
        let saturday = table.get(date(2026, 7, 4));
        assert!(saturday.iter().any(|c| c.id.ends_with("_saturday_memorial_of_the_blessed_virgin_mary")));
        let lent_saturday = table.get(date(2026, 3, 7));
        assert!(lent_saturday.iter().all(|c| !c.id.ends_with("_memorial_of_the_blessed_virgin_mary")));
    }

    #[test]
    fn december_belongs_to_the_next_liturgical_year() {
        let context = YearContext::new(2025, &CalendarConfig::default());
        assert_eq!(context.liturgical_year(date(2025, 11, 29)).year, 2025);
        assert_eq!(context.liturgical_year(date(2025, 11, 30)).year, 2026);
    }
}
