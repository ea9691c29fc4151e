//! Static calendar data: the General Roman Calendar, the Proper of Time and
//! the locale overlays built on top of them.
//!
//! Everything here is built once per process behind `Lazy`.

pub(crate) mod general;
pub(crate) mod proper_of_time;
pub(crate) mod spain;


use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::api::{CalendarConfig, Locale};
use crate::celebration::{Celebration, DateRule};
use crate::engine::Overlay;
use spain::Language;

/// A calendar: the shared general table plus a locale's overlays and settings.
#[derive(Debug, Clone)]
pub struct CalendarDefinition {
    pub name: &'static str,
    pub config: CalendarConfig,
    /// Applied in order after the general table is laid out.
    pub overlays: Vec<Overlay>,
}

static GENERAL_ROMAN: Lazy<CalendarDefinition> =
    Lazy::new(|| CalendarDefinition { name: "general_roman", config: CalendarConfig::default(), overlays: Vec::new() });

const SPAIN_CONFIG: CalendarConfig =
    CalendarConfig { epiphany_on_sunday: false, ascension_on_sunday: true, corpus_christi_on_sunday: true };

static SPAIN_ES: Lazy<CalendarDefinition> =
    Lazy::new(|| CalendarDefinition { name: "spain_es", config: SPAIN_CONFIG, overlays: spain::overlays(Language::Spanish) });

static SPAIN_LA: Lazy<CalendarDefinition> =
    Lazy::new(|| CalendarDefinition { name: "spain_la", config: SPAIN_CONFIG, overlays: spain::overlays(Language::Latin) });

/// The General Roman Calendar without any national overlay.
pub fn general_roman() -> &'static CalendarDefinition {
    &GENERAL_ROMAN
}

pub fn for_locale(locale: Locale) -> &'static CalendarDefinition {
    match locale {
        Locale::Es => &SPAIN_ES,
        Locale::La => &SPAIN_LA,
    }
}

/// Proper of Time first, then the sanctoral; table order is the final tie-break.
pub(crate) fn base_definitions() -> impl Iterator<Item = &'static Celebration> {
    proper_of_time::PROPER_OF_TIME.iter().chain(general::GENERAL_ROMAN_CALENDAR.iter())
}

fn check_celebration(celebration: &Celebration, problems: &mut Vec<String>) {
    let id = &celebration.id;
    if !regex!(r"^[a-z][a-z0-9_]*$").is_match(id) {
        problems.push(format!("{id}: id is not snake_case"));
    }
    if celebration.colors.is_empty() {
        problems.push(format!("{id}: no colors"));
    }
    if let DateRule::Fixed { month, day } = celebration.date_rule {
        // 2000 is a leap year: any real month/day exists in it.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            problems.push(format!("{id}: {month:02}-{day:02} is not a calendar date"));
        } else if (month, day) == (2, 29) {
            problems.push(format!("{id}: February 29 does not occur every year"));
        }
    }
}

/// Check the static tables: unique snake_case ids, dates that exist every
/// year, and overlays whose targets exist.
pub fn validate_definitions() -> Result<(), Vec<String>> {
    let mut problems = Vec::new();
    let mut ids = HashSet::new();
    for celebration in base_definitions() {
        check_celebration(celebration, &mut problems);
        if !ids.insert(celebration.id.as_ref()) {
            problems.push(format!("{}: duplicate id", celebration.id));
        }
    }

    for definition in [general_roman(), for_locale(Locale::Es), for_locale(Locale::La)] {
        let mut known: HashSet<&str> = ids.clone();
        for overlay in &definition.overlays {
            match overlay {
                Overlay::Insert(celebration) => {
                    check_celebration(celebration, &mut problems);
                    known.insert(celebration.id.as_ref());
                }
                Overlay::Patch { base_id, .. } | Overlay::Suppress { base_id } => {
                    if !known.contains(base_id.as_ref()) && !proper_of_time::is_season_filler_id(base_id) {
                        problems.push(format!("{}: overlay targets unknown id {base_id}", definition.name));
                    }
                }
            }
        }
    }

    if problems.is_empty() { Ok(()) } else { Err(problems) }
}
