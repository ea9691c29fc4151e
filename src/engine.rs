//! Calendar generation engine.
//!
//! Generating one civil year is a pipeline over a dated candidate table:
//!
//! ```text
//! General Roman Calendar ──┐
//! Proper of Time ──────────┤  date_definitions        (table.rs)
//!                          └──────────┬───────────
//!                                     │  fill_seasons: Sunday/weekday fillers
//!                                     v
//! locale overlays ─────────▶ apply_overlays           (overlay.rs)
//!                                     │
//!                                     v
//!                    transfer_impeded_solemnities     (transfer.rs)
//!                                     │
//!                                     v
//!                        resolve_day, per date        (resolve.rs)
//!                                     │  + seasons, week, cycles
//!                                     v
//!                                  Calendar
//! ```
//!
//! ## Responsibilities by module
//!
//! - `table.rs`: the per-year candidate table and the moveable dates needed
//!   to lay it out.
//! - `overlay.rs`: insert/patch/suppress operations a locale applies on top
//!   of the general table.
//! - `transfer.rs`: moves solemnities impeded by a day of higher precedence.
//! - `resolve.rs`: orders one date's candidates and drops what the head
//!   impedes.
//! - `cache.rs`: single-flight memoization of whole calendars.
//! - `metrics.rs`: stage timings for `Generator::run_with_metrics`.
//!
//! ## Debugging
//!
//! Stages log through the `log` facade: `debug` per stage, `trace` per date.

#[path = "engine/cache.rs"]
mod cache;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/overlay.rs"]
mod overlay;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/table.rs"]
mod table;
#[path = "engine/transfer.rs"]
mod transfer;

pub use cache::CalendarCache;
pub use metrics::{RunMetrics, RunResult, StageMetrics};
pub use overlay::{Overlay, Patch};
pub use resolve::{is_commemoration, resolve_day};
pub use table::{Transfer, YearTable};

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use crate::api::{self, Calendar, CalendarConfig};
use crate::calendars::{CalendarDefinition, base_definitions};
use crate::celebration::{CelebrationInstance, ResolvedDay};
use crate::error::Result;
use table::YearContext;

/// Generates the calendar of one civil year for one calendar definition.
pub struct Generator<'a> {
    year: i32,
    definition: &'a CalendarDefinition,
    config: CalendarConfig,
}

impl<'a> Generator<'a> {
    /// Fails with [`crate::CalendarError::YearOutOfRange`] outside
    /// [`crate::MIN_YEAR`]..=[`crate::MAX_YEAR`].
    pub fn new(year: i32, definition: &'a CalendarDefinition) -> Result<Self> {
        api::check_year(year)?;
        Ok(Generator { year, definition, config: definition.config })
    }

    /// Override the definition's own configuration.
    pub fn with_config(mut self, config: CalendarConfig) -> Self {
        self.config = config;
        self
    }

    /// Candidates of every date, overlays applied, before precedence.
    pub fn build_table(&self) -> YearTable {
        let context = YearContext::new(self.year, &self.config);
        let mut table = table::date_definitions(&context, base_definitions());
        table::fill_seasons(&context, &mut table);
        overlay::apply_overlays(&context, &mut table, &self.definition.overlays);
        table
    }

    pub fn run(&self) -> Calendar {
        self.run_with_metrics().calendar
    }

    pub fn run_with_metrics(&self) -> RunResult {
        let start = Instant::now();
        let mut metrics = RunMetrics::default();
        let context = YearContext::new(self.year, &self.config);

        let stage = Instant::now();
        let mut table = table::date_definitions(&context, base_definitions());
        table::fill_seasons(&context, &mut table);
        metrics.build.duration = stage.elapsed();
        metrics.build.produced = table.candidate_count();
        log::debug!("{} {}: built table with {} candidates", self.definition.name, self.year, metrics.build.produced);

        let stage = Instant::now();
        overlay::apply_overlays(&context, &mut table, &self.definition.overlays);
        metrics.overlay.duration = stage.elapsed();
        metrics.overlay.produced = table.candidate_count();
        log::debug!(
            "{} {}: applied {} overlays, {} candidates",
            self.definition.name,
            self.year,
            self.definition.overlays.len(),
            metrics.overlay.produced
        );

        let stage = Instant::now();
        transfer::transfer_impeded_solemnities(&context, &mut table);
        metrics.transfer.duration = stage.elapsed();
        metrics.transfer.produced = table.transfers().len();
        log::debug!("{} {}: {} solemnities transferred", self.definition.name, self.year, metrics.transfer.produced);

        let stage = Instant::now();
        let calendar = self.resolve(&context, table);
        metrics.resolve.duration = stage.elapsed();
        metrics.resolve.produced = calendar.iter().map(|day| day.celebrations.len()).sum();
        log::debug!("{} {}: resolved {} days", self.definition.name, self.year, calendar.len());

        metrics.total = start.elapsed();
        RunResult { calendar, metrics }
    }

    fn resolve(&self, context: &YearContext, table: YearTable) -> Calendar {
        let transferred: HashMap<(NaiveDate, &str), NaiveDate> =
            table.transfers.iter().map(|t| ((t.to, t.id.as_ref()), t.from)).collect();

        let mut days = BTreeMap::new();
        for (date, candidates) in &table.days {
            let resolved = resolve_day(*date, candidates.clone());
            let day = context.day_context(*date);
            let head = resolved[0].clone();
            let celebrations = resolved
                .into_iter()
                .map(|celebration| CelebrationInstance {
                    commemorated: is_commemoration(&head, &celebration),
                    transferred_from: transferred.get(&(*date, celebration.id.as_ref())).copied(),
                    celebration,
                    date: *date,
                    seasons: day.seasons.clone(),
                    periods: day.periods,
                    week_of_season: day.week_of_season,
                    cycles: day.cycles,
                })
                .collect();
            days.insert(*date, ResolvedDay { date: *date, celebrations });
        }
        Calendar::from_days(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars;
    use crate::celebration::Rank;
    use crate::cycles::SundayCycle;
    use crate::error::CalendarError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn metrics_cover_every_stage() {
        let run = Generator::new(2026, calendars::general_roman()).unwrap().run_with_metrics();
        assert_eq!(run.calendar.len(), 365);
        assert!(run.metrics.build.produced >= 365);
        assert!(run.metrics.resolve.produced >= 365);
        assert!(run.metrics.total >= run.metrics.resolve.duration);
    }

    #[test]
    fn transferred_solemnity_records_its_date() {
        let calendar = Generator::new(2024, calendars::general_roman()).unwrap().run();
        let head = calendar.get_date(date(2024, 12, 9)).unwrap().head();
        assert_eq!(head.id(), "immaculate_conception_of_the_blessed_virgin_mary");
        assert_eq!(head.transferred_from, Some(date(2024, 12, 8)));
    }

    #[test]
    fn commemoration_in_lent() {
        // St Casimir (March 4) falls on a Lent weekday in 2026.
        let calendar = Generator::new(2026, calendars::general_roman()).unwrap().run();
        let day = calendar.get_date(date(2026, 3, 4)).unwrap();
        assert_eq!(day.head().id(), "lent_2_wednesday");
        let casimir = day.celebrations.iter().find(|c| c.id() == "casimir_of_poland").unwrap();
        assert!(casimir.commemorated);
    }

    #[test]
    fn december_days_carry_the_next_cycle() {
        let calendar = Generator::new(2025, calendars::general_roman()).unwrap().run();
        let before = calendar.get_date(date(2025, 11, 29)).unwrap().head();
        let after = calendar.get_date(date(2025, 11, 30)).unwrap().head();
        assert_eq!(before.cycles.sunday_cycle, SundayCycle::C);
        assert_eq!(after.cycles.sunday_cycle, SundayCycle::A);
        assert_eq!(after.rank(), Rank::Sunday);
    }

    #[test]
    fn generator_rejects_years_outside_the_range() {
        let err = Generator::new(50_000, calendars::general_roman()).err();
        let expected = CalendarError::YearOutOfRange { year: 50_000, min: crate::MIN_YEAR, max: crate::MAX_YEAR };
        assert_eq!(err, Some(expected));
        assert!(Generator::new(crate::MIN_YEAR - 1, calendars::general_roman()).is_err());
        assert!(Generator::new(crate::MAX_YEAR, calendars::general_roman()).is_ok());
    }

    #[test]
    fn overlay_is_applied_by_build_table() {
        let table = Generator::new(2026, calendars::for_locale(crate::Locale::Es)).unwrap().build_table();
        let pillar = table.get(date(2026, 10, 12));
        assert!(pillar.iter().any(|c| c.id == "our_lady_of_the_pillar"));
    }
}
