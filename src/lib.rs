//! Liturgical calendar engine for the Roman Rite.
//!
//! Given a civil year and a locale, [`generate_calendar`] returns every date
//! of that year with its ordered celebrations, colors, season, week and
//! lectionary cycles. [`generate_liturgical_year`] returns one liturgical
//! year instead (First Sunday of Advent to the eve of the next one).
//!
//! ```
//! use ordo::{Locale, Rank, generate_calendar};
//!
//! let calendar = generate_calendar(2025, Locale::Es).unwrap();
//! let ash_wednesday = calendar.get("2025-03-05").unwrap().head();
//! assert_eq!(ash_wednesday.id(), "ash_wednesday");
//! assert_eq!(ash_wednesday.rank(), Rank::Feria);
//! ```

#[macro_use]
mod macros;
mod api;
pub mod calendars;
pub mod celebration;
mod computus;
mod cycles;
mod engine;
mod error;
mod seasons;

pub use api::{
    Calendar, CalendarConfig, Locale, MAX_YEAR, MIN_YEAR, Options, build_year_table, generate_calendar,
    generate_calendar_for, generate_calendar_with, generate_liturgical_year, generate_liturgical_year_with,
    generate_with_metrics,
};
pub use calendars::{CalendarDefinition, validate_definitions};
pub use celebration::{
    Anchor, Celebration, CelebrationInstance, Color, DateRule, Origin, Precedence, Rank, ResolvedDay, SeasonKey,
    TransferRule,
};
pub use computus::{MoveableFeasts, easter_sunday, first_sunday_of_advent};
pub use cycles::{Cycles, SundayCycle, WeekdayCycle, cycles_starting_in, get_cycles, liturgical_year_of};
pub use engine::{
    CalendarCache, Generator, Overlay, Patch, RunMetrics, RunResult, StageMetrics, Transfer, YearTable,
    is_commemoration, resolve_day,
};
pub use error::{CalendarError, Result};
pub use seasons::{
    DayContext, LiturgicalYear, LiturgicalYearBounds, Periods, Season, SeasonRange, liturgical_year_bounds,
    season_ranges,
};
