//! Celebration definitions and the types that describe a liturgical day.
//!
//! A [`Celebration`] is a definition that is not yet bound to a civil date:
//! it carries a [`DateRule`] that resolves to exactly one date per Gregorian
//! year. The engine binds celebrations to dates, resolves precedence per day
//! and emits [`CelebrationInstance`]s grouped into [`ResolvedDay`]s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::cycles::Cycles;
use crate::seasons::{Periods, Season};

/// Coarse precedence class of a celebration.
///
/// Variants are declared in ascending order so that `Ord` follows liturgical
/// precedence: `Solemnity` is the greatest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    /// Weekday of a season (including privileged weekdays such as Ash Wednesday).
    Feria,
    OptionalMemorial,
    ObligatoryMemorial,
    Sunday,
    Feast,
    Solemnity,
}

impl Rank {
    /// Whether a celebration of this rank impedes memorials and weekdays when
    /// no explicit flag says otherwise.
    pub fn suppresses_by_default(self) -> bool {
        matches!(self, Rank::Sunday | Rank::Feast | Rank::Solemnity)
    }

    pub fn is_memorial(self) -> bool {
        matches!(self, Rank::ObligatoryMemorial | Rank::OptionalMemorial)
    }
}

/// Position in the Table of Liturgical Days.
///
/// Several variants share a level; [`Precedence::level`] is what orders them
/// (lower level wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Precedence {
    Triduum,
    ProperOfTimeSolemnity,
    PrivilegedSunday,
    AshWednesday,
    WeekdayOfHolyWeek,
    WeekdayOfEasterOctave,
    GeneralSolemnity,
    AllSouls,
    ProperSolemnity,
    GeneralLordFeast,
    UnprivilegedSunday,
    GeneralFeast,
    ProperFeast,
    PrivilegedWeekday,
    GeneralMemorial,
    ProperMemorial,
    OptionalMemorial,
    Weekday,
}

impl Precedence {
    /// Level in the Table of Liturgical Days, 1 (highest) to 13 (lowest).
    pub fn level(self) -> u8 {
        match self {
            Precedence::Triduum => 1,
            Precedence::ProperOfTimeSolemnity
            | Precedence::PrivilegedSunday
            | Precedence::AshWednesday
            | Precedence::WeekdayOfHolyWeek
            | Precedence::WeekdayOfEasterOctave => 2,
            Precedence::GeneralSolemnity | Precedence::AllSouls => 3,
            Precedence::ProperSolemnity => 4,
            Precedence::GeneralLordFeast => 5,
            Precedence::UnprivilegedSunday => 6,
            Precedence::GeneralFeast => 7,
            Precedence::ProperFeast => 8,
            Precedence::PrivilegedWeekday => 9,
            Precedence::GeneralMemorial => 10,
            Precedence::ProperMemorial => 11,
            Precedence::OptionalMemorial => 12,
            Precedence::Weekday => 13,
        }
    }

    /// Precedence a local calendar gives to a celebration it promotes or
    /// demotes to `rank`. Sundays and weekdays are never produced by a local
    /// calendar, so they keep `current`.
    pub fn proper_for(rank: Rank, current: Precedence) -> Precedence {
        match rank {
            Rank::Solemnity => Precedence::ProperSolemnity,
            Rank::Feast => Precedence::ProperFeast,
            Rank::ObligatoryMemorial => Precedence::ProperMemorial,
            Rank::OptionalMemorial => Precedence::OptionalMemorial,
            Rank::Sunday | Rank::Feria => current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    White,
    Red,
    Green,
    Violet,
    Pink,
    Blue,
    Black,
    Gold,
}

/// Moveable dates a [`DateRule::Relative`] can be anchored to.
///
/// Every anchor resolves inside the civil year being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Easter,
    Pentecost,
    Ascension,
    CorpusChristi,
    Epiphany,
    BaptismOfTheLord,
    HolyFamily,
    FirstSundayOfAdvent,
}

/// How a celebration is placed on the civil calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateRule {
    Fixed { month: u32, day: u32 },
    Relative { anchor: Anchor, offset_days: i32 },
}

/// Fixed civil date.
pub const fn fixed(month: u32, day: u32) -> DateRule {
    DateRule::Fixed { month, day }
}

/// `offset_days` after (or before, when negative) a moveable anchor.
pub const fn relative(anchor: Anchor, offset_days: i32) -> DateRule {
    DateRule::Relative { anchor, offset_days }
}

/// Which layer of the calendar produced a celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// A proper-of-time celebration that owns its day (Christmas, Ash Wednesday, Easter...).
    ProperOfTime,
    /// A generated Sunday or weekday of a season.
    Season,
    /// The General Roman Calendar.
    General,
    /// Inserted by a locale overlay.
    Local,
}

/// What happens to a solemnity impeded by a day of higher precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferRule {
    /// Move to the next day free of solemnities and privileged days.
    #[default]
    Following,
    /// Inside Holy Week, move to the Saturday before Palm Sunday; otherwise as `Following`.
    AnticipateBeforeHolyWeek,
}

/// A liturgical observance definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Celebration {
    /// Stable machine key, unique within a calendar table.
    pub id: Cow<'static, str>,
    pub date_rule: DateRule,
    pub rank: Rank,
    pub precedence: Precedence,
    /// Primary color first, alternates after.
    pub colors: Vec<Color>,
    pub origin: Origin,
    pub is_holy_day_of_obligation: bool,
    /// Privileged day: drops memorials, weekdays and lower feasts falling on it.
    pub suppresses_lower_ranks: bool,
    pub transfer: TransferRule,
    /// Display title set by a locale calendar; consumers localize by `id` otherwise.
    pub title: Option<Cow<'static, str>>,
}

impl Celebration {
    pub fn primary_color(&self) -> Color {
        self.colors.first().copied().unwrap_or(Color::White)
    }
}

/// A celebration bound to a date, with the day's season metadata attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CelebrationInstance {
    #[serde(flatten)]
    pub celebration: Celebration,
    pub date: NaiveDate,
    pub seasons: Vec<Season>,
    pub periods: Periods,
    pub week_of_season: u32,
    pub cycles: Cycles,
    /// Kept after a privileged weekday rather than celebrated.
    pub commemorated: bool,
    /// Original date of a transferred solemnity.
    pub transferred_from: Option<NaiveDate>,
}

impl CelebrationInstance {
    pub fn id(&self) -> &str {
        &self.celebration.id
    }

    pub fn rank(&self) -> Rank {
        self.celebration.rank
    }

    pub fn colors(&self) -> &[Color] {
        &self.celebration.colors
    }
}

/// Output unit of the engine: every celebration of one date, head first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDay {
    pub date: NaiveDate,
    /// Ordered by descending precedence; never empty.
    pub celebrations: Vec<CelebrationInstance>,
}

/// Season key used to group days under a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeasonKey {
    Advent,
    Christmas,
    #[serde(rename = "ORDINARY_TIME_1")]
    OrdinaryTime1,
    Lent,
    HolyWeek,
    Easter,
    #[serde(rename = "ORDINARY_TIME_2")]
    OrdinaryTime2,
}

impl ResolvedDay {
    /// The celebration whose rank and colors drive the date.
    pub fn head(&self) -> &CelebrationInstance {
        &self.celebrations[0]
    }

    /// Banner season for the day. Holy Week wins over Lent and the Triduum;
    /// Ordinary Time splits on which side of Easter the day falls.
    pub fn display_season(&self) -> SeasonKey {
        let head = self.head();
        if head.periods.contains(Periods::HOLY_WEEK) {
            return SeasonKey::HolyWeek;
        }
        match head.seasons.last().copied().unwrap_or(Season::OrdinaryTime) {
            Season::Advent => SeasonKey::Advent,
            Season::ChristmasTime => SeasonKey::Christmas,
            Season::Lent | Season::PaschalTriduum => SeasonKey::Lent,
            Season::EasterTime => SeasonKey::Easter,
            Season::OrdinaryTime => {
                if head.periods.contains(Periods::LATE_ORDINARY_TIME) {
                    SeasonKey::OrdinaryTime2
                } else {
                    SeasonKey::OrdinaryTime1
                }
            }
        }
    }
}
