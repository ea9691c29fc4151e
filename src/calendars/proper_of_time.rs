//! Proper of Time.
//!
//! Two layers: the celebrations that own their day outright (Christmas, Ash
//! Wednesday, Holy Week, the Easter octave...), declared as data, and the
//! generated Sundays and weekdays that fill every other day of a season.

use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use std::borrow::Cow;

use crate::celebration::{Anchor, Celebration, Color, DateRule, Origin, Precedence, Rank, TransferRule, fixed, relative};
use crate::seasons::{DayContext, Periods, Season, weekday_key};

pub(crate) static PROPER_OF_TIME: Lazy<Vec<Celebration>> = Lazy::new(|| {
    vec![
        // --- Christmas Time -------------------------------------------------
        celebration! {
            id: "nativity_of_the_lord",
            date: fixed(12, 25),
            rank: Solemnity,
            precedence: ProperOfTimeSolemnity,
            colors: [White],
            origin: ProperOfTime,
            obligation: true,
        },
        celebration! {
            id: "holy_family_of_jesus_mary_and_joseph",
            date: relative(Anchor::HolyFamily, 0),
            rank: Feast,
            precedence: GeneralLordFeast,
            colors: [White],
            origin: ProperOfTime,
        },
        celebration! {
            id: "mary_mother_of_god",
            date: fixed(1, 1),
            rank: Solemnity,
            precedence: GeneralSolemnity,
            colors: [White],
            origin: ProperOfTime,
            obligation: true,
        },
        celebration! {
            id: "epiphany_of_the_lord",
            date: relative(Anchor::Epiphany, 0),
            rank: Solemnity,
            precedence: ProperOfTimeSolemnity,
            colors: [White],
            origin: ProperOfTime,
            obligation: true,
        },
        celebration! {
            id: "baptism_of_the_lord",
            date: relative(Anchor::BaptismOfTheLord, 0),
            rank: Feast,
            precedence: GeneralLordFeast,
            colors: [White],
            origin: ProperOfTime,
        },
        // --- Lent and Holy Week ---------------------------------------------
        celebration! {
            id: "ash_wednesday",
            date: relative(Anchor::Easter, -46),
            rank: Feria,
            precedence: AshWednesday,
            colors: [Violet],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "palm_sunday_of_the_passion_of_the_lord",
            date: relative(Anchor::Easter, -7),
            rank: Sunday,
            precedence: PrivilegedSunday,
            colors: [Red],
            origin: ProperOfTime,
            obligation: true,
        },
        celebration! {
            id: "holy_monday",
            date: relative(Anchor::Easter, -6),
            rank: Feria,
            precedence: WeekdayOfHolyWeek,
            colors: [Violet],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "holy_tuesday",
            date: relative(Anchor::Easter, -5),
            rank: Feria,
            precedence: WeekdayOfHolyWeek,
            colors: [Violet],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "holy_wednesday",
            date: relative(Anchor::Easter, -4),
            rank: Feria,
            precedence: WeekdayOfHolyWeek,
            colors: [Violet],
            origin: ProperOfTime,
            suppresses: true,
        },
        // --- Paschal Triduum ------------------------------------------------
        celebration! {
            id: "thursday_of_the_lords_supper",
            date: relative(Anchor::Easter, -3),
            rank: Feria,
            precedence: Triduum,
            colors: [White],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "friday_of_the_passion_of_the_lord",
            date: relative(Anchor::Easter, -2),
            rank: Feria,
            precedence: Triduum,
            colors: [Red],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "holy_saturday",
            date: relative(Anchor::Easter, -1),
            rank: Feria,
            precedence: Triduum,
            colors: [Violet],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "easter_sunday",
            date: relative(Anchor::Easter, 0),
            rank: Solemnity,
            precedence: Triduum,
            colors: [White, Gold],
            origin: ProperOfTime,
            obligation: true,
        },
        // --- Easter Time ----------------------------------------------------
        celebration! {
            id: "easter_monday",
            date: relative(Anchor::Easter, 1),
            rank: Feria,
            precedence: WeekdayOfEasterOctave,
            colors: [White],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "easter_tuesday",
            date: relative(Anchor::Easter, 2),
            rank: Feria,
            precedence: WeekdayOfEasterOctave,
            colors: [White],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "easter_wednesday",
            date: relative(Anchor::Easter, 3),
            rank: Feria,
            precedence: WeekdayOfEasterOctave,
            colors: [White],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "easter_thursday",
            date: relative(Anchor::Easter, 4),
            rank: Feria,
            precedence: WeekdayOfEasterOctave,
            colors: [White],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "easter_friday",
            date: relative(Anchor::Easter, 5),
            rank: Feria,
            precedence: WeekdayOfEasterOctave,
            colors: [White],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "easter_saturday",
            date: relative(Anchor::Easter, 6),
            rank: Feria,
            precedence: WeekdayOfEasterOctave,
            colors: [White],
            origin: ProperOfTime,
            suppresses: true,
        },
        celebration! {
            id: "ascension_of_the_lord",
            date: relative(Anchor::Ascension, 0),
            rank: Solemnity,
            precedence: ProperOfTimeSolemnity,
            colors: [White],
            origin: ProperOfTime,
            obligation: true,
        },
        celebration! {
            id: "pentecost_sunday",
            date: relative(Anchor::Pentecost, 0),
            rank: Solemnity,
            precedence: ProperOfTimeSolemnity,
            colors: [Red],
            origin: ProperOfTime,
            obligation: true,
        },
    ]
});

/// Generated Sunday or weekday of the season for a date no Proper of Time
/// celebration claims.
pub(crate) fn season_filler(date: NaiveDate, context: &DayContext) -> Celebration {
    let weekday = date.weekday();
    let is_sunday = weekday == Weekday::Sun;
    let week = context.week_of_season;
    let day = weekday_key(weekday);

    let (id, rank, precedence, colors): (String, Rank, Precedence, Vec<Color>) = match context.season {
        Season::Advent if is_sunday => {
            let colors = if week == 3 { vec![Color::Pink, Color::Violet] } else { vec![Color::Violet] };
            (format!("advent_{week}_sunday"), Rank::Sunday, Precedence::PrivilegedSunday, colors)
        }
        Season::Advent if context.periods.contains(Periods::ADVENT_DECEMBER_17_TO_24) => (
            format!("advent_december_{}", date.day()),
            Rank::Feria,
            Precedence::PrivilegedWeekday,
            vec![Color::Violet],
        ),
        Season::Advent => (format!("advent_{week}_{day}"), Rank::Feria, Precedence::Weekday, vec![Color::Violet]),

        Season::ChristmasTime if is_sunday => {
            ("second_sunday_after_christmas".to_string(), Rank::Sunday, Precedence::UnprivilegedSunday, vec![Color::White])
        }
        Season::ChristmasTime if context.periods.contains(Periods::CHRISTMAS_OCTAVE) => {
            // December 26 is the second day of the octave.
            let octave_day = if date.month() == 12 { date.day() - 24 } else { 8 };
            (format!("christmas_octave_day_{octave_day}"), Rank::Feria, Precedence::PrivilegedWeekday, vec![Color::White])
        }
        Season::ChristmasTime => {
            (format!("christmas_time_january_{}", date.day()), Rank::Feria, Precedence::Weekday, vec![Color::White])
        }

        Season::OrdinaryTime if is_sunday => {
            (format!("ordinary_time_{week}_sunday"), Rank::Sunday, Precedence::UnprivilegedSunday, vec![Color::Green])
        }
        Season::OrdinaryTime => (format!("ordinary_time_{week}_{day}"), Rank::Feria, Precedence::Weekday, vec![Color::Green]),

        Season::Lent if is_sunday => {
            let colors = if week == 4 { vec![Color::Pink, Color::Violet] } else { vec![Color::Violet] };
            (format!("lent_{week}_sunday"), Rank::Sunday, Precedence::PrivilegedSunday, colors)
        }
        Season::Lent if week == 0 => {
            (format!("{day}_after_ash_wednesday"), Rank::Feria, Precedence::PrivilegedWeekday, vec![Color::Violet])
        }
        Season::Lent | Season::PaschalTriduum => {
            (format!("lent_{week}_{day}"), Rank::Feria, Precedence::PrivilegedWeekday, vec![Color::Violet])
        }

        Season::EasterTime if is_sunday && week == 2 => {
            ("divine_mercy_sunday".to_string(), Rank::Sunday, Precedence::PrivilegedSunday, vec![Color::White])
        }
        Season::EasterTime if is_sunday => {
            (format!("easter_time_{week}_sunday"), Rank::Sunday, Precedence::PrivilegedSunday, vec![Color::White])
        }
        Season::EasterTime => (format!("easter_time_{week}_{day}"), Rank::Feria, Precedence::Weekday, vec![Color::White]),
    };

    Celebration {
        id: Cow::Owned(id),
        date_rule: DateRule::Fixed { month: date.month(), day: date.day() },
        rank,
        precedence,
        colors,
        origin: Origin::Season,
        is_holy_day_of_obligation: is_sunday,
        suppresses_lower_ranks: rank.suppresses_by_default(),
        transfer: TransferRule::Following,
        title: None,
    }
}

/// Saturday memorial of the Blessed Virgin Mary, available on Ordinary Time
/// Saturdays. The id carries the week so each Saturday's instance stays
/// distinct within a year table.
pub(crate) fn saturday_memorial_of_mary(date: NaiveDate, week: u32) -> Celebration {
    Celebration {
        id: Cow::Owned(format!("ordinary_time_{week}_saturday_memorial_of_the_blessed_virgin_mary")),
        date_rule: DateRule::Fixed { month: date.month(), day: date.day() },
        rank: Rank::OptionalMemorial,
        precedence: Precedence::OptionalMemorial,
        colors: vec![Color::White],
        origin: Origin::Season,
        is_holy_day_of_obligation: false,
        suppresses_lower_ranks: false,
        transfer: TransferRule::Following,
        title: None,
    }
}

/// Whether `id` has the shape of a generated Sunday or weekday.
pub(crate) fn is_season_filler_id(id: &str) -> bool {
    let re = regex!(
        r"^(?:(?:advent|lent|ordinary_time)_\d{1,2}_(?:sunday|monday|tuesday|wednesday|thursday|friday|saturday)|easter_time_[2-7]_(?:sunday|monday|tuesday|wednesday|thursday|friday|saturday)|ordinary_time_\d{1,2}_saturday_memorial_of_the_blessed_virgin_mary|advent_december_(?:1[7-9]|2[0-4])|christmas_octave_day_[2-8]|christmas_time_january_[2-9]|christmas_time_january_1[0-3]|second_sunday_after_christmas|divine_mercy_sunday|(?:thursday|friday|saturday)_after_ash_wednesday)$"
    );
    re.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CalendarConfig;
    use crate::seasons::LiturgicalYear;

    fn filler(y: i32, m: u32, d: u32) -> Celebration {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let year = LiturgicalYear::containing(date, &CalendarConfig::default()).unwrap();
        season_filler(date, &year.day_context(date))
    }

    #[test]
    fn advent_fillers() {
        let gaudete = filler(2025, 12, 14);
        assert_eq!(gaudete.id, "advent_3_sunday");
        assert_eq!(gaudete.colors, vec![Color::Pink, Color::Violet]);
        assert!(gaudete.suppresses_lower_ranks);

        assert_eq!(filler(2025, 12, 2).id, "advent_1_tuesday");
        let late = filler(2025, 12, 19);
        assert_eq!(late.id, "advent_december_19");
        assert_eq!(late.precedence, Precedence::PrivilegedWeekday);
    }

    #[test]
    fn lent_fillers() {
        assert_eq!(filler(2026, 2, 19).id, "thursday_after_ash_wednesday");
        assert_eq!(filler(2026, 2, 22).id, "lent_1_sunday");
        let laetare = filler(2026, 3, 15);
        assert_eq!(laetare.id, "lent_4_sunday");
        assert_eq!(laetare.primary_color(), Color::Pink);
        assert_eq!(filler(2026, 3, 17).id, "lent_4_tuesday");
    }

    #[test]
    fn easter_and_ordinary_fillers() {
        assert_eq!(filler(2026, 4, 12).id, "divine_mercy_sunday");
        assert_eq!(filler(2026, 4, 19).id, "easter_time_3_sunday");
        assert_eq!(filler(2026, 1, 18).id, "ordinary_time_2_sunday");
        assert_eq!(filler(2026, 1, 20).id, "ordinary_time_2_tuesday");
        assert_eq!(filler(2026, 11, 22).id, "ordinary_time_34_sunday");
    }

    #[test]
    fn christmas_fillers() {
        assert_eq!(filler(2025, 12, 29).id, "christmas_octave_day_5");
        assert_eq!(filler(2026, 1, 3).id, "christmas_time_january_3");
        assert_eq!(filler(2027, 1, 3).id, "second_sunday_after_christmas");
    }

    #[test]
    fn filler_ids_are_recognised() {
        for id in ["advent_1_sunday", "ordinary_time_34_saturday", "advent_december_17", "christmas_octave_day_7"] {
            assert!(is_season_filler_id(id), "{id}");
        }
        assert!(!is_season_filler_id("ordinary_time_sunday"));
        assert!(!is_season_filler_id("john_of_avila_priest"));
    }

    #[test]
    fn saturday_memorial_ids_carry_the_week() {
        let saturday = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        let memorial = saturday_memorial_of_mary(saturday, 13);
        assert_eq!(memorial.id, "ordinary_time_13_saturday_memorial_of_the_blessed_virgin_mary");
        assert_eq!(memorial.rank, Rank::OptionalMemorial);
        assert_eq!(memorial.origin, Origin::Season);
        assert!(is_season_filler_id(&memorial.id));
        assert!(!is_season_filler_id("saturday_memorial_of_the_blessed_virgin_mary"));
    }

    #[test]
    fn easter_octave_weekdays_are_not_fillers() {
        // The octave weekdays are Proper of Time entries of their own.
        assert!(!is_season_filler_id("easter_time_1_monday"));
        assert!(is_season_filler_id("easter_time_2_monday"));
        assert_eq!(filler(2026, 4, 14).id, "easter_time_2_tuesday");
        assert_eq!(filler(2026, 4, 14).precedence, Precedence::Weekday);
    }
}
