use chrono::NaiveDate;
use ordo::{
    CalendarError, Color, Locale, Options, Precedence, Rank, Season, SeasonKey, SundayCycle, WeekdayCycle, calendars,
    generate_calendar, generate_calendar_for, generate_liturgical_year, liturgical_year_bounds,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn easter_sunday_2026_in_spain() {
    let calendar = generate_calendar(2026, Locale::Es).unwrap();
    let easter = calendar.get("2026-04-05").unwrap().head();
    assert_eq!(easter.id(), "easter_sunday");
    assert_eq!(easter.rank(), Rank::Solemnity);
    assert_eq!(easter.colors(), &[Color::White, Color::Gold]);
    assert_eq!(easter.seasons, vec![Season::PaschalTriduum, Season::EasterTime]);
}

#[test]
fn ash_wednesday_2025_suppresses_lower_ranks() {
    let calendar = generate_calendar(2025, Locale::Es).unwrap();
    let day = calendar.get("2025-03-05").unwrap();
    let head = day.head();
    assert_eq!(head.id(), "ash_wednesday");
    assert_eq!(head.rank(), Rank::Feria);
    assert_eq!(head.celebration.precedence, Precedence::AshWednesday);
    assert_eq!(head.colors(), &[Color::Violet]);
    assert!(head.celebration.suppresses_lower_ranks);
    assert!(day.celebrations.iter().skip(1).all(|c| c.rank() > Rank::ObligatoryMemorial));
}

#[test]
fn suppressing_heads_leave_no_memorials_or_weekdays() {
    for locale in Locale::ALL {
        let calendar = generate_calendar(2026, locale).unwrap();
        for day in &calendar {
            let head = day.head();
            if head.celebration.suppresses_lower_ranks {
                assert!(
                    day.celebrations.iter().skip(1).all(|c| c.rank() > Rank::ObligatoryMemorial),
                    "{}: {} kept a lower rank",
                    day.date,
                    head.id()
                );
            }
        }
    }
}

#[test]
fn promotion_shows_only_in_the_promoting_calendar() {
    // 2025-05-10 is an Easter weekday.
    let spain = generate_calendar(2025, Locale::Es).unwrap();
    let avila = spain.get("2025-05-10").unwrap().head();
    assert_eq!(avila.id(), "john_of_avila_priest");
    assert_eq!(avila.rank(), Rank::Feast);

    let general = generate_calendar_for(2025, calendars::general_roman(), &Options::default()).unwrap();
    let day = general.get("2025-05-10").unwrap();
    assert_eq!(day.head().id(), "john_of_avila_priest");
    assert_eq!(day.head().rank(), Rank::OptionalMemorial);
    assert_eq!(day.celebrations[1].id(), "easter_time_3_saturday");
}

#[test]
fn santiago_outranks_an_ordinary_sunday_in_spain() {
    // 2027-07-25 is the 16th Sunday in Ordinary Time.
    let spain = generate_calendar(2027, Locale::Es).unwrap();
    let head = spain.get("2027-07-25").unwrap().head();
    assert_eq!(head.id(), "james_apostle");
    assert_eq!(head.rank(), Rank::Solemnity);
    assert!(head.celebration.is_holy_day_of_obligation);
    assert_eq!(head.celebration.title.as_deref(), Some("Santiago, apóstol, patrono de España"));

    let latin = generate_calendar(2027, Locale::La).unwrap();
    let head = latin.get("2027-07-25").unwrap().head();
    assert_eq!(head.celebration.title.as_deref(), Some("S. Iacobi, apostoli, Hispaniae patroni"));

    let general = generate_calendar_for(2027, calendars::general_roman(), &Options::default()).unwrap();
    assert_eq!(general.get("2027-07-25").unwrap().head().rank(), Rank::Sunday);
}

#[test]
fn our_lady_of_the_pillar() {
    let calendar = generate_calendar(2026, Locale::Es).unwrap();
    let head = calendar.get("2026-10-12").unwrap().head();
    assert_eq!(head.id(), "our_lady_of_the_pillar");
    assert_eq!(head.rank(), Rank::Feast);
    assert_eq!(head.celebration.title.as_deref(), Some("Nuestra Señora del Pilar"));
}

#[test]
fn immaculate_conception_is_transferred_and_blue_in_spain() {
    let calendar = generate_calendar(2024, Locale::Es).unwrap();
    assert_eq!(calendar.get("2024-12-08").unwrap().head().id(), "advent_2_sunday");
    let head = calendar.get("2024-12-09").unwrap().head();
    assert_eq!(head.id(), "immaculate_conception_of_the_blessed_virgin_mary");
    assert_eq!(head.colors(), &[Color::Blue, Color::White]);
    assert_eq!(head.transferred_from, Some(date(2024, 12, 8)));
}

#[test]
fn holy_thursday_straddles_lent_and_the_triduum() {
    let calendar = generate_calendar(2026, Locale::La).unwrap();
    let day = calendar.get("2026-04-02").unwrap();
    assert_eq!(day.head().id(), "thursday_of_the_lords_supper");
    assert_eq!(day.head().seasons, vec![Season::Lent, Season::PaschalTriduum]);
    assert_eq!(day.display_season(), SeasonKey::HolyWeek);
}

#[test]
fn cycles_change_on_the_first_sunday_of_advent() {
    let calendar = generate_liturgical_year(2026, Locale::Es).unwrap();
    assert!(calendar.iter().all(|day| day.head().cycles.sunday_cycle == SundayCycle::A));
    assert!(calendar.iter().all(|day| day.head().cycles.weekday_cycle == WeekdayCycle::II));
}

#[test]
fn liturgical_year_window() {
    let bounds = liturgical_year_bounds(2026).unwrap();
    assert_eq!(bounds.start, date(2025, 11, 30));
    assert_eq!(bounds.end, date(2026, 11, 28));

    let calendar = generate_liturgical_year(2026, Locale::La).unwrap();
    assert_eq!(calendar.len(), bounds.days().count());
    assert_eq!(calendar.get("2026-11-22").unwrap().head().id(), "our_lord_jesus_christ_king_of_the_universe");
}

#[test]
fn invalid_requests_are_errors() {
    assert_eq!("fr".parse::<Locale>(), Err(CalendarError::UnknownLocale("fr".to_string())));
    assert!(matches!(generate_calendar(1500, Locale::Es), Err(CalendarError::YearOutOfRange { year: 1500, .. })));
    assert!(matches!(generate_calendar(5000, Locale::La), Err(CalendarError::YearOutOfRange { year: 5000, .. })));
}
