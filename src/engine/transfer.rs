//! Transfer of impeded solemnities.
//!
//! A solemnity outside the Proper of Time is impeded when its date also holds
//! a day of higher precedence, or a moveable celebration of the same level.
//! It moves to the next date where nothing ranks above a proper feast.

use chrono::{Duration, NaiveDate};

use crate::celebration::{Celebration, DateRule, Origin, Rank, TransferRule};
use crate::engine::table::{Transfer, YearContext, YearTable};

/// Days holding a candidate at or above this level cannot receive a transfer.
const FREE_DAY_LEVEL: u8 = 8;

fn is_impeded(solemnity: &Celebration, others: &[Celebration]) -> bool {
    let level = solemnity.precedence.level();
    others.iter().filter(|o| o.id != solemnity.id).any(|o| {
        let other = o.precedence.level();
        other < level
            || (other == level
                && matches!(o.date_rule, DateRule::Relative { .. })
                && matches!(solemnity.date_rule, DateRule::Fixed { .. }))
    })
}

fn is_free(candidates: &[Celebration]) -> bool {
    candidates.iter().all(|c| c.precedence.level() > FREE_DAY_LEVEL)
}

fn target_date(context: &YearContext, table: &YearTable, solemnity: &Celebration, from: NaiveDate) -> Option<NaiveDate> {
    let holy_week = context.feasts.palm_sunday..=context.feasts.holy_saturday;
    if solemnity.transfer == TransferRule::AnticipateBeforeHolyWeek && holy_week.contains(&from) {
        return Some(context.feasts.palm_sunday - Duration::days(1));
    }
    from.iter_days().skip(1).take_while(|d| table.contains_date(*d)).find(|d| is_free(table.get(*d)))
}

pub(crate) fn transfer_impeded_solemnities(context: &YearContext, table: &mut YearTable) {
    let impeded: Vec<(NaiveDate, Celebration)> = table
        .iter()
        .flat_map(|(date, list)| {
            list.iter()
                .filter(|c| c.rank == Rank::Solemnity && matches!(c.origin, Origin::General | Origin::Local))
                .filter(|c| is_impeded(c, list))
                .map(|c| (*date, c.clone()))
                .collect::<Vec<_>>()
        })
        .collect();

    for (from, solemnity) in impeded {
        let Some(to) = target_date(context, table, &solemnity, from) else {
            log::debug!("{} impeded on {from}; no free day left in {}", solemnity.id, table.year);
            continue;
        };
        if let Some(list) = table.days.get_mut(&from) {
            list.retain(|c| c.id != solemnity.id);
        }
        log::debug!("transfer {}: {from} -> {to}", solemnity.id);
        table.transfers.push(Transfer { id: solemnity.id.clone(), from, to });
        table.push(to, solemnity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CalendarConfig;
    use crate::calendars::base_definitions;
    use crate::engine::table::{date_definitions, fill_seasons};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn transferred(year: i32) -> YearTable {
        let context = YearContext::new(year, &CalendarConfig::default());
        let mut table = date_definitions(&context, base_definitions());
        fill_seasons(&context, &mut table);
        transfer_impeded_solemnities(&context, &mut table);
        table
    }

    #[test]
    fn immaculate_conception_on_advent_sunday_moves_to_monday() {
        // 2024-12-08 is the Second Sunday of Advent.
        let table = transferred(2024);
        assert_eq!(table.dates_of("immaculate_conception_of_the_blessed_virgin_mary"), vec![date(2024, 12, 9)]);
        let transfer = table.transfers().iter().find(|t| t.id == "immaculate_conception_of_the_blessed_virgin_mary").unwrap();
        assert_eq!(transfer.from, date(2024, 12, 8));
    }

    #[test]
    fn joseph_in_holy_week_is_anticipated() {
        // Palm Sunday 2008 was March 16.
        let table = transferred(2008);
        assert_eq!(table.dates_of("joseph_spouse_of_mary"), vec![date(2008, 3, 15)]);
    }

    #[test]
    fn annunciation_in_holy_week_waits_for_the_end_of_the_octave() {
        // Annunciation 2024-03-25 is Holy Monday; Divine Mercy Sunday is April 7.
        let table = transferred(2024);
        assert_eq!(table.dates_of("annunciation_of_the_lord"), vec![date(2024, 4, 8)]);
    }

    #[test]
    fn unimpeded_solemnity_stays() {
        let table = transferred(2026);
        assert_eq!(table.dates_of("joseph_spouse_of_mary"), vec![date(2026, 3, 19)]);
        assert!(table.transfers().iter().all(|t| t.id != "joseph_spouse_of_mary"));
    }
}
