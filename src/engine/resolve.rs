//! Precedence resolution for a single date.
//!
//! ```text
//! candidates ──sort (level, rank, table order)──▶ head
//!                                                  │
//!      head suppresses lower ranks ───────────────┼─▶ drop memorials, weekdays, lower levels
//!      head is an obligatory memorial ────────────┼─▶ drop the weekday and optional memorials
//!      head is a privileged weekday ──────────────┼─▶ keep memorials as commemorations
//!      head is an optional memorial ──────────────┴─▶ keep everything
//! ```

use chrono::NaiveDate;
use std::cmp::Reverse;

use crate::celebration::{Celebration, Precedence, Rank};

/// Order `candidates` by precedence and drop what the head impedes.
///
/// Panics on an empty candidate list: every date carries at least its
/// weekday, so an empty list means the table was built wrong.
pub fn resolve_day(date: NaiveDate, mut candidates: Vec<Celebration>) -> Vec<Celebration> {
    assert!(!candidates.is_empty(), "no celebration candidates for {date}");

    // Stable sort: table order breaks the remaining ties.
    candidates.sort_by_key(|c| (c.precedence.level(), Reverse(c.rank)));

    let total = candidates.len();
    let head = &candidates[0];
    let (head_id, head_rank, head_precedence) = (head.id.clone(), head.rank, head.precedence);
    let head_level = head_precedence.level();

    if head.suppresses_lower_ranks {
        candidates.retain(|c| c.id == head_id || (c.rank > Rank::ObligatoryMemorial && c.precedence.level() <= head_level));
    } else if head_precedence == Precedence::PrivilegedWeekday {
        candidates.retain(|c| c.id == head_id || c.rank.is_memorial());
    } else if head_rank == Rank::ObligatoryMemorial {
        candidates.retain(|c| c.rank >= Rank::ObligatoryMemorial);
    }

    log::trace!("{date}: kept {} of {total} candidate(s), head {head_id}", candidates.len());
    candidates
}

/// Whether `celebration` is kept as a commemoration under `head`.
pub fn is_commemoration(head: &Celebration, celebration: &Celebration) -> bool {
    head.precedence == Precedence::PrivilegedWeekday && celebration.rank.is_memorial()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celebration::{Anchor, fixed, relative};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 24).unwrap()
    }

    fn weekday() -> Celebration {
        celebration! { id: "ordinary_time_12_wednesday", date: fixed(6, 24), rank: Feria, precedence: Weekday, colors: [Green], origin: Season }
    }

    fn ids(list: &[Celebration]) -> Vec<&str> {
        list.iter().map(|c| c.id.as_ref()).collect()
    }

    #[test]
    fn solemnity_suppresses_memorial_and_weekday() {
        let solemnity = celebration! { id: "nativity_of_saint_john_the_baptist", date: fixed(6, 24), rank: Solemnity, precedence: GeneralSolemnity, colors: [White] };
        let memorial = celebration! { id: "some_memorial", date: fixed(6, 24), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] };
        let resolved = resolve_day(day(), vec![weekday(), memorial, solemnity]);
        assert_eq!(ids(&resolved), vec!["nativity_of_saint_john_the_baptist"]);
    }

    #[test]
    fn obligatory_memorial_impedes_weekday_and_optional_memorials() {
        let memorial = celebration! { id: "obligatory", date: fixed(6, 24), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] };
        let optional = celebration! { id: "optional", date: fixed(6, 24), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] };
        let resolved = resolve_day(day(), vec![weekday(), optional, memorial]);
        assert_eq!(ids(&resolved), vec!["obligatory"]);
    }

    #[test]
    fn optional_memorials_leave_the_weekday_available() {
        let a = celebration! { id: "optional_a", date: fixed(6, 24), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] };
        let b = celebration! { id: "optional_b", date: fixed(6, 24), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] };
        let resolved = resolve_day(day(), vec![weekday(), a, b]);
        assert_eq!(ids(&resolved), vec!["optional_a", "optional_b", "ordinary_time_12_wednesday"]);
    }

    #[test]
    fn privileged_weekday_keeps_memorials_as_commemorations() {
        let lent = celebration! { id: "lent_2_tuesday", date: fixed(3, 3), rank: Feria, precedence: PrivilegedWeekday, colors: [Violet], origin: Season };
        let memorial = celebration! { id: "memorial", date: fixed(3, 3), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] };
        let resolved = resolve_day(day(), vec![memorial, lent]);
        assert_eq!(ids(&resolved), vec!["lent_2_tuesday", "memorial"]);
        assert!(is_commemoration(&resolved[0], &resolved[1]));
    }

    #[test]
    fn sunday_outranks_feast_of_lower_level() {
        let sunday = celebration! { id: "ordinary_time_5_sunday", date: fixed(2, 8), rank: Sunday, precedence: UnprivilegedSunday, colors: [Green], origin: Season };
        let feast = celebration! { id: "a_feast", date: fixed(2, 8), rank: Feast, precedence: GeneralFeast, colors: [Red] };
        let lord = celebration! { id: "lord_feast", date: relative(Anchor::Easter, 0), rank: Feast, precedence: GeneralLordFeast, colors: [White] };
        assert_eq!(ids(&resolve_day(day(), vec![feast.clone(), sunday.clone()])), vec!["ordinary_time_5_sunday"]);
        assert_eq!(ids(&resolve_day(day(), vec![sunday, feast, lord])), vec!["lord_feast"]);
    }

    #[test]
    #[should_panic(expected = "no celebration candidates")]
    fn empty_day_panics() {
        resolve_day(day(), Vec::new());
    }
}
