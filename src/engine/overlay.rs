//! Locale overlays: insert, patch and suppress operations on a dated table.
//!
//! Overlays apply in list order. Insert is an upsert, so applying a list twice
//! yields the same table. When two patches touch the same id, the later one
//! wins field by field.

use std::borrow::Cow;

use crate::celebration::{Celebration, Color, DateRule, Origin, Precedence, Rank};
use crate::engine::table::{YearContext, YearTable};

/// Field overrides applied to an existing celebration. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub rank: Option<Rank>,
    pub precedence: Option<Precedence>,
    pub colors: Option<Vec<Color>>,
    pub title: Option<Cow<'static, str>>,
    pub is_holy_day_of_obligation: Option<bool>,
    pub suppresses_lower_ranks: Option<bool>,
    pub date_rule: Option<DateRule>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank(mut self, rank: Rank) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = Some(precedence);
        self
    }

    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn obligation(mut self, obligation: bool) -> Self {
        self.is_holy_day_of_obligation = Some(obligation);
        self
    }

    pub fn suppresses(mut self, suppresses: bool) -> Self {
        self.suppresses_lower_ranks = Some(suppresses);
        self
    }

    pub fn date(mut self, rule: DateRule) -> Self {
        self.date_rule = Some(rule);
        self
    }

    /// A rank change without an explicit precedence takes the proper
    /// precedence of the new rank, and the rank's default suppression.
    pub fn apply_to(&self, celebration: &mut Celebration) {
        if let Some(rank) = self.rank {
            celebration.rank = rank;
            celebration.precedence = Precedence::proper_for(rank, celebration.precedence);
            celebration.suppresses_lower_ranks = rank.suppresses_by_default();
        }
        if let Some(precedence) = self.precedence {
            celebration.precedence = precedence;
        }
        if let Some(colors) = &self.colors {
            celebration.colors = colors.clone();
        }
        if let Some(title) = &self.title {
            celebration.title = Some(title.clone());
        }
        if let Some(obligation) = self.is_holy_day_of_obligation {
            celebration.is_holy_day_of_obligation = obligation;
        }
        if let Some(suppresses) = self.suppresses_lower_ranks {
            celebration.suppresses_lower_ranks = suppresses;
        }
        if let Some(rule) = self.date_rule {
            celebration.date_rule = rule;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// Add a celebration, replacing any existing one with the same id.
    Insert(Celebration),
    Patch { base_id: Cow<'static, str>, patch: Patch },
    Suppress { base_id: Cow<'static, str> },
}

impl Overlay {
    pub fn patch(base_id: &'static str, patch: Patch) -> Self {
        Overlay::Patch { base_id: Cow::Borrowed(base_id), patch }
    }

    pub fn suppress(base_id: &'static str) -> Self {
        Overlay::Suppress { base_id: Cow::Borrowed(base_id) }
    }

    /// Id of the celebration the overlay touches.
    pub fn target(&self) -> &str {
        match self {
            Overlay::Insert(celebration) => &celebration.id,
            Overlay::Patch { base_id, .. } | Overlay::Suppress { base_id } => base_id,
        }
    }
}

pub(crate) fn apply_overlays(context: &YearContext, table: &mut YearTable, overlays: &[Overlay]) {
    for overlay in overlays {
        match overlay {
            Overlay::Insert(celebration) => {
                table.take(&celebration.id);
                let date = context.date_of(&celebration.id, celebration.date_rule);
                if celebration.origin == Origin::ProperOfTime {
                    table.remove_fillers(date);
                }
                log::trace!("insert {} on {date}", celebration.id);
                table.push(date, celebration.clone());
            }
            Overlay::Patch { base_id, patch } if patch.date_rule.is_some() => {
                let taken = table.take(base_id);
                if taken.is_empty() {
                    log::trace!("patch target {base_id} does not occur in {}", table.year);
                }
                for (_, mut celebration) in taken {
                    patch.apply_to(&mut celebration);
                    let date = context.date_of(&celebration.id, celebration.date_rule);
                    log::trace!("patch {base_id}: moved to {date}");
                    table.push(date, celebration);
                }
            }
            Overlay::Patch { base_id, patch } => {
                let touched = table.modify(base_id, |c| patch.apply_to(c));
                if touched == 0 {
                    // Generated fillers do not occur every year (e.g. a 9th Sunday of Ordinary Time).
                    log::trace!("patch target {base_id} does not occur in {}", table.year);
                }
            }
            Overlay::Suppress { base_id } => {
                let removed = table.take(base_id);
                log::trace!("suppress {base_id}: {} instance(s)", removed.len());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CalendarConfig;
    use crate::calendars::base_definitions;
    use crate::celebration::fixed;
    use crate::engine::table::{date_definitions, fill_seasons};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup(year: i32) -> (YearContext, YearTable) {
        let context = YearContext::new(year, &CalendarConfig::default());
        let mut table = date_definitions(&context, base_definitions());
        fill_seasons(&context, &mut table);
        (context, table)
    }

    fn find<'a>(table: &'a YearTable, day: NaiveDate, id: &str) -> Option<&'a Celebration> {
        table.get(day).iter().find(|c| c.id == id)
    }

    #[test]
    fn promotion_derives_proper_precedence() {
        let (context, mut table) = setup(2026);
        apply_overlays(&context, &mut table, &[Overlay::patch("john_of_avila_priest", Patch::new().rank(Rank::Feast))]);
        let avila = find(&table, date(2026, 5, 10), "john_of_avila_priest").unwrap();
        assert_eq!(avila.rank, Rank::Feast);
        assert_eq!(avila.precedence, Precedence::ProperFeast);
        assert!(avila.suppresses_lower_ranks);
    }

    #[test]
    fn insert_is_an_upsert() {
        let (context, mut table) = setup(2026);
        let pillar = celebration! {
            id: "our_lady_of_the_pillar",
            date: fixed(10, 12),
            rank: Feast,
            precedence: ProperFeast,
            colors: [White],
            origin: Local,
        };
        let overlays = [Overlay::Insert(pillar.clone()), Overlay::Insert(pillar)];
        apply_overlays(&context, &mut table, &overlays);
        let once = table.clone();
        apply_overlays(&context, &mut table, &overlays);
        assert_eq!(table, once);
        assert_eq!(table.dates_of("our_lady_of_the_pillar"), vec![date(2026, 10, 12)]);
    }

    #[test]
    fn later_patch_wins_field_by_field() {
        let (context, mut table) = setup(2026);
        let overlays = [
            Overlay::patch("james_apostle", Patch::new().rank(Rank::Solemnity).title("first")),
            Overlay::patch("james_apostle", Patch::new().title("second")),
        ];
        apply_overlays(&context, &mut table, &overlays);
        let james = find(&table, date(2026, 7, 25), "james_apostle").unwrap();
        assert_eq!(james.rank, Rank::Solemnity);
        assert_eq!(james.title.as_deref(), Some("second"));
    }

    #[test]
    fn suppress_and_move() {
        let (context, mut table) = setup(2026);
        let overlays = [
            Overlay::suppress("sylvester_i_pope"),
            Overlay::patch("thomas_apostle", Patch::new().date(fixed(12, 21))),
        ];
        apply_overlays(&context, &mut table, &overlays);
        assert!(table.dates_of("sylvester_i_pope").is_empty());
        assert_eq!(table.dates_of("thomas_apostle"), vec![date(2026, 12, 21)]);
    }
}
