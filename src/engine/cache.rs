//! Memoized calendars keyed by `(year, locale, config)`.
//!
//! The map lock is held only to fetch or create a slot; generation runs inside
//! the slot's `OnceCell`, so concurrent callers asking for the same key wait for
//! one computation while other keys proceed in parallel.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::api::{self, Calendar, CalendarConfig, Locale, Options};
use crate::calendars;
use crate::error::Result;

type Key = (i32, Locale, CalendarConfig);
type Slot = Arc<OnceCell<Arc<Calendar>>>;

#[derive(Debug, Default)]
pub struct CalendarCache {
    slots: Mutex<HashMap<Key, Slot>>,
}

impl CalendarCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: Key) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        slots.entry(key).or_default().clone()
    }

    /// Civil-year calendar, computed at most once per key. Out-of-range
    /// years fail before a slot is created.
    pub fn get_or_generate(&self, year: i32, locale: Locale, options: &Options) -> Result<Arc<Calendar>> {
        api::check_year(year)?;
        let config = options.config.unwrap_or(calendars::for_locale(locale).config);
        let slot = self.slot((year, locale, config));
        if let Some(calendar) = slot.get() {
            log::trace!("cache hit: {year} {locale}");
            return Ok(calendar.clone());
        }
        slot.get_or_try_init(|| {
            log::trace!("cache miss: {year} {locale}");
            api::generate_calendar_with(year, locale, &Options { config: Some(config) }).map(Arc::new)
        })
        .cloned()
    }

    /// Liturgical year `year`, assembled from the two cached civil years it spans.
    pub fn liturgical_year(&self, year: i32, locale: Locale, options: &Options) -> Result<Calendar> {
        api::check_liturgical_year(year)?;
        let previous = self.get_or_generate(year - 1, locale, options)?;
        let current = self.get_or_generate(year, locale, options)?;
        Ok(Calendar::liturgical_year(year, [previous.as_ref(), current.as_ref()]))
    }

    /// Number of keys with a slot (computed or in flight).
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn same_key_is_computed_once() {
        let cache = CalendarCache::new();
        let a = cache.get_or_generate(2026, Locale::Es, &Options::default()).unwrap();
        let b = cache.get_or_generate(2026, Locale::Es, &Options::default()).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn concurrent_callers_share_one_calendar() {
        let cache = Arc::new(CalendarCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_generate(2025, Locale::La, &Options::default()).unwrap())
            })
            .collect();
        let calendars: Vec<Arc<Calendar>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(calendars.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = CalendarCache::new();
        assert!(cache.get_or_generate(1000, Locale::Es, &Options::default()).is_err());
        assert!(cache.get_or_generate(1000, Locale::Es, &Options::default()).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn rejected_years_leave_no_slots() {
        let cache = CalendarCache::new();
        for year in [999, 1000, crate::MIN_YEAR - 1, crate::MAX_YEAR + 1, 50_000] {
            assert!(cache.get_or_generate(year, Locale::La, &Options::default()).is_err());
        }
        assert!(cache.liturgical_year(crate::MIN_YEAR, Locale::La, &Options::default()).is_err());
        assert_eq!(cache.len(), 0);
        cache.get_or_generate(2026, Locale::La, &Options::default()).unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn liturgical_year_reuses_civil_years() {
        let cache = CalendarCache::new();
        let year = cache.liturgical_year(2026, Locale::Es, &Options::default()).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(year, api::generate_liturgical_year(2026, Locale::Es).unwrap());

        // The locale's own config spelled out explicitly hits the same slots.
        let explicit = Options { config: Some(calendars::for_locale(Locale::Es).config) };
        cache.liturgical_year(2026, Locale::Es, &explicit).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
