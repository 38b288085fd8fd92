//! Event catalog: the static dataset and its category filter.
//!
//! Events are immutable once the catalog is built. [`EventCatalog::filter`]
//! is the only query the navigator needs: it returns the events matching an
//! active-category set in chronological `(year, month)` order, with ties kept
//! in catalog order.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::CatalogError;

/// Event identifier, unique within a catalog.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The fixed set of event categories.
///
/// Displays and parses as the lowercase id (`"ai"`, `"environment"`, ...),
/// which is also the spelling used by the CLI and config files.
#[derive(
    Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd,
    Serialize, Deserialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CategoryId {
    Tech,
    Science,
    Society,
    Environment,
    Ai,
}

/// Category metadata shown in filters and badges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub display_name: String,
    /// Hex colour, `#rrggbb`.
    pub color: String,
}

/// A single dated event, one frame in the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub year: i32,
    /// Month of year, 1-12.
    pub month: u8,
    pub title: String,
    pub description: String,
    pub category: CategoryId,
    /// Significance, 1-10.
    pub importance: u8,
}

impl Event {
    /// Chronological sort key.
    pub fn sort_key(&self) -> (i32, u8) {
        (self.year, self.month)
    }

    /// Human-readable date, e.g. `"March 2024"`.
    pub fn date_label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    /// Importance as a fraction of the maximum (0.1 – 1.0).
    pub fn importance_fraction(&self) -> f32 {
        f32::from(self.importance) / 10.0
    }
}

/// English month name for `month` in 1-12, `"Unknown"` otherwise.
pub fn month_name(month: u8) -> &'static str {
    const MONTHS: [&str; 12] = [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ];
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i))
        .copied()
        .unwrap_or("Unknown")
}

/// Validated, immutable collection of events and categories.
#[derive(Clone, Debug)]
pub struct EventCatalog {
    categories: Vec<Category>,
    events: Vec<Event>,
}

impl EventCatalog {
    /// Build a catalog, validating every event.
    ///
    /// Event order is preserved; it is the tie-breaker for events sharing a
    /// `(year, month)`.
    pub fn new(categories: Vec<Category>, events: Vec<Event>) -> Result<Self, CatalogError> {
        let known: HashSet<CategoryId> = categories.iter().map(|c| c.id).collect();
        let mut seen = HashSet::with_capacity(events.len());

        for event in &events {
            if !seen.insert(event.id) {
                return Err(CatalogError::DuplicateEvent(event.id));
            }
            if !(1..=12).contains(&event.month) {
                return Err(CatalogError::InvalidMonth { id: event.id, month: event.month });
            }
            if !(1..=10).contains(&event.importance) {
                return Err(CatalogError::InvalidImportance {
                    id: event.id,
                    importance: event.importance,
                });
            }
            if !known.contains(&event.category) {
                return Err(CatalogError::UnknownCategory {
                    id: event.id,
                    category: event.category,
                });
            }
        }

        Ok(Self { categories, events })
    }

    /// The built-in 2020–2030 dataset.
    pub fn builtin() -> Self {
        Self {
            categories: crate::dataset::categories(),
            events: crate::dataset::events(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All events in catalog order (not sorted).
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events matching `active`, sorted by `(year, month)`.
    ///
    /// An empty set means "no filter" and returns every event.
    pub fn filter(&self, active: &BTreeSet<CategoryId>) -> Vec<&Event> {
        self.filter_positions(active)
            .into_iter()
            .map(|pos| &self.events[pos])
            .collect()
    }

    /// Like [`filter`](Self::filter) but returns positions into [`events`](Self::events).
    pub(crate) fn filter_positions(&self, active: &BTreeSet<CategoryId>) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, e)| active.is_empty() || active.contains(&e.category))
            .map(|(pos, _)| pos)
            .collect();
        // sort_by_key is stable, so equal dates keep catalog order
        positions.sort_by_key(|&pos| self.events[pos].sort_key());
        positions
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn event(id: u32, year: i32, month: u8, category: CategoryId) -> Event {
        Event {
            id: EventId(id),
            year,
            month,
            title: format!("event {id}"),
            description: String::new(),
            category,
            importance: 5,
        }
    }

    fn catalog(events: Vec<Event>) -> EventCatalog {
        EventCatalog::new(crate::dataset::categories(), events).unwrap()
    }

    #[test]
    fn test_builtin_catalog_validates() {
        let builtin = EventCatalog::builtin();
        let rebuilt =
            EventCatalog::new(builtin.categories().to_vec(), builtin.events().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(builtin.len(), 21);
        assert_eq!(builtin.categories().len(), 5);
    }

    #[test]
    fn test_filter_empty_set_returns_everything_sorted() {
        let cat = catalog(vec![
            event(1, 2024, 3, CategoryId::Ai),
            event(2, 2020, 3, CategoryId::Tech),
            event(3, 2022, 11, CategoryId::Science),
        ]);
        let ids: Vec<u32> = cat.filter(&BTreeSet::new()).iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_filter_by_category() {
        let cat = EventCatalog::builtin();
        let active = BTreeSet::from([CategoryId::Environment]);
        let filtered = cat.filter(&active);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|e| e.category == CategoryId::Environment));
        assert!(filtered.windows(2).all(|w| w[0].sort_key() <= w[1].sort_key()));
    }

    #[test]
    fn test_filter_ties_keep_catalog_order() {
        let cat = catalog(vec![
            event(10, 2025, 5, CategoryId::Ai),
            event(11, 2021, 1, CategoryId::Ai),
            event(12, 2025, 5, CategoryId::Tech),
        ]);
        let ids: Vec<u32> = cat.filter(&BTreeSet::new()).iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![11, 10, 12]);
    }

    #[test]
    fn test_filter_can_be_empty() {
        let cat = catalog(vec![event(1, 2020, 1, CategoryId::Tech)]);
        let active = BTreeSet::from([CategoryId::Society]);
        assert!(cat.filter(&active).is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = EventCatalog::new(
            crate::dataset::categories(),
            vec![event(1, 2020, 1, CategoryId::Tech), event(1, 2021, 1, CategoryId::Ai)],
        );
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateEvent(EventId(1)));
    }

    #[test]
    fn test_rejects_bad_month_and_importance() {
        let bad_month = EventCatalog::new(
            crate::dataset::categories(),
            vec![event(1, 2020, 13, CategoryId::Tech)],
        );
        assert!(matches!(bad_month, Err(CatalogError::InvalidMonth { month: 13, .. })));

        let mut low = event(2, 2020, 1, CategoryId::Tech);
        low.importance = 0;
        let bad_importance = EventCatalog::new(crate::dataset::categories(), vec![low]);
        assert!(matches!(
            bad_importance,
            Err(CatalogError::InvalidImportance { importance: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let only_tech = vec![Category {
            id: CategoryId::Tech,
            display_name: "Technology".into(),
            color: "#4285F4".into(),
        }];
        let result = EventCatalog::new(only_tech, vec![event(1, 2020, 1, CategoryId::Ai)]);
        assert!(matches!(result, Err(CatalogError::UnknownCategory { .. })));
    }

    #[test]
    fn test_category_id_strings() {
        for id in CategoryId::iter() {
            let s = id.to_string();
            assert_eq!(s.parse::<CategoryId>().unwrap(), id);
        }
        assert_eq!("AI".parse::<CategoryId>().unwrap(), CategoryId::Ai);
        assert_eq!(CategoryId::Environment.to_string(), "environment");
        assert!("sports".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_date_label_and_month_name() {
        let e = event(1, 2024, 3, CategoryId::Ai);
        assert_eq!(e.date_label(), "March 2024");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(month_name(13), "Unknown");
    }
}
