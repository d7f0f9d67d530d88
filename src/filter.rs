//! Filtering and sorting of the rendered event list.
//!
//! [`FilterSortEngine::apply`] is a pure function from the rendered cards and
//! a [`FilterCriteria`] to a [`FilterOutcome`]. [`ResultsView`] tracks whether
//! the "no results" placeholder is on screen between applications.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::catalog::EventRecord;
use crate::i18n::Locale;

/// Sort order of the visible cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Name,
    Location,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Name => "name",
            SortKey::Location => "location",
        }
    }

    /// Parse a sort selection; anything unrecognized sorts by date.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "name" => SortKey::Name,
            "location" => SortKey::Location,
            _ => SortKey::Date,
        }
    }
}

/// The combined filter and sort inputs of the events page.
///
/// `None` and empty values do not constrain the result. A `None` sort keeps
/// the catalog order; it is the state before any filter has been applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub sort: Option<SortKey>,
}

impl FilterCriteria {
    pub fn with_search(mut self, text: &str) -> Self {
        self.search_text = text.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = non_empty(Some(category.to_string()));
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = non_empty(Some(date.to_string()));
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = non_empty(Some(location.to_string()));
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// True when no predicate constrains the result.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty()
            && self.category.is_none()
            && self.date.is_none()
            && self.location.is_none()
    }

    /// Whether `event` passes every non-empty predicate.
    pub fn matches(&self, event: &EventRecord) -> bool {
        if !self.search_text.is_empty() {
            let needle = self.search_text.to_lowercase();
            if !event.title.to_lowercase().contains(&needle)
                && !event.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        let exact = |wanted: &Option<String>, actual: &str| match wanted {
            Some(wanted) => wanted == actual,
            None => true,
        };

        exact(&self.category, &event.category)
            && exact(&self.date, &event.date_key())
            && exact(&self.location, &event.location)
    }
}

/// Filter panel state as submitted in a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl From<FilterQuery> for FilterCriteria {
    fn from(query: FilterQuery) -> Self {
        FilterCriteria {
            search_text: query.search.unwrap_or_default(),
            category: non_empty(query.category),
            date: non_empty(query.date),
            location: non_empty(query.location),
            // A submitted panel always sorts, by date unless chosen otherwise
            sort: Some(
                query
                    .sort
                    .as_deref()
                    .map(SortKey::parse_lenient)
                    .unwrap_or_default(),
            ),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Cards split by visibility; `visible` is in sort order, `hidden` keeps its
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    pub visible: Vec<&'a EventRecord>,
    pub hidden: Vec<&'a EventRecord>,
}

impl FilterOutcome<'_> {
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }
}

/// Applies filter criteria with locale-aware text ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterSortEngine {
    locale: Locale,
}

impl FilterSortEngine {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn apply<'a>(
        &self,
        cards: &[&'a EventRecord],
        criteria: &FilterCriteria,
    ) -> FilterOutcome<'a> {
        let (mut visible, hidden): (Vec<&EventRecord>, Vec<&EventRecord>) =
            cards.iter().copied().partition(|event| criteria.matches(event));

        // Stable: equal keys keep their rendered order
        match criteria.sort {
            None => {}
            Some(SortKey::Date) => visible.sort_by(|a, b| a.date.cmp(&b.date)),
            Some(SortKey::Name) => visible.sort_by(|a, b| self.compare(&a.title, &b.title)),
            Some(SortKey::Location) => {
                visible.sort_by(|a, b| self.compare(&a.location, &b.location))
            }
        }

        FilterOutcome { visible, hidden }
    }

    /// Compare two display strings for the engine's locale.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        collation_key(a, self.locale)
            .cmp(&collation_key(b, self.locale))
            .then_with(|| swap_case(a).cmp(&swap_case(b)))
    }
}

/// Lowercase sorts ahead of uppercase on otherwise equal text.
fn swap_case(text: &str) -> String {
    text.chars()
        .flat_map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect()
            }
        })
        .collect()
}

/// Case-folded text; Arabic additionally ignores tatweel and short vowel
/// marks.
fn collation_key(text: &str, locale: Locale) -> String {
    let folded = text.to_lowercase();
    match locale {
        Locale::Ar => folded
            .chars()
            .filter(|c| !matches!(c, '\u{0640}' | '\u{064B}'..='\u{065F}' | '\u{0670}'))
            .collect(),
        Locale::En => folded,
    }
}

/// Whether the "no results" placeholder is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsState {
    #[default]
    ResultsShown,
    NoResultsShown,
}

/// What the caller must do with the placeholder after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderChange {
    Insert,
    Remove,
    Keep,
}

/// Two-state machine for one filtered view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultsView {
    state: ResultsState,
}

impl ResultsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ResultsState {
        self.state
    }

    pub fn shows_placeholder(&self) -> bool {
        self.state == ResultsState::NoResultsShown
    }

    /// Move to the state implied by `visible_count`.
    pub fn transition(&mut self, visible_count: usize) -> PlaceholderChange {
        let next = if visible_count == 0 {
            ResultsState::NoResultsShown
        } else {
            ResultsState::ResultsShown
        };

        let change = match (self.state, next) {
            (ResultsState::ResultsShown, ResultsState::NoResultsShown) => PlaceholderChange::Insert,
            (ResultsState::NoResultsShown, ResultsState::ResultsShown) => PlaceholderChange::Remove,
            _ => PlaceholderChange::Keep,
        };
        self.state = next;
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{event, six_events};

    fn ids(events: &[&EventRecord]) -> Vec<u32> {
        events.iter().map(|e| e.id).collect()
    }

    fn apply<'a>(events: &'a [EventRecord], criteria: &FilterCriteria) -> FilterOutcome<'a> {
        let cards: Vec<&EventRecord> = events.iter().collect();
        FilterSortEngine::new(Locale::En).apply(&cards, criteria)
    }

    // ==================== Predicate Tests ====================

    #[test]
    fn test_uncommitted_criteria_keep_catalog_order() {
        let events = six_events();
        let outcome = apply(&events, &FilterCriteria::default());
        assert_eq!(ids(&outcome.visible), vec![1, 2, 3, 4, 5, 6]);
        assert!(outcome.hidden.is_empty());
    }

    #[test]
    fn test_date_sort_shows_all_by_date() {
        let events = six_events();
        let outcome = apply(&events, &FilterCriteria::default().with_sort(SortKey::Date));
        assert_eq!(ids(&outcome.visible), vec![5, 2, 1, 4, 3, 6]);
    }

    #[test]
    fn test_category_music() {
        let events = six_events();
        let outcome = apply(&events, &FilterCriteria::default().with_category("Music"));
        assert_eq!(outcome.visible_count(), 3);
        assert!(outcome.visible.iter().all(|e| e.category == "Music"));
        assert_eq!(ids(&outcome.hidden), vec![2, 4, 6]);
    }

    #[test]
    fn test_category_nonexistent() {
        let events = six_events();
        let outcome = apply(&events, &FilterCriteria::default().with_category("NonExistent"));
        assert_eq!(outcome.visible_count(), 0);
        assert_eq!(outcome.hidden.len(), 6);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_and_description() {
        let mut events = six_events();
        events[1].description = "Oil and JAZZ-inspired canvases".to_string();

        let criteria = FilterCriteria::default()
            .with_search("jazz")
            .with_sort(SortKey::Date);
        assert_eq!(ids(&apply(&events, &criteria).visible), vec![2, 1]);
    }

    #[test]
    fn test_search_arabic() {
        let events = vec![
            event(1, "ليلة جاز", "موسيقى", "دمشق", "2025-03-15"),
            event(2, "معرض رسم", "فنون", "حلب", "2025-02-10"),
            event(3, "أمسية عود", "موسيقى", "حمص", "2025-04-01"),
        ];
        let outcome = apply(&events, &FilterCriteria::default().with_search("جاز"));
        assert_eq!(ids(&outcome.visible), vec![1]);
    }

    #[test]
    fn test_date_and_location_exact() {
        let events = six_events();
        let criteria = FilterCriteria::default()
            .with_date("2025-03-15")
            .with_location("Old Town");
        assert_eq!(ids(&apply(&events, &criteria).visible), vec![1, 4]);

        let partial = FilterCriteria::default().with_location("Old");
        assert_eq!(apply(&events, &partial).visible_count(), 0);
    }

    #[test]
    fn test_empty_values_do_not_constrain() {
        let criteria = FilterCriteria::default().with_category("").with_date("");
        assert!(criteria.is_unfiltered());
    }

    #[test]
    fn test_combined_is_intersection() {
        let events = six_events();
        let music = FilterCriteria::default().with_category("Music");
        let gallery = FilterCriteria::default().with_location("Gallery");
        let both = FilterCriteria::default()
            .with_category("Music")
            .with_location("Gallery");

        let a = ids(&apply(&events, &music).visible);
        let b = ids(&apply(&events, &gallery).visible);
        let combined = ids(&apply(&events, &both).visible);
        let expected: Vec<u32> = a.iter().copied().filter(|id| b.contains(id)).collect();
        assert_eq!(combined, expected);
        assert_eq!(combined, vec![5]);
    }

    // ==================== Sort Tests ====================

    #[test]
    fn test_sort_by_name() {
        let events = six_events();
        let outcome = apply(&events, &FilterCriteria::default().with_sort(SortKey::Name));
        assert_eq!(ids(&outcome.visible), vec![5, 1, 3, 2, 4, 6]);
    }

    #[test]
    fn test_sort_by_location_is_stable() {
        let events = six_events();
        let outcome = apply(&events, &FilterCriteria::default().with_sort(SortKey::Location));
        // Gallery(2,5) Old Town(1,4) Opera House(3,6), input order within ties
        assert_eq!(ids(&outcome.visible), vec![2, 5, 1, 4, 3, 6]);
    }

    #[test]
    fn test_sort_by_date_idempotent() {
        let events = six_events();
        let by_date = FilterCriteria::default().with_sort(SortKey::Date);
        let first = apply(&events, &by_date);
        let again = FilterSortEngine::new(Locale::En).apply(&first.visible, &by_date);
        assert_eq!(ids(&first.visible), ids(&again.visible));
    }

    #[test]
    fn test_compare_ignores_case_then_lowercase_first() {
        let engine = FilterSortEngine::new(Locale::En);
        assert_eq!(engine.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(engine.compare("apple", "Apple"), Ordering::Less);
        assert_eq!(engine.compare("Apple", "apple"), Ordering::Greater);
        assert_eq!(engine.compare("jazz Night", "Jazz night"), Ordering::Less);
        assert_eq!(engine.compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_compare_arabic_ignores_marks() {
        let engine = FilterSortEngine::new(Locale::Ar);
        // "مُوسيقى" with damma sorts with "موسيقى"
        assert_eq!(
            collation_key("مُوسيقى", Locale::Ar),
            collation_key("موسيقى", Locale::Ar)
        );
        assert_eq!(engine.compare("ب", "أ"), Ordering::Greater);
    }

    // ==================== Query Tests ====================

    #[test]
    fn test_query_into_criteria() {
        let query = FilterQuery {
            search: Some("oud".to_string()),
            category: Some(String::new()),
            date: None,
            location: Some("Gallery".to_string()),
            sort: Some("NAME".to_string()),
        };
        let criteria = FilterCriteria::from(query);
        assert_eq!(criteria.search_text, "oud");
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.location.as_deref(), Some("Gallery"));
        assert_eq!(criteria.sort, Some(SortKey::Name));
    }

    #[test]
    fn test_query_without_sort_sorts_by_date() {
        let query = FilterQuery {
            search: None,
            category: Some("Music".to_string()),
            date: None,
            location: None,
            sort: None,
        };
        assert_eq!(FilterCriteria::from(query).sort, Some(SortKey::Date));
    }

    #[test]
    fn test_sort_key_lenient() {
        assert_eq!(SortKey::parse_lenient("location"), SortKey::Location);
        assert_eq!(SortKey::parse_lenient("price"), SortKey::Date);
    }

    // ==================== Results View Tests ====================

    #[test]
    fn test_results_view_transitions() {
        let mut view = ResultsView::new();
        assert_eq!(view.state(), ResultsState::ResultsShown);

        assert_eq!(view.transition(0), PlaceholderChange::Insert);
        assert!(view.shows_placeholder());
        assert_eq!(view.transition(0), PlaceholderChange::Keep);
        assert_eq!(view.transition(2), PlaceholderChange::Remove);
        assert_eq!(view.state(), ResultsState::ResultsShown);
        assert_eq!(view.transition(5), PlaceholderChange::Keep);
    }
}
