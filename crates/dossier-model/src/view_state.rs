//! Per-view query parameters.
//!
//! A `ViewState` is owned by exactly one interactive view: created with
//! defaults when the view opens, updated atomically on each interaction, and
//! discarded when the view closes. It is never shared or persisted.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{FieldName, RecordId};

/// Sort direction applied to a base comparator by sign inversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// Layout mode for the rendered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

/// The user-chosen query parameters for one view instance.
///
/// Each interactive control maps to exactly one field here. A categorical
/// dimension with no entry in `filters` means "All" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub filters: BTreeMap<FieldName, String>,
    pub sort_key: Option<FieldName>,
    pub direction: Direction,
    pub group_by: Option<FieldName>,
    pub view_mode: ViewMode,
    pub expanded: Option<RecordId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    #[must_use]
    pub fn with_filter(mut self, dimension: FieldName, value: impl Into<String>) -> Self {
        self.filters.insert(dimension, value.into());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, key: FieldName, direction: Direction) -> Self {
        self.sort_key = Some(key);
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_group_by(mut self, key: FieldName) -> Self {
        self.group_by = Some(key);
        self
    }

    #[must_use]
    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_filter(&mut self, dimension: FieldName, value: impl Into<String>) {
        self.filters.insert(dimension, value.into());
    }

    /// Return the dimension to "All".
    pub fn clear_filter(&mut self, dimension: &FieldName) {
        self.filters.remove(dimension);
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Expand a record, or collapse it when it is already expanded.
    pub fn toggle_expanded(&mut self, id: RecordId) {
        if self.expanded.as_ref() == Some(&id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_reverses_ordering() {
        assert_eq!(Direction::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(
            Direction::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(Direction::Descending.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn toggle_expanded_collapses_same_record() {
        let mut state = ViewState::new();
        let id = RecordId::new("3").unwrap();
        state.toggle_expanded(id.clone());
        assert_eq!(state.expanded, Some(id.clone()));
        state.toggle_expanded(id);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn clear_filter_restores_all() {
        let dim = FieldName::new("category").unwrap();
        let mut state = ViewState::new().with_filter(dim.clone(), "Health");
        assert_eq!(state.filters.get(&dim).map(String::as_str), Some("Health"));
        state.clear_filter(&dim);
        assert!(state.filters.is_empty());
    }
}
