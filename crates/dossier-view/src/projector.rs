//! View projection: the fixed filter -> sort -> group pipeline.

use tracing::debug;

use dossier_model::{Record, Schema, ViewState};

use crate::comparator::Comparator;
use crate::error::Result;
use crate::grouper::{Group, group_records};
use crate::predicate::Predicate;

/// The computed, read-only projection of a record store under one view state.
///
/// Always a subset/reordering of the input records. Empty is a valid state;
/// renderers show an explicit "no matching records" affordance for it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DerivedView {
    Flat(Vec<Record>),
    Grouped(Vec<Group>),
}

impl DerivedView {
    pub fn len(&self) -> usize {
        match self {
            DerivedView::Flat(records) => records.len(),
            DerivedView::Grouped(groups) => groups.iter().map(|g| g.records.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records in display order, flattening groups.
    pub fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        match self {
            DerivedView::Flat(records) => Box::new(records.iter()),
            DerivedView::Grouped(groups) => {
                Box::new(groups.iter().flat_map(|g| g.records.iter()))
            }
        }
    }
}

/// Project `records` through the active view state.
///
/// Pipeline order is fixed for reproducible output: filter, then sort, then
/// group when a grouping key is set. Pure and synchronous; safe to call on
/// every interaction. With no sort key the filtered records keep their store
/// order exactly.
pub fn project(schema: &Schema, records: &[Record], state: &ViewState) -> Result<DerivedView> {
    let predicate = Predicate::compile(schema, state)?;
    let mut filtered = if predicate.is_identity() {
        records.to_vec()
    } else {
        let mut matched = Vec::new();
        for record in records {
            if predicate.matches(record)? {
                matched.push(record.clone());
            }
        }
        matched
    };
    debug!(
        catalog = schema.name(),
        total = records.len(),
        matched = filtered.len(),
        "filtered records"
    );

    if let Some(key) = &state.sort_key {
        let comparator = Comparator::select(schema, key, state.direction)?;
        // Sort keys are extracted up front so a malformed record surfaces as
        // an error instead of a panic inside the comparator closure.
        let mut decorated = filtered
            .into_iter()
            .map(|record| {
                let key_value = comparator.sort_value(&record)?.clone();
                Ok((key_value, record))
            })
            .collect::<Result<Vec<_>>>()?;
        // sort_by is stable: records with equal keys keep their store order.
        decorated.sort_by(|a, b| comparator.compare_values(&a.0, &b.0));
        filtered = decorated.into_iter().map(|(_, record)| record).collect();
        debug!(key = %key, direction = ?state.direction, "sorted records");
    }

    match &state.group_by {
        Some(key) => {
            let groups = group_records(filtered, schema, key)?;
            debug!(key = %key, groups = groups.len(), "grouped records");
            Ok(DerivedView::Grouped(groups))
        }
        None => Ok(DerivedView::Flat(filtered)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewError;
    use chrono::NaiveDate;
    use dossier_model::{Direction, FieldKind, FieldName, FieldSpec, FieldValue, RecordId};

    fn name(value: &str) -> FieldName {
        FieldName::new(value).unwrap()
    }

    fn schema() -> Schema {
        Schema::new(
            "documents",
            vec![
                FieldSpec::new(name("title"), FieldKind::Text).searchable(),
                FieldSpec::new(name("category"), FieldKind::Category),
                FieldSpec::new(name("date"), FieldKind::Date),
            ],
        )
        .unwrap()
    }

    fn doc(id: &str, title: &str, category: &str, date: (i32, u32, u32)) -> Record {
        Record::new(RecordId::new(id).unwrap())
            .with_cell(name("title"), FieldValue::text(title))
            .with_cell(name("category"), FieldValue::text(category))
            .with_cell(
                name("date"),
                FieldValue::Date(NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap()),
            )
    }

    fn store() -> Vec<Record> {
        vec![
            doc("1", "FDA Memo", "Health", (2024, 11, 15)),
            doc("2", "Lobbying Report", "Corporate", (2024, 10, 28)),
            doc("3", "EPA Waivers", "Environmental", (2024, 9, 12)),
            doc("4", "Budget Allocation", "Government", (2024, 8, 3)),
        ]
    }

    #[test]
    fn identity_projection_preserves_store_order() {
        let records = store();
        let view = project(&schema(), &records, &ViewState::new()).unwrap();
        let DerivedView::Flat(flat) = view else {
            panic!("expected flat view");
        };
        assert_eq!(flat, records);
    }

    #[test]
    fn pipeline_filters_before_sorting() {
        let records = store();
        let state = ViewState::new()
            .with_search("report")
            .with_sort(name("date"), Direction::Ascending);
        let view = project(&schema(), &records, &state).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.records().next().unwrap().id().as_str(), "2");
    }

    #[test]
    fn sort_orders_whole_result() {
        let records = store();
        let state = ViewState::new().with_sort(name("date"), Direction::Descending);
        let view = project(&schema(), &records, &state).unwrap();
        let ids: Vec<&str> = view.records().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn grouping_runs_after_filter_and_sort() {
        let mut records = store();
        records.push(doc("5", "Trial Data", "Health", (2024, 7, 22)));
        let state = ViewState::new()
            .with_sort(name("date"), Direction::Ascending)
            .with_group_by(name("category"));
        let view = project(&schema(), &records, &state).unwrap();
        let DerivedView::Grouped(groups) = view else {
            panic!("expected grouped view");
        };
        // Oldest record first after the ascending sort, so its category
        // opens the group order.
        assert_eq!(groups[0].key, "Health");
        assert_eq!(groups[0].records[0].id().as_str(), "5");
    }

    #[test]
    fn record_without_the_sort_cell_is_an_error_not_a_panic() {
        let mut records = store();
        records.push(
            Record::new(RecordId::new("9").unwrap())
                .with_cell(name("title"), FieldValue::text("Fragment"))
                .with_cell(name("category"), FieldValue::text("Health")),
        );
        let state = ViewState::new().with_sort(name("date"), Direction::Ascending);
        assert!(matches!(
            project(&schema(), &records, &state),
            Err(ViewError::MissingField { .. })
        ));
    }

    #[test]
    fn empty_result_is_valid() {
        let records = store();
        let state = ViewState::new().with_search("nonexistent");
        let view = project(&schema(), &records, &state).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn projection_is_idempotent() {
        let records = store();
        let state = ViewState::new()
            .with_search("e")
            .with_sort(name("title"), Direction::Ascending);
        let first = project(&schema(), &records, &state).unwrap();
        let second = project(&schema(), &records, &state).unwrap();
        assert_eq!(first, second);
    }
}
