//! Property tests for the projection pipeline.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use dossier_model::{
    Direction, FieldKind, FieldName, FieldSpec, FieldValue, Record, RecordId, Schema, ViewState,
};
use dossier_view::{DerivedView, Predicate, project};

fn name(value: &str) -> FieldName {
    FieldName::new(value).unwrap()
}

fn schema() -> Schema {
    Schema::new(
        "documents",
        vec![
            FieldSpec::new(name("title"), FieldKind::Text).searchable(),
            FieldSpec::new(name("category"), FieldKind::Category),
            FieldSpec::new(name("downloads"), FieldKind::Number),
        ],
    )
    .unwrap()
}

const CATEGORIES: [&str; 4] = ["Health", "Corporate", "Government", "Financial"];

fn arb_store() -> impl Strategy<Value = Vec<Record>> {
    let cell = (
        "[a-z]{0,12}",
        proptest::sample::select(&CATEGORIES[..]),
        0i64..5000,
    );
    proptest::collection::vec(cell, 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (title, category, downloads))| {
                Record::new(RecordId::new(format!("r{idx}")).unwrap())
                    .with_cell(name("title"), FieldValue::text(title))
                    .with_cell(name("category"), FieldValue::text(category))
                    .with_cell(name("downloads"), FieldValue::Number(downloads))
            })
            .collect()
    })
}

fn arb_state() -> impl Strategy<Value = ViewState> {
    (
        proptest::option::of("[a-z]{0,3}"),
        proptest::option::of(proptest::sample::select(&CATEGORIES[..])),
        proptest::option::of(proptest::sample::select(vec![
            name("title"),
            name("downloads"),
        ])),
        proptest::bool::ANY,
    )
        .prop_map(|(search, category, sort_key, descending)| {
            let mut state = ViewState::new();
            if let Some(term) = search {
                state.set_search(term);
            }
            if let Some(value) = category {
                state.set_filter(name("category"), value);
            }
            if let Some(key) = sort_key {
                state.sort_key = Some(key);
                state.direction = if descending {
                    Direction::Descending
                } else {
                    Direction::Ascending
                };
            }
            state
        })
}

proptest! {
    /// The filtered view is exactly the predicate's extension: every record
    /// in the view satisfies the predicate, and every store record that
    /// satisfies it is in the view.
    #[test]
    fn filter_matches_predicate_extension(store in arb_store(), state in arb_state()) {
        let schema = schema();
        let predicate = Predicate::compile(&schema, &state).unwrap();
        let view = project(&schema, &store, &state).unwrap();
        let view_ids: Vec<&str> = view.records().map(|r| r.id().as_str()).collect();

        for record in view.records() {
            prop_assert!(predicate.matches(record).unwrap());
        }
        for record in &store {
            let expected = predicate.matches(record).unwrap();
            prop_assert_eq!(view_ids.contains(&record.id().as_str()), expected);
        }
    }

    /// Adjacent pairs of the projected sequence are ordered under the
    /// active comparator and direction.
    #[test]
    fn adjacent_pairs_are_ordered(store in arb_store(), state in arb_state()) {
        let schema = schema();
        prop_assume!(state.sort_key.is_some());
        let key = state.sort_key.clone().unwrap();
        let comparator =
            dossier_view::Comparator::select(&schema, &key, state.direction).unwrap();
        let view = project(&schema, &store, &state).unwrap();
        let records: Vec<&Record> = view.records().collect();
        for pair in records.windows(2) {
            let a = comparator.sort_value(pair[0]).unwrap();
            let b = comparator.sort_value(pair[1]).unwrap();
            prop_assert_ne!(comparator.compare_values(a, b), std::cmp::Ordering::Greater);
        }
    }

    /// Projection is a pure function: identical inputs give structurally
    /// equal output.
    #[test]
    fn projection_is_idempotent(store in arb_store(), state in arb_state()) {
        let schema = schema();
        let first = project(&schema, &store, &state).unwrap();
        let second = project(&schema, &store, &state).unwrap();
        prop_assert_eq!(first, second);
    }

    /// With no search, no filters, and no sort key, projection returns the
    /// store's records exactly, in their original relative order.
    #[test]
    fn identity_projection_is_exact(store in arb_store()) {
        let schema = schema();
        let view = project(&schema, &store, &ViewState::new()).unwrap();
        let DerivedView::Flat(flat) = view else {
            return Err(TestCaseError::fail("expected flat view"));
        };
        prop_assert_eq!(flat, store);
    }

    /// Group keys appear in first-seen order of the input sequence.
    #[test]
    fn group_order_is_first_seen(store in arb_store()) {
        let schema = schema();
        let state = ViewState::new().with_group_by(name("category"));
        let view = project(&schema, &store, &state).unwrap();
        let DerivedView::Grouped(groups) = view else {
            return Err(TestCaseError::fail("expected grouped view"));
        };

        let mut seen = Vec::new();
        for record in &store {
            let category = record
                .cell(&name("category"))
                .and_then(|v| v.as_text())
                .unwrap();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        let group_keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        prop_assert_eq!(group_keys, seen);
    }
}
