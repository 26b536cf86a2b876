//! End-to-end scenarios over the built-in catalogs.

use dossier_model::{Direction, FieldName, FieldValue, ViewState};
use dossier_store::catalog::{affiliations, document_library, timeline};
use dossier_view::DerivedView;

fn name(value: &str) -> FieldName {
    FieldName::new(value).unwrap()
}

#[test]
fn health_category_yields_two_documents() {
    let store = document_library().unwrap();
    let state = ViewState::new().with_filter(name("category"), "Health");
    let view = store.project(&state).unwrap();
    let ids: Vec<&str> = view.records().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);
}

#[test]
fn satellite_search_yields_one_document() {
    let store = document_library().unwrap();
    let state = ViewState::new().with_search("satellite");
    let view = store.project(&state).unwrap();
    let ids: Vec<&str> = view.records().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, vec!["7"]);
}

#[test]
fn downloads_descending_orders_unfiltered_store() {
    let store = document_library().unwrap();
    let state = ViewState::new().with_sort(name("downloads"), Direction::Descending);
    let view = store.project(&state).unwrap();
    let ids: Vec<&str> = view.records().map(|r| r.id().as_str()).collect();
    assert_eq!(view.len(), 8);
    assert_eq!(
        ids,
        vec!["8", "5", "4", "6", "1", "2", "7", "3"],
        "descending download counts: 4521, 3156, 2341, 1834, 1247, 892, 723, 567"
    );
}

#[test]
fn war_crimes_filter_keeps_timeline_order() {
    let store = timeline().unwrap();
    let state = ViewState::new().with_filter(name("category"), "War Crimes");
    let view = store.project(&state).unwrap();
    let slugs: Vec<&str> = view.records().map(|r| r.id().as_str()).collect();
    assert_eq!(
        slugs,
        vec![
            "abu-ghraib",
            "iraq-war-lies",
            "torture-program",
            "operation-condor",
            "chile-coup",
            "vietnam-war-crimes",
            "gulf-of-tonkin",
            "iran-coup",
        ]
    );
    for record in view.records() {
        assert_eq!(
            record.cell(&name("category")),
            Some(&FieldValue::text("War Crimes"))
        );
    }
}

#[test]
fn affiliations_group_by_kind_in_first_seen_order() {
    let store = affiliations().unwrap();
    let state = ViewState::new().with_group_by(name("kind"));
    let view = store.project(&state).unwrap();
    let DerivedView::Grouped(groups) = view else {
        panic!("expected grouped view");
    };
    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["agency", "corporation", "document", "individual", "organization"]
    );
    // Agencies keep their own first-seen order within the group.
    let agency_ids: Vec<&str> = groups[0].records.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(agency_ids, vec!["1", "3", "7"]);
}

#[test]
fn unfiltered_documents_view_is_the_store() {
    let store = document_library().unwrap();
    let view = store.project(&ViewState::new()).unwrap();
    let DerivedView::Flat(flat) = view else {
        panic!("expected flat view");
    };
    assert_eq!(flat.as_slice(), store.records());
}
