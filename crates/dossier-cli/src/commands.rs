//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use dossier_cli::render::{RenderOptions, render_fields, render_view};
use dossier_model::{Direction, FieldName, RecordId, ViewMode, ViewState};
use dossier_store::{RecordStore, catalog, load_csv};

use crate::cli::{CatalogArg, FieldsArgs, ModeArg, ViewArgs};

pub fn run_view(args: &ViewArgs, opts: RenderOptions) -> Result<String> {
    let store = load_store(args.catalog, args.csv.as_deref())?;
    let state = build_state(args)?;
    let view = store
        .project(&state)
        .with_context(|| format!("project catalog {}", store.schema().name()))?;
    info!(
        catalog = store.schema().name(),
        total = store.len(),
        matched = view.len(),
        "projected view"
    );
    Ok(render_view(&store, &view, &state, opts))
}

pub fn run_fields(args: &FieldsArgs, opts: RenderOptions) -> Result<String> {
    let store = load_store(args.catalog, args.csv.as_deref())?;
    Ok(render_fields(&store, opts))
}

fn load_store(catalog: CatalogArg, csv: Option<&Path>) -> Result<RecordStore> {
    let schema = match catalog {
        CatalogArg::Documents => catalog::document_schema()?,
        CatalogArg::Timeline => catalog::timeline_schema()?,
        CatalogArg::Affiliations => catalog::affiliation_schema()?,
    };
    match csv {
        Some(path) => {
            load_csv(path, schema).with_context(|| format!("load catalog {}", path.display()))
        }
        None => Ok(match catalog {
            CatalogArg::Documents => catalog::document_library()?,
            CatalogArg::Timeline => catalog::timeline()?,
            CatalogArg::Affiliations => catalog::affiliations()?,
        }),
    }
}

/// Map the view flags onto a `ViewState`. Field names are validated here for
/// shape only; whether a dimension exists in the schema is checked by the
/// projection, which fails loudly on unknown keys.
fn build_state(args: &ViewArgs) -> Result<ViewState> {
    let mut state = ViewState::new();
    if let Some(term) = &args.search {
        state.set_search(term.clone());
    }
    for raw in &args.filters {
        let Some((dimension, value)) = raw.split_once('=') else {
            bail!("invalid --filter {raw:?}: expected DIM=VALUE");
        };
        state.set_filter(FieldName::new(dimension)?, value);
    }
    if let Some(key) = &args.sort {
        state.sort_key = Some(FieldName::new(key.as_str())?);
        state.direction = if args.desc {
            Direction::Descending
        } else {
            Direction::Ascending
        };
    } else if args.desc {
        bail!("--desc requires --sort");
    }
    if let Some(key) = &args.group_by {
        state.group_by = Some(FieldName::new(key.as_str())?);
    }
    state.view_mode = match args.mode {
        ModeArg::List => ViewMode::List,
        ModeArg::Grid => ViewMode::Grid,
    };
    if let Some(id) = &args.expand {
        state.expanded = Some(RecordId::new(id.as_str())?);
    }
    Ok(state)
}
