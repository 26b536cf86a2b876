//! Terminal rendering of derived views with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dossier_model::{
    AffiliationKind, Classification, FieldKind, FieldSpec, Record, Severity, ViewMode, ViewState,
};
use dossier_store::RecordStore;
use dossier_view::DerivedView;

/// Rendering options resolved from the CLI color choice.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: bool,
}

impl RenderOptions {
    fn header(&self, label: &str) -> Cell {
        if self.color {
            Cell::new(label)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(label)
        }
    }

    fn dim<T: ToString>(&self, value: T) -> Cell {
        if self.color {
            Cell::new(value).fg(Color::DarkGrey)
        } else {
            Cell::new(value)
        }
    }
}

/// Render a derived view for the terminal.
///
/// An empty view renders an explicit no-results line, never an empty table.
pub fn render_view(
    store: &RecordStore,
    view: &DerivedView,
    state: &ViewState,
    opts: RenderOptions,
) -> String {
    if view.is_empty() {
        return "No matching records.\n".to_string();
    }

    let columns = visible_columns(store, state.view_mode);
    let mut out = String::new();
    match view {
        DerivedView::Flat(records) => {
            out.push_str(&record_table(records, &columns, state, opts).to_string());
            out.push('\n');
        }
        DerivedView::Grouped(groups) => {
            for group in groups {
                out.push_str(&format!(
                    "{} ({})\n",
                    group_heading(&group.key),
                    group.records.len()
                ));
                out.push_str(&record_table(&group.records, &columns, state, opts).to_string());
                out.push('\n');
            }
        }
    }

    if let Some(id) = &state.expanded {
        match view.records().find(|r| r.id() == id) {
            Some(record) => {
                out.push('\n');
                out.push_str(&detail_table(record, store, opts).to_string());
                out.push('\n');
            }
            None => {
                out.push_str(&format!("\nRecord {id} is not in the current view.\n"));
            }
        }
    }

    out
}

/// Render a catalog's schema and the values its filter controls offer.
pub fn render_fields(store: &RecordStore, opts: RenderOptions) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        opts.header("Field"),
        opts.header("Kind"),
        opts.header("Searchable"),
        opts.header("Values"),
    ]);
    for field in store.schema().fields() {
        let values = if field.kind() == FieldKind::Category {
            // Construction already proved the field is categorical.
            match store.distinct_values(field.name()) {
                Ok(values) => values.join(", "),
                Err(_) => String::new(),
            }
        } else {
            String::new()
        };
        table.add_row(vec![
            Cell::new(field.name().as_str()),
            Cell::new(kind_label(field.kind())),
            if field.is_searchable() {
                Cell::new("yes")
            } else {
                opts.dim("-")
            },
            if values.is_empty() {
                opts.dim("-")
            } else {
                Cell::new(values)
            },
        ]);
    }
    format!("Catalog: {}\n{table}\n", store.schema().name())
}

/// Columns shown for a view mode. List mode shows the full record; grid
/// mode keeps the card-like subset (searchable text plus categories).
fn visible_columns(store: &RecordStore, mode: ViewMode) -> Vec<FieldSpec> {
    store
        .schema()
        .fields()
        .iter()
        .filter(|field| match mode {
            ViewMode::List => true,
            ViewMode::Grid => {
                field.is_searchable() || field.kind() == FieldKind::Category
            }
        })
        .cloned()
        .collect()
}

fn record_table(
    records: &[Record],
    columns: &[FieldSpec],
    state: &ViewState,
    opts: RenderOptions,
) -> Table {
    let mut table = Table::new();
    let preset = match state.view_mode {
        ViewMode::List => UTF8_FULL,
        ViewMode::Grid => UTF8_FULL_CONDENSED,
    };
    table
        .load_preset(preset)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);

    let mut header = vec![opts.header("Id")];
    header.extend(columns.iter().map(|c| opts.header(c.name().as_str())));
    table.set_header(header);

    for (index, column) in columns.iter().enumerate() {
        if column.kind() == FieldKind::Number
            && let Some(col) = table.column_mut(index + 1)
        {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for record in records {
        let mut row = vec![Cell::new(record.id().as_str())];
        for column in columns {
            row.push(value_cell(record, column, opts));
        }
        table.add_row(row);
    }
    table
}

fn detail_table(record: &Record, store: &RecordStore, opts: RenderOptions) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        opts.header("Field"),
        opts.header(&format!("Record {}", record.id())),
    ]);
    for field in store.schema().fields() {
        let value = record
            .cell(field.name())
            .map_or_else(|| "-".to_string(), ToString::to_string);
        table.add_row(vec![
            Cell::new(field.name().as_str()),
            if value == "-" {
                opts.dim(value)
            } else {
                Cell::new(value)
            },
        ]);
    }
    table
}

fn value_cell(record: &Record, column: &FieldSpec, opts: RenderOptions) -> Cell {
    let Some(value) = record.cell(column.name()) else {
        return opts.dim("-");
    };
    if value.is_missing() {
        return opts.dim("-");
    }
    let text = value.to_string();
    if !opts.color {
        return Cell::new(text);
    }
    match column.name().as_str() {
        "classification" => match text.parse::<Classification>() {
            Ok(Classification::Public) => Cell::new(text).fg(Color::Green),
            Ok(Classification::Restricted) => Cell::new(text).fg(Color::Yellow),
            Ok(Classification::Sensitive) => Cell::new(text).fg(Color::Red),
            Err(_) => Cell::new(text),
        },
        "severity" => match text.parse::<Severity>() {
            Ok(Severity::Critical) => Cell::new(text).fg(Color::Red),
            Ok(Severity::High) => Cell::new(text).fg(Color::DarkYellow),
            Ok(Severity::Medium) => Cell::new(text).fg(Color::Yellow),
            Ok(Severity::Low) => Cell::new(text).fg(Color::Green),
            Err(_) => Cell::new(text),
        },
        _ => Cell::new(text),
    }
}

/// Grouped sidebars show the human heading for known affiliation kinds;
/// any other group key is shown verbatim.
fn group_heading(key: &str) -> String {
    key.parse::<AffiliationKind>()
        .map_or_else(|_| key.to_string(), |kind| kind.label().to_string())
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        FieldKind::Category => "category",
        FieldKind::Flag => "flag",
    }
}
