use log::{trace, warn};
use serde::Serialize;
use serde_json::Value;

use crate::column::Column;
use crate::path::{display_value, resolve_path};
use crate::view::{Body, CellView, EmptyState, HeaderCell, RowKey, RowView, TableStyle, TableView};
use crm_ui::Line;

/// Skeleton rows shown while loading unless overridden.
pub const DEFAULT_LOADING_ROW_COUNT: usize = 5;

/// A table over caller-typed records.
///
/// Borrows its columns and data for the duration of a render and never
/// mutates them. Build one per frame; [`render`](Self::render) is a pure
/// function of the builder's inputs.
pub struct DataTable<'a, T> {
    columns: &'a [Column<T>],
    data: &'a [T],
    loading: bool,
    loading_row_count: usize,
    empty_state: Option<EmptyState>,
    caption: Option<String>,
    on_row_click: Option<Box<dyn Fn(&T) + 'a>>,
    style: TableStyle,
}

impl<'a, T: Serialize> DataTable<'a, T> {
    pub fn new(columns: &'a [Column<T>], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            loading: false,
            loading_row_count: DEFAULT_LOADING_ROW_COUNT,
            empty_state: None,
            caption: None,
            on_row_click: None,
            style: TableStyle::default(),
        }
    }

    /// While loading, `data` is ignored and skeleton rows are rendered.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading_row_count(mut self, count: usize) -> Self {
        self.loading_row_count = count;
        self
    }

    pub fn empty_state(mut self, state: EmptyState) -> Self {
        self.empty_state = Some(state);
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Make rows activatable. The handler receives the full record.
    pub fn on_row_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&T) + 'a,
    {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.on_row_click.is_some()
    }

    pub fn render(&self) -> TableView {
        if self.loading {
            return TableView {
                caption: self.caption.clone(),
                style: self.style,
                body: Body::Loading {
                    header: self.header(),
                    rows: self.skeleton_rows(),
                },
            };
        }

        if self.data.is_empty() {
            return TableView {
                caption: None,
                style: self.style,
                body: Body::Empty(self.empty_state.clone().unwrap_or_default()),
            };
        }

        let interactive = self.is_interactive();
        let rows = self
            .data
            .iter()
            .enumerate()
            .map(|(index, record)| self.render_row(index, record, interactive))
            .collect();

        TableView {
            caption: self.caption.clone(),
            style: self.style,
            body: Body::Populated {
                header: self.header(),
                rows,
            },
        }
    }

    /// Activate the row at `index`. Returns whether a handler ran.
    ///
    /// Nothing happens while loading, without a handler, or for an index
    /// past the end of the data.
    pub fn activate(&self, index: usize) -> bool {
        if self.loading {
            return false;
        }
        let (Some(handler), Some(record)) = (&self.on_row_click, self.data.get(index)) else {
            return false;
        };
        trace!("activating row {}", index);
        handler(record);
        true
    }

    fn header(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| {
                let label = if self.style.uppercase_headers {
                    column.header().to_uppercase()
                } else {
                    column.header().to_string()
                };
                HeaderCell {
                    label,
                    align: column.align(),
                    width: column.width(),
                }
            })
            .collect()
    }

    fn skeleton_rows(&self) -> Vec<RowView> {
        (0..self.loading_row_count)
            .map(|index| RowView {
                key: RowKey::Index(index),
                index,
                cells: vec![CellView::Skeleton; self.columns.len()],
                activatable: false,
            })
            .collect()
    }

    fn render_row(&self, index: usize, record: &T, interactive: bool) -> RowView {
        let value = serialize_record(record, index);
        let cells = self
            .columns
            .iter()
            .map(|column| match column.renderer() {
                Some(render) => CellView::Content(render(record, index)),
                None => {
                    let resolved = resolve_path(&value, column.accessor());
                    if resolved.is_none() {
                        trace!("row {}: no value at '{}'", index, column.accessor());
                    }
                    CellView::Content(Line::raw(display_value(resolved)))
                }
            })
            .collect();

        RowView {
            key: row_key(&value, index),
            index,
            cells,
            activatable: interactive,
        }
    }
}

fn serialize_record<T: Serialize>(record: &T, index: usize) -> Value {
    serde_json::to_value(record).unwrap_or_else(|err| {
        warn!("row {}: record could not be serialized: {}", index, err);
        Value::Null
    })
}

fn row_key(value: &Value, index: usize) -> RowKey {
    match value.get("id") {
        Some(Value::String(id)) if !id.is_empty() => RowKey::Id(id.clone()),
        Some(Value::Number(id)) => RowKey::Id(id.to_string()),
        _ => RowKey::Index(index),
    }
}
