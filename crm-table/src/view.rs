//! The value a table renders to.

use crm_ui::{Line, TextAlign};

use crate::column::ColumnWidth;

/// Stable identity of a rendered row: the record's `id` field when it has
/// one, its position otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub label: String,
    pub align: TextAlign,
    pub width: ColumnWidth,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellView {
    /// Placeholder shown while content is pending.
    Skeleton,
    Content(Line),
}

impl CellView {
    /// Plain text of the cell; skeletons have none.
    pub fn text(&self) -> String {
        match self {
            CellView::Skeleton => String::new(),
            CellView::Content(line) => line.text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub key: RowKey,
    /// Index into the data slice, or the skeleton position while loading.
    pub index: usize,
    pub cells: Vec<CellView>,
    /// Whether activating this row reaches a handler.
    pub activatable: bool,
}

/// Placeholder shown when there is nothing to list.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyState {
    pub icon: Option<char>,
    pub title: Line,
    pub message: Option<Line>,
}

impl EmptyState {
    pub fn new(title: impl Into<Line>) -> Self {
        Self {
            icon: None,
            title: title.into(),
            message: None,
        }
    }

    pub fn icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn message(mut self, message: impl Into<Line>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Default for EmptyState {
    fn default() -> Self {
        EmptyState::new("No Data Available")
            .icon('∅')
            .message("There is no data to display at the moment.")
    }
}

/// Pass-through styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    pub uppercase_headers: bool,
    pub striped: bool,
    pub borders: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            uppercase_headers: true,
            striped: false,
            borders: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Loading {
        header: Vec<HeaderCell>,
        rows: Vec<RowView>,
    },
    Empty(EmptyState),
    Populated {
        header: Vec<HeaderCell>,
        rows: Vec<RowView>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub caption: Option<String>,
    pub style: TableStyle,
    pub body: Body,
}

impl TableView {
    pub fn is_loading(&self) -> bool {
        matches!(self.body, Body::Loading { .. })
    }

    pub fn empty_state(&self) -> Option<&EmptyState> {
        match &self.body {
            Body::Empty(state) => Some(state),
            _ => None,
        }
    }

    /// Header cells; the empty state has none.
    pub fn header(&self) -> &[HeaderCell] {
        match &self.body {
            Body::Loading { header, .. } | Body::Populated { header, .. } => header,
            Body::Empty(_) => &[],
        }
    }

    /// Body rows, skeletons included.
    pub fn rows(&self) -> &[RowView] {
        match &self.body {
            Body::Loading { rows, .. } | Body::Populated { rows, .. } => rows,
            Body::Empty(_) => &[],
        }
    }
}
