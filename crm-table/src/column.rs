use std::fmt;

use crm_ui::{Line, TextAlign};

/// Custom cell renderer: `(record, row_index) -> Line`.
pub type CellRenderer<T> = Box<dyn Fn(&T, usize) -> Line>;

/// How wide a column is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in cells.
    Fixed(u16),
    /// Share of the remaining width, by weight.
    Flex(u16),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

/// How one column projects a record into a cell.
///
/// Without a renderer the cell shows the value found at `accessor`, a field
/// name or dotted path into the serialized record.
pub struct Column<T> {
    accessor: String,
    header: String,
    render: Option<CellRenderer<T>>,
    numeric: bool,
    width: ColumnWidth,
}

impl<T> Column<T> {
    pub fn new(accessor: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            header: header.into(),
            render: None,
            numeric: false,
            width: ColumnWidth::default(),
        }
    }

    /// Replace default stringification with a custom renderer.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&T, usize) -> Line + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    /// Right-align this column.
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    pub fn accessor(&self) -> &str {
        &self.accessor
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    pub fn width(&self) -> ColumnWidth {
        self.width
    }

    pub fn align(&self) -> TextAlign {
        if self.numeric {
            TextAlign::Right
        } else {
            TextAlign::Left
        }
    }

    pub(crate) fn renderer(&self) -> Option<&CellRenderer<T>> {
        self.render.as_ref()
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("accessor", &self.accessor)
            .field("header", &self.header)
            .field("custom_cell", &self.render.is_some())
            .field("numeric", &self.numeric)
            .field("width", &self.width)
            .finish()
    }
}
