//! Generic data table.
//!
//! A [`DataTable`] turns a column schema and a slice of caller-typed records
//! into a [`TableView`]: one of three exclusive display states (loading,
//! empty, populated) computed fresh on every call. The view can then be
//! painted into a [`crm_ui::Buffer`] with [`draw`].
//!
//! ```ignore
//! let columns = vec![
//!     Column::new("name", "Account Name"),
//!     Column::new("address.city", "City"),
//!     Column::new("revenue", "Revenue").numeric(),
//! ];
//! let view = DataTable::new(&columns, &accounts)
//!     .caption("Accounts")
//!     .on_row_click(|account: &Account| open(account))
//!     .render();
//! ```

mod column;
mod draw;
mod path;
mod table;
mod view;

pub use column::{CellRenderer, Column, ColumnWidth};
pub use draw::{DrawState, DrawnTable, column_widths, draw, scroll_offset_for};
pub use path::{display_value, resolve_path};
pub use table::{DEFAULT_LOADING_ROW_COUNT, DataTable};
pub use view::{Body, CellView, EmptyState, HeaderCell, RowKey, RowView, TableStyle, TableView};
