pub mod buffer;
pub mod event;
pub mod layout;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers, MouseButton, convert_event};
pub use layout::Rect;
pub use terminal::Terminal;
pub use text::{Line, Span};
pub use theme::{Theme, ThemeMode};
pub use types::*;
