pub(crate) mod color;
mod style;

pub use color::{Color, Rgb, Token, Tone};
pub use style::{Style, TextAlign, TextStyle};
