use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Styling applied to a run of text. Unset colors inherit from whatever is
/// already painted underneath.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            text_style: TextStyle::new(),
        }
    }

    pub const fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Layer `other` on top of `self`: set fields of `other` win.
    pub fn patch(self, other: Style) -> Style {
        Style {
            foreground: other.foreground.or(self.foreground),
            background: other.background.or(self.background),
            text_style: TextStyle {
                bold: self.text_style.bold || other.text_style.bold,
                italic: self.text_style.italic || other.text_style.italic,
                underline: self.text_style.underline || other.text_style.underline,
                dim: self.text_style.dim || other.text_style.dim,
            },
        }
    }
}
